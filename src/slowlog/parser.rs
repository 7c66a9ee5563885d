//! 慢查询日志行分类器 - 条目边界检测
//!
//! 逐行输入，判断每一行是延续当前条目还是开始新条目。
//!
//! ## 状态转移
//!
//! ```text
//!            '#' 行                非 '#' 行
//!   Idle ─────────────▶ Header ─────────────▶ Body ──┐ 非 '#' 行
//!                        ▲  │ '#' 行                 ◀─┘
//!                        │  └──┐
//!                        └─────┘
//!   Body ── '#' 行 ──▶ 产出上一条事件，缓冲区 = [该行]，进入 Header
//! ```
//!
//! 只有两处会产出事件：处于 `Body` 时遇到 `#` 行，以及显式调用 [`SlowlogParser::flush`]。
//!
//! ## 使用示例
//!
//! ```rust
//! use mysql_slowlog::slowlog::SlowlogParser;
//!
//! let log = "# Query_time: 0.5  Lock_time: 0.0 Rows_sent: 1  Rows_examined: 10\n\
//!            SELECT 1;\n";
//!
//! let mut parser = SlowlogParser::new();
//! let mut events = Vec::new();
//! for line in log.split_inclusive('\n') {
//!     if let Some(event) = parser.consume_line(line) {
//!         events.push(event);
//!     }
//! }
//! events.extend(parser.flush());
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].statement(), "SELECT 1;");
//! ```

use crate::slowlog::assembler::{assemble, is_header_line};
use crate::slowlog::types::Event;

/// 分类器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// 尚未见到任何头部行
    #[default]
    Idle,
    /// 正在读取头部注释行
    Header,
    /// 正在读取指令与语句
    Body,
}

/// 慢查询日志解析器
///
/// 每个输入流一个实例，只缓冲当前这一条条目。解析器本身不做 IO，
/// 不能被多个线程同时驱动。
#[derive(Debug, Default)]
pub struct SlowlogParser {
    state: ParserState,
    lines: Vec<String>,
}

impl SlowlogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前状态
    pub fn state(&self) -> ParserState {
        self.state
    }

    /// 当前条目已缓冲的行数
    pub fn buffered_lines(&self) -> usize {
        self.lines.len()
    }

    /// 输入一行（可带行尾换行符），检测到条目边界时返回上一条事件
    pub fn consume_line(&mut self, line: &str) -> Option<Event> {
        if is_header_line(line) {
            if self.state == ParserState::Body {
                let event = assemble(&self.lines);
                self.lines.clear();
                self.lines.push(line.to_string());
                self.state = ParserState::Header;
                #[cfg(feature = "logging")]
                tracing::trace!(fields = event.len(), "检测到新条目，产出上一条事件");
                return Some(event);
            }
            self.lines.push(line.to_string());
            self.state = ParserState::Header;
            return None;
        }

        match self.state {
            ParserState::Header => {
                self.lines.push(line.to_string());
                self.state = ParserState::Body;
            }
            ParserState::Body => self.lines.push(line.to_string()),
            ParserState::Idle => {
                // 第一条头部之前的内容（例如服务端启动横幅）不属于任何条目
                #[cfg(feature = "logging")]
                tracing::trace!(line = line.trim_end(), "首个条目之前的行，已跳过");
            }
        }
        None
    }

    /// 输入结束时调用：若最后一条条目已有语句部分，则产出该事件
    ///
    /// 仅有头部、尚无语句的残缺条目不会产出事件。
    pub fn flush(&mut self) -> Option<Event> {
        if self.state != ParserState::Body {
            return None;
        }
        let event = assemble(&self.lines);
        self.lines.clear();
        self.state = ParserState::Idle;
        #[cfg(feature = "logging")]
        tracing::trace!(fields = event.len(), "flush 产出最后一条事件");
        Some(event)
    }
}
