//! 流式解析驱动
//!
//! 从任意 [`BufRead`] 逐行读取字节，按有损方式解码后交给 [`SlowlogParser`]，
//! 每产出一条事件调用一次回调，读到末尾时自动 flush。

use crate::error::Result;
use crate::slowlog::{parser::SlowlogParser, types::Event};
use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// 一次流式解析的统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// 读取的行数
    pub lines: usize,
    /// 产出的事件数
    pub events: usize,
    /// 含无效 UTF-8 字节、已按有损方式解码的行数
    pub invalid_utf8_lines: usize,
}

/// 流式解析：逐行读取 `reader`，每产出一条事件调用一次 `hook`，读到末尾时自动 flush
///
/// 无效 UTF-8 不会中断解析，按有损方式解码后继续。`hook` 返回错误时立即停止。
pub fn parse_reader<R, F>(mut reader: R, mut hook: F) -> Result<ParseStats>
where
    R: BufRead,
    F: FnMut(Event) -> Result<()>,
{
    let mut parser = SlowlogParser::new();
    let mut stats = ParseStats::default();
    let mut buf = Vec::with_capacity(1024);

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines += 1;

        let line = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(s) => Cow::Borrowed(s),
            Cow::Owned(s) => {
                stats.invalid_utf8_lines += 1;
                #[cfg(feature = "logging")]
                tracing::warn!(line = stats.lines, "发现无效 UTF-8 字节序列，已按有损方式解码");
                Cow::Owned(s)
            }
        };

        if let Some(event) = parser.consume_line(&line) {
            stats.events += 1;
            hook(event)?;
        }
    }

    if let Some(event) = parser.flush() {
        stats.events += 1;
        hook(event)?;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        lines = stats.lines,
        events = stats.events,
        invalid_utf8_lines = stats.invalid_utf8_lines,
        "流式解析完成"
    );
    Ok(stats)
}

/// 解析慢日志文件
pub fn parse_file<P, F>(path: P, hook: F) -> Result<ParseStats>
where
    P: AsRef<Path>,
    F: FnMut(Event) -> Result<()>,
{
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("开始解析文件: {}", path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), hook)
}

/// 解析内存中的整段日志文本，返回全部事件
#[must_use]
pub fn parse_str(text: &str) -> Vec<Event> {
    let mut parser = SlowlogParser::new();
    let mut events: Vec<Event> = text
        .split_inclusive('\n')
        .filter_map(|line| parser.consume_line(line))
        .collect();
    events.extend(parser.flush());
    events
}
