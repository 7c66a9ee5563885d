//! 将一条日志条目的原始行组装为事件
//!
//! 条目结构：若干 `#` 头部行，随后是零或多条指令行，最后是 SQL 语句。
//! 语句遇到日志轮转标记行（以 `started with:` 结尾）时截止。

use crate::slowlog::directive::Directive;
use crate::slowlog::header;
use crate::slowlog::types::{Event, KEY_STATEMENT};

/// 条目边界标记
pub const BOUNDARY_MARKER: char = '#';

/// 日志轮转后服务端重新打印的横幅以此结尾
const ROLLOVER_SUFFIX: &str = "started with:";

/// 去掉行尾的 `\r\n`
pub(crate) fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// 是否为头部行
#[inline]
#[must_use]
pub fn is_header_line(line: &str) -> bool {
    line.starts_with(BOUNDARY_MARKER)
}

/// 是否为日志轮转标记行
#[inline]
#[must_use]
pub fn is_rollover_line(line: &str) -> bool {
    strip_terminator(line).ends_with(ROLLOVER_SUFFIX)
}

/// 将一条条目的原始行组装为事件
///
/// 永不失败：无法识别的头部属性与指令被忽略，`Statement` 总是存在（可能为空）。
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Event {
    let mut event = Event::new();
    let mut rest = lines.iter().map(AsRef::as_ref).peekable();

    while let Some(line) = rest.next_if(|l| is_header_line(l)) {
        header::apply_header_line(strip_terminator(line), &mut event);
    }

    while let Some(directive) = rest.peek().and_then(|l| Directive::parse(l)) {
        directive.apply_to(&mut event);
        rest.next();
    }

    let statement = rest
        .take_while(|l| !is_rollover_line(l))
        .map(strip_terminator)
        .collect::<Vec<_>>()
        .join("\n");
    event.insert(KEY_STATEMENT, statement.trim());

    event
}
