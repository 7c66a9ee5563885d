//! 头部之后、语句之前的指令行：`use <db>;` 与 `SET timestamp=<epoch>;`

use crate::slowlog::types::{Event, KEY_DATABASE, KEY_TIMESTAMP};
use chrono::{DateTime, TimeZone, Utc};

const USE_PREFIX: &str = "use ";
const SET_TIMESTAMP_PREFIX: &str = "SET timestamp=";

/// 识别出的指令；内部值解析失败时为 `None`，对应字段不写入事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Use(Option<String>),
    SetTimestamp(Option<DateTime<Utc>>),
}

impl Directive {
    /// 识别指令行，其它行返回 `None`
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(rest) = line.strip_prefix(USE_PREFIX) {
            return Some(Directive::Use(parse_database(rest)));
        }
        if let Some(rest) = line.strip_prefix(SET_TIMESTAMP_PREFIX) {
            return Some(Directive::SetTimestamp(parse_epoch(rest)));
        }
        None
    }

    pub fn apply_to(self, event: &mut Event) {
        match self {
            Directive::Use(Some(db)) => event.insert(KEY_DATABASE, db),
            Directive::SetTimestamp(Some(ts)) => event.insert(KEY_TIMESTAMP, ts),
            Directive::Use(None) => {
                #[cfg(feature = "logging")]
                tracing::trace!("use 指令缺少数据库名，已忽略");
            }
            Directive::SetTimestamp(None) => {
                #[cfg(feature = "logging")]
                tracing::trace!("SET timestamp 值无法解析，已忽略");
            }
        }
    }
}

/// 取 `;` 之前的部分
fn until_semicolon(rest: &str) -> &str {
    rest.split(';').next().unwrap_or(rest).trim()
}

fn parse_database(rest: &str) -> Option<String> {
    let db = until_semicolon(rest).trim_matches('`');
    if db.is_empty() { None } else { Some(db.to_string()) }
}

fn parse_epoch(rest: &str) -> Option<DateTime<Utc>> {
    let secs = until_semicolon(rest).parse::<i64>().ok()?;
    Utc.timestamp_opt(secs, 0).single()
}
