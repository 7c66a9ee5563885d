//! 头部注释行的属性提取
//!
//! 头部行以 `#` 开头，例如：
//!
//! ```text
//! # Time: 2017-12-24T02:42:00.126000Z
//! # User@Host: rdsadmin[rdsadmin] @ localhost [127.0.0.1]  Id:     3
//! # Query_time: 0.020363  Lock_time: 0.018450 Rows_sent: 0  Rows_examined: 1
//! ```
//!
//! `User@Host` 行有专门的解析，其它行按 `name: value` 扫描，
//! 只保留属性类型表中登记过的属性。

use crate::slowlog::registry;
use crate::slowlog::types::{Event, KEY_HOST, KEY_IP, KEY_USER};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `name: value`，值中不含空白
    static ref ATTRIBUTE_RE: Regex = Regex::new(r"\b(\w+):\s+(\S+)\b").unwrap();

    /// `User@Host: user[user] @ host [ip]  Id: n`，主机和 IP 都可能为空
    static ref USER_HOST_RE: Regex = Regex::new(
        r"^#\s*User@Host:\s*([^\[\s]*)\s*(?:\[([^\]]*)\])?\s*@\s*([^\[\s]*)\s*(?:\[([^\]]*)\])?"
    )
    .unwrap();
}

/// `User@Host` 行解析结果，空值一律为 `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserHost {
    pub user: Option<String>,
    pub host: Option<String>,
    pub ip: Option<String>,
}

impl UserHost {
    /// 写入事件；缺失的字段不写
    pub fn apply_to(self, event: &mut Event) {
        if let Some(user) = self.user {
            event.insert(KEY_USER, user);
        }
        if let Some(host) = self.host {
            event.insert(KEY_HOST, host);
        }
        if let Some(ip) = self.ip {
            event.insert(KEY_IP, ip);
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// 解析 `User@Host` 行；不是该格式时返回 `None`
///
/// 主机名为空时退回使用 IP。
#[must_use]
pub fn parse_user_host_line(line: &str) -> Option<UserHost> {
    let caps = USER_HOST_RE.captures(line)?;

    let user = caps.get(1).and_then(|m| non_empty(m.as_str()));
    let ip = caps.get(4).and_then(|m| non_empty(m.as_str()));
    let host = caps
        .get(3)
        .and_then(|m| non_empty(m.as_str()))
        .or_else(|| ip.clone());

    Some(UserHost { user, host, ip })
}

/// 扫描一行中所有 `name: value` 片段，不做类型过滤
///
/// 值为空的属性（如 `Schema:   Last_errno: 0`）整个跳过，后面的属性名不会被当作它的值。
pub fn attribute_tokens(line: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(caps) = ATTRIBUTE_RE.captures_at(line, pos) {
            let (name, value) = (caps.get(1)?, caps.get(2)?);
            if line[value.end()..].starts_with(':') {
                // 值其实是下一个属性名，从它开始重新匹配
                pos = value.start();
                continue;
            }
            pos = caps.get(0)?.end();
            return Some((name.as_str(), value.as_str()));
        }
        None
    })
}

/// 提取一行中已登记的属性写入事件，返回写入的属性个数
///
/// 未登记的属性直接忽略；值转换失败的属性被丢弃，不影响同一行的其它属性。
pub fn extract_attributes(line: &str, event: &mut Event) -> usize {
    let mut inserted = 0;
    for (name, raw) in attribute_tokens(line) {
        let Some(kind) = registry::kind_of(name) else {
            continue;
        };
        match registry::coerce(kind, raw) {
            Some(value) => {
                event.insert(name, value);
                inserted += 1;
            }
            None => {
                #[cfg(feature = "logging")]
                tracing::trace!(attribute = name, raw, ?kind, "属性值转换失败，已丢弃");
            }
        }
    }
    inserted
}

/// 处理一行头部：`User@Host` 行走专门解析，其它行扫描属性
pub fn apply_header_line(line: &str, event: &mut Event) {
    if let Some(user_host) = parse_user_host_line(line) {
        user_host.apply_to(event);
        return;
    }
    extract_attributes(line, event);
}
