use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// 用户名字段
pub const KEY_USER: &str = "User";
/// 主机名字段
pub const KEY_HOST: &str = "Host";
/// 客户端 IP 字段
pub const KEY_IP: &str = "IP";
/// `use <db>;` 指令给出的数据库
pub const KEY_DATABASE: &str = "Database";
/// `SET timestamp=<epoch>;` 指令给出的执行时间
pub const KEY_TIMESTAMP: &str = "Timestamp";
/// SQL 语句文本，每条事件都有
pub const KEY_STATEMENT: &str = "Statement";

/// 头部属性的值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Float,
    Int,
    Str,
    Bool,
}

/// 事件中的单个属性值
///
/// 序列化为不带标签的 JSON 标量，时间戳为 RFC 3339 字符串。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            AttributeValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Str(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Str(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(t: DateTime<Utc>) -> Self {
        AttributeValue::Timestamp(t)
    }
}

/// 一条慢查询日志条目解析出的事件
///
/// 稀疏映射：缺失的属性没有对应的键，不会出现 null。
/// 键按字典序排列，序列化结果稳定。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Event {
    attributes: BTreeMap<String, AttributeValue>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入属性，同名属性会被覆盖
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// SQL 语句文本；由组装器生成的事件总是包含该字段
    pub fn statement(&self) -> &str {
        self.get(KEY_STATEMENT).and_then(AttributeValue::as_str).unwrap_or("")
    }

    pub fn user(&self) -> Option<&str> {
        self.get(KEY_USER).and_then(AttributeValue::as_str)
    }

    pub fn host(&self) -> Option<&str> {
        self.get(KEY_HOST).and_then(AttributeValue::as_str)
    }

    pub fn database(&self) -> Option<&str> {
        self.get(KEY_DATABASE).and_then(AttributeValue::as_str)
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.get(KEY_TIMESTAMP).and_then(AttributeValue::as_timestamp)
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Event {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut event = Event::new();
        for (k, v) in iter {
            event.insert(k, v);
        }
        event
    }
}
