//! 头部属性类型表
//!
//! 记录已知头部属性名及其值类型。表中没有的属性名会被忽略；
//! 支持新的日志属性只需在这里增加一行。

use crate::slowlog::types::{AttributeKind, AttributeValue};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref ATTRIBUTE_KINDS: HashMap<&'static str, AttributeKind> = {
        use AttributeKind::{Bool, Float, Int, Str};
        HashMap::from([
            ("Thread_id", Int),
            ("Schema", Str),
            ("Last_errno", Int),
            ("Killed", Int),
            ("Query_time", Float),
            ("Lock_time", Float),
            ("Rows_sent", Int),
            ("Rows_examined", Int),
            ("Rows_affected", Int),
            ("Rows_read", Int),
            ("Bytes_sent", Int),
            ("Tmp_tables", Int),
            ("Tmp_disk_tables", Int),
            ("Tmp_table_sizes", Int),
            ("InnoDB_trx_id", Str),
            ("QC_Hit", Bool),
            ("Full_scan", Bool),
            ("Full_join", Bool),
            ("Tmp_table", Bool),
            ("Tmp_table_on_disk", Bool),
            ("Filesort", Bool),
            ("Filesort_on_disk", Bool),
            ("Merge_passes", Int),
            ("InnoDB_IO_r_ops", Int),
            ("InnoDB_IO_r_bytes", Int),
            ("InnoDB_IO_r_wait", Float),
            ("InnoDB_rec_lock_wait", Float),
            ("InnoDB_queue_wait", Float),
            ("InnoDB_pages_distinct", Int),
        ])
    };
}

/// 查询属性的值类型，未登记的属性返回 `None`
#[must_use]
pub fn kind_of(name: &str) -> Option<AttributeKind> {
    ATTRIBUTE_KINDS.get(name).copied()
}

/// 按值类型转换原始文本，转换失败返回 `None`
#[must_use]
pub fn coerce(kind: AttributeKind, raw: &str) -> Option<AttributeValue> {
    match kind {
        AttributeKind::Str => Some(AttributeValue::Str(raw.to_string())),
        AttributeKind::Int => raw.parse::<i64>().ok().map(AttributeValue::Int),
        // NaN/inf 无法表示为 JSON 数字
        AttributeKind::Float => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(AttributeValue::Float),
        AttributeKind::Bool => parse_bool(raw).map(AttributeValue::Bool),
    }
}

/// 布尔值的常见字面形式
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
