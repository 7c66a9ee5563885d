//! 事件导出模块
//!
//! 解析产出的事件通过 [`SyncExporter`] 写出，目前提供 JSON Lines 格式。

pub mod json;

pub use json::JsonLinesExporter;

use crate::error::Result;
use crate::slowlog::types::Event;

/// 同步事件导出器的统一接口
pub trait SyncExporter {
    /// 导出器名称
    fn name(&self) -> &str;

    /// 导出单条事件
    fn export_record(&mut self, record: &Event) -> Result<()>;

    /// 批量导出事件
    fn export_batch(&mut self, records: &[Event]) -> Result<()> {
        for record in records {
            self.export_record(record)?;
        }
        Ok(())
    }

    /// 完成导出，刷新缓冲
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    /// 已成功写出的事件数
    fn exported_records(&self) -> usize;
}
