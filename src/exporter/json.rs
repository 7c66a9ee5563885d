//! JSON Lines 导出器：每条事件一行紧凑 JSON 对象

use super::SyncExporter;
use crate::error::Result;
use crate::slowlog::types::Event;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// JSON Lines 导出器
pub struct JsonLinesExporter<W: Write> {
    writer: BufWriter<W>,
    exported: usize,
}

impl<W: Write> JsonLinesExporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: BufWriter::new(writer), exported: 0 }
    }

    /// 刷新缓冲并取回底层写入器
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer.into_inner().map_err(io::IntoInnerError::into_error)?)
    }
}

impl JsonLinesExporter<File> {
    /// 写到文件；`append` 为假时覆盖已有内容
    pub fn to_file<P: AsRef<Path>>(path: P, append: bool) -> Result<Self> {
        Ok(Self::new(open_output_file(path, append)?))
    }
}

/// 打开输出文件，必要时创建父目录；`append` 为假时清空已有内容
pub fn open_output_file<P: AsRef<Path>>(path: P, append: bool) -> Result<File> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    Ok(file)
}

impl<W: Write> SyncExporter for JsonLinesExporter<W> {
    fn name(&self) -> &str {
        "JSON Lines"
    }

    fn export_record(&mut self, record: &Event) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.exported += 1;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;

        #[cfg(feature = "logging")]
        tracing::debug!("JSON Lines 导出完成，共写出 {} 条事件", self.exported);

        Ok(())
    }

    fn exported_records(&self) -> usize {
        self.exported
    }
}
