//! 进程级流程：打开输入，驱动解析并把事件交给导出器
//!
//! 命令行程序走 [`run_input`]：读文件或标准输入，事件一律写到调用方给的写入器。
//! [`run`] 供库调用方按 [`Config`] 指定输入输出文件。

use crate::config::Config;
use crate::error::Result;
use crate::exporter::json::open_output_file;
use crate::exporter::{JsonLinesExporter, SyncExporter};
use crate::slowlog::{ParseStats, parse_reader};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// 一次运行的汇总
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub parse: ParseStats,
    /// 导出器写出的事件数
    pub exported: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// 每秒产出的事件数，耗时为零时为 0
    pub fn events_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { self.parse.events as f64 / secs } else { 0.0 }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "读取 {} 行，产出 {} 条事件，写出 {} 条",
            self.parse.lines, self.parse.events, self.exported
        )?;
        if self.parse.invalid_utf8_lines > 0 {
            write!(f, "，{} 行含无效 UTF-8", self.parse.invalid_utf8_lines)?;
        }
        write!(
            f,
            "，耗时 {:.2}s（{:.0} 事件/秒）",
            self.elapsed.as_secs_f64(),
            self.events_per_second()
        )
    }
}

/// 有路径读文件，否则读标准输入
fn open_input<P: AsRef<Path>>(path: Option<P>) -> Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => {
            let path = path.as_ref();
            #[cfg(feature = "logging")]
            tracing::info!("读取慢日志文件: {}", path.display());
            Box::new(BufReader::new(File::open(path)?))
        }
        None => {
            #[cfg(feature = "logging")]
            tracing::info!("从标准输入读取慢日志");
            Box::new(io::stdin().lock())
        }
    };
    Ok(reader)
}

/// 将 `reader` 中的慢日志解析并写入 `exporter`
pub fn run_with<R, E>(reader: R, exporter: &mut E) -> Result<RunSummary>
where
    R: BufRead,
    E: SyncExporter + ?Sized,
{
    let started = Instant::now();
    let parse = parse_reader(reader, |event| exporter.export_record(&event))?;
    exporter.finalize()?;

    let summary = RunSummary {
        parse,
        exported: exporter.exported_records(),
        elapsed: started.elapsed(),
    };

    #[cfg(feature = "logging")]
    tracing::info!("{} 导出完成: {summary}", exporter.name());

    Ok(summary)
}

/// 解析 `input`（缺省为标准输入），每条事件写一行 JSON 到 `writer`
pub fn run_input<P, W>(input: Option<P>, writer: W) -> Result<RunSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let reader = open_input(input)?;
    let mut exporter = JsonLinesExporter::new(writer);
    run_with(reader, &mut exporter)
}

/// 按配置指定的输入输出执行一次解析导出
pub fn run(config: &Config) -> Result<RunSummary> {
    let reader = open_input(config.input.path.as_deref())?;
    let writer: Box<dyn Write> = match config.output.path.as_deref() {
        Some(path) => {
            #[cfg(feature = "logging")]
            tracing::info!("事件写入文件: {path}");
            Box::new(open_output_file(path, config.output.append)?)
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut exporter = JsonLinesExporter::new(writer);
    run_with(reader, &mut exporter)
}
