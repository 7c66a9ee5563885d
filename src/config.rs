//! 配置管理模块
//!
//! 供库调用方使用，命令行程序不读取任何配置文件。
//! 配置为 TOML 格式，所有字段都有默认值，缺省的段落或字段按默认处理：
//!
//! ```toml
//! [log]
//! level = "info"
//! log_dir = "logs"
//! enable_console = true
//!
//! [input]
//! path = "/var/log/mysql/slow.log"
//!
//! [output]
//! path = "events.jsonl"
//! append = false
//! ```

use crate::error::{Result, SlowlogError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// 主配置结构体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 日志配置
    pub log: LogSection,
    /// 输入配置
    pub input: InputSection,
    /// 输出配置
    pub output: OutputSection,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志文件目录，不设置则不写文件
    pub log_dir: Option<String>,
    /// 是否输出到控制台（标准错误）
    pub enable_console: bool,
}

impl Default for LogSection {
    fn default() -> Self {
        Self { level: "info".to_string(), log_dir: None, enable_console: true }
    }
}

/// 输入配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// 慢日志文件路径，不设置则读标准输入
    pub path: Option<String>,
}

/// 输出配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// JSON Lines 输出文件路径，不设置则写标准输出
    pub path: Option<String>,
    /// 是否追加到已有文件
    pub append: bool,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        match self.log.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(SlowlogError::config_error(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        if self.output.path.as_deref().is_some_and(str::is_empty) {
            return Err(SlowlogError::config_error("输出文件路径不能为空字符串"));
        }

        if self.output.append && self.output.path.is_none() {
            #[cfg(feature = "logging")]
            tracing::warn!("output.append 仅在配置了输出文件时生效");
        }

        Ok(())
    }

    /// 给出路径时覆盖输入文件
    pub fn with_input_path<S: Into<String>>(mut self, path: Option<S>) -> Self {
        if let Some(path) = path {
            self.input.path = Some(path.into());
        }
        self
    }
}

impl FromStr for Config {
    type Err = SlowlogError;

    fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
