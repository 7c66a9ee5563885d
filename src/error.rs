//! 错误类型定义
//!
//! 解析核心本身不会失败：无法识别或无法转换的字段只会被静默丢弃。
//! 这里的错误类型只覆盖外层的读写、配置与日志初始化。

/// 慢日志工具的结果类型
pub type Result<T> = std::result::Result<T, SlowlogError>;

/// 慢日志工具错误类型
#[derive(Debug, thiserror::Error)]
pub enum SlowlogError {
    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置文件解析错误
    #[error("配置文件解析错误: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 配置文件序列化错误
    #[error("配置文件序列化错误: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl SlowlogError {
    /// 创建一个配置错误
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("配置错误: {}", message);
        }
        Self::Config(message)
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        {
            crate::logging::ensure_logger_initialized();
            tracing::error!("未知错误: {}", message);
        }
        Self::Other(message)
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, SlowlogError::Io(_))
    }

    /// 检查是否为配置错误（包括配置文件解析错误）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SlowlogError::Config(_)
                | SlowlogError::ConfigParse(_)
                | SlowlogError::ConfigSerialize(_)
        )
    }

    /// 检查是否为 JSON 错误
    pub fn is_json_error(&self) -> bool {
        matches!(self, SlowlogError::Json(_))
    }
}
