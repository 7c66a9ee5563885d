//! 日志初始化和配置模块
//!
//! 使用 tracing 库统一初始化日志。标准输出用于写出 JSON 事件，
//! 因此控制台日志一律写到标准错误；可选地再输出到按天滚动的日志文件。

use std::io;
use std::str::FromStr;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 日志配置结构体
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 日志文件目录，`None` 表示不写文件
    pub log_dir: Option<String>,
    /// 是否输出到控制台（标准错误）
    pub enable_console: bool,
}

impl LogConfig {
    /// 创建新的日志配置，使用默认级别
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置日志级别
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// 设置日志文件目录
    pub fn log_dir<S: Into<String>>(mut self, dir: S) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// 设置是否输出到控制台
    pub fn console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// 由配置文件中的级别字符串构建（trace/debug/info/warn/error）
    pub fn from_level_str(level: &str) -> LogResult<Self> {
        let level = Level::from_str(level).map_err(|_| {
            LogError::Config(format!("无效的日志级别: {level}"))
        })?;
        Ok(Self::default().level(level))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::INFO, log_dir: None, enable_console: true }
    }
}

/// 自动初始化日志系统（仅初始化一次）
static INIT_LOGGER: Once = Once::new();

/// 确保日志系统已初始化
///
/// 首次调用时以默认配置初始化，之后的调用不做任何事。
pub(crate) fn ensure_logger_initialized() {
    INIT_LOGGER.call_once(|| {
        // 可能已经被调用方初始化过，忽略错误
        let _ = init_default_logging();
    });
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),
    #[error("日志配置错误: {0}")]
    Config(String),
    #[error("日志初始化错误: {0}")]
    Init(String),
}

/// 日志初始化结果
pub type LogResult<T> = Result<T, LogError>;

/// 初始化日志系统
///
/// - 控制台输出写到标准错误
/// - 配置了 `log_dir` 时额外写入按天滚动的文件 `slowlog.<date>`
/// - `RUST_LOG` 环境变量优先于配置的级别
///
/// 重复初始化不会报错。
///
/// # Examples
///
/// ```no_run
/// use mysql_slowlog::logging::{init_logging, LogConfig};
/// use tracing::Level;
///
/// let config = LogConfig::new().level(Level::DEBUG).log_dir("logs");
/// init_logging(config).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> LogResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let console_layer = config.enable_console.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_timer(SystemTime)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_ansi(true)
    });

    let mut guard = None;
    let file_layer = match config.log_dir.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "slowlog");
            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);
            guard = Some(g);
            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_timer(SystemTime)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let result = Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    match result {
        Ok(()) => {
            // guard 需要存活到进程结束，否则文件写入线程会提前退出
            if let Some(g) = guard {
                std::mem::forget(g);
            }
            tracing::debug!(
                level = %config.level,
                log_dir = ?config.log_dir,
                "日志系统初始化完成"
            );
            Ok(())
        }
        // 已经初始化过了，这不是错误
        Err(_) => Ok(()),
    }
}

/// 使用默认配置初始化日志系统（INFO 级别，仅控制台）
pub fn init_default_logging() -> LogResult<()> {
    init_logging(LogConfig::default())
}
