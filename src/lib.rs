//! # mysql-slowlog
//!
//! 将 MySQL 慢查询日志文本流转换为结构化事件，每条被记录的查询对应一条事件，
//! 可直接序列化为 JSON。
//!
//! ## 快速开始
//!
//! ```rust
//! use mysql_slowlog::slowlog::parse_str;
//!
//! let log = concat!(
//!     "# User@Host: app[app] @ localhost [127.0.0.1]  Id: 3\n",
//!     "# Query_time: 0.020363  Lock_time: 0.018450 Rows_sent: 0  Rows_examined: 1\n",
//!     "SET timestamp=1514083320;\n",
//!     "use foo;\n",
//!     "SELECT 1;\n",
//! );
//!
//! let events = parse_str(log);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].database(), Some("foo"));
//! assert_eq!(events[0].statement(), "SELECT 1;");
//! ```
//!
//! ## 模块组织
//!
//! - [`slowlog`] - 解析核心：行分类状态机、条目组装、属性类型表
//! - [`exporter`] - JSON Lines 导出
//! - [`config`] - TOML 配置
//! - [`process`] - 输入输出串联
//! - [`error`] - 错误类型定义

pub mod config;
pub mod error;
pub mod exporter;
#[cfg(feature = "logging")]
pub mod logging;
pub mod process;
pub mod slowlog;

pub use error::{Result, SlowlogError};
pub use slowlog::{AttributeValue, Event, SlowlogParser};
