//! MySQL 慢查询日志解析模块
//!
//! 提供行分类状态机、条目组装、头部属性提取和指令处理

pub mod assembler;
pub mod directive;
pub mod header;
pub mod io;
pub mod parser;
pub mod registry;
pub mod types;

// 重新导出核心类型和函数
pub use assembler::assemble;
pub use io::{ParseStats, parse_file, parse_reader, parse_str};
pub use parser::{ParserState, SlowlogParser};
pub use types::{AttributeKind, AttributeValue, Event};
