//! 交互式命令行
//!
//! - `commands`: 命令解析与会话状态
//! - `printer`: 表格与文本输出
//! - `completer`: rustyline Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{CommandResult, Session};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
