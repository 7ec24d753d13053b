//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod address_commands;
mod contact_commands;
mod user_commands;

pub mod handlers;

pub use address_commands::*;
pub use contact_commands::*;
pub use user_commands::*;
