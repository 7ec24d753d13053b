//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod address_handlers;
mod contact_handlers;
mod user_handlers;

pub use address_handlers::*;
pub use contact_handlers::*;
pub use user_handlers::*;
