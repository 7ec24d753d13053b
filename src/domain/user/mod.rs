//! User Context - 用户限界上下文
//!
//! 职责:
//! - 注册与登录凭证
//! - 会话 token 的生成与解析

mod value_objects;

pub use value_objects::SessionToken;
