//! Contact Context - 联系人限界上下文
//!
//! 职责:
//! - 联系人字段格式（邮箱）
//! - 联系人搜索条件

mod value_objects;

pub use value_objects::{is_valid_email, ContactFilter};
