//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - User Context: 用户与会话 token
//! - Contact Context: 联系人与地址
//!
//! 以及共享的分页计算

pub mod contact;
pub mod user;

mod paging;

pub use contact::{is_valid_email, ContactFilter};
pub use paging::{PageRequest, Paging, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use user::SessionToken;
