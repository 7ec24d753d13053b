//! Authenticated identity
//!
//! 认证中间件解析 token 后放入 request extensions，handler 只依赖这个类型

use crate::application::ports::UserRecord;

/// 已认证的当前用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
    pub name: String,
}

impl From<UserRecord> for CurrentUser {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            name: record.name,
        }
    }
}
