//! User Queries

use crate::domain::SessionToken;

/// 获取当前用户资料
#[derive(Debug, Clone)]
pub struct GetCurrentUser {
    pub username: String,
}

/// 根据会话 token 解析用户
#[derive(Debug, Clone)]
pub struct AuthenticateToken {
    pub token: Option<SessionToken>,
}
