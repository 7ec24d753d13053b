//! User Query Handlers

use std::sync::Arc;

use crate::application::commands::handlers::UserResponse;
use crate::application::error::ApplicationError;
use crate::application::identity::CurrentUser;
use crate::application::ports::UserRepositoryPort;
use crate::application::queries::{AuthenticateToken, GetCurrentUser};

/// GetCurrentUser Handler
pub struct GetCurrentUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetCurrentUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetCurrentUser) -> Result<UserResponse, ApplicationError> {
        let user = self
            .user_repo
            .find_by_username(&query.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user"))?;

        Ok(UserResponse::from(user))
    }
}

/// AuthenticateToken Handler - 认证门
///
/// token 缺失或无匹配用户时返回 Unauthorized；只读查询
pub struct AuthenticateTokenHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl AuthenticateTokenHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: AuthenticateToken) -> Result<CurrentUser, ApplicationError> {
        let token = query
            .token
            .ok_or_else(|| ApplicationError::unauthorized("Unauthorized"))?;

        let user = self
            .user_repo
            .find_by_token(token.as_str())
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("Unauthorized"))?;

        Ok(CurrentUser::from(user))
    }
}
