//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{LoginUser, LogoutUser, RegisterUser, UpdateCurrentUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{PasswordHasherPort, RepositoryError, UserRecord, UserRepositoryPort};
use crate::domain::SessionToken;

const USER: &str = "user";
const BAD_CREDENTIALS: &str = "Username or password wrong";

// ============================================================================
// Response DTOs
// ============================================================================

/// 用户响应（不含密码）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            name: record.name,
        }
    }
}

/// 登录响应
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub token: String,
}

// ============================================================================
// Password helpers
// ============================================================================

/// 在阻塞线程池中计算哈希
async fn hash_password(
    hasher: &Arc<dyn PasswordHasherPort>,
    password: String,
) -> Result<String, ApplicationError> {
    let hasher = hasher.clone();
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApplicationError::internal(format!("Password hashing task failed: {}", e)))?
        .map_err(ApplicationError::from)
}

/// 在阻塞线程池中校验密码
async fn verify_password(
    hasher: &Arc<dyn PasswordHasherPort>,
    password: String,
    hash: String,
) -> Result<bool, ApplicationError> {
    let hasher = hasher.clone();
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| ApplicationError::internal(format!("Password verify task failed: {}", e)))?
        .map_err(ApplicationError::from)
}

// ============================================================================
// RegisterUser
// ============================================================================

/// RegisterUser Handler
pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl RegisterUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { user_repo, hasher }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<UserResponse, ApplicationError> {
        command.validate()?;

        let username = command.username.unwrap_or_default();
        let name = command.name.unwrap_or_default();
        let password = command.password.unwrap_or_default();

        if self.user_repo.exists(&username).await? {
            return Err(ApplicationError::conflict("Username already exists"));
        }

        let password_hash = hash_password(&self.hasher, password).await?;

        let record = UserRecord {
            username,
            password: password_hash,
            name,
            token: None,
        };

        // 并发注册时以唯一约束为准
        self.user_repo.create(&record).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => ApplicationError::conflict("Username already exists"),
            other => ApplicationError::from(other),
        })?;

        tracing::info!(username = %record.username, "User registered");

        Ok(UserResponse::from(record))
    }
}

// ============================================================================
// LoginUser
// ============================================================================

/// LoginUser Handler
///
/// 用户名不存在与密码错误返回同样的 Unauthorized
pub struct LoginUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl LoginUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { user_repo, hasher }
    }

    pub async fn handle(&self, command: LoginUser) -> Result<LoginResponse, ApplicationError> {
        command.validate()?;

        let username = command.username.unwrap_or_default();
        let password = command.password.unwrap_or_default();

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(BAD_CREDENTIALS))?;

        if !verify_password(&self.hasher, password, user.password).await? {
            tracing::debug!(username = %username, "Login rejected");
            return Err(ApplicationError::unauthorized(BAD_CREDENTIALS));
        }

        let token = SessionToken::generate();
        if !self.user_repo.set_token(&username, Some(token.as_str())).await? {
            return Err(ApplicationError::unauthorized(BAD_CREDENTIALS));
        }

        tracing::info!(username = %username, "User logged in");

        Ok(LoginResponse {
            token: token.into_inner(),
        })
    }
}

// ============================================================================
// UpdateCurrentUser
// ============================================================================

/// UpdateCurrentUser Handler
pub struct UpdateCurrentUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl UpdateCurrentUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { user_repo, hasher }
    }

    pub async fn handle(&self, command: UpdateCurrentUser) -> Result<UserResponse, ApplicationError> {
        command.validate()?;

        let password_hash = match command.password {
            Some(password) => Some(hash_password(&self.hasher, password).await?),
            None => None,
        };

        let user = self
            .user_repo
            .update_profile(
                &command.username,
                command.name.as_deref(),
                password_hash.as_deref(),
            )
            .await?
            .ok_or_else(|| ApplicationError::not_found(USER))?;

        tracing::info!(
            username = %user.username,
            name_changed = command.name.is_some(),
            password_changed = password_hash.is_some(),
            "User updated"
        );

        Ok(UserResponse::from(user))
    }
}

// ============================================================================
// LogoutUser
// ============================================================================

/// LogoutUser Handler
pub struct LogoutUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl LogoutUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: LogoutUser) -> Result<(), ApplicationError> {
        if !self.user_repo.set_token(&command.username, None).await? {
            return Err(ApplicationError::unauthorized("Unauthorized"));
        }

        tracing::info!(username = %command.username, "User logged out");
        Ok(())
    }
}
