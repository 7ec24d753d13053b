//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{HashError, RepositoryError};
use crate::application::validation::ValidationErrors;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求校验失败（包含全部字段违规）
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// 未认证或凭证错误
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 资源不存在或不属于当前用户
    #[error("{resource} is not found")]
    NotFound { resource: &'static str },

    /// 唯一键冲突
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// 创建未认证错误
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// 创建冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err)
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<HashError> for ApplicationError {
    fn from(err: HashError) -> Self {
        Self::InternalError(err.to_string())
    }
}
