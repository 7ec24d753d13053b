//! Password Hasher Port - 密码哈希抽象
//!
//! 单向哈希 + 校验，具体算法由 infrastructure 层提供

use thiserror::Error;

/// 密码哈希错误
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Password Hasher Port
///
/// 哈希计算是 CPU 密集型操作，调用方应放在阻塞线程池执行
pub trait PasswordHasherPort: Send + Sync {
    /// 生成带随机盐的哈希
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// 校验明文与哈希是否匹配
    fn verify(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
