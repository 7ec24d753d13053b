//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ContactFilter, PageRequest};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
///
/// `password` 为哈希值，永远不会出现在响应中
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub name: String,
    pub token: Option<String>,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入新用户，用户名重复时返回 `Duplicate`
    async fn create(&self, user: &UserRecord) -> Result<(), RepositoryError>;

    /// 判断用户名是否已存在
    async fn exists(&self, username: &str) -> Result<bool, RepositoryError>;

    /// 根据用户名查找
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据会话 token 查找
    async fn find_by_token(&self, token: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 部分更新姓名和/或密码哈希，None 表示不修改
    async fn update_profile(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<UserRecord>, RepositoryError>;

    /// 设置或清空会话 token，返回是否命中用户
    async fn set_token(&self, username: &str, token: Option<&str>) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Contact Repository
// ============================================================================

/// 联系人可写字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// 联系人实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Contact Repository Port
///
/// 所有按 ID 的操作都限定在 `username` 名下
#[async_trait]
pub trait ContactRepositoryPort: Send + Sync {
    /// 创建联系人并返回分配的 ID
    async fn create(
        &self,
        username: &str,
        fields: &ContactFields,
    ) -> Result<ContactRecord, RepositoryError>;

    /// 查找属于 `username` 的联系人
    async fn find_owned(
        &self,
        username: &str,
        id: i64,
    ) -> Result<Option<ContactRecord>, RepositoryError>;

    /// 全量更新属于 `username` 的联系人
    async fn update(
        &self,
        username: &str,
        id: i64,
        fields: &ContactFields,
    ) -> Result<Option<ContactRecord>, RepositoryError>;

    /// 删除属于 `username` 的联系人（级联删除地址），返回是否删除
    async fn delete(&self, username: &str, id: i64) -> Result<bool, RepositoryError>;

    /// 分页搜索，返回当前页数据与过滤后的总数
    async fn search(
        &self,
        username: &str,
        filter: &ContactFilter,
        page: PageRequest,
    ) -> Result<(Vec<ContactRecord>, u64), RepositoryError>;
}

// ============================================================================
// Address Repository
// ============================================================================

/// 地址可写字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

/// 地址实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub id: i64,
    pub contact_id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

/// Address Repository Port
///
/// 归属校验由调用方先对联系人完成，这里只按 contact_id 限定
#[async_trait]
pub trait AddressRepositoryPort: Send + Sync {
    async fn create(
        &self,
        contact_id: i64,
        fields: &AddressFields,
    ) -> Result<AddressRecord, RepositoryError>;

    async fn find(
        &self,
        contact_id: i64,
        address_id: i64,
    ) -> Result<Option<AddressRecord>, RepositoryError>;

    async fn update(
        &self,
        contact_id: i64,
        address_id: i64,
        fields: &AddressFields,
    ) -> Result<Option<AddressRecord>, RepositoryError>;

    async fn delete(&self, contact_id: i64, address_id: i64) -> Result<bool, RepositoryError>;

    async fn list_by_contact(&self, contact_id: i64) -> Result<Vec<AddressRecord>, RepositoryError>;
}
