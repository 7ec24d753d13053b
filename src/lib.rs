//! Contact API - 联系人管理 REST 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 会话 token
//! - Contact Context: 邮箱格式、搜索条件
//! - 分页计算
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories, PasswordHasher）
//! - Validation: 请求校验规则
//! - Guard: 联系人/地址归属校验
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 存储（sqlx）
//! - Adapters: Argon2 密码哈希

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
