//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;
pub mod persistence;

pub use adapters::Argon2PasswordHasher;
pub use persistence::sqlite::{
    SqliteAddressRepository, SqliteContactRepository, SqliteUserRepository,
};
