//! SQLite Persistence - SQLite 数据库持久化实现

mod address_repo;
mod contact_repo;
mod database;
mod user_repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use address_repo::*;
pub use contact_repo::*;
pub use database::*;
pub use user_repo::*;
