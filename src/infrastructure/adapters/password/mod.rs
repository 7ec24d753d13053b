//! Password Adapter - Argon2 密码哈希实现

mod argon2_hasher;

pub use argon2_hasher::*;
