//! 仓储测试夹具

use super::{create_pool, run_migrations, DatabaseConfig, DbPool};

/// 迁移完成的内存库
pub(crate) async fn memory_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

/// 直接插入用户（密码字段不做哈希）
pub(crate) async fn insert_user(pool: &DbPool, username: &str, token: Option<&str>) {
    sqlx::query("INSERT INTO users (username, password, name, token) VALUES (?, ?, ?, ?)")
        .bind(username)
        .bind("hash")
        .bind(username)
        .bind(token)
        .execute(pool)
        .await
        .unwrap();
}
