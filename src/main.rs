//! Contact API - 联系人管理 REST 服务
//!
//! 启动流程：配置 -> 日志 -> 数据库 -> 依赖装配 -> HTTP 服务（优雅关闭）

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use contact_api::config::{load_config, print_config, LogConfig};
use contact_api::infrastructure::adapters::Argon2PasswordHasher;
use contact_api::infrastructure::http::{wait_for_shutdown, AppState, HttpServer, ServerConfig};
use contact_api::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteAddressRepository,
    SqliteContactRepository, SqliteUserRepository,
};

/// 初始化日志，RUST_LOG 优先于配置文件中的级别
fn init_tracing(config: &LogConfig) {
    let log_filter = format!(
        "{},contact_api={},tower_http=debug",
        config.level, config.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if config.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().context("Failed to load config")?;

    init_tracing(&config.log);

    tracing::info!("Contact API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config)
        .await
        .context("Failed to open database")?;
    run_migrations(&pool).await.context("Failed to run migrations")?;

    // 创建 Repository 与密码哈希适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let contact_repo = Arc::new(SqliteContactRepository::new(pool.clone()));
    let address_repo = Arc::new(SqliteAddressRepository::new(pool.clone()));
    let password_hasher = Arc::new(
        Argon2PasswordHasher::with_config(config.auth.argon2())
            .context("Invalid password hash parameters")?,
    );

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(user_repo, contact_repo, address_repo, password_hasher);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
