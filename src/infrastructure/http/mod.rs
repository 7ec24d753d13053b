//! HTTP Layer - RESTful API
//!
//! axum 路由、认证中间件、请求/响应 DTO 与错误映射

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, wait_for_shutdown, HttpServer, ServerConfig};
pub use state::AppState;
