//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                            GET     健康检查
//! - /api/users                                           POST    注册
//! - /api/users/login                                     POST    登录
//! - /api/users/current                                   GET     当前用户（需认证）
//! - /api/users/current                                   PATCH   更新当前用户（需认证）
//! - /api/users/logout                                    DELETE  登出（需认证）
//! - /api/contacts                                        GET     搜索联系人（需认证）
//! - /api/contacts                                        POST    创建联系人（需认证）
//! - /api/contacts/:contact_id                            GET/PUT/DELETE（需认证）
//! - /api/contacts/:contact_id/addresses                  GET/POST（需认证）
//! - /api/contacts/:contact_id/addresses/:address_id      GET/PUT/DELETE（需认证）

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::auth_middleware;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes(state))
}

/// API 路由
fn api_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state))
}

/// 无需认证的路由
fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/users", post(handlers::register_user))
        .route("/users/login", post(handlers::login_user))
}

/// 需要认证的路由
fn protected_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(user_routes())
        .merge(contact_routes())
        .merge(address_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/current",
            get(handlers::get_current_user).patch(handlers::update_current_user),
        )
        .route("/users/logout", delete(handlers::logout_user))
}

/// Contact 路由
fn contact_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/contacts",
            get(handlers::search_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/:contact_id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::remove_contact),
        )
}

/// Address 路由
fn address_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/contacts/:contact_id/addresses",
            get(handlers::list_addresses).post(handlers::create_address),
        )
        .route(
            "/contacts/:contact_id/addresses/:address_id",
            get(handlers::get_address)
                .put(handlers::update_address)
                .delete(handlers::remove_address),
        )
}
