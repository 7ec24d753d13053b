//! HTTP Middleware
//!
//! - 认证中间件：解析 Authorization 头并注入当前用户
//! - HTTP 状态码错误日志中间件

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::error::ApiError;
use super::state::AppState;
use crate::application::AuthenticateToken;
use crate::domain::SessionToken;

/// 认证中间件
///
/// 接受 `Authorization: <token>` 或 `Authorization: Bearer <token>`，
/// 认证通过后将 [`crate::application::CurrentUser`] 放入请求扩展
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(SessionToken::from_header);

    let user = state
        .authenticate_token_handler
        .handle(AuthenticateToken { token })
        .await?;

    tracing::debug!(username = %user.username, "Request authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
/// 注意：错误详情在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
