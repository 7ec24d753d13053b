//! Ping Handler
//!
//! 健康检查，无需认证；响应沿用统一的 `{data}` 包装

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::dto::ApiResponse;

/// 服务状态
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn ping() -> Json<ApiResponse<ServiceStatus>> {
    Json(ApiResponse::success(ServiceStatus {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
