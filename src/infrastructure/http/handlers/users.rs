//! User HTTP Handlers

use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::application::{
    CurrentUser, GetCurrentUser, LoginUser, LogoutUser, RegisterUser, UpdateCurrentUser,
};
use crate::infrastructure::http::dto::{
    ApiJson, ApiResponse, LoginUserRequest, RegisterUserRequest, TokenDto, UpdateUserRequest,
    UserDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 注册用户
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RegisterUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let command = RegisterUser {
        username: req.username,
        password: req.password,
        name: req.name,
    };

    let user = state.register_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// 登录，返回新的会话 token
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginUserRequest>,
) -> Result<Json<ApiResponse<TokenDto>>, ApiError> {
    let command = LoginUser {
        username: req.username,
        password: req.password,
    };

    let login = state.login_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(login.into())))
}

/// 获取当前用户
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let query = GetCurrentUser {
        username: user.username,
    };

    let user = state.get_current_user_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// 部分更新当前用户（name / password）
pub async fn update_current_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let command = UpdateCurrentUser {
        username: user.username,
        name: req.name,
        password: req.password,
    };

    let user = state.update_current_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// 登出，清除会话 token
pub async fn logout_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<&'static str>>, ApiError> {
    let command = LogoutUser {
        username: user.username,
    };

    state.logout_user_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}
