//! Data Transfer Objects
//!
//! 请求体字段全部为 Option，缺失字段交给应用层校验统一报告

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use serde::{Deserialize, Serialize};

use crate::application::{AddressRecord, ContactRecord, LoginResponse, UserResponse};
use crate::domain::Paging;

use super::error::ApiError;

// ============================================================================
// 提取器
// ============================================================================

/// JSON 请求体提取器，解析失败时返回统一错误格式
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// 查询串提取器，解析失败时返回统一错误格式
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self { data, paging: None }
    }

    /// 分页响应
    pub fn paged(data: T, paging: Paging) -> Self {
        Self {
            data,
            paging: Some(paging),
        }
    }
}

impl ApiResponse<&'static str> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success("OK")
    }
}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// 用户信息（不含密码）
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub username: String,
    pub name: String,
}

impl From<UserResponse> for UserDto {
    fn from(user: UserResponse) -> Self {
        Self {
            username: user.username,
            name: user.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenDto {
    pub token: String,
}

impl From<LoginResponse> for TokenDto {
    fn from(login: LoginResponse) -> Self {
        Self { token: login.token }
    }
}

// ============================================================================
// Contact DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// 搜索参数，page/size 以原始字符串接收以便报告非数字输入
#[derive(Debug, Default, Deserialize)]
pub struct SearchContactsParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<ContactRecord> for ContactDto {
    fn from(contact: ContactRecord) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

// ============================================================================
// Address DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddressDto {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<AddressRecord> for AddressDto {
    fn from(address: AddressRecord) -> Self {
        Self {
            id: address.id,
            street: address.street,
            city: address.city,
            province: address.province,
            country: address.country,
            postal_code: address.postal_code,
        }
    }
}
