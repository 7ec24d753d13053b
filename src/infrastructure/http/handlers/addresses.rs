//! Address HTTP Handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::application::{
    parse_id, AddressInput, CreateAddress, CurrentUser, GetAddress, ListAddresses, RemoveAddress,
    UpdateAddress, ValidationErrors,
};
use crate::infrastructure::http::dto::{AddressDto, AddressRequest, ApiJson, ApiResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

impl From<AddressRequest> for AddressInput {
    fn from(req: AddressRequest) -> Self {
        AddressInput {
            street: req.street,
            city: req.city,
            province: req.province,
            country: req.country,
            postal_code: req.postal_code,
        }
    }
}

/// 解析 contact_id + address_id 路径参数
fn address_path(contact_id: &str, address_id: &str) -> Result<(i64, i64), ValidationErrors> {
    let contact_id = parse_id("contact_id", contact_id);
    let address_id = parse_id("address_id", address_id);

    match (contact_id, address_id) {
        (Ok(contact_id), Ok(address_id)) => Ok((contact_id, address_id)),
        (Err(mut errors), Err(more)) => {
            errors.extend(more);
            Err(errors)
        }
        (Err(errors), _) | (_, Err(errors)) => Err(errors),
    }
}

/// 为联系人创建地址
pub async fn create_address(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
    ApiJson(req): ApiJson<AddressRequest>,
) -> Result<Json<ApiResponse<AddressDto>>, ApiError> {
    let command = CreateAddress {
        contact_id: parse_id("contact_id", &contact_id)?,
        input: req.into(),
    };

    let address = state.create_address_handler.handle(&user, command).await?;

    Ok(Json(ApiResponse::success(address.into())))
}

/// 获取地址
pub async fn get_address(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path((contact_id, address_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<AddressDto>>, ApiError> {
    let (contact_id, address_id) = address_path(&contact_id, &address_id)?;
    let query = GetAddress {
        contact_id,
        address_id,
    };

    let address = state.get_address_handler.handle(&user, query).await?;

    Ok(Json(ApiResponse::success(address.into())))
}

/// 全量更新地址
pub async fn update_address(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path((contact_id, address_id)): Path<(String, String)>,
    ApiJson(req): ApiJson<AddressRequest>,
) -> Result<Json<ApiResponse<AddressDto>>, ApiError> {
    let (contact_id, address_id) = address_path(&contact_id, &address_id)?;
    let command = UpdateAddress {
        contact_id,
        address_id,
        input: req.into(),
    };

    let address = state.update_address_handler.handle(&user, command).await?;

    Ok(Json(ApiResponse::success(address.into())))
}

/// 删除地址
pub async fn remove_address(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path((contact_id, address_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<&'static str>>, ApiError> {
    let (contact_id, address_id) = address_path(&contact_id, &address_id)?;
    let command = RemoveAddress {
        contact_id,
        address_id,
    };

    state.remove_address_handler.handle(&user, command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 列出联系人的全部地址
pub async fn list_addresses(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<AddressDto>>>, ApiError> {
    let query = ListAddresses {
        contact_id: parse_id("contact_id", &contact_id)?,
    };

    let addresses = state.list_addresses_handler.handle(&user, query).await?;

    Ok(Json(ApiResponse::success(
        addresses.into_iter().map(AddressDto::from).collect(),
    )))
}
