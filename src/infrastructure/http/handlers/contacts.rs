//! Contact HTTP Handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::application::{
    parse_id, parse_integer, ContactInput, CreateContact, CurrentUser, GetContact, RemoveContact,
    SearchContacts, UpdateContact, ValidationErrors,
};
use crate::infrastructure::http::dto::{
    ApiJson, ApiQuery, ApiResponse, ContactDto, ContactRequest, SearchContactsParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

impl From<ContactRequest> for ContactInput {
    fn from(req: ContactRequest) -> Self {
        ContactInput {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// 创建联系人
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> Result<Json<ApiResponse<ContactDto>>, ApiError> {
    let command = CreateContact { input: req.into() };

    let contact = state.create_contact_handler.handle(&user, command).await?;

    Ok(Json(ApiResponse::success(contact.into())))
}

/// 获取联系人
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
) -> Result<Json<ApiResponse<ContactDto>>, ApiError> {
    let query = GetContact {
        contact_id: parse_id("contact_id", &contact_id)?,
    };

    let contact = state.get_contact_handler.handle(&user, query).await?;

    Ok(Json(ApiResponse::success(contact.into())))
}

/// 全量更新联系人
pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> Result<Json<ApiResponse<ContactDto>>, ApiError> {
    let command = UpdateContact {
        contact_id: parse_id("contact_id", &contact_id)?,
        input: req.into(),
    };

    let contact = state.update_contact_handler.handle(&user, command).await?;

    Ok(Json(ApiResponse::success(contact.into())))
}

/// 删除联系人（其地址一并删除）
pub async fn remove_contact(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
) -> Result<Json<ApiResponse<&'static str>>, ApiError> {
    let command = RemoveContact {
        contact_id: parse_id("contact_id", &contact_id)?,
    };

    state.remove_contact_handler.handle(&user, command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 分页搜索联系人
pub async fn search_contacts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    ApiQuery(params): ApiQuery<SearchContactsParams>,
) -> Result<Json<ApiResponse<Vec<ContactDto>>>, ApiError> {
    let query = search_query(params)?;

    let result = state.search_contacts_handler.handle(&user, query).await?;
    let contacts = result.data.into_iter().map(ContactDto::from).collect();

    Ok(Json(ApiResponse::paged(contacts, result.paging)))
}

/// 查询串转换为查询对象，page 与 size 的解析错误一并报告
fn search_query(params: SearchContactsParams) -> Result<SearchContacts, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let page = parse_integer("page", params.page.as_deref()).unwrap_or_else(|e| {
        errors.extend(e);
        None
    });
    let size = parse_integer("size", params.size.as_deref()).unwrap_or_else(|e| {
        errors.extend(e);
        None
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SearchContacts {
        name: params.name,
        email: params.email,
        phone: params.phone,
        page,
        size,
    })
}
