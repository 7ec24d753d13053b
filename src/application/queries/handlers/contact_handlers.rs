//! Contact Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::guard::OwnershipGuard;
use crate::application::identity::CurrentUser;
use crate::application::ports::{ContactRecord, ContactRepositoryPort};
use crate::application::queries::{GetContact, SearchContacts};
use crate::domain::Paging;

// ============================================================================
// Response DTOs
// ============================================================================

/// 搜索结果：当前页数据 + 分页元数据
#[derive(Debug, Clone)]
pub struct SearchContactsResponse {
    pub data: Vec<ContactRecord>,
    pub paging: Paging,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetContact Handler
pub struct GetContactHandler {
    guard: OwnershipGuard,
}

impl GetContactHandler {
    pub fn new(guard: OwnershipGuard) -> Self {
        Self { guard }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        query: GetContact,
    ) -> Result<ContactRecord, ApplicationError> {
        query.validate()?;
        self.guard.contact(user, query.contact_id).await
    }
}

/// SearchContacts Handler
pub struct SearchContactsHandler {
    contact_repo: Arc<dyn ContactRepositoryPort>,
}

impl SearchContactsHandler {
    pub fn new(contact_repo: Arc<dyn ContactRepositoryPort>) -> Self {
        Self { contact_repo }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        query: SearchContacts,
    ) -> Result<SearchContactsResponse, ApplicationError> {
        let (filter, page) = query.into_parts()?;

        let (data, total_item) = self
            .contact_repo
            .search(&user.username, &filter, page)
            .await?;

        let paging = page.paging(total_item);

        tracing::debug!(
            username = %user.username,
            page = paging.page,
            total_item = paging.total_item,
            returned = data.len(),
            "Contacts searched"
        );

        Ok(SearchContactsResponse { data, paging })
    }
}
