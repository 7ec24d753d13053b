//! Ownership Guard - 归属校验
//!
//! 联系人必须属于当前用户；地址通过其联系人间接归属。
//! 不属于当前用户的资源与不存在的资源一样返回 NotFound。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::identity::CurrentUser;
use crate::application::ports::{AddressRecord, AddressRepositoryPort, ContactRecord, ContactRepositoryPort};

pub const CONTACT: &str = "contact";
pub const ADDRESS: &str = "address";

#[derive(Clone)]
pub struct OwnershipGuard {
    contact_repo: Arc<dyn ContactRepositoryPort>,
    address_repo: Arc<dyn AddressRepositoryPort>,
}

impl OwnershipGuard {
    pub fn new(
        contact_repo: Arc<dyn ContactRepositoryPort>,
        address_repo: Arc<dyn AddressRepositoryPort>,
    ) -> Self {
        Self {
            contact_repo,
            address_repo,
        }
    }

    /// 解析当前用户名下的联系人
    pub async fn contact(
        &self,
        user: &CurrentUser,
        contact_id: i64,
    ) -> Result<ContactRecord, ApplicationError> {
        self.contact_repo
            .find_owned(&user.username, contact_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(
                    username = %user.username,
                    contact_id = contact_id,
                    "Contact not owned or missing"
                );
                ApplicationError::not_found(CONTACT)
            })
    }

    /// 解析当前用户名下联系人的地址（先校验联系人）
    pub async fn address(
        &self,
        user: &CurrentUser,
        contact_id: i64,
        address_id: i64,
    ) -> Result<AddressRecord, ApplicationError> {
        let contact = self.contact(user, contact_id).await?;

        self.address_repo
            .find(contact.id, address_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ADDRESS))
    }
}
