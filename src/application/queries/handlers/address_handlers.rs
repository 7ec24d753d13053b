//! Address Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::guard::OwnershipGuard;
use crate::application::identity::CurrentUser;
use crate::application::ports::{AddressRecord, AddressRepositoryPort};
use crate::application::queries::{GetAddress, ListAddresses};

/// GetAddress Handler
pub struct GetAddressHandler {
    guard: OwnershipGuard,
}

impl GetAddressHandler {
    pub fn new(guard: OwnershipGuard) -> Self {
        Self { guard }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        query: GetAddress,
    ) -> Result<AddressRecord, ApplicationError> {
        query.validate()?;
        self.guard
            .address(user, query.contact_id, query.address_id)
            .await
    }
}

/// ListAddresses Handler
pub struct ListAddressesHandler {
    address_repo: Arc<dyn AddressRepositoryPort>,
    guard: OwnershipGuard,
}

impl ListAddressesHandler {
    pub fn new(address_repo: Arc<dyn AddressRepositoryPort>, guard: OwnershipGuard) -> Self {
        Self {
            address_repo,
            guard,
        }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        query: ListAddresses,
    ) -> Result<Vec<AddressRecord>, ApplicationError> {
        query.validate()?;

        let contact = self.guard.contact(user, query.contact_id).await?;
        let addresses = self.address_repo.list_by_contact(contact.id).await?;

        Ok(addresses)
    }
}
