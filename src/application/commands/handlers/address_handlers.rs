//! Address Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateAddress, RemoveAddress, UpdateAddress};
use crate::application::error::ApplicationError;
use crate::application::guard::{OwnershipGuard, ADDRESS};
use crate::application::identity::CurrentUser;
use crate::application::ports::{AddressRecord, AddressRepositoryPort};

// ============================================================================
// CreateAddress
// ============================================================================

/// CreateAddress Handler - 联系人必须属于当前用户
pub struct CreateAddressHandler {
    address_repo: Arc<dyn AddressRepositoryPort>,
    guard: OwnershipGuard,
}

impl CreateAddressHandler {
    pub fn new(address_repo: Arc<dyn AddressRepositoryPort>, guard: OwnershipGuard) -> Self {
        Self {
            address_repo,
            guard,
        }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        command: CreateAddress,
    ) -> Result<AddressRecord, ApplicationError> {
        command.validate()?;

        let contact = self.guard.contact(user, command.contact_id).await?;

        let address = self
            .address_repo
            .create(contact.id, &command.input.into_fields())
            .await?;

        tracing::info!(
            username = %user.username,
            contact_id = contact.id,
            address_id = address.id,
            "Address created"
        );

        Ok(address)
    }
}

// ============================================================================
// UpdateAddress
// ============================================================================

/// UpdateAddress Handler
pub struct UpdateAddressHandler {
    address_repo: Arc<dyn AddressRepositoryPort>,
    guard: OwnershipGuard,
}

impl UpdateAddressHandler {
    pub fn new(address_repo: Arc<dyn AddressRepositoryPort>, guard: OwnershipGuard) -> Self {
        Self {
            address_repo,
            guard,
        }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        command: UpdateAddress,
    ) -> Result<AddressRecord, ApplicationError> {
        command.validate()?;

        let address = self
            .guard
            .address(user, command.contact_id, command.address_id)
            .await?;

        let updated = self
            .address_repo
            .update(address.contact_id, address.id, &command.input.into_fields())
            .await?
            .ok_or_else(|| ApplicationError::not_found(ADDRESS))?;

        tracing::info!(
            username = %user.username,
            contact_id = updated.contact_id,
            address_id = updated.id,
            "Address updated"
        );

        Ok(updated)
    }
}

// ============================================================================
// RemoveAddress
// ============================================================================

/// RemoveAddress Handler
pub struct RemoveAddressHandler {
    address_repo: Arc<dyn AddressRepositoryPort>,
    guard: OwnershipGuard,
}

impl RemoveAddressHandler {
    pub fn new(address_repo: Arc<dyn AddressRepositoryPort>, guard: OwnershipGuard) -> Self {
        Self {
            address_repo,
            guard,
        }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        command: RemoveAddress,
    ) -> Result<(), ApplicationError> {
        command.validate()?;

        let address = self
            .guard
            .address(user, command.contact_id, command.address_id)
            .await?;

        if !self
            .address_repo
            .delete(address.contact_id, address.id)
            .await?
        {
            return Err(ApplicationError::not_found(ADDRESS));
        }

        tracing::info!(
            username = %user.username,
            contact_id = address.contact_id,
            address_id = address.id,
            "Address removed"
        );

        Ok(())
    }
}
