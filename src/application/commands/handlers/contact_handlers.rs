//! Contact Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateContact, RemoveContact, UpdateContact};
use crate::application::error::ApplicationError;
use crate::application::guard::{OwnershipGuard, CONTACT};
use crate::application::identity::CurrentUser;
use crate::application::ports::{ContactRecord, ContactRepositoryPort};

// ============================================================================
// CreateContact
// ============================================================================

/// CreateContact Handler - 新联系人归属当前用户
pub struct CreateContactHandler {
    contact_repo: Arc<dyn ContactRepositoryPort>,
}

impl CreateContactHandler {
    pub fn new(contact_repo: Arc<dyn ContactRepositoryPort>) -> Self {
        Self { contact_repo }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        command: CreateContact,
    ) -> Result<ContactRecord, ApplicationError> {
        command.validate()?;

        let contact = self
            .contact_repo
            .create(&user.username, &command.input.into_fields())
            .await?;

        tracing::info!(
            username = %user.username,
            contact_id = contact.id,
            "Contact created"
        );

        Ok(contact)
    }
}

// ============================================================================
// UpdateContact
// ============================================================================

/// UpdateContact Handler
pub struct UpdateContactHandler {
    contact_repo: Arc<dyn ContactRepositoryPort>,
    guard: OwnershipGuard,
}

impl UpdateContactHandler {
    pub fn new(contact_repo: Arc<dyn ContactRepositoryPort>, guard: OwnershipGuard) -> Self {
        Self {
            contact_repo,
            guard,
        }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        command: UpdateContact,
    ) -> Result<ContactRecord, ApplicationError> {
        command.validate()?;

        let contact = self.guard.contact(user, command.contact_id).await?;

        let updated = self
            .contact_repo
            .update(&user.username, contact.id, &command.input.into_fields())
            .await?
            .ok_or_else(|| ApplicationError::not_found(CONTACT))?;

        tracing::info!(
            username = %user.username,
            contact_id = updated.id,
            "Contact updated"
        );

        Ok(updated)
    }
}

// ============================================================================
// RemoveContact
// ============================================================================

/// RemoveContact Handler
pub struct RemoveContactHandler {
    contact_repo: Arc<dyn ContactRepositoryPort>,
    guard: OwnershipGuard,
}

impl RemoveContactHandler {
    pub fn new(contact_repo: Arc<dyn ContactRepositoryPort>, guard: OwnershipGuard) -> Self {
        Self {
            contact_repo,
            guard,
        }
    }

    pub async fn handle(
        &self,
        user: &CurrentUser,
        command: RemoveContact,
    ) -> Result<(), ApplicationError> {
        command.validate()?;

        let contact = self.guard.contact(user, command.contact_id).await?;

        if !self.contact_repo.delete(&user.username, contact.id).await? {
            return Err(ApplicationError::not_found(CONTACT));
        }

        tracing::info!(
            username = %user.username,
            contact_id = contact.id,
            "Contact removed"
        );

        Ok(())
    }
}
