use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::clients::repository::ClientStore;
use crate::contacts::repository::ContactStore;
use crate::errors::ServiceError;

/// Empty or whitespace-only channel values mean "absent".
fn normalize_channel(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Application service for contact creation and deletion. The only place
/// with real branching: existence check, channel validation, duplicate
/// pre-check, then the insert guarded by the storage constraint.
pub struct ContactService<C: ClientStore, T: ContactStore> {
    clients: Arc<C>,
    contacts: Arc<T>,
}

impl<C: ClientStore, T: ContactStore> ContactService<C, T> {
    pub fn new(clients: Arc<C>, contacts: Arc<T>) -> Self {
        Self { clients, contacts }
    }

    #[instrument(skip(self, kind, email, phone), fields(client_id = %client_id))]
    pub async fn create(
        &self,
        client_id: Uuid,
        kind: &str,
        email: &str,
        phone: &str,
    ) -> Result<(models::client::Model, models::contact::Model), ServiceError> {
        let client = self
            .clients
            .get(client_id)
            .await?
            .ok_or(ServiceError::ClientNotFound)?;

        let email = normalize_channel(email);
        let phone = normalize_channel(phone);
        if email.is_none() && phone.is_none() {
            return Err(ServiceError::MissingContactChannel);
        }

        // Pre-check for the friendly message; the unique indexes still
        // catch the race where two inserts pass this check concurrently.
        if self.contacts.has_channel_conflict(client_id, email, phone).await? {
            return Err(ServiceError::DuplicateContactChannel);
        }

        let contact = self.contacts.insert(client_id, kind, email, phone).await?;
        info!(contact_id = %contact.id, "created contact");
        Ok((client, contact))
    }

    #[instrument(skip(self), fields(client_id = %client_id, contact_id = %contact_id))]
    pub async fn delete(&self, client_id: Uuid, contact_id: Uuid) -> Result<(), ServiceError> {
        self.clients
            .get(client_id)
            .await?
            .ok_or(ServiceError::ClientNotFound)?;
        let contact = self
            .contacts
            .get_for_client(client_id, contact_id)
            .await?
            .ok_or(ServiceError::ContactNotFound)?;
        self.contacts.delete(contact.id).await?;
        info!(contact_id = %contact_id, "deleted contact");
        Ok(())
    }

    /// A client's contacts in creation order.
    pub async fn list_for_client(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<models::contact::Model>, ServiceError> {
        self.clients
            .get(client_id)
            .await?
            .ok_or(ServiceError::ClientNotFound)?;
        self.contacts.list_for_client(client_id).await
    }
}
