use std::sync::Arc;
use tracing::{info, instrument};

use crate::clients::repository::ClientStore;
use crate::errors::ServiceError;

/// Application service for client creation and listing.
pub struct ClientService<S: ClientStore> {
    store: Arc<S>,
}

impl<S: ClientStore> ClientService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    #[instrument(skip(self, name))]
    pub async fn create(&self, name: &str) -> Result<models::client::Model, ServiceError> {
        let created = self.store.insert(name).await?;
        info!(client_id = %created.id, "created client");
        Ok(created)
    }

    /// All clients, each with its contacts in creation order.
    pub async fn list(
        &self,
    ) -> Result<Vec<(models::client::Model, Vec<models::contact::Model>)>, ServiceError> {
        self.store.list_with_contacts().await
    }
}
