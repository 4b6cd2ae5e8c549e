use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Storage abstraction for contacts. `insert` must fail with
/// `DuplicateContactChannel` when a unique channel constraint is violated,
/// so the store stays the authoritative duplicate check.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(
        &self,
        client_id: Uuid,
        kind: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<models::contact::Model, ServiceError>;
    async fn get_for_client(
        &self,
        client_id: Uuid,
        id: Uuid,
    ) -> Result<Option<models::contact::Model>, ServiceError>;
    async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<models::contact::Model>, ServiceError>;
    async fn has_channel_conflict(
        &self,
        client_id: Uuid,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<bool, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmContactStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ContactStore for SeaOrmContactStore {
    async fn insert(
        &self,
        client_id: Uuid,
        kind: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<models::contact::Model, ServiceError> {
        crate::db::contact_service::create_contact(&self.db, client_id, kind, email, phone).await
    }

    async fn get_for_client(
        &self,
        client_id: Uuid,
        id: Uuid,
    ) -> Result<Option<models::contact::Model>, ServiceError> {
        crate::db::contact_service::get_contact_for_client(&self.db, client_id, id).await
    }

    async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<models::contact::Model>, ServiceError> {
        crate::db::contact_service::list_contacts_for_client(&self.db, client_id).await
    }

    async fn has_channel_conflict(
        &self,
        client_id: Uuid,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<bool, ServiceError> {
        crate::db::contact_service::find_channel_conflict(&self.db, client_id, email, phone).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        crate::db::contact_service::delete_contact(&self.db, id).await
    }
}
