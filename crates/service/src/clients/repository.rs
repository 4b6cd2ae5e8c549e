use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Storage abstraction for clients; keeps the services decoupled from
/// SeaORM.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn insert(&self, name: &str) -> Result<models::client::Model, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<models::client::Model>, ServiceError>;
    async fn list_with_contacts(
        &self,
    ) -> Result<Vec<(models::client::Model, Vec<models::contact::Model>)>, ServiceError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmClientStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ClientStore for SeaOrmClientStore {
    async fn insert(&self, name: &str) -> Result<models::client::Model, ServiceError> {
        crate::db::client_service::create_client(&self.db, name).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<models::client::Model>, ServiceError> {
        crate::db::client_service::get_client(&self.db, id).await
    }

    async fn list_with_contacts(
        &self,
    ) -> Result<Vec<(models::client::Model, Vec<models::contact::Model>)>, ServiceError> {
        crate::db::client_service::list_clients(&self.db).await
    }
}
