use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;
use models::{client, contact};

/// Create a new client with generated id and current timestamp.
pub async fn create_client(db: &DatabaseConnection, name: &str) -> Result<client::Model, ServiceError> {
    let created = client::create(db, name).await?;
    Ok(created)
}

/// Get a client by id.
pub async fn get_client(db: &DatabaseConnection, id: Uuid) -> Result<Option<client::Model>, ServiceError> {
    let found = client::find(db, id).await?;
    Ok(found)
}

/// List all clients with their contacts, both in creation order.
pub async fn list_clients(
    db: &DatabaseConnection,
) -> Result<Vec<(client::Model, Vec<contact::Model>)>, ServiceError> {
    let rows = client::list_with_contacts(db).await?;
    Ok(rows)
}
