use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;
use models::contact;

/// Insert a contact row. A unique-index violation surfaces as
/// `DuplicateContactChannel` through the model error conversion.
pub async fn create_contact(
    db: &DatabaseConnection,
    client_id: Uuid,
    kind: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<contact::Model, ServiceError> {
    let created = contact::create(db, client_id, kind, email, phone).await?;
    Ok(created)
}

/// Get a contact by id, scoped to its owning client.
pub async fn get_contact_for_client(
    db: &DatabaseConnection,
    client_id: Uuid,
    id: Uuid,
) -> Result<Option<contact::Model>, ServiceError> {
    let found = contact::find_for_client(db, client_id, id).await?;
    Ok(found)
}

/// List a client's contacts in creation order.
pub async fn list_contacts_for_client(
    db: &DatabaseConnection,
    client_id: Uuid,
) -> Result<Vec<contact::Model>, ServiceError> {
    let rows = contact::list_for_client(db, client_id).await?;
    Ok(rows)
}

/// Does the client already have a contact using one of the proposed
/// non-empty channels?
pub async fn find_channel_conflict(
    db: &DatabaseConnection,
    client_id: Uuid,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<bool, ServiceError> {
    let hit = contact::find_channel_conflict(db, client_id, email, phone).await?;
    Ok(hit.is_some())
}

/// Delete a contact row. Returns whether a row was removed.
pub async fn delete_contact(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let deleted = contact::delete(db, id).await?;
    Ok(deleted)
}
