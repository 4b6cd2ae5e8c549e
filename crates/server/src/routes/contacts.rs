use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateContactInput {
    #[serde(rename = "type")]
    pub kind: String,
    // Absent and empty both mean "no channel"
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Owning client summary embedded in the creation response.
#[derive(Debug, Serialize)]
pub struct ClientSummary {
    pub id: Uuid,
    pub name: String,
    pub date: chrono::DateTime<chrono::FixedOffset>,
}

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub id: Uuid,
    pub client: ClientSummary,
    #[serde(rename = "type")]
    pub kind: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<Uuid>,
    Json(input): Json<CreateContactInput>,
) -> Result<(StatusCode, Json<ContactCreated>), ApiError> {
    let (client, contact) = state
        .contacts
        .create(client_id, &input.kind, &input.email, &input.phone)
        .await?;
    info!(contact_id = %contact.id, client_id = %client.id, "contact created");
    let body = ContactCreated {
        id: contact.id,
        client: ClientSummary { id: client.id, name: client.name, date: client.date },
        kind: contact.kind,
        email: contact.email,
        phone: contact.phone,
    };
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((client_id, contact_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.contacts.delete(client_id, contact_id).await?;
    info!(%contact_id, %client_id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
