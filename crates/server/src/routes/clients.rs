use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateClientInput {
    pub name: String,
}

/// Client record with its owned contacts, as listed by `GET /users`.
#[derive(Debug, Serialize)]
pub struct ClientWithContacts {
    #[serde(flatten)]
    pub client: models::client::Model,
    pub contacts: Vec<models::contact::Model>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClientInput>,
) -> Result<(StatusCode, Json<models::client::Model>), ApiError> {
    let created = state.clients.create(&input.name).await?;
    info!(client_id = %created.id, "client created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientWithContacts>>, ApiError> {
    let rows = state.clients.list().await?;
    let body = rows
        .into_iter()
        .map(|(client, contacts)| ClientWithContacts { client, contacts })
        .collect();
    Ok(Json(body))
}
