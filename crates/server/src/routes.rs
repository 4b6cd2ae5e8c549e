use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::clients::{ClientService, SeaOrmClientStore};
use service::contacts::{ContactService, SeaOrmContactStore};

pub mod clients;
pub mod contacts;

/// Shared handler state; the connection is injected at startup and
/// dropped at shutdown, never reached through globals.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientService<SeaOrmClientStore>>,
    pub contacts: Arc<ContactService<SeaOrmClientStore, SeaOrmContactStore>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let client_store = Arc::new(SeaOrmClientStore { db: db.clone() });
        let contact_store = Arc::new(SeaOrmContactStore { db });
        Self {
            clients: Arc::new(ClientService::new(client_store.clone())),
            contacts: Arc::new(ContactService::new(client_store, contact_store)),
        }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(clients::list).post(clients::create))
        .route("/user/:client_id/contact", post(contacts::create))
        .route("/user/:client_id/contact/:contact_id", delete(contacts::remove))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // One span per request with method and path at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Response events carry status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
