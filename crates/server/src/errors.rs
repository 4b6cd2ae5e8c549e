use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Route-boundary error: an HTTP status plus a `{"message": …}` body.
/// The wire messages are the Portuguese ones the API has always spoken;
/// the service layer itself stays message-agnostic.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::ClientNotFound => {
                Self::new(StatusCode::BAD_REQUEST, "Usuário não encontrado")
            }
            ServiceError::ContactNotFound => {
                Self::new(StatusCode::NOT_FOUND, "Contato não encontrado")
            }
            // 404 for the validation failure is the contract the clients of
            // this API already depend on
            ServiceError::MissingContactChannel => {
                Self::new(StatusCode::NOT_FOUND, "Insira pelo menos um telefone ou email")
            }
            ServiceError::DuplicateContactChannel => {
                Self::new(StatusCode::BAD_REQUEST, "O email do usuário já foi cadastrado")
            }
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            other => {
                error!(err = %other, "service error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Erro interno do servidor")
            }
        }
    }
}
