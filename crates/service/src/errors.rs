use thiserror::Error;

/// Business failures surfaced to the route layer. All variants are
/// recovered at the HTTP boundary; none are fatal.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("client not found")]
    ClientNotFound,
    #[error("contact not found")]
    ContactNotFound,
    #[error("provide at least one phone or email")]
    MissingContactChannel,
    #[error("this email/phone is already registered")]
    DuplicateContactChannel,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            // The storage-level unique constraint is the authoritative
            // duplicate signal; fold it into the business taxonomy.
            models::errors::ModelError::Conflict(_) => Self::DuplicateContactChannel,
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
            models::errors::ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
