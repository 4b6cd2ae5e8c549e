//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod clients;
pub mod contacts;
pub mod db;
pub mod errors;
#[cfg(test)]
pub mod test_support;
