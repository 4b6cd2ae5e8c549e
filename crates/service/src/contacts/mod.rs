pub mod repository;
pub mod service;

pub use repository::{ContactStore, SeaOrmContactStore};
pub use service::ContactService;
