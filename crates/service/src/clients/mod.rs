pub mod repository;
pub mod service;

pub use repository::{ClientStore, SeaOrmClientStore};
pub use service::ClientService;
