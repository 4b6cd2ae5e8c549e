pub mod client_service;
pub mod contact_service;
