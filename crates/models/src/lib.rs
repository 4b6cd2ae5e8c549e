pub mod client;
pub mod contact;
pub mod db;
pub mod errors;

#[cfg(test)]
mod tests;
