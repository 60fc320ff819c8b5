pub mod client;
pub mod models;

pub use client::RemitClient;
pub use models::ApiError;
