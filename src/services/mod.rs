pub mod balance_service;
pub mod coordinator;
pub mod draft_service;

pub use coordinator::RemitCoordinator;
pub use draft_service::DraftStore;
