//! Data models for the remit flows
//!
//! This module organizes the domain types shared across the api, db and
//! service layers. Types that cross a wire or a storage boundary carry serde
//! derives; the rest are plain structs.

pub mod contact;
pub mod country;
pub mod process_state;
pub mod recipient;
pub mod transaction;
pub mod transfer_option;
pub mod wallet;

// Re-export commonly used types for convenience
pub use contact::Contact;
pub use country::Country;
pub use process_state::ProcessState;
pub use recipient::Recipient;
pub use transaction::Transaction;
pub use transfer_option::{money_transfer_options, transfer_destination_options, TransferOption};
pub use wallet::MobileWallet;
