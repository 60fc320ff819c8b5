//! RemitConnect core
//!
//! The money-transfer flows behind the RemitConnect screens: the catalog
//! client (wallets, recipients), the local transaction ledger, the fee and
//! conversion calculator, and the coordinator that drives the transfer
//! wizard over a copy-on-write draft.

pub mod api;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;
