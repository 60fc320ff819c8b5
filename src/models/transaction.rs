//! The working transaction record
//!
//! A single type backs both the in-progress draft assembled by the wizard
//! steps and the persisted ledger entry. While in draft the `id` is `None`;
//! the ledger assigns it on insert.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::recipient::Recipient;

/// Sender-side currency used when nothing else is selected
pub const DEFAULT_CURRENCY_CODE: &str = "EUR";

/// Fixed platform fee, charged in the sender currency
pub const DEFAULT_MONECO_FEES: f64 = 1.5;

/// EUR to XOF rate used by this build (not live-fetched)
pub const DEFAULT_CONVERSION_RATE: f64 = 655.94;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the ledger on insert; `None` while still a draft
    pub id: Option<i64>,
    /// Transfer category chosen in step 1
    pub option: Option<String>,
    /// Destination channel chosen in step 2 (mobile wallet or bank)
    pub channel: Option<String>,
    pub recipient: Option<Recipient>,
    pub selected_wallet: Option<String>,
    pub currency_code: String,
    /// String-encoded decimal; set by the calculator together with the
    /// derived fields below, never edited on its own
    pub amount: Option<String>,
    pub moneco_fees: f64,
    pub transfer_fees: f64,
    pub conversion_rate: f64,
    pub total_spent: f64,
    pub amount_received: f64,
    /// Creation time, epoch milliseconds
    pub date: i64,
}

impl Transaction {
    /// Start a fresh draft for the chosen transfer category
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: Some(option.into()),
            ..Self::default()
        }
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            id: None,
            option: None,
            channel: None,
            recipient: None,
            selected_wallet: None,
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            amount: None,
            moneco_fees: DEFAULT_MONECO_FEES,
            // Placeholder until the calculator runs on a real amount
            transfer_fees: 0.05,
            conversion_rate: DEFAULT_CONVERSION_RATE,
            total_spent: 0.0,
            amount_received: 0.0,
            date: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = Transaction::new("Send to Africa");

        assert_eq!(draft.option.as_deref(), Some("Send to Africa"));
        assert_eq!(draft.id, None);
        assert_eq!(draft.currency_code, "EUR");
        assert_eq!(draft.moneco_fees, 1.5);
        assert_eq!(draft.conversion_rate, 655.94);
        assert_eq!(draft.total_spent, 0.0);
        assert!(draft.amount.is_none());
        assert!(draft.date > 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let transaction = Transaction {
            recipient: Some(Recipient {
                id: "42".to_string(),
                name: "Awa Diop".to_string(),
                country: "Senegal".to_string(),
                mobile_wallet: "Wave".to_string(),
                phone_number: Some("+221770000000".to_string()),
                currency_code: Some("XOF".to_string()),
            }),
            amount: Some("100".to_string()),
            total_spent: 106.5,
            ..Transaction::new("Send to Africa")
        };

        let json = serde_json::to_string(&transaction).expect("Serialization failed");
        let decoded: Transaction = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(transaction, decoded);
    }
}
