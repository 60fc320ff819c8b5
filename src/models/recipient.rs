//! Recipient model

use serde::{Deserialize, Serialize};

/// Someone money can be sent to, as returned by the catalog service and as
/// persisted inside a ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Wallet identifier the recipient receives funds through
    pub mobile_wallet: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "currencyCode", default)]
    pub currency_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": "1",
            "name": "Kossi Mensah",
            "country": "Togo",
            "mobile_wallet": "Moov Money",
            "phoneNumber": "+22890010203"
        }"#;

        let recipient: Recipient = serde_json::from_str(json).expect("Deserialization failed");

        assert_eq!(recipient.name, "Kossi Mensah");
        assert_eq!(recipient.mobile_wallet, "Moov Money");
        assert_eq!(recipient.phone_number.as_deref(), Some("+22890010203"));
        // Absent optional fields decode to None
        assert_eq!(recipient.currency_code, None);
    }
}
