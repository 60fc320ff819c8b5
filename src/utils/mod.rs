pub mod calculator;
pub mod countries;
pub mod errors;
pub mod format;

pub use calculator::calculate_transaction;
pub use errors::RemitError;
pub use format::{double_to_currency, format_as_percentage};

use uuid::Uuid;

use crate::models::{Contact, MobileWallet, Recipient};

/// Resolve each wallet's logo asset key from its provider name.
/// Unrecognized providers get the broken-image placeholder.
pub fn map_mobile_wallets_to_logos(wallets: Vec<MobileWallet>) -> Vec<MobileWallet> {
    wallets
        .into_iter()
        .map(|mut wallet| {
            let name = wallet.name.to_lowercase();
            let logo = if name.contains("wave") {
                "wave_wallet"
            } else if name.contains("mtn") {
                "mtn_money_wallet"
            } else if name.contains("orange") {
                "orange_money_wallet"
            } else if name.contains("moov") {
                "moov_money"
            } else if name.contains("cash") {
                "cash_plus"
            } else {
                "broken_image"
            };
            wallet.logo = Some(logo.to_string());
            wallet
        })
        .collect()
}

/// Build a recipient from a phone contact. The recipient gets a fresh id, no
/// wallet identifier yet, and a currency code inferred from the country.
pub fn convert_contact_to_recipient(contact: &Contact, country: &str) -> Recipient {
    Recipient {
        id: Uuid::new_v4().to_string(),
        name: format!("{} {}", contact.first_name, contact.last_name),
        country: country.to_string(),
        mobile_wallet: String::new(),
        phone_number: Some(contact.phone.clone()),
        currency_code: countries::get_currency_code(country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_mobile_wallets_to_logos() {
        let wallets = vec![
            MobileWallet {
                id: "1".to_string(),
                name: "Wave".to_string(),
                logo: None,
            },
            MobileWallet {
                id: "2".to_string(),
                name: "MTN Money".to_string(),
                logo: None,
            },
            MobileWallet {
                id: "3".to_string(),
                name: "Orange Money".to_string(),
                logo: None,
            },
            MobileWallet {
                id: "4".to_string(),
                name: "Moov".to_string(),
                logo: None,
            },
            MobileWallet {
                id: "5".to_string(),
                name: "Cash Plus".to_string(),
                logo: None,
            },
            MobileWallet {
                id: "6".to_string(),
                name: "Unknown Provider".to_string(),
                logo: None,
            },
        ];

        let mapped = map_mobile_wallets_to_logos(wallets);

        assert_eq!(mapped[0].logo.as_deref(), Some("wave_wallet"));
        assert_eq!(mapped[1].logo.as_deref(), Some("mtn_money_wallet"));
        assert_eq!(mapped[2].logo.as_deref(), Some("orange_money_wallet"));
        assert_eq!(mapped[3].logo.as_deref(), Some("moov_money"));
        assert_eq!(mapped[4].logo.as_deref(), Some("cash_plus"));
        assert_eq!(mapped[5].logo.as_deref(), Some("broken_image"));
    }

    #[test]
    fn test_convert_contact_to_recipient() {
        let contact = Contact {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            phone: "1234567890".to_string(),
        };

        let recipient = convert_contact_to_recipient(&contact, "United States");

        assert_eq!(recipient.name, "John Doe");
        assert_eq!(recipient.phone_number.as_deref(), Some("1234567890"));
        assert_eq!(recipient.country, "United States");
        assert_eq!(recipient.currency_code.as_deref(), Some("USD"));
        assert!(recipient.mobile_wallet.is_empty());
        assert!(!recipient.id.is_empty());
    }

    #[test]
    fn test_convert_contact_unknown_country_has_no_currency() {
        let contact = Contact {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "9876543210".to_string(),
        };

        let recipient = convert_contact_to_recipient(&contact, "Atlantis");

        assert_eq!(recipient.currency_code, None);
    }
}
