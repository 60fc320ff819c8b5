//! Mobile wallet model

use serde::{Deserialize, Serialize};

/// A mobile-money provider a recipient can receive funds through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobileWallet {
    pub id: String,
    pub name: String,
    /// Logo asset key, resolved locally from the provider name; never sent
    /// by the catalog service
    #[serde(skip)]
    pub logo: Option<String>,
}
