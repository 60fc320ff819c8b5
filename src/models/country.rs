//! Country model

/// A destination or sender country
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    /// International dialing prefix, without the leading `+`
    pub phone_prefix: String,
    /// Flag asset key (the alpha-2 code in this build)
    pub flag: String,
}
