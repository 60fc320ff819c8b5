//! Country table and lookups
//!
//! The remit corridors this build serves: EU senders plus West and Central
//! African receivers. Rows are (alpha-2 code, name, dialing prefix, currency).

use crate::models::Country;

const COUNTRY_TABLE: &[(&str, &str, &str, &str)] = &[
    ("BJ", "Benin", "229", "XOF"),
    ("BF", "Burkina Faso", "226", "XOF"),
    ("CM", "Cameroon", "237", "XAF"),
    ("CV", "Cape Verde", "238", "CVE"),
    ("GH", "Ghana", "233", "GHS"),
    ("GN", "Guinea", "224", "GNF"),
    ("CI", "Ivory Coast", "225", "XOF"),
    ("ML", "Mali", "223", "XOF"),
    ("MA", "Morocco", "212", "MAD"),
    ("NE", "Niger", "227", "XOF"),
    ("NG", "Nigeria", "234", "NGN"),
    ("SN", "Senegal", "221", "XOF"),
    ("TG", "Togo", "228", "XOF"),
    ("BE", "Belgium", "32", "EUR"),
    ("FR", "France", "33", "EUR"),
    ("DE", "Germany", "49", "EUR"),
    ("IT", "Italy", "39", "EUR"),
    ("PT", "Portugal", "351", "EUR"),
    ("ES", "Spain", "34", "EUR"),
    ("GB", "United Kingdom", "44", "GBP"),
    ("US", "United States", "1", "USD"),
];

fn to_country(row: &(&str, &str, &str, &str)) -> Country {
    Country {
        name: row.1.to_string(),
        code: row.0.to_string(),
        phone_prefix: row.2.to_string(),
        flag: row.0.to_string(),
    }
}

/// All countries known to this build
pub fn get_countries() -> Vec<Country> {
    COUNTRY_TABLE.iter().map(to_country).collect()
}

/// Look up a country by its alpha-2 code
pub fn get_country_by_code(code: &str) -> Option<Country> {
    COUNTRY_TABLE
        .iter()
        .find(|row| row.0.eq_ignore_ascii_case(code))
        .map(to_country)
}

/// Look up a country from an international phone number.
///
/// Accepts `+` or `00` prefixed numbers; when prefixes overlap the longest
/// match wins.
pub fn get_country_by_phone_prefix(phone_number: &str) -> Option<Country> {
    let digits = phone_number
        .trim()
        .strip_prefix('+')
        .or_else(|| phone_number.trim().strip_prefix("00"))?;

    COUNTRY_TABLE
        .iter()
        .filter(|row| digits.starts_with(row.2))
        .max_by_key(|row| row.2.len())
        .map(to_country)
}

/// Currency code for a country name, if the country is known
pub fn get_currency_code(country_name: &str) -> Option<String> {
    COUNTRY_TABLE
        .iter()
        .find(|row| row.1.eq_ignore_ascii_case(country_name))
        .map(|row| row.3.to_string())
}
