//! Reference country data.
//!
//! A built-in country list and the static country-to-GST-rate table. The
//! GST table is consulted once when a primary country is selected; it is a
//! suggestion, never re-applied on its own.

use serde::{Deserialize, Serialize};

use crate::ids::CountryId;

/// A country as exposed by a country source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    /// Identifier within the reference list.
    pub id: CountryId,
    /// ISO-style code, uppercase.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Currency code used in this country.
    pub currency: String,
}

impl Country {
    /// Create a country entry.
    pub fn new(
        id: CountryId,
        code: impl Into<String>,
        name: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            currency: currency.into(),
        }
    }
}

/// Countries known to the platform out of the box.
const COUNTRY_TABLE: &[(&str, &str, &str)] = &[
    ("IN", "India", "INR"),
    ("US", "United States", "USD"),
    ("GB", "United Kingdom", "GBP"),
    ("CA", "Canada", "CAD"),
    ("AU", "Australia", "AUD"),
    ("NZ", "New Zealand", "NZD"),
    ("SG", "Singapore", "SGD"),
    ("AE", "United Arab Emirates", "AED"),
    ("SA", "Saudi Arabia", "SAR"),
    ("DE", "Germany", "EUR"),
    ("FR", "France", "EUR"),
    ("JP", "Japan", "JPY"),
];

/// Build the built-in reference country list.
pub fn reference_countries() -> Vec<Country> {
    COUNTRY_TABLE
        .iter()
        .map(|(code, name, currency)| Country::new(CountryId::new(*code), *code, *name, *currency))
        .collect()
}

/// Default GST/VAT rate for a country code, if the platform knows one.
///
/// Matching is case-insensitive. Codes without an entry fall back to the
/// configured platform default.
pub fn gst_rate_for(code: &str) -> Option<f64> {
    match code.to_uppercase().as_str() {
        "IN" => Some(18.0),
        "US" => Some(0.0),
        "GB" => Some(20.0),
        "CA" => Some(5.0),
        "AU" => Some(10.0),
        "NZ" => Some(15.0),
        "SG" => Some(9.0),
        "AE" => Some(5.0),
        "SA" => Some(15.0),
        "DE" => Some(19.0),
        "FR" => Some(20.0),
        "JP" => Some(10.0),
        _ => None,
    }
}

/// Look up the reference name for a country code, if known.
pub fn country_name(code: &str) -> Option<&'static str> {
    let code = code.to_uppercase();
    COUNTRY_TABLE
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, _)| *name)
}
