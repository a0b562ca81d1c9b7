//! `Currency`: ISO 4217 currency identity.

use ig_core::errors::{Error, Result};
use std::str::FromStr;

/// Data describing a single currency.
///
/// Currencies are plain `Copy` values; equality is over every field, which in
/// practice means over the ISO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Currency {
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// Full name (e.g. "U.S. Dollar").
    pub name: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Number of fractional units per whole unit (e.g. 100 for cents).
    pub fractions_per_unit: u32,
}

impl Currency {
    /// Look up one of the built-in currencies by ISO code.
    pub fn from_code(code: &str) -> Result<Currency> {
        let code = code.trim().to_ascii_uppercase();
        crate::currencies::ALL
            .iter()
            .find(|c| c.code == code)
            .copied()
            .ok_or_else(|| Error::not_found("currency", code))
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Currency::from_code(s)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{EUR, USD};

    #[test]
    fn lookup_by_code() {
        assert_eq!(Currency::from_code("usd").unwrap(), USD);
        assert_eq!("EUR".parse::<Currency>().unwrap(), EUR);
        assert!(Currency::from_code("XXX").unwrap_err().is_lookup_error());
        assert_eq!(USD.to_string(), "USD");
    }
}
