//! `IndexPrice`: price (inflation) index identity.

use ig_core::errors::{ensure_named, Result};
use ig_currencies::Currency;

/// A price index such as US CPI-U or Eurozone HICP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexPrice {
    name: String,
    currency: Currency,
}

impl IndexPrice {
    /// Create a price index.
    pub fn new(name: impl Into<String>, currency: Currency) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "price index")?;
        Ok(Self { name, currency })
    }

    /// Index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl std::fmt::Display for IndexPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
