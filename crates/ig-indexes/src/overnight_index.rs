//! `IndexOn`: overnight rate index convention.

use ig_core::errors::{ensure_named, Result};
use ig_core::{impl_eq_by_key, Natural};
use ig_currencies::Currency;
use ig_time::DayCounter;
use std::sync::Arc;

/// An overnight index (Fed Funds, SONIA, €STR…).
#[derive(Debug, Clone)]
pub struct IndexOn {
    name: String,
    currency: Currency,
    day_counter: Arc<dyn DayCounter>,
    publication_lag: Natural,
}

impl IndexOn {
    /// Create an overnight index convention.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        day_counter: Arc<dyn DayCounter>,
        publication_lag: Natural,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "overnight index")?;
        Ok(Self {
            name,
            currency,
            day_counter,
            publication_lag,
        })
    }

    /// Index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Day counter for the daily accrual.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    /// Days between the rate's value date and its publication (0 or 1).
    pub fn publication_lag(&self) -> Natural {
        self.publication_lag
    }

    fn eq_key(&self) -> (&str, Currency, &str, Natural) {
        (&self.name, self.currency, self.day_counter.name(), self.publication_lag)
    }
}

impl_eq_by_key!(IndexOn);

impl std::fmt::Display for IndexOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
