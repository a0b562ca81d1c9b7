//! `IborIndex`: convention of a term interbank offered rate.

use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, impl_eq_by_key, Natural};
use ig_currencies::Currency;
use ig_time::{BusinessDayConvention, DayCounter, Period, TenorConvention};
use std::sync::Arc;

/// An interbank offered-rate index convention (e.g. Euribor 6M, USD LIBOR 3M).
///
/// Holds conventions only; fixings live with whoever consumes the generated
/// coupons.  Equality and hashing cover every field.
#[derive(Debug, Clone)]
pub struct IborIndex {
    name: String,
    currency: Currency,
    tenor: Period,
    spot_lag: Natural,
    day_counter: Arc<dyn DayCounter>,
    convention: BusinessDayConvention,
    end_of_month: bool,
}

impl IborIndex {
    /// Create an index convention.
    ///
    /// # Errors
    /// An empty name or a non-positive tenor is an argument error.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        tenor: Period,
        spot_lag: Natural,
        day_counter: Arc<dyn DayCounter>,
        convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "ibor index")?;
        ensure!(tenor.is_positive(), "ibor index {name}: tenor must be positive, got {tenor}");
        Ok(Self {
            name,
            currency,
            tenor,
            spot_lag,
            day_counter,
            convention,
            end_of_month,
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

    /// Business days between fixing and the start of the deposit period.
    pub fn spot_lag(&self) -> Natural {
        self.spot_lag
    }

    /// Day counter of the deposit period.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    fn eq_key(&self) -> (&str, Currency, Period, Natural, &str, BusinessDayConvention, bool) {
        (
            &self.name,
            self.currency,
            self.tenor,
            self.spot_lag,
            self.day_counter.name(),
            self.convention,
            self.end_of_month,
        )
    }
}

impl_eq_by_key!(IborIndex);

impl TenorConvention for IborIndex {
    fn tenor(&self) -> Period {
        self.tenor
    }

    fn business_day_convention(&self) -> BusinessDayConvention {
        self.convention
    }

    fn end_of_month(&self) -> bool {
        self.end_of_month
    }
}

impl std::fmt::Display for IborIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
