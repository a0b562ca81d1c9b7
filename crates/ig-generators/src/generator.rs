//! The contract shared by every generator.

use std::sync::Arc;

use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, Real};
use ig_instruments::InstrumentDefinition;
use ig_time::schedule::adjust_business_days;
use ig_time::{Calendar, Date};

use crate::attribute::GeneratorAttribute;
use crate::instrument::{
    GeneratorBill, GeneratorDeposit, GeneratorDepositOn, GeneratorDepositOnCounterpart,
    GeneratorForexSwap, GeneratorInterestRateFutures, GeneratorSwapFixedCompoundedOnCompounded,
    GeneratorSwapFixedIbor, GeneratorSwapFixedInflationZeroCoupon, GeneratorSwapFixedOn,
    GeneratorSwapIborCompoundingIbor, GeneratorSwapIborIbor, GeneratorSwapXCcyIborIbor,
};
use crate::leg::{
    GeneratorLegFixed, GeneratorLegIbor, GeneratorLegIborCompounding,
    GeneratorLegOnArithmeticAverage, GeneratorLegOnCompounded,
};

/// A named, immutable bundle of conventions that turns a quote, a notional
/// and a reference date into an instrument.
pub trait GeneratorInstrument: std::fmt::Debug + Send + Sync {
    /// What a call produces.
    type Output;

    /// Generator name (e.g. `"USD6MLIBOR3M"`).
    fn name(&self) -> &str;

    /// Generate the instrument traded on `reference_date` at `quote`.
    ///
    /// # Errors
    /// A null reference date, a non-finite quote or notional, or an
    /// attribute of the wrong variant is an argument error.
    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<Self::Output>;
}

/// Generators whose templates are stored without a specific calendar.
pub trait WithCalendar: Sized {
    /// A copy of `self` using `calendar` for every date adjustment.
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self;
}

/// Validate the arguments every `generate_instrument` call shares.
pub(crate) fn check_call(reference_date: Date, quote: Real, notional: Real) -> Result<()> {
    ensure!(!reference_date.is_null(), "reference date is required");
    ensure_finite(quote, "quote")?;
    ensure_finite(notional, "notional")?;
    Ok(())
}

/// Reference date moved `lag` business days forward.
pub(crate) fn spot_date(reference_date: Date, lag: u32, calendar: &dyn Calendar) -> Result<Date> {
    adjust_business_days(reference_date, lag as i32, calendar)
}

// ── The generator union ──────────────────────────────────────────────────────

/// Any generator, producing an [`InstrumentDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Term deposits.
    Deposit(GeneratorDeposit),
    /// Overnight deposits.
    DepositOn(GeneratorDepositOn),
    /// Overnight deposits with a counterpart.
    DepositOnCounterpart(GeneratorDepositOnCounterpart),
    /// FX swaps.
    ForexSwap(GeneratorForexSwap),
    /// Interest-rate futures.
    InterestRateFutures(GeneratorInterestRateFutures),
    /// Bills.
    Bill(GeneratorBill),
    /// Fixed against Ibor.
    SwapFixedIbor(GeneratorSwapFixedIbor),
    /// Fixed against compounded overnight.
    SwapFixedOn(GeneratorSwapFixedOn),
    /// Compounded fixed against daily compounded overnight.
    SwapFixedCompoundedOnCompounded(GeneratorSwapFixedCompoundedOnCompounded),
    /// Ibor basis.
    SwapIborIbor(GeneratorSwapIborIbor),
    /// Compounded Ibor against Ibor.
    SwapIborCompoundingIbor(GeneratorSwapIborCompoundingIbor),
    /// Cross-currency Ibor basis.
    SwapXCcyIborIbor(GeneratorSwapXCcyIborIbor),
    /// Zero-coupon inflation.
    SwapFixedInflationZeroCoupon(GeneratorSwapFixedInflationZeroCoupon),
    /// Fixed leg.
    LegFixed(GeneratorLegFixed),
    /// Ibor leg.
    LegIbor(GeneratorLegIbor),
    /// Compounded Ibor leg.
    LegIborCompounding(GeneratorLegIborCompounding),
    /// Compounded overnight leg.
    LegOnCompounded(GeneratorLegOnCompounded),
    /// Arithmetic-average overnight leg.
    LegOnArithmeticAverage(GeneratorLegOnArithmeticAverage),
}

/// Apply `$body` to the generator inside every variant.
macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            Generator::Deposit($g) => $body,
            Generator::DepositOn($g) => $body,
            Generator::DepositOnCounterpart($g) => $body,
            Generator::ForexSwap($g) => $body,
            Generator::InterestRateFutures($g) => $body,
            Generator::Bill($g) => $body,
            Generator::SwapFixedIbor($g) => $body,
            Generator::SwapFixedOn($g) => $body,
            Generator::SwapFixedCompoundedOnCompounded($g) => $body,
            Generator::SwapIborIbor($g) => $body,
            Generator::SwapIborCompoundingIbor($g) => $body,
            Generator::SwapXCcyIborIbor($g) => $body,
            Generator::SwapFixedInflationZeroCoupon($g) => $body,
            Generator::LegFixed($g) => $body,
            Generator::LegIbor($g) => $body,
            Generator::LegIborCompounding($g) => $body,
            Generator::LegOnCompounded($g) => $body,
            Generator::LegOnArithmeticAverage($g) => $body,
        }
    };
}

macro_rules! impl_from_generator {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Generator {
                fn from(value: $ty) -> Self {
                    Generator::$variant(value)
                }
            }
        )*
    };
}

impl_from_generator!(
    Deposit(GeneratorDeposit),
    DepositOn(GeneratorDepositOn),
    DepositOnCounterpart(GeneratorDepositOnCounterpart),
    ForexSwap(GeneratorForexSwap),
    InterestRateFutures(GeneratorInterestRateFutures),
    Bill(GeneratorBill),
    SwapFixedIbor(GeneratorSwapFixedIbor),
    SwapFixedOn(GeneratorSwapFixedOn),
    SwapFixedCompoundedOnCompounded(GeneratorSwapFixedCompoundedOnCompounded),
    SwapIborIbor(GeneratorSwapIborIbor),
    SwapIborCompoundingIbor(GeneratorSwapIborCompoundingIbor),
    SwapXCcyIborIbor(GeneratorSwapXCcyIborIbor),
    SwapFixedInflationZeroCoupon(GeneratorSwapFixedInflationZeroCoupon),
    LegFixed(GeneratorLegFixed),
    LegIbor(GeneratorLegIbor),
    LegIborCompounding(GeneratorLegIborCompounding),
    LegOnCompounded(GeneratorLegOnCompounded),
    LegOnArithmeticAverage(GeneratorLegOnArithmeticAverage),
);

impl GeneratorInstrument for Generator {
    type Output = InstrumentDefinition;

    fn name(&self) -> &str {
        dispatch!(self, g => g.name())
    }

    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<InstrumentDefinition> {
        dispatch!(self, g => g
            .generate_instrument(reference_date, quote, notional, attribute)
            .map(InstrumentDefinition::from))
    }
}

impl WithCalendar for Generator {
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        dispatch!(self, g => Generator::from(g.with_calendar(calendar)))
    }
}
