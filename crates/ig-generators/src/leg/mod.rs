//! Leg generators: one annuity of coupons from a start date, an unadjusted
//! end date, a quote and a notional.
//!
//! Every leg shares [`LegConventions`].  Swap generators call
//! [`GeneratorLeg::generate_leg`] with dates they computed once for both
//! legs; standalone use goes through [`GeneratorInstrument`] with an `Ir`
//! attribute and generates a payer leg.

use std::sync::Arc;

use ig_cashflows::{Annuity, CashFlow, PaymentFixed};
use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, impl_eq_by_key, Natural, Real};
use ig_currencies::Currency;
use ig_time::schedule::{adjust_business_days, adjust_period, adjusted_schedule_between};
use ig_time::{BusinessDayConvention, Calendar, Date, Period, Schedule, StubType};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, spot_date, GeneratorInstrument};

mod fixed;
mod ibor;
mod ibor_compounding;
mod on_arithmetic_average;
mod on_compounded;

pub use fixed::GeneratorLegFixed;
pub use ibor::GeneratorLegIbor;
pub use ibor_compounding::GeneratorLegIborCompounding;
pub use on_arithmetic_average::GeneratorLegOnArithmeticAverage;
pub use on_compounded::GeneratorLegOnCompounded;

// ── Shared conventions ───────────────────────────────────────────────────────

/// How overnight fixings are laid out in a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FixingLayout {
    /// Every business day of the accrual period with its own factor.
    Daily,
    /// The accrual period alone.
    #[default]
    Simplified,
}

/// Conventions common to every leg.  The calendar takes part in equality
/// and hashing through its name.
#[derive(Debug, Clone)]
pub struct LegConventions {
    /// Leg currency.
    pub currency: Currency,
    /// Calendar for every adjustment.
    pub calendar: Arc<dyn Calendar>,
    /// Business days from trade to spot.
    pub spot_offset: Natural,
    /// Business days from accrual end to payment.
    pub payment_offset: Natural,
    /// Roll rule for schedule dates.
    pub business_day_convention: BusinessDayConvention,
    /// Month-end roll rule.
    pub end_of_month: bool,
    /// Where a broken period goes.
    pub stub_type: StubType,
    /// Exchange the notional at start and end.
    pub exchange_notional: bool,
}

impl LegConventions {
    /// Conventions with no payment lag, a short front stub and no notional
    /// exchange.
    pub fn new(
        currency: Currency,
        calendar: Arc<dyn Calendar>,
        spot_offset: Natural,
        business_day_convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Self {
        Self {
            currency,
            calendar,
            spot_offset,
            payment_offset: 0,
            business_day_convention,
            end_of_month,
            stub_type: StubType::ShortStart,
            exchange_notional: false,
        }
    }

    /// Set the payment lag.
    pub fn with_payment_offset(mut self, payment_offset: Natural) -> Self {
        self.payment_offset = payment_offset;
        self
    }

    /// Set the stub placement.
    pub fn with_stub_type(mut self, stub_type: StubType) -> Self {
        self.stub_type = stub_type;
        self
    }

    /// Turn notional exchange on or off.
    pub fn with_exchange_notional(mut self, exchange_notional: bool) -> Self {
        self.exchange_notional = exchange_notional;
        self
    }

    /// Same conventions on another calendar.
    pub fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            calendar,
            ..self.clone()
        }
    }

    #[allow(clippy::type_complexity)]
    fn eq_key(
        &self,
    ) -> (Currency, &str, Natural, Natural, BusinessDayConvention, bool, StubType, bool) {
        (
            self.currency,
            self.calendar.name(),
            self.spot_offset,
            self.payment_offset,
            self.business_day_convention,
            self.end_of_month,
            self.stub_type,
            self.exchange_notional,
        )
    }

    /// Adjusted accrual schedule from `start` to the unadjusted `end`.
    pub fn schedule(&self, start: Date, end: Date, period: Period) -> Result<Schedule> {
        adjusted_schedule_between(
            start,
            end,
            period,
            self.stub_type,
            self.business_day_convention,
            self.calendar.as_ref(),
            self.end_of_month,
        )
    }

    /// Payment date of a period ending on `accrual_end`.
    pub fn payment_date(&self, accrual_end: Date) -> Result<Date> {
        adjust_business_days(
            accrual_end,
            self.payment_offset as i32,
            self.calendar.as_ref(),
        )
    }

    /// `(start, unadjusted end)` of a leg traded on `reference_date` for
    /// the `Ir` attribute.
    pub fn leg_dates(
        &self,
        reference_date: Date,
        attribute: &GeneratorAttribute,
    ) -> Result<(Date, Date)> {
        let (start_period, end_period) = attribute.ir_periods()?;
        let spot = spot_date(reference_date, self.spot_offset, self.calendar.as_ref())?;
        let start = adjust_period(
            spot,
            start_period,
            self.business_day_convention,
            self.calendar.as_ref(),
            self.end_of_month,
        )?;
        let end = start.advance(end_period.length, end_period.unit)?;
        Ok((start, end))
    }

    /// Wrap coupons into an annuity, bracketing them with the notional
    /// exchange when enabled.  `notional` is already signed.
    pub(crate) fn annuity(
        &self,
        coupons: Vec<CashFlow>,
        start: Date,
        notional: Real,
        is_payer: bool,
    ) -> Result<Annuity> {
        if !self.exchange_notional {
            return Annuity::new(coupons, is_payer);
        }
        let last_payment = coupons
            .last()
            .map(CashFlow::payment_date)
            .unwrap_or(start);
        let mut flows = Vec::with_capacity(coupons.len() + 2);
        flows.push(PaymentFixed::new(self.currency, start, -notional)?.into());
        flows.extend(coupons);
        flows.push(PaymentFixed::new(self.currency, last_payment, notional)?.into());
        Annuity::new(flows, is_payer)
    }
}

impl_eq_by_key!(LegConventions);

/// Signed leg notional: negative for a payer leg.
pub(crate) fn signed_notional(notional: Real, is_payer: bool) -> Result<Real> {
    let notional = ensure_finite(notional, "notional")?;
    Ok(if is_payer { -notional } else { notional })
}

// ── Leg contract ──────────────────────────────────────────────────────────────

/// A generator of one leg.
pub trait GeneratorLeg: GeneratorInstrument<Output = Annuity> {
    /// The leg conventions.
    fn conventions(&self) -> &LegConventions;

    /// Generate the leg between `start` and the unadjusted `end`.  The
    /// quote is the fixed rate or the floating spread.
    fn generate_leg(
        &self,
        start: Date,
        end: Date,
        quote: Real,
        notional: Real,
        is_payer: bool,
    ) -> Result<Annuity>;
}

/// Standalone generation: spot-start the leg and generate a payer leg.
pub(crate) fn generate_standalone<L: GeneratorLeg + ?Sized>(
    leg: &L,
    reference_date: Date,
    quote: Real,
    notional: Real,
    attribute: &GeneratorAttribute,
) -> Result<Annuity> {
    check_call(reference_date, quote, notional)?;
    let (start, end) = leg.conventions().leg_dates(reference_date, attribute)?;
    leg.generate_leg(start, end, quote, notional, true)
}

/// Shared entry checks of `generate_leg`.
pub(crate) fn check_leg_call(start: Date, end: Date, quote: Real) -> Result<()> {
    ensure!(
        !start.is_null() && !end.is_null() && start < end,
        "leg dates {start}..{end} are invalid"
    );
    ensure_finite(quote, "quote")?;
    Ok(())
}

pub(crate) fn log_leg(name: &str, start: Date, end: Date, annuity: &Annuity) {
    debug!(generator = name, %start, %end, flows = annuity.len(), "generated leg");
}

/// Implement [`GeneratorInstrument`] for a leg generator with a `name` field.
macro_rules! impl_leg_instrument {
    ($ty:ty) => {
        impl $crate::generator::GeneratorInstrument for $ty {
            type Output = ig_cashflows::Annuity;

            fn name(&self) -> &str {
                &self.name
            }

            fn generate_instrument(
                &self,
                reference_date: ig_time::Date,
                quote: ig_core::Real,
                notional: ig_core::Real,
                attribute: &$crate::attribute::GeneratorAttribute,
            ) -> ig_core::errors::Result<ig_cashflows::Annuity> {
                $crate::leg::generate_standalone(self, reference_date, quote, notional, attribute)
            }
        }

        impl $crate::generator::WithCalendar for $ty {
            fn with_calendar(&self, calendar: std::sync::Arc<dyn ig_time::Calendar>) -> Self {
                Self {
                    conventions: self.conventions.with_calendar(calendar),
                    ..self.clone()
                }
            }
        }
    };
}
pub(crate) use impl_leg_instrument;
