//! Swap generators: two leg generators sharing one start date and one
//! unadjusted end date.
//!
//! The start is the first leg's spot date moved by the attribute's start
//! period; the end is the start plus the tenor, left unadjusted so that both
//! legs roll it with their own conventions.  The trait method generates a
//! swap paying the first leg; `generate_instrument_with` takes the side
//! explicitly.

use std::sync::Arc;

use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, CompoundingMethod, Real};
use ig_instruments::SwapDefinition;
use ig_time::{Calendar, Date};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, GeneratorInstrument, WithCalendar};
use crate::leg::{
    FixingLayout, GeneratorLeg, GeneratorLegFixed, GeneratorLegIbor, GeneratorLegIborCompounding,
    GeneratorLegOnCompounded,
};

/// Quotes and notionals of the two legs of one call.
struct LegInputs {
    first_quote: Real,
    second_quote: Real,
    first_notional: Real,
    second_notional: Real,
}

fn generate_two_legs(
    name: &str,
    first: &impl GeneratorLeg,
    second: &impl GeneratorLeg,
    reference_date: Date,
    attribute: &GeneratorAttribute,
    inputs: LegInputs,
    is_payer: bool,
) -> Result<SwapDefinition> {
    check_call(reference_date, inputs.first_quote, inputs.first_notional)?;
    let (start, end) = first.conventions().leg_dates(reference_date, attribute)?;
    let first_leg =
        first.generate_leg(start, end, inputs.first_quote, inputs.first_notional, is_payer)?;
    let second_leg =
        second.generate_leg(start, end, inputs.second_quote, inputs.second_notional, !is_payer)?;
    debug!(
        generator = name,
        %reference_date,
        %start,
        %end,
        first_flows = first_leg.len(),
        second_flows = second_leg.len(),
        "generated swap"
    );
    SwapDefinition::new(first_leg, second_leg)
}

fn same_currency(first: &impl GeneratorLeg, second: &impl GeneratorLeg) -> Result<()> {
    ensure!(
        first.conventions().currency == second.conventions().currency,
        "swap legs must share a currency, got {} and {}",
        first.conventions().currency,
        second.conventions().currency
    );
    Ok(())
}

/// `GeneratorInstrument` (payer of the first leg) and `WithCalendar` for a
/// swap generator with `name` and two leg fields.
macro_rules! impl_swap_generator {
    ($ty:ty, $first:ident, $second:ident) => {
        impl GeneratorInstrument for $ty {
            type Output = SwapDefinition;

            fn name(&self) -> &str {
                &self.name
            }

            fn generate_instrument(
                &self,
                reference_date: Date,
                quote: Real,
                notional: Real,
                attribute: &GeneratorAttribute,
            ) -> Result<SwapDefinition> {
                self.generate_instrument_with(reference_date, quote, notional, attribute, true)
            }
        }

        impl WithCalendar for $ty {
            fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
                Self {
                    name: self.name.clone(),
                    $first: self.$first.with_calendar(calendar.clone()),
                    $second: self.$second.with_calendar(calendar),
                }
            }
        }
    };
}

// ── Fixed / Ibor ──────────────────────────────────────────────────────────────

/// Vanilla swaps: fixed leg against an Ibor leg; the quote is the fixed rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSwapFixedIbor {
    name: String,
    fixed_leg: GeneratorLegFixed,
    ibor_leg: GeneratorLegIbor,
}

impl GeneratorSwapFixedIbor {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        fixed_leg: GeneratorLegFixed,
        ibor_leg: GeneratorLegIbor,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "swap generator")?;
        same_currency(&fixed_leg, &ibor_leg)?;
        Ok(Self {
            name,
            fixed_leg,
            ibor_leg,
        })
    }

    /// Fixed leg conventions.
    pub fn fixed_leg(&self) -> &GeneratorLegFixed {
        &self.fixed_leg
    }

    /// Ibor leg conventions.
    pub fn ibor_leg(&self) -> &GeneratorLegIbor {
        &self.ibor_leg
    }

    /// Generate a swap paying (`is_payer`) or receiving the fixed rate.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        let inputs = LegInputs {
            first_quote: quote,
            second_quote: 0.0,
            first_notional: notional,
            second_notional: notional,
        };
        generate_two_legs(
            &self.name,
            &self.fixed_leg,
            &self.ibor_leg,
            reference_date,
            attribute,
            inputs,
            is_payer,
        )
    }
}

impl_swap_generator!(GeneratorSwapFixedIbor, fixed_leg, ibor_leg);

// ── Fixed / overnight ─────────────────────────────────────────────────────────

/// Overnight indexed swaps: fixed leg against a compounded overnight leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSwapFixedOn {
    name: String,
    fixed_leg: GeneratorLegFixed,
    on_leg: GeneratorLegOnCompounded,
}

impl GeneratorSwapFixedOn {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        fixed_leg: GeneratorLegFixed,
        on_leg: GeneratorLegOnCompounded,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "swap generator")?;
        same_currency(&fixed_leg, &on_leg)?;
        Ok(Self {
            name,
            fixed_leg,
            on_leg,
        })
    }

    /// Fixed leg conventions.
    pub fn fixed_leg(&self) -> &GeneratorLegFixed {
        &self.fixed_leg
    }

    /// Overnight leg conventions.
    pub fn on_leg(&self) -> &GeneratorLegOnCompounded {
        &self.on_leg
    }

    /// Generate a swap paying (`is_payer`) or receiving the fixed rate.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        let inputs = LegInputs {
            first_quote: quote,
            second_quote: 0.0,
            first_notional: notional,
            second_notional: notional,
        };
        generate_two_legs(
            &self.name,
            &self.fixed_leg,
            &self.on_leg,
            reference_date,
            attribute,
            inputs,
            is_payer,
        )
    }
}

impl_swap_generator!(GeneratorSwapFixedOn, fixed_leg, on_leg);

// ── Compounded fixed / daily compounded overnight ─────────────────────────────

/// Swaps compounding both legs over business days (BRL-CDI style): a
/// compounded fixed coupon against daily compounded overnight fixings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSwapFixedCompoundedOnCompounded {
    name: String,
    fixed_leg: GeneratorLegFixed,
    on_leg: GeneratorLegOnCompounded,
}

impl GeneratorSwapFixedCompoundedOnCompounded {
    /// Create the generator.
    ///
    /// # Errors
    /// The fixed leg must compound and the overnight leg must use the
    /// `Daily` fixing layout.
    pub fn new(
        name: impl Into<String>,
        fixed_leg: GeneratorLegFixed,
        on_leg: GeneratorLegOnCompounded,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "swap generator")?;
        same_currency(&fixed_leg, &on_leg)?;
        ensure!(fixed_leg.is_compounded(), "{name}: fixed leg must compound");
        ensure!(
            on_leg.fixing_layout() == FixingLayout::Daily,
            "{name}: overnight leg must list daily fixings"
        );
        Ok(Self {
            name,
            fixed_leg,
            on_leg,
        })
    }

    /// Fixed leg conventions.
    pub fn fixed_leg(&self) -> &GeneratorLegFixed {
        &self.fixed_leg
    }

    /// Overnight leg conventions.
    pub fn on_leg(&self) -> &GeneratorLegOnCompounded {
        &self.on_leg
    }

    /// Generate a swap paying (`is_payer`) or receiving the fixed rate.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        let inputs = LegInputs {
            first_quote: quote,
            second_quote: 0.0,
            first_notional: notional,
            second_notional: notional,
        };
        generate_two_legs(
            &self.name,
            &self.fixed_leg,
            &self.on_leg,
            reference_date,
            attribute,
            inputs,
            is_payer,
        )
    }
}

impl_swap_generator!(GeneratorSwapFixedCompoundedOnCompounded, fixed_leg, on_leg);

// ── Ibor / Ibor ───────────────────────────────────────────────────────────────

/// Basis swaps between two Ibor legs; the quote is the spread on the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSwapIborIbor {
    name: String,
    first_leg: GeneratorLegIbor,
    second_leg: GeneratorLegIbor,
}

impl GeneratorSwapIborIbor {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        first_leg: GeneratorLegIbor,
        second_leg: GeneratorLegIbor,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "swap generator")?;
        same_currency(&first_leg, &second_leg)?;
        Ok(Self {
            name,
            first_leg,
            second_leg,
        })
    }

    /// Leg carrying the spread.
    pub fn first_leg(&self) -> &GeneratorLegIbor {
        &self.first_leg
    }

    /// Flat leg.
    pub fn second_leg(&self) -> &GeneratorLegIbor {
        &self.second_leg
    }

    /// Generate a swap paying (`is_payer`) or receiving the first leg.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        let inputs = LegInputs {
            first_quote: quote,
            second_quote: 0.0,
            first_notional: notional,
            second_notional: notional,
        };
        generate_two_legs(
            &self.name,
            &self.first_leg,
            &self.second_leg,
            reference_date,
            attribute,
            inputs,
            is_payer,
        )
    }
}

impl_swap_generator!(GeneratorSwapIborIbor, first_leg, second_leg);

// ── Compounded Ibor / Ibor ────────────────────────────────────────────────────

/// Basis swaps with a compounded short-tenor Ibor leg (carrying the spread)
/// against a longer-tenor Ibor leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSwapIborCompoundingIbor {
    name: String,
    compounding_leg: GeneratorLegIborCompounding,
    ibor_leg: GeneratorLegIbor,
}

impl GeneratorSwapIborCompoundingIbor {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        compounding_leg: GeneratorLegIborCompounding,
        ibor_leg: GeneratorLegIbor,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "swap generator")?;
        same_currency(&compounding_leg, &ibor_leg)?;
        Ok(Self {
            name,
            compounding_leg,
            ibor_leg,
        })
    }

    /// Compounded leg.
    pub fn compounding_leg(&self) -> &GeneratorLegIborCompounding {
        &self.compounding_leg
    }

    /// Plain Ibor leg.
    pub fn ibor_leg(&self) -> &GeneratorLegIbor {
        &self.ibor_leg
    }

    /// Compounding method of the first leg.
    pub fn compounding_method(&self) -> CompoundingMethod {
        self.compounding_leg.compounding_method()
    }

    /// Generate a swap paying (`is_payer`) or receiving the compounded leg.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        let inputs = LegInputs {
            first_quote: quote,
            second_quote: 0.0,
            first_notional: notional,
            second_notional: notional,
        };
        generate_two_legs(
            &self.name,
            &self.compounding_leg,
            &self.ibor_leg,
            reference_date,
            attribute,
            inputs,
            is_payer,
        )
    }
}

impl_swap_generator!(GeneratorSwapIborCompoundingIbor, compounding_leg, ibor_leg);

// ── Cross-currency Ibor / Ibor ────────────────────────────────────────────────

/// Cross-currency basis swaps with notional exchange on both legs.  The
/// second notional is the first converted at the attribute's spot rate; the
/// quote is the spread on the first leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSwapXCcyIborIbor {
    name: String,
    first_leg: GeneratorLegIbor,
    second_leg: GeneratorLegIbor,
}

impl GeneratorSwapXCcyIborIbor {
    /// Create the generator.
    ///
    /// # Errors
    /// The legs must be in different currencies and both exchange notional.
    pub fn new(
        name: impl Into<String>,
        first_leg: GeneratorLegIbor,
        second_leg: GeneratorLegIbor,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "swap generator")?;
        let (c1, c2) = (first_leg.conventions(), second_leg.conventions());
        ensure!(c1.currency != c2.currency, "{name}: legs must be in different currencies");
        ensure!(
            c1.exchange_notional && c2.exchange_notional,
            "{name}: both legs must exchange notional"
        );
        Ok(Self {
            name,
            first_leg,
            second_leg,
        })
    }

    /// Leg carrying the spread.
    pub fn first_leg(&self) -> &GeneratorLegIbor {
        &self.first_leg
    }

    /// Flat leg.
    pub fn second_leg(&self) -> &GeneratorLegIbor {
        &self.second_leg
    }

    /// A copy with each leg on its own calendar.  [`WithCalendar`] puts
    /// both legs on one calendar.
    pub fn with_calendars(&self, first: Arc<dyn Calendar>, second: Arc<dyn Calendar>) -> Self {
        Self {
            name: self.name.clone(),
            first_leg: self.first_leg.with_calendar(first),
            second_leg: self.second_leg.with_calendar(second),
        }
    }

    /// Generate a swap paying (`is_payer`) or receiving the first leg.  The
    /// attribute must be `Fx`.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        check_call(reference_date, quote, notional)?;
        let (start_period, end_period, fx_matrix) = attribute.fx_parts()?;
        let fx = fx_matrix.fx_rate(
            self.first_leg.conventions().currency,
            self.second_leg.conventions().currency,
        )?;
        let inputs = LegInputs {
            first_quote: quote,
            second_quote: 0.0,
            first_notional: notional,
            second_notional: notional * fx,
        };
        let ir = GeneratorAttribute::ir_forward(start_period, end_period);
        generate_two_legs(
            &self.name,
            &self.first_leg,
            &self.second_leg,
            reference_date,
            &ir,
            inputs,
            is_payer,
        )
    }
}

impl_swap_generator!(GeneratorSwapXCcyIborIbor, first_leg, second_leg);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leg::LegConventions;
    use approx::assert_abs_diff_eq;
    use ig_cashflows::{CashFlow, Coupon};
    use ig_currencies::currencies::{EUR, USD};
    use ig_currencies::FxMatrix;
    use ig_indexes::ibor::{euribor, usd_libor};
    use ig_instruments::SwapType;
    use ig_time::{Actual360, BusinessDayConvention, Period, Thirty360, WeekendsOnly};

    fn conventions(currency: ig_currencies::Currency) -> LegConventions {
        LegConventions::new(
            currency,
            Arc::new(WeekendsOnly),
            2,
            BusinessDayConvention::ModifiedFollowing,
            true,
        )
    }

    fn usd_libor_leg(exchange: bool) -> GeneratorLegIbor {
        GeneratorLegIbor::new(
            "USDLIBOR3M",
            conventions(USD).with_exchange_notional(exchange),
            usd_libor(Period::months(3)).unwrap(),
            Period::months(3),
            Arc::new(Actual360),
        )
        .unwrap()
    }

    fn euribor_leg(exchange: bool) -> GeneratorLegIbor {
        GeneratorLegIbor::new(
            "EURIBOR3M",
            conventions(EUR).with_exchange_notional(exchange),
            euribor(Period::months(3)).unwrap(),
            Period::months(3),
            Arc::new(Actual360),
        )
        .unwrap()
    }

    fn vanilla() -> GeneratorSwapFixedIbor {
        let fixed = GeneratorLegFixed::new(
            "USD 6M FIXED",
            conventions(USD),
            Period::months(6),
            Arc::new(Thirty360),
        )
        .unwrap();
        GeneratorSwapFixedIbor::new("USD6MLIBOR3M", fixed, usd_libor_leg(false)).unwrap()
    }

    fn reference() -> Date {
        Date::from_ymd(2012, 7, 17).unwrap()
    }

    #[test]
    fn vanilla_swap_pays_fixed() {
        let swap = vanilla()
            .generate_instrument(reference(), 0.02, 1e6, &GeneratorAttribute::ir(Period::years(2)))
            .unwrap();
        assert_eq!(swap.swap_type(), SwapType::Payer);
        assert_eq!(swap.first_leg().len(), 4);
        assert_eq!(swap.second_leg().len(), 8);
        let start = Date::from_ymd(2012, 7, 19).unwrap();
        let first = swap.first_leg().coupons().next().unwrap();
        assert_eq!(first.accrual_start_date(), start);
        assert_abs_diff_eq!(first.notional(), -1e6);
        let floating = swap.second_leg().coupons().next().unwrap();
        assert_eq!(floating.accrual_start_date(), start);
        assert_abs_diff_eq!(floating.notional(), 1e6);
        assert_eq!(
            swap.first_leg().maturity_date(),
            swap.second_leg().maturity_date()
        );
    }

    #[test]
    fn receiver_flips_both_legs() {
        let swap = vanilla()
            .generate_instrument_with(
                reference(),
                0.02,
                1e6,
                &GeneratorAttribute::ir(Period::years(1)),
                false,
            )
            .unwrap();
        assert_eq!(swap.swap_type(), SwapType::Receiver);
        assert!(!swap.first_leg().is_payer());
        assert!(swap.second_leg().is_payer());
    }

    #[test]
    fn single_currency_swaps_reject_mixed_legs() {
        let err = GeneratorSwapIborIbor::new("MIXED", usd_libor_leg(false), euribor_leg(false))
            .unwrap_err();
        assert!(err.is_argument_error());
    }

    #[test]
    fn cross_currency_swap_converts_notional() {
        let gen = GeneratorSwapXCcyIborIbor::new("EURUSD BASIS", euribor_leg(true), usd_libor_leg(true))
            .unwrap();
        let fx = FxMatrix::new().with_rate(EUR, USD, 1.25).unwrap();
        let swap = gen
            .generate_instrument(reference(), 0.001, 1e6, &GeneratorAttribute::fx(Period::years(1), fx))
            .unwrap();
        assert!(!swap.is_single_currency());

        let eur = swap.first_leg().flows();
        assert!(matches!(eur[0], CashFlow::Fixed(_)));
        assert_abs_diff_eq!(eur[0].known_amount().unwrap(), 1e6);
        assert_abs_diff_eq!(eur[eur.len() - 1].known_amount().unwrap(), -1e6);

        let usd = swap.second_leg().flows();
        assert_abs_diff_eq!(usd[0].known_amount().unwrap(), -1.25e6);
        assert_abs_diff_eq!(usd[usd.len() - 1].known_amount().unwrap(), 1.25e6);
        assert_eq!(usd[0].payment_date(), eur[0].payment_date());
    }

    #[test]
    fn cross_currency_swap_needs_fx_attribute() {
        let gen = GeneratorSwapXCcyIborIbor::new("EURUSD BASIS", euribor_leg(true), usd_libor_leg(true))
            .unwrap();
        let err = gen
            .generate_instrument(reference(), 0.0, 1e6, &GeneratorAttribute::ir(Period::years(1)))
            .unwrap_err();
        assert!(err.is_argument_error());
        assert!(GeneratorSwapXCcyIborIbor::new("NO EXCHANGE", euribor_leg(false), usd_libor_leg(true)).is_err());
    }

    #[test]
    fn cross_currency_legs_take_their_own_calendars() {
        let gen = GeneratorSwapXCcyIborIbor::new("EURUSD BASIS", euribor_leg(true), usd_libor_leg(true))
            .unwrap();
        let target: Arc<dyn Calendar> = Arc::new(ig_time::HolidayCalendar::new("TARGET", []));
        let nyc: Arc<dyn Calendar> = Arc::new(ig_time::HolidayCalendar::new("NYC", []));
        let split = gen.with_calendars(target.clone(), nyc.clone());
        assert_eq!(split.first_leg().conventions().calendar.name(), "TARGET");
        assert_eq!(split.second_leg().conventions().calendar.name(), "NYC");
        assert_eq!(split.first_leg().index(), gen.first_leg().index());
        assert_ne!(split, gen.with_calendar(target.clone()));
        assert_ne!(split, gen.with_calendar(nyc));
        assert_eq!(gen.with_calendars(target.clone(), target.clone()), gen.with_calendar(target));

        let fx = FxMatrix::new().with_rate(EUR, USD, 1.25).unwrap();
        let swap = split
            .generate_instrument(reference(), 0.001, 1e6, &GeneratorAttribute::fx(Period::years(1), fx))
            .unwrap();
        assert!(!swap.is_single_currency());
    }

    #[test]
    fn calendar_substitution_keeps_conventions() {
        let gen = vanilla();
        let moved = gen.with_calendar(Arc::new(ig_time::NullCalendar));
        assert_eq!(moved.name(), gen.name());
        assert_eq!(moved.fixed_leg().payment_period(), gen.fixed_leg().payment_period());
        assert_ne!(moved, gen);
    }
}
