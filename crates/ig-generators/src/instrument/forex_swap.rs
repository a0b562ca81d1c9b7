//! FX swap generator.

use std::sync::Arc;

use ig_cashflows::PaymentFixed;
use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, impl_eq_by_key, Natural, Real};
use ig_currencies::Currency;
use ig_instruments::{Forex, ForexSwap};
use ig_time::schedule::adjust_period;
use ig_time::{BusinessDayConvention, Calendar, Date, Period};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, spot_date, GeneratorInstrument, WithCalendar};

/// FX swaps in `currency1`/`currency2`, quoted in forward points.
///
/// The near leg receives `notional` of `currency1` against
/// `notional × spot` of `currency2`; the far leg reverses it at
/// `spot + points`.
#[derive(Debug, Clone)]
pub struct GeneratorForexSwap {
    name: String,
    currency1: Currency,
    currency2: Currency,
    calendar: Arc<dyn Calendar>,
    spot_lag: Natural,
    business_day_convention: BusinessDayConvention,
    end_of_month: bool,
}

impl GeneratorForexSwap {
    fn eq_key(&self) -> (&str, Currency, Currency, &str, Natural, BusinessDayConvention, bool) {
        (
            &self.name,
            self.currency1,
            self.currency2,
            self.calendar.name(),
            self.spot_lag,
            self.business_day_convention,
            self.end_of_month,
        )
    }
}

impl_eq_by_key!(GeneratorForexSwap);

impl GeneratorForexSwap {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        currency1: Currency,
        currency2: Currency,
        calendar: Arc<dyn Calendar>,
        spot_lag: Natural,
        business_day_convention: BusinessDayConvention,
        end_of_month: bool,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "FX swap generator")?;
        ensure!(currency1 != currency2, "FX swap currencies must differ");
        Ok(Self {
            name,
            currency1,
            currency2,
            calendar,
            spot_lag,
            business_day_convention,
            end_of_month,
        })
    }

    /// Base currency.
    pub fn currency1(&self) -> Currency {
        self.currency1
    }

    /// Quote currency.
    pub fn currency2(&self) -> Currency {
        self.currency2
    }
}

impl GeneratorInstrument for GeneratorForexSwap {
    type Output = ForexSwap;

    fn name(&self) -> &str {
        &self.name
    }

    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<ForexSwap> {
        check_call(reference_date, quote, notional)?;
        let (start_period, end_period, fx_matrix) = attribute.fx_parts()?;
        let fx = fx_matrix.fx_rate(self.currency1, self.currency2)?;
        let calendar = self.calendar.as_ref();
        let spot = spot_date(reference_date, self.spot_lag, calendar)?;
        let roll = |date: Date, period: Period| {
            adjust_period(
                date,
                period,
                self.business_day_convention,
                calendar,
                self.end_of_month,
            )
        };
        let start = roll(spot, start_period)?;
        let end = roll(start, end_period)?;
        let near = Forex::new(
            PaymentFixed::new(self.currency1, start, notional)?,
            PaymentFixed::new(self.currency2, start, -notional * fx)?,
        )?;
        let far = Forex::new(
            PaymentFixed::new(self.currency1, end, -notional)?,
            PaymentFixed::new(self.currency2, end, notional * (fx + quote))?,
        )?;
        debug!(generator = %self.name, %reference_date, %start, %end, fx, "generated FX swap");
        ForexSwap::new(near, far)
    }
}

impl WithCalendar for GeneratorForexSwap {
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            calendar,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ig_cashflows::Payment;
    use ig_currencies::currencies::{EUR, GBP, USD};
    use ig_currencies::FxMatrix;
    use ig_time::WeekendsOnly;

    fn generator() -> GeneratorForexSwap {
        GeneratorForexSwap::new(
            "EURUSD",
            EUR,
            USD,
            Arc::new(WeekendsOnly),
            2,
            BusinessDayConvention::ModifiedFollowing,
            true,
        )
        .unwrap()
    }

    #[test]
    fn near_and_far_exchanges() {
        let fx = FxMatrix::new().with_rate(EUR, USD, 1.25).unwrap();
        let attr = GeneratorAttribute::fx(Period::months(3), fx);
        let reference = Date::from_ymd(2012, 7, 17).unwrap();
        let swap = generator()
            .generate_instrument(reference, 0.0010, 1_000_000.0, &attr)
            .unwrap();
        assert_eq!(swap.near_leg().payment_date(), Date::from_ymd(2012, 7, 19).unwrap());
        assert_eq!(swap.far_leg().payment_date(), Date::from_ymd(2012, 10, 19).unwrap());
        assert_abs_diff_eq!(swap.near_leg().payment_currency2().amount(), -1_250_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(swap.far_leg().exchange_rate(), 1.251, epsilon = 1e-12);
        assert_eq!(swap.far_leg().payment_currency1().currency(), EUR);
    }

    #[test]
    fn missing_rate_is_lookup_error() {
        let fx = FxMatrix::new().with_rate(GBP, USD, 1.55).unwrap();
        let attr = GeneratorAttribute::fx(Period::months(3), fx);
        let err = generator()
            .generate_instrument(Date::from_ymd(2012, 7, 17).unwrap(), 0.0, 1.0, &attr)
            .unwrap_err();
        assert!(err.is_lookup_error());
        let err = generator()
            .generate_instrument(
                Date::from_ymd(2012, 7, 17).unwrap(),
                0.0,
                1.0,
                &GeneratorAttribute::ir(Period::months(3)),
            )
            .unwrap_err();
        assert!(err.is_argument_error());
    }
}
