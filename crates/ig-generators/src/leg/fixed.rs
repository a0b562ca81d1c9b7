//! Fixed-rate legs.

use std::sync::Arc;

use ig_cashflows::{Annuity, CashFlow, CouponBase, CouponFixed, CouponFixedCompounding};
use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, impl_eq_by_key, Real};
use ig_time::{Date, DayCounter, Period};

use super::{check_leg_call, impl_leg_instrument, log_leg, signed_notional, GeneratorLeg, LegConventions};

/// One fixed coupon per accrual period, paying the quote as rate.
#[derive(Debug, Clone)]
pub struct GeneratorLegFixed {
    name: String,
    conventions: LegConventions,
    payment_period: Period,
    day_counter: Arc<dyn DayCounter>,
    compounded: bool,
}

impl GeneratorLegFixed {
    fn eq_key(&self) -> (&str, &LegConventions, Period, &str, bool) {
        (&self.name, &self.conventions, self.payment_period, self.day_counter.name(), self.compounded)
    }
}

impl_eq_by_key!(GeneratorLegFixed);

impl GeneratorLegFixed {
    /// Create a simple-interest fixed leg generator.
    pub fn new(
        name: impl Into<String>,
        conventions: LegConventions,
        payment_period: Period,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "fixed leg generator")?;
        ensure!(
            payment_period.is_positive(),
            "payment period must be positive, got {payment_period}"
        );
        Ok(Self {
            name,
            conventions,
            payment_period,
            day_counter,
            compounded: false,
        })
    }

    /// Pay `(1 + rate)^τ − 1` instead of `rate × τ`.
    pub fn with_compounding(mut self, compounded: bool) -> Self {
        self.compounded = compounded;
        self
    }

    /// Coupon frequency.
    pub fn payment_period(&self) -> Period {
        self.payment_period
    }

    /// Accrual day count.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    /// Whether coupons compound the rate over their accrual factor.
    pub fn is_compounded(&self) -> bool {
        self.compounded
    }
}

impl GeneratorLeg for GeneratorLegFixed {
    fn conventions(&self) -> &LegConventions {
        &self.conventions
    }

    fn generate_leg(
        &self,
        start: Date,
        end: Date,
        quote: Real,
        notional: Real,
        is_payer: bool,
    ) -> Result<Annuity> {
        check_leg_call(start, end, quote)?;
        let notional = signed_notional(notional, is_payer)?;
        let conv = &self.conventions;
        let schedule = conv.schedule(start, end, self.payment_period)?;
        let coupons = schedule
            .periods()
            .map(|(s, e)| {
                let base = CouponBase::new(
                    conv.currency,
                    conv.payment_date(e)?,
                    s,
                    e,
                    self.day_counter.year_fraction(s, e),
                    notional,
                )?;
                Ok(if self.compounded {
                    CashFlow::from(CouponFixedCompounding::new(base, quote)?)
                } else {
                    CashFlow::from(CouponFixed::new(base, quote)?)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let annuity = conv.annuity(coupons, start, notional, is_payer)?;
        log_leg(&self.name, start, end, &annuity);
        Ok(annuity)
    }
}

impl_leg_instrument!(GeneratorLegFixed);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::GeneratorAttribute;
    use crate::generator::GeneratorInstrument;
    use approx::assert_abs_diff_eq;
    use ig_cashflows::Coupon;
    use ig_currencies::currencies::USD;
    use ig_time::{Actual360, BusinessDayConvention, Thirty360, WeekendsOnly};

    fn leg(exchange: bool) -> GeneratorLegFixed {
        let conv = LegConventions::new(
            USD,
            Arc::new(WeekendsOnly),
            2,
            BusinessDayConvention::ModifiedFollowing,
            true,
        )
        .with_exchange_notional(exchange);
        GeneratorLegFixed::new("USD FIXED 6M", conv, Period::months(6), Arc::new(Thirty360)).unwrap()
    }

    #[test]
    fn semiannual_three_years() {
        let reference = Date::from_ymd(2012, 7, 17).unwrap();
        let attr = GeneratorAttribute::ir(Period::years(3));
        let annuity = leg(false)
            .generate_instrument(reference, 0.02, 1_000_000.0, &attr)
            .unwrap();
        assert_eq!(annuity.len(), 6);
        assert!(annuity.is_payer());
        for c in annuity.coupons() {
            assert_abs_diff_eq!(c.notional(), -1_000_000.0);
            assert_abs_diff_eq!(c.payment_year_fraction(), 0.5, epsilon = 0.01);
        }
    }

    #[test]
    fn notional_exchange_brackets_coupons() {
        let start = Date::from_ymd(2012, 7, 19).unwrap();
        let end = Date::from_ymd(2013, 7, 19).unwrap();
        let plain = leg(false).generate_leg(start, end, 0.01, 100.0, false).unwrap();
        let exch = leg(true).generate_leg(start, end, 0.01, 100.0, false).unwrap();
        assert_eq!(exch.len(), plain.len() + 2);
        assert_eq!(exch.flows()[0].known_amount(), Some(-100.0));
        assert_eq!(exch.flows()[0].payment_date(), start);
        let last = exch.flows().last().unwrap();
        assert_eq!(last.known_amount(), Some(100.0));
        assert_eq!(last.payment_date(), plain.maturity_date());
    }

    #[test]
    fn rejects_bad_construction() {
        let conv = LegConventions::new(
            USD,
            Arc::new(WeekendsOnly),
            2,
            BusinessDayConvention::Following,
            false,
        );
        assert!(GeneratorLegFixed::new("", conv.clone(), Period::months(6), Arc::new(Actual360)).is_err());
        assert!(GeneratorLegFixed::new("X", conv, Period::months(0), Arc::new(Actual360)).is_err());
    }
}
