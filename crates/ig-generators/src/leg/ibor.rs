//! Ibor legs: one fixing per coupon.

use std::sync::Arc;

use ig_cashflows::{Annuity, CashFlow, CouponBase, CouponIbor, IborFixing};
use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, impl_eq_by_key, Real};
use ig_indexes::IborIndex;
use ig_time::schedule::{adjust_business_days, adjust_by_index};
use ig_time::{Calendar, Date, DayCounter, Period};

use super::{check_leg_call, impl_leg_instrument, log_leg, signed_notional, GeneratorLeg, LegConventions};

/// One Ibor coupon per payment period, with the quote as spread.
#[derive(Debug, Clone)]
pub struct GeneratorLegIbor {
    name: String,
    conventions: LegConventions,
    index: IborIndex,
    payment_period: Period,
    day_counter: Arc<dyn DayCounter>,
}

impl GeneratorLegIbor {
    fn eq_key(&self) -> (&str, &LegConventions, &IborIndex, Period, &str) {
        (&self.name, &self.conventions, &self.index, self.payment_period, self.day_counter.name())
    }
}

impl_eq_by_key!(GeneratorLegIbor);

impl GeneratorLegIbor {
    /// Create an Ibor leg generator paying every `payment_period`.
    pub fn new(
        name: impl Into<String>,
        conventions: LegConventions,
        index: IborIndex,
        payment_period: Period,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "ibor leg generator")?;
        ensure!(
            payment_period.is_positive(),
            "payment period must be positive, got {payment_period}"
        );
        Ok(Self {
            name,
            conventions,
            index,
            payment_period,
            day_counter,
        })
    }

    /// The reference index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Coupon frequency.
    pub fn payment_period(&self) -> Period {
        self.payment_period
    }

    /// Accrual day count.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }
}

/// The fixing of `index` for a deposit starting on `start`.
pub(crate) fn ibor_fixing(index: &IborIndex, start: Date, calendar: &dyn Calendar) -> Result<IborFixing> {
    let fixing_date = adjust_business_days(start, -(index.spot_lag() as i32), calendar)?;
    let fixing_end = adjust_by_index(start, index, calendar)?;
    IborFixing::new(index, fixing_date, start, fixing_end)
}

impl GeneratorLeg for GeneratorLegIbor {
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
        let calendar = conv.calendar.as_ref();
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
                let fixing = ibor_fixing(&self.index, s, calendar)?;
                Ok(CashFlow::from(CouponIbor::new(
                    base,
                    self.index.clone(),
                    fixing,
                    quote,
                )?))
            })
            .collect::<Result<Vec<_>>>()?;
        let annuity = conv.annuity(coupons, start, notional, is_payer)?;
        log_leg(&self.name, start, end, &annuity);
        Ok(annuity)
    }
}

impl_leg_instrument!(GeneratorLegIbor);

#[cfg(test)]
mod tests {
    use super::*;
    use ig_cashflows::Coupon;
    use ig_currencies::currencies::USD;
    use ig_indexes::ibor::usd_libor;
    use ig_time::{Actual360, BusinessDayConvention, WeekendsOnly};

    #[test]
    fn fixing_dates_lead_accrual() {
        let index = usd_libor(Period::months(3)).unwrap();
        let conv = LegConventions::new(
            USD,
            Arc::new(WeekendsOnly),
            2,
            BusinessDayConvention::ModifiedFollowing,
            true,
        );
        let leg = GeneratorLegIbor::new("USD LIBOR3M", conv, index, Period::months(3), Arc::new(Actual360))
            .unwrap();
        let start = Date::from_ymd(2012, 7, 19).unwrap();
        let end = Date::from_ymd(2013, 7, 19).unwrap();
        let annuity = leg.generate_leg(start, end, 0.001, 1.0, false).unwrap();
        assert_eq!(annuity.len(), 4);
        for flow in annuity.flows() {
            let CashFlow::CouponIbor(c) = flow else {
                panic!("expected an ibor coupon, got {flow:?}");
            };
            let fixing = c.fixing();
            assert_eq!(fixing.period_start, c.base().accrual_start());
            assert!(fixing.fixing_date < fixing.period_start);
            assert_eq!(WeekendsOnly.business_days_between(fixing.fixing_date, fixing.period_start), 2);
        }
    }
}
