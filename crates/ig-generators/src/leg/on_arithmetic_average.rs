//! Overnight legs paying the arithmetic average of the daily rate.

use std::sync::Arc;

use ig_cashflows::{
    Annuity, CashFlow, CouponBase, CouponOnArithmeticAverage, CouponOnArithmeticAverageSimplified,
    OnFixingPeriod,
};
use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, impl_eq_by_key, Real};
use ig_indexes::IndexOn;
use ig_time::{Date, DayCounter, Period};

use super::on_compounded::daily_fixings;
use super::{
    check_leg_call, impl_leg_instrument, log_leg, signed_notional, FixingLayout, GeneratorLeg,
    LegConventions,
};

/// One arithmetic-average overnight coupon per payment period, with the
/// quote as spread.
///
/// `Daily` and `Simplified` layouts describe the same coupon: for an
/// additive day count the daily factors sum to the period factor.
#[derive(Debug, Clone)]
pub struct GeneratorLegOnArithmeticAverage {
    name: String,
    conventions: LegConventions,
    index: IndexOn,
    payment_period: Period,
    day_counter: Arc<dyn DayCounter>,
    layout: FixingLayout,
}

impl GeneratorLegOnArithmeticAverage {
    fn eq_key(&self) -> (&str, &LegConventions, &IndexOn, Period, &str, FixingLayout) {
        (
            &self.name,
            &self.conventions,
            &self.index,
            self.payment_period,
            self.day_counter.name(),
            self.layout,
        )
    }
}

impl_eq_by_key!(GeneratorLegOnArithmeticAverage);

impl GeneratorLegOnArithmeticAverage {
    /// Create the generator.
    pub fn new(
        name: impl Into<String>,
        conventions: LegConventions,
        index: IndexOn,
        payment_period: Period,
        day_counter: Arc<dyn DayCounter>,
        layout: FixingLayout,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "arithmetic average leg generator")?;
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
            layout,
        })
    }

    /// The overnight index.
    pub fn index(&self) -> &IndexOn {
        &self.index
    }

    /// Fixing layout.
    pub fn fixing_layout(&self) -> FixingLayout {
        self.layout
    }
}

impl GeneratorLeg for GeneratorLegOnArithmeticAverage {
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
                let index = self.index.clone();
                Ok(match self.layout {
                    FixingLayout::Daily => {
                        let fixings = daily_fixings(&self.index, s, e, conv.calendar.as_ref())?;
                        CashFlow::from(CouponOnArithmeticAverage::new(base, index, fixings, quote)?)
                    }
                    FixingLayout::Simplified => {
                        let period = OnFixingPeriod::new(&self.index, s, e)?;
                        CashFlow::from(CouponOnArithmeticAverageSimplified::new(
                            base, index, period, quote,
                        )?)
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let annuity = conv.annuity(coupons, start, notional, is_payer)?;
        log_leg(&self.name, start, end, &annuity);
        Ok(annuity)
    }
}

impl_leg_instrument!(GeneratorLegOnArithmeticAverage);
