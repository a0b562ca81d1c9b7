//! Overnight-indexed legs compounding the daily rate.

use std::sync::Arc;

use ig_cashflows::{
    Annuity, CashFlow, CouponBase, CouponOn, CouponOnCompounded, DailyFixings, OnFixingPeriod,
};
use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, impl_eq_by_key, Real};
use ig_indexes::IndexOn;
use ig_time::schedule::business_days_between;
use ig_time::{Calendar, Date, DayCounter, Period};

use super::{
    check_leg_call, impl_leg_instrument, log_leg, signed_notional, FixingLayout, GeneratorLeg,
    LegConventions,
};

/// One compounded overnight coupon per payment period, with the quote as
/// spread.  The `Daily` layout spells out every fixing date.
#[derive(Debug, Clone)]
pub struct GeneratorLegOnCompounded {
    name: String,
    conventions: LegConventions,
    index: IndexOn,
    payment_period: Period,
    day_counter: Arc<dyn DayCounter>,
    layout: FixingLayout,
}

impl GeneratorLegOnCompounded {
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

impl_eq_by_key!(GeneratorLegOnCompounded);

impl GeneratorLegOnCompounded {
    /// Create the generator with the parametric fixing layout.
    pub fn new(
        name: impl Into<String>,
        conventions: LegConventions,
        index: IndexOn,
        payment_period: Period,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "overnight leg generator")?;
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
            layout: FixingLayout::Simplified,
        })
    }

    /// Choose how fixings are stored.
    pub fn with_fixing_layout(mut self, layout: FixingLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The overnight index.
    pub fn index(&self) -> &IndexOn {
        &self.index
    }

    /// Coupon frequency.
    pub fn payment_period(&self) -> Period {
        self.payment_period
    }

    /// Fixing layout.
    pub fn fixing_layout(&self) -> FixingLayout {
        self.layout
    }
}

/// Business days of `[start, end]` (both ends kept) with each day's index
/// accrual factor to the next date.
pub(crate) fn daily_fixings(
    index: &IndexOn,
    start: Date,
    end: Date,
    calendar: &dyn Calendar,
) -> Result<DailyFixings> {
    let mut dates = business_days_between(start, end, calendar);
    if dates.first() != Some(&start) {
        dates.insert(0, start);
    }
    if dates.last() != Some(&end) {
        dates.push(end);
    }
    let factors = dates
        .windows(2)
        .map(|w| index.day_counter().year_fraction(w[0], w[1]))
        .collect();
    DailyFixings::new(dates, factors)
}

impl GeneratorLeg for GeneratorLegOnCompounded {
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
        ensure!(
            self.layout == FixingLayout::Simplified || quote == 0.0,
            "daily compounded overnight coupons carry no spread, got {quote}"
        );
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
                Ok(match self.layout {
                    FixingLayout::Simplified => {
                        let period = OnFixingPeriod::new(&self.index, s, e)?;
                        CashFlow::from(CouponOn::new(base, self.index.clone(), period, quote)?)
                    }
                    FixingLayout::Daily => {
                        let fixings = daily_fixings(&self.index, s, e, calendar)?;
                        CashFlow::from(CouponOnCompounded::new(base, self.index.clone(), fixings)?)
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let annuity = conv.annuity(coupons, start, notional, is_payer)?;
        log_leg(&self.name, start, end, &annuity);
        Ok(annuity)
    }
}

impl_leg_instrument!(GeneratorLegOnCompounded);
