//! Ibor legs compounding several fixings per coupon.

use std::sync::Arc;

use ig_cashflows::{Annuity, CashFlow, CouponBase, CouponIborCompounding, IborSubPeriod};
use ig_core::errors::{ensure_named, Error, Result};
use ig_core::{impl_eq_by_key, CompoundingMethod, Real};
use ig_indexes::IborIndex;
use ig_time::schedule::adjust_period;
use ig_time::{Date, DayCounter, Period, TenorConvention};

use super::ibor::ibor_fixing;
use super::{check_leg_call, impl_leg_instrument, log_leg, signed_notional, GeneratorLeg, LegConventions};

/// Coupons paid every `payment_period`, each compounding the index over
/// `payment_period / index tenor` sub-periods.
#[derive(Debug, Clone)]
pub struct GeneratorLegIborCompounding {
    name: String,
    conventions: LegConventions,
    index: IborIndex,
    payment_period: Period,
    day_counter: Arc<dyn DayCounter>,
    compounding_method: CompoundingMethod,
}

impl GeneratorLegIborCompounding {
    fn eq_key(&self) -> (&str, &LegConventions, &IborIndex, Period, &str, CompoundingMethod) {
        (
            &self.name,
            &self.conventions,
            &self.index,
            self.payment_period,
            self.day_counter.name(),
            self.compounding_method,
        )
    }
}

impl_eq_by_key!(GeneratorLegIborCompounding);

impl GeneratorLegIborCompounding {
    /// Create the generator.
    ///
    /// # Errors
    /// `payment_period` must be a whole multiple of the index tenor.
    pub fn new(
        name: impl Into<String>,
        conventions: LegConventions,
        index: IborIndex,
        payment_period: Period,
        day_counter: Arc<dyn DayCounter>,
        compounding_method: CompoundingMethod,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "compounding leg generator")?;
        if payment_period.ratio(index.tenor()).is_none() {
            return Err(Error::InvalidArgument(format!(
                "payment period {payment_period} is not a multiple of the {} tenor {}",
                index.name(),
                index.tenor()
            )));
        }
        Ok(Self {
            name,
            conventions,
            index,
            payment_period,
            day_counter,
            compounding_method,
        })
    }

    /// The compounded index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Coupon frequency.
    pub fn payment_period(&self) -> Period {
        self.payment_period
    }

    /// Flat or straight compounding.
    pub fn compounding_method(&self) -> CompoundingMethod {
        self.compounding_method
    }

    /// Sub-period boundaries of the coupon `[start, end]`: the start
    /// advanced by multiples of the index tenor, capped at `end`.
    fn sub_period_dates(&self, start: Date, end: Date) -> Result<Vec<Date>> {
        let conv = &self.conventions;
        let mut dates = vec![start];
        let mut j = 1;
        loop {
            let d = adjust_period(
                start,
                self.index.tenor() * j,
                conv.business_day_convention,
                conv.calendar.as_ref(),
                conv.end_of_month,
            )?;
            if d >= end {
                break;
            }
            if d > dates[dates.len() - 1] {
                dates.push(d);
            }
            j += 1;
        }
        dates.push(end);
        Ok(dates)
    }
}

impl GeneratorLeg for GeneratorLegIborCompounding {
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
        let mut coupons = Vec::with_capacity(schedule.number_of_periods());
        for (s, e) in schedule.periods() {
            let sub_periods = self
                .sub_period_dates(s, e)?
                .windows(2)
                .map(|w| {
                    Ok(IborSubPeriod {
                        accrual_start: w[0],
                        accrual_end: w[1],
                        accrual_factor: self.day_counter.year_fraction(w[0], w[1]),
                        fixing: ibor_fixing(&self.index, w[0], calendar)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let base = CouponBase::new(
                conv.currency,
                conv.payment_date(e)?,
                s,
                e,
                self.day_counter.year_fraction(s, e),
                notional,
            )?;
            coupons.push(CashFlow::from(CouponIborCompounding::new(
                base,
                self.index.clone(),
                sub_periods,
                quote,
                self.compounding_method,
            )?));
        }
        let annuity = conv.annuity(coupons, start, notional, is_payer)?;
        log_leg(&self.name, start, end, &annuity);
        Ok(annuity)
    }
}

impl_leg_instrument!(GeneratorLegIborCompounding);
