//! Zero-coupon inflation swap generator.

use std::sync::Arc;

use ig_cashflows::{Annuity, CashFlow, CouponBase, CouponFixedCompounding, CouponInflationZeroCoupon};
use ig_core::errors::{ensure_named, Result};
use ig_core::{impl_eq_by_key, Natural, Real};
use ig_currencies::Currency;
use ig_indexes::IndexPrice;
use ig_instruments::SwapDefinition;
use ig_time::schedule::{adjust, adjust_business_days, adjust_period};
use ig_time::{BusinessDayConvention, Calendar, Date, TimeUnit};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, spot_date, GeneratorInstrument, WithCalendar};

/// Zero-coupon inflation swaps: one compounded fixed coupon against one
/// inflation coupon, both paid at maturity.  The fixed accrual factor is the
/// tenor in years.
#[derive(Debug, Clone)]
pub struct GeneratorSwapFixedInflationZeroCoupon {
    name: String,
    price_index: IndexPrice,
    calendar: Arc<dyn Calendar>,
    spot_lag: Natural,
    payment_lag: Natural,
    business_day_convention: BusinessDayConvention,
    end_of_month: bool,
    month_lag: Natural,
}

impl GeneratorSwapFixedInflationZeroCoupon {
    fn eq_key(&self) -> (&str, &IndexPrice, &str, Natural, Natural, BusinessDayConvention, bool, Natural) {
        (
            &self.name,
            &self.price_index,
            self.calendar.name(),
            self.spot_lag,
            self.payment_lag,
            self.business_day_convention,
            self.end_of_month,
            self.month_lag,
        )
    }
}

impl_eq_by_key!(GeneratorSwapFixedInflationZeroCoupon);

impl GeneratorSwapFixedInflationZeroCoupon {
    /// Create the generator.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        price_index: IndexPrice,
        calendar: Arc<dyn Calendar>,
        spot_lag: Natural,
        payment_lag: Natural,
        business_day_convention: BusinessDayConvention,
        end_of_month: bool,
        month_lag: Natural,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "inflation swap generator")?;
        Ok(Self {
            name,
            price_index,
            calendar,
            spot_lag,
            payment_lag,
            business_day_convention,
            end_of_month,
            month_lag,
        })
    }

    /// The price index.
    pub fn price_index(&self) -> &IndexPrice {
        &self.price_index
    }

    /// Months between an accrual date and its reference index month.
    pub fn month_lag(&self) -> Natural {
        self.month_lag
    }

    /// Swap currency.
    pub fn currency(&self) -> Currency {
        self.price_index.currency()
    }

    /// Generate a swap paying (`is_payer`) or receiving the fixed coupon.
    pub fn generate_instrument_with(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
        is_payer: bool,
    ) -> Result<SwapDefinition> {
        check_call(reference_date, quote, notional)?;
        let (start_period, end_period) = attribute.ir_periods()?;
        let calendar = self.calendar.as_ref();
        let spot = spot_date(reference_date, self.spot_lag, calendar)?;
        let start = adjust_period(
            spot,
            start_period,
            self.business_day_convention,
            calendar,
            self.end_of_month,
        )?;
        let unadjusted_end = start.advance(end_period.length, end_period.unit)?;
        let end = adjust(unadjusted_end, self.business_day_convention, calendar, self.end_of_month)?;
        let payment = adjust_business_days(end, self.payment_lag as i32, calendar)?;
        let (months, unit) = end_period.canonical();
        let years = match unit {
            TimeUnit::Months => months as Real / 12.0,
            _ => start.days_between(end) as Real / 365.0,
        };

        let fixed_notional = if is_payer { -notional } else { notional };
        let currency = self.currency();
        let fixed_base = CouponBase::new(currency, payment, start, end, years, fixed_notional)?;
        let fixed = CouponFixedCompounding::new(fixed_base, quote)?;
        let inflation_base = CouponBase::new(currency, payment, start, end, 1.0, -fixed_notional)?;
        let inflation = CouponInflationZeroCoupon::new(
            inflation_base,
            self.price_index.clone(),
            self.month_lag,
            false,
        )?;
        debug!(generator = %self.name, %reference_date, %start, %end, "generated inflation swap");
        SwapDefinition::new(
            Annuity::new(vec![CashFlow::from(fixed)], is_payer)?,
            Annuity::new(vec![CashFlow::from(inflation)], !is_payer)?,
        )
    }
}

impl GeneratorInstrument for GeneratorSwapFixedInflationZeroCoupon {
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

impl WithCalendar for GeneratorSwapFixedInflationZeroCoupon {
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
    use ig_cashflows::Coupon;
    use ig_indexes::inflation::us_cpi;
    use ig_time::{Period, WeekendsOnly};

    #[test]
    fn single_coupons_at_maturity() {
        let gen = GeneratorSwapFixedInflationZeroCoupon::new(
            "USD CPI ZC",
            us_cpi().unwrap(),
            Arc::new(WeekendsOnly),
            2,
            0,
            BusinessDayConvention::ModifiedFollowing,
            true,
            3,
        )
        .unwrap();
        let reference = Date::from_ymd(2012, 7, 17).unwrap();
        let swap = gen
            .generate_instrument(reference, 0.02, 1_000_000.0, &GeneratorAttribute::ir(Period::years(5)))
            .unwrap();
        assert_eq!(swap.first_leg().len(), 1);
        let CashFlow::CouponFixedCompounding(fixed) = &swap.first_leg().flows()[0] else {
            panic!("expected a compounded fixed coupon");
        };
        assert_abs_diff_eq!(fixed.payment_year_fraction(), 5.0);
        assert_abs_diff_eq!(fixed.notional(), -1_000_000.0);
        let CashFlow::CouponInflationZeroCoupon(infl) = &swap.second_leg().flows()[0] else {
            panic!("expected an inflation coupon");
        };
        assert_eq!(infl.reference_start_date(), Date::from_ymd(2012, 4, 1).unwrap());
        assert_eq!(infl.reference_end_date(), Date::from_ymd(2017, 4, 1).unwrap());
        assert_eq!(swap.maturity_date(), Date::from_ymd(2017, 7, 19).unwrap());
    }
}
