//! Overnight-indexed coupons.
//!
//! * [`CouponOn`]: compounded overnight rate over a parametric fixing period.
//! * [`CouponOnCompounded`]: daily compounding over explicit fixing dates
//!   (`Π (1 + rᵢ)^δᵢ`, Brazilian CDI style).
//! * [`CouponOnArithmeticAverage`]: arithmetic average of daily fixings,
//!   weighted by each day's accrual factor, over explicit fixing dates.
//! * [`CouponOnArithmeticAverageSimplified`]: the same average described by
//!   its fixing period only.

use crate::coupon::{impl_payment_for_coupon, simple_amount, Coupon, CouponBase};
use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, Rate, Real, Spread, Time};
use ig_indexes::IndexOn;
use ig_time::Date;

/// Daily fixing dates and their accrual factors.
///
/// `dates` has one more element than `accrual_factors`: factor `i` covers
/// `[dates[i], dates[i + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyFixings {
    dates: Vec<Date>,
    accrual_factors: Vec<Time>,
}

impl DailyFixings {
    /// Bundle the business days of a fixing period with their factors.
    pub fn new(dates: Vec<Date>, accrual_factors: Vec<Time>) -> Result<Self> {
        ensure!(
            dates.len() >= 2 && accrual_factors.len() + 1 == dates.len(),
            "need n + 1 fixing dates for n accrual factors, got {} and {}",
            dates.len(),
            accrual_factors.len()
        );
        ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "fixing dates must be strictly increasing"
        );
        for f in &accrual_factors {
            ensure_finite(*f, "daily accrual factor")?;
        }
        Ok(Self {
            dates,
            accrual_factors,
        })
    }

    /// Fixing dates, period end included.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Accrual factor of each day.
    pub fn accrual_factors(&self) -> &[Time] {
        &self.accrual_factors
    }

    /// Sum of the daily factors.
    pub fn total_accrual(&self) -> Time {
        self.accrual_factors.iter().sum()
    }

    fn check_rates(&self, rates: &[Rate]) -> Result<()> {
        ensure!(
            rates.len() == self.accrual_factors.len(),
            "expected {} daily fixings, got {}",
            self.accrual_factors.len(),
            rates.len()
        );
        Ok(())
    }
}

/// The fixing period of a parametric overnight coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct OnFixingPeriod {
    /// First overnight fixing date.
    pub start: Date,
    /// Date after the last overnight fixing.
    pub end: Date,
    /// Accrual factor of the whole period under the index day count.
    pub accrual_factor: Time,
}

impl OnFixingPeriod {
    /// The period `[start, end)` measured with `index`'s day count.
    pub fn new(index: &IndexOn, start: Date, end: Date) -> Result<Self> {
        ensure!(
            !start.is_null() && start < end,
            "overnight fixing period {start}..{end} is empty"
        );
        Ok(Self {
            start,
            end,
            accrual_factor: index.day_counter().year_fraction(start, end),
        })
    }
}

/// Compounded overnight coupon over a parametric fixing period.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponOn {
    base: CouponBase,
    index: IndexOn,
    fixing_period: OnFixingPeriod,
    spread: Spread,
}

impl CouponOn {
    /// Create a compounded overnight coupon.
    pub fn new(base: CouponBase, index: IndexOn, fixing_period: OnFixingPeriod, spread: Spread) -> Result<Self> {
        Ok(Self {
            base,
            index,
            fixing_period,
            spread: ensure_finite(spread, "spread")?,
        })
    }

    /// The overnight index.
    pub fn index(&self) -> &IndexOn {
        &self.index
    }

    /// The fixing period.
    pub fn fixing_period(&self) -> &OnFixingPeriod {
        &self.fixing_period
    }

    /// Spread over the compounded rate.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Amount given the compounded overnight rate over the fixing period,
    /// expressed as a simple rate on the fixing period's accrual factor.
    pub fn amount_with_rate(&self, compounded_rate: Rate) -> Result<Real> {
        simple_amount(&self.base, ensure_finite(compounded_rate, "compounded rate")? + self.spread)
    }
}

/// Daily compounded overnight coupon: `notional × (Π (1 + rᵢ)^δᵢ − 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponOnCompounded {
    base: CouponBase,
    index: IndexOn,
    fixings: DailyFixings,
}

impl CouponOnCompounded {
    /// Create a daily compounded coupon.
    pub fn new(base: CouponBase, index: IndexOn, fixings: DailyFixings) -> Result<Self> {
        Ok(Self {
            base,
            index,
            fixings,
        })
    }

    /// The overnight index.
    pub fn index(&self) -> &IndexOn {
        &self.index
    }

    /// Daily fixing layout.
    pub fn fixings(&self) -> &DailyFixings {
        &self.fixings
    }

    /// Amount given one overnight fixing per day.
    pub fn amount_with_fixings(&self, rates: &[Rate]) -> Result<Real> {
        self.fixings.check_rates(rates)?;
        let growth: f64 = rates
            .iter()
            .zip(&self.fixings.accrual_factors)
            .map(|(r, d)| (1.0 + r).powf(*d))
            .product();
        ensure_finite(self.notional() * (growth - 1.0), "coupon amount")
    }
}

/// Arithmetic average overnight coupon over explicit daily fixings.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponOnArithmeticAverage {
    base: CouponBase,
    index: IndexOn,
    fixings: DailyFixings,
    spread: Spread,
}

impl CouponOnArithmeticAverage {
    /// Create an arithmetic average coupon.
    pub fn new(base: CouponBase, index: IndexOn, fixings: DailyFixings, spread: Spread) -> Result<Self> {
        Ok(Self {
            base,
            index,
            fixings,
            spread: ensure_finite(spread, "spread")?,
        })
    }

    /// The overnight index.
    pub fn index(&self) -> &IndexOn {
        &self.index
    }

    /// Daily fixing layout.
    pub fn fixings(&self) -> &DailyFixings {
        &self.fixings
    }

    /// Spread over the average.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Amount `notional × (Σ δᵢ·rᵢ + spread × τ)`.
    pub fn amount_with_fixings(&self, rates: &[Rate]) -> Result<Real> {
        self.fixings.check_rates(rates)?;
        let accrued: f64 = rates
            .iter()
            .zip(&self.fixings.accrual_factors)
            .map(|(r, d)| r * d)
            .sum();
        let total = accrued + self.spread * self.payment_year_fraction();
        ensure_finite(self.notional() * total, "coupon amount")
    }
}

/// Arithmetic average overnight coupon described by its fixing period only.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponOnArithmeticAverageSimplified {
    base: CouponBase,
    index: IndexOn,
    fixing_period: OnFixingPeriod,
    spread: Spread,
}

impl CouponOnArithmeticAverageSimplified {
    /// Create a simplified arithmetic average coupon.
    pub fn new(base: CouponBase, index: IndexOn, fixing_period: OnFixingPeriod, spread: Spread) -> Result<Self> {
        Ok(Self {
            base,
            index,
            fixing_period,
            spread: ensure_finite(spread, "spread")?,
        })
    }

    /// The overnight index.
    pub fn index(&self) -> &IndexOn {
        &self.index
    }

    /// The fixing period.
    pub fn fixing_period(&self) -> &OnFixingPeriod {
        &self.fixing_period
    }

    /// Spread over the average.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Amount given the accrued overnight interest `Σ δᵢ·rᵢ` over the
    /// fixing period.
    pub fn amount_with_accrued_rate(&self, accrued: Real) -> Result<Real> {
        let total = ensure_finite(accrued, "accrued rate")? + self.spread * self.payment_year_fraction();
        ensure_finite(self.notional() * total, "coupon amount")
    }
}

macro_rules! impl_coupon {
    ($($ty:ty),+) => {
        $(
            impl Coupon for $ty {
                fn base(&self) -> &CouponBase {
                    &self.base
                }
            }
        )+
    };
}

impl_coupon!(
    CouponOn,
    CouponOnCompounded,
    CouponOnArithmeticAverage,
    CouponOnArithmeticAverageSimplified
);

impl_payment_for_coupon!(
    CouponOn,
    CouponOnCompounded,
    CouponOnArithmeticAverage,
    CouponOnArithmeticAverageSimplified,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ig_currencies::currencies::{BRL, USD};
    use ig_indexes::overnight::{cdi, fed_fund};
    use ig_time::WeekendsOnly;
    use std::sync::Arc;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn week() -> DailyFixings {
        // Mon 2023-09-04 .. Mon 2023-09-11
        let dates = vec![
            date(2023, 9, 4),
            date(2023, 9, 5),
            date(2023, 9, 6),
            date(2023, 9, 7),
            date(2023, 9, 8),
            date(2023, 9, 11),
        ];
        let factors = dates.windows(2).map(|w| (w[1] - w[0]) as f64 / 360.0).collect();
        DailyFixings::new(dates, factors).unwrap()
    }

    #[test]
    fn arithmetic_average_amount() {
        let fixings = week();
        let (s, e) = (date(2023, 9, 4), date(2023, 9, 11));
        let base = CouponBase::new(USD, e, s, e, 7.0 / 360.0, 1_000_000.0).unwrap();
        let c = CouponOnArithmeticAverage::new(base, fed_fund().unwrap(), fixings, 0.001).unwrap();
        let amount = c.amount_with_fixings(&[0.05; 5]).unwrap();
        assert_abs_diff_eq!(amount, 1_000_000.0 * 0.051 * 7.0 / 360.0, epsilon = 1e-9);
        assert!(c.amount_with_fixings(&[0.05; 4]).is_err());
    }

    #[test]
    fn simplified_matches_daily_for_flat_rates() {
        let (s, e) = (date(2023, 9, 4), date(2023, 9, 11));
        let index = fed_fund().unwrap();
        let base = CouponBase::new(USD, e, s, e, 7.0 / 360.0, 100.0).unwrap();
        let period = OnFixingPeriod::new(&index, s, e).unwrap();
        let daily = CouponOnArithmeticAverage::new(base.clone(), index.clone(), week(), 0.0).unwrap();
        let simple = CouponOnArithmeticAverageSimplified::new(base, index, period, 0.0).unwrap();
        assert_abs_diff_eq!(
            daily.fixings().total_accrual(),
            simple.fixing_period().accrual_factor,
            epsilon = 1e-15
        );
        let a = daily.amount_with_fixings(&[0.03; 5]).unwrap();
        let b = simple
            .amount_with_accrued_rate(0.03 * simple.fixing_period().accrual_factor)
            .unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn daily_compounded_amount() {
        let cal = Arc::new(WeekendsOnly);
        let dates = vec![date(2023, 9, 4), date(2023, 9, 5), date(2023, 9, 6)];
        let fixings = DailyFixings::new(dates, vec![1.0 / 252.0, 1.0 / 252.0]).unwrap();
        let (s, e) = (date(2023, 9, 4), date(2023, 9, 6));
        let base = CouponBase::new(BRL, e, s, e, 2.0 / 252.0, 1_000.0).unwrap();
        let c = CouponOnCompounded::new(base, cdi(cal).unwrap(), fixings).unwrap();
        let amount = c.amount_with_fixings(&[0.1, 0.1]).unwrap();
        assert_abs_diff_eq!(amount, 1_000.0 * (1.1f64.powf(2.0 / 252.0) - 1.0), epsilon = 1e-12);
    }

    #[test]
    fn daily_fixings_shape() {
        assert!(DailyFixings::new(vec![date(2023, 9, 4)], vec![]).is_err());
        assert!(DailyFixings::new(
            vec![date(2023, 9, 5), date(2023, 9, 4)],
            vec![1.0 / 360.0]
        )
        .is_err());
    }
}
