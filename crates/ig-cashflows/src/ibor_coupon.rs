//! Ibor coupons: single fixing and compounded sub-periods.

use crate::coupon::{impl_payment_for_coupon, simple_amount, Coupon, CouponBase};
use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, CompoundingMethod, Rate, Real, Spread, Time};
use ig_indexes::IborIndex;
use ig_time::Date;

/// The fixing of an Ibor rate: when it is observed and the deposit period it
/// covers.
#[derive(Debug, Clone, PartialEq)]
pub struct IborFixing {
    /// Observation date (period start minus the index spot lag).
    pub fixing_date: Date,
    /// Start of the underlying deposit.
    pub period_start: Date,
    /// End of the underlying deposit.
    pub period_end: Date,
    /// Accrual factor of the deposit under the index day count.
    pub year_fraction: Time,
}

impl IborFixing {
    /// Fixing for the deposit `[period_start, period_end)` of `index`.
    pub fn new(index: &IborIndex, fixing_date: Date, period_start: Date, period_end: Date) -> Result<Self> {
        ensure!(
            !fixing_date.is_null() && fixing_date <= period_start && period_start < period_end,
            "inconsistent fixing dates {fixing_date} / {period_start}..{period_end}"
        );
        Ok(Self {
            fixing_date,
            period_start,
            period_end,
            year_fraction: index.day_counter().year_fraction(period_start, period_end),
        })
    }
}

/// A coupon paying `notional × (fixing + spread) × accrual factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIbor {
    base: CouponBase,
    index: IborIndex,
    fixing: IborFixing,
    spread: Spread,
}

impl CouponIbor {
    /// Create an Ibor coupon.
    pub fn new(base: CouponBase, index: IborIndex, fixing: IborFixing, spread: Spread) -> Result<Self> {
        Ok(Self {
            base,
            index,
            fixing,
            spread: ensure_finite(spread, "spread")?,
        })
    }

    /// The reference index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// The fixing this coupon depends on.
    pub fn fixing(&self) -> &IborFixing {
        &self.fixing
    }

    /// Fixing date.
    pub fn fixing_date(&self) -> Date {
        self.fixing.fixing_date
    }

    /// Spread over the index.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Amount once the index has fixed at `fixing`.
    pub fn amount_with_fixing(&self, fixing: Rate) -> Result<Real> {
        simple_amount(&self.base, ensure_finite(fixing, "fixing")? + self.spread)
    }
}

impl Coupon for CouponIbor {
    fn base(&self) -> &CouponBase {
        &self.base
    }
}

/// One compounding sub-period of a [`CouponIborCompounding`].
#[derive(Debug, Clone, PartialEq)]
pub struct IborSubPeriod {
    /// Sub-period accrual start.
    pub accrual_start: Date,
    /// Sub-period accrual end.
    pub accrual_end: Date,
    /// Sub-period accrual factor under the leg day count.
    pub accrual_factor: Time,
    /// The fixing for this sub-period.
    pub fixing: IborFixing,
}

/// A coupon compounding several Ibor fixings over its payment period.
///
/// With [`CompoundingMethod::Flat`] the spread accrues once over the whole
/// period; with [`CompoundingMethod::Straight`] it is compounded with each
/// fixing.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponIborCompounding {
    base: CouponBase,
    index: IborIndex,
    sub_periods: Vec<IborSubPeriod>,
    spread: Spread,
    method: CompoundingMethod,
}

impl CouponIborCompounding {
    /// Create a compounded Ibor coupon.
    ///
    /// # Errors
    /// The sub-periods must be non-empty and tile the coupon's accrual period
    /// exactly.
    pub fn new(
        base: CouponBase,
        index: IborIndex,
        sub_periods: Vec<IborSubPeriod>,
        spread: Spread,
        method: CompoundingMethod,
    ) -> Result<Self> {
        ensure!(!sub_periods.is_empty(), "compounded coupon needs at least one sub-period");
        let contiguous = sub_periods
            .windows(2)
            .all(|w| w[0].accrual_end == w[1].accrual_start);
        let first = &sub_periods[0];
        let last = &sub_periods[sub_periods.len() - 1];
        ensure!(
            contiguous
                && first.accrual_start == base.accrual_start()
                && last.accrual_end == base.accrual_end(),
            "sub-periods must tile {}..{}",
            base.accrual_start(),
            base.accrual_end()
        );
        Ok(Self {
            base,
            index,
            sub_periods,
            spread: ensure_finite(spread, "spread")?,
            method,
        })
    }

    /// The reference index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Compounding sub-periods in date order.
    pub fn sub_periods(&self) -> &[IborSubPeriod] {
        &self.sub_periods
    }

    /// `(fixing period start, fixing period end)` of every sub-period.
    pub fn fixing_periods(&self) -> Vec<(Date, Date)> {
        self.sub_periods
            .iter()
            .map(|s| (s.fixing.period_start, s.fixing.period_end))
            .collect()
    }

    /// Spread over the index.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// How the fixings and the spread combine.
    pub fn compounding_method(&self) -> CompoundingMethod {
        self.method
    }

    /// Amount once every sub-period has fixed; `fixings` align with
    /// [`CouponIborCompounding::sub_periods`].
    pub fn amount_with_fixings(&self, fixings: &[Rate]) -> Result<Real> {
        let factors: Vec<Time> = self.sub_periods.iter().map(|s| s.accrual_factor).collect();
        let growth = self.method.compounded_return(&factors, fixings, self.spread)?;
        ensure_finite(self.notional() * growth, "coupon amount")
    }
}

impl Coupon for CouponIborCompounding {
    fn base(&self) -> &CouponBase {
        &self.base
    }
}

impl_payment_for_coupon!(CouponIbor, CouponIborCompounding);
