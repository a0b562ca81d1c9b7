//! Zero-coupon inflation coupon.

use crate::coupon::{impl_payment_for_coupon, Coupon, CouponBase};
use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, Natural, Real};
use ig_indexes::IndexPrice;
use ig_time::{Date, TimeUnit};

/// Pays `notional × (I(end) / I(start) − 1)` at maturity, where the index
/// levels are read `month_lag` months before the accrual dates.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponInflationZeroCoupon {
    base: CouponBase,
    price_index: IndexPrice,
    month_lag: Natural,
    reference_start_date: Date,
    reference_end_date: Date,
    pay_notional: bool,
}

impl CouponInflationZeroCoupon {
    /// Create a zero-coupon inflation coupon; the reference months are the
    /// first days of the months `month_lag` before accrual start and end.
    pub fn new(
        base: CouponBase,
        price_index: IndexPrice,
        month_lag: Natural,
        pay_notional: bool,
    ) -> Result<Self> {
        let lag = -(month_lag as i32);
        let reference_start_date = base
            .accrual_start()
            .advance(lag, TimeUnit::Months)?
            .start_of_month();
        let reference_end_date = base
            .accrual_end()
            .advance(lag, TimeUnit::Months)?
            .start_of_month();
        ensure!(
            reference_start_date < reference_end_date,
            "inflation reference months must differ"
        );
        Ok(Self {
            base,
            price_index,
            month_lag,
            reference_start_date,
            reference_end_date,
            pay_notional,
        })
    }

    /// The price index.
    pub fn price_index(&self) -> &IndexPrice {
        &self.price_index
    }

    /// Months between an accrual date and its index reference month.
    pub fn month_lag(&self) -> Natural {
        self.month_lag
    }

    /// Reference month of the start index level.
    pub fn reference_start_date(&self) -> Date {
        self.reference_start_date
    }

    /// Reference month of the end index level.
    pub fn reference_end_date(&self) -> Date {
        self.reference_end_date
    }

    /// Whether the notional is paid on top of the inflation accretion.
    pub fn pays_notional(&self) -> bool {
        self.pay_notional
    }

    /// Amount given the index levels at the two reference months.
    pub fn amount_with_index_values(&self, start_level: Real, end_level: Real) -> Result<Real> {
        ensure!(
            start_level.is_finite() && start_level > 0.0,
            "start index level must be positive, got {start_level}"
        );
        let ratio = ensure_finite(end_level, "end index level")? / start_level;
        let accretion = if self.pay_notional { ratio } else { ratio - 1.0 };
        ensure_finite(self.notional() * accretion, "coupon amount")
    }
}

impl Coupon for CouponInflationZeroCoupon {
    fn base(&self) -> &CouponBase {
        &self.base
    }
}

impl_payment_for_coupon!(CouponInflationZeroCoupon);
