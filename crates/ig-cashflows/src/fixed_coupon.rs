//! Fixed-rate coupons.

use crate::coupon::{impl_payment_for_coupon, simple_amount, Coupon, CouponBase};
use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, Rate, Real};

/// A coupon paying `notional × rate × accrual factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponFixed {
    base: CouponBase,
    rate: Rate,
}

impl CouponFixed {
    /// Create a fixed coupon.
    pub fn new(base: CouponBase, rate: Rate) -> Result<Self> {
        Ok(Self {
            base,
            rate: ensure_finite(rate, "fixed rate")?,
        })
    }

    /// The fixed rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The coupon amount.
    pub fn amount(&self) -> Result<Real> {
        simple_amount(&self.base, self.rate)
    }
}

impl Coupon for CouponFixed {
    fn base(&self) -> &CouponBase {
        &self.base
    }
}

/// A fixed coupon compounded annually over its accrual factor:
/// `notional × ((1 + rate)^τ − 1)`.
///
/// Used for Brazilian-style fixed legs (τ in business days / 252) and for
/// the fixed side of zero-coupon inflation swaps (τ in whole years).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponFixedCompounding {
    base: CouponBase,
    rate: Rate,
}

impl CouponFixedCompounding {
    /// Create a compounded fixed coupon.
    pub fn new(base: CouponBase, rate: Rate) -> Result<Self> {
        let rate = ensure_finite(rate, "fixed rate")?;
        ensure!(rate > -1.0, "compounded fixed rate must exceed -100%, got {rate}");
        Ok(Self { base, rate })
    }

    /// The annually compounded rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The coupon amount.
    pub fn amount(&self) -> Result<Real> {
        let growth = (1.0 + self.rate).powf(self.payment_year_fraction()) - 1.0;
        ensure_finite(self.notional() * growth, "coupon amount")
    }
}

impl Coupon for CouponFixedCompounding {
    fn base(&self) -> &CouponBase {
        &self.base
    }
}

impl_payment_for_coupon!(CouponFixed, CouponFixedCompounding);
