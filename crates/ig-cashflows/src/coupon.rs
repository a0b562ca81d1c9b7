//! `Coupon` trait and the accrual data every coupon shares.
//!
//! A coupon accrues over `[accrual_start, accrual_end)` and pays on a payment
//! date no earlier than the accrual end.

use crate::payment::Payment;
use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, Real, Time};
use ig_currencies::Currency;
use ig_time::Date;

/// Dates, accrual factor and notional of one coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponBase {
    currency: Currency,
    payment_date: Date,
    accrual_start: Date,
    accrual_end: Date,
    payment_year_fraction: Time,
    notional: Real,
}

impl CouponBase {
    /// Validate and bundle the common coupon data.
    ///
    /// # Errors
    /// Null dates, an empty accrual period, a payment before the accrual end,
    /// or non-finite numbers are argument errors.
    pub fn new(
        currency: Currency,
        payment_date: Date,
        accrual_start: Date,
        accrual_end: Date,
        payment_year_fraction: Time,
        notional: Real,
    ) -> Result<Self> {
        ensure!(
            !payment_date.is_null() && !accrual_start.is_null() && !accrual_end.is_null(),
            "coupon dates are required"
        );
        ensure!(
            accrual_start < accrual_end,
            "accrual start {accrual_start} must precede accrual end {accrual_end}"
        );
        ensure!(
            payment_date >= accrual_end,
            "payment date {payment_date} precedes accrual end {accrual_end}"
        );
        Ok(Self {
            currency,
            payment_date,
            accrual_start,
            accrual_end,
            payment_year_fraction: ensure_finite(payment_year_fraction, "payment year fraction")?,
            notional: ensure_finite(notional, "notional")?,
        })
    }

    /// Settlement currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Payment date.
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Start of the accrual period.
    pub fn accrual_start(&self) -> Date {
        self.accrual_start
    }

    /// End of the accrual period.
    pub fn accrual_end(&self) -> Date {
        self.accrual_end
    }
}

/// Interest-rate coupon: a [`Payment`] with an accrual period.
pub trait Coupon: Payment {
    /// Shared accrual data.
    fn base(&self) -> &CouponBase;

    /// Signed notional.
    fn notional(&self) -> Real {
        self.base().notional
    }

    /// Start of the accrual period.
    fn accrual_start_date(&self) -> Date {
        self.base().accrual_start
    }

    /// End of the accrual period.
    fn accrual_end_date(&self) -> Date {
        self.base().accrual_end
    }

    /// Accrual factor of the period under the leg's day count.
    fn payment_year_fraction(&self) -> Time {
        self.base().payment_year_fraction
    }
}

/// Implements [`Payment`] for a coupon type through its [`CouponBase`].
macro_rules! impl_payment_for_coupon {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::payment::Payment for $ty {
                fn currency(&self) -> ig_currencies::Currency {
                    $crate::coupon::Coupon::base(self).currency()
                }

                fn payment_date(&self) -> ig_time::Date {
                    $crate::coupon::Coupon::base(self).payment_date()
                }
            }
        )+
    };
}

pub(crate) use impl_payment_for_coupon;

/// Amount `notional × rate × year fraction` shared by simple coupons.
pub(crate) fn simple_amount(base: &CouponBase, rate: Real) -> Result<Real> {
    ensure_finite(base.notional * rate * base.payment_year_fraction, "coupon amount")
}
