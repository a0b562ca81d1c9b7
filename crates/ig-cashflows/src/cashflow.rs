//! `CashFlow`: the closed set of flows an annuity can hold.

use crate::coupon::Coupon;
use crate::fixed_coupon::{CouponFixed, CouponFixedCompounding};
use crate::ibor_coupon::{CouponIbor, CouponIborCompounding};
use crate::inflation_coupon::CouponInflationZeroCoupon;
use crate::overnight_coupon::{
    CouponOn, CouponOnArithmeticAverage, CouponOnArithmeticAverageSimplified, CouponOnCompounded,
};
use crate::payment::{Payment, PaymentFixed};
use ig_core::Real;
use ig_currencies::Currency;
use ig_time::Date;

/// Any payment or coupon produced by a leg generator.
#[derive(Debug, Clone, PartialEq)]
pub enum CashFlow {
    /// Known amount (notional exchange, settlement).
    Fixed(PaymentFixed),
    /// Fixed coupon.
    CouponFixed(CouponFixed),
    /// Annually compounded fixed coupon.
    CouponFixedCompounding(CouponFixedCompounding),
    /// Ibor coupon.
    CouponIbor(CouponIbor),
    /// Compounded Ibor coupon.
    CouponIborCompounding(CouponIborCompounding),
    /// Compounded overnight coupon.
    CouponOn(CouponOn),
    /// Daily compounded overnight coupon.
    CouponOnCompounded(CouponOnCompounded),
    /// Arithmetic average overnight coupon with daily dates.
    CouponOnArithmeticAverage(CouponOnArithmeticAverage),
    /// Arithmetic average overnight coupon, parametric.
    CouponOnArithmeticAverageSimplified(CouponOnArithmeticAverageSimplified),
    /// Zero-coupon inflation coupon.
    CouponInflationZeroCoupon(CouponInflationZeroCoupon),
}

impl CashFlow {
    /// The flow as a [`Payment`].
    pub fn as_payment(&self) -> &dyn Payment {
        match self {
            CashFlow::Fixed(p) => p,
            CashFlow::CouponFixed(c) => c,
            CashFlow::CouponFixedCompounding(c) => c,
            CashFlow::CouponIbor(c) => c,
            CashFlow::CouponIborCompounding(c) => c,
            CashFlow::CouponOn(c) => c,
            CashFlow::CouponOnCompounded(c) => c,
            CashFlow::CouponOnArithmeticAverage(c) => c,
            CashFlow::CouponOnArithmeticAverageSimplified(c) => c,
            CashFlow::CouponInflationZeroCoupon(c) => c,
        }
    }

    /// The flow as a [`Coupon`], unless it is a plain payment.
    pub fn as_coupon(&self) -> Option<&dyn Coupon> {
        match self {
            CashFlow::Fixed(_) => None,
            CashFlow::CouponFixed(c) => Some(c),
            CashFlow::CouponFixedCompounding(c) => Some(c),
            CashFlow::CouponIbor(c) => Some(c),
            CashFlow::CouponIborCompounding(c) => Some(c),
            CashFlow::CouponOn(c) => Some(c),
            CashFlow::CouponOnCompounded(c) => Some(c),
            CashFlow::CouponOnArithmeticAverage(c) => Some(c),
            CashFlow::CouponOnArithmeticAverageSimplified(c) => Some(c),
            CashFlow::CouponInflationZeroCoupon(c) => Some(c),
        }
    }

    /// Payment date.
    pub fn payment_date(&self) -> Date {
        self.as_payment().payment_date()
    }

    /// Settlement currency.
    pub fn currency(&self) -> Currency {
        self.as_payment().currency()
    }

    /// Amount, when it does not depend on any fixing.
    pub fn known_amount(&self) -> Option<Real> {
        match self {
            CashFlow::Fixed(p) => Some(p.amount()),
            CashFlow::CouponFixed(c) => c.amount().ok(),
            CashFlow::CouponFixedCompounding(c) => c.amount().ok(),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for CashFlow {
                fn from(value: $ty) -> Self {
                    CashFlow::$variant(value)
                }
            }
        )+
    };
}

impl_from!(
    Fixed => PaymentFixed,
    CouponFixed => CouponFixed,
    CouponFixedCompounding => CouponFixedCompounding,
    CouponIbor => CouponIbor,
    CouponIborCompounding => CouponIborCompounding,
    CouponOn => CouponOn,
    CouponOnCompounded => CouponOnCompounded,
    CouponOnArithmeticAverage => CouponOnArithmeticAverage,
    CouponOnArithmeticAverageSimplified => CouponOnArithmeticAverageSimplified,
    CouponInflationZeroCoupon => CouponInflationZeroCoupon,
);
