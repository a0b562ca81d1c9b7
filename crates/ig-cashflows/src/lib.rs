//! # ig-cashflows
//!
//! Payments, coupons, and annuities (legs) produced by instrument generators.
//! These are definitions: dates, accrual factors, and conventions.  Amounts
//! that depend on fixings are available given those fixings.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Annuity (leg) definition.
pub mod annuity;
/// The `CashFlow` enum.
pub mod cashflow;
/// `Coupon` trait and shared accrual data.
pub mod coupon;
/// Fixed coupons.
pub mod fixed_coupon;
/// Ibor coupons.
pub mod ibor_coupon;
/// Zero-coupon inflation coupon.
pub mod inflation_coupon;
/// Overnight coupons.
pub mod overnight_coupon;
/// `Payment` trait and fixed payments.
pub mod payment;

pub use annuity::Annuity;
pub use cashflow::CashFlow;
pub use coupon::{Coupon, CouponBase};
pub use fixed_coupon::{CouponFixed, CouponFixedCompounding};
pub use ibor_coupon::{CouponIbor, CouponIborCompounding, IborFixing, IborSubPeriod};
pub use inflation_coupon::CouponInflationZeroCoupon;
pub use overnight_coupon::{
    CouponOn, CouponOnArithmeticAverage, CouponOnArithmeticAverageSimplified, CouponOnCompounded,
    DailyFixings, OnFixingPeriod,
};
pub use payment::{Payment, PaymentFixed};
