//! `Payment` trait and the fixed payment.
//!
//! A payment is an amount of one currency exchanged on a given date.  The
//! sign convention is "received is positive": payer flows carry negative
//! notionals and amounts.

use ig_core::errors::{ensure_finite, Result};
use ig_core::{ensure, Real};
use ig_currencies::Currency;
use ig_time::Date;

/// Anything paid on a known date in a known currency.
pub trait Payment: std::fmt::Debug + Send + Sync {
    /// Settlement currency.
    fn currency(&self) -> Currency;

    /// The date on which the flow is paid.
    fn payment_date(&self) -> Date;

    /// Whether the flow has already been paid as of `reference_date`.  A flow
    /// on the reference date itself is still pending.
    fn has_occurred(&self, reference_date: Date) -> bool {
        self.payment_date() < reference_date
    }
}

/// A known amount paid on a known date (principal exchanges, settlements).
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentFixed {
    currency: Currency,
    payment_date: Date,
    amount: Real,
}

impl PaymentFixed {
    /// Create a fixed payment.
    pub fn new(currency: Currency, payment_date: Date, amount: Real) -> Result<Self> {
        ensure!(!payment_date.is_null(), "payment date is required");
        Ok(Self {
            currency,
            payment_date,
            amount: ensure_finite(amount, "payment amount")?,
        })
    }

    /// The signed amount.
    pub fn amount(&self) -> Real {
        self.amount
    }
}

impl Payment for PaymentFixed {
    fn currency(&self) -> Currency {
        self.currency
    }

    fn payment_date(&self) -> Date {
        self.payment_date
    }
}
