//! Cash deposits.

use ig_core::errors::{ensure_finite, ensure_named, Result};
use ig_core::{ensure, Rate, Real, Time};
use ig_currencies::Currency;
use ig_time::Date;

/// A deposit of `notional` from `start_date` to `end_date` at a simple rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    currency: Currency,
    start_date: Date,
    end_date: Date,
    notional: Real,
    rate: Rate,
    accrual_factor: Time,
}

impl Deposit {
    /// Create a deposit.
    ///
    /// # Errors
    /// Null or unordered dates and non-finite numbers are argument errors.
    pub fn new(
        currency: Currency,
        start_date: Date,
        end_date: Date,
        notional: Real,
        rate: Rate,
        accrual_factor: Time,
    ) -> Result<Self> {
        ensure!(
            !start_date.is_null() && start_date < end_date,
            "deposit start {start_date} must precede end {end_date}"
        );
        Ok(Self {
            currency,
            start_date,
            end_date,
            notional: ensure_finite(notional, "notional")?,
            rate: ensure_finite(rate, "deposit rate")?,
            accrual_factor: ensure_finite(accrual_factor, "accrual factor")?,
        })
    }

    /// Deposit currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Value date of the deposit.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Maturity date of the deposit.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Deposited amount.
    pub fn notional(&self) -> Real {
        self.notional
    }

    /// Simple deposit rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Accrual factor between start and end.
    pub fn accrual_factor(&self) -> Time {
        self.accrual_factor
    }

    /// Interest paid at maturity.
    pub fn interest_amount(&self) -> Real {
        self.notional * self.rate * self.accrual_factor
    }
}

/// A deposit with a named counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositCounterpart {
    deposit: Deposit,
    counterpart: String,
}

impl DepositCounterpart {
    /// Attach `counterpart` to a deposit.
    pub fn new(deposit: Deposit, counterpart: impl Into<String>) -> Result<Self> {
        let counterpart = counterpart.into();
        ensure_named(&counterpart, "counterpart")?;
        Ok(Self {
            deposit,
            counterpart,
        })
    }

    /// The underlying deposit.
    pub fn deposit(&self) -> &Deposit {
        &self.deposit
    }

    /// Counterpart name.
    pub fn counterpart(&self) -> &str {
        &self.counterpart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ig_currencies::currencies::USD;

    #[test]
    fn interest() {
        let s = Date::from_ymd(2012, 7, 19).unwrap();
        let e = Date::from_ymd(2013, 1, 21).unwrap();
        let dep = Deposit::new(USD, s, e, 12345.0, 0.01, 186.0 / 360.0).unwrap();
        assert_abs_diff_eq!(dep.interest_amount(), 12345.0 * 0.01 * 186.0 / 360.0, epsilon = 1e-12);
        assert!(Deposit::new(USD, e, s, 1.0, 0.01, 0.5).is_err());
        assert!(DepositCounterpart::new(dep, " ").is_err());
    }
}
