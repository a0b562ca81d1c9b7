//! Interest-rate futures on an Ibor index.

use ig_core::errors::{ensure_finite, ensure_named, Result};
use ig_core::{ensure, Price, Real, Time};
use ig_indexes::IborIndex;
use ig_time::schedule::{adjust_business_days, adjust_by_index};
use ig_time::{Calendar, Date};

/// The exchange-listed contract: an Ibor fixing period starting a spot lag
/// after the last trading date.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureSecurity {
    name: String,
    index: IborIndex,
    last_trading_date: Date,
    fixing_period_start: Date,
    fixing_period_end: Date,
    fixing_period_accrual_factor: Time,
    notional: Real,
    payment_accrual_factor: Time,
}

impl InterestRateFutureSecurity {
    /// Build the contract.  The fixing period starts `index.spot_lag()`
    /// business days after `last_trading_date` and runs for the index tenor.
    pub fn new(
        name: impl Into<String>,
        index: IborIndex,
        last_trading_date: Date,
        notional: Real,
        payment_accrual_factor: Time,
        calendar: &dyn Calendar,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "future")?;
        ensure!(!last_trading_date.is_null(), "last trading date is required");
        let notional = ensure_finite(notional, "future notional")?;
        ensure!(notional > 0.0, "future notional must be positive");
        let payment_accrual_factor = ensure_finite(payment_accrual_factor, "payment accrual factor")?;
        ensure!(payment_accrual_factor > 0.0, "payment accrual factor must be positive");
        let fixing_period_start =
            adjust_business_days(last_trading_date, index.spot_lag() as i32, calendar)?;
        let fixing_period_end = adjust_by_index(fixing_period_start, &index, calendar)?;
        let fixing_period_accrual_factor = index
            .day_counter()
            .year_fraction(fixing_period_start, fixing_period_end);
        Ok(Self {
            name,
            index,
            last_trading_date,
            fixing_period_start,
            fixing_period_end,
            fixing_period_accrual_factor,
            notional,
            payment_accrual_factor,
        })
    }

    /// Contract name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying index.
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Last trading (and fixing) date.
    pub fn last_trading_date(&self) -> Date {
        self.last_trading_date
    }

    /// Start of the underlying deposit.
    pub fn fixing_period_start(&self) -> Date {
        self.fixing_period_start
    }

    /// End of the underlying deposit.
    pub fn fixing_period_end(&self) -> Date {
        self.fixing_period_end
    }

    /// Index accrual over the fixing period.
    pub fn fixing_period_accrual_factor(&self) -> Time {
        self.fixing_period_accrual_factor
    }

    /// Notional of one contract.
    pub fn notional(&self) -> Real {
        self.notional
    }

    /// Accrual factor used for margining (0.25 for a quarterly contract).
    pub fn payment_accrual_factor(&self) -> Time {
        self.payment_accrual_factor
    }
}

// Constructors reject non-finite numbers, so bitwise float equality is total.
impl Eq for InterestRateFutureSecurity {}

impl std::hash::Hash for InterestRateFutureSecurity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.index.hash(state);
        self.last_trading_date.hash(state);
        self.fixing_period_start.hash(state);
        self.fixing_period_end.hash(state);
        self.fixing_period_accrual_factor.to_bits().hash(state);
        self.notional.to_bits().hash(state);
        self.payment_accrual_factor.to_bits().hash(state);
    }
}

/// A position in a futures contract traded at a given price.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateFutureTransaction {
    underlying: InterestRateFutureSecurity,
    quantity: i64,
    trade_date: Date,
    trade_price: Price,
}

impl InterestRateFutureTransaction {
    /// Create the transaction.  Negative quantities are short positions.
    pub fn new(
        underlying: InterestRateFutureSecurity,
        quantity: i64,
        trade_date: Date,
        trade_price: Price,
    ) -> Result<Self> {
        ensure!(!trade_date.is_null(), "trade date is required");
        ensure!(
            trade_date <= underlying.last_trading_date(),
            "trade date {trade_date} is after the last trading date {}",
            underlying.last_trading_date()
        );
        Ok(Self {
            underlying,
            quantity,
            trade_date,
            trade_price: ensure_finite(trade_price, "trade price")?,
        })
    }

    /// The contract traded.
    pub fn underlying(&self) -> &InterestRateFutureSecurity {
        &self.underlying
    }

    /// Number of contracts.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Trade date.
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// Traded price (1 − rate).
    pub fn trade_price(&self) -> Price {
        self.trade_price
    }

    /// Margin for a move from the trade price to `price`.
    pub fn margin(&self, price: Price) -> Real {
        (price - self.trade_price)
            * self.quantity as Real
            * self.underlying.notional
            * self.underlying.payment_accrual_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ig_indexes::ibor::usd_libor;
    use ig_time::{Period, WeekendsOnly};

    fn security() -> InterestRateFutureSecurity {
        let index = usd_libor(Period::months(3)).unwrap();
        let ltd = Date::from_ymd(2012, 9, 17).unwrap();
        InterestRateFutureSecurity::new("EDU2", index, ltd, 1_000_000.0, 0.25, &WeekendsOnly)
            .unwrap()
    }

    #[test]
    fn fixing_period() {
        let sec = security();
        assert_eq!(sec.fixing_period_start(), Date::from_ymd(2012, 9, 19).unwrap());
        assert_eq!(sec.fixing_period_end(), Date::from_ymd(2012, 12, 19).unwrap());
        assert_abs_diff_eq!(sec.fixing_period_accrual_factor(), 91.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn margin() {
        let trade = Date::from_ymd(2012, 7, 17).unwrap();
        let tx = InterestRateFutureTransaction::new(security(), 2, trade, 0.99).unwrap();
        assert_abs_diff_eq!(tx.margin(0.9901), 0.0001 * 2.0 * 250_000.0, epsilon = 1e-6);
        let late = Date::from_ymd(2012, 10, 1).unwrap();
        assert!(InterestRateFutureTransaction::new(security(), 1, late, 0.99).is_err());
    }
}
