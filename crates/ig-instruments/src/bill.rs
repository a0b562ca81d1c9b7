//! Treasury bills: discount securities quoted by yield.

use std::str::FromStr;
use std::sync::Arc;

use ig_core::errors::{ensure_finite, ensure_named, Error, Result};
use ig_core::{ensure, Natural, Price, Rate, Real, Time};
use ig_currencies::Currency;
use ig_time::{Calendar, Date, DayCounter};

/// How a bill yield converts into a price per unit notional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YieldConvention {
    /// Bank discount: `1 − y·τ`.
    Discount,
    /// Money-market yield: `1 / (1 + y·τ)`.
    InterestAtMaturity,
}

impl YieldConvention {
    /// Price per unit notional for `yield_rate` over `accrual`.
    pub fn price(self, yield_rate: Rate, accrual: Time) -> Result<Price> {
        let price = match self {
            YieldConvention::Discount => 1.0 - yield_rate * accrual,
            YieldConvention::InterestAtMaturity => {
                let growth = 1.0 + yield_rate * accrual;
                ensure!(growth > 0.0, "yield {yield_rate} gives a non-positive growth factor");
                1.0 / growth
            }
        };
        ensure_finite(price, "bill price")
    }
}

impl FromStr for YieldConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().replace(['_', ' ', '-'], "").as_str() {
            "DISCOUNT" => Ok(YieldConvention::Discount),
            "INTERESTATMATURITY" => Ok(YieldConvention::InterestAtMaturity),
            _ => Err(Error::InvalidArgument(format!("unknown yield convention '{s}'"))),
        }
    }
}

/// A bill issue.  The calendar and day counter compare by name.
#[derive(Debug, Clone)]
pub struct BillSecurity {
    name: String,
    currency: Currency,
    end_date: Date,
    notional: Real,
    settlement_days: Natural,
    calendar: Arc<dyn Calendar>,
    yield_convention: YieldConvention,
    day_counter: Arc<dyn DayCounter>,
}

impl BillSecurity {
    /// Describe the issue.
    ///
    /// # Errors
    /// An empty name, a null maturity or a non-positive notional.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        end_date: Date,
        notional: Real,
        settlement_days: Natural,
        calendar: Arc<dyn Calendar>,
        yield_convention: YieldConvention,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "bill")?;
        ensure!(!end_date.is_null(), "bill maturity is required");
        let notional = ensure_finite(notional, "bill notional")?;
        ensure!(notional > 0.0, "bill notional must be positive");
        Ok(Self {
            name,
            currency,
            end_date,
            notional,
            settlement_days,
            calendar,
            yield_convention,
            day_counter,
        })
    }

    /// Issue name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Maturity, when the notional is repaid.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Notional of one bill.
    pub fn notional(&self) -> Real {
        self.notional
    }

    /// Business days between trade and settlement.
    pub fn settlement_days(&self) -> Natural {
        self.settlement_days
    }

    /// Settlement calendar.
    pub fn calendar(&self) -> &Arc<dyn Calendar> {
        &self.calendar
    }

    /// The same issue settling on `calendar`.
    pub fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            calendar,
            ..self.clone()
        }
    }

    /// Yield quoting convention.
    pub fn yield_convention(&self) -> YieldConvention {
        self.yield_convention
    }

    /// Day count for the yield accrual.
    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    /// Price per unit notional when settling on `settlement_date` at
    /// `yield_rate`.
    pub fn price_from_yield(&self, settlement_date: Date, yield_rate: Rate) -> Result<Price> {
        ensure!(
            settlement_date < self.end_date,
            "settlement {settlement_date} is not before maturity {}",
            self.end_date
        );
        let accrual = self.day_counter.year_fraction(settlement_date, self.end_date);
        self.yield_convention.price(yield_rate, accrual)
    }
}

impl PartialEq for BillSecurity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.currency == other.currency
            && self.end_date == other.end_date
            && self.notional == other.notional
            && self.settlement_days == other.settlement_days
            && self.calendar.name() == other.calendar.name()
            && self.yield_convention == other.yield_convention
            && self.day_counter.name() == other.day_counter.name()
    }
}

// The notional is finite and positive, so bitwise float equality is total.
impl Eq for BillSecurity {}

impl std::hash::Hash for BillSecurity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.currency.hash(state);
        self.end_date.hash(state);
        self.notional.to_bits().hash(state);
        self.settlement_days.hash(state);
        self.calendar.name().hash(state);
        self.yield_convention.hash(state);
        self.day_counter.name().hash(state);
    }
}

/// A purchase (positive quantity) or sale of bills.
#[derive(Debug, Clone, PartialEq)]
pub struct BillTransaction {
    underlying: BillSecurity,
    quantity: Real,
    settlement_date: Date,
    settlement_amount: Real,
}

impl BillTransaction {
    /// Create the transaction from an explicit settlement amount.  A buyer
    /// pays, so a positive quantity carries a negative amount.
    pub fn new(
        underlying: BillSecurity,
        quantity: Real,
        settlement_date: Date,
        settlement_amount: Real,
    ) -> Result<Self> {
        ensure!(!settlement_date.is_null(), "settlement date is required");
        let quantity = ensure_finite(quantity, "bill quantity")?;
        let settlement_amount = ensure_finite(settlement_amount, "settlement amount")?;
        ensure!(
            quantity * settlement_amount <= 0.0,
            "settlement amount must oppose the quantity"
        );
        Ok(Self {
            underlying,
            quantity,
            settlement_date,
            settlement_amount,
        })
    }

    /// Create the transaction with the settlement amount implied by a yield.
    pub fn from_yield(
        underlying: BillSecurity,
        quantity: Real,
        settlement_date: Date,
        yield_rate: Rate,
    ) -> Result<Self> {
        let price = underlying.price_from_yield(settlement_date, yield_rate)?;
        let amount = -quantity * price * underlying.notional();
        Self::new(underlying, quantity, settlement_date, amount)
    }

    /// The bill traded.
    pub fn underlying(&self) -> &BillSecurity {
        &self.underlying
    }

    /// Number of bills.
    pub fn quantity(&self) -> Real {
        self.quantity
    }

    /// Settlement date.
    pub fn settlement_date(&self) -> Date {
        self.settlement_date
    }

    /// Cash paid (negative) or received at settlement.
    pub fn settlement_amount(&self) -> Real {
        self.settlement_amount
    }
}
