//! The `Instrument` trait and the `InstrumentDefinition` union returned by
//! generators.

use ig_cashflows::{Annuity, Payment};
use ig_currencies::Currency;
use ig_time::Date;

use crate::bill::BillTransaction;
use crate::deposit::{Deposit, DepositCounterpart};
use crate::forex::ForexSwap;
use crate::future::InterestRateFutureTransaction;
use crate::swap::SwapDefinition;

/// Common view of every generated instrument.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// Currency the instrument is denominated in (the first currency for
    /// multi-currency products).
    fn currency(&self) -> Currency;

    /// The last relevant date.
    fn maturity_date(&self) -> Date;

    /// Whether the instrument has fully run off as of `reference_date`.
    fn is_expired(&self, reference_date: Date) -> bool {
        self.maturity_date() < reference_date
    }
}

impl Instrument for Deposit {
    fn currency(&self) -> Currency {
        Deposit::currency(self)
    }

    fn maturity_date(&self) -> Date {
        self.end_date()
    }
}

impl Instrument for DepositCounterpart {
    fn currency(&self) -> Currency {
        self.deposit().currency()
    }

    fn maturity_date(&self) -> Date {
        self.deposit().end_date()
    }
}

impl Instrument for ForexSwap {
    fn currency(&self) -> Currency {
        self.near_leg().payment_currency1().currency()
    }

    fn maturity_date(&self) -> Date {
        self.far_leg().payment_date()
    }
}

impl Instrument for InterestRateFutureTransaction {
    fn currency(&self) -> Currency {
        self.underlying().index().currency()
    }

    fn maturity_date(&self) -> Date {
        self.underlying().fixing_period_end()
    }
}

impl Instrument for BillTransaction {
    fn currency(&self) -> Currency {
        self.underlying().currency()
    }

    fn maturity_date(&self) -> Date {
        self.underlying().end_date()
    }
}

impl Instrument for SwapDefinition {
    fn currency(&self) -> Currency {
        self.first_leg().currency()
    }

    fn maturity_date(&self) -> Date {
        SwapDefinition::maturity_date(self)
    }
}

impl Instrument for Annuity {
    fn currency(&self) -> Currency {
        Annuity::currency(self)
    }

    fn maturity_date(&self) -> Date {
        Annuity::maturity_date(self)
    }
}

/// Any instrument a generator can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentDefinition {
    /// Cash deposit.
    Deposit(Deposit),
    /// Deposit with a named counterpart.
    DepositCounterpart(DepositCounterpart),
    /// FX swap.
    ForexSwap(ForexSwap),
    /// Futures position.
    InterestRateFutureTransaction(InterestRateFutureTransaction),
    /// Bill purchase or sale.
    BillTransaction(BillTransaction),
    /// Two-leg swap.
    Swap(SwapDefinition),
    /// Single leg.
    Annuity(Annuity),
}

impl InstrumentDefinition {
    /// Borrow the wrapped instrument through the common trait.
    pub fn as_instrument(&self) -> &dyn Instrument {
        match self {
            InstrumentDefinition::Deposit(i) => i,
            InstrumentDefinition::DepositCounterpart(i) => i,
            InstrumentDefinition::ForexSwap(i) => i,
            InstrumentDefinition::InterestRateFutureTransaction(i) => i,
            InstrumentDefinition::BillTransaction(i) => i,
            InstrumentDefinition::Swap(i) => i,
            InstrumentDefinition::Annuity(i) => i,
        }
    }

    /// Short label of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            InstrumentDefinition::Deposit(_) => "deposit",
            InstrumentDefinition::DepositCounterpart(_) => "deposit counterpart",
            InstrumentDefinition::ForexSwap(_) => "forex swap",
            InstrumentDefinition::InterestRateFutureTransaction(_) => "interest rate future",
            InstrumentDefinition::BillTransaction(_) => "bill",
            InstrumentDefinition::Swap(_) => "swap",
            InstrumentDefinition::Annuity(_) => "annuity",
        }
    }
}

impl Instrument for InstrumentDefinition {
    fn currency(&self) -> Currency {
        self.as_instrument().currency()
    }

    fn maturity_date(&self) -> Date {
        self.as_instrument().maturity_date()
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for InstrumentDefinition {
                fn from(value: $ty) -> Self {
                    InstrumentDefinition::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    Deposit(Deposit),
    DepositCounterpart(DepositCounterpart),
    ForexSwap(ForexSwap),
    InterestRateFutureTransaction(InterestRateFutureTransaction),
    BillTransaction(BillTransaction),
    Swap(SwapDefinition),
    Annuity(Annuity),
);
