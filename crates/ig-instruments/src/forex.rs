//! FX exchanges and FX swaps.

use ig_cashflows::{Payment, PaymentFixed};
use ig_core::errors::Result;
use ig_core::{ensure, Real};
use ig_time::Date;

/// An exchange of two currencies on one date: `currency1` amount against an
/// opposite-signed `currency2` amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Forex {
    payment_currency1: PaymentFixed,
    payment_currency2: PaymentFixed,
}

impl Forex {
    /// Pair two opposite-signed payments on the same date.
    pub fn new(payment_currency1: PaymentFixed, payment_currency2: PaymentFixed) -> Result<Self> {
        ensure!(
            payment_currency1.payment_date() == payment_currency2.payment_date(),
            "both sides of an FX exchange settle on the same date"
        );
        ensure!(
            payment_currency1.currency() != payment_currency2.currency(),
            "an FX exchange needs two different currencies"
        );
        ensure!(
            payment_currency1.amount() * payment_currency2.amount() <= 0.0,
            "FX exchange amounts must have opposite signs"
        );
        Ok(Self {
            payment_currency1,
            payment_currency2,
        })
    }

    /// The `currency1` side.
    pub fn payment_currency1(&self) -> &PaymentFixed {
        &self.payment_currency1
    }

    /// The `currency2` side.
    pub fn payment_currency2(&self) -> &PaymentFixed {
        &self.payment_currency2
    }

    /// Settlement date.
    pub fn payment_date(&self) -> Date {
        self.payment_currency1.payment_date()
    }

    /// Implied rate: units of `currency2` per unit of `currency1`.
    pub fn exchange_rate(&self) -> Real {
        -self.payment_currency2.amount() / self.payment_currency1.amount()
    }
}

/// A near exchange and the reverse far exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ForexSwap {
    near_leg: Forex,
    far_leg: Forex,
}

impl ForexSwap {
    /// Combine the two exchanges.
    pub fn new(near_leg: Forex, far_leg: Forex) -> Result<Self> {
        ensure!(
            near_leg.payment_date() < far_leg.payment_date(),
            "FX swap near date must precede far date"
        );
        Ok(Self { near_leg, far_leg })
    }

    /// Exchange at the start.
    pub fn near_leg(&self) -> &Forex {
        &self.near_leg
    }

    /// Exchange at the end.
    pub fn far_leg(&self) -> &Forex {
        &self.far_leg
    }

    /// Forward points: far rate minus near rate.
    pub fn forward_points(&self) -> Real {
        self.far_leg.exchange_rate() - self.near_leg.exchange_rate()
    }
}
