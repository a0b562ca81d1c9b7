//! Two-leg swap definitions.

use ig_cashflows::Annuity;
use ig_core::errors::Result;
use ig_core::ensure;
use ig_time::Date;

/// Whether the first leg of a swap is paid or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapType {
    /// Pay the first leg, receive the second.
    Payer,
    /// Receive the first leg, pay the second.
    Receiver,
}

impl SwapType {
    /// `Payer` when `is_payer`.
    pub fn from_payer_flag(is_payer: bool) -> Self {
        if is_payer {
            SwapType::Payer
        } else {
            SwapType::Receiver
        }
    }
}

/// A swap: two annuities with opposite payer flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapDefinition {
    first_leg: Annuity,
    second_leg: Annuity,
}

impl SwapDefinition {
    /// Pair two legs.  One must be paid and the other received.
    pub fn new(first_leg: Annuity, second_leg: Annuity) -> Result<Self> {
        ensure!(
            first_leg.is_payer() != second_leg.is_payer(),
            "swap legs must have opposite payer flags"
        );
        Ok(Self {
            first_leg,
            second_leg,
        })
    }

    /// First leg (the fixed leg of a fixed/float swap).
    pub fn first_leg(&self) -> &Annuity {
        &self.first_leg
    }

    /// Second leg.
    pub fn second_leg(&self) -> &Annuity {
        &self.second_leg
    }

    /// Direction relative to the first leg.
    pub fn swap_type(&self) -> SwapType {
        SwapType::from_payer_flag(self.first_leg.is_payer())
    }

    /// Whether both legs settle in one currency.
    pub fn is_single_currency(&self) -> bool {
        self.first_leg.currency() == self.second_leg.currency()
    }

    /// Last payment date across both legs.
    pub fn maturity_date(&self) -> Date {
        self.first_leg
            .maturity_date()
            .max(self.second_leg.maturity_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ig_cashflows::{CashFlow, PaymentFixed};
    use ig_currencies::currencies::{EUR, USD};

    fn leg(amount: f64, is_payer: bool, y: u16) -> Annuity {
        let date = Date::from_ymd(y, 7, 19).unwrap();
        let flow = CashFlow::from(PaymentFixed::new(USD, date, amount).unwrap());
        Annuity::new(vec![flow], is_payer).unwrap()
    }

    #[test]
    fn legs_must_oppose() {
        assert!(SwapDefinition::new(leg(-1.0, true, 2013), leg(1.0, true, 2013)).is_err());
        let swap = SwapDefinition::new(leg(-1.0, true, 2013), leg(1.0, false, 2014)).unwrap();
        assert_eq!(swap.swap_type(), SwapType::Payer);
        assert!(swap.is_single_currency());
        assert_eq!(swap.maturity_date(), Date::from_ymd(2014, 7, 19).unwrap());
    }

    #[test]
    fn cross_currency() {
        let date = Date::from_ymd(2013, 7, 19).unwrap();
        let eur = Annuity::new(
            vec![PaymentFixed::new(EUR, date, 1.0).unwrap().into()],
            false,
        )
        .unwrap();
        let swap = SwapDefinition::new(leg(-1.0, true, 2013), eur).unwrap();
        assert!(!swap.is_single_currency());
    }
}
