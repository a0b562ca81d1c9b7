//! `Annuity`: one leg: an ordered list of flows in a single currency.

use crate::cashflow::CashFlow;
use crate::coupon::Coupon;
use ig_core::ensure;
use ig_core::errors::Result;
use ig_currencies::Currency;
use ig_time::Date;

/// An ordered, non-empty sequence of cash flows and the side that pays them.
#[derive(Debug, Clone, PartialEq)]
pub struct Annuity {
    flows: Vec<CashFlow>,
    is_payer: bool,
}

impl Annuity {
    /// Create an annuity.
    ///
    /// # Errors
    /// The flows must be non-empty, share one currency, and have
    /// non-decreasing payment dates.
    pub fn new(flows: Vec<CashFlow>, is_payer: bool) -> Result<Self> {
        ensure!(!flows.is_empty(), "an annuity needs at least one flow");
        let currency = flows[0].currency();
        ensure!(
            flows.iter().all(|f| f.currency() == currency),
            "annuity flows must share one currency"
        );
        ensure!(
            flows.windows(2).all(|w| w[0].payment_date() <= w[1].payment_date()),
            "annuity payment dates must be non-decreasing"
        );
        Ok(Self { flows, is_payer })
    }

    /// All flows in payment order.
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Number of flows.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Whether there are no flows (never true once constructed).
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Whether the owner pays this leg.
    pub fn is_payer(&self) -> bool {
        self.is_payer
    }

    /// Leg currency.
    pub fn currency(&self) -> Currency {
        self.flows[0].currency()
    }

    /// The interest coupons, skipping plain payments.
    pub fn coupons(&self) -> impl Iterator<Item = &dyn Coupon> + '_ {
        self.flows.iter().filter_map(CashFlow::as_coupon)
    }

    /// Payment dates in order.
    pub fn payment_dates(&self) -> Vec<Date> {
        self.flows.iter().map(CashFlow::payment_date).collect()
    }

    /// Date of the last payment.
    pub fn maturity_date(&self) -> Date {
        self.flows[self.flows.len() - 1].payment_date()
    }
}
