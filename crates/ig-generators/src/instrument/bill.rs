//! Bill generator.

use std::sync::Arc;

use ig_core::errors::{ensure_named, Error, Result};
use ig_core::Real;
use ig_instruments::{BillSecurity, BillTransaction};
use ig_time::schedule::adjust_business_days;
use ig_time::{Calendar, Date};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, GeneratorInstrument, WithCalendar};

/// Purchases of one bill issue, quoted by yield.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorBill {
    name: String,
    security: BillSecurity,
}

impl GeneratorBill {
    /// Create the generator for `security`.
    pub fn new(name: impl Into<String>, security: BillSecurity) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "bill generator")?;
        Ok(Self { name, security })
    }

    /// The bill issue.
    pub fn security(&self) -> &BillSecurity {
        &self.security
    }
}

impl GeneratorInstrument for GeneratorBill {
    type Output = BillTransaction;

    fn name(&self) -> &str {
        &self.name
    }

    /// Settles the issue's settlement days after `reference_date`.  The quote
    /// is a yield, or a price per unit notional under
    /// `ExchangeTraded { is_price: true }`.  Any other attribute is rejected.
    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<BillTransaction> {
        check_call(reference_date, quote, notional)?;
        let is_price = match attribute {
            GeneratorAttribute::ExchangeTraded { is_price } => *is_price,
            GeneratorAttribute::NoAttribute => false,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "{}: bills take an ExchangeTraded or no attribute, got {}",
                    self.name,
                    other.kind()
                )))
            }
        };
        let security = &self.security;
        let settlement = adjust_business_days(
            reference_date,
            security.settlement_days() as i32,
            security.calendar().as_ref(),
        )?;
        let quantity = notional / security.notional();
        debug!(generator = %self.name, %reference_date, %settlement, quantity, "generated bill transaction");
        if is_price {
            let amount = -quantity * quote * security.notional();
            BillTransaction::new(security.clone(), quantity, settlement, amount)
        } else {
            BillTransaction::from_yield(security.clone(), quantity, settlement, quote)
        }
    }
}

impl WithCalendar for GeneratorBill {
    fn with_calendar(&self, calendar: Arc<dyn Calendar>) -> Self {
        Self {
            name: self.name.clone(),
            security: self.security.with_calendar(calendar),
        }
    }
}
