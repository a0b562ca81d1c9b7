//! Interest-rate futures generator.

use std::sync::Arc;

use ig_core::errors::{ensure_named, Result};
use ig_core::{ensure, Real};
use ig_instruments::{InterestRateFutureSecurity, InterestRateFutureTransaction};
use ig_time::{Calendar, Date};
use tracing::debug;

use crate::attribute::GeneratorAttribute;
use crate::generator::{check_call, GeneratorInstrument, WithCalendar};

/// Positions in one listed futures contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorInterestRateFutures {
    name: String,
    security: InterestRateFutureSecurity,
}

impl GeneratorInterestRateFutures {
    /// Create the generator for `security`.
    pub fn new(name: impl Into<String>, security: InterestRateFutureSecurity) -> Result<Self> {
        let name = name.into();
        ensure_named(&name, "futures generator")?;
        Ok(Self { name, security })
    }

    /// The contract.
    pub fn security(&self) -> &InterestRateFutureSecurity {
        &self.security
    }
}

impl GeneratorInstrument for GeneratorInterestRateFutures {
    type Output = InterestRateFutureTransaction;

    fn name(&self) -> &str {
        &self.name
    }

    /// The quote is a price unless the attribute says it is a rate, in which
    /// case the price is `1 − quote`.  The quantity is the notional in whole
    /// contracts, rounded up; a count beyond `i64` is an argument error.
    fn generate_instrument(
        &self,
        reference_date: Date,
        quote: Real,
        notional: Real,
        attribute: &GeneratorAttribute,
    ) -> Result<InterestRateFutureTransaction> {
        check_call(reference_date, quote, notional)?;
        let price = if attribute.quote_is_price()? {
            quote
        } else {
            1.0 - quote
        };
        let contracts = (notional / self.security.notional()).ceil();
        ensure!(
            (i64::MIN as Real..i64::MAX as Real).contains(&contracts),
            "{}: notional {notional} needs {contracts} contracts, beyond the supported count",
            self.name
        );
        let quantity = contracts as i64;
        debug!(generator = %self.name, %reference_date, quantity, price, "generated futures transaction");
        InterestRateFutureTransaction::new(self.security.clone(), quantity, reference_date, price)
    }
}

impl WithCalendar for GeneratorInterestRateFutures {
    /// The contract's dates are fixed at listing, so only a copy is made.
    fn with_calendar(&self, _calendar: Arc<dyn Calendar>) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ig_indexes::ibor::euribor;
    use ig_time::{Period, WeekendsOnly};

    fn generator() -> GeneratorInterestRateFutures {
        let security = InterestRateFutureSecurity::new(
            "ERU2",
            euribor(Period::months(3)).unwrap(),
            Date::from_ymd(2012, 9, 17).unwrap(),
            1_000_000.0,
            0.25,
            &WeekendsOnly,
        )
        .unwrap();
        GeneratorInterestRateFutures::new("ERU2", security).unwrap()
    }

    #[test]
    fn price_and_rate_quotes() {
        let reference = Date::from_ymd(2012, 7, 17).unwrap();
        let gen = generator();
        let by_price = gen
            .generate_instrument(reference, 0.9950, 2_500_000.0, &GeneratorAttribute::NoAttribute)
            .unwrap();
        assert_eq!(by_price.quantity(), 3);
        assert_abs_diff_eq!(by_price.trade_price(), 0.995);
        let by_rate = gen
            .generate_instrument(
                reference,
                0.0050,
                1_000_000.0,
                &GeneratorAttribute::ExchangeTraded { is_price: false },
            )
            .unwrap();
        assert_eq!(by_rate.quantity(), 1);
        assert_abs_diff_eq!(by_rate.trade_price(), 0.995, epsilon = 1e-15);
    }

    #[test]
    fn oversized_notional_is_rejected() {
        let reference = Date::from_ymd(2012, 7, 17).unwrap();
        for notional in [1e30, -1e30] {
            let err = generator()
                .generate_instrument(reference, 0.995, notional, &GeneratorAttribute::NoAttribute)
                .unwrap_err();
            assert!(err.is_argument_error(), "{notional}");
        }
        let sale = generator()
            .generate_instrument(reference, 0.995, -2_000_000.0, &GeneratorAttribute::NoAttribute)
            .unwrap();
        assert_eq!(sale.quantity(), -2);
    }

    #[test]
    fn rejects_empty_name() {
        let err = GeneratorInterestRateFutures::new("", generator().security().clone()).unwrap_err();
        assert!(err.is_argument_error());
    }

    #[test]
    fn ir_attribute_rejected() {
        let reference = Date::from_ymd(2012, 7, 17).unwrap();
        let attr = GeneratorAttribute::ir(Period::months(3));
        assert!(generator()
            .generate_instrument(reference, 0.995, 1.0, &attr)
            .unwrap_err()
            .is_argument_error());
    }
}
