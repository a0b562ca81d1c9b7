//! `FxMatrix`: spot exchange rates used by FX and cross-currency generators.
//!
//! Rates are quoted as "units of `target` per unit of `source`".  Lookups try
//! the direct pair, then the inverse, then a single hop through any currency
//! quoted against both.

use crate::currency::Currency;
use ig_core::errors::{Error, Result};
use std::collections::BTreeMap;

/// An immutable table of exchange rates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxMatrix {
    rates: BTreeMap<(Currency, Currency), f64>,
}

impl FxMatrix {
    /// An empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `source → target` quoted at `rate`.
    pub fn with_rate(mut self, source: Currency, target: Currency, rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "exchange rate {source}/{target} must be positive and finite, got {rate}"
            )));
        }
        if source == target {
            return Err(Error::InvalidArgument(format!(
                "cannot quote {source} against itself"
            )));
        }
        self.rates.insert((source, target), rate);
        Ok(self)
    }

    /// Units of `target` bought by one unit of `source`.
    pub fn fx_rate(&self, source: Currency, target: Currency) -> Result<f64> {
        if source == target {
            return Ok(1.0);
        }
        if let Some(rate) = self.direct(source, target) {
            return Ok(rate);
        }
        for &(a, b) in self.rates.keys() {
            let pivot = if a == source {
                b
            } else if b == source {
                a
            } else {
                continue;
            };
            if let (Some(first), Some(second)) =
                (self.direct(source, pivot), self.direct(pivot, target))
            {
                return Ok(first * second);
            }
        }
        Err(Error::not_found(
            "exchange rate",
            format!("{}/{}", source.code, target.code),
        ))
    }

    /// Convert `amount` of `source` into `target`.
    pub fn convert(&self, amount: f64, source: Currency, target: Currency) -> Result<f64> {
        Ok(amount * self.fx_rate(source, target)?)
    }

    fn direct(&self, source: Currency, target: Currency) -> Option<f64> {
        self.rates
            .get(&(source, target))
            .copied()
            .or_else(|| self.rates.get(&(target, source)).map(|r| 1.0 / r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{EUR, GBP, JPY, USD};
    use approx::assert_abs_diff_eq;

    fn matrix() -> FxMatrix {
        FxMatrix::new()
            .with_rate(EUR, USD, 1.25)
            .unwrap()
            .with_rate(GBP, USD, 1.5)
            .unwrap()
    }

    #[test]
    fn direct_and_inverse() {
        let fx = matrix();
        assert_abs_diff_eq!(fx.fx_rate(EUR, USD).unwrap(), 1.25, epsilon = 1e-15);
        assert_abs_diff_eq!(fx.fx_rate(USD, EUR).unwrap(), 0.8, epsilon = 1e-15);
        assert_abs_diff_eq!(fx.fx_rate(USD, USD).unwrap(), 1.0, epsilon = 0.0);
    }

    #[test]
    fn cross_through_pivot() {
        let fx = matrix();
        assert_abs_diff_eq!(fx.fx_rate(EUR, GBP).unwrap(), 1.25 / 1.5, epsilon = 1e-14);
        assert_abs_diff_eq!(fx.convert(100.0, GBP, EUR).unwrap(), 120.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_pair_is_lookup_error() {
        let err = matrix().fx_rate(EUR, JPY).unwrap_err();
        assert!(err.is_lookup_error());
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(FxMatrix::new().with_rate(EUR, USD, f64::NAN).is_err());
        assert!(FxMatrix::new().with_rate(EUR, USD, -1.0).is_err());
        assert!(FxMatrix::new().with_rate(EUR, EUR, 1.0).is_err());
    }
}
