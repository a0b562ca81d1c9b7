//! Compounding methods for coupons made of several floating sub-periods.

use crate::errors::{Error, Result};
use std::str::FromStr;

/// How sub-period floating rates and a spread combine into one payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompoundingMethod {
    /// Compound the floating sub-rates only; the spread accrues once, simply,
    /// over the whole period.
    Flat,
    /// Compound `(fixing + spread)` over every sub-period.
    Straight,
}

impl CompoundingMethod {
    /// Growth factor `Π(1 + δᵢ·rᵢ) − 1` plus the simple spread accrual.
    ///
    /// `accrual_factors` and `fixings` are aligned per sub-period.
    pub fn compounded_return(
        self,
        accrual_factors: &[f64],
        fixings: &[f64],
        spread: f64,
    ) -> Result<f64> {
        if accrual_factors.len() != fixings.len() {
            return Err(Error::InvalidArgument(format!(
                "expected {} sub-period fixings, got {}",
                accrual_factors.len(),
                fixings.len()
            )));
        }
        let growth = match self {
            CompoundingMethod::Flat => {
                let compounded: f64 = accrual_factors
                    .iter()
                    .zip(fixings)
                    .map(|(d, r)| 1.0 + d * r)
                    .product();
                let total: f64 = accrual_factors.iter().sum();
                compounded - 1.0 + spread * total
            }
            CompoundingMethod::Straight => {
                let compounded: f64 = accrual_factors
                    .iter()
                    .zip(fixings)
                    .map(|(d, r)| 1.0 + d * (r + spread))
                    .product();
                compounded - 1.0
            }
        };
        crate::errors::ensure_finite(growth, "compounded return")
    }
}

impl FromStr for CompoundingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FLAT" => Ok(CompoundingMethod::Flat),
            "STRAIGHT" => Ok(CompoundingMethod::Straight),
            other => Err(Error::InvalidArgument(format!(
                "unknown compounding method '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for CompoundingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompoundingMethod::Flat => write!(f, "FLAT"),
            CompoundingMethod::Straight => write!(f, "STRAIGHT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_spread_methods_agree() {
        let d = [0.25, 0.25, 0.25];
        let r = [0.01, 0.02, 0.03];
        let flat = CompoundingMethod::Flat.compounded_return(&d, &r, 0.0).unwrap();
        let straight = CompoundingMethod::Straight
            .compounded_return(&d, &r, 0.0)
            .unwrap();
        assert_abs_diff_eq!(flat, straight, epsilon = 1e-15);
    }

    #[test]
    fn flat_spread_is_not_compounded() {
        let d = [0.5, 0.5];
        let r = [0.02, 0.02];
        let s = 0.01;
        let flat = CompoundingMethod::Flat.compounded_return(&d, &r, s).unwrap();
        assert_abs_diff_eq!(flat, 1.01 * 1.01 - 1.0 + 0.01, epsilon = 1e-15);
        let straight = CompoundingMethod::Straight.compounded_return(&d, &r, s).unwrap();
        assert_abs_diff_eq!(straight, 1.015 * 1.015 - 1.0, epsilon = 1e-15);
        assert!(straight > flat);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = CompoundingMethod::Flat
            .compounded_return(&[0.25, 0.25], &[0.01], 0.0)
            .unwrap_err();
        assert!(err.is_argument_error());
    }

    #[test]
    fn parse() {
        assert_eq!("flat".parse::<CompoundingMethod>().unwrap(), CompoundingMethod::Flat);
        assert_eq!(
            "STRAIGHT".parse::<CompoundingMethod>().unwrap(),
            CompoundingMethod::Straight
        );
        assert!("spread_exclusive".parse::<CompoundingMethod>().is_err());
    }
}
