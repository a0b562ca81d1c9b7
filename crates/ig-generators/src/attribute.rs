//! Per-call attributes that complete a generator's conventions.
//!
//! A generator holds conventions; the attribute names what varies from one
//! call to the next (the tenor, an FX spot matrix, how a futures quote reads).

use ig_core::errors::{Error, Result};
use ig_currencies::FxMatrix;
use ig_time::Period;

/// The extra data a `generate_instrument` call needs.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorAttribute {
    /// Interest-rate instruments: forward start and tenor.
    Ir {
        /// Offset of the start date from spot (`0D` for spot-starting).
        start_period: Period,
        /// Tenor from the start date.
        end_period: Period,
    },
    /// FX instruments: periods plus the spot rates.
    Fx {
        /// Offset of the near date from spot.
        start_period: Period,
        /// Offset of the far date from the near date.
        end_period: Period,
        /// Spot exchange rates.
        fx_matrix: FxMatrix,
    },
    /// Listed instruments.
    ExchangeTraded {
        /// `true` when the quote is a price, `false` when it is a rate.
        is_price: bool,
    },
    /// No extra data.
    NoAttribute,
}

impl GeneratorAttribute {
    /// Spot-starting interest-rate attribute for `tenor`.
    pub fn ir(tenor: Period) -> Self {
        GeneratorAttribute::Ir {
            start_period: Period::days(0),
            end_period: tenor,
        }
    }

    /// Forward-starting interest-rate attribute.
    pub fn ir_forward(start_period: Period, end_period: Period) -> Self {
        GeneratorAttribute::Ir {
            start_period,
            end_period,
        }
    }

    /// Spot-starting FX attribute.
    pub fn fx(end_period: Period, fx_matrix: FxMatrix) -> Self {
        GeneratorAttribute::Fx {
            start_period: Period::days(0),
            end_period,
            fx_matrix,
        }
    }

    /// Variant name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorAttribute::Ir { .. } => "Ir",
            GeneratorAttribute::Fx { .. } => "Fx",
            GeneratorAttribute::ExchangeTraded { .. } => "ExchangeTraded",
            GeneratorAttribute::NoAttribute => "NoAttribute",
        }
    }

    /// `(start_period, end_period)` of an `Ir` attribute.
    pub fn ir_periods(&self) -> Result<(Period, Period)> {
        match self {
            GeneratorAttribute::Ir {
                start_period,
                end_period,
            } => check_periods(*start_period, *end_period),
            other => Err(other.mismatch("Ir")),
        }
    }

    /// `(start_period, end_period, fx_matrix)` of an `Fx` attribute.
    pub fn fx_parts(&self) -> Result<(Period, Period, &FxMatrix)> {
        match self {
            GeneratorAttribute::Fx {
                start_period,
                end_period,
                fx_matrix,
            } => {
                let (s, e) = check_periods(*start_period, *end_period)?;
                Ok((s, e, fx_matrix))
            }
            other => Err(other.mismatch("Fx")),
        }
    }

    /// Whether a listed quote is a price.  `NoAttribute` reads as a price.
    pub fn quote_is_price(&self) -> Result<bool> {
        match self {
            GeneratorAttribute::ExchangeTraded { is_price } => Ok(*is_price),
            GeneratorAttribute::NoAttribute => Ok(true),
            other => Err(other.mismatch("ExchangeTraded or NoAttribute")),
        }
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::InvalidArgument(format!(
            "expected a {expected} attribute, got {}",
            self.kind()
        ))
    }
}

fn check_periods(start_period: Period, end_period: Period) -> Result<(Period, Period)> {
    if start_period.length < 0 || !end_period.is_positive() {
        return Err(Error::InvalidArgument(format!(
            "attribute periods {start_period} / {end_period} must be non-negative / positive"
        )));
    }
    Ok((start_period, end_period))
}
