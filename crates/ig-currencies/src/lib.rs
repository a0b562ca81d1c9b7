//! # ig-currencies
//!
//! Currency definitions and spot FX matrices.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency data and definitions.
pub mod currency;

/// Pre-defined currencies.
pub mod currencies;

/// Spot exchange-rate matrix.
pub mod fx_matrix;

pub use currency::Currency;
pub use fx_matrix::FxMatrix;
