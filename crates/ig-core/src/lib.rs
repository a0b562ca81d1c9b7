//! # ig-core
//!
//! Core types shared by every instrgen crate: primitive aliases, the error
//! taxonomy, compounding methods, text parsers, and frozen registries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Sub-period compounding methods.
pub mod compounding;

/// Name-keyed equality for types holding trait-object handles.
pub mod equality;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Period and date string parsing.
pub mod parsers;

/// Immutable name → value registries.
pub mod registry;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate.
pub type Spread = Real;

/// A price or value.
pub type Price = Real;

/// An accrual fraction in years.
pub type Time = Real;

/// Non-negative integer type (lags, offsets, counts).
pub type Natural = u32;

/// Alias used for sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use compounding::CompoundingMethod;
pub use errors::{Error, Result};
pub use registry::Registry;
