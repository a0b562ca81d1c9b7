//! # ig-generators
//!
//! Generators turn market conventions plus a quote, a notional and a
//! reference date into instrument definitions.
//!
//! * [`leg`]: fixed, Ibor, compounded Ibor and overnight legs.
//! * [`instrument`]: deposits, FX swaps, futures, bills and swaps.
//! * [`master`]: registries of standard conventions.
//!
//! ```
//! use ig_generators::{GeneratorAttribute, GeneratorInstrument, GeneratorMaster};
//! use ig_time::{Date, Period, WeekendsOnly};
//! use std::sync::Arc;
//!
//! let master = GeneratorMaster::new().unwrap();
//! let generator = master
//!     .get_generator("USD6MLIBOR3M", Arc::new(WeekendsOnly))
//!     .unwrap();
//! let swap = generator
//!     .generate_instrument(
//!         Date::from_ymd(2012, 7, 17).unwrap(),
//!         0.02,
//!         1_000_000.0,
//!         &GeneratorAttribute::ir(Period::years(5)),
//!     )
//!     .unwrap();
//! assert_eq!(swap.kind(), "swap");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Per-call generator attributes.
pub mod attribute;

/// The generator contract and the generator union.
pub mod generator;

/// Instrument generators.
pub mod instrument;

/// Leg generators and their shared conventions.
pub mod leg;

/// Registries of standard generators.
pub mod master;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use attribute::GeneratorAttribute;
pub use generator::{Generator, GeneratorInstrument, WithCalendar};
pub use instrument::*;
pub use leg::{
    FixingLayout, GeneratorLeg, GeneratorLegFixed, GeneratorLegIbor, GeneratorLegIborCompounding,
    GeneratorLegOnArithmeticAverage, GeneratorLegOnCompounded, LegConventions,
};
pub use master::GeneratorMaster;
