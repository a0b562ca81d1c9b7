//! # instrgen
//!
//! Instrument generators: named bundles of market conventions that turn a
//! quote, a notional and a trade date into deposits, FX swaps, futures,
//! bills, swaps and stand-alone legs with fully laid-out cash-flow
//! schedules.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ig-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! instrgen = "0.1"
//! ```
//!
//! ```rust
//! use instrgen::generators::{GeneratorAttribute, GeneratorInstrument, GeneratorMaster};
//! use instrgen::instruments::InstrumentDefinition;
//! use instrgen::time::{Date, Period, WeekendsOnly};
//! use std::sync::Arc;
//!
//! let master = GeneratorMaster::new().unwrap();
//! let deposit = master
//!     .get_generator("USD Deposit", Arc::new(WeekendsOnly))
//!     .unwrap()
//!     .generate_instrument(
//!         Date::from_ymd(2012, 7, 17).unwrap(),
//!         0.01,
//!         1_000_000.0,
//!         &GeneratorAttribute::ir(Period::months(6)),
//!     )
//!     .unwrap();
//! let InstrumentDefinition::Deposit(deposit) = deposit else { unreachable!() };
//! assert_eq!(deposit.end_date(), Date::from_ymd(2013, 1, 21).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ig_core as core;

/// Date, calendar, day counter, and schedule types.
pub use ig_time as time;

/// Currency definitions and FX matrices.
pub use ig_currencies as currencies;

/// Ibor, overnight and price index conventions.
pub use ig_indexes as indexes;

/// Payments, coupons and annuities.
pub use ig_cashflows as cashflows;

/// Instrument definitions.
pub use ig_instruments as instruments;

/// Leg and instrument generators and the generator master.
pub use ig_generators as generators;
