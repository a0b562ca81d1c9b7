//! # ig-instruments
//!
//! Instrument definitions produced by generators: deposits, FX swaps,
//! interest-rate futures, bills, and two-leg swaps.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Bills and yield conventions.
pub mod bill;
/// Cash deposits.
pub mod deposit;
/// FX exchanges and swaps.
pub mod forex;
/// Interest-rate futures.
pub mod future;
/// The `Instrument` trait and `InstrumentDefinition`.
pub mod instrument;
/// Two-leg swaps.
pub mod swap;

pub use bill::{BillSecurity, BillTransaction, YieldConvention};
pub use deposit::{Deposit, DepositCounterpart};
pub use forex::{Forex, ForexSwap};
pub use future::{InterestRateFutureSecurity, InterestRateFutureTransaction};
pub use instrument::{Instrument, InstrumentDefinition};
pub use swap::{SwapDefinition, SwapType};
