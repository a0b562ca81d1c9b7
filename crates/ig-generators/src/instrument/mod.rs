//! Instrument generators.

mod bill;
mod deposit;
mod forex_swap;
mod interest_rate_futures;
mod swap;
mod swap_inflation;

pub use bill::GeneratorBill;
pub use deposit::{GeneratorDeposit, GeneratorDepositOn, GeneratorDepositOnCounterpart};
pub use forex_swap::GeneratorForexSwap;
pub use interest_rate_futures::GeneratorInterestRateFutures;
pub use swap::{
    GeneratorSwapFixedCompoundedOnCompounded, GeneratorSwapFixedIbor, GeneratorSwapFixedOn,
    GeneratorSwapIborCompoundingIbor, GeneratorSwapIborIbor, GeneratorSwapXCcyIborIbor,
};
pub use swap_inflation::GeneratorSwapFixedInflationZeroCoupon;
