//! # ig-indexes
//!
//! Immutable rate and price index conventions, the standard market indexes,
//! and the index masters (name → convention registries).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Standard Ibor indexes.
pub mod ibor;

/// `IborIndex` convention.
pub mod ibor_index;

/// Standard price indexes.
pub mod inflation;

/// Standard overnight indexes.
pub mod overnight;

/// `IndexOn` convention.
pub mod overnight_index;

/// `IndexPrice` identity.
pub mod price_index;

pub use ibor::ibor_master;
pub use ibor_index::IborIndex;
pub use inflation::price_index_master;
pub use overnight::overnight_master;
pub use overnight_index::IndexOn;
pub use price_index::IndexPrice;
