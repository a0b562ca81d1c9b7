//! Error types for instrgen.
//!
//! Generation is a pure computation, so the taxonomy is small: a caller
//! either broke the construction/call contract (an argument error), asked a
//! registry for something it does not hold (a lookup error), or pushed date
//! arithmetic outside the supported range.  The `ensure!` and `fail!` macros
//! defined here return early with the matching variant.

use thiserror::Error;

/// The top-level error type used throughout instrgen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was missing or a call argument was incompatible
    /// (wrong attribute variant, null date, non-finite quote).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A registry was asked for a name it does not know.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// What kind of entry was requested (e.g. `"ibor index"`).
        kind: &'static str,
        /// The name that was looked up.
        name: String,
    },

    /// Date construction or arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Internal failure that is neither a contract violation nor a lookup.
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Return `true` for caller-contract violations.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Return `true` for registry misses.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Build a lookup error.
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Shorthand `Result` type used throughout instrgen.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return an argument error unless `$cond` holds.
///
/// # Example
/// ```
/// use ig_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ig_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).unwrap_err().is_argument_error());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ig_core::{fail, errors::Error};
/// fn always_err() -> ig_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

/// Reject NaN and infinities under the given label.
pub fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!(
            "{what} must be finite, got {value}"
        )))
    }
}

/// Reject empty (or whitespace-only) names.
pub fn ensure_named(name: &str, what: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} name is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(Error::InvalidArgument("x".into()).is_argument_error());
        assert!(!Error::InvalidArgument("x".into()).is_lookup_error());
        let e = Error::not_found("ibor index", "XYZ");
        assert!(e.is_lookup_error());
        assert_eq!(e.to_string(), "ibor index not found: XYZ");
    }

    #[test]
    fn finite_guard() {
        assert_eq!(ensure_finite(0.01, "quote").unwrap(), 0.01);
        assert!(ensure_finite(f64::NAN, "quote").unwrap_err().is_argument_error());
        assert!(ensure_finite(f64::INFINITY, "notional").is_err());
    }

    #[test]
    fn name_guard() {
        assert!(ensure_named("USD6MLIBOR3M", "generator").is_ok());
        assert!(ensure_named("  ", "generator").is_err());
    }
}
