//! `Period`: a time span expressed in a [`TimeUnit`].

use crate::time_unit::TimeUnit;
use ig_core::errors::{Error, Result};
use ig_core::parsers::parse_period_string;
use std::str::FromStr;

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// `n` calendar days.
    pub const fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` weeks.
    pub const fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// `n` months.
    pub const fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// `n` years.
    pub const fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// Whether the period has zero length.
    pub fn is_zero(&self) -> bool {
        self.length == 0
    }

    /// Whether the period moves forward in time.
    pub fn is_positive(&self) -> bool {
        self.length > 0
    }

    /// Express the period in a canonical unit: days for `D`/`W`, months for
    /// `M`/`Y`.
    pub fn canonical(self) -> (i32, TimeUnit) {
        match self.unit {
            TimeUnit::Days => (self.length, TimeUnit::Days),
            TimeUnit::Weeks => (self.length * 7, TimeUnit::Days),
            TimeUnit::Months => (self.length, TimeUnit::Months),
            TimeUnit::Years => (self.length * 12, TimeUnit::Months),
        }
    }

    /// How many `other` periods make up `self`, if that is a positive whole
    /// number.  Day-based and month-based periods never divide each other.
    ///
    /// ```
    /// use ig_time::Period;
    /// assert_eq!(Period::years(1).ratio(Period::months(3)), Some(4));
    /// assert_eq!(Period::months(6).ratio(Period::months(4)), None);
    /// ```
    pub fn ratio(self, other: Period) -> Option<u32> {
        let (a, ua) = self.canonical();
        let (b, ub) = other.canonical();
        if ua != ub || a <= 0 || b <= 0 || a % b != 0 {
            return None;
        }
        u32::try_from(a / b).ok()
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.length, self.unit)
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.length * rhs, self.unit)
    }
}

impl std::ops::Mul<Period> for i32 {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl FromStr for Period {
    type Err = Error;

    /// Parse strings such as `"3M"`, `"1Y"`, `"2W"`, `"30D"`.
    fn from_str(s: &str) -> Result<Self> {
        let (length, code) = parse_period_string(s)?;
        let unit = TimeUnit::from_code(code)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown time unit '{code}'")))?;
        Ok(Self::new(length, unit))
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Period::months(3).to_string(), "3M");
        assert_eq!(Period::years(1).to_string(), "1Y");
        assert_eq!((-Period::months(6)).to_string(), "-6M");
    }

    #[test]
    fn parse() {
        assert_eq!("6m".parse::<Period>().unwrap(), Period::months(6));
        assert_eq!("2W".parse::<Period>().unwrap(), Period::weeks(2));
        assert!("6Q".parse::<Period>().is_err());
    }

    #[test]
    fn ratio() {
        assert_eq!(Period::months(6).ratio(Period::months(3)), Some(2));
        assert_eq!(Period::years(1).ratio(Period::months(6)), Some(2));
        assert_eq!(Period::weeks(2).ratio(Period::days(7)), Some(2));
        assert_eq!(Period::months(6).ratio(Period::months(6)), Some(1));
        assert_eq!(Period::months(3).ratio(Period::months(6)), None);
        assert_eq!(Period::months(1).ratio(Period::days(30)), None);
        assert_eq!(Period::months(6).ratio(Period::months(0)), None);
    }
}
