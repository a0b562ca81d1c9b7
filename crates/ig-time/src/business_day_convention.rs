//! Business-day conventions.

use crate::calendar::Calendar;
use crate::date::Date;
use ig_core::errors::{Error, Result};
use std::str::FromStr;

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Apply the convention to `date` under `calendar`.
    pub fn adjust(self, date: Date, calendar: &dyn Calendar) -> Result<Date> {
        calendar.adjust(date, self)
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODIFIEDFOLLOWING" | "MF" => Ok(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" | "P" => Ok(BusinessDayConvention::Preceding),
            "MODIFIEDPRECEDING" | "MP" => Ok(BusinessDayConvention::ModifiedPreceding),
            "UNADJUSTED" | "NONE" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(Error::InvalidArgument(format!(
                "unknown business day convention '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!(
            "Modified Following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "none".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::Unadjusted
        );
        assert_eq!(
            "MF".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!("nearest".parse::<BusinessDayConvention>().is_err());
    }
}
