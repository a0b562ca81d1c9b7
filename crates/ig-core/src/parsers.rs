//! Text parsing helpers for convention configuration.
//!
//! Period strings look like `"3M"`, `"1Y"`, `"30D"`, `"2W"`; dates are ISO
//! `YYYY-MM-DD`.  The typed `FromStr` impls in `ig-time` sit on top of these.

use crate::errors::{Error, Result};

/// Split a period string into `(length, unit)` with the unit upper-cased.
pub fn parse_period_string(s: &str) -> Result<(i32, char)> {
    let s = s.trim();
    let bad = || Error::InvalidArgument(format!("cannot parse period '{s}'"));
    let unit = s.chars().last().ok_or_else(bad)?.to_ascii_uppercase();
    if !matches!(unit, 'D' | 'W' | 'M' | 'Y') {
        return Err(bad());
    }
    let length = s[..s.len() - 1].parse::<i32>().map_err(|_| bad())?;
    Ok((length, unit))
}

/// Split an ISO date string into `(year, month, day)`.
pub fn parse_iso_date(s: &str) -> Result<(u16, u8, u8)> {
    let s = s.trim();
    let bad = || Error::InvalidArgument(format!("cannot parse date '{s}'"));
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(bad());
    }
    let year = parts[0].parse::<u16>().map_err(|_| bad())?;
    let month = parts[1].parse::<u8>().map_err(|_| bad())?;
    let day = parts[2].parse::<u8>().map_err(|_| bad())?;
    Ok((year, month, day))
}
