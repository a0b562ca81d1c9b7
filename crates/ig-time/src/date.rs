//! `Date`: a calendar date stored as a serial day number.
//!
//! # Serial number convention
//! * Serial 0 is the "null date" sentinel; generators reject it wherever a
//!   date is required.
//! * Serial 1 = January 1, 1900.
//! * The valid range is 1900-01-01 to 2199-12-31.

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ig_core::errors::{Error, Result};
use ig_core::parsers::parse_iso_date;
use std::str::FromStr;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(i32);

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 (1900-01-01) is a Monday
        Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8)
            .unwrap_or(Weekday::Monday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "{self} {n:+} days falls outside the supported range"
            )));
        }
        Ok(Date(serial))
    }

    /// Advance by `n` units.  Month arithmetic clamps to the target month's
    /// last day (Jan 31 + 1M = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let months = y as i32 * 12 + (m as i32 - 1) + n;
                let new_y = months.div_euclid(12);
                let new_m = (months.rem_euclid(12) + 1) as u8;
                if !(1900..=2199).contains(&new_y) {
                    return Err(Error::Date(format!("year {new_y} out of range")));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Calendar days from `self` to `other` (positive if `other > self`).
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the first calendar day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// Calendar-day shift.
///
/// # Panics
/// When the result leaves the supported range; library code steps with
/// [`Date::add_days`] instead.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// Calendar-day shift backward.
///
/// # Panics
/// When the result leaves the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing / display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Date::from_ymd(y, m, d)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a serial number (1900-01-01 = 1).
pub(crate) fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - 1900) * 365;
    // leap days in [1900, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while y < 2199 && serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    while m < 12 && remaining > days_in_month(y, m) as i32 {
        remaining -= days_in_month(y, m) as i32;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(Date::from_ymd(1900, 1, 1).unwrap().serial(), 1);
    }

    #[test]
    fn ymd_roundtrip() {
        for (y, m, d) in [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2012, 7, 17),
            (2199, 12, 31),
        ] {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekday() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2012, 7, 17).unwrap().weekday(), Weekday::Tuesday);
        assert_eq!(Date::from_ymd(2013, 1, 19).unwrap().weekday(), Weekday::Saturday);
    }

    #[test]
    fn advance_months_clamps() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        assert_eq!(
            d.advance(1, TimeUnit::Months).unwrap(),
            Date::from_ymd(2023, 2, 28).unwrap()
        );
        assert_eq!(
            d.advance(-2, TimeUnit::Months).unwrap(),
            Date::from_ymd(2022, 11, 30).unwrap()
        );
        assert_eq!(
            d.advance(13, TimeUnit::Months).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn advance_out_of_range() {
        let d = Date::from_ymd(2199, 6, 1).unwrap();
        assert!(d.advance(1, TimeUnit::Years).is_err());
    }

    #[test]
    fn month_bounds() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29);
        assert_eq!(d.start_of_month().day_of_month(), 1);
        assert!(!d.is_end_of_month());
    }

    #[test]
    fn parse_and_display() {
        let d: Date = "2012-07-17".parse().unwrap();
        assert_eq!(d, Date::from_ymd(2012, 7, 17).unwrap());
        assert_eq!(d.to_string(), "2012-07-17");
        assert!("2012-02-30".parse::<Date>().is_err());
        assert!(Date::NULL.is_null());
    }
}
