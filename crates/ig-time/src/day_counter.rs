//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the accrual factor between two dates.  Day counters
//! are identified by name: holders compare and hash them by
//! [`DayCounter::name`].

use crate::calendar::Calendar;
use crate::date::{is_leap_year, serial_from_ymd, Date};
use ig_core::{Real, Time};
use std::sync::Arc;

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Name of this convention (e.g. `"Actual/360"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

fn actual_days(d1: Date, d2: Date) -> i64 {
    (d2.serial() - d1.serial()) as i64
}

/// Actual/365 (Fixed).
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Business/252: business days of a calendar over 252.
#[derive(Debug, Clone)]
pub struct Business252 {
    name: String,
    calendar: Arc<dyn Calendar>,
}

impl Business252 {
    /// Business/252 counting business days of `calendar`.
    pub fn new(calendar: Arc<dyn Calendar>) -> Self {
        Self {
            name: format!("Business/252({})", calendar.name()),
            calendar,
        }
    }
}

impl DayCounter for Business252 {
    fn name(&self) -> &str {
        &self.name
    }

    /// Business days in `[d1, d2)`.
    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        if d2 < d1 {
            return -self.day_count(d2, d1);
        }
        (d1.serial()..d2.serial())
            .filter_map(|serial| Date::from_serial(serial).ok())
            .filter(|d| self.calendar.is_business_day(*d))
            .count() as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 252.0
    }
}

/// 30/360 (Bond Basis).
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let (y1, m1, dd1) = d1.ymd();
        let (y2, m2, dd2) = d2.ymd();
        let mut dd1 = dd1 as i64;
        let mut dd2 = dd2 as i64;
        if dd1 == 31 {
            dd1 = 30;
        }
        if dd2 == 31 && dd1 == 30 {
            dd2 = 30;
        }
        360 * (y2 as i64 - y1 as i64) + 30 * (m2 as i64 - m1 as i64) + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA): the period is split at year boundaries and each
/// piece is divided by the length of its own year.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        actual_days(d1, d2)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d2 < d1 {
            return -self.year_fraction(d2, d1);
        }
        let (y1, y2) = (d1.year(), d2.year());
        let mut total = 0.0;
        for y in y1..=y2 {
            let from = d1.serial().max(serial_from_ymd(y, 1, 1));
            let to = d2.serial().min(serial_from_ymd(y, 12, 31) + 1);
            let basis = if is_leap_year(y) { 366.0 } else { 365.0 };
            total += (to - from) as Real / basis;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendsOnly;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual_counters() {
        let d1 = date(2023, 1, 1);
        let d2 = date(2024, 1, 1);
        assert_eq!(Actual365Fixed.day_count(d1, d2), 365);
        assert_abs_diff_eq!(Actual365Fixed.year_fraction(d1, d2), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Actual360.year_fraction(d1, d2), 365.0 / 360.0, epsilon = 1e-12);
    }

    #[test]
    fn thirty360() {
        assert_eq!(Thirty360.day_count(date(2023, 1, 1), date(2024, 1, 1)), 360);
        assert_eq!(Thirty360.day_count(date(2023, 1, 31), date(2023, 3, 31)), 60);
        assert_eq!(Thirty360.day_count(date(2023, 2, 28), date(2023, 3, 31)), 33);
    }

    #[test]
    fn actual_actual_isda_straddles_leap_year() {
        let yf = ActualActualIsda.year_fraction(date(2023, 7, 1), date(2024, 7, 1));
        let expected = 184.0 / 365.0 + 182.0 / 366.0;
        assert_abs_diff_eq!(yf, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            ActualActualIsda.year_fraction(date(2024, 1, 1), date(2025, 1, 1)),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn business252_uses_calendar() {
        let dc = Business252::new(Arc::new(WeekendsOnly));
        // Mon 2023-09-04 .. Mon 2023-09-11: five business days
        assert_eq!(dc.day_count(date(2023, 9, 4), date(2023, 9, 11)), 5);
        assert_eq!(dc.name(), "Business/252(Weekends Only)");
    }

    #[test]
    fn equality_by_name() {
        let a: Arc<dyn DayCounter> = Arc::new(Actual360);
        let b: Arc<dyn DayCounter> = Arc::new(Actual360);
        let c: Arc<dyn DayCounter> = Arc::new(Actual365Fixed);
        assert!(*a == *b);
        assert!(*a != *c);
    }
}
