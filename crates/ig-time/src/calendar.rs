//! `Calendar` trait and the built-in calendars.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].  Calendars are identified by
//! name: types holding an `Arc<dyn Calendar>` compare and hash it through
//! [`Calendar::name`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use ig_core::errors::Result;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Identifying name (e.g. `"TARGET"`, `"NYC"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is on or after the last business day of its
    /// month.  `false` when no business day precedes the month end.
    fn is_end_of_month(&self, date: Date) -> bool {
        self.end_of_month(date).is_ok_and(|last| date >= last)
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Result<Date> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// # Errors
    /// A date error when the search for a business day leaves the
    /// supported date range.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedFollowing => {
                match self.adjust(date, BusinessDayConvention::Following) {
                    Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                    _ => self.adjust(date, BusinessDayConvention::Preceding),
                }
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(-1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedPreceding => {
                match self.adjust(date, BusinessDayConvention::Preceding) {
                    Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                    _ => self.adjust(date, BusinessDayConvention::Following),
                }
            }
        }
    }

    /// Advance `date` by `n` business days (backwards when `n < 0`).
    /// `n == 0` returns `date` unchanged, even on a holiday.
    ///
    /// # Errors
    /// A date error when the target lies outside the supported range.
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut d = date;
        let mut remaining = n.abs();
        while remaining > 0 {
            d = d.add_days(step)?;
            if self.is_business_day(d) {
                remaining -= 1;
            }
        }
        Ok(d)
    }

    /// Count the business days in `(d1, d2]`.  Negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let sign = if d2 >= d1 { 1 } else { -1 };
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|serial| Date::from_serial(serial).ok())
            .filter(|d| self.is_business_day(*d))
            .count();
        sign * count as i32
    }
}

/// Every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// Saturdays and Sundays are the only non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HolidayCalendar;
    use std::sync::Arc;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn null_calendar_always_business() {
        let cal = NullCalendar;
        assert!(cal.is_business_day(date(2023, 12, 25)));
        assert!(cal.is_business_day(date(2023, 9, 2)));
        assert_eq!(cal.end_of_month(date(2023, 9, 2)).unwrap(), date(2023, 9, 30));
    }

    #[test]
    fn adjust_conventions() {
        let cal = WeekendsOnly;
        // Saturday 2023-09-02
        let sat = date(2023, 9, 2);
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Following).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Preceding).unwrap(), date(2023, 9, 1));
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Unadjusted).unwrap(), sat);
        // Saturday 2023-09-30: following would leave the month
        let eom = date(2023, 9, 30);
        assert_eq!(
            cal.adjust(eom, BusinessDayConvention::ModifiedFollowing).unwrap(),
            date(2023, 9, 29)
        );
        // Sunday 2023-10-01: preceding would leave the month
        let som = date(2023, 10, 1);
        assert_eq!(
            cal.adjust(som, BusinessDayConvention::ModifiedPreceding).unwrap(),
            date(2023, 10, 2)
        );
    }

    #[test]
    fn end_of_month_business_day() {
        let cal = WeekendsOnly;
        assert_eq!(cal.end_of_month(date(2023, 9, 10)).unwrap(), date(2023, 9, 29));
        assert!(cal.is_end_of_month(date(2023, 9, 29)));
        assert!(!cal.is_end_of_month(date(2023, 9, 28)));
    }

    #[test]
    fn advance_and_count() {
        let cal = WeekendsOnly;
        let fri = date(2023, 9, 1);
        assert_eq!(cal.advance_business_days(fri, 1).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.advance_business_days(date(2023, 9, 4), -1).unwrap(), fri);
        assert_eq!(cal.advance_business_days(date(2023, 9, 2), 0).unwrap(), date(2023, 9, 2));
        // Tue, Wed, Thu, Fri
        assert_eq!(cal.business_days_between(date(2023, 9, 4), date(2023, 9, 8)), 4);
        assert_eq!(cal.business_days_between(date(2023, 9, 8), date(2023, 9, 4)), -4);
    }

    #[test]
    fn stepping_past_the_supported_range_is_an_error() {
        let cal = WeekendsOnly;
        // Monday 2199-12-30: one business day is left before Date::MAX
        let last_monday = date(2199, 12, 30);
        assert_eq!(cal.advance_business_days(last_monday, 1).unwrap(), Date::MAX);
        assert!(cal.advance_business_days(last_monday, 2).is_err());
        assert!(cal.advance_business_days(date(1900, 1, 2), -2).is_err());
        let holiday = HolidayCalendar::new("Last", [Date::MAX]);
        assert!(holiday.adjust(Date::MAX, BusinessDayConvention::Following).is_err());
        assert_eq!(
            holiday
                .adjust(Date::MAX, BusinessDayConvention::ModifiedFollowing)
                .unwrap(),
            date(2199, 12, 30)
        );
        assert_eq!(cal.business_days_between(date(2199, 12, 1), Date::MAX), 22);
    }

    #[test]
    fn name_identifies_the_calendar() {
        let a: Arc<dyn Calendar> = Arc::new(WeekendsOnly);
        let b: Arc<dyn Calendar> = Arc::new(WeekendsOnly);
        let c: Arc<dyn Calendar> = Arc::new(NullCalendar);
        assert_eq!(a.name(), b.name());
        assert_ne!(a.name(), c.name());
    }
}
