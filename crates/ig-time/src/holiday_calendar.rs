//! Calendars defined by an explicit holiday list on top of weekends.

use crate::calendar::Calendar;
use crate::date::Date;
use std::collections::BTreeSet;

/// A weekend calendar with a fixed set of extra holidays.
///
/// ```
/// use ig_time::{Calendar, Date, HolidayCalendar};
/// let xmas = Date::from_ymd(2024, 12, 25).unwrap();
/// let cal = HolidayCalendar::new("LON", [xmas]);
/// assert!(!cal.is_business_day(xmas));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Create a calendar called `name` with the given holidays.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Return a copy with `date` added as a holiday.
    pub fn with_holiday(mut self, date: Date) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Explicit holidays, in date order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
