//! # ig-time
//!
//! Dates, periods, calendars, business-day conventions, day counters, and the
//! schedule calculator used to lay out accrual periods.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// Weekend calendars with explicit holiday lists.
pub mod holiday_calendar;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// Date adjustment and accrual schedule generation.
pub mod schedule;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, NullCalendar, WeekendsOnly};
pub use date::Date;
pub use day_counter::{
    Actual360, Actual365Fixed, ActualActualIsda, Business252, DayCounter, Thirty360,
};
pub use holiday_calendar::HolidayCalendar;
pub use period::Period;
pub use schedule::{Schedule, StubType, TenorConvention};
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
