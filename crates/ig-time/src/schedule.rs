//! Schedule calculator: business-day adjustment and accrual date generation.
//!
//! Every function here is pure.  Stub placement is an explicit [`StubType`]
//! argument rather than builder state.
//!
//! Regular dates are always generated as multiples of the period from one
//! anchor (`start` when rolling forward, `end` when rolling backward) so that
//! month-end clamping never drifts (Jan 31 + 1M, + 2M gives Feb 28, Mar 31).

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use ig_core::errors::{Error, Result};
use std::str::FromStr;
use tracing::trace;

// ── Stub placement ────────────────────────────────────────────────────────────

/// Where the irregular period goes when the tenor is not a whole number of
/// payment periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StubType {
    /// A short first period.
    #[default]
    ShortStart,
    /// The remainder merged into the first regular period.
    LongStart,
    /// A short last period.
    ShortEnd,
    /// The remainder merged into the last regular period.
    LongEnd,
    /// Stubs allowed at both ends; dates roll back from the end, so only the
    /// first period can be irregular.
    Both,
    /// No stub: the period must divide the tenor exactly.
    None,
}

impl StubType {
    /// Whether dates are generated backward from the end date.
    pub fn is_from_end(self) -> bool {
        matches!(self, StubType::ShortStart | StubType::LongStart | StubType::Both)
    }

    /// Whether the remainder is merged into the adjacent regular period.
    pub fn is_long(self) -> bool {
        matches!(self, StubType::LongStart | StubType::LongEnd)
    }
}

impl FromStr for StubType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "SHORTSTART" => Ok(StubType::ShortStart),
            "LONGSTART" => Ok(StubType::LongStart),
            "SHORTEND" => Ok(StubType::ShortEnd),
            "LONGEND" => Ok(StubType::LongEnd),
            "BOTH" => Ok(StubType::Both),
            "NONE" => Ok(StubType::None),
            _ => Err(Error::InvalidArgument(format!("unknown stub type '{s}'"))),
        }
    }
}

// ── Index tenor seam ──────────────────────────────────────────────────────────

/// The tenor rule of a rate index, used to find the end of a fixing period.
pub trait TenorConvention {
    /// Length of the index's deposit period.
    fn tenor(&self) -> Period;
    /// Convention applied to the fixing period end date.
    fn business_day_convention(&self) -> BusinessDayConvention;
    /// Whether month-end start dates map to month-end end dates.
    fn end_of_month(&self) -> bool;
}

// ── Single-date adjustments ──────────────────────────────────────────────────

/// Roll `date` with `convention`.  With `end_of_month`, a date on or after
/// its month's last business day goes to that last business day.
pub fn adjust(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &dyn Calendar,
    end_of_month: bool,
) -> Result<Date> {
    if end_of_month && calendar.is_end_of_month(date) {
        calendar.end_of_month(date)
    } else {
        calendar.adjust(date, convention)
    }
}

/// Step `offset` business days (backward when negative).  An offset of zero
/// rolls a holiday forward to the next business day.
///
/// # Errors
/// A date error when the result lies outside the supported range.
pub fn adjust_business_days(date: Date, offset: i32, calendar: &dyn Calendar) -> Result<Date> {
    let stepped = calendar.advance_business_days(date, offset)?;
    calendar.adjust(stepped, BusinessDayConvention::Following)
}

/// Add `period` to `date`, then roll with `convention`.
///
/// With `end_of_month`, a month-based period starting on the last business
/// day of a month ends on the last business day of the target month.
pub fn adjust_period(
    date: Date,
    period: Period,
    convention: BusinessDayConvention,
    calendar: &dyn Calendar,
    end_of_month: bool,
) -> Result<Date> {
    let target = date.advance(period.length, period.unit)?;
    if end_of_month && is_month_based(period) && calendar.is_end_of_month(date) {
        return calendar.end_of_month(target);
    }
    calendar.adjust(target, convention)
}

/// End of the fixing period of `index` starting on `date`.
pub fn adjust_by_index(
    date: Date,
    index: &impl TenorConvention,
    calendar: &dyn Calendar,
) -> Result<Date> {
    adjust_period(
        date,
        index.tenor(),
        index.business_day_convention(),
        calendar,
        index.end_of_month(),
    )
}

/// Every business day in `[start, end]`.
pub fn business_days_between(start: Date, end: Date, calendar: &dyn Calendar) -> Vec<Date> {
    (start.serial()..=end.serial())
        .filter_map(|serial| Date::from_serial(serial).ok())
        .filter(|d| calendar.is_business_day(*d))
        .collect()
}

fn is_month_based(period: Period) -> bool {
    period.canonical().1 == TimeUnit::Months
}

// ── Date sequences ────────────────────────────────────────────────────────────

/// An adjusted accrual schedule: `dates[0]` is the start, each following
/// date closes one period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    dates: Vec<Date>,
    is_regular: Vec<bool>,
}

impl Schedule {
    /// All dates, start included.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Contiguous `(start, end)` accrual periods.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of accrual periods.
    pub fn number_of_periods(&self) -> usize {
        self.is_regular.len()
    }

    /// Whether period `i` spans exactly one payment period.
    pub fn is_regular(&self, i: usize) -> bool {
        self.is_regular.get(i).copied().unwrap_or(false)
    }

    /// First date.
    pub fn start_date(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Last date.
    pub fn end_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }
}

/// Unadjusted period end dates from `start` (excluded) to `end` (included).
pub fn unadjusted_schedule(
    start: Date,
    end: Date,
    period: Period,
    stub: StubType,
) -> Result<Vec<Date>> {
    Ok(unadjusted_with_flags(start, end, period, stub)?
        .into_iter()
        .map(|(d, _)| d)
        .collect())
}

/// Period end dates, each tagged with whether the period it closes is
/// regular.
fn unadjusted_with_flags(
    start: Date,
    end: Date,
    period: Period,
    stub: StubType,
) -> Result<Vec<(Date, bool)>> {
    if start.is_null() || end.is_null() {
        return Err(Error::InvalidArgument("schedule dates must not be null".into()));
    }
    if start >= end {
        return Err(Error::InvalidArgument(format!(
            "schedule start {start} must be before end {end}"
        )));
    }
    if !period.is_positive() {
        return Err(Error::InvalidArgument(format!(
            "schedule period must be positive, got {period}"
        )));
    }

    let mut forward = Vec::new();
    let mut k = 1;
    loop {
        let d = start.advance(k * period.length, period.unit)?;
        if d >= end {
            if d == end {
                forward.push((end, true));
                // an exact fit has no stub, whichever end it would go
                return Ok(forward);
            }
            break;
        }
        forward.push((d, true));
        k += 1;
    }

    if stub == StubType::None {
        return Err(Error::InvalidArgument(format!(
            "period {period} does not divide {start}..{end} and no stub is allowed"
        )));
    }

    if stub.is_from_end() {
        let mut backward = vec![(end, true)];
        let mut k = 1;
        loop {
            let d = end.advance(-k * period.length, period.unit)?;
            if d <= start {
                break;
            }
            backward.push((d, true));
            k += 1;
        }
        backward.reverse();
        // `backward[0]` closes the stub
        if stub.is_long() && backward.len() > 1 {
            backward.remove(0);
        }
        backward[0].1 = false;
        Ok(backward)
    } else {
        if stub.is_long() && !forward.is_empty() {
            forward.pop();
        }
        forward.push((end, false));
        Ok(forward)
    }
}

/// Adjusted schedule from `start` over `tenor`, one period every `period`.
#[allow(clippy::too_many_arguments)]
pub fn adjusted_schedule(
    start: Date,
    tenor: Period,
    period: Period,
    stub: StubType,
    convention: BusinessDayConvention,
    calendar: &dyn Calendar,
    end_of_month: bool,
) -> Result<Schedule> {
    if start.is_null() {
        return Err(Error::InvalidArgument("schedule start must not be null".into()));
    }
    let end = start.advance(tenor.length, tenor.unit)?;
    adjusted_schedule_between(start, end, period, stub, convention, calendar, end_of_month)
}

/// Adjusted schedule between `start` and the unadjusted maturity `end`.
///
/// The start date is kept as given.  Later dates are rolled with
/// `convention`, or moved to their month's last business day when
/// `end_of_month` is set and `start` is a month-end business day.
#[allow(clippy::too_many_arguments)]
pub fn adjusted_schedule_between(
    start: Date,
    end: Date,
    period: Period,
    stub: StubType,
    convention: BusinessDayConvention,
    calendar: &dyn Calendar,
    end_of_month: bool,
) -> Result<Schedule> {
    let unadjusted = unadjusted_with_flags(start, end, period, stub)?;
    let eom_rule = end_of_month && is_month_based(period) && calendar.is_end_of_month(start);

    let mut dates = vec![start];
    let mut is_regular: Vec<bool> = Vec::with_capacity(unadjusted.len());
    // a dropped leading date lengthens the next period
    let mut absorbed = false;
    for (d, regular) in unadjusted {
        let adjusted = if eom_rule {
            calendar.end_of_month(d)?
        } else {
            calendar.adjust(d, convention)?
        };
        let last = dates.last().copied().unwrap_or(start);
        if adjusted <= last {
            // rolled onto the previous date: absorb into that period
            match is_regular.last_mut() {
                Some(flag) => *flag = false,
                None => absorbed = true,
            }
            continue;
        }
        dates.push(adjusted);
        is_regular.push(regular && !absorbed);
        absorbed = false;
    }
    if is_regular.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "no accrual period between {start} and {end} after adjustment"
        )));
    }
    trace!(
        %start,
        %end,
        %period,
        periods = is_regular.len(),
        "adjusted schedule"
    );
    Ok(Schedule { dates, is_regular })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{NullCalendar, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn offset_zero_rolls_forward() {
        let sat = date(2013, 1, 19);
        assert_eq!(adjust_business_days(sat, 0, &WeekendsOnly).unwrap(), date(2013, 1, 21));
        assert_eq!(adjust_business_days(sat, -1, &WeekendsOnly).unwrap(), date(2013, 1, 18));
        assert_eq!(
            adjust_business_days(date(2012, 7, 17), 2, &WeekendsOnly).unwrap(),
            date(2012, 7, 19)
        );
    }

    #[test]
    fn stepping_near_the_last_date_fails_cleanly() {
        let err = adjust_business_days(date(2199, 12, 30), 2, &WeekendsOnly).unwrap_err();
        assert!(matches!(err, Error::Date(_)));
        assert_eq!(
            adjust_business_days(date(2199, 12, 30), 1, &WeekendsOnly).unwrap(),
            Date::MAX
        );
        let days = business_days_between(date(2199, 12, 29), Date::MAX, &WeekendsOnly);
        assert_eq!(days, vec![date(2199, 12, 30), Date::MAX]);
    }

    #[test]
    fn period_adjustment_modified_following() {
        let end = adjust_period(
            date(2012, 7, 19),
            Period::months(6),
            BusinessDayConvention::ModifiedFollowing,
            &WeekendsOnly,
            true,
        )
        .unwrap();
        assert_eq!(end, date(2013, 1, 21));
    }

    #[test]
    fn period_adjustment_end_of_month() {
        // 2012-04-30 is the last business day of April
        let start = date(2012, 4, 30);
        let eom = adjust_period(
            start,
            Period::months(1),
            BusinessDayConvention::ModifiedFollowing,
            &WeekendsOnly,
            true,
        )
        .unwrap();
        assert_eq!(eom, date(2012, 5, 31));
        let plain = adjust_period(
            start,
            Period::months(1),
            BusinessDayConvention::ModifiedFollowing,
            &WeekendsOnly,
            false,
        )
        .unwrap();
        assert_eq!(plain, date(2012, 5, 30));
    }

    #[test]
    fn exact_fit_is_regular() {
        let dates = unadjusted_schedule(
            date(2012, 1, 15),
            date(2013, 1, 15),
            Period::months(3),
            StubType::None,
        )
        .unwrap();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], date(2012, 4, 15));
        assert_eq!(dates[3], date(2013, 1, 15));
    }

    #[test]
    fn stub_placement() {
        let start = date(2012, 1, 15);
        let end = date(2012, 11, 15);
        let p = Period::months(3);
        assert_eq!(
            unadjusted_schedule(start, end, p, StubType::ShortStart).unwrap(),
            vec![date(2012, 2, 15), date(2012, 5, 15), date(2012, 8, 15), end]
        );
        assert_eq!(
            unadjusted_schedule(start, end, p, StubType::LongStart).unwrap(),
            vec![date(2012, 5, 15), date(2012, 8, 15), end]
        );
        assert_eq!(
            unadjusted_schedule(start, end, p, StubType::ShortEnd).unwrap(),
            vec![date(2012, 4, 15), date(2012, 7, 15), date(2012, 10, 15), end]
        );
        assert_eq!(
            unadjusted_schedule(start, end, p, StubType::LongEnd).unwrap(),
            vec![date(2012, 4, 15), date(2012, 7, 15), end]
        );
        assert!(unadjusted_schedule(start, end, p, StubType::None)
            .unwrap_err()
            .is_argument_error());
    }

    #[test]
    fn regularity_flags() {
        let s = adjusted_schedule_between(
            date(2012, 1, 16),
            date(2012, 11, 15),
            Period::months(3),
            StubType::ShortStart,
            BusinessDayConvention::ModifiedFollowing,
            &NullCalendar,
            false,
        )
        .unwrap();
        assert_eq!(s.number_of_periods(), 4);
        assert!(!s.is_regular(0));
        assert!((1..4).all(|i| s.is_regular(i)));
    }

    #[test]
    fn stub_absorbed_by_start_is_irregular() {
        // the Saturday 2012-06-30 stub end rolls back onto the Friday start
        let s = adjusted_schedule_between(
            date(2012, 6, 29),
            date(2012, 9, 30),
            Period::months(1),
            StubType::ShortStart,
            BusinessDayConvention::Preceding,
            &WeekendsOnly,
            false,
        )
        .unwrap();
        assert_eq!(
            s.dates(),
            &[date(2012, 6, 29), date(2012, 7, 30), date(2012, 8, 30), date(2012, 9, 28)]
        );
        assert!(!s.is_regular(0));
        assert!(s.is_regular(1));
        assert!(s.is_regular(2));
    }

    #[test]
    fn end_of_month_schedule() {
        // 2012-02-29 is a Wednesday and the last business day of February
        let s = adjusted_schedule(
            date(2012, 2, 29),
            Period::years(1),
            Period::months(3),
            StubType::ShortStart,
            BusinessDayConvention::ModifiedFollowing,
            &WeekendsOnly,
            true,
        )
        .unwrap();
        assert_eq!(
            s.dates(),
            &[
                date(2012, 2, 29),
                date(2012, 5, 31),
                date(2012, 8, 31),
                date(2012, 11, 30),
                date(2013, 2, 28),
            ]
        );
    }

    #[test]
    fn rejects_bad_inputs() {
        let d = date(2012, 1, 16);
        let p = Period::months(3);
        let bdc = BusinessDayConvention::Following;
        assert!(adjusted_schedule(Date::NULL, p, p, StubType::ShortStart, bdc, &NullCalendar, false)
            .is_err());
        assert!(unadjusted_schedule(d, d, p, StubType::ShortStart).is_err());
        assert!(unadjusted_schedule(d, d + 10, Period::months(0), StubType::ShortStart).is_err());
    }

    #[test]
    fn business_day_list() {
        // Fri 2023-09-01 .. Tue 2023-09-05
        let days = business_days_between(date(2023, 9, 1), date(2023, 9, 5), &WeekendsOnly);
        assert_eq!(days, vec![date(2023, 9, 1), date(2023, 9, 4), date(2023, 9, 5)]);
    }

    #[test]
    fn parse_stub() {
        assert_eq!("short_start".parse::<StubType>().unwrap(), StubType::ShortStart);
        assert_eq!("LongEnd".parse::<StubType>().unwrap(), StubType::LongEnd);
        assert!("middle".parse::<StubType>().is_err());
    }
}
