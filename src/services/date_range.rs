//! Resolution of named date ranges into concrete UTC bounds

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

use crate::models::DateRangeMode;

/// Bounds an event must overlap to be listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    /// Event must end at or after this instant
    pub ends_after: Option<DateTime<Utc>>,
    /// Event must start before this instant
    pub starts_before: Option<DateTime<Utc>>,
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Resolve `mode` relative to `now`.
///
/// Weeks run Monday to Sunday. `custom` is only honoured for
/// `DateRangeMode::Custom`; its end date is inclusive. Returns `None` when a
/// bound falls outside the representable date range.
pub fn resolve(
    mode: DateRangeMode,
    custom: Option<(NaiveDate, NaiveDate)>,
    now: DateTime<Utc>,
) -> Option<DateBounds> {
    let today = now.date_naive();
    let monday = add_days(today, -(today.weekday().num_days_from_monday() as i64))?;
    let day_span = |from: Option<NaiveDate>, days: i64| -> Option<DateBounds> {
        let from = from?;
        Some(DateBounds {
            ends_after: Some(start_of_day(from)),
            starts_before: Some(start_of_day(add_days(from, days)?)),
        })
    };

    match mode {
        DateRangeMode::Upcoming => Some(DateBounds {
            ends_after: Some(now),
            starts_before: None,
        }),
        DateRangeMode::Today => day_span(Some(today), 1),
        DateRangeMode::Tomorrow => day_span(add_days(today, 1), 1),
        DateRangeMode::ThisWeek => Some(DateBounds {
            ends_after: Some(now),
            starts_before: Some(start_of_day(add_days(monday, 7)?)),
        }),
        DateRangeMode::ThisWeekend => day_span(add_days(monday, 5), 2),
        DateRangeMode::NextWeek => day_span(add_days(monday, 7), 7),
        DateRangeMode::ThisMonth => Some(DateBounds {
            ends_after: Some(now),
            starts_before: Some(start_of_day(
                today
                    .with_day(1)
                    .and_then(|first| first.checked_add_months(Months::new(1)))?,
            )),
        }),
        DateRangeMode::Custom => match custom {
            Some((start, end)) => Some(DateBounds {
                ends_after: Some(start_of_day(start)),
                starts_before: Some(start_of_day(end.succ_opt()?)),
            }),
            None => Some(DateBounds::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
        Some(at(y, m, d, 0, 0))
    }

    // Wednesday
    fn now() -> DateTime<Utc> {
        at(2024, 6, 12, 15, 30)
    }

    #[test]
    fn test_upcoming_is_open_ended() {
        let b = resolve(DateRangeMode::Upcoming, None, now()).unwrap();
        assert_eq!(b.ends_after, Some(now()));
        assert_eq!(b.starts_before, None);
    }

    #[test]
    fn test_today_and_tomorrow() {
        let b = resolve(DateRangeMode::Today, None, now()).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 6, 12));
        assert_eq!(b.starts_before, midnight(2024, 6, 13));

        let b = resolve(DateRangeMode::Tomorrow, None, now()).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 6, 13));
        assert_eq!(b.starts_before, midnight(2024, 6, 14));
    }

    #[test]
    fn test_week_ranges() {
        let b = resolve(DateRangeMode::ThisWeek, None, now()).unwrap();
        assert_eq!(b.ends_after, Some(now()));
        assert_eq!(b.starts_before, midnight(2024, 6, 17));

        let b = resolve(DateRangeMode::ThisWeekend, None, now()).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 6, 15));
        assert_eq!(b.starts_before, midnight(2024, 6, 17));

        let b = resolve(DateRangeMode::NextWeek, None, now()).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 6, 17));
        assert_eq!(b.starts_before, midnight(2024, 6, 24));
    }

    #[test]
    fn test_weekend_on_sunday_is_current_weekend() {
        let sunday = at(2024, 6, 16, 10, 0);
        let b = resolve(DateRangeMode::ThisWeekend, None, sunday).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 6, 15));
        assert_eq!(b.starts_before, midnight(2024, 6, 17));
    }

    #[test]
    fn test_this_month_rolls_over_year() {
        let b = resolve(DateRangeMode::ThisMonth, None, now()).unwrap();
        assert_eq!(b.starts_before, midnight(2024, 7, 1));

        let december = at(2024, 12, 20, 8, 0);
        let b = resolve(DateRangeMode::ThisMonth, None, december).unwrap();
        assert_eq!(b.ends_after, Some(december));
        assert_eq!(b.starts_before, midnight(2025, 1, 1));
    }

    #[test]
    fn test_custom_range_end_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap();
        let b = resolve(DateRangeMode::Custom, Some((start, end)), now()).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 7, 1));
        assert_eq!(b.starts_before, midnight(2024, 7, 4));

        assert_eq!(resolve(DateRangeMode::Custom, None, now()).unwrap(), DateBounds::default());
    }

    #[test]
    fn test_custom_dates_ignored_for_named_modes() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let b = resolve(DateRangeMode::Today, Some((start, start)), now()).unwrap();
        assert_eq!(b.ends_after, midnight(2024, 6, 12));
    }

    #[test]
    fn test_bounds_past_last_date() {
        let last = NaiveDate::MAX;
        assert_eq!(resolve(DateRangeMode::Custom, Some((last, last)), now()), None);

        let last_day = last.and_time(NaiveTime::MIN).and_utc();
        assert_eq!(resolve(DateRangeMode::Tomorrow, None, last_day), None);
        assert!(resolve(DateRangeMode::Upcoming, None, last_day).is_some());
    }
}
