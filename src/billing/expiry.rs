use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Advances the calendar month of `start` by `duration_months`, keeping the
/// day of month and time of day.
///
/// When the target month is shorter than the start day, the surplus days roll
/// into the following month (Jan 31 + 1 month is Mar 3, or Mar 2 in a leap
/// year). Callers must not assume the day of month survives.
pub fn calculate_expiry(start: DateTime<Utc>, duration_months: u32) -> DateTime<Utc> {
    let date = start.date_naive();
    let month_index = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(duration_months);
    let year = month_index.div_euclid(12) as i32;
    let month = month_index.rem_euclid(12) as u32 + 1;

    let target = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))));

    match target {
        Some(day) => day.and_time(start.time()).and_utc(),
        // Beyond chrono's representable range.
        None => start,
    }
}

/// Whole days from `now` until `expiry`, rounded up. Negative once lapsed.
pub fn days_until_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff = (expiry - now).num_milliseconds();
    let days = diff.div_euclid(MILLIS_PER_DAY);
    if diff.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}
