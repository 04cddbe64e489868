/// Pure date utility functions
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

use crate::constants::DATE_FORMAT;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as DD.MM.YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Build the anniversary of `date` in `year`.
///
/// 29 February falls back to 28 February in non-leap years.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}

/// First anniversary of `date` on or after `today`
pub fn next_anniversary(date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(date, today.year())?;
    if this_year < today {
        anniversary_in_year(date, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a weekend date forward to the following Monday
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}
