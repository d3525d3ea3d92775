//! Bridging between [`Date`] and chrono / chrono-tz.

use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use mkt_core::errors::{Error, Result};
use mkt_time::Date;

/// Convert to a chrono date.
///
/// # Errors
/// [`Error::Date`] if the year is outside chrono's supported range
/// (roughly ±262,000).
pub fn to_naive_date(date: Date) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(
        date.year(),
        date.month().number() as u32,
        date.day_of_month() as u32,
    )
    .ok_or_else(|| Error::Date(format!("{date} is outside the chrono date range")))
}

/// Convert from a chrono date.  Every chrono date is representable.
pub fn from_naive_date(date: NaiveDate) -> Date {
    Date::from_ymd(date.year(), date.month() as u8, date.day() as u8)
        .expect("chrono dates are valid Gregorian dates")
}

/// Look up an IANA timezone by name, e.g. `"America/Chicago"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone(name.to_string()))
}

/// Attach `tz` to a wall-clock time.
///
/// An ambiguous time (the repeated hour when clocks fall back) resolves to
/// the earlier instant.  A time skipped by a spring-forward gap is an error.
pub fn localize<Z>(tz: &Z, local: NaiveDateTime) -> Result<DateTime<Z>>
where
    Z: TimeZone + std::fmt::Debug,
{
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => Ok(t),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(Error::NonexistentLocalTime(format!(
            "{local} does not exist in {tz:?}"
        ))),
    }
}
