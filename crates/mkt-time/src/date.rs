//! `Date` type.
//!
//! Dates are stored as a serial number of days since the civil epoch
//! **January 1, 1970** (serial 0).  The calendar is proleptic Gregorian and
//! every `i32` year is representable, so holiday rules evaluated for years
//! far outside any trading history still produce structurally valid dates.
//!
//! # Serial number convention
//! * Serial 0 = 1970-01-01 (a Thursday).
//! * Negative serials are dates before the epoch.
//! * The valid range is January 1 of `i32::MIN` to December 31 of `i32::MAX`.

use crate::month::Month;
use crate::weekday::Weekday;
use mkt_core::errors::{Error, Result};
use mkt_core::Year;

/// A proleptic-Gregorian calendar date represented as a day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i64);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The civil epoch, 1970-01-01.
    pub const EPOCH: Date = Date(0);

    /// Minimum representable date: January 1 of year `i32::MIN`.
    pub const MIN: Date = Date(days_from_civil(i32::MIN as i64, 1, 1));

    /// Maximum representable date: December 31 of year `i32::MAX`.
    pub const MAX: Date = Date(days_from_civil(i32::MAX as i64, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i64) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} outside the representable date range"
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year as i64, month as i64, day as i64)))
    }

    /// Create a date from a typed month.  Only the day can be invalid.
    pub fn from_year_month_day(year: Year, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i64 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        civil_from_days(self.0).0 as Year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = civil_from_days(self.0).1 as u8;
        Month::from_number(m).expect("civil_from_days yields a month in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        civil_from_days(self.0).2 as u8
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan1 = days_from_civil(civil_from_days(self.0).0, 1, 1);
        (self.0 - jan1 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 is a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::Date(format!(
                "date arithmetic: {self} + {n} days overflows"
            ))),
        }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = civil_from_days(self.0);
        let last = days_in_month(y as Year, m as u8);
        Date(days_from_civil(y, m, last as i64))
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(3, Weekday::Monday, 2024, Month::January)`
    /// returns the third Monday of January 2024 (2024-01-15).
    ///
    /// Returns `None` if `n` is zero or the month has fewer than `n` such
    /// weekdays (a fifth Monday does not exist in every month).
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: Month) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let first = Date(days_from_civil(year as i64, month.number() as i64, 1));
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        // Days to advance from the 1st to reach the first occurrence
        let skip = (target_wd as i64 - first_wd as i64).rem_euclid(7);
        let day = 1 + skip + 7 * (n as i64 - 1);
        if day > days_in_month(year, month.number()) as i64 {
            return None;
        }
        Some(Date(first.0 + day - 1))
    }

    /// Return the last occurrence of `weekday` in `month` of `year`.
    pub fn last_weekday(weekday: Weekday, year: Year, month: Month) -> Self {
        let last = days_in_month(year, month.number()) as i64;
        let end = Date(days_from_civil(year as i64, month.number() as i64, last));
        let back = (end.weekday().ordinal() as i64 - weekday.ordinal() as i64).rem_euclid(7);
        Date(end.0 - back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i64> for Date {
    fn add_assign(&mut self, rhs: i64) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i64> for Date {
    fn sub_assign(&mut self, rhs: i64) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.  A leading `-` marks a negative year;
    /// every other component is plain ASCII digits.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Date(format!("'{s}' is not a YYYY-MM-DD date"));
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let mut parts = s.rsplitn(3, '-');
        let day = parts.next().ok_or_else(bad)?;
        let month = parts.next().ok_or_else(bad)?;
        let year = parts.next().ok_or_else(bad)?;
        let unsigned_year = year.strip_prefix('-').unwrap_or(year);
        if !(digits(unsigned_year) && digits(month) && digits(day)) {
            return Err(bad());
        }
        let year: Year = year.parse().map_err(|_| bad())?;
        let month: u8 = month.parse().map_err(|_| bad())?;
        let day: u8 = day.parse().map_err(|_| bad())?;
        Date::from_ymd(year, month, day)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a day serial.
///
/// Howard Hinnant's `days_from_civil`, shifted so that the year starts in
/// March and leap days fall at the end of the shifted year.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Decompose a day serial into (year, month, day).
const fn civil_from_days(serial: i64) -> (i64, i64, i64) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1970, 1, 1).serial(), 0);
        assert_eq!(date(1969, 12, 31).serial(), -1);
        assert_eq!(date(2000, 3, 1).serial(), 11_017);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2024, 7, 4),
            (-44, 3, 15),
            (275_760, 9, 13),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month().number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_extreme_years() {
        let lo = date(i32::MIN, 1, 1);
        let hi = date(i32::MAX, 12, 31);
        assert_eq!(lo, Date::MIN);
        assert_eq!(hi, Date::MAX);
        assert_eq!(hi.year(), i32::MAX);
        assert!(hi.add_days(1).is_err());
        assert!(lo.add_days(-1).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2024, 7, 4).weekday(), Weekday::Thursday);
        assert_eq!(date(2022, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(2022, 6, 19).weekday(), Weekday::Sunday);
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2024, 1, 1).day_of_year(), 1);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
    }

    #[test]
    fn test_nth_weekday() {
        let mlk = Date::nth_weekday(3, Weekday::Monday, 2024, Month::January);
        assert_eq!(mlk, Some(date(2024, 1, 15)));
        let thanksgiving = Date::nth_weekday(4, Weekday::Thursday, 2026, Month::November);
        assert_eq!(thanksgiving, Some(date(2026, 11, 26)));
        // April 2024 has only four Mondays
        assert_eq!(Date::nth_weekday(5, Weekday::Monday, 2024, Month::April), None);
        assert_eq!(Date::nth_weekday(0, Weekday::Monday, 2024, Month::April), None);
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(
            Date::last_weekday(Weekday::Monday, 2024, Month::May),
            date(2024, 5, 27)
        );
        // May 31, 2021 is itself a Monday
        assert_eq!(
            Date::last_weekday(Weekday::Monday, 2021, Month::May),
            date(2021, 5, 31)
        );
    }

    #[test]
    fn test_arithmetic_crosses_boundaries() {
        assert_eq!(date(2023, 12, 31) + 1, date(2024, 1, 1));
        assert_eq!(date(2024, 3, 1) - 1, date(2024, 2, 29));
        assert_eq!(date(2024, 7, 8) - date(2024, 7, 3), 5);
        assert_eq!(date(2024, 2, 10).end_of_month(), date(2024, 2, 29));
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2024, 7, 3);
        assert_eq!(d.to_string(), "2024-07-03");
        assert_eq!(format!("{d:?}"), "Date(2024-07-03)");
        assert_eq!("2024-07-03".parse::<Date>().unwrap(), d);
        assert_eq!("-0044-03-15".parse::<Date>().unwrap(), date(-44, 3, 15));
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!("July 4".parse::<Date>().is_err());
    }

    #[test]
    fn test_parse_rejects_signed_components() {
        assert!("2024-+7-03".parse::<Date>().is_err());
        assert!("2024-07-+3".parse::<Date>().is_err());
        assert!("+2024-07-03".parse::<Date>().is_err());
        assert!("--2024-07-03".parse::<Date>().is_err());
        assert!("2024--07-03".parse::<Date>().is_err());
        assert!("2024-07-".parse::<Date>().is_err());
    }
}
