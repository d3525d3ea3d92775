//! Gregorian Easter computation.
//!
//! Good Friday is the only movable feast the U.S. equities market observes;
//! it is derived from [`easter_sunday`] by the holiday rules.

use crate::date::Date;
use mkt_core::Year;

/// Compute Easter Sunday of `year` in the Gregorian calendar.
///
/// Uses the Anonymous Gregorian (Meeus/Jones/Butcher) algorithm.  All
/// divisions are Euclidean, which keeps every intermediate in range for
/// negative years too, so the result is always a March 22 – April 25 date.
pub fn easter_sunday(year: Year) -> Date {
    let (month, day) = easter_month_day(year as i64);
    Date::from_ymd(year, month as u8, day as u8)
        .expect("Easter always falls between March 22 and April 25")
}

fn easter_month_day(y: i64) -> (i64, i64) {
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    (n / 31, n % 31 + 1)
}
