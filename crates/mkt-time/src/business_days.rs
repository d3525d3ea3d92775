//! Business-day sequences anchored at a start date.
//!
//! A walk collects `count` dates that are neither weekend days nor holidays,
//! moving one calendar day at a time in the requested direction.  The start
//! date is included exactly when it qualifies itself.

use crate::calendar::{Calendar, WeekendsOnly};
use crate::calendars::bespoke_calendar::BespokeCalendar;
use crate::date::Date;
use crate::holiday::MarketHolidayList;
use mkt_core::errors::{Error, Result};
use mkt_core::ensure;

/// Direction of a business-day walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl Direction {
    /// Signed one-day step.
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Collect `count` business days of `calendar`, starting at `start`.
///
/// The result is strictly monotonic in `direction`.  Errors only if the walk
/// would leave the representable date range.
pub fn walk_business_days<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    count: usize,
    direction: Direction,
) -> Result<Vec<Date>> {
    let mut days = Vec::with_capacity(count);
    let mut cursor = start;
    while days.len() < count {
        cursor = match direction {
            Direction::Forward => calendar.next_business_day(cursor)?,
            Direction::Backward => calendar.previous_business_day(cursor)?,
        };
        days.push(cursor);
        if days.len() < count {
            cursor = cursor.add_days(direction.step())?;
        }
    }
    Ok(days)
}

/// Generate `count` business days from `start` in `direction`, skipping
/// weekends and, when given, the dates of `holidays`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `count` is negative.
pub fn business_days(
    start: Date,
    count: i32,
    direction: Direction,
    holidays: Option<&MarketHolidayList>,
) -> Result<Vec<Date>> {
    ensure!(count >= 0, "count must be non-negative, got {count}");
    tracing::debug!(
        %start,
        count,
        ?direction,
        with_holidays = holidays.is_some(),
        "walking business days"
    );
    let count = count as usize;
    match holidays {
        Some(list) => {
            let calendar = BespokeCalendar::from_holidays("Supplied holidays", list);
            walk_business_days(&calendar, start, count, direction)
        }
        None => walk_business_days(&WeekendsOnly, start, count, direction),
    }
}

/// First and last dates of [`business_days`] with the same arguments.
///
/// # Errors
/// [`Error::InvalidArgument`] if `count` is negative, [`Error::EmptyRange`]
/// if `count` is zero.
pub fn business_day_range(
    start: Date,
    count: i32,
    direction: Direction,
    holidays: Option<&MarketHolidayList>,
) -> Result<(Date, Date)> {
    let days = business_days(start, count, direction, holidays)?;
    match (days.first(), days.last()) {
        (Some(&first), Some(&last)) => Ok((first, last)),
        _ => Err(Error::EmptyRange),
    }
}
