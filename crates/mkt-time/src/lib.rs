//! # mkt-time
//!
//! Dates, holiday rules, the U.S. equities market holiday calendar, and
//! business-day walking.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day sequences and ranges.
pub mod business_days;

/// Calendar trait and the weekend-only calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Gregorian Easter.
pub mod easter;

/// Holiday rules and evaluated holiday lists.
pub mod holiday;

/// Holiday catalogue and per-year holiday calendar.
pub mod holiday_calendar;

/// `Month` — month of the year.
pub mod month;

/// Weekend-adjustment policies.
pub mod observance;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_days::{business_day_range, business_days, walk_business_days, Direction};
pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::bespoke_calendar::BespokeCalendar;
pub use date::Date;
pub use easter::easter_sunday;
pub use holiday::{
    HolidayRule, LastWeekday, MarketHoliday, MarketHolidayList, MonthDay, NthWeekday, RuleKind,
};
pub use holiday_calendar::{
    holidays_for_year, is_market_open, us_equities_calendar, HolidayCalendar, HolidayCatalogue,
};
pub use month::Month;
pub use observance::{Observance, WeekendPolicy};
pub use weekday::Weekday;
