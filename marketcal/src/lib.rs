//! # marketcal
//!
//! U.S. equities market holidays, session status, and business-day
//! sequences.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `mkt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! marketcal = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use marketcal::{
//!     business_days, holidays_for_year, is_market_open, resolve_market_status, Date, Direction,
//!     MarketStatus,
//! };
//!
//! let july4 = Date::from_ymd(2024, 7, 4).unwrap();
//! assert!(!is_market_open(july4));
//!
//! let holidays = holidays_for_year(2024);
//! assert_eq!(holidays.len(), 10);
//!
//! let start = Date::from_ymd(2024, 7, 3).unwrap();
//! let days = business_days(start, 3, Direction::Forward, Some(&holidays)).unwrap();
//! assert_eq!(days.last().unwrap().to_string(), "2024-07-08");
//!
//! let t = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap().and_hms_opt(9, 29, 0).unwrap();
//! assert_eq!(resolve_market_status("America/New_York", t).unwrap(), MarketStatus::NotOpenYet);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use mkt_core as core;

/// Dates, holiday rules, calendars, and business-day walking.
pub use mkt_time as time;

/// Session clock and market status.
pub use mkt_session as session;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use mkt_core::{Error, Result};
pub use mkt_session::{
    market_close_instant, market_open_instant, resolve_market_status, resolve_market_status_at,
    MarketSession, MarketStatus, MarketStatusResolver,
};
pub use mkt_time::{
    business_day_range, business_days, holidays_for_year, is_market_open, us_equities_calendar,
    Calendar, Date, Direction, HolidayCalendar, HolidayCatalogue, HolidayRule, MarketHoliday,
    MarketHolidayList, Month, Weekday,
};
