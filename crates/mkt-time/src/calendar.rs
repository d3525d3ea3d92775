//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar knows which dates are business days.  The business-day walker
//! is written against this trait, so it composes weekend exclusion with
//! whichever holiday source the caller supplies.

use crate::date::Date;
use mkt_core::errors::Result;

/// A market calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US Equities"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Saturday and Sunday for every calendar in this crate.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// First business day on or after `date`.
    ///
    /// # Errors
    /// [`Error::Date`](mkt_core::Error::Date) if the search runs past
    /// [`Date::MAX`].
    fn next_business_day(&self, date: Date) -> Result<Date> {
        let mut date = date;
        while self.is_holiday(date) {
            date = date.add_days(1)?;
        }
        Ok(date)
    }

    /// Last business day on or before `date`.
    ///
    /// # Errors
    /// [`Error::Date`](mkt_core::Error::Date) if the search runs past
    /// [`Date::MIN`].
    fn previous_business_day(&self, date: Date) -> Result<Date> {
        let mut date = date;
        while self.is_holiday(date) {
            date = date.add_days(-1)?;
        }
        Ok(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
///
/// The business-day walker falls back to this when no holiday list is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
