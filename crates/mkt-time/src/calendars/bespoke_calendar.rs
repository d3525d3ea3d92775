//! Bespoke calendar — weekends plus an explicit set of holiday dates.
//!
//! The business-day walker turns a caller-supplied [`MarketHolidayList`]
//! into one of these.  Holidays are matched by exact date; names are ignored.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday::MarketHolidayList;
use std::collections::HashSet;

/// A calendar whose holidays are supplied at run time.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl BespokeCalendar {
    /// Create a calendar closed on weekends and on every date of `holidays`.
    pub fn from_holidays(name: impl Into<String>, holidays: &MarketHolidayList) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.iter().map(|h| h.date).collect(),
        }
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
