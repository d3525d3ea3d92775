//! Holiday catalogue and the per-year holiday calendar.
//!
//! A [`HolidayCatalogue`] is the fixed, ordered list of rules; it is built
//! once and never mutated afterwards.  A [`HolidayCalendar`] evaluates the
//! catalogue for a requested year.  Results are not cached: evaluation is
//! cheap, pure, and yields the same list every time.

use std::sync::OnceLock;

use crate::calendar::Calendar;
use crate::calendars::united_states::us_equities_catalogue;
use crate::date::Date;
use crate::holiday::{HolidayRule, MarketHolidayList};
use mkt_core::Year;

/// An ordered, immutable set of holiday rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayCatalogue {
    name: String,
    rules: Vec<HolidayRule>,
}

impl HolidayCatalogue {
    /// Create a catalogue from rules, kept in the given order.
    pub fn new(name: impl Into<String>, rules: Vec<HolidayRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// The canonical U.S. equities catalogue.
    pub fn us_equities() -> Self {
        us_equities_catalogue()
    }

    /// Return a copy of this catalogue with `rule` appended.
    pub fn with_rule(mut self, rule: HolidayRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Catalogue name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in catalogue order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}

/// Evaluates a [`HolidayCatalogue`] for arbitrary years.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    catalogue: HolidayCatalogue,
}

impl HolidayCalendar {
    /// Create a calendar over `catalogue`.
    pub fn new(catalogue: HolidayCatalogue) -> Self {
        Self { catalogue }
    }

    /// Calendar over the canonical U.S. equities catalogue.
    pub fn us_equities() -> Self {
        Self::new(HolidayCatalogue::us_equities())
    }

    /// The catalogue this calendar evaluates.
    pub fn catalogue(&self) -> &HolidayCatalogue {
        &self.catalogue
    }

    /// Observed holidays of `year`, in catalogue order.
    ///
    /// Rules that are not observed in `year` are skipped.
    pub fn holidays_for_year(&self, year: Year) -> MarketHolidayList {
        let list: MarketHolidayList = self
            .catalogue
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(year))
            .collect();
        tracing::debug!(
            calendar = %self.catalogue.name,
            year,
            holidays = list.len(),
            "computed holiday list"
        );
        list
    }

    /// Return `true` if the market trades on `date`: a weekday that is not
    /// one of the holidays of `date`'s year.
    pub fn is_market_open(&self, date: Date) -> bool {
        !date.weekday().is_weekend() && !self.holidays_for_year(date.year()).contains_date(date)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.catalogue.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.is_market_open(date)
    }
}

/// The process-wide canonical U.S. equities calendar.
///
/// Built on first use and read-only afterwards.
pub fn us_equities_calendar() -> &'static HolidayCalendar {
    static INSTANCE: OnceLock<HolidayCalendar> = OnceLock::new();
    INSTANCE.get_or_init(HolidayCalendar::us_equities)
}

/// Observed U.S. equities market holidays of `year`.
pub fn holidays_for_year(year: Year) -> MarketHolidayList {
    us_equities_calendar().holidays_for_year(year)
}

/// Return `true` if the U.S. equities market trades on `date`.
pub fn is_market_open(date: Date) -> bool {
    us_equities_calendar().is_market_open(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn single_rule_catalogue() {
        let cat = HolidayCatalogue::new(
            "Test",
            vec![HolidayRule::month_day("Bastille Day", Month::July, 14).unwrap()],
        );
        let cal = HolidayCalendar::new(cat);
        let list = cal.holidays_for_year(2024);
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].date, date(2024, 7, 15)); // Sunday → Monday
        assert!(!cal.is_market_open(date(2024, 7, 15)));
        assert!(cal.is_market_open(date(2024, 7, 4)));
    }

    #[test]
    fn with_rule_appends_in_order() {
        let cat = HolidayCatalogue::new("Test", Vec::new())
            .with_rule(HolidayRule::new_years("A"))
            .with_rule(HolidayRule::good_friday("B"));
        let names: Vec<_> = HolidayCalendar::new(cat)
            .holidays_for_year(2024)
            .iter()
            .map(|h| h.name.clone())
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn canonical_2024() {
        let list = holidays_for_year(2024);
        assert_eq!(
            list.dates(),
            vec![
                date(2024, 1, 1),
                date(2024, 1, 15),
                date(2024, 2, 19),
                date(2024, 3, 29),
                date(2024, 5, 27),
                date(2024, 6, 19),
                date(2024, 7, 4),
                date(2024, 9, 2),
                date(2024, 11, 28),
                date(2024, 12, 25),
            ]
        );
    }

    #[test]
    fn calendar_trait_matches_is_market_open() {
        let cal = us_equities_calendar();
        assert_eq!(cal.name(), "US Equities");
        assert!(cal.is_holiday(date(2025, 1, 9)));
        assert!(!cal.is_business_day(date(2024, 7, 6)));
        assert_eq!(cal.next_business_day(date(2024, 7, 4)).unwrap(), date(2024, 7, 5));
    }
}
