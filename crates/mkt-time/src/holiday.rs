//! Holiday rules and their evaluated form.
//!
//! A [`HolidayRule`] pairs a name with a [`RuleKind`], the closed set of
//! ways a market holiday's date is generated.  Evaluating a rule for a year
//! yields at most one [`MarketHoliday`]; a [`MarketHolidayList`] collects
//! the observed holidays of one year in catalogue order.

use crate::date::{days_in_month, Date};
use crate::easter::easter_sunday;
use crate::month::Month;
use crate::observance::WeekendPolicy;
use crate::weekday::Weekday;
use mkt_core::errors::Result;
use mkt_core::{ensure, Year};

/// Good Friday is two days before Easter Sunday.
pub const GOOD_FRIDAY_OFFSET: i64 = -2;

// ── Rule shapes ───────────────────────────────────────────────────────────────

/// A yearless (month, day-of-month) pair, e.g. July 4.
///
/// The day must exist in every year, so February 29 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MonthDayRepr"))]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Create a month/day pair.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        // 2001 is a common year: Feb 29 is rejected here on purpose.
        let max = days_in_month(2001, month.number());
        ensure!(
            (1..=max).contains(&day),
            "day {day} does not exist in {month} of every year"
        );
        Ok(Self { month, day })
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The nominal (unadjusted) date in `year`.
    pub fn in_year(&self, year: Year) -> Date {
        Date::from_year_month_day(year, self.month, self.day)
            .expect("MonthDay is validated to exist in every year")
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MonthDayRepr {
    month: Month,
    day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<MonthDayRepr> for MonthDay {
    type Error = mkt_core::Error;
    fn try_from(repr: MonthDayRepr) -> Result<Self> {
        MonthDay::new(repr.month, repr.day)
    }
}

/// The k-th occurrence of a weekday in a month, e.g. the 3rd Monday of January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NthWeekday {
    /// Month of the occurrence.
    pub month: Month,
    /// Weekday being counted.
    pub weekday: Weekday,
    /// Ordinal, 1..=5.
    pub ordinal: u8,
}

impl NthWeekday {
    /// Create an nth-weekday rule.  `ordinal` must be in 1..=5.
    pub fn new(month: Month, weekday: Weekday, ordinal: u8) -> Result<Self> {
        ensure!(
            (1..=5).contains(&ordinal),
            "weekday ordinal must be in 1..=5, got {ordinal}"
        );
        Ok(Self {
            month,
            weekday,
            ordinal,
        })
    }
}

/// The last occurrence of a weekday in a month, e.g. the last Monday of May.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastWeekday {
    /// Month of the occurrence.
    pub month: Month,
    /// Weekday being searched for.
    pub weekday: Weekday,
}

/// The closed set of date-generation rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    /// Fixed month/day, observed on the nearest weekday when it falls on a
    /// weekend (Saturday → Friday, Sunday → Monday).
    MonthDay(MonthDay),
    /// k-th weekday of a month.  Never needs weekend adjustment.
    NthWeekday(NthWeekday),
    /// Last weekday of a month.  Never needs weekend adjustment.
    LastWeekday(LastWeekday),
    /// Good Friday: Easter Sunday plus [`GOOD_FRIDAY_OFFSET`] days.
    EasterRelative,
    /// January 1, with a Saturday occurrence not observed at all.
    NewYears,
    /// A month/day rule that only applies from `first_year` onward.
    EarliestYearGated {
        /// The underlying month/day.
        rule: MonthDay,
        /// First year in which the holiday is observed.
        first_year: Year,
    },
    /// A single historical closing, observed only in its own year.
    OneTime(Date),
}

impl RuleKind {
    /// Evaluate against `year`, producing the observed date if any.
    pub fn observed_date(&self, year: Year) -> Option<Date> {
        match self {
            RuleKind::MonthDay(md) => WeekendPolicy::NearestWeekday.observe(md.in_year(year)),
            RuleKind::NthWeekday(nth) => {
                Date::nth_weekday(nth.ordinal, nth.weekday, year, nth.month)
            }
            RuleKind::LastWeekday(last) => {
                Some(Date::last_weekday(last.weekday, year, last.month))
            }
            RuleKind::EasterRelative => Some(easter_sunday(year) + GOOD_FRIDAY_OFFSET),
            RuleKind::NewYears => {
                let jan1 = Date::from_year_month_day(year, Month::January, 1)
                    .expect("January 1 exists in every year");
                WeekendPolicy::SundayOnly.observe(jan1)
            }
            RuleKind::EarliestYearGated { rule, first_year } => {
                if year < *first_year {
                    None
                } else {
                    WeekendPolicy::NearestWeekday.observe(rule.in_year(year))
                }
            }
            RuleKind::OneTime(date) => (date.year() == year).then_some(*date),
        }
    }

    /// Whether every date this rule can produce is Monday–Friday by
    /// construction, before any weekend policy is applied.
    pub fn is_weekday_anchored(&self) -> bool {
        match self {
            RuleKind::NthWeekday(nth) => !nth.weekday.is_weekend(),
            RuleKind::LastWeekday(last) => !last.weekday.is_weekend(),
            RuleKind::EasterRelative => true,
            RuleKind::MonthDay(_)
            | RuleKind::NewYears
            | RuleKind::EarliestYearGated { .. }
            | RuleKind::OneTime(_) => false,
        }
    }
}

// ── Named rule ────────────────────────────────────────────────────────────────

/// A named holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRule {
    name: String,
    kind: RuleKind,
}

impl HolidayRule {
    /// Create a rule from its parts.
    pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Fixed month/day with the nearest-weekday policy.
    pub fn month_day(name: impl Into<String>, month: Month, day: u8) -> Result<Self> {
        Ok(Self::new(name, RuleKind::MonthDay(MonthDay::new(month, day)?)))
    }

    /// k-th `weekday` of `month`.
    pub fn nth_weekday(
        name: impl Into<String>,
        month: Month,
        weekday: Weekday,
        ordinal: u8,
    ) -> Result<Self> {
        Ok(Self::new(
            name,
            RuleKind::NthWeekday(NthWeekday::new(month, weekday, ordinal)?),
        ))
    }

    /// Last `weekday` of `month`.
    pub fn last_weekday(name: impl Into<String>, month: Month, weekday: Weekday) -> Self {
        Self::new(name, RuleKind::LastWeekday(LastWeekday { month, weekday }))
    }

    /// Good Friday.
    pub fn good_friday(name: impl Into<String>) -> Self {
        Self::new(name, RuleKind::EasterRelative)
    }

    /// New Year's Day.
    pub fn new_years(name: impl Into<String>) -> Self {
        Self::new(name, RuleKind::NewYears)
    }

    /// Fixed month/day observed from `first_year` onward.
    pub fn since_year(
        name: impl Into<String>,
        month: Month,
        day: u8,
        first_year: Year,
    ) -> Result<Self> {
        Ok(Self::new(
            name,
            RuleKind::EarliestYearGated {
                rule: MonthDay::new(month, day)?,
                first_year,
            },
        ))
    }

    /// A single-occurrence closing.
    pub fn one_time(name: impl Into<String>, date: Date) -> Self {
        Self::new(name, RuleKind::OneTime(date))
    }

    /// The holiday's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The date-generation rule.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Evaluate this rule for `year`.
    pub fn evaluate(&self, year: Year) -> Option<MarketHoliday> {
        let observed = self.kind.observed_date(year);
        tracing::trace!(rule = %self.name, year, ?observed, "evaluated holiday rule");
        observed.map(|date| MarketHoliday {
            name: self.name.clone(),
            date,
        })
    }
}

// ── Evaluated holidays ────────────────────────────────────────────────────────

/// A holiday name paired with the date the market is closed for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketHoliday {
    /// Holiday name.
    pub name: String,
    /// Observed date.
    pub date: Date,
}

/// The observed holidays of one year, in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MarketHolidayList(Vec<MarketHoliday>);

impl MarketHolidayList {
    /// Create a list from already evaluated holidays.
    pub fn new(holidays: Vec<MarketHoliday>) -> Self {
        Self(holidays)
    }

    /// Build a list of unnamed closings from bare dates.
    pub fn from_dates(dates: impl IntoIterator<Item = Date>) -> Self {
        dates
            .into_iter()
            .map(|date| MarketHoliday {
                name: String::new(),
                date,
            })
            .collect()
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, MarketHoliday> {
        self.0.iter()
    }

    /// Return `true` if any holiday is observed on `date`.
    pub fn contains_date(&self, date: Date) -> bool {
        self.0.iter().any(|h| h.date == date)
    }

    /// Look up a holiday by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&MarketHoliday> {
        self.0.iter().find(|h| h.name == name)
    }

    /// The observed dates, in catalogue order.
    pub fn dates(&self) -> Vec<Date> {
        self.0.iter().map(|h| h.date).collect()
    }

    /// Borrow the underlying slice.
    pub fn as_slice(&self) -> &[MarketHoliday] {
        &self.0
    }
}

impl FromIterator<MarketHoliday> for MarketHolidayList {
    fn from_iter<I: IntoIterator<Item = MarketHoliday>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MarketHolidayList {
    type Item = MarketHoliday;
    type IntoIter = std::vec::IntoIter<MarketHoliday>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MarketHolidayList {
    type Item = &'a MarketHoliday;
    type IntoIter = std::slice::Iter<'a, MarketHoliday>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
