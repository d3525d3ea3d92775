//! Weekend-adjustment policies for holidays anchored to a month/day.
//!
//! A holiday defined as "the 3rd Monday of January" can never land on a
//! weekend, but one defined as "July 4" can.  When it does, the exchange
//! closes on a nearby weekday instead, or not at all.  Which of those
//! happens is the [`WeekendPolicy`] of the rule.

use crate::date::Date;
use crate::weekday::Weekday;

/// The outcome of applying a [`WeekendPolicy`] to a nominal holiday date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observance {
    /// Observed on the nominal date.
    Unchanged,
    /// Observed one day later (Sunday → Monday).
    ShiftedForward,
    /// Observed one day earlier (Saturday → Friday).
    ShiftedBack,
    /// The market takes no day off for this occurrence.
    NotObserved,
}

impl Observance {
    /// Map a nominal date to its observed date.
    pub fn apply(self, nominal: Date) -> Option<Date> {
        match self {
            Observance::Unchanged => Some(nominal),
            Observance::ShiftedForward => Some(nominal + 1),
            Observance::ShiftedBack => Some(nominal - 1),
            Observance::NotObserved => None,
        }
    }
}

/// How a month/day holiday that falls on a weekend is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekendPolicy {
    /// Saturday → preceding Friday, Sunday → following Monday.
    #[default]
    NearestWeekday,
    /// Saturday → not observed, Sunday → following Monday.
    ///
    /// New Year's Day uses this: a Saturday January 1 would otherwise close
    /// the market on December 31 of the previous year.
    SundayOnly,
}

impl WeekendPolicy {
    /// Classify a nominal holiday falling on `weekday`.
    pub fn classify(self, weekday: Weekday) -> Observance {
        match (self, weekday) {
            (WeekendPolicy::NearestWeekday, Weekday::Saturday) => Observance::ShiftedBack,
            (WeekendPolicy::SundayOnly, Weekday::Saturday) => Observance::NotObserved,
            (_, Weekday::Sunday) => Observance::ShiftedForward,
            _ => Observance::Unchanged,
        }
    }

    /// Return the observed date for `nominal`, or `None` if the occurrence is
    /// not observed.
    pub fn observe(self, nominal: Date) -> Option<Date> {
        self.classify(nominal.weekday()).apply(nominal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn nearest_weekday_shifts_both_ways() {
        let p = WeekendPolicy::NearestWeekday;
        // 2026-07-04 is a Saturday
        assert_eq!(p.observe(date(2026, 7, 4)), Some(date(2026, 7, 3)));
        // 2021-07-04 is a Sunday
        assert_eq!(p.observe(date(2021, 7, 4)), Some(date(2021, 7, 5)));
        // 2024-07-04 is a Thursday
        assert_eq!(p.observe(date(2024, 7, 4)), Some(date(2024, 7, 4)));
    }

    #[test]
    fn sunday_only_drops_saturday() {
        let p = WeekendPolicy::SundayOnly;
        assert_eq!(p.classify(Weekday::Saturday), Observance::NotObserved);
        assert_eq!(p.observe(date(2022, 1, 1)), None);
        // 2023-01-01 is a Sunday
        assert_eq!(p.observe(date(2023, 1, 1)), Some(date(2023, 1, 2)));
        assert_eq!(p.observe(date(2025, 1, 1)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn weekdays_are_unchanged() {
        for wd in 1..=5 {
            let wd = Weekday::from_ordinal(wd).unwrap();
            assert_eq!(WeekendPolicy::NearestWeekday.classify(wd), Observance::Unchanged);
            assert_eq!(WeekendPolicy::SundayOnly.classify(wd), Observance::Unchanged);
        }
    }
}
