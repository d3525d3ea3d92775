//! Market status at a point in time.
//!
//! A caller's wall-clock time is first pinned to an absolute instant in its
//! own timezone, then viewed from the exchange.  The exchange-local date
//! decides whether the day trades at all; the instant is then placed relative
//! to that day's open and close.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use mkt_core::errors::Result;
use mkt_time::{us_equities_calendar, HolidayCalendar};
use tracing::debug;

use crate::convert::{from_naive_date, localize, parse_timezone};
use crate::session::MarketSession;

/// Where an instant falls relative to the exchange's trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketStatus {
    /// A trading day, before the open.
    NotOpenYet,
    /// A trading day, between open and close inclusive.
    OpenForTrading,
    /// A trading day, after the close.
    ClosedForDay,
    /// A weekend or a market holiday.
    NonTradingDay,
}

impl MarketStatus {
    /// `true` only for [`MarketStatus::OpenForTrading`].
    pub fn is_open(self) -> bool {
        matches!(self, MarketStatus::OpenForTrading)
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarketStatus::NotOpenYet => "US markets not open yet",
            MarketStatus::OpenForTrading => "US markets are open for trading",
            MarketStatus::ClosedForDay => "US markets closed for the day",
            MarketStatus::NonTradingDay => "Non-trading day",
        };
        f.write_str(s)
    }
}

/// Classifies instants against a holiday calendar and a session.
#[derive(Debug, Clone)]
pub struct MarketStatusResolver<'a> {
    calendar: &'a HolidayCalendar,
    session: MarketSession,
}

impl<'a> MarketStatusResolver<'a> {
    /// Resolve against `calendar` using `session` hours.
    pub fn new(calendar: &'a HolidayCalendar, session: MarketSession) -> Self {
        Self { calendar, session }
    }

    /// The session hours in use.
    pub fn session(&self) -> &MarketSession {
        &self.session
    }

    /// Status for a wall-clock time in the named IANA timezone.
    ///
    /// # Errors
    /// [`Error::UnknownTimeZone`](mkt_core::Error::UnknownTimeZone) for a bad
    /// name, [`Error::NonexistentLocalTime`](mkt_core::Error::NonexistentLocalTime)
    /// when `local` falls in that zone's spring-forward gap.
    pub fn resolve(&self, timezone: &str, local: NaiveDateTime) -> Result<MarketStatus> {
        let tz = parse_timezone(timezone)?;
        let instant = localize(&tz, local)?;
        self.resolve_at(instant)
    }

    /// Status at an absolute instant in any timezone.
    pub fn resolve_at<Z: TimeZone>(&self, instant: DateTime<Z>) -> Result<MarketStatus> {
        let instant = instant.with_timezone(&Utc);
        let exchange_local = instant.with_timezone(&self.session.timezone());
        let date = from_naive_date(exchange_local.date_naive());

        let status = if !self.calendar.is_market_open(date) {
            MarketStatus::NonTradingDay
        } else if instant < self.session.open_instant(date)? {
            MarketStatus::NotOpenYet
        } else if instant > self.session.close_instant(date)? {
            MarketStatus::ClosedForDay
        } else {
            MarketStatus::OpenForTrading
        };

        debug!(%instant, exchange_date = %date, %status, "resolved market status");
        Ok(status)
    }
}

impl MarketStatusResolver<'static> {
    /// The U.S. equities calendar with regular session hours.
    pub fn us_equities() -> Self {
        Self::new(us_equities_calendar(), MarketSession::us_equities())
    }
}

/// U.S. equities status for a wall-clock time in the named timezone.
///
/// ```
/// use chrono::NaiveDate;
/// use mkt_session::{resolve_market_status, MarketStatus};
///
/// let t = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// assert_eq!(
///     resolve_market_status("America/New_York", t).unwrap(),
///     MarketStatus::OpenForTrading
/// );
/// ```
pub fn resolve_market_status(timezone: &str, local: NaiveDateTime) -> Result<MarketStatus> {
    MarketStatusResolver::us_equities().resolve(timezone, local)
}

/// U.S. equities status at an absolute instant.
pub fn resolve_market_status_at<Z: TimeZone>(instant: DateTime<Z>) -> Result<MarketStatus> {
    MarketStatusResolver::us_equities().resolve_at(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use mkt_core::Error;
    use mkt_time::{HolidayCatalogue, HolidayRule, Month};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn display_strings() {
        assert_eq!(MarketStatus::NotOpenYet.to_string(), "US markets not open yet");
        assert_eq!(MarketStatus::ClosedForDay.to_string(), "US markets closed for the day");
        assert_eq!(MarketStatus::NonTradingDay.to_string(), "Non-trading day");
        assert!(MarketStatus::OpenForTrading.is_open());
        assert!(!MarketStatus::ClosedForDay.is_open());
    }

    #[test]
    fn boundaries_are_inclusive() {
        let r = MarketStatusResolver::us_equities();
        let ny = "America/New_York";
        assert_eq!(r.resolve(ny, at(2024, 7, 3, 9, 29)).unwrap(), MarketStatus::NotOpenYet);
        assert_eq!(r.resolve(ny, at(2024, 7, 3, 9, 30)).unwrap(), MarketStatus::OpenForTrading);
        assert_eq!(r.resolve(ny, at(2024, 7, 3, 16, 0)).unwrap(), MarketStatus::OpenForTrading);
        assert_eq!(r.resolve(ny, at(2024, 7, 3, 16, 1)).unwrap(), MarketStatus::ClosedForDay);
    }

    #[test]
    fn resolve_at_utc_instant() {
        let t = Utc.with_ymd_and_hms(2024, 7, 3, 13, 30, 0).unwrap();
        assert_eq!(resolve_market_status_at(t).unwrap(), MarketStatus::OpenForTrading);
        // 2024-07-05 02:00Z is still July 4 in New York.
        let t = Utc.with_ymd_and_hms(2024, 7, 5, 2, 0, 0).unwrap();
        assert_eq!(resolve_market_status_at(t).unwrap(), MarketStatus::NonTradingDay);
    }

    #[test]
    fn custom_calendar() {
        let boxing = HolidayRule::month_day("Boxing Day", Month::December, 26).unwrap();
        let cal = HolidayCalendar::new(HolidayCatalogue::new("Boxing only", vec![boxing]));
        let r = MarketStatusResolver::new(&cal, MarketSession::us_equities());
        // 2024-12-26 is a Thursday.
        assert_eq!(
            r.resolve("America/New_York", at(2024, 12, 26, 11, 0)).unwrap(),
            MarketStatus::NonTradingDay
        );
        // Christmas is not in this catalogue.
        assert_eq!(
            r.resolve("America/New_York", at(2024, 12, 25, 11, 0)).unwrap(),
            MarketStatus::OpenForTrading
        );
    }

    #[test]
    fn errors_propagate() {
        let r = MarketStatusResolver::us_equities();
        assert_eq!(
            r.resolve("Nowhere/Special", at(2024, 7, 3, 10, 0)),
            Err(Error::UnknownTimeZone("Nowhere/Special".into()))
        );
        assert!(matches!(
            r.resolve("America/New_York", at(2024, 3, 10, 2, 30)),
            Err(Error::NonexistentLocalTime(_))
        ));
    }
}
