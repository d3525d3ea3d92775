//! Exchange session hours.
//!
//! The regular U.S. equities session runs 09:30–16:00 America/New_York on
//! every trading day.  Half-days and extended hours are not modelled.

use chrono::{DateTime, NaiveTime};
use chrono_tz::Tz;
use mkt_core::ensure;
use mkt_core::errors::Result;
use mkt_time::Date;

use crate::convert::{localize, to_naive_date};

/// The exchange's home timezone.
pub const EXCHANGE_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Opening and closing wall-clock times in a fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketSession {
    timezone: Tz,
    open: NaiveTime,
    close: NaiveTime,
}

impl MarketSession {
    /// Create a session.  `open` must be strictly before `close`.
    pub fn new(timezone: Tz, open: NaiveTime, close: NaiveTime) -> Result<Self> {
        ensure!(open < close, "session open {open} must precede close {close}");
        Ok(Self {
            timezone,
            open,
            close,
        })
    }

    /// The regular U.S. equities session: 09:30–16:00 America/New_York.
    pub fn us_equities() -> Self {
        Self {
            timezone: EXCHANGE_TIMEZONE,
            open: NaiveTime::from_hms_opt(9, 30, 0).expect("09:30 is a valid time"),
            close: NaiveTime::from_hms_opt(16, 0, 0).expect("16:00 is a valid time"),
        }
    }

    /// Timezone the session hours are expressed in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Wall-clock opening time.
    pub fn open_time(&self) -> NaiveTime {
        self.open
    }

    /// Wall-clock closing time.
    pub fn close_time(&self) -> NaiveTime {
        self.close
    }

    /// The opening instant on `date`.
    pub fn open_instant(&self, date: Date) -> Result<DateTime<Tz>> {
        self.instant_at(date, self.open)
    }

    /// The closing instant on `date`.
    pub fn close_instant(&self, date: Date) -> Result<DateTime<Tz>> {
        self.instant_at(date, self.close)
    }

    fn instant_at(&self, date: Date, time: NaiveTime) -> Result<DateTime<Tz>> {
        let local = to_naive_date(date)?.and_time(time);
        localize(&self.timezone, local)
    }
}

impl Default for MarketSession {
    fn default() -> Self {
        Self::us_equities()
    }
}

/// 09:30 America/New_York on `date`.
pub fn market_open_instant(date: Date) -> Result<DateTime<Tz>> {
    MarketSession::us_equities().open_instant(date)
}

/// 16:00 America/New_York on `date`.
pub fn market_close_instant(date: Date) -> Result<DateTime<Tz>> {
    MarketSession::us_equities().close_instant(date)
}
