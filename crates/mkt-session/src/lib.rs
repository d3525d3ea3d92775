//! # mkt-session
//!
//! The exchange session clock and the market status resolver.
//!
//! Session hours are wall-clock times in the exchange's timezone
//! (America/New_York).  Every comparison against a caller's time is made on
//! absolute instants, so callers in any timezone, on either side of a
//! daylight-saving change, get the same answer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Conversions between marketcal dates and chrono types.
pub mod convert;

/// Exchange session hours and open/close instants.
pub mod session;

/// Market status classification.
pub mod status;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use convert::{from_naive_date, localize, parse_timezone, to_naive_date};
pub use session::{market_close_instant, market_open_instant, MarketSession, EXCHANGE_TIMEZONE};
pub use status::{
    resolve_market_status, resolve_market_status_at, MarketStatus, MarketStatusResolver,
};
