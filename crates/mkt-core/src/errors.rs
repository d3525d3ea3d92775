//! Error types for marketcal.
//!
//! Every caller-reachable failure (a negative count, an unknown timezone
//! name, a malformed date) maps to a variant of [`Error`].  Defects in a
//! holiday catalogue itself are not represented here: they abort with a
//! panic because no caller can remedy them.
//!
//! The [`ensure!`](crate::ensure) macro is the short form used for argument
//! checks.

use thiserror::Error;

/// The top-level error type used throughout marketcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument is out of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The timezone name is not present in the IANA database.
    #[error("unknown timezone: {0}")]
    UnknownTimeZone(String),

    /// Date-related error (bad components, arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),

    /// The local wall-clock time falls inside a daylight-saving gap.
    #[error("nonexistent local time: {0}")]
    NonexistentLocalTime(String),

    /// A range was requested over zero business days.
    #[error("empty range: no business days to take first/last of")]
    EmptyRange,
}

/// Shorthand `Result` type used throughout marketcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mkt_core::{ensure, errors::Error};
/// fn non_negative(n: i32) -> mkt_core::errors::Result<i32> {
///     ensure!(n >= 0, "count must be non-negative, got {n}");
///     Ok(n)
/// }
/// assert!(non_negative(3).is_ok());
/// assert!(matches!(non_negative(-1), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
