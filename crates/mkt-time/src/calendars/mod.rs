//! Concrete calendar implementations.

/// Calendar built from an explicit set of holiday dates.
pub mod bespoke_calendar;

/// The U.S. equities market holiday catalogue.
pub mod united_states;
