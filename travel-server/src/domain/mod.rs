//! Domain types for the travel itinerary analyzer.
//!
//! This module contains the core model types for itinerary data. Validated
//! types (`ClockTime`) enforce their invariants at construction time; the
//! `Leg` location fields are deliberately advisory free text.

mod error;
mod leg;
mod time;

pub use error::DomainError;
pub use leg::{Leg, LegKind};
pub use time::{ClockTime, TimeError};
