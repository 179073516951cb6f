//! Travel itinerary analyzer service.
//!
//! Parses pasted booking-confirmation text into itinerary legs and flags
//! tight same-day connections between adjacent legs. The itinerary is kept
//! in a JSON file store and served over a small JSON API.

pub mod analyze;
pub mod domain;
pub mod export;
pub mod extract;
pub mod store;
pub mod web;
