//! Web layer for the itinerary service.
//!
//! Provides JSON endpoints for reading and replacing the itinerary,
//! extracting legs from pasted confirmation text, and CSV import/export.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
