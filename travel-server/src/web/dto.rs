//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Leg;

/// The itinerary with its current connection warnings.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    /// Ordered leg list
    pub legs: Vec<Leg>,

    /// Tight-connection warnings for the list as stored
    pub warnings: Vec<String>,
}

/// Request to replace the stored itinerary.
#[derive(Debug, Deserialize)]
pub struct SetItineraryRequest {
    /// The new ordered leg list
    pub legs: Vec<Leg>,
}

/// Request to extract a leg from pasted confirmation text.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Raw pasted confirmation text
    pub text: String,
}

/// Response after extracting and inserting a leg.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// The leg extracted from the text
    pub leg: Leg,

    /// The updated itinerary, newest leg first
    pub legs: Vec<Leg>,

    /// Warnings recomputed over the updated itinerary
    pub warnings: Vec<String>,
}

/// Warnings only, for polling.
#[derive(Debug, Serialize)]
pub struct WarningsResponse {
    pub warnings: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
