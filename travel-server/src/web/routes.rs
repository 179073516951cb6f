//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;

use crate::analyze::find_tight_connections_with;
use crate::domain::Leg;
use crate::export::{ExportError, legs_from_csv, legs_to_csv};
use crate::extract::extract_flight;
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/itinerary", get(get_itinerary).put(set_itinerary))
        .route("/api/itinerary/warnings", get(get_warnings))
        .route("/api/itinerary/extract", post(extract_leg))
        .route("/api/itinerary/export.csv", get(export_csv))
        .route("/api/itinerary/import", post(import_csv))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn warnings_for(state: &AppState, legs: &[Leg]) -> Vec<String> {
    find_tight_connections_with(legs, &state.config)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Current itinerary with its connection warnings.
async fn get_itinerary(State(state): State<AppState>) -> Json<ItineraryResponse> {
    let legs = state.store.legs().await;
    let warnings = warnings_for(&state, &legs);
    Json(ItineraryResponse { legs, warnings })
}

/// Replace the stored itinerary.
async fn set_itinerary(
    State(state): State<AppState>,
    Json(req): Json<SetItineraryRequest>,
) -> Result<Json<ItineraryResponse>, AppError> {
    state.store.set_legs(req.legs.clone()).await?;
    let warnings = warnings_for(&state, &req.legs);
    Ok(Json(ItineraryResponse {
        legs: req.legs,
        warnings,
    }))
}

/// Connection warnings only.
async fn get_warnings(State(state): State<AppState>) -> Json<WarningsResponse> {
    let legs = state.store.legs().await;
    Json(WarningsResponse {
        warnings: warnings_for(&state, &legs),
    })
}

/// Extract a flight leg from pasted confirmation text and insert it at the
/// front of the itinerary.
async fn extract_leg(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let today = Local::now().date_naive();
    let leg = extract_flight(&req.text, today);

    let legs = state.store.prepend(leg.clone()).await?;
    let warnings = warnings_for(&state, &legs);

    tracing::info!(code = %leg.code, date = %leg.date, "extracted leg from pasted text");

    Ok(Json(ExtractResponse {
        leg,
        legs,
        warnings,
    }))
}

/// The stored itinerary as CSV.
async fn export_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    let legs = state.store.legs().await;
    let body = legs_to_csv(&legs).map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Replace the stored itinerary from a CSV body.
async fn import_csv(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ItineraryResponse>, AppError> {
    let legs = legs_from_csv(&body).map_err(|e| match e {
        ExportError::Io(e) => AppError::Internal {
            message: e.to_string(),
        },
        other => AppError::BadRequest {
            message: other.to_string(),
        },
    })?;

    state.store.set_legs(legs.clone()).await?;
    let warnings = warnings_for(&state, &legs);
    Ok(Json(ItineraryResponse { legs, warnings }))
}

/// Application-level error with HTTP status mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
