//! Handlers for daily-itinerary endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::itinerary::{
    DailyItineraryCreatedResponse, DailyItineraryRequest, DailyItineraryResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Assembles and persists one daily itinerary.
///
/// # Endpoint
///
/// `POST /api/itineraries/daily`
///
/// # Errors
///
/// - 400 if the payload fails validation or carries no blocks
/// - 404 if the member, full itinerary, or a referenced category is missing
/// - 409 if the day-number invariant is enabled and the day is taken
pub async fn create_daily_itinerary_handler(
    State(state): State<AppState>,
    Json(payload): Json<DailyItineraryRequest>,
) -> Result<(StatusCode, Json<DailyItineraryCreatedResponse>), AppError> {
    payload.validate()?;

    let daily_itinerary_id = state
        .itinerary_service
        .create_daily_itinerary(payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DailyItineraryCreatedResponse { daily_itinerary_id }),
    ))
}

/// Fetches a daily itinerary with its blocks in submission order.
///
/// # Endpoint
///
/// `GET /api/itineraries/daily/{id}`
pub async fn get_daily_itinerary_handler(
    State(state): State<AppState>,
    Path(daily_itinerary_id): Path<i64>,
) -> Result<Json<DailyItineraryResponse>, AppError> {
    let (daily, blocks) = state
        .itinerary_service
        .get_daily_itinerary(daily_itinerary_id)
        .await?;

    Ok(Json(DailyItineraryResponse::from_parts(daily, blocks)))
}
