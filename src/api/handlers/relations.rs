//! Handlers for favorite/scrap endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::relation::{RelationListResponse, RelationRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Marks a daily itinerary as a favorite of the requesting member.
///
/// # Endpoint
///
/// `POST /api/itineraries/daily/{id}/favorite`
///
/// Duplicate toggles are rejected with 400; this is terminal, not an upsert.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Path(daily_itinerary_id): Path<i64>,
    Json(payload): Json<RelationRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .relation_service
        .set_favorite(payload.member_id, daily_itinerary_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Scraps a daily itinerary for the requesting member.
///
/// # Endpoint
///
/// `POST /api/itineraries/daily/{id}/scrap`
pub async fn add_scrap_handler(
    State(state): State<AppState>,
    Path(daily_itinerary_id): Path<i64>,
    Json(payload): Json<RelationRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .relation_service
        .set_scrap(payload.member_id, daily_itinerary_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists a member's favorite records, newest first.
///
/// # Endpoint
///
/// `GET /api/members/{member_id}/favorites`
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<RelationListResponse>, AppError> {
    let records = state.relation_service.list_favorites(member_id).await?;

    Ok(Json(RelationListResponse {
        member_id,
        items: records.into_iter().map(Into::into).collect(),
    }))
}

/// Lists a member's scrap records, newest first.
///
/// # Endpoint
///
/// `GET /api/members/{member_id}/scraps`
pub async fn list_scraps_handler(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<RelationListResponse>, AppError> {
    let records = state.relation_service.list_scraps(member_id).await?;

    Ok(Json(RelationListResponse {
        member_id,
        items: records.into_iter().map(Into::into).collect(),
    }))
}
