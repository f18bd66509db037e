//! Handlers for catalog browse endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::catalog::{MidCategoryResponse, PlaceResponse};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/categories/mid` - lists every mid category.
pub async fn mid_category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MidCategoryResponse>>, AppError> {
    let categories = state.catalog_service.list_mid_categories().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// `GET /api/categories/mid/{code}` - fetches a mid category by its code.
pub async fn mid_category_by_code_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MidCategoryResponse>, AppError> {
    let category = state.catalog_service.get_mid_category_by_code(&code).await?;
    Ok(Json(category.into()))
}

/// `GET /api/places` - lists places, most reused first.
pub async fn place_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlaceResponse>>, AppError> {
    let places = state.catalog_service.list_places().await?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

/// `GET /api/places/{id}` - fetches a place by row id.
pub async fn place_handler(
    State(state): State<AppState>,
    Path(place_id): Path<i64>,
) -> Result<Json<PlaceResponse>, AppError> {
    let place = state.catalog_service.get_place(place_id).await?;
    Ok(Json(place.into()))
}
