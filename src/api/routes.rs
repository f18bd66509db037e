//! API route configuration.

use crate::api::handlers::{
    add_favorite_handler, add_scrap_handler, create_daily_itinerary_handler,
    get_daily_itinerary_handler, list_favorites_handler, list_scraps_handler,
    mid_category_by_code_handler, mid_category_list_handler, place_handler, place_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /itineraries/daily`               - Assemble and persist a daily itinerary
/// - `GET  /itineraries/daily/{id}`          - Daily itinerary with ordered blocks
/// - `POST /itineraries/daily/{id}/favorite` - Set favorite for a member
/// - `POST /itineraries/daily/{id}/scrap`    - Set scrap for a member
/// - `GET  /members/{member_id}/favorites`   - List a member's favorites
/// - `GET  /members/{member_id}/scraps`      - List a member's scraps
/// - `GET  /categories/mid`                  - List mid categories
/// - `GET  /categories/mid/{code}`           - Mid category by code
/// - `GET  /places`                          - List places
/// - `GET  /places/{id}`                     - Place by id
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/itineraries/daily", post(create_daily_itinerary_handler))
        .route("/itineraries/daily/{id}", get(get_daily_itinerary_handler))
        .route(
            "/itineraries/daily/{id}/favorite",
            post(add_favorite_handler),
        )
        .route("/itineraries/daily/{id}/scrap", post(add_scrap_handler))
        .route("/members/{member_id}/favorites", get(list_favorites_handler))
        .route("/members/{member_id}/scraps", get(list_scraps_handler))
        .route("/categories/mid", get(mid_category_list_handler))
        .route("/categories/mid/{code}", get(mid_category_by_code_handler))
        .route("/places", get(place_list_handler))
        .route("/places/{id}", get(place_handler))
}
