//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod catalog;
pub mod health;
pub mod itineraries;
pub mod relations;

pub use catalog::{
    mid_category_by_code_handler, mid_category_list_handler, place_handler, place_list_handler,
};
pub use health::health_handler;
pub use itineraries::{create_daily_itinerary_handler, get_daily_itinerary_handler};
pub use relations::{
    add_favorite_handler, add_scrap_handler, list_favorites_handler, list_scraps_handler,
};
