//! Business logic services for the application layer.

pub mod catalog_service;
pub mod itinerary_service;
pub mod relation_service;

pub use catalog_service::CatalogService;
pub use itinerary_service::ItineraryService;
pub use relation_service::RelationService;
