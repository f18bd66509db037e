//! PostgreSQL store implementations.
//!
//! # Stores
//!
//! - [`PgCategoryStore`] - bulk category resolution and catalog reads
//! - [`PgPlaceStore`] - place lookups by external identifier
//! - [`PgItineraryStore`] - transactional daily-itinerary persistence
//! - [`PgFullItineraryStore`] - full-itinerary validation gate
//! - [`PgMemberStore`] - member validation gate
//! - [`PgRelationStore`] - favorite/scrap combined lookup and insert

pub mod pg_category_store;
pub mod pg_full_itinerary_store;
pub mod pg_itinerary_store;
pub mod pg_member_store;
pub mod pg_place_store;
pub mod pg_relation_store;

pub use pg_category_store::PgCategoryStore;
pub use pg_full_itinerary_store::PgFullItineraryStore;
pub use pg_itinerary_store::PgItineraryStore;
pub use pg_member_store::PgMemberStore;
pub use pg_place_store::PgPlaceStore;
pub use pg_relation_store::PgRelationStore;
