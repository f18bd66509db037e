//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Stores
//!
//! - [`CategoryStore`] - bulk broad/mid category resolution, catalog reads
//! - [`PlaceStore`] - bulk place resolution by external identifier
//! - [`ItineraryStore`] - atomic daily-itinerary persistence and reads
//! - [`FullItineraryStore`] - full-itinerary validation gate
//! - [`MemberStore`] - member validation gate
//! - [`RelationStore`] - favorite/scrap combined lookup and insert

pub mod category_store;
pub mod full_itinerary_store;
pub mod itinerary_store;
pub mod member_store;
pub mod place_store;
pub mod relation_store;

pub use category_store::CategoryStore;
pub use full_itinerary_store::FullItineraryStore;
pub use itinerary_store::ItineraryStore;
pub use member_store::MemberStore;
pub use place_store::PlaceStore;
pub use relation_store::{RelationPairLookup, RelationStore};

#[cfg(test)]
pub use category_store::MockCategoryStore;
#[cfg(test)]
pub use full_itinerary_store::MockFullItineraryStore;
#[cfg(test)]
pub use itinerary_store::MockItineraryStore;
#[cfg(test)]
pub use member_store::MockMemberStore;
#[cfg(test)]
pub use place_store::MockPlaceStore;
#[cfg(test)]
pub use relation_store::MockRelationStore;
