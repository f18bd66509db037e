//! Core business data structures.

pub mod block;
pub mod category;
pub mod itinerary;
pub mod member;
pub mod place;
pub mod relation;

pub use block::ItineraryBlock;
pub use category::{BroadCategory, MidCategory};
pub use itinerary::{DailyItinerary, FullItinerary, ItineraryLink};
pub use member::Member;
pub use place::{NewPlace, Place};
pub use relation::{RelationKind, RelationRecord};
