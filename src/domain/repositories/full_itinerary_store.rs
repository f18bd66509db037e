//! Store trait for full-itinerary lookups.

use crate::domain::entities::FullItinerary;
use crate::error::AppError;
use async_trait::async_trait;

/// Full itineraries pre-exist before any daily submission; this store is a
/// validation gate, not a creation surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FullItineraryStore: Send + Sync {
    async fn find_by_id(&self, full_itinerary_id: i64) -> Result<Option<FullItinerary>, AppError>;
}
