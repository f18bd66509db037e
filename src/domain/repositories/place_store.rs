//! Store trait for place (fine category) data access.

use crate::domain::entities::Place;
use crate::error::AppError;
use async_trait::async_trait;

/// Place lookups. Creation happens only inside the itinerary persistence
/// transaction; there is no overwrite operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Resolves places by external identifier set in one bulk lookup.
    ///
    /// Returns only the places that exist; a subset miss is surfaced as an
    /// absent entry, never as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_external_ids(&self, external_ids: &[String]) -> Result<Vec<Place>, AppError>;

    /// Fetches a single place by its row id.
    async fn find_by_id(&self, place_id: i64) -> Result<Option<Place>, AppError>;

    /// Lists places ordered by reference count, most reused first.
    async fn list(&self) -> Result<Vec<Place>, AppError>;
}
