//! Store trait for daily-itinerary persistence and reads.

use crate::domain::assembly::DailyItineraryPlan;
use crate::domain::entities::{DailyItinerary, ItineraryBlock};
use crate::error::AppError;
use async_trait::async_trait;

/// Daily-itinerary persistence.
///
/// The write side is a single transactional operation covering the whole
/// assembled plan; there is no partial-write surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Commits one assembled daily itinerary atomically: new places and
    /// reference-counter bumps, the daily-itinerary record, the ordered block
    /// batch, and the link to the parent full itinerary. If any write fails,
    /// nothing is visible afterwards.
    ///
    /// Returns the persisted daily-itinerary id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the day-number invariant is
    /// enabled and the day is already linked, or on a uniqueness violation.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create_daily(&self, plan: DailyItineraryPlan) -> Result<i64, AppError>;

    /// Fetches a daily itinerary by id.
    async fn find_daily(&self, daily_itinerary_id: i64)
    -> Result<Option<DailyItinerary>, AppError>;

    /// Lists a daily itinerary's blocks ordered by position.
    async fn list_blocks(&self, daily_itinerary_id: i64) -> Result<Vec<ItineraryBlock>, AppError>;
}
