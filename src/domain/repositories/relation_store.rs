//! Store trait for favorite/scrap relation records.

use crate::domain::entities::{DailyItinerary, Member, RelationKind, RelationRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of the combined existence-plus-fetch query for one
/// (member, daily itinerary, kind) triple.
///
/// Absent fields mean the corresponding row does not exist.
#[derive(Debug, Default)]
pub struct RelationPairLookup {
    pub member: Option<Member>,
    pub daily_itinerary: Option<DailyItinerary>,
    pub relation: Option<RelationRecord>,
}

/// Relation record access for both kinds.
///
/// The combined lookup fetches member, daily itinerary, and any existing
/// relation of the requested kind in one round trip, narrowing the
/// check-then-act window for concurrent toggles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationStore: Send + Sync {
    /// Combined existence check and data fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_pair(
        &self,
        member_id: i64,
        daily_itinerary_id: i64,
        kind: RelationKind,
    ) -> Result<RelationPairLookup, AppError>;

    /// Inserts a new relation record of `kind` for the pair.
    async fn insert(
        &self,
        member_id: i64,
        daily_itinerary_id: i64,
        kind: RelationKind,
    ) -> Result<RelationRecord, AppError>;

    /// Lists a member's relation records of `kind`, newest first.
    async fn list_by_member(
        &self,
        member_id: i64,
        kind: RelationKind,
    ) -> Result<Vec<RelationRecord>, AppError>;
}
