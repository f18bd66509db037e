//! DTOs for favorite/scrap endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::RelationRecord;

/// Body of a favorite/scrap toggle request. Member identity is explicit;
/// there is no ambient current-member lookup.
#[derive(Debug, Deserialize, Validate)]
pub struct RelationRequest {
    #[validate(range(min = 1))]
    pub member_id: i64,
}

#[derive(Debug, Serialize)]
pub struct RelationItem {
    pub relation_id: i64,
    pub daily_itinerary_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<RelationRecord> for RelationItem {
    fn from(r: RelationRecord) -> Self {
        Self {
            relation_id: r.relation_id,
            daily_itinerary_id: r.daily_itinerary_id,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelationListResponse {
    pub member_id: i64,
    pub items: Vec<RelationItem>,
}
