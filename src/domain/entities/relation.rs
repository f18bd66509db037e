//! Favorite/scrap relation records between a member and a daily itinerary.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The two independent relation kinds a member can hold on a daily itinerary.
///
/// At most one record of each kind may exist per (member, daily itinerary)
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Favorite,
    Scrap,
}

impl RelationKind {
    /// Human-readable past-tense label used in duplicate-rejection messages.
    pub fn already_message(self) -> &'static str {
        match self {
            RelationKind::Favorite => "Already added to favorite",
            RelationKind::Scrap => "Already scraped",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Favorite => "favorite",
            RelationKind::Scrap => "scrap",
        }
    }
}

/// A persisted favorite or scrap record.
#[derive(Debug, Clone)]
pub struct RelationRecord {
    pub relation_id: i64,
    pub member_id: i64,
    pub daily_itinerary_id: i64,
    pub created_at: DateTime<Utc>,
}

impl RelationRecord {
    pub fn new(
        relation_id: i64,
        member_id: i64,
        daily_itinerary_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            relation_id,
            member_id,
            daily_itinerary_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(RelationKind::Favorite.as_str(), "favorite");
        assert_eq!(RelationKind::Scrap.already_message(), "Already scraped");
    }
}
