//! Daily/full itinerary entities and the link record connecting them.

use chrono::{DateTime, Utc};

/// One day's ordered sequence of itinerary blocks, owned by its creator.
#[derive(Debug, Clone)]
pub struct DailyItinerary {
    pub daily_itinerary_id: i64,
    pub member_id: i64,
    pub created_at: DateTime<Utc>,
}

impl DailyItinerary {
    pub fn new(daily_itinerary_id: i64, member_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            daily_itinerary_id,
            member_id,
            created_at,
        }
    }
}

/// The multi-day container. Pre-exists before any daily submission; the
/// assembly pipeline looks it up, never creates it.
#[derive(Debug, Clone)]
pub struct FullItinerary {
    pub full_itinerary_id: i64,
    pub member_id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl FullItinerary {
    pub fn new(
        full_itinerary_id: i64,
        member_id: i64,
        title: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            full_itinerary_id,
            member_id,
            title,
            created_at,
        }
    }
}

/// Connects a full itinerary, a daily itinerary, its member, and a day-number
/// ordinal.
#[derive(Debug, Clone)]
pub struct ItineraryLink {
    pub link_id: i64,
    pub full_itinerary_id: i64,
    pub daily_itinerary_id: i64,
    pub member_id: i64,
    pub day_number: i32,
}
