//! Itinerary block entity: one stop within a single day.

/// A persisted stop, composing the three hierarchy levels.
///
/// Owned exclusively by its parent daily itinerary and immutable once
/// persisted. `position` preserves submission order.
#[derive(Debug, Clone)]
pub struct ItineraryBlock {
    pub block_id: i64,
    pub daily_itinerary_id: i64,
    pub position: i32,
    pub broad_category_id: i64,
    pub mid_category_id: i64,
    pub place_id: i64,
}

impl ItineraryBlock {
    pub fn new(
        block_id: i64,
        daily_itinerary_id: i64,
        position: i32,
        broad_category_id: i64,
        mid_category_id: i64,
        place_id: i64,
    ) -> Self {
        Self {
            block_id,
            daily_itinerary_id,
            position,
            broad_category_id,
            mid_category_id,
            place_id,
        }
    }
}
