//! DTOs for daily-itinerary submission and retrieval.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::assembly::{BlockDraft, DailySubmission, PlaceDraft};
use crate::domain::entities::{DailyItinerary, ItineraryBlock};

/// Compiled regex for external place identifiers.
static EXTERNAL_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9:._-]+$").unwrap());

/// A client-submitted daily itinerary: an ordered, possibly-redundant list of
/// blocks referencing shared places.
#[derive(Debug, Deserialize, Validate)]
pub struct DailyItineraryRequest {
    #[validate(range(min = 1))]
    pub member_id: i64,

    #[validate(range(min = 1))]
    pub full_itinerary_id: i64,

    /// Day-number ordinal within the full itinerary (day N).
    #[validate(range(min = 1, max = 60))]
    pub day_number: i32,

    #[validate(length(min = 1, message = "blocks must not be empty"))]
    #[validate(nested)]
    pub blocks: Vec<BlockItem>,
}

/// One submitted stop.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BlockItem {
    #[validate(range(min = 1))]
    pub broad_category_id: i64,

    #[validate(range(min = 1))]
    pub mid_category_id: i64,

    #[validate(nested)]
    pub place: PlaceItem,
}

/// Place payload carried by a block.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PlaceItem {
    /// Source-of-truth identifier, globally unique per place.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*EXTERNAL_ID_REGEX"))]
    pub external_id: String,

    pub map_x: f64,
    pub map_y: f64,
}

impl From<DailyItineraryRequest> for DailySubmission {
    fn from(req: DailyItineraryRequest) -> Self {
        DailySubmission {
            member_id: req.member_id,
            full_itinerary_id: req.full_itinerary_id,
            day_number: req.day_number,
            blocks: req
                .blocks
                .into_iter()
                .map(|b| BlockDraft {
                    broad_category_id: b.broad_category_id,
                    mid_category_id: b.mid_category_id,
                    place: PlaceDraft {
                        external_id: b.place.external_id,
                        map_x: b.place.map_x,
                        map_y: b.place.map_y,
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DailyItineraryCreatedResponse {
    pub daily_itinerary_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DailyItineraryResponse {
    pub daily_itinerary_id: i64,
    pub member_id: i64,
    pub created_at: DateTime<Utc>,
    pub blocks: Vec<BlockResponse>,
}

#[derive(Debug, Serialize)]
pub struct BlockResponse {
    pub block_id: i64,
    pub position: i32,
    pub broad_category_id: i64,
    pub mid_category_id: i64,
    pub place_id: i64,
}

impl DailyItineraryResponse {
    pub fn from_parts(daily: DailyItinerary, blocks: Vec<ItineraryBlock>) -> Self {
        Self {
            daily_itinerary_id: daily.daily_itinerary_id,
            member_id: daily.member_id,
            created_at: daily.created_at,
            blocks: blocks
                .into_iter()
                .map(|b| BlockResponse {
                    block_id: b.block_id,
                    position: b.position,
                    broad_category_id: b.broad_category_id,
                    mid_category_id: b.mid_category_id,
                    place_id: b.place_id,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> DailyItineraryRequest {
        DailyItineraryRequest {
            member_id: 1,
            full_itinerary_id: 2,
            day_number: 1,
            blocks: vec![BlockItem {
                broad_category_id: 1,
                mid_category_id: 10,
                place: PlaceItem {
                    external_id: "kakao:12345".to_string(),
                    map_x: 127.02,
                    map_y: 37.49,
                },
            }],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_blocks_rejected() {
        let mut req = valid_request();
        req.blocks.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_bad_external_id_rejected() {
        let mut req = valid_request();
        req.blocks[0].place.external_id = "has spaces!".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_conversion_preserves_block_order() {
        let mut req = valid_request();
        req.blocks.push(BlockItem {
            broad_category_id: 2,
            mid_category_id: 20,
            place: PlaceItem {
                external_id: "kakao:2".to_string(),
                map_x: 1.0,
                map_y: 2.0,
            },
        });

        let submission: DailySubmission = req.into();
        assert_eq!(submission.blocks.len(), 2);
        assert_eq!(submission.blocks[0].place.external_id, "kakao:12345");
        assert_eq!(submission.blocks[1].place.external_id, "kakao:2");
    }
}
