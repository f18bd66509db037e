//! DTOs for catalog browse endpoints.

use serde::Serialize;

use crate::domain::entities::{MidCategory, Place};

#[derive(Debug, Serialize)]
pub struct MidCategoryResponse {
    pub mid_category_id: i64,
    pub broad_category_id: i64,
    pub category_code: String,
    pub name: String,
}

impl From<MidCategory> for MidCategoryResponse {
    fn from(c: MidCategory) -> Self {
        Self {
            mid_category_id: c.mid_category_id,
            broad_category_id: c.broad_category_id,
            category_code: c.category_code,
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub place_id: i64,
    pub external_id: String,
    pub map_x: f64,
    pub map_y: f64,
    pub reference_count: i32,
    pub mid_category_id: i64,
}

impl From<Place> for PlaceResponse {
    fn from(p: Place) -> Self {
        Self {
            place_id: p.place_id,
            external_id: p.external_id,
            map_x: p.map_x,
            map_y: p.map_y,
            reference_count: p.reference_count,
            mid_category_id: p.mid_category_id,
        }
    }
}
