//! Broad and mid category entities, the upper two levels of the block hierarchy.
//!
//! Both are static: created by administrative seeding and immutable afterwards.
//! A mid category belongs to exactly one broad category.

/// Top-level classification node (e.g. "Food", "Sights").
#[derive(Debug, Clone)]
pub struct BroadCategory {
    pub broad_category_id: i64,
    pub name: String,
}

impl BroadCategory {
    pub fn new(broad_category_id: i64, name: String) -> Self {
        Self {
            broad_category_id,
            name,
        }
    }
}

/// Second-level classification node; owns places.
#[derive(Debug, Clone)]
pub struct MidCategory {
    pub mid_category_id: i64,
    pub broad_category_id: i64,
    pub category_code: String,
    pub name: String,
}

impl MidCategory {
    pub fn new(
        mid_category_id: i64,
        broad_category_id: i64,
        category_code: String,
        name: String,
    ) -> Self {
        Self {
            mid_category_id,
            broad_category_id,
            category_code,
            name,
        }
    }
}
