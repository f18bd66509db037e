//! Place entity: a concrete point of interest, the finest level of the
//! block hierarchy.

/// A physical place with coordinates and a globally unique external identifier.
///
/// Created lazily on first reference by a submission. The reference counter
/// grows with every reuse; places are never deleted when it drops.
#[derive(Debug, Clone)]
pub struct Place {
    pub place_id: i64,
    pub external_id: String,
    pub map_x: f64,
    pub map_y: f64,
    pub reference_count: i32,
    pub mid_category_id: i64,
}

impl Place {
    pub fn new(
        place_id: i64,
        external_id: String,
        map_x: f64,
        map_y: f64,
        reference_count: i32,
        mid_category_id: i64,
    ) -> Self {
        Self {
            place_id,
            external_id,
            map_x,
            map_y,
            reference_count,
            mid_category_id,
        }
    }
}

/// Input data for materializing a place on first reference.
///
/// Coordinates come from the submitting client; once stored they are never
/// overwritten by later submissions (first-write-wins).
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub external_id: String,
    pub map_x: f64,
    pub map_y: f64,
    pub mid_category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_creation() {
        let place = Place::new(7, "kakao:123".to_string(), 127.02, 37.49, 3, 2);
        assert_eq!(place.place_id, 7);
        assert_eq!(place.external_id, "kakao:123");
        assert_eq!(place.reference_count, 3);
        assert_eq!(place.mid_category_id, 2);
    }
}
