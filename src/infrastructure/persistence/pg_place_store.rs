//! PostgreSQL implementation of the place store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Place;
use crate::domain::repositories::PlaceStore;
use crate::error::AppError;

pub struct PgPlaceStore {
    pool: Arc<PgPool>,
}

impl PgPlaceStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlaceRow {
    place_id: i64,
    external_id: String,
    map_x: f64,
    map_y: f64,
    reference_count: i32,
    mid_category_id: i64,
}

impl From<PlaceRow> for Place {
    fn from(r: PlaceRow) -> Self {
        Place::new(
            r.place_id,
            r.external_id,
            r.map_x,
            r.map_y,
            r.reference_count,
            r.mid_category_id,
        )
    }
}

const PLACE_COLUMNS: &str =
    "place_id, external_id, map_x, map_y, reference_count, mid_category_id";

#[async_trait]
impl PlaceStore for PgPlaceStore {
    async fn find_by_external_ids(&self, external_ids: &[String]) -> Result<Vec<Place>, AppError> {
        let rows: Vec<PlaceRow> = sqlx::query_as(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE external_id = ANY($1)"
        ))
        .bind(external_ids.to_vec())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, place_id: i64) -> Result<Option<Place>, AppError> {
        let row: Option<PlaceRow> = sqlx::query_as(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE place_id = $1"
        ))
        .bind(place_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Place>, AppError> {
        let rows: Vec<PlaceRow> = sqlx::query_as(&format!(
            "SELECT {PLACE_COLUMNS} FROM places ORDER BY reference_count DESC, place_id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
