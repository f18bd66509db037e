//! PostgreSQL implementation of the full-itinerary store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::FullItinerary;
use crate::domain::repositories::FullItineraryStore;
use crate::error::AppError;

pub struct PgFullItineraryStore {
    pool: Arc<PgPool>,
}

impl PgFullItineraryStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FullItineraryRow {
    full_itinerary_id: i64,
    member_id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl FullItineraryStore for PgFullItineraryStore {
    async fn find_by_id(&self, full_itinerary_id: i64) -> Result<Option<FullItinerary>, AppError> {
        let row: Option<FullItineraryRow> = sqlx::query_as(
            "SELECT full_itinerary_id, member_id, title, created_at
             FROM full_itineraries
             WHERE full_itinerary_id = $1",
        )
        .bind(full_itinerary_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| {
            FullItinerary::new(r.full_itinerary_id, r.member_id, r.title, r.created_at)
        }))
    }
}
