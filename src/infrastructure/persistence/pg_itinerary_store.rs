//! PostgreSQL implementation of the itinerary store.
//!
//! `create_daily` is the persistence orchestrator: the whole assembled plan
//! commits in one transaction, or none of it is visible.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::assembly::{CanonicalPlace, DailyItineraryPlan};
use crate::domain::entities::{DailyItinerary, ItineraryBlock};
use crate::domain::repositories::ItineraryStore;
use crate::error::AppError;

pub struct PgItineraryStore {
    pool: Arc<PgPool>,
    /// When set, a duplicate (full itinerary, day number) pair is rejected
    /// with a conflict before any write.
    enforce_unique_day_numbers: bool,
}

impl PgItineraryStore {
    pub fn new(pool: Arc<PgPool>, enforce_unique_day_numbers: bool) -> Self {
        Self {
            pool,
            enforce_unique_day_numbers,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DailyRow {
    daily_itinerary_id: i64,
    member_id: i64,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct BlockRow {
    block_id: i64,
    daily_itinerary_id: i64,
    position: i32,
    broad_category_id: i64,
    mid_category_id: i64,
    place_id: i64,
}

#[async_trait]
impl ItineraryStore for PgItineraryStore {
    async fn create_daily(&self, plan: DailyItineraryPlan) -> Result<i64, AppError> {
        let occurrences = plan.occurrences();
        let mut tx = self.pool.begin().await?;

        if self.enforce_unique_day_numbers {
            let taken: bool = sqlx::query_scalar(
                "SELECT EXISTS(
                     SELECT 1 FROM itinerary_links
                     WHERE full_itinerary_id = $1 AND day_number = $2
                 )",
            )
            .bind(plan.full_itinerary_id)
            .bind(plan.day_number)
            .fetch_one(&mut *tx)
            .await?;

            if taken {
                return Err(AppError::conflict(
                    "Day number already linked for this full itinerary",
                    json!({
                        "full_itinerary_id": plan.full_itinerary_id,
                        "day_number": plan.day_number,
                    }),
                ));
            }
        }

        // external id -> (place_id, authoritative mid category)
        let mut resolved: HashMap<&str, (i64, i64)> = HashMap::new();

        for (key, canonical) in &plan.places {
            let occurrence_count = *occurrences.get(key.as_str()).unwrap_or(&0);

            match canonical {
                CanonicalPlace::Existing(place) => {
                    sqlx::query(
                        "UPDATE places SET reference_count = reference_count + $1
                         WHERE place_id = $2",
                    )
                    .bind(occurrence_count)
                    .bind(place.place_id)
                    .execute(&mut *tx)
                    .await?;

                    resolved.insert(key.as_str(), (place.place_id, place.mid_category_id));
                }
                CanonicalPlace::New(new_place) => {
                    // Retry-as-lookup: a concurrent submission may have
                    // created this external id first, in which case the
                    // stored coordinates and classification win and only the
                    // counter is bumped.
                    let row = sqlx::query(
                        "INSERT INTO places
                             (external_id, map_x, map_y, mid_category_id, reference_count)
                         VALUES ($1, $2, $3, $4, $5)
                         ON CONFLICT (external_id) DO UPDATE
                             SET reference_count =
                                 places.reference_count + EXCLUDED.reference_count
                         RETURNING place_id, mid_category_id",
                    )
                    .bind(&new_place.external_id)
                    .bind(new_place.map_x)
                    .bind(new_place.map_y)
                    .bind(new_place.mid_category_id)
                    .bind(occurrence_count)
                    .fetch_one(&mut *tx)
                    .await?;

                    resolved.insert(
                        key.as_str(),
                        (row.try_get("place_id")?, row.try_get("mid_category_id")?),
                    );
                }
            }
        }

        let daily_itinerary_id: i64 = sqlx::query_scalar(
            "INSERT INTO daily_itineraries (member_id)
             VALUES ($1)
             RETURNING daily_itinerary_id",
        )
        .bind(plan.member_id)
        .fetch_one(&mut *tx)
        .await?;

        if !plan.blocks.is_empty() {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO itinerary_blocks
                 (daily_itinerary_id, position, broad_category_id, mid_category_id, place_id) ",
            );
            builder.push_values(&plan.blocks, |mut b, block| {
                let (place_id, mid_category_id) = resolved[block.place_key.as_str()];
                b.push_bind(daily_itinerary_id)
                    .push_bind(block.position)
                    .push_bind(block.broad_category_id)
                    .push_bind(mid_category_id)
                    .push_bind(place_id);
            });
            builder.build().execute(&mut *tx).await?;
        }

        sqlx::query(
            "INSERT INTO itinerary_links
                 (full_itinerary_id, daily_itinerary_id, member_id, day_number)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(plan.full_itinerary_id)
        .bind(daily_itinerary_id)
        .bind(plan.member_id)
        .bind(plan.day_number)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(daily_itinerary_id)
    }

    async fn find_daily(
        &self,
        daily_itinerary_id: i64,
    ) -> Result<Option<DailyItinerary>, AppError> {
        let row: Option<DailyRow> = sqlx::query_as(
            "SELECT daily_itinerary_id, member_id, created_at
             FROM daily_itineraries
             WHERE daily_itinerary_id = $1",
        )
        .bind(daily_itinerary_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| DailyItinerary::new(r.daily_itinerary_id, r.member_id, r.created_at)))
    }

    async fn list_blocks(&self, daily_itinerary_id: i64) -> Result<Vec<ItineraryBlock>, AppError> {
        let rows: Vec<BlockRow> = sqlx::query_as(
            "SELECT block_id, daily_itinerary_id, position,
                    broad_category_id, mid_category_id, place_id
             FROM itinerary_blocks
             WHERE daily_itinerary_id = $1
             ORDER BY position",
        )
        .bind(daily_itinerary_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                ItineraryBlock::new(
                    r.block_id,
                    r.daily_itinerary_id,
                    r.position,
                    r.broad_category_id,
                    r.mid_category_id,
                    r.place_id,
                )
            })
            .collect())
    }
}
