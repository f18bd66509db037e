//! PostgreSQL implementation of the relation store.
//!
//! Favorites and scraps live in separate tables with identical shape; the
//! relation kind selects the table and id column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{DailyItinerary, Member, RelationKind, RelationRecord};
use crate::domain::repositories::{RelationPairLookup, RelationStore};
use crate::error::AppError;

pub struct PgRelationStore {
    pool: Arc<PgPool>,
}

impl PgRelationStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn table_parts(kind: RelationKind) -> (&'static str, &'static str) {
    match kind {
        RelationKind::Favorite => ("favorites", "favorite_id"),
        RelationKind::Scrap => ("scraps", "scrap_id"),
    }
}

#[derive(sqlx::FromRow)]
struct RelationRow {
    relation_id: i64,
    member_id: i64,
    daily_itinerary_id: i64,
    created_at: DateTime<Utc>,
}

impl From<RelationRow> for RelationRecord {
    fn from(r: RelationRow) -> Self {
        RelationRecord::new(
            r.relation_id,
            r.member_id,
            r.daily_itinerary_id,
            r.created_at,
        )
    }
}

#[async_trait]
impl RelationStore for PgRelationStore {
    async fn find_pair(
        &self,
        member_id: i64,
        daily_itinerary_id: i64,
        kind: RelationKind,
    ) -> Result<RelationPairLookup, AppError> {
        let (table, id_column) = table_parts(kind);

        // One round trip: member, daily itinerary, and any existing relation
        // of the requested kind.
        let sql = format!(
            "SELECT m.member_id, m.email, m.nickname, m.active,
                    d.daily_itinerary_id AS d_id,
                    d.member_id AS d_member_id,
                    d.created_at AS d_created_at,
                    r.{id_column} AS r_id,
                    r.created_at AS r_created_at
             FROM members m
             LEFT JOIN daily_itineraries d ON d.daily_itinerary_id = $2
             LEFT JOIN {table} r
                    ON r.daily_itinerary_id = $2 AND r.member_id = $1
             WHERE m.member_id = $1"
        );

        let row = sqlx::query(&sql)
            .bind(member_id)
            .bind(daily_itinerary_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(RelationPairLookup::default());
        };

        let member = Member::new(
            row.try_get("member_id")?,
            row.try_get("email")?,
            row.try_get("nickname")?,
            row.try_get("active")?,
        );

        let daily_itinerary = row
            .try_get::<Option<i64>, _>("d_id")?
            .map(|id| -> Result<DailyItinerary, sqlx::Error> {
                Ok(DailyItinerary::new(
                    id,
                    row.try_get("d_member_id")?,
                    row.try_get("d_created_at")?,
                ))
            })
            .transpose()?;

        let relation = row
            .try_get::<Option<i64>, _>("r_id")?
            .map(|id| -> Result<RelationRecord, sqlx::Error> {
                Ok(RelationRecord::new(
                    id,
                    member_id,
                    daily_itinerary_id,
                    row.try_get("r_created_at")?,
                ))
            })
            .transpose()?;

        Ok(RelationPairLookup {
            member: Some(member),
            daily_itinerary,
            relation,
        })
    }

    async fn insert(
        &self,
        member_id: i64,
        daily_itinerary_id: i64,
        kind: RelationKind,
    ) -> Result<RelationRecord, AppError> {
        let (table, id_column) = table_parts(kind);

        let sql = format!(
            "INSERT INTO {table} (member_id, daily_itinerary_id)
             VALUES ($1, $2)
             RETURNING {id_column} AS relation_id, member_id, daily_itinerary_id, created_at"
        );

        let row: RelationRow = sqlx::query_as(&sql)
            .bind(member_id)
            .bind(daily_itinerary_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn list_by_member(
        &self,
        member_id: i64,
        kind: RelationKind,
    ) -> Result<Vec<RelationRecord>, AppError> {
        let (table, id_column) = table_parts(kind);

        let sql = format!(
            "SELECT {id_column} AS relation_id, member_id, daily_itinerary_id, created_at
             FROM {table}
             WHERE member_id = $1
             ORDER BY created_at DESC"
        );

        let rows: Vec<RelationRow> = sqlx::query_as(&sql)
            .bind(member_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_selects_table() {
        assert_eq!(
            table_parts(RelationKind::Favorite),
            ("favorites", "favorite_id")
        );
        assert_eq!(table_parts(RelationKind::Scrap), ("scraps", "scrap_id"));
    }
}
