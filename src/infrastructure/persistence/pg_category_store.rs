//! PostgreSQL implementation of the category store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::assembly::CategoryLookup;
use crate::domain::entities::{BroadCategory, MidCategory};
use crate::domain::repositories::CategoryStore;
use crate::error::AppError;

pub struct PgCategoryStore {
    pool: Arc<PgPool>,
}

impl PgCategoryStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BroadRow {
    broad_category_id: i64,
    name: String,
}

#[derive(sqlx::FromRow)]
struct MidRow {
    mid_category_id: i64,
    broad_category_id: i64,
    category_code: String,
    name: String,
}

impl From<MidRow> for MidCategory {
    fn from(r: MidRow) -> Self {
        MidCategory::new(
            r.mid_category_id,
            r.broad_category_id,
            r.category_code,
            r.name,
        )
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn resolve(
        &self,
        broad_ids: &[i64],
        mid_ids: &[i64],
    ) -> Result<CategoryLookup, AppError> {
        let broads: Vec<BroadRow> = sqlx::query_as(
            "SELECT broad_category_id, name
             FROM broad_categories
             WHERE broad_category_id = ANY($1)",
        )
        .bind(broad_ids.to_vec())
        .fetch_all(self.pool.as_ref())
        .await?;

        let mids: Vec<MidRow> = sqlx::query_as(
            "SELECT mid_category_id, broad_category_id, category_code, name
             FROM mid_categories
             WHERE mid_category_id = ANY($1)",
        )
        .bind(mid_ids.to_vec())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(CategoryLookup {
            broad: broads
                .into_iter()
                .map(|r| {
                    (
                        r.broad_category_id,
                        BroadCategory::new(r.broad_category_id, r.name),
                    )
                })
                .collect(),
            mid: mids
                .into_iter()
                .map(|r| (r.mid_category_id, r.into()))
                .collect(),
        })
    }

    async fn list_mid(&self) -> Result<Vec<MidCategory>, AppError> {
        let rows: Vec<MidRow> = sqlx::query_as(
            "SELECT mid_category_id, broad_category_id, category_code, name
             FROM mid_categories
             ORDER BY category_code",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_mid_by_code(&self, code: &str) -> Result<Option<MidCategory>, AppError> {
        let row: Option<MidRow> = sqlx::query_as(
            "SELECT mid_category_id, broad_category_id, category_code, name
             FROM mid_categories
             WHERE category_code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
