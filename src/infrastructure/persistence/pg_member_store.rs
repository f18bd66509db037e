//! PostgreSQL implementation of the member store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Member;
use crate::domain::repositories::MemberStore;
use crate::error::AppError;

pub struct PgMemberStore {
    pool: Arc<PgPool>,
}

impl PgMemberStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    member_id: i64,
    email: String,
    nickname: String,
    active: bool,
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, AppError> {
        let row: Option<MemberRow> = sqlx::query_as(
            "SELECT member_id, email, nickname, active
             FROM members
             WHERE member_id = $1",
        )
        .bind(member_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Member::new(r.member_id, r.email, r.nickname, r.active)))
    }
}
