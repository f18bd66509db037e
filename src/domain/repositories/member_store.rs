//! Store trait for member lookups.

use crate::domain::entities::Member;
use crate::error::AppError;
use async_trait::async_trait;

/// Member fetch-by-id, used as a validation gate by the assembly pipeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, AppError>;
}
