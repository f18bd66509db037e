//! Store trait for broad/mid category resolution.

use crate::domain::assembly::CategoryLookup;
use crate::domain::entities::MidCategory;
use crate::error::AppError;
use async_trait::async_trait;

/// Bulk category resolution and catalog reads.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryStore`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Resolves every referenced broad and mid category in one bulk lookup.
    ///
    /// A subset miss is not an error; missing identifiers are simply absent
    /// from the returned lookup table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn resolve(&self, broad_ids: &[i64], mid_ids: &[i64]) -> Result<CategoryLookup, AppError>;

    /// Lists every mid category, ordered by category code.
    async fn list_mid(&self) -> Result<Vec<MidCategory>, AppError>;

    /// Finds a mid category by its category code.
    async fn find_mid_by_code(&self, code: &str) -> Result<Option<MidCategory>, AppError>;
}
