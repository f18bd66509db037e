//! Block-catalog read service: mid categories and places.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{MidCategory, Place};
use crate::domain::repositories::{CategoryStore, PlaceStore};
use crate::error::AppError;

/// Read-only catalog queries backing the browse endpoints.
pub struct CatalogService<C: CategoryStore, P: PlaceStore> {
    category_store: Arc<C>,
    place_store: Arc<P>,
}

impl<C: CategoryStore, P: PlaceStore> CatalogService<C, P> {
    pub fn new(category_store: Arc<C>, place_store: Arc<P>) -> Self {
        Self {
            category_store,
            place_store,
        }
    }

    pub async fn list_mid_categories(&self) -> Result<Vec<MidCategory>, AppError> {
        self.category_store.list_mid().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mid category carries the code.
    pub async fn get_mid_category_by_code(&self, code: &str) -> Result<MidCategory, AppError> {
        self.category_store
            .find_mid_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Mid category not found", json!({ "category_code": code }))
            })
    }

    pub async fn list_places(&self) -> Result<Vec<Place>, AppError> {
        self.place_store.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no place matches the id.
    pub async fn get_place(&self, place_id: i64) -> Result<Place, AppError> {
        self.place_store.find_by_id(place_id).await?.ok_or_else(|| {
            AppError::not_found("Place not found", json!({ "place_id": place_id }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCategoryStore, MockPlaceStore};

    #[tokio::test]
    async fn test_get_mid_category_by_code_not_found() {
        let mut category = MockCategoryStore::new();
        category
            .expect_find_mid_by_code()
            .withf(|code| code == "FD6")
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(category), Arc::new(MockPlaceStore::new()));
        let err = service.get_mid_category_by_code("FD6").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_place_found() {
        let mut place = MockPlaceStore::new();
        place.expect_find_by_id().returning(|id| {
            Ok(Some(Place::new(id, "kakao:1".to_string(), 1.0, 2.0, 1, 10)))
        });

        let service = CatalogService::new(Arc::new(MockCategoryStore::new()), Arc::new(place));
        let found = service.get_place(3).await.unwrap();
        assert_eq!(found.place_id, 3);
    }
}
