//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{CatalogService, ItineraryService, RelationService};
use crate::infrastructure::persistence::{
    PgCategoryStore, PgFullItineraryStore, PgItineraryStore, PgMemberStore, PgPlaceStore,
    PgRelationStore,
};

pub type AppItineraryService = ItineraryService<
    PgCategoryStore,
    PgPlaceStore,
    PgItineraryStore,
    PgFullItineraryStore,
    PgMemberStore,
>;
pub type AppRelationService = RelationService<PgRelationStore>;
pub type AppCatalogService = CatalogService<PgCategoryStore, PgPlaceStore>;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub itinerary_service: Arc<AppItineraryService>,
    pub relation_service: Arc<AppRelationService>,
    pub catalog_service: Arc<AppCatalogService>,
}

impl AppState {
    /// Wires the PostgreSQL stores and services over one connection pool.
    pub fn new(pool: Arc<PgPool>, enforce_unique_day_numbers: bool) -> Self {
        let category_store = Arc::new(PgCategoryStore::new(pool.clone()));
        let place_store = Arc::new(PgPlaceStore::new(pool.clone()));
        let itinerary_store = Arc::new(PgItineraryStore::new(
            pool.clone(),
            enforce_unique_day_numbers,
        ));
        let full_itinerary_store = Arc::new(PgFullItineraryStore::new(pool.clone()));
        let member_store = Arc::new(PgMemberStore::new(pool.clone()));
        let relation_store = Arc::new(PgRelationStore::new(pool.clone()));

        Self {
            db: pool,
            itinerary_service: Arc::new(ItineraryService::new(
                category_store.clone(),
                place_store.clone(),
                itinerary_store,
                full_itinerary_store,
                member_store,
            )),
            relation_service: Arc::new(RelationService::new(relation_store)),
            catalog_service: Arc::new(CatalogService::new(category_store, place_store)),
        }
    }
}
