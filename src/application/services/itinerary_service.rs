//! Daily-itinerary assembly service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::assembly::{self, AssemblyError, DailyItineraryPlan, DailySubmission};
use crate::domain::entities::{DailyItinerary, ItineraryBlock};
use crate::domain::repositories::{
    CategoryStore, FullItineraryStore, ItineraryStore, MemberStore, PlaceStore,
};
use crate::error::AppError;

/// Orchestrates the course-assembly pipeline: validation gates, bulk category
/// resolution, place deduplication, ordered block planning, and the atomic
/// persistence of the resulting plan.
pub struct ItineraryService<C, P, I, F, M>
where
    C: CategoryStore,
    P: PlaceStore,
    I: ItineraryStore,
    F: FullItineraryStore,
    M: MemberStore,
{
    category_store: Arc<C>,
    place_store: Arc<P>,
    itinerary_store: Arc<I>,
    full_itinerary_store: Arc<F>,
    member_store: Arc<M>,
}

impl<C, P, I, F, M> ItineraryService<C, P, I, F, M>
where
    C: CategoryStore,
    P: PlaceStore,
    I: ItineraryStore,
    F: FullItineraryStore,
    M: MemberStore,
{
    pub fn new(
        category_store: Arc<C>,
        place_store: Arc<P>,
        itinerary_store: Arc<I>,
        full_itinerary_store: Arc<F>,
        member_store: Arc<M>,
    ) -> Self {
        Self {
            category_store,
            place_store,
            itinerary_store,
            full_itinerary_store,
            member_store,
        }
    }

    /// Assembles and persists one daily itinerary.
    ///
    /// # Pipeline
    ///
    /// 1. Rejects an empty submission before any resolution begins.
    /// 2. Validates the member and parent full itinerary exist.
    /// 3. Resolves referenced categories and places in two bulk lookups.
    /// 4. Deduplicates place references to one canonical instance per
    ///    external id and plans the ordered block list.
    /// 5. Hands the plan to the store, which commits it in one transaction.
    ///
    /// Returns the persisted daily-itinerary id.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - the submission carries no blocks
    /// - [`AppError::NotFound`] - member, full itinerary, or a referenced
    ///   category does not exist; nothing is written
    /// - [`AppError::Conflict`] / [`AppError::Internal`] - store failures;
    ///   the transaction is rolled back
    pub async fn create_daily_itinerary(
        &self,
        submission: DailySubmission,
    ) -> Result<i64, AppError> {
        if submission.blocks.is_empty() {
            return Err(AppError::validation(
                "Submission contains no blocks",
                json!({ "member_id": submission.member_id }),
            ));
        }

        let member = self
            .member_store
            .find_by_id(submission.member_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Member not found",
                    json!({ "member_id": submission.member_id }),
                )
            })?;

        let full_itinerary = self
            .full_itinerary_store
            .find_by_id(submission.full_itinerary_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Full itinerary not found",
                    json!({ "full_itinerary_id": submission.full_itinerary_id }),
                )
            })?;

        let categories = self
            .category_store
            .resolve(
                &submission.broad_category_ids(),
                &submission.mid_category_ids(),
            )
            .await?;

        let existing_places = self
            .place_store
            .find_by_external_ids(&submission.external_place_ids())
            .await?;

        let places = assembly::dedup_places(&submission.blocks, existing_places, &categories)
            .map_err(map_assembly_error)?;
        let blocks = assembly::plan_blocks(&submission.blocks, &categories, &places)
            .map_err(map_assembly_error)?;

        let plan = DailyItineraryPlan {
            member_id: member.member_id,
            full_itinerary_id: full_itinerary.full_itinerary_id,
            day_number: submission.day_number,
            blocks,
            places,
        };

        let daily_itinerary_id = self.itinerary_store.create_daily(plan).await?;

        tracing::info!(
            daily_itinerary_id,
            member_id = member.member_id,
            full_itinerary_id = full_itinerary.full_itinerary_id,
            day_number = submission.day_number,
            "daily itinerary created"
        );

        Ok(daily_itinerary_id)
    }

    /// Fetches a daily itinerary with its blocks ordered by position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no daily itinerary matches the id.
    pub async fn get_daily_itinerary(
        &self,
        daily_itinerary_id: i64,
    ) -> Result<(DailyItinerary, Vec<ItineraryBlock>), AppError> {
        let daily = self
            .itinerary_store
            .find_daily(daily_itinerary_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Daily itinerary not found",
                    json!({ "daily_itinerary_id": daily_itinerary_id }),
                )
            })?;

        let blocks = self.itinerary_store.list_blocks(daily_itinerary_id).await?;

        Ok((daily, blocks))
    }
}

fn map_assembly_error(e: AssemblyError) -> AppError {
    match e {
        AssemblyError::MidCategoryNotFound(id) => {
            AppError::not_found("Mid category not found", json!({ "mid_category_id": id }))
        }
        AssemblyError::BroadCategoryNotFound(id) => AppError::not_found(
            "Broad category not found",
            json!({ "broad_category_id": id }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assembly::{BlockDraft, CategoryLookup, PlaceDraft};
    use crate::domain::entities::{BroadCategory, FullItinerary, Member, MidCategory, Place};
    use crate::domain::repositories::{
        MockCategoryStore, MockFullItineraryStore, MockItineraryStore, MockMemberStore,
        MockPlaceStore,
    };
    use chrono::Utc;

    fn test_member(id: i64) -> Member {
        Member::new(id, format!("m{id}@example.com"), "traveler".to_string(), true)
    }

    fn test_full(id: i64, member_id: i64) -> FullItinerary {
        FullItinerary::new(id, member_id, "Seoul trip".to_string(), Utc::now())
    }

    fn draft(broad_id: i64, mid_id: i64, external_id: &str) -> BlockDraft {
        BlockDraft {
            broad_category_id: broad_id,
            mid_category_id: mid_id,
            place: PlaceDraft {
                external_id: external_id.to_string(),
                map_x: 127.0,
                map_y: 37.5,
            },
        }
    }

    fn submission(blocks: Vec<BlockDraft>) -> DailySubmission {
        DailySubmission {
            member_id: 1,
            full_itinerary_id: 2,
            day_number: 3,
            blocks,
        }
    }

    fn categories(broad_ids: &[i64], mid_ids: &[i64]) -> CategoryLookup {
        CategoryLookup {
            broad: broad_ids
                .iter()
                .map(|&id| (id, BroadCategory::new(id, format!("broad-{id}"))))
                .collect(),
            mid: mid_ids
                .iter()
                .map(|&id| {
                    (
                        id,
                        MidCategory::new(id, 1, format!("CODE{id}"), format!("mid-{id}")),
                    )
                })
                .collect(),
        }
    }

    struct Mocks {
        category: MockCategoryStore,
        place: MockPlaceStore,
        itinerary: MockItineraryStore,
        full: MockFullItineraryStore,
        member: MockMemberStore,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                category: MockCategoryStore::new(),
                place: MockPlaceStore::new(),
                itinerary: MockItineraryStore::new(),
                full: MockFullItineraryStore::new(),
                member: MockMemberStore::new(),
            }
        }

        fn with_valid_gates(mut self) -> Self {
            self.member
                .expect_find_by_id()
                .returning(|id| Ok(Some(test_member(id))));
            self.full
                .expect_find_by_id()
                .returning(|id| Ok(Some(test_full(id, 1))));
            self
        }

        fn into_service(
            self,
        ) -> ItineraryService<
            MockCategoryStore,
            MockPlaceStore,
            MockItineraryStore,
            MockFullItineraryStore,
            MockMemberStore,
        > {
            ItineraryService::new(
                Arc::new(self.category),
                Arc::new(self.place),
                Arc::new(self.itinerary),
                Arc::new(self.full),
                Arc::new(self.member),
            )
        }
    }

    #[tokio::test]
    async fn test_empty_submission_rejected_before_any_lookup() {
        let mut mocks = Mocks::new();
        mocks.member.expect_find_by_id().times(0);
        mocks.category.expect_resolve().times(0);
        mocks.itinerary.expect_create_daily().times(0);

        let result = mocks.into_service().create_daily_itinerary(submission(vec![])).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_missing_member_is_fatal() {
        let mut mocks = Mocks::new();
        mocks.member.expect_find_by_id().returning(|_| Ok(None));
        mocks.itinerary.expect_create_daily().times(0);

        let result = mocks
            .into_service()
            .create_daily_itinerary(submission(vec![draft(1, 10, "P1")]))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_full_itinerary_is_fatal() {
        let mut mocks = Mocks::new();
        mocks
            .member
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_member(id))));
        mocks.full.expect_find_by_id().returning(|_| Ok(None));
        mocks.itinerary.expect_create_daily().times(0);

        let result = mocks
            .into_service()
            .create_daily_itinerary(submission(vec![draft(1, 10, "P1")]))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_unresolved_mid_category_yields_not_found_and_no_writes() {
        let mut mocks = Mocks::new().with_valid_gates();
        mocks
            .category
            .expect_resolve()
            .returning(|_, _| Ok(categories(&[1], &[])));
        mocks
            .place
            .expect_find_by_external_ids()
            .returning(|_| Ok(vec![]));
        mocks.itinerary.expect_create_daily().times(0);

        let result = mocks
            .into_service()
            .create_daily_itinerary(submission(vec![draft(1, 10, "P1")]))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_unresolved_broad_on_last_block_persists_nothing() {
        let mut mocks = Mocks::new().with_valid_gates();
        mocks
            .category
            .expect_resolve()
            .returning(|_, _| Ok(categories(&[1], &[10])));
        mocks
            .place
            .expect_find_by_external_ids()
            .returning(|_| Ok(vec![]));
        mocks.itinerary.expect_create_daily().times(0);

        let blocks = vec![draft(1, 10, "P1"), draft(1, 10, "P2"), draft(42, 10, "P3")];
        let result = mocks
            .into_service()
            .create_daily_itinerary(submission(blocks))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_scenario_p1_p2_p1() {
        // 3 blocks referencing P1, P2, P1; both new. Expect one plan with
        // 2 canonical places, 3 ordered blocks, first and last sharing a key.
        let mut mocks = Mocks::new().with_valid_gates();
        mocks
            .category
            .expect_resolve()
            .times(1)
            .returning(|_, _| Ok(categories(&[1], &[10])));
        mocks
            .place
            .expect_find_by_external_ids()
            .times(1)
            .withf(|ids| ids.len() == 2 && ids[0] == "P1" && ids[1] == "P2")
            .returning(|_| Ok(vec![]));
        mocks
            .itinerary
            .expect_create_daily()
            .times(1)
            .withf(|plan| {
                plan.day_number == 3
                    && plan.blocks.len() == 3
                    && plan.places.len() == 2
                    && plan.blocks[0].place_key == plan.blocks[2].place_key
                    && plan.blocks.iter().map(|b| b.position).collect::<Vec<_>>() == vec![0, 1, 2]
                    && plan.occurrences()["P1"] == 2
            })
            .returning(|_| Ok(55));

        let blocks = vec![draft(1, 10, "P1"), draft(1, 10, "P2"), draft(1, 10, "P1")];
        let result = mocks
            .into_service()
            .create_daily_itinerary(submission(blocks))
            .await;

        assert_eq!(result.unwrap(), 55);
    }

    #[tokio::test]
    async fn test_existing_place_classification_takes_precedence() {
        let mut mocks = Mocks::new().with_valid_gates();
        mocks
            .category
            .expect_resolve()
            .returning(|_, _| Ok(categories(&[1], &[10, 11])));
        // P1 is already stored under mid category 11, not the declared 10
        mocks
            .place
            .expect_find_by_external_ids()
            .returning(|_| Ok(vec![Place::new(9, "P1".to_string(), 1.0, 2.0, 4, 11)]));
        mocks
            .itinerary
            .expect_create_daily()
            .times(1)
            .withf(|plan| plan.blocks[0].mid_category_id == 11)
            .returning(|_| Ok(7));

        let result = mocks
            .into_service()
            .create_daily_itinerary(submission(vec![draft(1, 10, "P1")]))
            .await;

        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_get_daily_itinerary_not_found() {
        let mut mocks = Mocks::new();
        mocks.itinerary.expect_find_daily().returning(|_| Ok(None));

        let result = mocks.into_service().get_daily_itinerary(404).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
