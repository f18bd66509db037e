//! Favorite/scrap toggle service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{RelationKind, RelationRecord};
use crate::domain::repositories::RelationStore;
use crate::error::AppError;

/// Implements the at-most-one-relation protocol per (member, daily itinerary)
/// pair, for both relation kinds.
///
/// The existence check and data fetch happen in one combined store round
/// trip, which narrows (but does not close) the check-then-act window under
/// concurrent toggles; the store's uniqueness constraint backstops the rest.
pub struct RelationService<R: RelationStore> {
    relation_store: Arc<R>,
}

impl<R: RelationStore> RelationService<R> {
    pub fn new(relation_store: Arc<R>) -> Self {
        Self { relation_store }
    }

    /// Marks a daily itinerary as a favorite of the member.
    ///
    /// # Errors
    ///
    /// See [`Self::set_relation`].
    pub async fn set_favorite(
        &self,
        member_id: i64,
        daily_itinerary_id: i64,
    ) -> Result<(), AppError> {
        self.set_relation(member_id, daily_itinerary_id, RelationKind::Favorite)
            .await
    }

    /// Scraps a daily itinerary for the member.
    pub async fn set_scrap(&self, member_id: i64, daily_itinerary_id: i64) -> Result<(), AppError> {
        self.set_relation(member_id, daily_itinerary_id, RelationKind::Scrap)
            .await
    }

    /// Transitions the relation of `kind` from Absent to Present.
    ///
    /// # Errors
    ///
    /// - [`AppError::BadRequest`] - member or daily itinerary cannot be
    ///   resolved, or a relation of `kind` already exists for the pair. The
    ///   duplicate rejection is terminal, not an upsert.
    /// - [`AppError::RelationCreation`] - the store failed while inserting
    ///   the record; logged with context before being raised.
    pub async fn set_relation(
        &self,
        member_id: i64,
        daily_itinerary_id: i64,
        kind: RelationKind,
    ) -> Result<(), AppError> {
        let lookup = self
            .relation_store
            .find_pair(member_id, daily_itinerary_id, kind)
            .await?;

        if lookup.member.is_none() || lookup.daily_itinerary.is_none() {
            return Err(AppError::bad_request(
                "Member or daily itinerary not found",
                json!({ "member_id": member_id, "daily_itinerary_id": daily_itinerary_id }),
            ));
        }

        if lookup.relation.is_some() {
            return Err(AppError::bad_request(
                kind.already_message(),
                json!({ "member_id": member_id, "daily_itinerary_id": daily_itinerary_id }),
            ));
        }

        match self
            .relation_store
            .insert(member_id, daily_itinerary_id, kind)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(
                    member_id,
                    daily_itinerary_id,
                    kind = kind.as_str(),
                    error = ?e,
                    "failed to save relation record"
                );
                Err(AppError::relation_creation(
                    format!("Failed to save {} record", kind.as_str()),
                    json!({ "member_id": member_id, "daily_itinerary_id": daily_itinerary_id }),
                ))
            }
        }
    }

    /// Lists the member's favorite records, newest first.
    pub async fn list_favorites(&self, member_id: i64) -> Result<Vec<RelationRecord>, AppError> {
        self.relation_store
            .list_by_member(member_id, RelationKind::Favorite)
            .await
    }

    /// Lists the member's scrap records, newest first.
    pub async fn list_scraps(&self, member_id: i64) -> Result<Vec<RelationRecord>, AppError> {
        self.relation_store
            .list_by_member(member_id, RelationKind::Scrap)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DailyItinerary, Member};
    use crate::domain::repositories::{MockRelationStore, RelationPairLookup};
    use chrono::Utc;
    use serde_json::json;

    fn pair_lookup(relation: Option<RelationRecord>) -> RelationPairLookup {
        RelationPairLookup {
            member: Some(Member::new(
                1,
                "m@example.com".to_string(),
                "traveler".to_string(),
                true,
            )),
            daily_itinerary: Some(DailyItinerary::new(5, 1, Utc::now())),
            relation,
        }
    }

    fn record(id: i64) -> RelationRecord {
        RelationRecord::new(id, 1, 5, Utc::now())
    }

    #[tokio::test]
    async fn test_set_favorite_success() {
        let mut store = MockRelationStore::new();
        store
            .expect_find_pair()
            .withf(|m, d, k| *m == 1 && *d == 5 && *k == RelationKind::Favorite)
            .times(1)
            .returning(|_, _, _| Ok(pair_lookup(None)));
        store
            .expect_insert()
            .times(1)
            .returning(|_, _, _| Ok(record(1)));

        let service = RelationService::new(Arc::new(store));
        assert!(service.set_favorite(1, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_favorite_rejected_without_insert() {
        let mut store = MockRelationStore::new();
        store
            .expect_find_pair()
            .returning(|_, _, _| Ok(pair_lookup(Some(record(1)))));
        store.expect_insert().times(0);

        let service = RelationService::new(Arc::new(store));
        let err = service.set_favorite(1, 5).await.unwrap_err();

        match err {
            AppError::BadRequest { message, .. } => {
                assert_eq!(message, "Already added to favorite");
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_double_scrap_scenario() {
        // First call: no existing record, insert succeeds. Second call: the
        // combined lookup now sees the record and rejects terminally.
        let mut store = MockRelationStore::new();
        let mut calls = 0;
        store.expect_find_pair().times(2).returning(move |_, _, _| {
            calls += 1;
            if calls == 1 {
                Ok(pair_lookup(None))
            } else {
                Ok(pair_lookup(Some(record(9))))
            }
        });
        store
            .expect_insert()
            .times(1)
            .returning(|_, _, _| Ok(record(9)));

        let service = RelationService::new(Arc::new(store));

        assert!(service.set_scrap(1, 5).await.is_ok());

        let err = service.set_scrap(1, 5).await.unwrap_err();
        match err {
            AppError::BadRequest { message, .. } => assert_eq!(message, "Already scraped"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_pair_is_bad_request() {
        let mut store = MockRelationStore::new();
        store.expect_find_pair().returning(|_, _, _| {
            Ok(RelationPairLookup {
                member: None,
                daily_itinerary: None,
                relation: None,
            })
        });
        store.expect_insert().times(0);

        let service = RelationService::new(Arc::new(store));
        let err = service.set_scrap(1, 404).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_insert_failure_surfaces_as_relation_creation() {
        let mut store = MockRelationStore::new();
        store
            .expect_find_pair()
            .returning(|_, _, _| Ok(pair_lookup(None)));
        store
            .expect_insert()
            .returning(|_, _, _| Err(AppError::internal("Database error", json!({}))));

        let service = RelationService::new(Arc::new(store));
        let err = service.set_favorite(1, 5).await.unwrap_err();
        assert!(matches!(err, AppError::RelationCreation { .. }));
    }

    #[tokio::test]
    async fn test_list_scraps_passes_kind() {
        let mut store = MockRelationStore::new();
        store
            .expect_list_by_member()
            .withf(|m, k| *m == 1 && *k == RelationKind::Scrap)
            .times(1)
            .returning(|_, _| Ok(vec![record(3)]));

        let service = RelationService::new(Arc::new(store));
        let records = service.list_scraps(1).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relation_id, 3);
    }
}
