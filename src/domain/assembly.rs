//! Course-assembly core: deduplicates place references and plans the ordered
//! block list for one daily-itinerary submission.
//!
//! Everything here is pure. The functions consume bulk-lookup results and
//! produce a [`DailyItineraryPlan`]; no store is touched until the plan is
//! handed to the persistence layer, which writes it in one transaction.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::domain::entities::{BroadCategory, MidCategory, NewPlace, Place};

/// Failure while resolving submission references against lookup results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("MidCategory not found (id: {0})")]
    MidCategoryNotFound(i64),
    #[error("BroadCategory not found (id: {0})")]
    BroadCategoryNotFound(i64),
}

/// One submitted stop, as received from the client.
#[derive(Debug, Clone)]
pub struct BlockDraft {
    pub broad_category_id: i64,
    pub mid_category_id: i64,
    pub place: PlaceDraft,
}

/// Place payload carried by a block draft.
#[derive(Debug, Clone)]
pub struct PlaceDraft {
    pub external_id: String,
    pub map_x: f64,
    pub map_y: f64,
}

/// A complete daily submission, independent of transport shape.
#[derive(Debug, Clone)]
pub struct DailySubmission {
    pub member_id: i64,
    pub full_itinerary_id: i64,
    pub day_number: i32,
    pub blocks: Vec<BlockDraft>,
}

impl DailySubmission {
    /// Broad category ids referenced by the blocks, deduplicated.
    pub fn broad_category_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.blocks.iter().map(|b| b.broad_category_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Mid category ids referenced by the blocks, deduplicated.
    pub fn mid_category_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.blocks.iter().map(|b| b.mid_category_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// External place ids referenced by the blocks, deduplicated, first
    /// occurrence order preserved.
    pub fn external_place_ids(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ids = Vec::new();
        for block in &self.blocks {
            let key = block.place.external_id.as_str();
            if seen.insert(key) {
                ids.push(key.to_string());
            }
        }
        ids
    }
}

/// Bulk category resolution result, keyed by identifier.
///
/// A miss is an absent entry, never an error; the assembly stage decides
/// whether a miss is fatal.
#[derive(Debug, Default)]
pub struct CategoryLookup {
    pub broad: HashMap<i64, BroadCategory>,
    pub mid: HashMap<i64, MidCategory>,
}

/// The single canonical instance of a place within one submission.
#[derive(Debug, Clone)]
pub enum CanonicalPlace {
    /// Already stored; incoming coordinates are ignored (first-write-wins).
    Existing(Place),
    /// Materialized from the incoming payload, persisted with the plan.
    New(NewPlace),
}

impl CanonicalPlace {
    pub fn external_id(&self) -> &str {
        match self {
            CanonicalPlace::Existing(p) => &p.external_id,
            CanonicalPlace::New(p) => &p.external_id,
        }
    }

    /// The place's actual classification, which takes precedence over the
    /// block's declared mid category.
    pub fn mid_category_id(&self) -> i64 {
        match self {
            CanonicalPlace::Existing(p) => p.mid_category_id,
            CanonicalPlace::New(p) => p.mid_category_id,
        }
    }
}

/// One planned block, positionally ordered, referencing its canonical place
/// by external id until the persistence layer assigns row ids.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedBlock {
    pub position: i32,
    pub broad_category_id: i64,
    pub mid_category_id: i64,
    pub place_key: String,
}

/// Everything the persistence orchestrator needs to commit one daily
/// itinerary atomically.
#[derive(Debug, Clone)]
pub struct DailyItineraryPlan {
    pub member_id: i64,
    pub full_itinerary_id: i64,
    pub day_number: i32,
    pub blocks: Vec<PlannedBlock>,
    pub places: HashMap<String, CanonicalPlace>,
}

impl DailyItineraryPlan {
    /// Number of blocks referencing each place, used for reference-counter
    /// bumps.
    pub fn occurrences(&self) -> HashMap<&str, i32> {
        let mut counts: HashMap<&str, i32> = HashMap::new();
        for block in &self.blocks {
            *counts.entry(block.place_key.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Builds the external-id → canonical-place map for a submission.
///
/// Existing stored places win over incoming payloads. For unknown ids a
/// [`NewPlace`] is materialized once and reused by every later occurrence of
/// the same id, so N references within one submission yield one instance.
///
/// Fails when a new place must be created but its declared mid category was
/// not resolved. An unresolved mid on a block whose place already exists is
/// not an error; the stored classification is authoritative.
pub fn dedup_places(
    blocks: &[BlockDraft],
    existing: Vec<Place>,
    categories: &CategoryLookup,
) -> Result<HashMap<String, CanonicalPlace>, AssemblyError> {
    let mut map: HashMap<String, CanonicalPlace> = existing
        .into_iter()
        .map(|p| (p.external_id.clone(), CanonicalPlace::Existing(p)))
        .collect();

    for block in blocks {
        let key = &block.place.external_id;
        if map.contains_key(key) {
            continue;
        }

        let mid = categories
            .mid
            .get(&block.mid_category_id)
            .ok_or(AssemblyError::MidCategoryNotFound(block.mid_category_id))?;

        map.insert(
            key.clone(),
            CanonicalPlace::New(NewPlace {
                external_id: key.clone(),
                map_x: block.place.map_x,
                map_y: block.place.map_y,
                mid_category_id: mid.mid_category_id,
            }),
        );
    }

    Ok(map)
}

/// Plans the ordered block list from resolved categories and canonical places.
///
/// Output order matches submission order. Each planned block composes the
/// resolved broad category, the canonical place's owning mid category, and
/// the place itself.
pub fn plan_blocks(
    blocks: &[BlockDraft],
    categories: &CategoryLookup,
    places: &HashMap<String, CanonicalPlace>,
) -> Result<Vec<PlannedBlock>, AssemblyError> {
    let mut planned = Vec::with_capacity(blocks.len());

    for (position, block) in blocks.iter().enumerate() {
        let broad = categories
            .broad
            .get(&block.broad_category_id)
            .ok_or(AssemblyError::BroadCategoryNotFound(block.broad_category_id))?;

        // dedup_places guarantees an entry per referenced external id
        let place = places
            .get(&block.place.external_id)
            .ok_or(AssemblyError::MidCategoryNotFound(block.mid_category_id))?;

        planned.push(PlannedBlock {
            position: position as i32,
            broad_category_id: broad.broad_category_id,
            mid_category_id: place.mid_category_id(),
            place_key: block.place.external_id.clone(),
        });
    }

    Ok(planned)
}
