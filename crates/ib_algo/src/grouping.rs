//! Category buckets over an already-ranked list.
//!
//! Buckets appear in the order their first idea appears in the global ranking,
//! and each bucket keeps the global relative order. Empty categories are not
//! emitted.

use std::collections::BTreeMap;

use ib_core::ids::CategoryId;

use crate::ranking::RankedIdea;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CategoryRanking {
    pub category_id: CategoryId,
    pub category_title: String,
    pub ideas: Vec<RankedIdea>,
}

/// Partition `ranked` by resolved category id.
pub fn group_by_category(ranked: &[RankedIdea]) -> Vec<CategoryRanking> {
    let mut buckets: Vec<CategoryRanking> = Vec::new();
    let mut slot: BTreeMap<&CategoryId, usize> = BTreeMap::new();

    for idea in ranked {
        let idx = *slot.entry(&idea.category_id).or_insert_with(|| {
            buckets.push(CategoryRanking {
                category_id: idea.category_id.clone(),
                category_title: idea.category_title.clone(),
                ideas: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[idx].ideas.push(idea.clone());
    }
    log::debug!("group_by_category ideas={} buckets={}", ranked.len(), buckets.len());
    buckets
}
