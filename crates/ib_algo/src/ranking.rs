//! Global ranking for the closed-issue summary.
//!
//! Unlike the highlight filter, every live idea is ranked (zero-vote ideas
//! included) by `signed_diff` descending with a **stable** sort and no secondary
//! key: ties keep their input order and occupy consecutive 1-based ranks.

use std::collections::BTreeMap;

use ib_core::determinism::sort_stable_desc_by_key;
use ib_core::entities::{live_ideas, Category, Idea};
use ib_core::ids::{CategoryId, IdeaId};
use ib_core::variables::Params;

use crate::tally::tally_idea;

/// Category id → title lookup with the synthetic uncategorized bucket.
#[derive(Clone, Debug)]
pub struct CategoryIndex {
    titles: BTreeMap<CategoryId, String>,
    uncategorized_title: String,
}

impl CategoryIndex {
    /// A category carrying the reserved uncategorized id is not indexed, so
    /// the synthetic bucket always has exactly one title.
    pub fn new(categories: &[Category], uncategorized_title: impl Into<String>) -> Self {
        let titles = categories
            .iter()
            .filter(|c| !c.id.is_uncategorized())
            .map(|c| (c.id.clone(), c.title.clone()))
            .collect();
        Self {
            titles,
            uncategorized_title: uncategorized_title.into(),
        }
    }

    pub fn from_params(categories: &[Category], params: &Params) -> Self {
        Self::new(categories, params.uncategorized_title.clone())
    }

    /// Title of a known category, `None` for a missing or dangling reference.
    pub fn title_of(&self, category_ref: Option<&CategoryId>) -> Option<&str> {
        category_ref.and_then(|id| self.titles.get(id)).map(String::as_str)
    }

    /// Resolve a reference to `(bucket id, title)`; anything unknown lands in
    /// the uncategorized bucket.
    pub fn resolve(&self, category_ref: Option<&CategoryId>) -> (CategoryId, &str) {
        match category_ref.and_then(|id| self.titles.get_key_value(id)) {
            Some((id, title)) => (id.clone(), title.as_str()),
            None => (CategoryId::uncategorized(), self.uncategorized_title.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankedIdea {
    pub id: IdeaId,
    pub content: String,
    pub author: String,
    /// Resolved bucket id (`"uncategorized"` when the idea has no known category).
    pub category_id: CategoryId,
    pub category_title: String,
    pub agree_count: u64,
    pub disagree_count: u64,
    /// 1-based position; ties do not share a rank.
    pub rank: u32,
    pub is_selected: bool,
}

impl RankedIdea {
    #[inline]
    pub fn score(&self) -> i64 {
        self.agree_count as i64 - self.disagree_count as i64
    }
}

/// Rank every live idea by score.
pub fn rank_all(ideas: &[Idea], categories: &CategoryIndex) -> Vec<RankedIdea> {
    let mut scored: Vec<(&Idea, i64)> = live_ideas(ideas)
        .map(|i| (i, tally_idea(i).signed_diff))
        .collect();
    sort_stable_desc_by_key(&mut scored, |(_, score)| *score);

    let ranked: Vec<RankedIdea> = scored
        .into_iter()
        .enumerate()
        .map(|(idx, (idea, _))| to_ranked(idea, idx as u32 + 1, categories))
        .collect();
    log::debug!("rank_all ideas={} ranked={}", ideas.len(), ranked.len());
    ranked
}

fn to_ranked(idea: &Idea, rank: u32, categories: &CategoryIndex) -> RankedIdea {
    let tally = tally_idea(idea);
    let (category_id, category_title) = categories.resolve(idea.category_ref.as_ref());
    RankedIdea {
        id: idea.id.clone(),
        content: idea.content.clone(),
        author: idea.author_display_name.clone(),
        category_id,
        category_title: category_title.to_owned(),
        agree_count: tally.agree,
        disagree_count: tally.disagree,
        rank,
        is_selected: idea.is_selected,
    }
}
