//! Highlight filter (deterministic, integers-only).
//!
//! Inputs:
//! - `ideas`: the issue's ideas in their input (board) order
//! - `mode`: `most-liked` | `need-discussion` | `none`
//! - `params`: highlight limit (top-N) and contested threshold
//!
//! Output:
//! - `Highlight { mode, ids }` with ids in qualification order.
//!
//! Rules in this layer:
//! - `none` never computes anything and always yields the empty set.
//! - `most-liked`: ideas with votes, Popularity order, top-N, then co-rank
//!   extension for ideas past the cutoff whose `agree` equals the cutoff's
//!   `agree` AND whose `signed_diff >=` the cutoff's.
//! - `need-discussion`: contested ideas only, `agree` descending, top-N, then
//!   co-rank extension on `agree` equality alone.
//! - Soft-deleted ideas are never candidates.
//!
//! Both sorts are stable: equal keys keep the caller's input order.

use std::collections::BTreeSet;

use ib_core::determinism::{sort_stable_by, sort_stable_desc_by_key};
use ib_core::entities::{live_ideas, Idea};
use ib_core::ids::IdeaId;
use ib_core::variables::{FilterMode, Params};

use crate::score::{cmp_popularity, is_contested};
use crate::tally::{tally_idea, VoteTally};

/// Ideas matching a filter mode, in qualification order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Highlight {
    pub mode: FilterMode,
    pub idea_ids: Vec<IdeaId>,
}

impl Highlight {
    pub fn empty(mode: FilterMode) -> Self {
        Self { mode, idea_ids: Vec::new() }
    }

    pub fn ids(&self) -> &[IdeaId] {
        &self.idea_ids
    }

    pub fn contains(&self, id: &IdeaId) -> bool {
        self.idea_ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.idea_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idea_ids.is_empty()
    }

    pub fn to_set(&self) -> BTreeSet<IdeaId> {
        self.idea_ids.iter().cloned().collect()
    }
}

#[derive(Clone, Copy)]
struct Candidate<'a> {
    id: &'a IdeaId,
    tally: VoteTally,
}

/// Apply `mode` to `ideas`.
pub fn filter_ideas(ideas: &[Idea], mode: FilterMode, params: &Params) -> Highlight {
    let limit = usize::from(params.highlight_limit);
    let idea_ids = match mode {
        FilterMode::None => return Highlight::empty(mode),
        FilterMode::MostLiked => most_liked(ideas, limit),
        FilterMode::NeedDiscussion => need_discussion(ideas, limit, params),
    };
    log::debug!(
        "filter mode={mode} ideas={} limit={limit} selected={}",
        ideas.len(),
        idea_ids.len()
    );
    Highlight { mode, idea_ids }
}

fn most_liked(ideas: &[Idea], limit: usize) -> Vec<IdeaId> {
    let mut sorted = candidates(ideas, VoteTally::has_votes);
    sort_stable_by(&mut sorted, |a, b| cmp_popularity(&a.tally, &b.tally));
    take_with_co_rank(&sorted, limit, |cut, t| {
        t.agree == cut.agree && t.signed_diff >= cut.signed_diff
    })
}

fn need_discussion(ideas: &[Idea], limit: usize, params: &Params) -> Vec<IdeaId> {
    let max_pct = params.contested_max_pct;
    let mut sorted = candidates(ideas, |t| is_contested(t, max_pct));
    sort_stable_desc_by_key(&mut sorted, |c| c.tally.agree);
    take_with_co_rank(&sorted, limit, |cut, t| t.agree == cut.agree)
}

fn candidates<'a, F>(ideas: &'a [Idea], keep: F) -> Vec<Candidate<'a>>
where
    F: Fn(&VoteTally) -> bool,
{
    live_ideas(ideas)
        .map(|i| Candidate {
            id: &i.id,
            tally: tally_idea(i),
        })
        .filter(|c| keep(&c.tally))
        .collect()
}

/// First `min(limit, n)` entries, plus every later entry `tied` with the entry
/// at the cutoff (index `limit - 1`).
fn take_with_co_rank<F>(sorted: &[Candidate<'_>], limit: usize, tied: F) -> Vec<IdeaId>
where
    F: Fn(&VoteTally, &VoteTally) -> bool,
{
    let limit = limit.min(sorted.len());
    if limit == 0 {
        return Vec::new();
    }
    let cutoff = sorted[limit - 1].tally;
    let (head, tail) = sorted.split_at(limit);
    let extended = tail.iter().filter(|c| tied(&cutoff, &c.tally));
    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "co-rank cutoff agree={} score={} extended={}",
            cutoff.agree,
            cutoff.signed_diff,
            extended.clone().count()
        );
    }
    head.iter().chain(extended).map(|c| c.id.clone()).collect()
}
