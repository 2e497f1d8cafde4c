//! Vote tally: reduce an idea's raw vote records into counts.
//!
//! Integers only. Duplicate votes are counted as given; the one-vote-per-voter
//! invariant is enforced upstream.

use ib_core::entities::{Idea, Vote, VoteType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VoteTally {
    pub agree: u64,
    pub disagree: u64,
    /// `agree + disagree`
    pub total: u64,
    /// `|agree - disagree|`
    pub diff: u64,
    /// `agree - disagree`, the score.
    pub signed_diff: i64,
}

impl VoteTally {
    pub fn from_counts(agree: u64, disagree: u64) -> Self {
        Self {
            agree,
            disagree,
            total: agree + disagree,
            diff: agree.abs_diff(disagree),
            signed_diff: agree as i64 - disagree as i64,
        }
    }

    pub fn from_votes(votes: &[Vote]) -> Self {
        let agree = votes.iter().filter(|v| v.vote_type == VoteType::Agree).count() as u64;
        let disagree = votes.len() as u64 - agree;
        Self::from_counts(agree, disagree)
    }

    #[inline]
    pub fn has_votes(&self) -> bool {
        self.total > 0
    }
}

#[inline]
pub fn tally_idea(idea: &Idea) -> VoteTally {
    VoteTally::from_votes(&idea.votes)
}
