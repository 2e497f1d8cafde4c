//! Issue statistics: purely additive / extremal aggregation.

use serde::Serialize;

use ib_algo::tally_idea;
use ib_core::entities::{live_ideas, Idea, Member};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStatistics {
    pub total_participants: u64,
    pub total_votes: u64,
    pub max_comment_count: u32,
}

/// Participants = live members; votes and comment maximum over live ideas.
pub fn compute_statistics(members: &[Member], ideas: &[Idea]) -> IssueStatistics {
    IssueStatistics {
        total_participants: members.iter().filter(|m| !m.deleted).count() as u64,
        total_votes: live_ideas(ideas).map(|i| tally_idea(i).total).sum(),
        max_comment_count: live_ideas(ideas)
            .map(|i| i.comment_count)
            .max()
            .unwrap_or(0),
    }
}
