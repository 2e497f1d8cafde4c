//! Issue entities as supplied by the persistence layer.
//!
//! The engine never mutates these; every derived view (tallies, highlights,
//! rankings, statistics) is recomputed from an `IssueSnapshot` on each call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, IdeaId, IssueId, MemberId, VoteId, VoterId};

/// A single voter's stance on an idea. Counted, never weighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VoteType {
    #[cfg_attr(feature = "serde", serde(rename = "AGREE"))]
    Agree,
    #[cfg_attr(feature = "serde", serde(rename = "DISAGREE"))]
    Disagree,
}

/// One active vote. Upstream guarantees at most one per `(idea_id, voter_id)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Vote {
    pub id: VoteId,
    pub idea_id: IdeaId,
    pub voter_id: VoterId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub vote_type: VoteType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Idea {
    pub id: IdeaId,
    pub content: String,
    pub author_display_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category_ref: Option<CategoryId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub votes: Vec<Vote>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_selected: bool,
    /// Soft-deleted ideas stay in storage but are excluded from all aggregation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub deleted: bool,
}

impl Idea {
    /// Bare idea with no votes, comments, or category.
    pub fn new(id: IdeaId, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            author_display_name: author.into(),
            category_ref: None,
            votes: Vec::new(),
            comment_count: 0,
            is_selected: false,
            deleted: false,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Member {
    pub id: MemberId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub deleted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IssueMeta {
    pub id: IssueId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
}

/// Explicit input snapshot for every engine entry point (no ambient state).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IssueSnapshot {
    pub issue: IssueMeta,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ideas: Vec<Idea>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<Category>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<Member>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub selected_idea_id: Option<IdeaId>,
}

/// Non-deleted ideas in input order.
pub fn live_ideas(ideas: &[Idea]) -> impl Iterator<Item = &Idea> + '_ {
    ideas.iter().filter(|i| i.is_live())
}

impl IssueSnapshot {
    pub fn live_ideas(&self) -> impl Iterator<Item = &Idea> + '_ {
        live_ideas(&self.ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iid(s: &str) -> IdeaId {
        s.parse().unwrap()
    }

    #[test]
    fn live_ideas_skips_soft_deleted() {
        let mut gone = Idea::new(iid("i2"), "b", "bob");
        gone.deleted = true;
        let snap = IssueSnapshot {
            issue: IssueMeta {
                id: "issue-1".parse().unwrap(),
                title: "t".into(),
            },
            ideas: vec![
                Idea::new(iid("i1"), "a", "ann"),
                gone,
                Idea::new(iid("i3"), "c", "cid"),
            ],
            categories: vec![],
            members: vec![],
            selected_idea_id: None,
        };
        let ids: Vec<&str> = snap.live_ideas().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i1", "i3"]);
        let from_slice: Vec<&str> = live_ideas(&snap.ideas).map(|i| i.id.as_str()).collect();
        assert_eq!(from_slice, ids);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_shape_is_camel_case_with_defaults() {
        let src = r#"{
            "id": "i1",
            "content": "More bike racks",
            "authorDisplayName": "ann",
            "categoryRef": null,
            "votes": [{"id": "v1", "ideaId": "i1", "voterId": "u1", "type": "AGREE"}]
        }"#;
        let idea: Idea = serde_json::from_str(src).unwrap();
        assert_eq!(idea.votes[0].vote_type, VoteType::Agree);
        assert_eq!(idea.comment_count, 0);
        assert!(!idea.is_selected);
        assert!(!idea.deleted);
        assert!(idea.category_ref.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_vote_type_is_rejected() {
        let src = r#"{"id": "v1", "ideaId": "i1", "voterId": "u1", "type": "MAYBE"}"#;
        assert!(serde_json::from_str::<Vote>(src).is_err());
    }
}
