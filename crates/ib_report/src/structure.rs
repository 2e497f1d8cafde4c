//! crates/ib_report/src/structure.rs
//! Closed-issue summary model and the pure builder that maps a snapshot onto it.
//! No I/O, no floats. Deterministic ordering only.

use serde::Serialize;

use ib_algo::{group_by_category, rank_all, CategoryIndex, CategoryRanking, RankedIdea};
use ib_core::entities::{Idea, IssueSnapshot};
use ib_core::ids::IssueId;
use ib_core::variables::Params;

use crate::selected::{project_selected, SelectedIdea};
use crate::statistics::{compute_statistics, IssueStatistics};

// -------------------- Public model root & sections --------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub issue: IssueBlock,
    pub selected_idea: Option<SelectedIdea>,
    pub statistics: IssueStatistics,
    pub rankings: Rankings,
    /// Filled by callers that know the input digest.
    pub integrity: Option<IntegrityBlock>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IssueBlock {
    pub id: IssueId,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    pub all: Vec<RankedIdea>,
    pub by_category: Vec<CategoryRanking>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityBlock {
    pub snapshot_sha256: String,
    pub engine_name: String,
    pub engine_version: String,
}

// -------------------- Top-level mapping API (pure) --------------------

/// Global ranking plus its per-category partition.
pub fn build_rankings(ideas: &[Idea], categories: &CategoryIndex) -> Rankings {
    let all = rank_all(ideas, categories);
    let by_category = group_by_category(&all);
    Rankings { all, by_category }
}

/// Assemble the whole summary bundle from an explicit snapshot.
pub fn build_summary(snapshot: &IssueSnapshot, params: &Params) -> SummaryReport {
    let categories = CategoryIndex::from_params(&snapshot.categories, params);
    let report = SummaryReport {
        issue: IssueBlock {
            id: snapshot.issue.id.clone(),
            title: snapshot.issue.title.clone(),
        },
        selected_idea: project_selected(
            snapshot.selected_idea_id.as_ref(),
            &snapshot.ideas,
            &categories,
        ),
        statistics: compute_statistics(&snapshot.members, &snapshot.ideas),
        rankings: build_rankings(&snapshot.ideas, &categories),
        integrity: None,
    };
    log::debug!(
        "summary issue={} ranked={} buckets={} selected={}",
        report.issue.id,
        report.rankings.all.len(),
        report.rankings.by_category.len(),
        report.selected_idea.is_some()
    );
    report
}

impl SummaryReport {
    pub fn with_integrity(mut self, integrity: IntegrityBlock) -> Self {
        self.integrity = Some(integrity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ib_core::entities::{Category, IssueMeta, Member, Vote, VoteType};

    fn idea(id: &str, agree: usize, disagree: usize, cat: Option<&str>, comments: u32) -> Idea {
        let mut i = Idea::new(id.parse().unwrap(), format!("idea {id}"), "author");
        i.category_ref = cat.map(|c| c.parse().unwrap());
        i.comment_count = comments;
        let types = std::iter::repeat(VoteType::Agree)
            .take(agree)
            .chain(std::iter::repeat(VoteType::Disagree).take(disagree));
        for (n, t) in types.enumerate() {
            i.votes.push(Vote {
                id: format!("{id}-{n}").parse().unwrap(),
                idea_id: i.id.clone(),
                voter_id: format!("u{n}").parse().unwrap(),
                vote_type: t,
            });
        }
        i
    }

    fn snapshot() -> IssueSnapshot {
        IssueSnapshot {
            issue: IssueMeta {
                id: "issue-1".parse().unwrap(),
                title: "Park redesign".into(),
            },
            ideas: vec![
                idea("i1", 1, 0, Some("c1"), 2),
                idea("i2", 1, 0, Some("c1"), 5),
                idea("i3", 0, 1, Some("c2"), 1),
            ],
            categories: vec![
                Category {
                    id: "c1".parse().unwrap(),
                    title: "Category 1".into(),
                },
                Category {
                    id: "c2".parse().unwrap(),
                    title: "Category 2".into(),
                },
            ],
            members: vec![
                Member {
                    id: "m1".parse().unwrap(),
                    display_name: "ann".into(),
                    deleted: false,
                },
                Member {
                    id: "m2".parse().unwrap(),
                    display_name: "bob".into(),
                    deleted: false,
                },
            ],
            selected_idea_id: Some("i2".parse().unwrap()),
        }
    }

    #[test]
    fn builds_every_section() {
        let r = build_summary(&snapshot(), &Params::default());
        assert_eq!(r.issue.title, "Park redesign");
        assert_eq!(
            r.statistics,
            IssueStatistics {
                total_participants: 2,
                total_votes: 3,
                max_comment_count: 5,
            }
        );
        let sel = r.selected_idea.as_ref().unwrap();
        assert_eq!(
            (sel.id.as_str(), sel.vote_count, sel.category.as_deref()),
            ("i2", 1, Some("Category 1"))
        );

        let all: Vec<&str> = r.rankings.all.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(all, vec!["i1", "i2", "i3"]);
        let buckets: Vec<(&str, usize)> = r
            .rankings
            .by_category
            .iter()
            .map(|b| (b.category_title.as_str(), b.ideas.len()))
            .collect();
        assert_eq!(buckets, vec![("Category 1", 2), ("Category 2", 1)]);
        assert!(r.integrity.is_none());
    }

    #[test]
    fn empty_issue_is_all_zero() {
        let mut s = snapshot();
        s.ideas.clear();
        let r = build_summary(&s, &Params::default());
        assert!(r.rankings.all.is_empty());
        assert!(r.rankings.by_category.is_empty());
        assert!(r.selected_idea.is_none());
        assert_eq!(r.statistics.total_participants, 2);
        assert_eq!(r.statistics.max_comment_count, 0);
    }

    #[test]
    fn uncategorized_title_comes_from_params() {
        let mut s = snapshot();
        for i in &mut s.ideas {
            i.category_ref = None;
        }
        let p = Params {
            uncategorized_title: "Uncategorized".into(),
            ..Params::default()
        };
        let r = build_summary(&s, &p);
        assert_eq!(r.rankings.by_category.len(), 1);
        assert_eq!(r.rankings.by_category[0].category_title, "Uncategorized");
        assert_eq!(r.rankings.by_category[0].category_id.as_str(), "uncategorized");
    }
}
