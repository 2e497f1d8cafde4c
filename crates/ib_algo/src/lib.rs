// crates/ib_algo/src/lib.rs
#![forbid(unsafe_code)]

//! Vote aggregation, highlight filtering, and ranking for issue ideas.
//!
//! Data flow: raw votes → `tally` → `score` → { `filter` (live highlight /
//! server query), `ranking` → `grouping` (closed-issue summary) }.
//! All functions are pure and total; callers pass an explicit snapshot.

pub mod filter;
pub mod grouping;
pub mod ranking;
pub mod score;
pub mod tally;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use filter::{filter_ideas, Highlight};
pub use grouping::{group_by_category, CategoryRanking};
pub use ranking::{rank_all, CategoryIndex, RankedIdea};
pub use score::{cmp_popularity, contested_ratio, is_contested};
pub use tally::{tally_idea, VoteTally};
