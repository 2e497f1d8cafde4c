//! Score model: the Popularity order and the contested ratio.
//!
//! - Popularity: `signed_diff` descending, then `agree` descending.
//! - Contested: `total > 0 && diff / total <= contested_max_pct`.
//!
//! No RNG, no floats.

use core::cmp::Ordering;

use ib_core::determinism::desc;
use ib_core::rounding::{new_ratio_checked, Ratio};
use ib_core::variables::Pct;

use crate::tally::VoteTally;

/// Popularity order (most popular first). Equal tallies compare `Equal`, so a
/// stable sort keeps their input order.
pub fn cmp_popularity(a: &VoteTally, b: &VoteTally) -> Ordering {
    desc(a.signed_diff, b.signed_diff).then_with(|| desc(a.agree, b.agree))
}

/// `diff / total`, or `None` for an idea with no votes.
pub fn contested_ratio(t: &VoteTally) -> Option<Ratio> {
    new_ratio_checked(t.diff, t.total).ok()
}

/// True when votes are split within `max_pct`. Zero-vote ideas are never contested.
pub fn is_contested(t: &VoteTally, max_pct: Pct) -> bool {
    contested_ratio(t).map_or(false, |r| r.at_most_pct(max_pct))
}
