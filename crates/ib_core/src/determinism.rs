//! Determinism utilities: stable ordering helpers.
//!
//! Every ordering in the engine is a **stable** sort over the caller's input
//! order, so equal keys never reorder between runs or call sites.

use core::cmp::Ordering;

/// Reverse an ascending key comparison.
#[inline]
pub fn desc<K: Ord>(a: K, b: K) -> Ordering {
    b.cmp(&a)
}

/// Stable in-place sort by a descending key. Ties keep their input order.
#[inline]
pub fn sort_stable_desc_by_key<T, K: Ord, F: FnMut(&T) -> K>(xs: &mut [T], mut key: F) {
    xs.sort_by(|a, b| desc(key(a), key(b)));
}

/// Stable in-place sort with an arbitrary comparator. Ties keep their input order.
#[inline]
pub fn sort_stable_by<T, F: FnMut(&T, &T) -> Ordering>(xs: &mut [T], cmp: F) {
    // `slice::sort_by` is a stable merge sort; `sort_unstable_by` must never be used here.
    xs.sort_by(cmp);
}

/* ---------------------------------- Tests --------------------------------- */
