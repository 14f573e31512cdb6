//! Top-k selection.
//!
//! Items are ordered by score descending; equal scores fall back to the
//! caller's tie-break, ascending. The result is a prefix of that ordering.

use std::cmp::Ordering;

/// Convert a caller-facing `k` into a result length. Non-positive means empty.
#[must_use]
pub fn clamp_k(k: i64) -> usize {
    usize::try_from(k).unwrap_or(0)
}

/// The `k` highest-scoring items.
///
/// `score` is evaluated once per item. When `k` exceeds the number of items,
/// every item is returned, still ranked.
pub fn top_k<T, S, F, B>(
    items: impl IntoIterator<Item = T>,
    k: usize,
    mut score: F,
    mut tie_break: B,
) -> Vec<T>
where
    S: Ord,
    F: FnMut(&T) -> S,
    B: FnMut(&T, &T) -> Ordering,
{
    if k == 0 {
        return Vec::new();
    }
    let mut scored: Vec<(S, T)> = items.into_iter().map(|item| (score(&item), item)).collect();
    scored.sort_by(|(sa, a), (sb, b)| sb.cmp(sa).then_with(|| tie_break(a, b)));
    scored.truncate(k);
    scored.into_iter().map(|(_, item)| item).collect()
}

/// The first `k` items under a full comparator.
pub fn top_k_by<T>(
    items: impl IntoIterator<Item = T>,
    k: usize,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    let mut all: Vec<T> = items.into_iter().collect();
    all.sort_by(|a, b| cmp(a, b));
    all.truncate(k);
    all
}
