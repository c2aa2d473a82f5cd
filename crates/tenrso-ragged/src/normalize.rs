//! Rank normalization of nested arrays: unsqueeze and flatten
//!
//! Neither operation touches leaf values, only the nesting around them.

use crate::types::{Nested, Rank};

/// Add singleton nesting until every leaf sits at depth `target_rank`.
///
/// `current_rank` is the depth at which `value` itself sits; each sequence
/// level below it adds one. A leaf found at depth `d < target_rank` is wrapped
/// `target_rank - d` times, so a flat array of `n` elements becomes `n`
/// singleton-nested elements rather than one array wrapped once. Leaves already
/// at or below `target_rank` are left alone.
///
/// Both ranks are taken as given, nothing is auto-detected. When
/// `target_rank <= current_rank` the value is returned unchanged; empty
/// sequences stay empty.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{nested, unsqueeze, Nested};
///
/// assert_eq!(unsqueeze(nested!([1, 2, 3]), 2, 0), nested!([[1], [2], [3]]));
/// assert_eq!(unsqueeze(Nested::Scalar(1), 3, 0), nested!([[[1]]]));
/// assert_eq!(unsqueeze(nested!([[1, 2]]), 2, 0), nested!([[1, 2]]));
/// assert_eq!(unsqueeze(Nested::<i32>::empty(), 3, 0), Nested::empty());
/// ```
pub fn unsqueeze<T>(value: Nested<T>, target_rank: Rank, current_rank: Rank) -> Nested<T> {
    if current_rank > target_rank {
        log::debug!(
            "unsqueeze: current rank {} exceeds target rank {}, returning input unchanged",
            current_rank,
            target_rank
        );
        return value;
    }
    unsqueeze_at(value, target_rank, current_rank)
}

fn unsqueeze_at<T>(mut value: Nested<T>, target_rank: Rank, depth: Rank) -> Nested<T> {
    // Nothing below this depth can need wrapping.
    if depth >= target_rank {
        return value;
    }
    if let Nested::Seq(items) = &mut value {
        return Nested::Seq(
            std::mem::take(items)
                .into_iter()
                .map(|item| unsqueeze_at(item, target_rank, depth + 1))
                .collect(),
        );
    }
    (depth..target_rank).fold(value, |wrapped, _| Nested::Seq(vec![wrapped]))
}

/// Collapse all nesting into a single flat sequence of leaves.
///
/// Leaves are emitted in left-to-right, depth-first order and empty
/// sequences at any level contribute nothing. A scalar is returned as the
/// scalar itself, not wrapped in a sequence.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{flatten, nested, Nested};
///
/// assert_eq!(flatten(&nested!([1, [2, [3, [4]]]])), nested!([1, 2, 3, 4]));
/// assert_eq!(flatten(&nested!([1, [], 3])), nested!([1, 3]));
/// assert_eq!(flatten(&Nested::Scalar(1)), Nested::Scalar(1));
/// ```
pub fn flatten<T: Clone>(value: &Nested<T>) -> Nested<T> {
    match value {
        Nested::Scalar(_) => value.clone(),
        Nested::Seq(_) => value.leaves().cloned().collect(),
    }
}
