//! Occurrence tagging for multiset-style set operations
//!
//! Set algebra over arrays with duplicate values (union, intersection,
//! difference) is only well defined when equal values can be told apart.
//! [`identify`] sorts a sequence and pairs each value with its occurrence
//! index among equal values; [`generalize`] strips the indices again.
//!
//! ```
//! use tenrso_ragged::{generalize, identify, nested, Identified};
//!
//! let tagged = identify(&nested!([2, 1, 2])).unwrap();
//! assert_eq!(
//!     tagged,
//!     nested!([
//!         (Identified::new(1, 0)),
//!         (Identified::new(2, 0)),
//!         (Identified::new(2, 1))
//!     ])
//! );
//! assert_eq!(generalize(&tagged).unwrap(), nested!([1, 2, 2]));
//! ```

use crate::error::RaggedResult;
use crate::sequence::flat_scalars;
use crate::types::{Identified, Nested};
use std::cmp::Ordering;

/// Sort a rank-1 sequence ascending and tag every element with its
/// occurrence index.
///
/// The identifier is the zero-based rank of an element among the equal
/// elements before it in sorted order, so `[v, v, v]` becomes
/// `[(v, 0), (v, 1), (v, 2)]` and the count restarts whenever the value
/// changes. Values that are incomparable even with themselves (`NaN`) are
/// placed last, each with identifier 0.
///
/// # Errors
///
/// - [`RaggedError::InvalidArgument`](crate::RaggedError::InvalidArgument)
///   when `value` is a scalar
/// - [`RaggedError::Dimension`](crate::RaggedError::Dimension) when an
///   element is itself a sequence
pub fn identify<T>(value: &Nested<T>) -> RaggedResult<Nested<Identified<T>>>
where
    T: Clone + PartialOrd,
{
    let (mut sorted, incomparable): (Vec<&T>, Vec<&T>) = flat_scalars(value, "identify")?
        .partition(|item| item.partial_cmp(item).is_some());
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted.extend(incomparable);

    let mut identified = Vec::with_capacity(sorted.len());
    let mut previous: Option<&T> = None;
    let mut identifier = 0;
    let mut groups = 0;
    for item in sorted {
        identifier = match previous {
            Some(prev) if prev == item => identifier + 1,
            _ => {
                groups += 1;
                0
            }
        };
        identified.push(Nested::Scalar(Identified::new(item.clone(), identifier)));
        previous = Some(item);
    }

    log::trace!(
        "identify: tagged {} elements in {} distinct groups",
        identified.len(),
        groups
    );
    Ok(Nested::Seq(identified))
}

/// Drop the occurrence indices from an identified sequence, keeping order.
///
/// # Errors
///
/// Same conditions as [`identify`].
pub fn generalize<T: Clone>(value: &Nested<Identified<T>>) -> RaggedResult<Nested<T>> {
    Ok(flat_scalars(value, "generalize")?
        .map(|item| item.value.clone())
        .collect())
}
