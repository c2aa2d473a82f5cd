//! Element-wise operations over rank-1 sequences
//!
//! [`map`], [`for_each`], [`filter`] and [`filter_regexp`] only accept a flat
//! sequence of scalars:
//!
//! - a scalar input fails with [`RaggedError::InvalidArgument`]
//! - a sequence holding any sub-sequence fails with [`RaggedError::Dimension`]
//!
//! The rank check looks at the elements themselves, there is no rank field.
//! [`last`], [`initial`], [`contains`] and [`join`] are plain slice helpers.

use crate::error::{RaggedError, RaggedResult};
use crate::types::Nested;
use regex::Regex;
use std::fmt::Display;

/// Borrow the elements of a rank-1 sequence, rejecting scalars and nesting.
fn flat_elements<'a, T>(
    value: &'a Nested<T>,
    operation: &'static str,
) -> RaggedResult<&'a [Nested<T>]> {
    let items = value
        .as_seq()
        .ok_or_else(|| RaggedError::invalid_argument(operation))?;
    if items.iter().any(Nested::is_seq) {
        return Err(RaggedError::dimension(operation));
    }
    Ok(items)
}

pub(crate) fn flat_scalars<'a, T>(
    value: &'a Nested<T>,
    operation: &'static str,
) -> RaggedResult<impl Iterator<Item = &'a T>> {
    Ok(flat_elements(value, operation)?
        .iter()
        .filter_map(Nested::as_scalar))
}

/// Apply `f` to every element, producing a new rank-1 sequence.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{map, nested, Nested};
///
/// let doubled = map(&nested!([1, 2, 3]), |x| x * 2).unwrap();
/// assert_eq!(doubled, nested!([2, 4, 6]));
/// assert_eq!(map(&Nested::<i32>::empty(), |x| x * 2).unwrap(), Nested::empty());
/// ```
pub fn map<T, U, F>(value: &Nested<T>, f: F) -> RaggedResult<Nested<U>>
where
    F: FnMut(&T) -> U,
{
    Ok(flat_scalars(value, "map")?.map(f).collect())
}

/// Call `f` once for every element, in order.
///
/// # Errors
///
/// Fails with [`RaggedError::InvalidArgument`] when `value` is a scalar.
pub fn for_each<T, F>(value: &Nested<T>, f: F) -> RaggedResult<()>
where
    F: FnMut(&T),
{
    flat_scalars(value, "for_each")?.for_each(f);
    Ok(())
}

fn filter_with<T, P>(
    value: &Nested<T>,
    operation: &'static str,
    mut predicate: P,
) -> RaggedResult<Nested<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    Ok(flat_scalars(value, operation)?
        .filter(|item| predicate(*item))
        .cloned()
        .collect())
}

/// Keep the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{filter, nested};
///
/// assert_eq!(filter(&nested!([1, 2, 3, 4]), |&x| x > 2).unwrap(), nested!([3, 4]));
/// assert!(filter(&nested!([[1, 2], [3, 4]]), |&x| x > 2).is_err());
/// ```
pub fn filter<T, P>(value: &Nested<T>, predicate: P) -> RaggedResult<Nested<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter_with(value, "filter", predicate)
}

/// Keep the elements whose text matches `pattern` anywhere.
///
/// Elements are matched through their `Display` form, so numbers can be
/// filtered as well as strings.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use tenrso_ragged::{filter_regexp, nested};
///
/// let fruit = nested!(["apple", "banana", "apricot"]);
/// let pattern = Regex::new("^a").unwrap();
/// assert_eq!(filter_regexp(&fruit, &pattern).unwrap(), nested!(["apple", "apricot"]));
/// ```
pub fn filter_regexp<T>(value: &Nested<T>, pattern: &Regex) -> RaggedResult<Nested<T>>
where
    T: Clone + Display,
{
    filter_with(value, "filter_regexp", |item| pattern.is_match(&item.to_string()))
}

/// Last element, if any.
pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// All elements except the last one.
pub fn initial<T>(items: &[T]) -> &[T] {
    items.split_last().map_or(items, |(_, rest)| rest)
}

/// Whether `items` holds an element equal to `item`.
pub fn contains<T: PartialEq>(items: &[T], item: &T) -> bool {
    items.contains(item)
}

/// Join the text of every element with `separator`.
pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
