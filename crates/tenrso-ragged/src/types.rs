//! Core type definitions for nested (possibly ragged) arrays.
//!
//! This module defines the value model shared by every operation in the crate:
//!
//! - [`Nested`]: a scalar leaf or an ordered sequence of nested values
//! - [`Scalar`]: a dynamically typed leaf (number, string, boolean, null)
//! - [`ElementType`]: the aggregate kind of all leaves in a structure
//! - [`Identified`]: a value tagged with its occurrence index
//! - Type aliases for dimensions ([`Rank`], [`Shape`])
//!
//! # Examples
//!
//! ```
//! use tenrso_ragged::{nested, Nested};
//!
//! // A ragged 2-level array: [1, [2, 3], []]
//! let value: Nested<i32> = nested!([1, [2, 3], []]);
//! assert!(value.is_seq());
//! assert_eq!(value.leaves().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Type alias for nesting rank (0 = scalar, 1 = flat sequence, ...).
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Only the outer dimension is ever computed by this crate, see
/// [`array_size`](crate::array_size).
pub type Shape = SmallVec<[usize; 6]>;

/// A nested, possibly ragged, array.
///
/// Sub-sequences may have differing lengths and leaves may sit at differing
/// depths. Every operation classifies its input through [`Nested::is_seq`] /
/// [`Nested::as_seq`] before branching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single leaf value
    Scalar(T),
    /// An ordered sequence of nested values
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Create an empty sequence.
    pub fn empty() -> Self {
        Nested::Seq(Vec::new())
    }

    /// Returns `true` if this value is a sequence (of any rank).
    pub fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }

    /// Returns `true` if this value is a scalar leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Nested::Scalar(_))
    }

    /// Borrow the elements if this value is a sequence.
    pub fn as_seq(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Seq(items) => Some(items),
            Nested::Scalar(_) => None,
        }
    }

    /// Borrow the leaf if this value is a scalar.
    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Nested::Scalar(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }

    /// Iterate over every scalar leaf in left-to-right, depth-first order.
    ///
    /// A scalar yields itself. Empty sequences at any level yield nothing.
    /// Traversal uses an explicit stack, so deeply nested input cannot
    /// overflow the call stack. Dropping is iterative as well; `Clone`,
    /// `PartialEq` and `Debug` still recurse.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_ragged::nested;
    ///
    /// let value = nested!([1, [2, [3, [4]]]]);
    /// let leaves: Vec<i32> = value.leaves().copied().collect();
    /// assert_eq!(leaves, vec![1, 2, 3, 4]);
    /// ```
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }
}

/// Tears nested sequences down with an explicit stack instead of the
/// recursive drop glue, so arbitrarily deep values can be dropped.
impl<T> Drop for Nested<T> {
    fn drop(&mut self) {
        let mut stack = match self {
            Nested::Seq(items) if items.iter().any(Nested::is_seq) => std::mem::take(items),
            _ => return,
        };
        while let Some(mut node) = stack.pop() {
            if let Nested::Seq(items) = &mut node {
                stack.append(items);
            }
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::Seq(items)
    }
}

/// Collects scalars into a rank-1 sequence.
impl<T> FromIterator<T> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Nested::Seq(iter.into_iter().map(Nested::Scalar).collect())
    }
}

/// Host array-to-string semantics: scalars print themselves, sequences print
/// their elements joined by `,` without brackets.
impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Scalar(value) => fmt::Display::fmt(value, f),
            Nested::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// Depth-first iterator over the leaves of a [`Nested`] value.
///
/// Created by [`Nested::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a, T> {
    stack: Vec<&'a Nested<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Nested::Scalar(value) => return Some(value),
                Nested::Seq(items) => self.stack.extend(items.iter().rev()),
            }
        }
        None
    }
}

/// Build a [`Nested`] value from array-literal syntax.
///
/// Brackets become sequences, everything else becomes a scalar leaf.
/// Scalars that are more than a single token (negative numbers, calls)
/// must be wrapped in parentheses.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{nested, Nested, Scalar};
///
/// let ints = nested!([1, [2, 3], []]);
/// assert_eq!(
///     ints,
///     Nested::Seq(vec![
///         Nested::Scalar(1),
///         Nested::Seq(vec![Nested::Scalar(2), Nested::Scalar(3)]),
///         Nested::Seq(vec![]),
///     ])
/// );
///
/// let mixed = nested!([(Scalar::from(1)), (Scalar::from("2")), (Scalar::from(-3.5))]);
/// assert_eq!(mixed.as_seq().map(|s| s.len()), Some(3));
/// ```
#[macro_export]
macro_rules! nested {
    ([$($elem:tt),* $(,)?]) => {
        $crate::Nested::Seq(::std::vec![$($crate::nested!($elem)),*])
    };
    (($scalar:expr)) => {
        $crate::Nested::Scalar($scalar)
    };
    ($scalar:expr) => {
        $crate::Nested::Scalar($scalar)
    };
}

/// Kind tag of a [`Scalar`], the analogue of a `typeof` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScalarKind {
    Null,
    Boolean,
    Number,
    String,
}

impl ScalarKind {
    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Null => "null",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Number => "number",
            ScalarKind::String => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dynamically typed leaf for arrays whose elements do not share one Rust type.
///
/// Values order first by kind (null < boolean < number < string) and then by
/// value within a kind. `NaN` is incomparable.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{Scalar, ScalarKind};
///
/// assert_eq!(Scalar::from(2).kind(), ScalarKind::Number);
/// assert_eq!(Scalar::from("2").kind(), ScalarKind::String);
/// assert!(Scalar::from(true) < Scalar::from(0.5));
/// assert_eq!(Scalar::from(3.0).to_string(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Scalar {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    /// Kind tag of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Null => ScalarKind::Null,
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::String(_) => ScalarKind::String,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// Aggregate element type of a nested structure.
///
/// Returned by [`get_array_data_type`](crate::get_array_data_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType<K> {
    /// Every leaf has this kind
    Kind(K),
    /// Leaves of two or more distinct kinds coexist
    Mixed,
    /// The structure holds no leaves
    Undefined,
}

impl<K> ElementType<K> {
    /// The single kind, if all leaves agree.
    pub fn kind(&self) -> Option<&K> {
        match self {
            ElementType::Kind(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, ElementType::Mixed)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, ElementType::Undefined)
    }
}

impl<K: fmt::Display> fmt::Display for ElementType<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Kind(kind) => write!(f, "{}", kind),
            ElementType::Mixed => f.write_str("mixed"),
            ElementType::Undefined => f.write_str("undefined"),
        }
    }
}

/// A value paired with its zero-based occurrence rank among equal values.
///
/// Produced by [`identify`](crate::identify) and consumed by
/// [`generalize`](crate::generalize).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identified<T> {
    pub value: T,
    pub identifier: usize,
}

impl<T> Identified<T> {
    pub fn new(value: T, identifier: usize) -> Self {
        Self { value, identifier }
    }
}

/// Orders by value, then by identifier, so identified multisets can be
/// merged with ordinary sorted-set algorithms.
impl<T: PartialOrd> PartialOrd for Identified<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.value.partial_cmp(&other.value)? {
            Ordering::Equal => Some(self.identifier.cmp(&other.identifier)),
            ord => Some(ord),
        }
    }
}
