//! Shape and element-type inspection of nested arrays
//!
//! - [`array_size`]: outer dimension of a value
//! - [`get_array_data_type`]: aggregate kind of all leaves
//!
//! # Examples
//!
//! ```
//! use tenrso_ragged::{array_size, get_array_data_type, nested, ElementType, Nested, Scalar};
//!
//! let value = nested!([1, [2, [3]]]);
//! assert_eq!(array_size(&value).as_slice(), &[2]);
//!
//! let mixed: Nested<Scalar> = nested!([(Scalar::from(1)), (Scalar::from("2"))]);
//! assert_eq!(get_array_data_type(&mixed, Scalar::kind), ElementType::Mixed);
//! ```

use crate::types::{ElementType, Nested, Shape};
use smallvec::smallvec;

/// Size of the outer dimension of `value`.
///
/// Returns an empty shape for a scalar and `[n]` for a sequence of `n`
/// elements. Inner dimensions are never inspected, so ragged input is
/// accepted as is; the caller computes deeper dimensions where it needs them.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{array_size, nested, Nested};
///
/// assert_eq!(array_size(&nested!([1, [2, [3]]])).as_slice(), &[2]);
/// assert_eq!(array_size(&Nested::<i32>::empty()).as_slice(), &[0]);
/// assert!(array_size(&Nested::Scalar(1)).is_empty());
/// ```
pub fn array_size<T>(value: &Nested<T>) -> Shape {
    match value {
        Nested::Scalar(_) => Shape::new(),
        Nested::Seq(items) => smallvec![items.len()],
    }
}

/// Aggregate element type of every leaf in `value`.
///
/// `classify` maps each leaf to a kind tag. The result is
/// [`ElementType::Kind`] when all leaves agree, [`ElementType::Mixed`] as soon
/// as two distinct kinds are seen, and [`ElementType::Undefined`] when there
/// are no leaves at all. A scalar input is classified directly.
///
/// # Examples
///
/// ```
/// use tenrso_ragged::{get_array_data_type, nested, ElementType, Nested};
///
/// let parity = |x: &i32| x % 2;
/// assert_eq!(get_array_data_type(&nested!([[2, 4], [6]]), parity), ElementType::Kind(0));
/// assert_eq!(get_array_data_type(&nested!([[2, 4], [5]]), parity), ElementType::Mixed);
/// assert_eq!(get_array_data_type(&Nested::<i32>::empty(), parity), ElementType::Undefined);
/// ```
pub fn get_array_data_type<T, K, F>(value: &Nested<T>, mut classify: F) -> ElementType<K>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut leaves = value.leaves();
    let first = match leaves.next() {
        Some(leaf) => classify(leaf),
        None => return ElementType::Undefined,
    };
    for leaf in leaves {
        if classify(leaf) != first {
            return ElementType::Mixed;
        }
    }
    ElementType::Kind(first)
}
