//! # tenrso-ragged
//!
//! Primitives over nested, possibly ragged, arrays for TenRSo.
//!
//! Before values become dense tensors they often arrive as nested sequences
//! whose sub-sequences differ in length or whose leaves differ in type. This
//! crate supplies the small set of operations callers need to reason about
//! such input:
//!
//! - **Shape inspection** ([`array_size`], [`get_array_data_type`])
//! - **Rank normalization** ([`unsqueeze`], [`flatten`])
//! - **Rank-1 sequence ops** ([`map`], [`for_each`], [`filter`], [`filter_regexp`])
//! - **Occurrence tagging** ([`identify`], [`generalize`]) for multiset-aware
//!   set operations
//!
//! Matrix arithmetic, broadcasting and the set algebra itself live elsewhere.
//!
//! ## Quick Start
//!
//! ```
//! use tenrso_ragged::{array_size, flatten, nested, unsqueeze};
//!
//! let ragged = nested!([1, [2, [3, [4]]]]);
//! assert_eq!(array_size(&ragged).as_slice(), &[2]);
//! assert_eq!(flatten(&ragged), nested!([1, 2, 3, 4]));
//!
//! let column = unsqueeze(nested!([1, 2, 3]), 2, 0);
//! assert_eq!(column, nested!([[1], [2], [3]]));
//! ```
//!
//! ## Mixed Element Types
//!
//! Leaves that do not share one Rust type use [`Scalar`]:
//!
//! ```
//! use tenrso_ragged::{get_array_data_type, nested, ElementType, Nested, Scalar, ScalarKind};
//!
//! let numbers: Nested<Scalar> = nested!([[(Scalar::from(1))], [(Scalar::from(2))]]);
//! assert_eq!(
//!     get_array_data_type(&numbers, Scalar::kind),
//!     ElementType::Kind(ScalarKind::Number)
//! );
//!
//! let mixed: Nested<Scalar> = nested!([(Scalar::from(1)), (Scalar::from("2")), (Scalar::from(3))]);
//! assert_eq!(get_array_data_type(&mixed, Scalar::kind).to_string(), "mixed");
//! ```
//!
//! ## Error Handling
//!
//! Operations that need a flat sequence return [`RaggedResult`]:
//!
//! ```
//! use tenrso_ragged::{identify, nested, Nested, RaggedError};
//!
//! let result = identify(&Nested::Scalar(1));
//! assert!(matches!(result, Err(RaggedError::InvalidArgument { .. })));
//!
//! let result = identify(&nested!([[1], [2]]));
//! assert!(matches!(result, Err(RaggedError::Dimension { .. })));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support

#![deny(warnings)]

pub mod error;
pub mod identity;
pub mod inspect;
pub mod normalize;
pub mod sequence;
pub mod types;


pub use error::{RaggedError, RaggedResult};
pub use identity::{generalize, identify};
pub use inspect::{array_size, get_array_data_type};
pub use normalize::{flatten, unsqueeze};
pub use sequence::{contains, filter, filter_regexp, for_each, initial, join, last, map};
pub use types::{ElementType, Identified, Leaves, Nested, Rank, Scalar, ScalarKind, Shape};
