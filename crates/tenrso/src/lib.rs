//! # TenRSo - Tensor Computing Stack for COOLJAPAN
//!
//! This is the **meta crate** that re-exports TenRSo components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tenrso::prelude::*;
//!
//! let ragged = nested!([1, [2, [3, [4]]]]);
//! assert_eq!(array_size(&ragged).as_slice(), &[2]);
//! assert_eq!(flatten(&ragged), nested!([1, 2, 3, 4]));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Nested Array Primitives ([`ragged`])
//!
//! Shape inspection, unsqueeze/flatten, rank-1 sequence operations and
//! duplicate tagging for multiset-aware set operations.
//!
//! ```
//! use tenrso::ragged::{generalize, identify, nested};
//!
//! let tagged = identify(&nested!([2, 1, 2]))?;
//! assert_eq!(generalize(&tagged)?, nested!([1, 2, 2]));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support

#![deny(warnings)]

pub use tenrso_ragged as ragged;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenrso::prelude::*;
    //!
    //! let column = unsqueeze(nested!([1, 2]), 2, 0);
    //! assert_eq!(column, nested!([[1], [2]]));
    //! ```

    // Types
    pub use crate::ragged::{
        ElementType, Identified, Nested, RaggedError, RaggedResult, Scalar, ScalarKind, Shape,
    };

    // Operations
    pub use crate::ragged::{
        array_size, filter, filter_regexp, flatten, for_each, generalize, get_array_data_type,
        identify, map, unsqueeze,
    };

    pub use crate::ragged::nested;
}
