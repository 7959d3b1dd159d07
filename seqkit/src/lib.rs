//! seqkit - generic sequence helpers for slices
//!
//! Helpers for working with slices that the standard library does not
//! provide directly: filtering and mapping into new vectors, folding,
//! grouping, de-duplicating, chunking and computing minima and maxima.
//!
//! ## Architecture
//!
//! - **seqkit-core**: the operations themselves, `no_std` with an `alloc`
//!   feature for everything that builds new sequences
//! - **seqkit**: re-exports the core and adds method syntax ([`SeqExt`]) and
//!   deterministic group reporting ([`report`])
//!
//! ## Quick Start
//!
//! ```rust
//! use seqkit::{chunk, group_by, min_max, unique, SeqExt};
//!
//! let values = [1, 2, 1, 3, 2, 4, 4];
//! assert_eq!(unique(&values), [1, 2, 3, 4]);
//! assert_eq!(min_max(&values), (&1, &4));
//!
//! let chunks = chunk(&values, 3)?;
//! assert_eq!(chunks.len(), 3);
//!
//! let by_parity = group_by(&values, |v| v % 2);
//! assert_eq!(by_parity[&0], [2, 2, 4, 4]);
//!
//! let odds = values.filter(|v| v % 2 == 1);
//! assert_eq!(odds, [1, 1, 3]);
//! # Ok::<(), seqkit::SeqError>(())
//! ```
//!
//! ## Failure conditions
//!
//! - [`min_max`] and [`min_max_func`] panic on an empty slice; use
//!   [`try_min_max`] / [`try_min_max_func`] to get [`SeqError::EmptySequence`]
//!   instead.
//! - [`chunk`] returns [`SeqError::InvalidChunkSize`] for a size of zero.

// Re-export core operations and types
pub use seqkit_core::{
    // Operations
    chunk, filter, flatten, group_by, last_index, map, min_max, min_max_func, partition, reduce,
    try_min_max, try_min_max_func, unique, unique_by,
    // Types
    Comparison, Groups,
    // Error handling
    ErrorCategory, Result, SeqError,
};

pub mod ext;
pub mod report;

pub use ext::SeqExt;
pub use report::sorted_groups;

#[cfg(feature = "serde")]
pub use report::groups_to_json;
