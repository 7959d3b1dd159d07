//! Sequence operations
//!
//! Every function in this module is a pure transformation of its input
//! slice. Inputs are borrowed and never mutated; sequence-producing
//! operations return freshly allocated vectors and require the `alloc`
//! feature.

pub mod chunk;
pub mod dedup;
pub mod extrema;
pub mod group;
pub mod partition;
pub mod search;
pub mod transform;

#[cfg(feature = "alloc")]
pub use chunk::chunk;
#[cfg(feature = "alloc")]
pub use dedup::{unique, unique_by};
pub use extrema::{min_max, min_max_func, try_min_max, try_min_max_func};
#[cfg(feature = "alloc")]
pub use group::group_by;
#[cfg(feature = "alloc")]
pub use partition::partition;
pub use search::last_index;
pub use transform::reduce;
#[cfg(feature = "alloc")]
pub use transform::{filter, flatten, map};
