#![no_std]

//! seqkit core - generic operations over slices
//!
//! This crate provides stateless, pure functions for filtering, mapping,
//! folding, grouping, de-duplicating, chunking and finding extremes of
//! ordered sequences. Inputs are borrowed slices and are never mutated.
//!
//! Slice-only operations ([`reduce`], [`last_index`], the min/max family)
//! only need `core`. Operations that build new sequences or maps require the
//! `alloc` feature, which is enabled by default.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod ops;
pub mod traits;

pub use error::*;
pub use ops::*;
pub use traits::*;

#[cfg(feature = "alloc")]
pub use ops::group::Groups;
