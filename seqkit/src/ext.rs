//! Method-call syntax for sequence operations
//!
//! [`SeqExt`] is implemented for every slice, so the operations from
//! `seqkit-core` can be chained off a `Vec`, array slice or `&[T]`:
//!
//! ```rust
//! use seqkit::SeqExt;
//!
//! let words = vec!["go", "rust", "go", "zig"];
//! assert_eq!(words.unique(), ["go", "rust", "zig"]);
//! assert_eq!(words.last_index(&"go"), Some(2));
//! ```

use seqkit_core::{Comparison, Groups, Result};
use std::hash::Hash;

/// Extension trait exposing the sequence operations as slice methods
///
/// Every method forwards to the free function of the same name in
/// `seqkit-core` and has identical semantics.
pub trait SeqExt<T> {
    /// See [`seqkit_core::filter`]
    fn filter<F>(&self, keep: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`seqkit_core::map`]
    fn map<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> R;

    /// See [`seqkit_core::reduce`]
    fn reduce<R, F>(&self, init: R, f: F) -> R
    where
        F: FnMut(R, &T) -> R;

    /// See [`seqkit_core::last_index`]
    fn last_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`seqkit_core::partition`]
    fn partition<F>(&self, pred: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`seqkit_core::group_by`]
    fn group_by<K, F>(&self, key_fn: F) -> Groups<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Concatenate the inner sequences, see [`seqkit_core::flatten`]
    fn flattened<U>(&self) -> Vec<U>
    where
        T: AsRef<[U]>,
        U: Clone;

    /// See [`seqkit_core::unique`]
    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// See [`seqkit_core::unique_by`]
    fn unique_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// See [`seqkit_core::chunk`]
    fn chunk(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;

    /// See [`seqkit_core::min_max`]. Panics on an empty slice.
    fn min_max(&self) -> (&T, &T)
    where
        T: Ord;

    /// See [`seqkit_core::min_max_func`]. Panics on an empty slice.
    fn min_max_func<C, F>(&self, cmp: F) -> (&T, &T)
    where
        C: Comparison,
        F: FnMut(&T, &T) -> C;

    /// See [`seqkit_core::try_min_max`]
    fn try_min_max(&self) -> Result<(&T, &T)>
    where
        T: Ord;

    /// See [`seqkit_core::try_min_max_func`]
    fn try_min_max_func<C, F>(&self, cmp: F) -> Result<(&T, &T)>
    where
        C: Comparison,
        F: FnMut(&T, &T) -> C;
}

impl<T> SeqExt<T> for [T] {
    fn filter<F>(&self, keep: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        seqkit_core::filter(self, keep)
    }

    fn map<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        seqkit_core::map(self, f)
    }

    fn reduce<R, F>(&self, init: R, f: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        seqkit_core::reduce(self, init, f)
    }

    fn last_index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        seqkit_core::last_index(self, value)
    }

    fn partition<F>(&self, pred: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        seqkit_core::partition(self, pred)
    }

    fn group_by<K, F>(&self, key_fn: F) -> Groups<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        seqkit_core::group_by(self, key_fn)
    }

    fn flattened<U>(&self) -> Vec<U>
    where
        T: AsRef<[U]>,
        U: Clone,
    {
        seqkit_core::flatten(self)
    }

    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        seqkit_core::unique(self)
    }

    fn unique_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        seqkit_core::unique_by(self, key_fn)
    }

    fn chunk(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        seqkit_core::chunk(self, size)
    }

    fn min_max(&self) -> (&T, &T)
    where
        T: Ord,
    {
        seqkit_core::min_max(self)
    }

    fn min_max_func<C, F>(&self, cmp: F) -> (&T, &T)
    where
        C: Comparison,
        F: FnMut(&T, &T) -> C,
    {
        seqkit_core::min_max_func(self, cmp)
    }

    fn try_min_max(&self) -> Result<(&T, &T)>
    where
        T: Ord,
    {
        seqkit_core::try_min_max(self)
    }

    fn try_min_max_func<C, F>(&self, cmp: F) -> Result<(&T, &T)>
    where
        C: Comparison,
        F: FnMut(&T, &T) -> C,
    {
        seqkit_core::try_min_max_func(self, cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqkit_core::SeqError;

    #[test]
    fn test_chained_pipeline() {
        let values = vec![5, 3, 8, 3, 1, 8, 6];

        let evens = values.filter(|v| v % 2 == 0);
        assert_eq!(evens, [8, 8, 6]);

        let total = values.unique().reduce(0, |acc, v| acc + v);
        assert_eq!(total, 5 + 3 + 8 + 1 + 6);

        let doubled = values.map(|v| v * 2);
        assert_eq!(doubled.len(), values.len());
        assert_eq!(doubled[2], 16);
    }

    #[test]
    fn test_methods_match_free_functions() {
        let words = vec!["a", "bb", "ccc", "dd", "e"];

        assert_eq!(words.group_by(|s| s.len()), seqkit_core::group_by(&words, |s| s.len()));
        assert_eq!(
            words.partition(|s| s.len() > 1),
            seqkit_core::partition(&words, |s| s.len() > 1)
        );
        assert_eq!(words.unique_by(|s| s.len()), ["a", "bb", "ccc"]);
        assert_eq!(words.last_index(&"dd"), Some(3));
        assert_eq!(words.min_max(), (&"a", &"e"));
    }

    #[test]
    fn test_flattened_and_chunk() {
        let nested = vec![vec![1, 2], vec![], vec![3], vec![4, 5]];
        let flat = nested.flattened();
        assert_eq!(flat, [1, 2, 3, 4, 5]);

        assert_eq!(flat.chunk(2).unwrap(), [vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(flat.chunk(0), Err(SeqError::InvalidChunkSize));
    }

    #[test]
    fn test_extremes_via_methods() {
        let temps = vec![21.5f64, -3.0, 18.25, 30.0];
        let (low, high) = temps.min_max_func(f64::total_cmp);
        assert_eq!((*low, *high), (-3.0, 30.0));

        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.try_min_max(), Err(SeqError::EmptySequence));
        assert_eq!(
            empty.try_min_max_func(|a, b| a - b),
            Err(SeqError::EmptySequence)
        );
    }
}
