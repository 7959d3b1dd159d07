//! Minimum and maximum over a slice
//!
//! The extremum of an empty sequence does not exist. The `try_` variants
//! report this as [`SeqError::EmptySequence`]; the plain variants treat it
//! as a caller bug and panic rather than return a placeholder value.
//!
//! All variants make one left-to-right pass. An element only replaces the
//! current minimum (maximum) when it is strictly smaller (larger), so among
//! equal extremes the first occurrence is returned for both ends.

use crate::traits::Comparison;
use crate::{Result, SeqError};
use core::cmp::Ordering;

/// Minimum and maximum by natural ordering
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if `slice` is empty.
pub fn try_min_max<T: Ord>(slice: &[T]) -> Result<(&T, &T)> {
    try_min_max_func(slice, T::cmp)
}

/// Minimum and maximum using a caller-supplied comparator
///
/// `cmp(a, b)` must be negative (or `Ordering::Less`) when `a < b`, zero when
/// they are equal and positive when `a > b`, and must describe a total order.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] if `slice` is empty.
pub fn try_min_max_func<T, C, F>(slice: &[T], mut cmp: F) -> Result<(&T, &T)>
where
    C: Comparison,
    F: FnMut(&T, &T) -> C,
{
    let (first, rest) = slice.split_first().ok_or(SeqError::EmptySequence)?;
    let mut min = first;
    let mut max = first;

    for item in rest {
        if cmp(item, min).to_ordering() == Ordering::Less {
            min = item;
        }
        if cmp(item, max).to_ordering() == Ordering::Greater {
            max = item;
        }
    }

    Ok((min, max))
}

/// Minimum and maximum by natural ordering
///
/// # Panics
///
/// Panics if `slice` is empty.
///
/// ```
/// use seqkit_core::min_max;
///
/// assert_eq!(min_max(&[5, 2, 9, 1]), (&1, &9));
/// ```
pub fn min_max<T: Ord>(slice: &[T]) -> (&T, &T) {
    match try_min_max(slice) {
        Ok(extremes) => extremes,
        Err(err) => panic!("min_max: {err}"),
    }
}

/// Minimum and maximum using a caller-supplied comparator
///
/// See [`try_min_max_func`] for the comparator contract.
///
/// # Panics
///
/// Panics if `slice` is empty.
///
/// ```
/// use seqkit_core::min_max_func;
///
/// let people = [("Alice", 30), ("Bob", 25), ("Charlie", 40)];
/// let (youngest, oldest) = min_max_func(&people, |a, b| a.1 - b.1);
/// assert_eq!(youngest.0, "Bob");
/// assert_eq!(oldest.0, "Charlie");
/// ```
pub fn min_max_func<T, C, F>(slice: &[T], cmp: F) -> (&T, &T)
where
    C: Comparison,
    F: FnMut(&T, &T) -> C,
{
    match try_min_max_func(slice, cmp) {
        Ok(extremes) => extremes,
        Err(err) => panic!("min_max_func: {err}"),
    }
}
