//! Stable two-way partitioning

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Split a slice into `(matches, non_matches)` according to `pred`
///
/// Both halves keep the relative order of the input.
///
/// ```
/// use seqkit_core::partition;
///
/// let (evens, odds) = partition(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(evens, [2, 4, 6]);
/// assert_eq!(odds, [1, 3, 5]);
/// ```
#[cfg(feature = "alloc")]
pub fn partition<T, F>(slice: &[T], mut pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut matches = Vec::with_capacity(slice.len());
    let mut non_matches = Vec::with_capacity(slice.len());

    for item in slice {
        if pred(item) {
            matches.push(item.clone());
        } else {
            non_matches.push(item.clone());
        }
    }

    (matches, non_matches)
}
