//! De-duplication preserving first occurrence

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use core::hash::Hash;
#[cfg(feature = "alloc")]
use hashbrown::HashSet;

/// Keep the first occurrence of each distinct value
///
/// Output order is the order of first occurrence. Applying `unique` twice
/// gives the same result as applying it once.
///
/// ```
/// use seqkit_core::unique;
///
/// assert_eq!(unique(&[1, 2, 1, 3, 2, 4, 4]), [1, 2, 3, 4]);
/// ```
#[cfg(feature = "alloc")]
pub fn unique<T>(slice: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut out = Vec::with_capacity(slice.len());
    // Borrow from the input so each kept element is cloned once
    let mut seen: HashSet<&T> = HashSet::with_capacity(slice.len());

    for item in slice {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Keep the first element for each distinct key returned by `key_fn`
///
/// ```
/// use seqkit_core::unique_by;
///
/// let users = [("Alice", "a@example.com"), ("Bob", "b@example.com"), ("Alice Clone", "a@example.com")];
/// let by_email = unique_by(&users, |u| u.1);
/// assert_eq!(by_email, [("Alice", "a@example.com"), ("Bob", "b@example.com")]);
/// ```
#[cfg(feature = "alloc")]
pub fn unique_by<T, K, F>(slice: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut out = Vec::with_capacity(slice.len());
    let mut seen: HashSet<K> = HashSet::new();

    for item in slice {
        if seen.insert(key_fn(item)) {
            out.push(item.clone());
        }
    }
    out
}
