//! Grouping by derived key

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use core::hash::Hash;
#[cfg(feature = "alloc")]
use hashbrown::HashMap;

/// Mapping from derived key to the elements that produced it
///
/// Iteration order over keys is unspecified.
#[cfg(feature = "alloc")]
pub type Groups<K, T> = HashMap<K, Vec<T>>;

/// Group elements by the key returned from `key_fn`
///
/// Each element is appended to the group for its key, so every group keeps
/// the input order of its members. `key_fn` is called exactly once per
/// element.
///
/// ```
/// use seqkit_core::group_by;
///
/// let by_len = group_by(&["a", "bb", "ccc", "dd", "e"], |s| s.len());
/// assert_eq!(by_len[&1], ["a", "e"]);
/// assert_eq!(by_len[&2], ["bb", "dd"]);
/// assert_eq!(by_len[&3], ["ccc"]);
/// ```
#[cfg(feature = "alloc")]
pub fn group_by<T, K, F>(slice: &[T], mut key_fn: F) -> Groups<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut out: Groups<K, T> = HashMap::new();

    for item in slice {
        out.entry(key_fn(item)).or_default().push(item.clone());
    }
    out
}
