//! Deterministic rendering of grouping results
//!
//! [`Groups`] is a hash map, so iterating it yields keys in an unspecified
//! order. The helpers here order groups by key for stable output in logs,
//! snapshots and reports. Member order within each group is untouched.

use seqkit_core::Groups;

/// Convert a grouping map into `(key, members)` pairs sorted by key
///
/// ```rust
/// use seqkit::{group_by, report::sorted_groups};
///
/// let groups = group_by(&["a", "bb", "ccc", "dd", "e"], |s| s.len());
/// let sorted = sorted_groups(groups);
/// assert_eq!(sorted, [(1, vec!["a", "e"]), (2, vec!["bb", "dd"]), (3, vec!["ccc"])]);
/// ```
pub fn sorted_groups<K: Ord, T>(groups: Groups<K, T>) -> Vec<(K, Vec<T>)> {
    let mut pairs: Vec<(K, Vec<T>)> = groups.into_iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    pairs
}

/// Render a grouping map as a JSON object with keys in ascending order
///
/// Keys must serialize as JSON object keys (strings or numbers).
#[cfg(feature = "serde")]
pub fn groups_to_json<K, T>(groups: &Groups<K, T>) -> serde_json::Result<String>
where
    K: Ord + serde::Serialize,
    T: serde::Serialize,
{
    let ordered: std::collections::BTreeMap<&K, &Vec<T>> = groups.iter().collect();
    serde_json::to_string(&ordered)
}
