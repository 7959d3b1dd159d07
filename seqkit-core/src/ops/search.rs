//! Positional lookup

/// Find the index of the last element equal to `value`
///
/// Scans from the end of the slice. Returns `None` when no element matches,
/// including for an empty slice.
///
/// ```
/// use seqkit_core::last_index;
///
/// let values = ["a", "b", "c", "b"];
/// assert_eq!(last_index(&values, &"b"), Some(3));
/// assert_eq!(last_index(&values, &"z"), None);
/// ```
pub fn last_index<T: PartialEq>(slice: &[T], value: &T) -> Option<usize> {
    slice.iter().rposition(|item| item == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_index_found() {
        assert_eq!(last_index(&[1, 2, 3, 2, 4], &2), Some(3));
        assert_eq!(last_index(&["a", "b", "c", "b"], &"b"), Some(3));

        // Match at both ends
        assert_eq!(last_index(&[7, 1, 7], &7), Some(2));
        assert_eq!(last_index(&[7, 1, 1], &7), Some(0));
    }

    #[test]
    fn test_last_index_not_found() {
        assert_eq!(last_index(&[1, 2, 3], &4), None);
        assert_eq!(last_index(&["a", "b", "c"], &"z"), None);

        let empty: [i32; 0] = [];
        assert_eq!(last_index(&empty, &1), None);
    }
}
