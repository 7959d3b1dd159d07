//! Fixed-size chunking

#[cfg(feature = "alloc")]
use crate::{Result, SeqError};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Split a slice into consecutive chunks of `size` elements
///
/// Every chunk has exactly `size` elements except possibly the last, which
/// holds the remainder. An empty slice produces no chunks.
///
/// # Errors
///
/// Returns [`SeqError::InvalidChunkSize`] if `size` is zero.
///
/// ```
/// use seqkit_core::chunk;
///
/// let chunks = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, [vec![1, 2], vec![3, 4], vec![5]]);
/// ```
#[cfg(feature = "alloc")]
pub fn chunk<T: Clone>(slice: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(SeqError::InvalidChunkSize);
    }

    Ok(slice.chunks(size).map(<[T]>::to_vec).collect())
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_chunk_exact_division() {
        let got = chunk(&[1, 2, 3, 4], 2).unwrap();
        assert_eq!(got, [vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_last_smaller() {
        let got = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(got, [vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_size_larger_than_slice() {
        let got = chunk(&[1, 2, 3], 10).unwrap();
        assert_eq!(got, [vec![1, 2, 3]]);

        let ones = chunk(&[1, 2, 3], 1).unwrap();
        assert_eq!(ones, [vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_chunk_empty() {
        let empty: [i32; 0] = [];
        assert!(chunk(&empty, 3).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_zero_size() {
        assert_eq!(chunk(&[1, 2, 3], 0), Err(SeqError::InvalidChunkSize));

        // Validated before looking at the input
        let empty: [i32; 0] = [];
        assert_eq!(chunk(&empty, 0), Err(SeqError::InvalidChunkSize));
    }
}
