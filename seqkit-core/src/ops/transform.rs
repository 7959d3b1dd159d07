//! Element-wise transformations: filter, map, reduce and flatten

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Keep the elements for which `keep` returns true
///
/// The result preserves the relative order of the input.
///
/// ```
/// use seqkit_core::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(evens, [2, 4, 6]);
/// ```
#[cfg(feature = "alloc")]
pub fn filter<T, F>(slice: &[T], mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut out = Vec::with_capacity(slice.len());
    for item in slice {
        if keep(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Apply `f` to every element, positionally
///
/// ```
/// use seqkit_core::map;
///
/// let labels = map(&[1, 2, 3], |n| format!("n={n}"));
/// assert_eq!(labels, ["n=1", "n=2", "n=3"]);
/// ```
#[cfg(feature = "alloc")]
pub fn map<T, R, F>(slice: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    slice.iter().map(f).collect()
}

/// Left fold over the slice starting from `init`
///
/// `f` is called once per element in order. An empty slice yields `init`
/// unchanged.
///
/// ```
/// use seqkit_core::reduce;
///
/// let sum = reduce(&[1, 2, 3, 4], 0, |acc, n| acc + n);
/// assert_eq!(sum, 10);
/// ```
pub fn reduce<T, R, F>(slice: &[T], init: R, mut f: F) -> R
where
    F: FnMut(R, &T) -> R,
{
    let mut acc = init;
    for item in slice {
        acc = f(acc, item);
    }
    acc
}

/// Concatenate inner sequences in order
///
/// Accepts anything that views as a slice (`Vec<T>`, `&[T]`, arrays).
///
/// ```
/// use seqkit_core::flatten;
///
/// let nested = vec![vec![1, 2], vec![], vec![3], vec![4, 5]];
/// assert_eq!(flatten(&nested), [1, 2, 3, 4, 5]);
/// ```
#[cfg(feature = "alloc")]
pub fn flatten<T, S>(slices: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = slices.iter().map(|inner| inner.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for inner in slices {
        out.extend_from_slice(inner.as_ref());
    }
    out
}
