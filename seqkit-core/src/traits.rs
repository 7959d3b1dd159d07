//! Core traits for sequence operations

use core::cmp::Ordering;

/// Result of a caller-supplied comparator
///
/// Comparators report the relative order of two elements as a signed value:
/// negative if the first is smaller, zero if they are equal and positive if
/// the first is larger. `Ordering` is accepted as-is, so both
/// `|a, b| a.cmp(b)` and `|a, b| (a - b).signum()` style comparators work.
pub trait Comparison {
    /// Convert this comparison result into an `Ordering`
    fn to_ordering(self) -> Ordering;
}

impl Comparison for Ordering {
    #[inline]
    fn to_ordering(self) -> Ordering {
        self
    }
}

macro_rules! impl_signed_comparison {
    ($($ty:ty),*) => {
        $(
            impl Comparison for $ty {
                #[inline]
                fn to_ordering(self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

impl_signed_comparison!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_comparison() {
        assert_eq!((-1i32).to_ordering(), Ordering::Less);
        assert_eq!(0i32.to_ordering(), Ordering::Equal);
        assert_eq!(1i32.to_ordering(), Ordering::Greater);

        // Only the sign matters
        assert_eq!((-42i64).to_ordering(), Ordering::Less);
        assert_eq!(7isize.to_ordering(), Ordering::Greater);
    }

    #[test]
    fn test_ordering_passthrough() {
        assert_eq!(Ordering::Less.to_ordering(), Ordering::Less);
        assert_eq!(Ordering::Greater.to_ordering(), Ordering::Greater);
    }
}
