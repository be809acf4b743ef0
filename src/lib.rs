//! Evaluation harness for classical comparison sorts.
//!
//! Five algorithms, each operating in place over an inclusive `[left, right]`
//! range of one slice, benchmarked against the same dataset in three
//! orderings (sorted, shuffled, reversed). Merge sort is the only stable
//! member of the suite, hence the stable/unstable module split.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_range<T>(v: &mut [T], left: usize, right: usize)
            where
                T: Ord + Clone,
            {
                sort_range(v, left, right);
            }
        }
    };
}

pub mod patterns;
pub mod report;
pub mod runner;
pub mod stable;
pub mod unstable;

/// An in-place comparison sort over an inclusive `[left, right]` range.
///
/// `Clone` is in the bound because merge sort fills its scratch buffer by
/// cloning; the other implementations only ever swap.
pub trait Sort {
    fn name() -> String;

    fn sort_range<T>(v: &mut [T], left: usize, right: usize)
    where
        T: Ord + Clone;

    #[inline]
    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone,
    {
        if v.len() > 1 {
            Self::sort_range(v, 0, v.len() - 1);
        }
    }
}
