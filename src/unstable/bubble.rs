//! Adjacent-exchange bubble sort with per-comparison accounting.

sort_impl!("bubble_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_counting(v);
}

pub fn sort_range<T>(v: &mut [T], left: usize, right: usize)
where
    T: Ord,
{
    if left >= right {
        return;
    }

    sort_counting(&mut v[left..=right]);
}

/// Sorts `v` and returns the number of element comparisons performed.
///
/// A pass without swaps ends the scan early, so an already ascending input of
/// length `n >= 2` costs exactly `n - 1` comparisons and no swaps.
pub fn sort_counting<T>(v: &mut [T]) -> u64
where
    T: Ord,
{
    let size = v.len();
    if size < 2 {
        return 0;
    }

    let mut comparisons = 0u64;
    let mut swapped = true;

    let mut pass = 0;
    while pass < size - 1 && swapped {
        swapped = false;

        for i in 0..size - 1 - pass {
            comparisons += 1;

            if v[i] > v[i + 1] {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        pass += 1;
    }

    comparisons
}
