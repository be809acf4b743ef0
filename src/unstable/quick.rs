//! Median-of-three quicksort with unguarded Hoare-style scans.

sort_impl!("quick_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    if v.len() > 1 {
        sort_range(v, 0, v.len() - 1);
    }
}

pub fn sort_range<T>(v: &mut [T], left: usize, right: usize)
where
    T: Ord,
{
    if left >= right {
        return;
    }

    // Ranges of length 2 are resolved directly, partitioning needs length 3
    // to place its sentinels.
    if right - left < 2 {
        if v[left] > v[right] {
            v.swap(left, right);
        }
        return;
    }

    let pivot_index = partition(v, left, right);
    sort_range(v, left, pivot_index - 1);
    sort_range(v, pivot_index + 1, right);
}

/// Partitions `[left, right]` around the median of the first, middle and last
/// elements and returns the pivot's final index, always inside
/// `[left + 1, right - 1]`.
pub fn partition<T>(v: &mut [T], left: usize, right: usize) -> usize
where
    T: Ord,
{
    let mid = left + (right - left) / 2;

    // Median-of-three. Leaves the true median at mid, an element <= median at
    // left and an element >= median at right.
    if v[left] > v[mid] {
        v.swap(left, mid);
    }

    if v[left] > v[right] {
        v.swap(left, right);
    }

    if v[mid] > v[right] {
        v.swap(mid, right);
    }

    // The pivot sits at right - 1 for the whole scan.
    v.swap(mid, right - 1);

    // The scans below run unguarded: v[left] <= pivot stops the downward scan
    // and the pivot itself stops the upward one, so neither index can leave
    // [left, right - 1].
    debug_assert!(v[left] <= v[right - 1] && v[right - 1] <= v[right]);

    let mut i = left;
    let mut j = right - 1;

    loop {
        i += 1;
        while v[i] < v[right - 1] {
            i += 1;
        }

        j -= 1;
        while v[j] > v[right - 1] {
            j -= 1;
        }

        if i >= j {
            break;
        }

        v.swap(i, j);
    }

    v.swap(i, right - 1);
    i
}
