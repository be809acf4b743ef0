//! Recursive top-down merge sort, the stable member of the suite.

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    if v.len() > 1 {
        sort_range(v, 0, v.len() - 1);
    }
}

pub fn sort_range<T>(v: &mut [T], left: usize, right: usize)
where
    T: Ord + Clone,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(v, left, mid);
    sort_range(v, mid + 1, right);
    merge(v, left, mid, right);
}

// Two-pointer interleave of the sorted halves [left, mid] and [mid + 1,
// right] into a scratch buffer. Ties take from the left half, which is what
// makes the sort stable.
fn merge<T>(v: &mut [T], left: usize, mid: usize, right: usize)
where
    T: Ord + Clone,
{
    let mut tmp = Vec::with_capacity(right - left + 1);

    let mut i = left;
    let mut j = mid + 1;

    while i <= mid && j <= right {
        if v[i] <= v[j] {
            tmp.push(v[i].clone());
            i += 1;
        } else {
            tmp.push(v[j].clone());
            j += 1;
        }
    }

    while i <= mid {
        tmp.push(v[i].clone());
        i += 1;
    }

    while j <= right {
        tmp.push(v[j].clone());
        j += 1;
    }

    for (k, val) in tmp.into_iter().enumerate() {
        v[left + k] = val;
    }
}
