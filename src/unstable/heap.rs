//! In-place max-heap sort over an arbitrary `[left, right]` sub-range.
//!
//! Parent and child arithmetic is bound-shifted by `left`, so the heap lives
//! entirely inside the sub-range instead of being anchored at index 0.

sort_impl!("heap_unstable");

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

    heapify(v, left, right);

    // The maximum of the shrinking unsorted range is always at left; swap it
    // to the current end and restore the heap over the rest.
    let mut end = right;
    while end > left {
        v.swap(left, end);
        percolate_down(v, left, left, end - 1);
        end -= 1;
    }
}

/// Establishes the max-heap property over `[left, right]`.
pub fn heapify<T>(v: &mut [T], left: usize, right: usize)
where
    T: Ord,
{
    if left >= right {
        return;
    }

    let last_parent = left + (right - left - 1) / 2;

    let mut i = last_parent;
    loop {
        percolate_down(v, i, left, right);

        if i == left {
            break;
        }
        i -= 1;
    }
}

fn percolate_down<T>(v: &mut [T], mut index: usize, left_bound: usize, right_bound: usize)
where
    T: Ord,
{
    loop {
        let left_child = left_bound + 2 * (index - left_bound) + 1;
        let right_child = left_child + 1;
        let mut largest = index;

        if left_child <= right_bound && v[left_child] > v[largest] {
            largest = left_child;
        }

        if right_child <= right_bound && v[right_child] > v[largest] {
            largest = right_child;
        }

        if largest == index {
            break;
        }

        v.swap(index, largest);
        index = largest;
    }
}
