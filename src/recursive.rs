//! Divide-and-conquer and heap-based sorts.
//!
//! - **Heap**: bottom-up max-heap over the range, `O(n log n)`, unstable.
//! - **Quick**: three-way (Dutch flag) partition around the first element of each
//!   sub-range. Runs of elements equal to the pivot are never recursed into.
//! - **Merge**: top-down, stable, allocates a buffer the size of each merged run.
//! - **Slow** and **Stooge**: deliberately inefficient recursions, kept for teaching.

use crate::algo::entry_point;
use crate::core::{Compare, Sequence, compare_at};
use std::cmp::Ordering;

entry_point!(
    /// Heap sort. Unstable, `O(n log n)`, `O(1)` extra memory.
    ///
    /// The heap is laid out over the sub-range itself, so no element outside it moves.
    heap_sort => heap, "heap"
);

entry_point!(
    /// Quick sort with a three-way partition. Unstable, `O(n log n)` expected.
    ///
    /// The pivot is the first element of each sub-range. Elements equal to it are
    /// gathered in the middle and left alone, so a range of identical values is
    /// handled by one partition pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkit::quick_sort;
    ///
    /// let mut data = vec![5, 3, 4, 1, 2];
    /// quick_sort(&mut data, .., i32::cmp).unwrap();
    /// assert_eq!(data, vec![1, 2, 3, 4, 5]);
    /// ```
    quick_sort => quick, "quick"
);

entry_point!(
    /// Merge sort. Stable, `O(n log n)`, `O(n)` extra memory per merge.
    ///
    /// On ties the element from the left run is taken first.
    merge_sort => merge, "merge"
);

entry_point!(
    /// Slow sort ("multiply and surrender"). Unstable and super-polynomial.
    ///
    /// Not meant for real inputs: even a few dozen elements take a long time.
    slow_sort => slow, "slow"
);

entry_point!(
    /// Stooge sort. Unstable, roughly `O(n^2.71)`.
    stooge_sort => stooge, "stooge"
);

fn heap<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    let len = hi - lo;

    // Build the heap in-place.
    for node in (0..=len / 2).rev() {
        sift_down(seq, lo, node, len, compare);
    }

    // Pop elements from the heap one by one.
    for end in (1..len).rev() {
        seq.swap(lo, lo + end);
        sift_down(seq, lo, 0, end, compare);
    }
}

/// Sift down element at `node` in the heap rooted at `offset` with size `heap_size`.
fn sift_down<S, F>(seq: &mut S, offset: usize, mut node: usize, heap_size: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    loop {
        let left = 2 * (node + 1) - 1;
        let right = 2 * (node + 1);
        let mut largest = node;

        if left < heap_size
            && compare_at(seq, compare, offset + left, offset + largest) == Ordering::Greater
        {
            largest = left;
        }
        if right < heap_size
            && compare_at(seq, compare, offset + right, offset + largest) == Ordering::Greater
        {
            largest = right;
        }
        if largest == node {
            break;
        }

        seq.swap(offset + node, offset + largest);
        node = largest;
    }
}

fn quick<S, F>(seq: &mut S, mut lo: usize, mut hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    while hi - lo > 1 {
        let (less_end, greater_start) = partition(seq, lo, hi, compare);

        // Recurse into the smaller side, loop on the larger.
        if less_end - lo < hi - greater_start {
            quick(seq, lo, less_end, compare);
            lo = greater_start;
        } else {
            quick(seq, greater_start, hi, compare);
            hi = less_end;
        }
    }
}

/// Three-way partition of `lo..hi` around the value at `lo`.
///
/// Scans from the right. Afterwards `lo..i` holds the elements less than the pivot,
/// `i..k` the equal ones and `k..hi` the greater ones. Returns `(i, k)`.
fn partition<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F) -> (usize, usize)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    let pivot = seq.get(lo);
    let mut i = lo;
    let mut j = hi;
    let mut k = hi;

    // Unscanned elements live in `i..j`, elements equal to the pivot in `j..k`.
    while i < j {
        match compare(&seq.get(j - 1), &pivot) {
            Ordering::Less => {
                seq.swap(i, j - 1);
                i += 1;
            }
            Ordering::Equal => j -= 1,
            Ordering::Greater => {
                k -= 1;
                seq.swap(j - 1, k);
                j -= 1;
            }
        }
    }

    (i, k)
}

fn merge<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    let len = hi - lo;
    if len < 2 {
        return;
    }

    let mid = lo + len / 2;
    merge(seq, lo, mid, compare);
    merge(seq, mid, hi, compare);

    let mut buffer = Vec::with_capacity(len);
    let (mut left, mut right) = (lo, mid);
    while left < mid && right < hi {
        // Only a strictly greater left element yields to the right run.
        if compare_at(seq, compare, left, right) == Ordering::Greater {
            buffer.push(seq.get(right));
            right += 1;
        } else {
            buffer.push(seq.get(left));
            left += 1;
        }
    }
    buffer.extend((left..mid).map(|i| seq.get(i)));
    buffer.extend((right..hi).map(|i| seq.get(i)));

    for (offset, value) in buffer.into_iter().enumerate() {
        seq.set(lo + offset, value);
    }
}

fn slow<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    slow_inclusive(seq, lo, hi - 1, compare);
}

fn slow_inclusive<S, F>(seq: &mut S, i: usize, j: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    if i >= j {
        return;
    }

    let mid = i + (j - i) / 2;
    slow_inclusive(seq, i, mid, compare);
    slow_inclusive(seq, mid + 1, j, compare);

    // The larger of the two halves' maxima belongs at `j`.
    if compare_at(seq, compare, mid, j) == Ordering::Greater {
        seq.swap(mid, j);
    }
    slow_inclusive(seq, i, j - 1, compare);
}

fn stooge<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    stooge_inclusive(seq, lo, hi - 1, compare);
}

fn stooge_inclusive<S, F>(seq: &mut S, i: usize, j: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    if compare_at(seq, compare, i, j) == Ordering::Greater {
        seq.swap(i, j);
    }

    let len = j - i + 1;
    if len > 2 {
        let third = len / 3;
        stooge_inclusive(seq, i, j - third, compare);
        stooge_inclusive(seq, i + third, j, compare);
        stooge_inclusive(seq, i, j - third, compare);
    }
}
