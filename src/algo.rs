//! Exchange, insertion and selection sorts.
//!
//! Every algorithm here works in `O(1)` auxiliary memory and touches the sequence only
//! through [`Sequence::get`], [`Sequence::set`] and [`Sequence::swap`]:
//! - **Bubble**, **Cocktail**, **Gnome**, **Odd-even**: adjacent exchanges, stable.
//! - **Insertion**: shift-then-place, stable.
//! - **Selection**, **Shell**, **Comb**, **Pancake**: unstable.
//! - **Cycle**: unstable, writes each misplaced element exactly once.
//!
//! The public entry points are thin wrappers: they resolve the range (see
//! [`resolve_range`](crate::core::resolve_range)) and then run the algorithm over the
//! half-open range `lo..hi`.

use crate::core::{Compare, Sequence, compare_at};
use std::cmp::Ordering;

/// Gap sequence for shell sort (Ciura).
const SHELL_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Comb sort shrinks its gap by a factor of 1.3, expressed as 10/13 in integer arithmetic.
const COMB_SHRINK_NUM: usize = 10;
const COMB_SHRINK_DEN: usize = 13;

macro_rules! entry_point {
    ($(#[$doc:meta])* $name:ident => $body:ident, $label:literal) => {
        $(#[$doc])*
        pub fn $name<S, R, F>(
            seq: &mut S,
            range: R,
            mut compare: F,
        ) -> Result<(), $crate::error::SortError>
        where
            S: $crate::core::Sequence + ?Sized,
            R: ::std::ops::RangeBounds<usize>,
            F: FnMut(&S::Item, &S::Item) -> ::std::cmp::Ordering,
        {
            if let Some(r) = $crate::core::prepare(seq, range, $label)? {
                $body(seq, r.start, r.end, &mut compare);
            }
            Ok(())
        }
    };
}
pub(crate) use entry_point;

entry_point!(
    /// Bubble sort. Stable, `O(n²)`.
    ///
    /// Always makes one pass per element of the range; there is no early exit on a pass
    /// without swaps.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortkit::bubble_sort;
    ///
    /// let mut data = [9, 5, 2, 8, 1];
    /// bubble_sort(&mut data, 1..=3, i32::cmp).unwrap();
    /// assert_eq!(data, [9, 2, 5, 8, 1]);
    /// ```
    bubble_sort => bubble, "bubble"
);

entry_point!(
    /// Selection sort. Unstable, `O(n²)` comparisons, at most `n - 1` swaps.
    ///
    /// Among equal minima the first one found is selected.
    selection_sort => selection, "selection"
);

entry_point!(
    /// Insertion sort. Stable, `O(n)` on sorted input, `O(n²)` otherwise.
    insertion_sort => insertion, "insertion"
);

entry_point!(
    /// Shell sort over the fixed gap sequence `701, 301, 132, 57, 23, 10, 4, 1`. Unstable.
    shell_sort => shell, "shell"
);

entry_point!(
    /// Comb sort with shrink factor 1.3. Unstable.
    ///
    /// Finishes only after a full pass at gap 1 makes no swaps.
    comb_sort => comb, "comb"
);

entry_point!(
    /// Cocktail shaker sort: alternating forward and backward bubble passes. Stable.
    cocktail_sort => cocktail, "cocktail"
);

entry_point!(
    /// Gnome sort: a single cursor that steps back after every swap. Stable.
    gnome_sort => gnome, "gnome"
);

entry_point!(
    /// Odd-even transposition sort. Stable.
    odd_even_sort => odd_even, "odd-even"
);

entry_point!(
    /// Cycle sort. Unstable, `O(n²)` comparisons, minimal number of writes.
    ///
    /// An element already in its final position is never written.
    cycle_sort => cycle, "cycle"
);

entry_point!(
    /// Pancake sort. Unstable, `O(n²)`.
    ///
    /// The only mutation used is reversal of a prefix of the range.
    pancake_sort => pancake, "pancake"
);

/// Swaps `i` and `i + 1` if they are out of order. Returns whether a swap happened.
#[inline(always)]
fn exchange<S, F>(seq: &mut S, i: usize, compare: &mut F) -> bool
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    if compare_at(seq, compare, i, i + 1) == Ordering::Greater {
        seq.swap(i, i + 1);
        true
    } else {
        false
    }
}

fn bubble<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    for _ in lo..hi {
        for j in lo..hi - 1 {
            exchange(seq, j, compare);
        }
    }
}

fn selection<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    for i in lo..hi - 1 {
        let mut min = i;
        for j in i + 1..hi {
            if compare_at(seq, compare, j, min) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            seq.swap(i, min);
        }
    }
}

fn insertion<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    gapped_insertion(seq, lo, hi, 1, compare);
}

/// Insertion sort over the elements `gap` apart. A gap of 1 is plain insertion sort.
fn gapped_insertion<S, F>(seq: &mut S, lo: usize, hi: usize, gap: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    for i in lo + gap..hi {
        let item = seq.get(i);
        let mut j = i;
        // Strict `Greater`: equal elements are never shifted past each other.
        while j >= lo + gap && compare(&seq.get(j - gap), &item) == Ordering::Greater {
            let shifted = seq.get(j - gap);
            seq.set(j, shifted);
            j -= gap;
        }
        if j != i {
            seq.set(j, item);
        }
    }
}

fn shell<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    for gap in SHELL_GAPS {
        gapped_insertion(seq, lo, hi, gap, compare);
    }
}

fn comb<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    let mut gap = hi - lo;
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = (gap * COMB_SHRINK_NUM / COMB_SHRINK_DEN).max(1);
        swapped = false;
        for i in lo..hi - gap {
            if compare_at(seq, compare, i, i + gap) == Ordering::Greater {
                seq.swap(i, i + gap);
                swapped = true;
            }
        }
    }
}

fn cocktail<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    loop {
        let mut swapped = false;
        for i in lo..hi - 1 {
            swapped |= exchange(seq, i, compare);
        }
        for i in (lo..hi - 1).rev() {
            swapped |= exchange(seq, i, compare);
        }
        if !swapped {
            break;
        }
    }
}

fn gnome<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    let mut pos = lo;
    while pos < hi {
        if pos == lo || compare_at(seq, compare, pos - 1, pos) != Ordering::Greater {
            pos += 1;
        } else {
            seq.swap(pos - 1, pos);
            pos -= 1;
        }
    }
}

fn odd_even<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    loop {
        let mut swapped = false;
        // Pairs starting at odd offsets from `lo`, then at even offsets.
        for i in (lo + 1..hi - 1).step_by(2) {
            swapped |= exchange(seq, i, compare);
        }
        for i in (lo..hi - 1).step_by(2) {
            swapped |= exchange(seq, i, compare);
        }
        if !swapped {
            break;
        }
    }
}

fn cycle<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    for start in lo..hi - 1 {
        let mut item = seq.get(start);
        let mut pos = final_position(seq, start, hi, &item, compare);
        if pos == start {
            continue;
        }

        loop {
            // Skip over duplicates already in place.
            while pos + 1 < hi && compare(&item, &seq.get(pos)) == Ordering::Equal {
                pos += 1;
            }
            let displaced = seq.get(pos);
            seq.set(pos, item);
            item = displaced;

            pos = final_position(seq, start, hi, &item, compare);
            if pos == start {
                seq.set(start, item);
                break;
            }
        }
    }
}

/// Counts the elements after `start` that are less than `item`, giving its slot.
fn final_position<S, F>(seq: &S, start: usize, hi: usize, item: &S::Item, compare: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    let less = (start + 1..hi)
        .filter(|&i| compare(&seq.get(i), item) == Ordering::Less)
        .count();
    start + less
}

fn pancake<S, F>(seq: &mut S, lo: usize, hi: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    for end in (lo + 1..hi).rev() {
        let mut max = lo;
        for i in lo + 1..=end {
            if compare_at(seq, compare, i, max) == Ordering::Greater {
                max = i;
            }
        }
        if max != end {
            // Flip the maximum to the front, then flip the whole prefix.
            seq.reverse_range(lo, max + 1);
            seq.reverse_range(lo, end + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FnSequence;
    use std::cell::{Cell, RefCell};

    #[test]
    fn bubble_runs_every_pass() {
        // Sorted input: no swaps, yet n passes of n - 1 comparisons.
        let calls = Cell::new(0);
        let mut data = vec![1, 2, 3, 4];
        bubble_sort(&mut data, .., |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        })
        .unwrap();
        assert_eq!(calls.get(), 4 * 3);
    }

    #[test]
    fn bubble_reads_both_operands_per_comparison() {
        let store = RefCell::new(vec![2, 1, 3]);
        let gets = Cell::new(0);
        let mut seq = FnSequence::new(
            3,
            |i| {
                gets.set(gets.get() + 1);
                store.borrow()[i]
            },
            |i, v| store.borrow_mut()[i] = v,
        );
        bubble_sort(&mut seq, .., i32::cmp).unwrap();
        // 6 comparisons at 2 reads each, plus 2 reads for the single swap.
        assert_eq!(gets.get(), 14);
        assert_eq!(*store.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn insertion_reads_held_item_once() {
        let store = RefCell::new(vec![2, 1, 3]);
        let gets = Cell::new(0);
        let mut seq = FnSequence::new(
            3,
            |i| {
                gets.set(gets.get() + 1);
                store.borrow()[i]
            },
            |i, v| store.borrow_mut()[i] = v,
        );
        insertion_sort(&mut seq, .., i32::cmp).unwrap();
        // Two held items, one read per comparison (2), one read for the single shift.
        assert_eq!(gets.get(), 5);
        assert_eq!(*store.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn selection_picks_first_minimum() {
        let mut data = vec![(1, 'a'), (0, 'b'), (0, 'c')];
        selection_sort(&mut data, .., |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0)).unwrap();
        assert_eq!(data, vec![(0, 'b'), (0, 'c'), (1, 'a')]);
    }

    #[test]
    fn shell_sorts_past_the_largest_gap() {
        let mut data: Vec<u32> = (0..1500).map(|i| (i * 7919) % 1500).collect();
        shell_sort(&mut data, .., u32::cmp).unwrap();
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn cycle_leaves_sorted_input_unwritten() {
        let store = RefCell::new(vec![1, 2, 2, 3, 5]);
        let writes = Cell::new(0);
        let mut seq = FnSequence::new(
            5,
            |i| store.borrow()[i],
            |i, v| {
                writes.set(writes.get() + 1);
                store.borrow_mut()[i] = v;
            },
        );
        cycle_sort(&mut seq, .., i32::cmp).unwrap();
        assert_eq!(writes.get(), 0);
    }

    #[test]
    fn cycle_writes_each_misplaced_element_once() {
        let store = RefCell::new(vec![1, 2, 3, 4, 0]);
        let writes = Cell::new(0);
        let mut seq = FnSequence::new(
            5,
            |i| store.borrow()[i],
            |i, v| {
                writes.set(writes.get() + 1);
                store.borrow_mut()[i] = v;
            },
        );
        cycle_sort(&mut seq, .., i32::cmp).unwrap();
        assert_eq!(*store.borrow(), vec![0, 1, 2, 3, 4]);
        assert_eq!(writes.get(), 5);
    }

    #[test]
    fn cycle_skips_elements_already_home() {
        let store = RefCell::new(vec![4, 1, 2, 3, 0]);
        let writes = Cell::new(0);
        let mut seq = FnSequence::new(
            5,
            |i| store.borrow()[i],
            |i, v| {
                writes.set(writes.get() + 1);
                store.borrow_mut()[i] = v;
            },
        );
        cycle_sort(&mut seq, .., i32::cmp).unwrap();
        assert_eq!(*store.borrow(), vec![0, 1, 2, 3, 4]);
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn cycle_handles_duplicates() {
        let mut data = vec![3, 1, 3, 2, 1, 3, 1];
        cycle_sort(&mut data, .., i32::cmp).unwrap();
        assert_eq!(data, vec![1, 1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn pancake_flips_nothing_when_sorted() {
        let store = RefCell::new(vec![1, 2, 3, 4]);
        let writes = Cell::new(0);
        let mut seq = FnSequence::new(
            4,
            |i| store.borrow()[i],
            |i, v| {
                writes.set(writes.get() + 1);
                store.borrow_mut()[i] = v;
            },
        );
        pancake_sort(&mut seq, .., i32::cmp).unwrap();
        assert_eq!(writes.get(), 0);
    }

    #[test]
    fn comb_sorts_two_elements() {
        let mut data = [2, 1];
        comb_sort(&mut data, .., i32::cmp).unwrap();
        assert_eq!(data, [1, 2]);
    }
}
