//! Shuffles and bogo sort.
//!
//! [`shuffle`] reproduces the classic "swap each position with a random position
//! anywhere in the range" loop. Its output is a permutation of the input but not a
//! uniformly distributed one; use [`fisher_yates`] when uniformity matters.

use crate::core::{Sequence, is_sorted_within, prepare};
use crate::error::SortError;
use crate::random::RandomSource;
use log::{debug, warn};
use std::cmp::Ordering;
use std::ops::RangeBounds;

/// Swaps every position of `range` with a position drawn from the whole range.
///
/// Every draw covers the full range, including positions already visited, so the
/// resulting distribution over permutations is biased.
///
/// For an inclusive range `start..=end` each target comes from
/// `random.next_in(start, end + 1)`, so `end` itself is a possible target. A source
/// replaying draws recorded against an exclusive `[start, end)` window will never have
/// produced `end` and therefore yields a different permutation.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sortkit::shuffle;
///
/// let mut data: Vec<u32> = (1..=10).collect();
/// shuffle(&mut data, .., &mut StdRng::seed_from_u64(7)).unwrap();
///
/// let mut restored = data.clone();
/// restored.sort();
/// assert_eq!(restored, (1..=10).collect::<Vec<_>>());
/// ```
pub fn shuffle<S, R, G>(seq: &mut S, range: R, random: &mut G) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<usize>,
    G: RandomSource + ?Sized,
{
    if let Some(r) = prepare(seq, range, "shuffle")? {
        shuffle_within(seq, r.start, r.end, random);
    }
    Ok(())
}

/// Uniform Fisher–Yates shuffle: position `i` swaps with a position drawn from
/// `start..=i`, walking from the end of the range to its start.
pub fn fisher_yates<S, R, G>(seq: &mut S, range: R, random: &mut G) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<usize>,
    G: RandomSource + ?Sized,
{
    if let Some(r) = prepare(seq, range, "fisher-yates")? {
        for i in (r.start + 1..r.end).rev() {
            let target = random.next_in(r.start, i + 1);
            seq.swap(i, target);
        }
    }
    Ok(())
}

/// Bogo sort: shuffles the range until it happens to be ordered.
///
/// Expected running time is factorial in the length of the range, and there is no
/// upper bound at all. Use [`bogo_sort_bounded`] to cap the number of shuffles.
pub fn bogo_sort<S, R, F, G>(
    seq: &mut S,
    range: R,
    mut compare: F,
    random: &mut G,
) -> Result<(), SortError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<usize>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
    G: RandomSource + ?Sized,
{
    if let Some(r) = prepare(seq, range, "bogo")? {
        let mut shuffles = 0usize;
        while !is_sorted_within(seq, r.start, r.end, &mut compare) {
            shuffle_within(seq, r.start, r.end, random);
            shuffles += 1;
        }
        debug!("bogo sort ordered {} items after {shuffles} shuffles", r.len());
    }
    Ok(())
}

/// Bogo sort that gives up after `max_shuffles` shuffles.
///
/// Returns the number of shuffles that were needed. If the range is still unordered
/// once the budget is spent, fails with [`SortError::BudgetExhausted`] and leaves the
/// range in its last shuffled state.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sortkit::{SortError, bogo_sort_bounded};
///
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let mut sorted = [1, 2, 3];
/// assert_eq!(bogo_sort_bounded(&mut sorted, .., i32::cmp, &mut rng, 0), Ok(0));
///
/// let mut reversed = [3, 2, 1];
/// assert_eq!(
///     bogo_sort_bounded(&mut reversed, .., i32::cmp, &mut rng, 0),
///     Err(SortError::BudgetExhausted { shuffles: 0 })
/// );
/// ```
pub fn bogo_sort_bounded<S, R, F, G>(
    seq: &mut S,
    range: R,
    mut compare: F,
    random: &mut G,
    max_shuffles: usize,
) -> Result<usize, SortError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<usize>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
    G: RandomSource + ?Sized,
{
    let Some(r) = prepare(seq, range, "bounded bogo")? else {
        return Ok(0);
    };

    let mut shuffles = 0usize;
    while !is_sorted_within(seq, r.start, r.end, &mut compare) {
        if shuffles == max_shuffles {
            warn!("bogo sort gave up on {} items after {shuffles} shuffles", r.len());
            return Err(SortError::BudgetExhausted { shuffles });
        }
        shuffle_within(seq, r.start, r.end, random);
        shuffles += 1;
    }
    debug!("bogo sort ordered {} items after {shuffles} shuffles", r.len());
    Ok(shuffles)
}

fn shuffle_within<S, G>(seq: &mut S, lo: usize, hi: usize, random: &mut G)
where
    S: Sequence + ?Sized,
    G: RandomSource + ?Sized,
{
    for i in lo..hi {
        let target = random.next_in(lo, hi);
        seq.swap(i, target);
    }
}
