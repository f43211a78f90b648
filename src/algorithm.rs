//! Runtime selection among the sorting algorithms.

use crate::core::Sequence;
use crate::error::SortError;
use crate::random::RandomSource;
use crate::{algo, randomized, recursive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeBounds;

/// One of the sixteen sorting algorithms, chosen at runtime.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sortkit::Algorithm;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// for algorithm in Algorithm::ALL {
///     let mut data = vec![5, 3, 4, 1, 2];
///     algorithm.sort_by(&mut data, .., i32::cmp, &mut rng).unwrap();
///     assert_eq!(data, vec![1, 2, 3, 4, 5], "{algorithm}");
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Comb,
    Cocktail,
    Gnome,
    OddEven,
    Cycle,
    Heap,
    Quick,
    Merge,
    Slow,
    Stooge,
    Pancake,
    Bogo,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 16] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Comb,
        Algorithm::Cocktail,
        Algorithm::Gnome,
        Algorithm::OddEven,
        Algorithm::Cycle,
        Algorithm::Heap,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Slow,
        Algorithm::Stooge,
        Algorithm::Pancake,
        Algorithm::Bogo,
    ];

    /// Lower-case name, as used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "shell",
            Algorithm::Comb => "comb",
            Algorithm::Cocktail => "cocktail",
            Algorithm::Gnome => "gnome",
            Algorithm::OddEven => "odd-even",
            Algorithm::Cycle => "cycle",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Slow => "slow",
            Algorithm::Stooge => "stooge",
            Algorithm::Pancake => "pancake",
            Algorithm::Bogo => "bogo",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::Insertion
                | Algorithm::Cocktail
                | Algorithm::Gnome
                | Algorithm::OddEven
                | Algorithm::Merge
        )
    }

    /// Whether the running time is unbounded or super-polynomial, making the algorithm
    /// unsuitable for anything beyond a handful of elements.
    pub fn is_impractical(self) -> bool {
        matches!(self, Algorithm::Slow | Algorithm::Bogo)
    }

    /// Sorts `range` of `seq` with this algorithm.
    ///
    /// `random` is only consulted by [`Algorithm::Bogo`].
    pub fn sort_by<S, R, F, G>(
        self,
        seq: &mut S,
        range: R,
        compare: F,
        random: &mut G,
    ) -> Result<(), SortError>
    where
        S: Sequence + ?Sized,
        R: RangeBounds<usize>,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
        G: RandomSource + ?Sized,
    {
        match self {
            Algorithm::Bubble => algo::bubble_sort(seq, range, compare),
            Algorithm::Selection => algo::selection_sort(seq, range, compare),
            Algorithm::Insertion => algo::insertion_sort(seq, range, compare),
            Algorithm::Shell => algo::shell_sort(seq, range, compare),
            Algorithm::Comb => algo::comb_sort(seq, range, compare),
            Algorithm::Cocktail => algo::cocktail_sort(seq, range, compare),
            Algorithm::Gnome => algo::gnome_sort(seq, range, compare),
            Algorithm::OddEven => algo::odd_even_sort(seq, range, compare),
            Algorithm::Cycle => algo::cycle_sort(seq, range, compare),
            Algorithm::Pancake => algo::pancake_sort(seq, range, compare),
            Algorithm::Heap => recursive::heap_sort(seq, range, compare),
            Algorithm::Quick => recursive::quick_sort(seq, range, compare),
            Algorithm::Merge => recursive::merge_sort(seq, range, compare),
            Algorithm::Slow => recursive::slow_sort(seq, range, compare),
            Algorithm::Stooge => recursive::stooge_sort(seq, range, compare),
            Algorithm::Bogo => randomized::bogo_sort(seq, range, compare, random),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
