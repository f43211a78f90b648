//! # sortkit
//!
//! `sortkit` is a collection of classic comparison sorts that work **in place** over any
//! indexable store, not just slices.
//!
//! Every algorithm is a single generic procedure over the [`Sequence`] trait, a pair of
//! `get`/`set` operations. Arrays, slices, `Vec` and `VecDeque` implement it out of the
//! box, and [`FnSequence`](crate::core::FnSequence) turns any pair of closures into one, so the
//! same code sorts a column of a struct-of-arrays or a store behind a `RefCell`.
//!
//! ## Key Features
//!
//! - **Sixteen algorithms**: bubble, selection, insertion, shell, comb, cocktail, gnome,
//!   odd-even, cycle, heap, quick, merge, slow, stooge, pancake and bogo sort.
//! - **Sub-range sorting**: every entry point takes a range (`..`, `2..7`, `1..=3`);
//!   elements outside it are never touched, and a range whose start lies past its end
//!   is an empty no-op.
//! - **Three-way comparators**: any `FnMut(&T, &T) -> Ordering`.
//! - **Injectable randomness**: shuffles and bogo sort take a [`RandomSource`], which any
//!   `rand::Rng` satisfies, so tests can pass a seeded or scripted source.
//! - **Top-K selection** over a bounded heap in [`select`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use sortkit::merge_sort;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! merge_sort(&mut data, .., |a, b| a.cmp(b)).unwrap();
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Custom Stores
//!
//! ```rust
//! use std::cell::RefCell;
//! use sortkit::core::FnSequence;
//! use sortkit::heap_sort;
//!
//! // Keys and payloads live in separate columns; sort the keys in place.
//! let keys = RefCell::new(vec![30u32, 10, 20]);
//! let mut column = FnSequence::new(
//!     3,
//!     |i| keys.borrow()[i],
//!     |i, v| keys.borrow_mut()[i] = v,
//! );
//!
//! heap_sort(&mut column, .., u32::cmp).unwrap();
//! assert_eq!(*keys.borrow(), vec![10, 20, 30]);
//! ```
//!
//! ## Algorithm Characteristics
//!
//! | Algorithm | Stable | Extra memory | Worst case |
//! |---|---|---|---|
//! | bubble, cocktail, gnome, odd-even, insertion | yes | `O(1)` | `O(n²)` |
//! | selection, shell, comb, cycle, pancake | no | `O(1)` | `O(n²)` |
//! | heap | no | `O(1)` | `O(n log n)` |
//! | quick | no | `O(log n)` stack | `O(n²)` |
//! | merge | yes | `O(n)` | `O(n log n)` |
//! | stooge | no | `O(log n)` stack | `O(n^2.71)` |
//! | slow | no | `O(n)` stack | super-polynomial |
//! | bogo | no | `O(1)` | unbounded |
//!
//! Bogo and slow sort exist for teaching; [`bogo_sort_bounded`] caps the number of
//! shuffles for callers that need a guaranteed exit.

pub mod algo;
pub mod algorithm;
pub mod core;
pub mod error;
pub mod random;
pub mod randomized;
pub mod recursive;
pub mod select;

pub use algo::{
    bubble_sort, cocktail_sort, comb_sort, cycle_sort, gnome_sort, insertion_sort,
    odd_even_sort, pancake_sort, selection_sort, shell_sort,
};
pub use algorithm::Algorithm;
pub use crate::core::{Sequence, is_sorted_by};
pub use error::SortError;
pub use random::RandomSource;
pub use randomized::{bogo_sort, bogo_sort_bounded, fisher_yates, shuffle};
pub use recursive::{heap_sort, merge_sort, quick_sort, slow_sort, stooge_sort};

pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::core::{FnSequence, Sequence, is_sorted_by};
    pub use crate::error::SortError;
    pub use crate::random::RandomSource;
    pub use crate::select::{greatest, least};
    pub use crate::{
        bogo_sort, bogo_sort_bounded, bubble_sort, cocktail_sort, comb_sort, cycle_sort,
        fisher_yates, gnome_sort, heap_sort, insertion_sort, merge_sort, odd_even_sort,
        pancake_sort, quick_sort, selection_sort, shell_sort, shuffle, slow_sort,
        stooge_sort,
    };
}
