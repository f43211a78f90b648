//! Core traits and types for sortkit.
//!
//! This module defines:
//! - [`Sequence`]: The indexable, mutable view every algorithm sorts through.
//! - [`FnSequence`]: A [`Sequence`] backed by a pair of caller-supplied closures.
//! - [`Compare`]: The three-way comparator bound.
//! - [`resolve_range`] and [`is_sorted_by`]: Range handling and the ordering check.

use crate::error::SortError;
use log::trace;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::ops::{Bound, Range, RangeBounds};

/// An indexable, mutable sequence of values.
///
/// Algorithms only ever read through [`get`](Sequence::get) and write through
/// [`set`](Sequence::set) (or [`swap`](Sequence::swap)), so any store with random access
/// can be sorted in place: arrays, slices, `Vec`, `VecDeque`, or something that lives
/// behind a pair of closures (see [`FnSequence`]).
///
/// `get` is called once per operand of every comparison. No algorithm caches a value
/// it has read to avoid a second `get`, so accessors with side effects observe a
/// predictable number of calls.
///
/// # Examples
///
/// Implementing for a custom store:
///
/// ```
/// use sortkit::core::Sequence;
///
/// struct Column {
///     cells: Vec<(u32, String)>,
/// }
///
/// // Sort the numeric half of each cell, leaving the labels where they are.
/// impl Sequence for Column {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.cells.len()
///     }
///
///     fn get(&self, index: usize) -> u32 {
///         self.cells[index].0
///     }
///
///     fn set(&mut self, index: usize, value: u32) {
///         self.cells[index].0 = value;
///     }
/// }
/// ```
pub trait Sequence {
    /// The element type handed to the comparator.
    type Item;

    /// Returns the number of items in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the item at `index`.
    fn get(&self, index: usize) -> Self::Item;

    /// Overwrites the item at `index`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Exchanges the items at `a` and `b`.
    ///
    /// The default reads both items and writes both back. Contiguous stores override it
    /// with a native swap.
    fn swap(&mut self, a: usize, b: usize) {
        let x = self.get(a);
        let y = self.get(b);
        self.set(a, y);
        self.set(b, x);
    }

    /// Reverses the half-open range `lo..hi` using only [`swap`](Sequence::swap).
    ///
    /// Not called `reverse`, which would shadow `<[T]>::reverse` on `Vec` and arrays
    /// wherever this trait is in scope.
    fn reverse_range(&mut self, lo: usize, hi: usize) {
        let (mut i, mut j) = (lo, hi);
        while j > i + 1 {
            j -= 1;
            self.swap(i, j);
            i += 1;
        }
    }
}

// Contiguous span binding.
impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// Fixed-size arrays, so `&mut [3, 1, 2]` can be passed directly.
impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Implementation for VecDeque.
// Random access is O(1) even when the ring buffer wraps.
impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// A [`Sequence`] whose reads and writes are delegated to closures.
///
/// This lets the algorithms run over stores that are not arrays at all: a column inside
/// a struct-of-arrays, a memory-mapped record file, or a `RefCell` shared with other code.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use sortkit::core::FnSequence;
/// use sortkit::insertion_sort;
///
/// let store = RefCell::new(vec![30, 10, 20]);
/// let mut seq = FnSequence::new(
///     3,
///     |i| store.borrow()[i],
///     |i, v| store.borrow_mut()[i] = v,
/// );
///
/// insertion_sort(&mut seq, .., i32::cmp).unwrap();
/// assert_eq!(*store.borrow(), vec![10, 20, 30]);
/// ```
pub struct FnSequence<G, S> {
    len: usize,
    get: G,
    set: S,
}

impl<G, S> FnSequence<G, S> {
    /// Binds `len` logical positions to the `get` and `set` closures.
    pub fn new<T>(len: usize, get: G, set: S) -> Self
    where
        G: Fn(usize) -> T,
        S: FnMut(usize, T),
    {
        Self { len, get, set }
    }
}

impl<T, G, S> Sequence for FnSequence<G, S>
where
    G: Fn(usize) -> T,
    S: FnMut(usize, T),
{
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> T {
        (self.get)(index)
    }

    fn set(&mut self, index: usize, value: T) {
        (self.set)(index, value)
    }
}

/// A three-way comparator defining a total preorder over `T`.
///
/// Any `FnMut(&T, &T) -> Ordering` qualifies, including `Ord::cmp` paths such as
/// `i32::cmp`.
pub trait Compare<T>: FnMut(&T, &T) -> Ordering {}
impl<T, F: FnMut(&T, &T) -> Ordering> Compare<T> for F {}

/// Compares the items at positions `a` and `b`, reading each through `get`.
#[inline(always)]
pub(crate) fn compare_at<S, F>(seq: &S, compare: &mut F, a: usize, b: usize) -> Ordering
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    compare(&seq.get(a), &seq.get(b))
}

/// Converts a caller range into a half-open range over a sequence of length `len`.
///
/// Returns `Ok(None)` for an empty range, including ranges whose start lies past their
/// end (`5..=2`); those are valid and sort nothing. A non-empty range reaching past `len`
/// is rejected.
///
/// # Examples
///
/// ```
/// use sortkit::core::resolve_range;
///
/// assert_eq!(resolve_range(5, 1..=3).unwrap(), Some(1..4));
/// assert_eq!(resolve_range(5, ..).unwrap(), Some(0..5));
/// assert_eq!(resolve_range(5, 4..=1).unwrap(), None);
/// assert!(resolve_range(5, 2..=5).is_err());
/// ```
pub fn resolve_range<R: RangeBounds<usize>>(
    len: usize,
    range: R,
) -> Result<Option<Range<usize>>, SortError> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    if start >= end {
        return Ok(None);
    }
    if end > len {
        return Err(SortError::OutOfBounds { end, len });
    }
    Ok(Some(start..end))
}

/// Resolves `range` for `algorithm` and logs the call.
pub(crate) fn prepare<S, R>(
    seq: &S,
    range: R,
    algorithm: &str,
) -> Result<Option<Range<usize>>, SortError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<usize>,
{
    let resolved = resolve_range(seq.len(), range)?;
    trace!("{algorithm} sort over {resolved:?} of {} items", seq.len());
    Ok(resolved)
}

/// Returns `true` if no adjacent pair in `range` compares `Greater`.
///
/// # Examples
///
/// ```
/// use sortkit::core::is_sorted_by;
///
/// let data = [9, 1, 2, 3, 0];
/// assert!(is_sorted_by(&data, 1..=3, i32::cmp).unwrap());
/// assert!(!is_sorted_by(&data, .., i32::cmp).unwrap());
/// ```
pub fn is_sorted_by<S, R, F>(seq: &S, range: R, mut compare: F) -> Result<bool, SortError>
where
    S: Sequence + ?Sized,
    R: RangeBounds<usize>,
    F: Compare<S::Item>,
{
    Ok(match resolve_range(seq.len(), range)? {
        Some(r) => is_sorted_within(seq, r.start, r.end, &mut compare),
        None => true,
    })
}

pub(crate) fn is_sorted_within<S, F>(seq: &S, lo: usize, hi: usize, compare: &mut F) -> bool
where
    S: Sequence + ?Sized,
    F: Compare<S::Item>,
{
    (lo + 1..hi).all(|i| compare_at(seq, compare, i - 1, i) != Ordering::Greater)
}
