//! Top-K selection over a comparator-driven bounded heap.
//!
//! [`least`] keeps the `count` smallest elements seen so far in a max-heap and evicts
//! the root whenever the heap grows past `count`; [`greatest`] does the same with the
//! comparator reversed. Memory stays at `count + 1` elements regardless of input size.

use crate::error::SortError;
use std::cmp::Ordering;

/// A max-heap (by `compare`) that never holds more than `limit` elements.
///
/// Pushing into a full heap evicts the greatest element, so after any sequence of
/// pushes the heap holds the `limit` least elements pushed.
///
/// # Examples
///
/// ```
/// use sortkit::select::BoundedHeap;
///
/// let mut heap = BoundedHeap::new(2, i32::cmp);
/// assert_eq!(heap.push(5), None);
/// assert_eq!(heap.push(1), None);
/// assert_eq!(heap.push(3), Some(5));
/// assert_eq!(heap.into_sorted_vec(), vec![1, 3]);
/// ```
pub struct BoundedHeap<T, F> {
    items: Vec<T>,
    limit: usize,
    compare: F,
}

impl<T, F> BoundedHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates an empty heap keeping at most `limit` elements.
    pub fn new(limit: usize, compare: F) -> Self {
        Self {
            items: Vec::with_capacity(limit.saturating_add(1)),
            limit,
            compare,
        }
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The greatest element held, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Inserts `item`, returning the element evicted to stay within the limit.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        if self.items.len() > self.limit {
            self.pop()
        } else {
            None
        }
    }

    /// Removes and returns the greatest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let root = self.items.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// Consumes the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted.reverse();
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if (self.compare)(&self.items[node], &self.items[parent]) != Ordering::Greater {
                break;
            }
            self.items.swap(node, parent);
            node = parent;
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;
            let mut largest = node;

            if left < len
                && (self.compare)(&self.items[left], &self.items[largest]) == Ordering::Greater
            {
                largest = left;
            }
            if right < len
                && (self.compare)(&self.items[right], &self.items[largest]) == Ordering::Greater
            {
                largest = right;
            }
            if largest == node {
                break;
            }

            self.items.swap(node, largest);
            node = largest;
        }
    }
}

/// Returns the `count` least elements of `items`, in ascending order.
///
/// Fails with [`SortError::EmptyInput`] if `items` yields nothing, and with
/// [`SortError::InvalidCount`] if `count` is zero or exceeds the number of elements.
///
/// # Examples
///
/// ```
/// use sortkit::select::least;
///
/// let lowest = least([7, 2, 9, 4, 2], 3, i32::cmp).unwrap();
/// assert_eq!(lowest, vec![2, 2, 4]);
/// ```
pub fn least<I, F>(items: I, count: usize, compare: F) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut heap = BoundedHeap::new(count, compare);
    let mut available = 0usize;
    for item in items {
        available += 1;
        heap.push(item);
    }

    if available == 0 {
        return Err(SortError::EmptyInput);
    }
    if count == 0 || count > available {
        return Err(SortError::InvalidCount { count, available });
    }
    Ok(heap.into_sorted_vec())
}

/// Returns the `count` greatest elements of `items`, greatest first.
///
/// Errors as for [`least`].
///
/// # Examples
///
/// ```
/// use sortkit::select::greatest;
///
/// let highest = greatest(vec!["pear", "fig", "apple", "kiwi"], 2, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(highest, vec!["pear", "kiwi"]);
/// ```
pub fn greatest<I, F>(items: I, count: usize, mut compare: F) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    least(items, count, move |a: &I::Item, b: &I::Item| compare(b, a))
}
