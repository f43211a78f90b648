//! Pluggable random source for the randomized algorithms.

use rand::Rng;

/// A generator of uniform integers in `[min, max)`.
///
/// Every [`rand::Rng`] is a `RandomSource`, so `rand::rng()` or a seeded
/// `StdRng` can be passed directly. Use [`FnRandom`] to inject a scripted or fake source.
///
/// Callers always pass `min < max`.
pub trait RandomSource {
    /// Returns a value uniformly distributed over `[min, max)`.
    fn next_in(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_in(&mut self, min: usize, max: usize) -> usize {
        self.random_range(min..max)
    }
}

/// Adapts a closure `(min, max) -> value` into a [`RandomSource`].
///
/// # Examples
///
/// ```
/// use sortkit::random::{FnRandom, RandomSource};
///
/// // Always picks the lowest allowed index.
/// let mut lowest = FnRandom(|min: usize, _max: usize| min);
/// assert_eq!(lowest.next_in(3, 9), 3);
/// ```
pub struct FnRandom<F>(pub F);

impl<F: FnMut(usize, usize) -> usize> RandomSource for FnRandom<F> {
    fn next_in(&mut self, min: usize, max: usize) -> usize {
        (self.0)(min, max)
    }
}
