//! In-place Fisher-Yates shuffling over an injected random source.

use rand::{Rng, RngCore};

/// A source of uniformly distributed indices.
///
/// Every [`RngCore`] is a source, so a seeded `ChaCha8Rng` can be passed
/// directly. Tests can implement this trait to script the exact swaps.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `0..=max`.
    ///
    /// Implementations must never return a value above `max`.
    fn index_inclusive(&mut self, max: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn index_inclusive(&mut self, max: usize) -> usize {
        self.random_range(0..=max)
    }
}

/// Shuffles `items` in place.
///
/// Walks from the last index down to 1, swapping each position with one
/// drawn from `0..=i`. Slices shorter than two elements are left untouched
/// and the source is never consulted.
///
/// ```
/// use bjcore::shuffle;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let mut items = [1, 2, 3, 4, 5];
/// shuffle(&mut items, &mut rng);
///
/// items.sort_unstable();
/// assert_eq!(items, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], source: &mut R) {
    for i in (1..items.len()).rev() {
        let j = source.index_inclusive(i);
        items.swap(i, j);
    }
}
