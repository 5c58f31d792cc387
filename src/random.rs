//! Random number helpers.
//!
//! Every operator in the crate takes an explicit `&mut R: Rng` handle; this
//! module only decides how a handle is built from a seed and provides the
//! unbiased shuffle used to seed populations.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator used by the runners.
///
/// ChaCha8 gives the same stream for the same seed on every platform and
/// `rand` release, so seeded runs are reproducible.
pub type GaRng = ChaCha8Rng;

/// Creates a generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> GaRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fisher–Yates shuffle.
///
/// Walks from the last index down to 1 and swaps each position with a
/// uniformly drawn index in `[0, i]`. Every permutation is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = create_rng(42);
        let mut v: Vec<usize> = (0..50).collect();
        shuffle(&mut v, &mut rng);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut rng = create_rng(42);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        let mut one = vec![9];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // 3! = 6 permutations, each should appear ~1/6 of the time.
        let mut rng = create_rng(1);
        let mut counts = std::collections::HashMap::new();
        let n = 6000;
        for _ in 0..n {
            let mut v = [0usize, 1, 2];
            shuffle(&mut v, &mut rng);
            *counts.entry(v).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, &c) in &counts {
            assert!(c > 800 && c < 1200, "{perm:?} drawn {c} times out of {n}");
        }
    }
}
