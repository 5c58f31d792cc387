//! Permutation crossover and mutation operators.
//!
//! These operate on `&[usize]` index vectors where every value in `0..n`
//! appears exactly once. Every operator returns (or leaves behind) a valid
//! permutation.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover: slice from `parent1`, remainder in `parent2`'s order.
///
/// Draws `start` and `end` independently and uniformly from `0..n` and
/// delegates to [`order_crossover_at`]. No ordering is enforced between the
/// two cut points: when `end <= start` the slice is empty and the child is
/// a copy of `parent2`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n == 0 {
        return Vec::new();
    }

    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    order_crossover_at(parent1, parent2, start, end)
}

/// Ordered crossover with explicit cut points.
///
/// 1. The child starts as `parent1[start..end]`, in order (empty if
///    `end <= start`).
/// 2. Every element of `parent2` is appended, in `parent2`'s order, unless
///    it is already in the child.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `start`/`end` exceed `n`.
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= n && end <= n, "cut points out of range");

    let mut child = Vec::with_capacity(n);
    let mut placed = vec![false; n];

    if start < end {
        for &city in &parent1[start..end] {
            child.push(city);
            placed[city] = true;
        }
    }

    for &city in parent2 {
        if !placed[city] {
            child.push(city);
            placed[city] = true;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// The two positions are drawn independently and may coincide, in which
/// case the permutation is left unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Checks that `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
