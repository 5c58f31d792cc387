//! Tours and the cycle-length fitness function.

use super::city::{distance, City};
use crate::error::{Error, Result};
use crate::ga::operators::is_permutation;
use crate::random::shuffle;
use rand::Rng;

/// A closed tour: a permutation of the city indices `0..n`.
///
/// The edge from the last city back to the first is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting order.
    ///
    /// `order` must be a permutation of `0..order.len()`; checked in debug
    /// builds. Whether it matches an instance's size is checked by
    /// [`fitness`].
    pub fn from_order(order: Vec<usize>) -> Self {
        debug_assert!(
            is_permutation(&order, order.len()),
            "tour order must be a permutation: {order:?}"
        );
        Self { order }
    }

    /// The tour `0, 1, .., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// A uniformly random tour over `n` cities (Fisher–Yates).
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut tour = Self::identity(n);
        shuffle(&mut tour.order, rng);
        tour
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Consumes the tour and returns its visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tour visits no city at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether every index in `0..n` appears exactly once.
    pub fn is_valid_permutation(&self, n: usize) -> bool {
        is_permutation(&self.order, n)
    }

    /// Visited cities, in order.
    pub fn cities<'a>(&'a self, cities: &'a [City]) -> impl Iterator<Item = &'a City> + 'a {
        self.order.iter().map(move |&i| &cities[i])
    }
}

/// Total length of the closed cycle, wrap-around edge included.
///
/// # Panics
/// Panics if the tour references an index outside `cities`.
pub fn cycle_length(tour: &Tour, cities: &[City]) -> f64 {
    let order = tour.order();
    match order {
        [] | [_] => 0.0,
        [.., last] => {
            let open: f64 = order
                .windows(2)
                .map(|w| distance(&cities[w[0]], &cities[w[1]]))
                .sum();
            open + distance(&cities[*last], &cities[order[0]])
        }
    }
}

/// Fitness of a tour: `1 / cycle_length`.
///
/// # Errors
/// - [`Error::TourSizeMismatch`] when the tour does not visit every city
/// - [`Error::ZeroLengthTour`] when the length is zero
/// - [`Error::FitnessOutOfRange`] when the length or its reciprocal is not
///   finite
///
/// Infinities and NaN never reach fitness comparisons.
pub fn fitness(tour: &Tour, cities: &[City]) -> Result<f64> {
    if tour.len() != cities.len() {
        return Err(Error::TourSizeMismatch {
            expected: cities.len(),
            found: tour.len(),
        });
    }
    let length = cycle_length(tour, cities);
    if length == 0.0 {
        return Err(Error::ZeroLengthTour);
    }
    let fitness = 1.0 / length;
    if !length.is_finite() || !fitness.is_finite() {
        return Err(Error::FitnessOutOfRange { length });
    }
    Ok(fitness)
}
