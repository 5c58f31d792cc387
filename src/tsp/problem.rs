//! The TSP as a [`GaProblem`].

use super::city::City;
use super::tour::{fitness, Tour};
use crate::error::{Error, Result};
use crate::ga::operators::{order_crossover, swap_mutation};
use crate::ga::GaProblem;
use rand::Rng;
use tracing::trace;

/// A validated TSP instance.
///
/// Individuals are [`Tour`]s, fitness is `1 / cycle_length`, recombination
/// is ordered crossover and mutation is a single swap.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: Vec<City>,
}

impl TspProblem {
    /// Validates the instance.
    ///
    /// # Errors
    /// - [`Error::TooFewCities`] for fewer than 2 cities
    /// - [`Error::InvalidCoordinate`] for NaN or infinite coordinates
    /// - [`Error::DegenerateGeometry`] when all cities coincide
    /// - [`Error::CoordinateRange`] when some tour length, or its
    ///   reciprocal, would not be a finite `f64`
    pub fn new(cities: Vec<City>) -> Result<Self> {
        if cities.len() < 2 {
            return Err(Error::TooFewCities {
                found: cities.len(),
            });
        }
        if let Some(index) = cities
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(Error::InvalidCoordinate { index });
        }
        let first = cities[0];
        if cities.iter().all(|c| *c == first) {
            return Err(Error::DegenerateGeometry);
        }
        if !lengths_representable(&cities) {
            return Err(Error::CoordinateRange);
        }
        Ok(Self { cities })
    }

    /// The instance, indexed by city id.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities every tour must visit.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }
}

/// Bounds every tour length of the instance from both sides.
///
/// A closed tour passes through the two extreme cities on each axis, so it
/// is at least twice the wider coordinate span. No edge exceeds the
/// bounding-box diagonal, so it is at most `n` diagonals. If both bounds
/// give finite fitness values, every tour does.
fn lengths_representable(cities: &[City]) -> bool {
    let (min_x, max_x, min_y, max_y) = cities.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(lx, hx, ly, hy), c| (lx.min(c.x), hx.max(c.x), ly.min(c.y), hy.max(c.y)),
    );
    let (span_x, span_y) = (max_x - min_x, max_y - min_y);
    let shortest = 2.0 * span_x.max(span_y);
    let longest = cities.len() as f64 * span_x.hypot(span_y);

    longest.is_finite() && (1.0 / shortest).is_finite()
}

impl GaProblem for TspProblem {
    type Individual = Tour;
    type Fitness = f64;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::random(self.cities.len(), rng)
    }

    fn evaluate(&self, tour: &Tour) -> Result<f64> {
        fitness(tour, &self.cities)
    }

    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
        let child = Tour::from_order(order_crossover(parent1.order(), parent2.order(), rng));
        debug_assert!(child.is_valid_permutation(self.cities.len()));
        child
    }

    fn mutate<R: Rng>(&self, tour: &mut Tour, rng: &mut R) {
        swap_mutation(tour.order_mut(), rng);
        debug_assert!(tour.is_valid_permutation(self.cities.len()));
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        trace!(generation, best_length = 1.0 / best_fitness, "tsp generation");
    }
}
