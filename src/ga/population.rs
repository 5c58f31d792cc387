//! Evaluated populations kept in descending-fitness order.

use super::types::Fitness;
use std::cmp::Ordering;

/// An individual together with the fitness computed for it.
///
/// Members are immutable once built, so the stored fitness cannot go stale.
#[derive(Debug, Clone)]
pub struct Member<I, F> {
    /// The candidate solution.
    pub individual: I,
    /// Its fitness at the time it was evaluated.
    pub fitness: F,
}

/// An ordered collection of evaluated individuals.
///
/// Sorted by descending fitness (best first) on construction, so elitism
/// and best-individual lookups are positional. The sort is stable: among
/// equally fit members the earlier one stays first.
#[derive(Debug, Clone)]
pub struct Population<I, F> {
    members: Vec<Member<I, F>>,
}

impl<I, F: Fitness> Population<I, F> {
    /// Builds a population from evaluated members and sorts it.
    ///
    /// # Panics
    /// Panics if `members` is empty.
    pub fn from_members(mut members: Vec<Member<I, F>>) -> Self {
        assert!(!members.is_empty(), "population must not be empty");
        members.sort_by(|a, b| descending(a.fitness, b.fitness));
        Self { members }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; populations are never empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in descending-fitness order.
    pub fn members(&self) -> &[Member<I, F>] {
        &self.members
    }

    /// The fittest member.
    pub fn best(&self) -> &Member<I, F> {
        &self.members[0]
    }

    /// Consumes the population and returns its fittest member.
    pub fn into_best(self) -> Member<I, F> {
        self.members
            .into_iter()
            .next()
            .expect("population must not be empty")
    }

    /// The top `count` members (fewer if the population is smaller).
    pub fn elites(&self, count: usize) -> &[Member<I, F>] {
        &self.members[..count.min(self.members.len())]
    }

    /// Whether members are in descending-fitness order.
    pub fn is_sorted(&self) -> bool {
        self.members
            .windows(2)
            .all(|w| descending(w[0].fitness, w[1].fitness) != Ordering::Greater)
    }
}

/// Best-first ordering. Incomparable values (NaN) are treated as equal.
fn descending<F: Fitness>(a: F, b: F) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(fitnesses: &[f64]) -> Population<usize, f64> {
        Population::from_members(
            fitnesses
                .iter()
                .enumerate()
                .map(|(i, &fitness)| Member {
                    individual: i,
                    fitness,
                })
                .collect(),
        )
    }

    #[test]
    fn test_sorted_best_first() {
        let pop = make(&[0.1, 0.5, 0.3, 0.9]);
        assert!(pop.is_sorted());
        let order: Vec<usize> = pop.members().iter().map(|m| m.individual).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
        assert_eq!(pop.best().individual, 3);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let pop = make(&[0.2, 0.7, 0.7, 0.1]);
        assert_eq!(pop.best().individual, 1);
        assert_eq!(pop.into_best().individual, 1);
    }

    #[test]
    fn test_elites() {
        let pop = make(&[0.1, 0.5, 0.3, 0.9]);
        assert!(pop.elites(0).is_empty());
        let top: Vec<usize> = pop.elites(2).iter().map(|m| m.individual).collect();
        assert_eq!(top, vec![3, 1]);
        assert_eq!(pop.elites(10).len(), 4);
    }

    #[test]
    fn test_is_sorted_detects_disorder() {
        let pop = Population {
            members: vec![
                Member { individual: 0, fitness: 0.1 },
                Member { individual: 1, fitness: 0.9 },
            ],
        };
        assert!(!pop.is_sorted());
    }

    #[test]
    #[should_panic(expected = "population must not be empty")]
    fn test_empty_panics() {
        make(&[]);
    }
}
