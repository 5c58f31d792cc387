//! Property tests: every operator leaves a valid permutation behind, and
//! seeded runs are reproducible.

use proptest::prelude::*;
use u_tsp::ga::operators::{is_permutation, order_crossover, order_crossover_at, swap_mutation};
use u_tsp::ga::{GaConfig, GaRunner};
use u_tsp::random::{create_rng, shuffle};
use u_tsp::tsp::{cycle_length, fitness, City, Tour, TspProblem};

/// A random permutation of `0..n` for `n` in `2..max`.
fn permutation(max: usize) -> impl Strategy<Value = Vec<usize>> {
    (2..max).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

/// Two random permutations of the same length.
fn parents(max: usize) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (2..max).prop_flat_map(|n| {
        let base: Vec<usize> = (0..n).collect();
        (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
    })
}

fn instance(max: usize) -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-1000.0..1000.0f64, -1000.0..1000.0f64), 2..max)
        .prop_map(|pts| pts.into_iter().map(City::from).collect())
}

proptest! {
    #[test]
    fn shuffle_yields_permutation(n in 0usize..200, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let mut v: Vec<usize> = (0..n).collect();
        shuffle(&mut v, &mut rng);
        prop_assert!(is_permutation(&v, n));
    }

    #[test]
    fn crossover_yields_permutation((a, b) in parents(60), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let child = order_crossover(&a, &b, &mut rng);
        prop_assert!(is_permutation(&child, a.len()));
    }

    #[test]
    fn crossover_keeps_slice_and_donor_order(
        (a, b) in parents(40),
        s in 0usize..40,
        e in 0usize..40,
    ) {
        let n = a.len();
        let (start, end) = (s % n, e % n);
        let child = order_crossover_at(&a, &b, start, end);
        prop_assert!(is_permutation(&child, n));

        let slice: &[usize] = if start < end { &a[start..end] } else { &[] };
        prop_assert_eq!(&child[..slice.len()], slice);

        let rest: Vec<usize> = b.iter().copied().filter(|c| !slice.contains(c)).collect();
        prop_assert_eq!(&child[slice.len()..], rest.as_slice());
    }

    #[test]
    fn equal_cut_points_copy_second_parent((a, b) in parents(40), cut in 0usize..40) {
        let cut = cut % a.len();
        prop_assert_eq!(order_crossover_at(&a, &b, cut, cut), b);
    }

    #[test]
    fn swap_yields_permutation(mut perm in permutation(80), seed in any::<u64>()) {
        let n = perm.len();
        let mut rng = create_rng(seed);
        swap_mutation(&mut perm, &mut rng);
        prop_assert!(is_permutation(&perm, n));
    }

    #[test]
    fn fitness_is_reciprocal_of_length(cities in instance(30), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let tour = Tour::random(cities.len(), &mut rng);
        let length = cycle_length(&tour, &cities);
        prop_assume!(length > 0.0);
        let f = fitness(&tour, &cities).unwrap();
        prop_assert!((f * length - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cycle_length_is_rotation_invariant(cities in instance(20), seed in any::<u64>(), k in 0usize..20) {
        let mut rng = create_rng(seed);
        let tour = Tour::random(cities.len(), &mut rng);
        let mut rotated = tour.order().to_vec();
        rotated.rotate_left(k % cities.len());
        let a = cycle_length(&tour, &cities);
        let b = cycle_length(&Tour::from_order(rotated), &cities);
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn seeded_runs_are_reproducible_and_elitist(
        cities in instance(15),
        seed in any::<u64>(),
        population in 10usize..40,
    ) {
        let problem = match TspProblem::new(cities) {
            Ok(p) => p,
            Err(_) => return Ok(()),
        };
        let config = GaConfig::default()
            .with_population_size(population)
            .with_generations(20)
            .with_mutation_rate(0.3)
            .with_seed(seed);

        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        prop_assert_eq!(&a.best, &b.best);
        prop_assert_eq!(&a.fitness_history, &b.fitness_history);
        prop_assert!(a.best.is_valid_permutation(problem.num_cities()));
        for w in a.fitness_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
    }
}
