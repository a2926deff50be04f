//! Property tests over random instances.

use knapsack_aco::aco::{AcoConfig, AcoRunner, PheromoneMatrix, SolutionConstructor};
use knapsack_aco::knapsack::KnapsackProblem;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn instance() -> impl Strategy<Value = KnapsackProblem> {
    (
        0u64..200,
        prop::collection::vec((0u64..100, 0u64..60), 1..16),
    )
        .prop_map(|(capacity, pairs)| KnapsackProblem::from_pairs(capacity, &pairs))
}

fn small_config(seed: u64) -> AcoConfig {
    AcoConfig::default()
        .with_num_ants(6)
        .with_max_iterations(8)
        .with_seed(seed)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn constructed_solutions_are_feasible(
        problem in instance(),
        tau in 0.001f64..50.0,
        alpha in 0.0f64..3.0,
        beta in 0.0f64..5.0,
        seed in any::<u64>(),
    ) {
        let config = AcoConfig::default().with_alpha(alpha).with_beta(beta);
        let ctor = SolutionConstructor::new(&problem, &config);
        let pheromone = PheromoneMatrix::new(problem.len(), tau);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 {
            let sol = ctor.construct(&pheromone, &mut rng);
            prop_assert_eq!(sol.bits.len(), problem.len());
            prop_assert!(sol.weight <= problem.capacity());
            prop_assert_eq!(sol.value, problem.value_of(&sol.bits));
            prop_assert_eq!(sol.weight, problem.weight_of(&sol.bits));
        }
    }

    #[test]
    fn best_solution_is_consistent(problem in instance(), seed in any::<u64>()) {
        let result = AcoRunner::run(&problem, &small_config(seed)).unwrap();
        prop_assert_eq!(problem.value_of(&result.best.bits), result.best_value);
        prop_assert!(problem.weight_of(&result.best.bits) <= problem.capacity());
        prop_assert!(result.worst_value.unwrap_or(0) <= result.best_value);
    }

    #[test]
    fn history_never_regresses(problem in instance(), seed in any::<u64>()) {
        let result = AcoRunner::run(&problem, &small_config(seed)).unwrap();
        prop_assert_eq!(result.value_history.len(), 8);
        for w in result.value_history.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn trails_stay_above_floor(
        problem in instance(),
        rate in 0.0f64..0.999,
        seed in any::<u64>(),
    ) {
        let config = small_config(seed).with_evaporation_rate(rate);
        let result = AcoRunner::run(&problem, &config).unwrap();
        prop_assert!(result.pheromone.min_trail() >= config.min_pheromone);
    }

    #[test]
    fn same_seed_same_run(problem in instance(), seed in any::<u64>()) {
        let config = small_config(seed);
        let a = AcoRunner::run(&problem, &config).unwrap();
        let b = AcoRunner::run(&problem, &config).unwrap();
        prop_assert_eq!(a, b);
    }
}
