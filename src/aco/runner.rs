//! Colony execution loop.
//!
//! [`AcoRunner`] owns the pheromone matrix for the duration of a run and
//! drives: construct all ants → track best/worst → update trails → record.

use super::config::AcoConfig;
use super::construct::SolutionConstructor;
use super::error::AcoError;
use super::pheromone::PheromoneMatrix;
use crate::knapsack::{KnapsackProblem, KnapsackSolution};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcoResult {
    /// Best feasible solution found over all iterations.
    pub best: KnapsackSolution,

    /// Value of `best`.
    pub best_value: u64,

    /// Lowest feasible value any ant produced. `None` if no ant was feasible.
    pub worst_value: Option<u64>,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Global best value after each iteration. Never decreases.
    pub value_history: Vec<u64>,

    /// Trail strengths after the last update.
    pub pheromone: PheromoneMatrix,

    /// Seed the run was driven by.
    pub seed: u64,
}

/// Per-iteration snapshot passed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationStats {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Best feasible value built in this iteration.
    pub iteration_best: Option<u64>,
    /// Worst feasible value built in this iteration.
    pub iteration_worst: Option<u64>,
    /// Global best value after this iteration.
    pub global_best: u64,
    /// Number of solutions that deposited pheromone.
    pub deposits: usize,
}

/// Executes the knapsack Ant Colony Optimizer.
///
/// # Usage
///
/// ```
/// use knapsack_aco::aco::{AcoConfig, AcoRunner};
/// use knapsack_aco::knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]);
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_max_iterations(30)
///     .with_seed(42);
/// let result = AcoRunner::run(&problem, &config).unwrap();
/// assert!(result.best.weight <= problem.capacity());
/// assert_eq!(result.value_history.len(), 30);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony.
    ///
    /// Fails before the first iteration if the configuration is invalid,
    /// the problem has no items, or its total value overflows `u64`.
    pub fn run(problem: &KnapsackProblem, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs the colony, calling `observer` after every iteration.
    #[instrument(skip_all, fields(items = problem.len(), capacity = problem.capacity()))]
    pub fn run_with_observer<F>(
        problem: &KnapsackProblem,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(&IterationStats),
    {
        config.validate()?;
        if problem.is_empty() {
            return Err(AcoError::EmptyItems);
        }
        if problem.total_value().is_none() {
            return Err(AcoError::ValueOverflow);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let capacity = problem.capacity();

        info!(
            seed,
            ants = config.num_ants,
            iterations = config.max_iterations,
            "starting colony"
        );

        let constructor = SolutionConstructor::new(problem, config);
        let mut pheromone = PheromoneMatrix::new(problem.len(), config.initial_pheromone);

        let mut best = problem.empty_solution();
        let mut worst_value: Option<u64> = None;
        let mut value_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let ants = build_colony(&constructor, &pheromone, &mut rng, config);

            // Best / worst feasible of this iteration; first ant wins ties.
            let mut iter_best: Option<&KnapsackSolution> = None;
            let mut iter_worst: Option<u64> = None;
            for ant in ants.iter().filter(|a| a.is_feasible(capacity)) {
                if iter_best.is_none_or(|b| ant.value > b.value) {
                    iter_best = Some(ant);
                }
                if iter_worst.is_none_or(|w| ant.value < w) {
                    iter_worst = Some(ant.value);
                }
            }

            if let Some(candidate) = iter_best {
                if candidate.value > best.value {
                    best = candidate.clone();
                }
            }
            if let Some(w) = iter_worst {
                worst_value = Some(worst_value.map_or(w, |cur| cur.min(w)));
            }

            let deposits = pheromone.update(&ants, capacity, config);
            value_history.push(best.value);

            let stats = IterationStats {
                iteration,
                iteration_best: iter_best.map(|s| s.value),
                iteration_worst: iter_worst,
                global_best: best.value,
                deposits,
            };
            debug!(
                iteration,
                iteration_best = ?stats.iteration_best,
                global_best = best.value,
                "iteration complete"
            );
            observer(&stats);
        }

        info!(
            best_value = best.value,
            worst_value = ?worst_value,
            "colony finished"
        );

        Ok(AcoResult {
            best_value: best.value,
            best,
            worst_value,
            iterations: config.max_iterations,
            value_history,
            pheromone,
            seed,
        })
    }
}

/// Constructs one solution per ant against a frozen pheromone snapshot.
///
/// Sequential construction draws from the master stream in ant order. In
/// parallel mode each ant gets its own stream seeded from one master draw.
fn build_colony(
    constructor: &SolutionConstructor<'_>,
    pheromone: &PheromoneMatrix,
    rng: &mut StdRng,
    config: &AcoConfig,
) -> Vec<KnapsackSolution> {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            let seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();
            return seeds
                .into_par_iter()
                .map(|s| {
                    let mut ant_rng = StdRng::seed_from_u64(s);
                    constructor.construct(pheromone, &mut ant_rng)
                })
                .collect();
        }
    }

    (0..config.num_ants)
        .map(|_| constructor.construct(pheromone, rng))
        .collect()
}
