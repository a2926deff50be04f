//! Ant Colony Optimization for the 0/1 knapsack problem.
//!
//! Given a capacity and an ordered catalog of items (value, weight), the
//! optimizer searches for a subset of maximal total value whose weight fits.
//! It is a heuristic: good solutions, no optimality guarantee.
//!
//! - **Knapsack model** ([`knapsack`]): Items, problem definition,
//!   solution evaluation, and a plain-text instance loader.
//! - **ACO engine** ([`aco`]): Pheromone-guided probabilistic construction
//!   with greedy repair, evaporation + elitist deposit, and a seeded run
//!   loop that records a monotone convergence history.
//! - **Batches** ([`batch`]): Repeated independent runs with summary
//!   statistics and CSV rows.
//!
//! # Features
//!
//! - `parallel`: Builds the ants of an iteration (and the runs of a batch)
//!   concurrently with rayon.
//! - `serde`: Serialize / deserialize configs, instances, and results.
//!
//! # Logging
//!
//! Runs emit `tracing` events: `info` at start and end of each run and
//! batch, `debug` once per iteration. Install any subscriber to see them.

pub mod aco;
pub mod batch;
pub mod knapsack;
