//! Ant Colony Optimization (ACO) for the 0/1 knapsack problem.
//!
//! Every iteration, a colony of ants each builds a candidate packing by
//! walking the items and choosing pack / skip with probability driven by
//! pheromone trails and the value/weight ratio. A greedy fill pass keeps
//! every candidate feasible and maximal. Trails then evaporate, and the
//! best few candidates of the iteration reinforce the decisions they made.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony size, exponents, evaporation, deposit policy
//! - [`PheromoneMatrix`]: Pack / skip trail strengths per item
//! - [`SolutionConstructor`]: Probabilistic construction + greedy fill
//! - [`AcoRunner`]: Executes the iteration loop
//! - [`AcoResult`]: Best solution, worst value, convergence history
//!
//! # Reproducibility
//!
//! Sequential runs draw from one seeded stream in a fixed order (one draw
//! per item per ant), so equal seeds give equal results. Parallel
//! construction (feature `parallel`) seeds one stream per ant from the
//! master stream: reproducible, but not identical to the sequential run.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Leguizamón & Michalewicz (1999), "A New Version of Ant System for
//!   Subset Problems"

mod config;
mod construct;
mod error;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use construct::SolutionConstructor;
pub use error::AcoError;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner, IterationStats};
