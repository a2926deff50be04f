//! 0/1 knapsack problem model.
//!
//! An immutable [`KnapsackProblem`] holds the item catalog and the
//! capacity. Solutions are fixed-length bit-vectors over item positions;
//! [`KnapsackSolution`] caches their total value and weight.
//!
//! # Submodules
//!
//! - [`instance`]: Loader for the plain-text `count / capacity / value weight`
//!   instance format.

pub mod instance;
mod types;

pub use instance::{load_instance, parse_instance, InstanceError};
pub use types::{Item, KnapsackProblem, KnapsackSolution};
