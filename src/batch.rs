//! Repeated independent runs and their aggregate statistics.
//!
//! A stochastic optimizer is judged over many seeds, not one. [`run_batch`]
//! executes the colony once per seed (`base_seed`, `base_seed + 1`, ...)
//! and summarizes the best values reached.

use crate::aco::{AcoConfig, AcoError, AcoRunner};
use crate::knapsack::KnapsackProblem;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Batch parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Number of independent runs.
    pub executions: usize,

    /// Seed of the first run; run `k` uses `base_seed + k`.
    pub base_seed: u64,

    /// Execute runs concurrently (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            executions: 20,
            base_seed: 0,
            parallel: false,
        }
    }
}

impl BatchConfig {
    pub fn with_executions(mut self, n: usize) -> Self {
        self.executions = n;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Outcome of one run in a batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunRecord {
    /// 1-based execution number.
    pub execution: usize,
    pub best_value: u64,
    pub worst_value: Option<u64>,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    pub seed: u64,
    /// Ids of the items in the best solution.
    pub included_ids: Vec<usize>,
}

impl RunRecord {
    pub const CSV_HEADER: &'static str =
        "Execution,BestValue,WorstValue,TimeSeconds,Seed,IncludedItemIds";

    /// Formats the record as a CSV row matching [`CSV_HEADER`](Self::CSV_HEADER).
    ///
    /// Item ids are `;`-separated; a missing worst value is an empty field.
    pub fn csv_row(&self) -> String {
        let worst = self.worst_value.map(|w| w.to_string()).unwrap_or_default();
        let ids = self
            .included_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{},{},{},{:.6},{},{}",
            self.execution,
            self.best_value,
            worst,
            self.elapsed.as_secs_f64(),
            self.seed,
            ids
        )
    }
}

/// Statistics over the best values of a batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSummary {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub median: f64,
    /// Highest best value over all runs.
    pub best: u64,
    /// Lowest best value over all runs.
    pub worst: u64,
    /// How many runs ended on each best value.
    pub value_frequencies: BTreeMap<u64, usize>,
}

impl BatchSummary {
    /// Summarizes a non-empty list of values. Returns `None` when empty.
    pub fn from_values(values: &[u64]) -> Option<Self> {
        let n = values.len();
        if n == 0 {
            return None;
        }

        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n as f64;

        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let median = if n % 2 == 1 {
            sorted[n / 2] as f64
        } else {
            (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
        };

        let mut value_frequencies = BTreeMap::new();
        for &v in values {
            *value_frequencies.entry(v).or_insert(0) += 1;
        }

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            median,
            best: sorted[n - 1],
            worst: sorted[0],
            value_frequencies,
        })
    }
}

/// All runs of a batch plus their summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchReport {
    /// Runs in execution order.
    pub runs: Vec<RunRecord>,
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Header plus one CSV row per run, newline-terminated.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(RunRecord::CSV_HEADER);
        out.push('\n');
        for run in &self.runs {
            out.push_str(&run.csv_row());
            out.push('\n');
        }
        out
    }
}

/// Runs the colony `batch.executions` times with consecutive seeds.
///
/// `config.seed` is ignored; each run gets its own seed from `batch`.
///
/// # Examples
///
/// ```
/// use knapsack_aco::aco::AcoConfig;
/// use knapsack_aco::batch::{run_batch, BatchConfig};
/// use knapsack_aco::knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]);
/// let config = AcoConfig::default().with_num_ants(10).with_max_iterations(10);
/// let report = run_batch(&problem, &config, &BatchConfig::default().with_executions(3)).unwrap();
/// assert_eq!(report.runs.len(), 3);
/// assert!(report.summary.best <= 220);
/// ```
#[instrument(skip_all, fields(executions = batch.executions, base_seed = batch.base_seed))]
pub fn run_batch(
    problem: &KnapsackProblem,
    config: &AcoConfig,
    batch: &BatchConfig,
) -> Result<BatchReport, AcoError> {
    if batch.executions == 0 {
        return Err(AcoError::invalid("executions", "must be at least 1"));
    }
    config.validate()?;

    let run_one = |k: usize| -> Result<RunRecord, AcoError> {
        let seed = batch.base_seed.wrapping_add(k as u64);
        let run_config = config.clone().with_seed(seed);
        let start = Instant::now();
        let result = AcoRunner::run(problem, &run_config)?;
        let elapsed = start.elapsed();
        Ok(RunRecord {
            execution: k + 1,
            best_value: result.best_value,
            worst_value: result.worst_value,
            elapsed,
            seed,
            included_ids: result.best.included_ids(problem),
        })
    };

    let runs = execute(batch, run_one)?;

    let best_values: Vec<u64> = runs.iter().map(|r| r.best_value).collect();
    let summary = BatchSummary::from_values(&best_values)
        .ok_or_else(|| AcoError::invalid("executions", "must be at least 1"))?;

    info!(
        mean = summary.mean,
        std_dev = summary.std_dev,
        best = summary.best,
        worst = summary.worst,
        "batch finished"
    );

    Ok(BatchReport { runs, summary })
}

fn execute<F>(batch: &BatchConfig, run_one: F) -> Result<Vec<RunRecord>, AcoError>
where
    F: Fn(usize) -> Result<RunRecord, AcoError> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if batch.parallel {
            return (0..batch.executions).into_par_iter().map(&run_one).collect();
        }
    }

    (0..batch.executions).map(run_one).collect()
}
