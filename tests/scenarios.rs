//! End-to-end scenarios: load an instance, solve it, batch it.

use knapsack_aco::aco::{AcoConfig, AcoError, AcoRunner};
use knapsack_aco::batch::{run_batch, BatchConfig, RunRecord};
use knapsack_aco::knapsack::{load_instance, parse_instance, KnapsackProblem};
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const CLASSIC: &str = "3\n50\n60 10\n100 20\n120 30\n";

#[test]
fn loaded_instance_solves_to_optimum() {
    init_tracing();
    let problem = parse_instance(CLASSIC).unwrap();
    let config = AcoConfig::default()
        .with_num_ants(50)
        .with_max_iterations(40)
        .with_beta(0.0);

    // A heuristic: require the optimum on most seeds, not every one.
    let hits = (0..10u64)
        .filter(|&seed| {
            let result = AcoRunner::run(&problem, &config.clone().with_seed(seed)).unwrap();
            result.best_value == 220
        })
        .count();
    assert!(hits >= 8, "optimum reached on only {hits}/10 seeds");
}

#[test]
fn default_parameters_reach_optimum_on_most_seeds() {
    init_tracing();
    let problem = parse_instance(CLASSIC).unwrap();
    // Default alpha, beta, evaporation and elite size; only the budget is set.
    let config = AcoConfig::default().with_num_ants(50).with_max_iterations(40);

    let hits = (0..20u64)
        .filter(|&seed| {
            let result = AcoRunner::run(&problem, &config.clone().with_seed(seed)).unwrap();
            result.best_value == 220
        })
        .count();
    assert!(hits >= 14, "optimum reached on only {hits}/20 seeds");
}

#[test]
fn overflowing_instance_is_rejected_by_loader_and_runner() {
    let err = parse_instance("2\n10\n18446744073709551615 1\n5 1\n").unwrap_err();
    assert!(err.to_string().contains("overflows"));

    let problem = KnapsackProblem::from_pairs(10, &[(u64::MAX, 1), (5, 1)]);
    let config = AcoConfig::default().with_seed(3);
    assert_eq!(AcoRunner::run(&problem, &config).unwrap_err(), AcoError::ValueOverflow);
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("knapsack-aco-{}.txt", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(CLASSIC.as_bytes()).unwrap();
    }

    let problem = load_instance(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(problem, KnapsackProblem::from_pairs(50, &[(60, 10), (100, 20), (120, 30)]));
}

#[test]
fn single_item_any_budget() {
    let problem = KnapsackProblem::from_pairs(5, &[(10, 5)]);
    for iterations in [1, 2, 10] {
        let config = AcoConfig::default()
            .with_num_ants(3)
            .with_max_iterations(iterations)
            .with_seed(iterations as u64);
        let result = AcoRunner::run(&problem, &config).unwrap();
        assert_eq!(result.best_value, 10);
    }
}

#[test]
fn capacity_zero_yields_empty_solution() {
    let problem = parse_instance("2\n0\n4 2\n9 3\n").unwrap();
    let config = AcoConfig::default().with_num_ants(4).with_max_iterations(3).with_seed(0);
    let result = AcoRunner::run(&problem, &config).unwrap();
    assert_eq!(result.best_value, 0);
    assert!(result.best.bits.iter().all(|&b| !b));
}

#[test]
fn empty_instance_is_a_configuration_error() {
    let problem = parse_instance("0\n10\n").unwrap();
    let err = AcoRunner::run(&problem, &AcoConfig::default().with_seed(1)).unwrap_err();
    assert_eq!(err, AcoError::EmptyItems);
}

#[test]
fn batch_report_round_trip() {
    init_tracing();
    let problem = parse_instance(CLASSIC).unwrap();
    let config = AcoConfig::default().with_num_ants(10).with_max_iterations(10);
    let batch = BatchConfig::default().with_executions(5).with_base_seed(42);

    let report = run_batch(&problem, &config, &batch).unwrap();

    assert_eq!(report.runs.len(), 5);
    assert!(report.summary.worst <= report.summary.best);
    assert!(report.summary.mean >= report.summary.worst as f64);
    assert!(report.summary.mean <= report.summary.best as f64);
    // Every maximal packing of this instance is worth at least 160.
    assert!(report.summary.worst >= 160);

    let csv = report.to_csv();
    assert!(csv.starts_with(RunRecord::CSV_HEADER));
    assert_eq!(csv.lines().count(), 6);
}
