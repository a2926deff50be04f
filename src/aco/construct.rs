//! Ant solution construction.
//!
//! Each ant walks the items in catalog order and decides pack / skip with
//! the classic ACO transition rule, then a greedy fill pass packs any
//! remaining item that still fits, best value/weight ratio first.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::knapsack::{KnapsackProblem, KnapsackSolution};
use rand::Rng;

/// Builds feasible candidate solutions for one problem.
///
/// Heuristic desirabilities and the greedy fill order are computed once
/// and shared by every ant of a run.
#[derive(Debug, Clone)]
pub struct SolutionConstructor<'a> {
    problem: &'a KnapsackProblem,
    heuristic: Vec<f64>,
    /// `heuristic[i].powf(beta)`, cached.
    weighted_heuristic: Vec<f64>,
    fill_order: Vec<usize>,
    alpha: f64,
    zero_score_take_probability: f64,
}

impl<'a> SolutionConstructor<'a> {
    pub fn new(problem: &'a KnapsackProblem, config: &AcoConfig) -> Self {
        let heuristic: Vec<f64> = problem.items().iter().map(|it| it.desirability()).collect();
        let weighted_heuristic = heuristic.iter().map(|eta| eta.powf(config.beta)).collect();

        let mut fill_order: Vec<usize> = (0..heuristic.len()).collect();
        fill_order.sort_by(|&a, &b| heuristic[b].total_cmp(&heuristic[a]));

        Self {
            problem,
            heuristic,
            weighted_heuristic,
            fill_order,
            alpha: config.alpha,
            zero_score_take_probability: config.zero_score_take_probability,
        }
    }

    /// Value/weight desirability per item.
    pub fn heuristic(&self) -> &[f64] {
        &self.heuristic
    }

    /// Item indices in greedy fill order (ratio descending, ties by index).
    pub fn fill_order(&self) -> &[usize] {
        &self.fill_order
    }

    /// Probability of packing item `index` when `used` weight is already packed.
    ///
    /// Zero whenever the item does not fit.
    pub fn take_probability(&self, pheromone: &PheromoneMatrix, index: usize, used: u64) -> f64 {
        let item = &self.problem.items()[index];
        let fits = used.saturating_add(item.weight) <= self.problem.capacity();

        let eta = self.weighted_heuristic[index];
        let take = if fits && eta > 0.0 {
            pheromone.take(index).powf(self.alpha) * eta
        } else {
            0.0
        };
        let skip = pheromone.not_take(index).powf(self.alpha);

        // An overflowed score dominates a finite one.
        match (take.is_infinite(), skip.is_infinite()) {
            (true, false) => return 1.0,
            (false, true) => return 0.0,
            (true, true) => return self.fallback(fits),
            (false, false) => {}
        }

        let total = take + skip;
        if total > 0.0 {
            if total.is_finite() {
                return take / total;
            }
            return (take * 0.5) / (take * 0.5 + skip * 0.5);
        }
        self.fallback(fits)
    }

    /// Take-probability when neither option has a usable score.
    fn fallback(&self, fits: bool) -> f64 {
        if fits {
            self.zero_score_take_probability
        } else {
            0.0
        }
    }

    /// Constructs one solution.
    ///
    /// Consumes exactly one uniform draw per item from `rng`, in catalog
    /// order. The result never exceeds the capacity. Its value saturates at
    /// `u64::MAX`; [`AcoRunner`](super::AcoRunner) rejects catalogs whose
    /// total value would overflow before construction starts.
    pub fn construct<R: Rng>(
        &self,
        pheromone: &PheromoneMatrix,
        rng: &mut R,
    ) -> KnapsackSolution {
        let items = self.problem.items();
        let capacity = self.problem.capacity();
        let mut bits = vec![false; items.len()];
        let mut weight = 0u64;
        let mut value = 0u64;

        for (i, item) in items.iter().enumerate() {
            let p = self.take_probability(pheromone, i, weight);
            let draw: f64 = rng.random();
            if draw < p && weight.saturating_add(item.weight) <= capacity {
                bits[i] = true;
                weight += item.weight;
                value = value.saturating_add(item.value);
            }
        }

        self.fill(&mut bits, &mut weight, &mut value);

        KnapsackSolution { bits, value, weight }
    }

    /// Greedy repair: packs every skipped item that still fits.
    fn fill(&self, bits: &mut [bool], weight: &mut u64, value: &mut u64) {
        let items = self.problem.items();
        let capacity = self.problem.capacity();
        for &i in &self.fill_order {
            if bits[i] {
                continue;
            }
            let item = &items[i];
            if weight.saturating_add(item.weight) <= capacity {
                bits[i] = true;
                *weight += item.weight;
                *value = value.saturating_add(item.value);
            }
        }
    }
}
