//! Pheromone trails and the evaporate-then-reinforce update rule.

use super::config::AcoConfig;
use crate::knapsack::KnapsackSolution;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-item trail strengths for the two decisions.
///
/// Index 0 of each pair is the "leave it out" trail, index 1 the
/// "pack it" trail. After every [`update`](Self::update) all trails are
/// at least the configured floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PheromoneMatrix {
    trails: Vec<[f64; 2]>,
}

impl PheromoneMatrix {
    /// Creates a matrix with every trail set to `initial`.
    pub fn new(num_items: usize, initial: f64) -> Self {
        Self {
            trails: vec![[initial; 2]; num_items],
        }
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Trail strength for packing (`taken = true`) or skipping item `index`.
    pub fn trail(&self, index: usize, taken: bool) -> f64 {
        self.trails[index][taken as usize]
    }

    pub fn take(&self, index: usize) -> f64 {
        self.trail(index, true)
    }

    pub fn not_take(&self, index: usize) -> f64 {
        self.trail(index, false)
    }

    /// All `(not_take, take)` pairs in item order.
    pub fn trails(&self) -> &[[f64; 2]] {
        &self.trails
    }

    /// Smallest trail value in the matrix.
    pub fn min_trail(&self) -> f64 {
        self.trails
            .iter()
            .flatten()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Multiplies every trail by `1 - rate`, then lifts it to `floor`.
    pub fn evaporate(&mut self, rate: f64, floor: f64) {
        let keep = 1.0 - rate;
        for tau in self.trails.iter_mut().flatten() {
            *tau = (*tau * keep).max(floor);
        }
    }

    /// Adds `amount` to every trail matching the decisions in `bits`.
    pub fn deposit(&mut self, bits: &[bool], amount: f64) {
        for (pair, &taken) in self.trails.iter_mut().zip(bits) {
            pair[taken as usize] += amount;
        }
    }

    /// Caps every trail at `ceiling`.
    pub fn clamp_max(&mut self, ceiling: f64) {
        for tau in self.trails.iter_mut().flatten() {
            *tau = tau.min(ceiling);
        }
    }

    /// Applies one iteration's update from the ants' solutions.
    ///
    /// 1. Evaporation with the stagnation floor.
    /// 2. The `elite_count` best feasible solutions (value descending, ties
    ///    by ant order) each deposit `deposit_factor * value / capacity`
    ///    on the trails of their decisions.
    /// 3. The optional ceiling, if configured.
    ///
    /// Returns the number of solutions that deposited.
    pub fn update(
        &mut self,
        solutions: &[KnapsackSolution],
        capacity: u64,
        config: &AcoConfig,
    ) -> usize {
        self.evaporate(config.evaporation_rate, config.min_pheromone);

        let elites = select_elites(solutions, capacity, config.elite_count);
        let scale = config.deposit_factor / capacity.max(1) as f64;
        for &idx in &elites {
            let sol = &solutions[idx];
            self.deposit(&sol.bits, sol.value as f64 * scale);
        }

        if let Some(ceiling) = config.max_pheromone {
            self.clamp_max(ceiling);
        }

        elites.len()
    }
}

/// Indices of the top `k` feasible solutions by value.
///
/// The sort is stable, so equal values keep their ant order.
pub(crate) fn select_elites(solutions: &[KnapsackSolution], capacity: u64, k: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = solutions
        .iter()
        .enumerate()
        .filter(|(_, sol)| sol.is_feasible(capacity))
        .map(|(i, _)| i)
        .collect();
    ranked.sort_by(|&a, &b| solutions[b].value.cmp(&solutions[a].value));
    ranked.truncate(k);
    ranked
}
