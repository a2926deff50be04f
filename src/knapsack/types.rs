//! Item catalog, problem definition, and solution representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single knapsack item.
///
/// The position of an item inside [`KnapsackProblem::items`] is the index
/// used by every decision vector; `id` is carried through for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// External identifier (the loader assigns the input position).
    pub id: usize,
    /// Value gained when the item is packed.
    pub value: u64,
    /// Weight consumed when the item is packed.
    pub weight: u64,
}

impl Item {
    pub fn new(id: usize, value: u64, weight: u64) -> Self {
        Self { id, value, weight }
    }

    /// Static desirability used to bias construction: `value / weight`.
    ///
    /// Zero-weight items fall back to their raw value.
    pub fn desirability(&self) -> f64 {
        if self.weight == 0 {
            self.value as f64
        } else {
            self.value as f64 / self.weight as f64
        }
    }
}

/// A 0/1 knapsack instance: an ordered item catalog and a capacity.
///
/// Both are fixed at construction.
///
/// # Examples
///
/// ```
/// use knapsack_aco::knapsack::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     50,
///     vec![Item::new(0, 60, 10), Item::new(1, 100, 20), Item::new(2, 120, 30)],
/// );
/// assert_eq!(problem.value_of(&[false, true, true]), 220);
/// assert!(problem.is_feasible(&[false, true, true]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackProblem {
    capacity: u64,
    items: Vec<Item>,
}

impl KnapsackProblem {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Builds a problem from `(value, weight)` pairs, assigning ids by position.
    pub fn from_pairs(capacity: u64, pairs: &[(u64, u64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(id, &(value, weight))| Item::new(id, value, weight))
            .collect();
        Self::new(capacity, items)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's value, or `None` if it overflows `u64`.
    ///
    /// When this is `Some`, no subset total can overflow either.
    pub fn total_value(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.value))
    }

    /// Total value of the packed items, saturating at `u64::MAX`.
    pub fn value_of(&self, bits: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(bits)
            .filter(|(_, taken)| **taken)
            .fold(0u64, |acc, (item, _)| acc.saturating_add(item.value))
    }

    /// Total weight of the packed items, saturating at `u64::MAX`.
    pub fn weight_of(&self, bits: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(bits)
            .filter(|(_, taken)| **taken)
            .fold(0u64, |acc, (item, _)| acc.saturating_add(item.weight))
    }

    pub fn is_feasible(&self, bits: &[bool]) -> bool {
        self.weight_of(bits) <= self.capacity
    }

    /// Wraps a decision vector, computing its value and weight once.
    pub fn evaluate(&self, bits: Vec<bool>) -> KnapsackSolution {
        let value = self.value_of(&bits);
        let weight = self.weight_of(&bits);
        KnapsackSolution { bits, value, weight }
    }

    /// The all-excluded solution.
    pub fn empty_solution(&self) -> KnapsackSolution {
        KnapsackSolution {
            bits: vec![false; self.items.len()],
            value: 0,
            weight: 0,
        }
    }
}

/// A decision vector together with its cached totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnapsackSolution {
    /// One decision per item position; `true` means packed.
    pub bits: Vec<bool>,
    /// Sum of packed values.
    pub value: u64,
    /// Sum of packed weights.
    pub weight: u64,
}

impl KnapsackSolution {
    pub fn is_feasible(&self, capacity: u64) -> bool {
        self.weight <= capacity
    }

    /// Positions of packed items, ascending.
    pub fn included_indices(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &taken)| taken.then_some(i))
            .collect()
    }

    /// Ids of packed items, in catalog order.
    pub fn included_ids(&self, problem: &KnapsackProblem) -> Vec<usize> {
        self.included_indices()
            .into_iter()
            .map(|i| problem.items()[i].id)
            .collect()
    }
}
