//! Plain-text instance loader.
//!
//! Format: the item count, then the capacity, then one `value weight` pair
//! per item. Tokens are whitespace-separated, so line breaks are not
//! significant. Item ids are assigned by position.
//!
//! ```text
//! 3
//! 50
//! 60 10
//! 100 20
//! 120 30
//! ```

use super::types::{Item, KnapsackProblem};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to read instance file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing {field} in instance header")]
    MissingHeader { field: &'static str },

    #[error("line {line}: invalid {field} '{token}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        token: String,
    },

    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    #[error("expected {expected} items, found {found}")]
    ItemCountMismatch { expected: usize, found: usize },

    #[error("line {line}: total item value overflows u64")]
    ValueOverflow { line: usize },
}

/// Reads and parses an instance file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<KnapsackProblem, InstanceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InstanceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_instance(&text)
}

/// Parses an instance from its textual form.
///
/// # Examples
///
/// ```
/// use knapsack_aco::knapsack::parse_instance;
///
/// let problem = parse_instance("2\n10\n5 4\n6 7\n").unwrap();
/// assert_eq!(problem.capacity(), 10);
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.items()[1].weight, 7);
/// ```
pub fn parse_instance(text: &str) -> Result<KnapsackProblem, InstanceError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

    let (line, tok) = tokens
        .next()
        .ok_or(InstanceError::MissingHeader { field: "item count" })?;
    let count: usize = parse_token(line, "item count", tok)?;

    let (line, tok) = tokens
        .next()
        .ok_or(InstanceError::MissingHeader { field: "capacity" })?;
    let capacity: i64 = parse_token(line, "capacity", tok)?;
    if capacity < 0 {
        return Err(InstanceError::NegativeCapacity(capacity));
    }

    let mut items = Vec::with_capacity(count);
    let mut total_value = 0u64;
    for id in 0..count {
        let Some((line, tok)) = tokens.next() else {
            break;
        };
        let value: u64 = parse_token(line, "value", tok)?;
        total_value = total_value
            .checked_add(value)
            .ok_or(InstanceError::ValueOverflow { line })?;
        let Some((line, tok)) = tokens.next() else {
            return Err(InstanceError::ItemCountMismatch {
                expected: count,
                found: id,
            });
        };
        let weight: u64 = parse_token(line, "weight", tok)?;
        items.push(Item::new(id, value, weight));
    }

    if items.len() != count {
        return Err(InstanceError::ItemCountMismatch {
            expected: count,
            found: items.len(),
        });
    }

    Ok(KnapsackProblem::new(capacity as u64, items))
}

fn parse_token<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    token: &str,
) -> Result<T, InstanceError> {
    token.parse().map_err(|_| InstanceError::InvalidNumber {
        line,
        field,
        token: token.to_string(),
    })
}
