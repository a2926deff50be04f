//! Configuration errors surfaced before a run starts.

use thiserror::Error;

/// Errors returned by [`AcoConfig::validate`](super::AcoConfig::validate)
/// and [`AcoRunner::run`](super::AcoRunner::run).
///
/// A run never starts on invalid input; it fails fast instead of returning
/// an all-zero solution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The problem has no items to decide on.
    #[error("item list is empty")]
    EmptyItems,

    /// The item values sum past `u64::MAX`, so solution values cannot be
    /// represented.
    #[error("total item value overflows u64")]
    ValueOverflow,

    /// A numeric parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl AcoError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
