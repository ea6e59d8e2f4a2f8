//! Error types for the simulation core.
//!
//! Rejected moves and degenerate vectors are normal control flow and never
//! show up here.

use thiserror::Error;

/// Errors from the egg store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Coin count cannot cover the egg price.
    #[error("insufficient funds: have {have} coins, need {cost}")]
    InsufficientFunds { have: u64, cost: u64 },
}

/// Errors from loading or validating tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or mismatched field types.
    #[error("failed to parse tunables: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values that would break a simulation invariant.
    #[error("invalid tunables: {0}")]
    Invalid(String),
}
