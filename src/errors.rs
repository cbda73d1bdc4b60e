use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for provider and aggregation failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),
    #[error("Upstream returned status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
    #[error("Unexpected payload shape: {0}")]
    UnexpectedPayload(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No qualifying records to aggregate: {0}")]
    EmptyAggregation(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = StdResult<T, BudgetError>;
