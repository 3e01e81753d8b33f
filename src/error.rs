//! Error types for quadrum operations.

use thiserror::Error;

/// Errors that can occur during spatial queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadrumError {
    /// A range query was given a minimum bound greater than its maximum.
    #[error("invalid range: minimum bound exceeds maximum bound")]
    InvalidRange,
}
