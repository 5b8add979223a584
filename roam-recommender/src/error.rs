//! Error types raised while ranking destinations.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Recoverable anomalies detected during the personalised scoring pass.
///
/// An anomaly never reaches the caller: the recommender logs it and falls
/// back to uniform sampling of the unvisited candidates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendAnomaly {
    /// A candidate's composite score was NaN or infinite, typically from a
    /// malformed catalog rating.
    #[error("composite score for location {location_id} is not finite")]
    NonFiniteScore {
        /// Identifier of the affected candidate.
        location_id: u64,
    },
}

/// Errors raised when configuring score weights.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// The supplied weights were unusable.
    #[error("score weights must be finite, non-negative, and sum to a positive value")]
    Invalid,
}
