//! Crate-level error type.

use thiserror::Error;

use crate::distance::DistanceError;
use crate::models::Carrier;

/// Errors from building tours, aggregating scenarios or validating
/// configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A distance lookup failed. Fatal for the run.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// A tour capacity of zero was requested.
    #[error("tour capacity must be at least 1, got {capacity}")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
    /// A packing factor of zero tours per vehicle was requested.
    #[error("tours per vehicle must be at least 1, got {tours_per_vehicle}")]
    InvalidPackingFactor {
        /// The rejected packing factor.
        tours_per_vehicle: usize,
    },
    /// The configuration names no carriers.
    #[error("at least one carrier is required")]
    EmptyCarrierList,
    /// A carrier appears more than once in the configuration.
    #[error("carrier {0} is listed more than once")]
    DuplicateCarrier(Carrier),
    /// The configuration could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
