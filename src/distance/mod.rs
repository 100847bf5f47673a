//! Road-network distance lookups.
//!
//! Provides the [`DistanceOracle`] trait and a sparse [`DistanceMatrix`]
//! built from precomputed network arcs.

mod error;
mod matrix;

pub use error::DistanceError;
pub use matrix::{DistanceMatrix, DistanceOracle, NetworkArc, NodeId};

pub(crate) use matrix::checked_distance;
