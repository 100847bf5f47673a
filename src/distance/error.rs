use thiserror::Error;

use super::NodeId;

/// Errors from [`DistanceOracle::distance`](super::DistanceOracle::distance)
/// and from building a [`DistanceMatrix`](super::DistanceMatrix).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// No directed arc is recorded for the node pair.
    ///
    /// The road network is expected to cover every pair a shipment can
    /// produce, so this points at a gap in the upstream arc tables.
    #[error("no distance recorded from node {from} to node {to}")]
    DistanceNotFound {
        /// Origin node.
        from: NodeId,
        /// Destination node.
        to: NodeId,
    },
    /// An arc carried a negative or non-finite distance.
    #[error("invalid distance {distance} from node {from} to node {to}")]
    InvalidDistance {
        /// Origin node.
        from: NodeId,
        /// Destination node.
        to: NodeId,
        /// The rejected value.
        distance: f64,
    },
}
