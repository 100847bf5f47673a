//! Sparse road-network distance matrix.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DistanceError;

/// Identifier of a node in the road network.
///
/// Distinct from depot and street identifiers; the mapping between the two is
/// done before shipments reach this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed arc of the road network with its shortest-path length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkArc {
    /// Origin node.
    pub origin_id: NodeId,
    /// Destination node.
    pub destination_id: NodeId,
    /// Road distance in metres.
    pub distance_m: f64,
}

/// Answers point-to-point road distance queries between network nodes.
///
/// Implementations must be side-effect free. A pair with no recorded distance
/// is an error, never zero or infinity. Tour building and evaluation reject
/// negative or non-finite answers with [`DistanceError::InvalidDistance`].
///
/// # Examples
///
/// ```
/// use zedz_tours::distance::{DistanceError, DistanceOracle, NodeId};
///
/// struct Manhattan;
///
/// impl DistanceOracle for Manhattan {
///     fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, DistanceError> {
///         Ok(from.0.abs_diff(to.0) as f64)
///     }
/// }
///
/// assert_eq!(Manhattan.distance(NodeId(2), NodeId(7))?, 5.0);
/// # Ok::<(), DistanceError>(())
/// ```
pub trait DistanceOracle: Send + Sync {
    /// Road distance in metres from `from` to `to`.
    fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, DistanceError>;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, DistanceError> {
        (**self).distance(from, to)
    }
}

/// A sparse, directed distance table keyed by node pairs.
///
/// Only the pairs that will actually be queried need to be present. Nothing is
/// inferred: the reverse arc and the self-pair must be recorded explicitly if
/// they are needed.
///
/// # Examples
///
/// ```
/// use zedz_tours::distance::{DistanceMatrix, DistanceOracle, NetworkArc, NodeId};
///
/// let dm = DistanceMatrix::from_arcs([
///     NetworkArc { origin_id: NodeId(1), destination_id: NodeId(2), distance_m: 350.0 },
///     NetworkArc { origin_id: NodeId(2), destination_id: NodeId(1), distance_m: 410.0 },
/// ])?;
/// assert_eq!(dm.distance(NodeId(1), NodeId(2))?, 350.0);
/// assert_eq!(dm.distance(NodeId(2), NodeId(1))?, 410.0);
/// assert!(dm.distance(NodeId(1), NodeId(3)).is_err());
/// # Ok::<(), zedz_tours::distance::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    arcs: HashMap<(NodeId, NodeId), f64>,
}

impl DistanceMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matrix from network arcs. A later arc for the same pair
    /// replaces an earlier one.
    pub fn from_arcs<I>(arcs: I) -> Result<Self, DistanceError>
    where
        I: IntoIterator<Item = NetworkArc>,
    {
        let mut dm = Self::new();
        for arc in arcs {
            dm.insert(arc.origin_id, arc.destination_id, arc.distance_m)?;
        }
        Ok(dm)
    }

    /// Records the distance from `from` to `to`.
    ///
    /// Rejects negative and non-finite values.
    pub fn insert(&mut self, from: NodeId, to: NodeId, distance_m: f64) -> Result<(), DistanceError> {
        let distance_m = checked_distance(from, to, distance_m)?;
        self.arcs.insert((from, to), distance_m);
        Ok(())
    }

    /// `true` if a distance is recorded from `from` to `to`.
    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.arcs.contains_key(&(from, to))
    }

    /// Number of recorded node pairs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// `true` if no pairs are recorded.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

impl DistanceOracle for DistanceMatrix {
    fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, DistanceError> {
        self.arcs
            .get(&(from, to))
            .copied()
            .ok_or(DistanceError::DistanceNotFound { from, to })
    }
}

/// Passes `distance_m` through if it is finite and non-negative.
pub(crate) fn checked_distance(from: NodeId, to: NodeId, distance_m: f64) -> Result<f64, DistanceError> {
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(DistanceError::InvalidDistance {
            from,
            to,
            distance: distance_m,
        });
    }
    Ok(distance_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(from: u64, to: u64, d: f64) -> NetworkArc {
        NetworkArc {
            origin_id: NodeId(from),
            destination_id: NodeId(to),
            distance_m: d,
        }
    }

    #[test]
    fn test_lookup_is_directed() {
        let dm = DistanceMatrix::from_arcs([arc(1, 2, 10.0)]).expect("valid arcs");
        assert_eq!(dm.distance(NodeId(1), NodeId(2)), Ok(10.0));
        assert_eq!(
            dm.distance(NodeId(2), NodeId(1)),
            Err(DistanceError::DistanceNotFound {
                from: NodeId(2),
                to: NodeId(1)
            })
        );
    }

    #[test]
    fn test_self_pair_not_inferred() {
        let dm = DistanceMatrix::from_arcs([arc(1, 2, 10.0)]).expect("valid arcs");
        assert!(dm.distance(NodeId(1), NodeId(1)).is_err());
    }

    #[test]
    fn test_later_arc_replaces_earlier() {
        let dm = DistanceMatrix::from_arcs([arc(1, 2, 10.0), arc(1, 2, 12.5)]).expect("valid arcs");
        assert_eq!(dm.len(), 1);
        assert_eq!(dm.distance(NodeId(1), NodeId(2)), Ok(12.5));
    }

    #[test]
    fn test_rejects_invalid_distance() {
        let err = DistanceMatrix::from_arcs([arc(1, 2, -1.0)]).expect_err("negative distance");
        assert!(matches!(err, DistanceError::InvalidDistance { .. }));
        assert!(DistanceMatrix::from_arcs([arc(1, 2, f64::NAN)]).is_err());
        assert!(DistanceMatrix::from_arcs([arc(1, 2, f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_len_counts_pairs() {
        let mut dm = DistanceMatrix::new();
        assert!(dm.is_empty());
        dm.insert(NodeId(1), NodeId(2), 3.0).expect("valid");
        dm.insert(NodeId(3), NodeId(4), 0.0).expect("zero is valid");
        assert!(dm.insert(NodeId(2), NodeId(3), f64::NAN).is_err());
        assert_eq!(dm.len(), 2);
        assert!(dm.contains(NodeId(3), NodeId(4)));
        assert!(!dm.contains(NodeId(2), NodeId(3)));
    }

    #[test]
    fn test_oracle_through_reference() {
        let dm = DistanceMatrix::from_arcs([arc(5, 6, 1.5)]).expect("valid arcs");
        let by_ref: &DistanceMatrix = &dm;
        assert_eq!(DistanceOracle::distance(&by_ref, NodeId(5), NodeId(6)), Ok(1.5));
    }

    #[test]
    fn test_arc_deserialize() {
        let json = r#"{"origin_id": 7, "destination_id": 8, "distance_m": 99.5}"#;
        let a: NetworkArc = serde_json::from_str(json).expect("deserialize");
        assert_eq!(a, arc(7, 8, 99.5));
    }
}
