//! Shared fixtures for integration tests.

#![allow(dead_code)]

use zedz_tours::distance::{DistanceError, DistanceOracle, NodeId};
use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};

/// Receivers placed on a line; node `i` sits at `positions[i]` metres.
///
/// Integer positions keep every sum exact.
#[derive(Debug)]
pub struct LineOracle {
    positions: Vec<i64>,
}

impl LineOracle {
    pub fn new(positions: Vec<i64>) -> Self {
        Self { positions }
    }
}

impl DistanceOracle for LineOracle {
    fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, DistanceError> {
        let at = |n: NodeId| {
            usize::try_from(n.0)
                .ok()
                .and_then(|i| self.positions.get(i).copied())
        };
        match (at(from), at(to)) {
            (Some(a), Some(b)) => Ok((a - b).abs() as f64),
            _ => Err(DistanceError::DistanceNotFound { from, to }),
        }
    }
}

/// Shipment whose receiver id and node are both `receiver`.
pub fn shipment(carrier: Carrier, receiver: u64, zone: (bool, bool), first_leg: f64) -> Shipment {
    let p = GeoPoint::new(34.02, -118.49);
    Shipment::new(
        carrier,
        Endpoint::new(0, NodeId(10_000), p).with_zone_flag(zone.0),
        Endpoint::new(receiver, NodeId(receiver), p).with_zone_flag(zone.1),
        first_leg,
    )
}

pub fn receiver_ids(shipments: &[Shipment]) -> Vec<u64> {
    shipments.iter().map(Shipment::receiver_id).collect()
}
