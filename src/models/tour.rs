//! Tour type.

use serde::Serialize;

use super::{Carrier, Shipment};

/// An ordered sequence of shipments delivered by one vehicle before it
/// returns to the depot.
///
/// Tours are only produced by the tour builder, which guarantees
/// `1 <= len <= capacity`. Stops are kept in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    stops: Vec<Shipment>,
}

impl Tour {
    pub(crate) fn from_stops(stops: Vec<Shipment>) -> Self {
        debug_assert!(!stops.is_empty(), "a tour holds at least one stop");
        Self { stops }
    }

    /// Shipments in visiting order.
    pub fn stops(&self) -> &[Shipment] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false` for tours built by this crate.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Receiver ids in visiting order.
    pub fn receiver_ids(&self) -> Vec<u64> {
        self.stops.iter().map(Shipment::receiver_id).collect()
    }

    /// Carrier of the seed shipment.
    pub fn carrier(&self) -> Carrier {
        self.stops[0].carrier()
    }
}
