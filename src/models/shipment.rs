//! Shipment and endpoint types.

use serde::{Deserialize, Serialize};

use super::Carrier;
use crate::distance::NodeId;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One end of a shipment: a depot (sender) or a consumer (receiver).
///
/// `id` is the business identifier (depot id or street id) while `node` is the
/// road-network node it was mapped to upstream. Only `node` is ever used for
/// distance lookups.
///
/// # Examples
///
/// ```
/// use zedz_tours::distance::NodeId;
/// use zedz_tours::models::{Endpoint, GeoPoint};
///
/// let depot = Endpoint::new(7, NodeId(1007), GeoPoint::new(34.01, -118.49))
///     .with_zone_flag(true);
/// assert!(depot.in_zone());
/// assert_eq!(depot.node(), NodeId(1007));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    id: u64,
    node: NodeId,
    location: GeoPoint,
    #[serde(default)]
    in_zone: bool,
}

impl Endpoint {
    /// Creates an endpoint outside the zone.
    pub fn new(id: u64, node: NodeId, location: GeoPoint) -> Self {
        Self {
            id,
            node,
            location,
            in_zone: false,
        }
    }

    /// Sets whether this endpoint lies inside the zero-emission zone.
    pub fn with_zone_flag(mut self, in_zone: bool) -> Self {
        self.in_zone = in_zone;
        self
    }

    /// Business identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Road-network node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Geographic location.
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// `true` if the endpoint lies inside the zero-emission zone.
    pub fn in_zone(&self) -> bool {
        self.in_zone
    }
}

/// A single parcel moving from a carrier depot to a receiver.
///
/// Shipments are produced upstream and are read-only here. Within one run the
/// receiver id is unique.
///
/// # Examples
///
/// ```
/// use zedz_tours::distance::NodeId;
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};
///
/// let sender = Endpoint::new(1, NodeId(100), GeoPoint::new(34.0, -118.5));
/// let receiver = Endpoint::new(42, NodeId(4200), GeoPoint::new(34.02, -118.48))
///     .with_zone_flag(true);
/// let s = Shipment::new(Carrier::Usps, sender, receiver, 1_250.0);
///
/// assert_eq!(s.receiver_id(), 42);
/// assert!(s.is_zone_eligible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    carrier: Carrier,
    sender: Endpoint,
    receiver: Endpoint,
    first_leg_m: f64,
}

impl Shipment {
    /// Creates a shipment. `first_leg_m` is the road distance in metres from
    /// the sender to the receiver.
    pub fn new(carrier: Carrier, sender: Endpoint, receiver: Endpoint, first_leg_m: f64) -> Self {
        Self {
            carrier,
            sender,
            receiver,
            first_leg_m,
        }
    }

    /// Carrier handling this shipment.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// Sending depot.
    pub fn sender(&self) -> &Endpoint {
        &self.sender
    }

    /// Receiving consumer.
    pub fn receiver(&self) -> &Endpoint {
        &self.receiver
    }

    /// Receiver identifier, unique within a run.
    pub fn receiver_id(&self) -> u64 {
        self.receiver.id
    }

    /// Road-network node of the receiver.
    pub fn receiver_node(&self) -> NodeId {
        self.receiver.node
    }

    /// Sender-to-receiver road distance in metres.
    pub fn first_leg_m(&self) -> f64 {
        self.first_leg_m
    }

    /// `true` if either end lies inside the zone, meaning an electric vehicle
    /// must carry it under the mandatory policy.
    pub fn is_zone_eligible(&self) -> bool {
        self.sender.in_zone || self.receiver.in_zone
    }
}
