//! Domain model types for last-mile delivery tours.
//!
//! Provides the core records: carriers, shipments with their sender and
//! receiver endpoints, tours as ordered groups of shipments, and vehicles that
//! drive a fixed number of consecutive tours.

mod carrier;
mod shipment;
mod tour;
mod vehicle;

pub use carrier::Carrier;
pub use shipment::{Endpoint, GeoPoint, Shipment};
pub use tour::Tour;
pub use vehicle::{ScheduledTour, Vehicle, VehicleClass, DIESEL_CAPACITY, ELECTRIC_CAPACITY};
