//! Shipment partitioning.
//!
//! - [`partition_by_carrier`] — all shipments handled by one carrier
//! - [`split_by_zone`] — zone-eligible vs. never-enters-zone shipments

mod splitter;

pub use splitter::{partition_by_carrier, split_by_zone, ZoneSplit};
