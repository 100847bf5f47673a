//! # zedz-tours
//!
//! Last-mile delivery tour formation and fleet distance estimation for a city,
//! under a status-quo policy and under a mandatory zero-emission delivery zone
//! (ZEDZ) where shipments touching the zone must be served by electric vans.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Carrier, Shipment, Tour, Vehicle)
//! - [`distance`] — Road-network distance oracle and sparse distance matrix
//! - [`partition`] — Carrier and zone-eligibility partitioning
//! - [`constructive`] — Capacitated nearest-neighbor tour formation
//! - [`evaluation`] — Tour path-distance computation
//! - [`scenario`] — Per-cell aggregation and summary tables
//! - [`schedule`] — Packing tours onto vehicles
//! - [`config`] — Capacities, packing factor and carrier order
//!
//! [`run_scenarios`] ties them together. Shipment synthesis and file I/O are
//! left to the caller; inputs and outputs derive `serde` traits for that.
//!
//! ## Features
//!
//! - `json` — `ScenarioConfig::from_json_str` for JSON configuration files
//! - `parallel` — evaluate scenario cells on the rayon thread pool

pub mod config;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod models;
pub mod partition;
pub mod scenario;
pub mod schedule;

mod error;
mod report;

pub use error::{Error, Result};
pub use report::{run_scenarios, ScenarioReport};
