//! Vehicle scheduling.
//!
//! Packs the ordered tours of each scenario cell onto vehicles and reports
//! per-tour and per-vehicle distances.

mod scheduler;

pub use scheduler::{VehicleRow, VehicleScheduler, VehicleTable};
