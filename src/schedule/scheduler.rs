//! Packing of tours onto vehicles.
//!
//! Within each scenario cell, consecutive tours are grouped onto one vehicle
//! until it holds `tours_per_vehicle` of them; the last vehicle of a cell
//! takes whatever is left. Vehicle ids and tour sequence numbers both start at
//! 1 and grow across the whole scenario. After each cell the next vehicle id
//! moves on by the number of vehicles the cell used, and by one even for an
//! empty cell, so ids never collide across carriers or vehicle classes.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Carrier, ScheduledTour, Vehicle, VehicleClass};
use crate::scenario::{Scenario, ScenarioRun};

/// One row of the per-vehicle table: a tour and the vehicle driving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleRow {
    /// Carrier operating the vehicle.
    pub carrier: Carrier,
    /// Vehicle id.
    pub vehicle_id: usize,
    /// Tour sequence number within the scenario.
    pub tour_seq: usize,
    /// Path distance of this tour, in metres.
    pub tour_distance_m: f64,
    /// Distance of all tours on this vehicle, in metres.
    pub vehicle_distance_m: f64,
    /// Vehicle class; only reported for the mandatory-zone scenario.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<VehicleClass>,
}

/// Vehicles of one scenario, in id order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleTable {
    scenario: Scenario,
    vehicles: Vec<Vehicle>,
}

impl VehicleTable {
    /// Scenario the vehicles belong to.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Vehicles in id order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of tours across all vehicles.
    pub fn num_tours(&self) -> usize {
        self.vehicles.iter().map(Vehicle::num_tours).sum()
    }

    /// Distance across all vehicles, in metres.
    pub fn total_distance(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::total_distance).sum()
    }

    /// One row per tour, in tour sequence order.
    pub fn rows(&self) -> Vec<VehicleRow> {
        let with_class = self.scenario == Scenario::MandatoryZedz;
        self.vehicles
            .iter()
            .flat_map(|v| {
                let vehicle_distance_m = v.total_distance();
                v.tours().iter().map(move |t| VehicleRow {
                    carrier: v.carrier(),
                    vehicle_id: v.id(),
                    tour_seq: t.seq,
                    tour_distance_m: t.distance_m,
                    vehicle_distance_m,
                    class: with_class.then_some(v.class()),
                })
            })
            .collect()
    }
}

/// Assigns the tours of a scenario run to vehicles.
///
/// # Examples
///
/// ```
/// use zedz_tours::config::ScenarioConfig;
/// use zedz_tours::distance::{DistanceMatrix, NodeId};
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};
/// use zedz_tours::scenario::ScenarioAggregator;
/// use zedz_tours::schedule::VehicleScheduler;
///
/// let p = GeoPoint::new(0.0, 0.0);
/// let depot = Endpoint::new(0, NodeId(0), p);
/// let shipments: Vec<Shipment> = (1..=3)
///     .map(|id| Shipment::new(Carrier::Ups, depot, Endpoint::new(id, NodeId(id), p), 10.0))
///     .collect();
/// let mut dm = DistanceMatrix::new();
/// for a in 1..=3u64 {
///     for b in 1..=3u64 {
///         dm.insert(NodeId(a), NodeId(b), a.abs_diff(b) as f64)?;
///     }
/// }
///
/// let config = ScenarioConfig::default()
///     .with_carriers(vec![Carrier::Ups])
///     .with_diesel_capacity(1);
/// let run = ScenarioAggregator::new(&dm, &config)?.status_quo(&shipments)?;
///
/// let vehicles = VehicleScheduler::new(2)?.schedule(&run);
/// assert_eq!(vehicles.num_vehicles(), 2);
/// assert_eq!(vehicles.vehicles()[0].num_tours(), 2);
/// assert_eq!(vehicles.vehicles()[1].num_tours(), 1);
/// # Ok::<(), zedz_tours::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleScheduler {
    tours_per_vehicle: usize,
}

impl VehicleScheduler {
    /// Creates a scheduler packing `tours_per_vehicle` tours per vehicle.
    ///
    /// Returns [`Error::InvalidPackingFactor`] if it is zero.
    pub fn new(tours_per_vehicle: usize) -> Result<Self> {
        if tours_per_vehicle == 0 {
            return Err(Error::InvalidPackingFactor { tours_per_vehicle });
        }
        Ok(Self { tours_per_vehicle })
    }

    /// Tours packed onto one vehicle.
    pub fn tours_per_vehicle(&self) -> usize {
        self.tours_per_vehicle
    }

    /// Packs every cell of `run` onto vehicles.
    pub fn schedule(&self, run: &ScenarioRun) -> VehicleTable {
        let mut vehicles = Vec::new();
        let mut next_id = 1;
        let mut next_seq = 1;

        for cell in run.cells() {
            let groups = cell.tour_distances().chunks(self.tours_per_vehicle);
            let used = groups.len();
            for (offset, group) in groups.enumerate() {
                let mut vehicle = Vehicle::new(next_id + offset, cell.carrier(), cell.class());
                for &distance_m in group {
                    vehicle.push_tour(ScheduledTour {
                        seq: next_seq,
                        distance_m,
                    });
                    next_seq += 1;
                }
                vehicles.push(vehicle);
            }
            next_id += used.max(1);
        }

        log::debug!(
            "{}: {} tours on {} vehicles",
            run.scenario(),
            next_seq - 1,
            vehicles.len()
        );
        VehicleTable {
            scenario: run.scenario(),
            vehicles,
        }
    }
}
