//! Vehicle classes and scheduled vehicles.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Carrier;

/// Stop capacity of a diesel delivery vehicle.
pub const DIESEL_CAPACITY: usize = 30;

/// Stop capacity of an electric delivery vehicle. Electric vans refuel less
/// often and manage a few more stops per tour.
pub const ELECTRIC_CAPACITY: usize = 33;

/// Drive train of a delivery vehicle. Under the mandatory policy only
/// electric vehicles may serve shipments touching the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// Combustion-engine van.
    Diesel,
    /// Battery-electric van.
    Electric,
}

impl VehicleClass {
    /// Both classes, diesel first.
    pub const ALL: [VehicleClass; 2] = [VehicleClass::Diesel, VehicleClass::Electric];

    /// `true` for [`VehicleClass::Electric`].
    pub fn is_electric(self) -> bool {
        matches!(self, VehicleClass::Electric)
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleClass::Diesel => f.write_str("diesel"),
            VehicleClass::Electric => f.write_str("electric"),
        }
    }
}

/// A tour as placed on a vehicle: its global sequence number and distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduledTour {
    /// Sequence number, unique and increasing across one scenario.
    pub seq: usize,
    /// Path distance in metres.
    pub distance_m: f64,
}

/// A vehicle owning a group of consecutive tours of one carrier.
///
/// # Examples
///
/// ```
/// use zedz_tours::models::{Carrier, ScheduledTour, Vehicle, VehicleClass};
///
/// let mut v = Vehicle::new(3, Carrier::Usps, VehicleClass::Electric);
/// v.push_tour(ScheduledTour { seq: 5, distance_m: 1_000.0 });
/// v.push_tour(ScheduledTour { seq: 6, distance_m: 500.0 });
/// assert_eq!(v.num_tours(), 2);
/// assert_eq!(v.total_distance(), 1_500.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    id: usize,
    carrier: Carrier,
    class: VehicleClass,
    tours: Vec<ScheduledTour>,
}

impl Vehicle {
    /// Creates a vehicle with no tours.
    pub fn new(id: usize, carrier: Carrier, class: VehicleClass) -> Self {
        Self {
            id,
            carrier,
            class,
            tours: Vec::new(),
        }
    }

    /// Assigns the next tour to this vehicle.
    pub fn push_tour(&mut self, tour: ScheduledTour) {
        self.tours.push(tour);
    }

    /// Vehicle id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Carrier operating the vehicle.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// Drive train.
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Tours in the order they were assigned.
    pub fn tours(&self) -> &[ScheduledTour] {
        &self.tours
    }

    /// Number of tours driven.
    pub fn num_tours(&self) -> usize {
        self.tours.len()
    }

    /// Sum of the distances of all tours, in metres.
    pub fn total_distance(&self) -> f64 {
        self.tours.iter().map(|t| t.distance_m).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(1, Carrier::Ups, VehicleClass::Diesel);
        assert_eq!(v.id(), 1);
        assert_eq!(v.carrier(), Carrier::Ups);
        assert_eq!(v.class(), VehicleClass::Diesel);
        assert_eq!(v.num_tours(), 0);
        assert_eq!(v.total_distance(), 0.0);
    }

    #[test]
    fn test_class_flags() {
        assert!(VehicleClass::Electric.is_electric());
        assert!(!VehicleClass::Diesel.is_electric());
        assert_eq!(VehicleClass::ALL[0], VehicleClass::Diesel);
        assert_eq!(VehicleClass::Electric.to_string(), "electric");
    }

    #[test]
    fn test_default_capacities() {
        assert_eq!(DIESEL_CAPACITY, 30);
        assert_eq!(ELECTRIC_CAPACITY, 33);
    }
}
