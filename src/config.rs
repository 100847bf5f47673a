//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Carrier, VehicleClass, DIESEL_CAPACITY, ELECTRIC_CAPACITY};

/// Number of consecutive tours one vehicle drives.
pub const DEFAULT_TOURS_PER_VEHICLE: usize = 2;

/// Parameters of a scenario run.
///
/// Missing fields fall back to the defaults when deserialising.
///
/// # Examples
///
/// ```
/// use zedz_tours::config::ScenarioConfig;
/// use zedz_tours::models::{Carrier, VehicleClass};
///
/// let config = ScenarioConfig::default()
///     .with_carriers(vec![Carrier::Usps, Carrier::FedEx])
///     .with_tours_per_vehicle(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.capacity(VehicleClass::Electric), 33);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Stops per diesel tour.
    pub diesel_capacity: usize,
    /// Stops per electric tour.
    pub electric_capacity: usize,
    /// Tours packed onto one vehicle.
    pub tours_per_vehicle: usize,
    /// Carriers to model, in processing order.
    pub carriers: Vec<Carrier>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            diesel_capacity: DIESEL_CAPACITY,
            electric_capacity: ELECTRIC_CAPACITY,
            tours_per_vehicle: DEFAULT_TOURS_PER_VEHICLE,
            carriers: Carrier::ALL.to_vec(),
        }
    }
}

impl ScenarioConfig {
    /// Sets the diesel stop capacity.
    pub fn with_diesel_capacity(mut self, capacity: usize) -> Self {
        self.diesel_capacity = capacity;
        self
    }

    /// Sets the electric stop capacity.
    pub fn with_electric_capacity(mut self, capacity: usize) -> Self {
        self.electric_capacity = capacity;
        self
    }

    /// Sets the number of tours per vehicle.
    pub fn with_tours_per_vehicle(mut self, tours: usize) -> Self {
        self.tours_per_vehicle = tours;
        self
    }

    /// Sets the carriers and their processing order.
    pub fn with_carriers(mut self, carriers: Vec<Carrier>) -> Self {
        self.carriers = carriers;
        self
    }

    /// Stop capacity for the given vehicle class.
    pub fn capacity(&self, class: VehicleClass) -> usize {
        match class {
            VehicleClass::Diesel => self.diesel_capacity,
            VehicleClass::Electric => self.electric_capacity,
        }
    }

    /// Checks capacities, packing factor and carrier list.
    pub fn validate(&self) -> Result<()> {
        for class in VehicleClass::ALL {
            let capacity = self.capacity(class);
            if capacity == 0 {
                return Err(Error::InvalidCapacity { capacity });
            }
        }
        if self.tours_per_vehicle == 0 {
            return Err(Error::InvalidPackingFactor {
                tours_per_vehicle: self.tours_per_vehicle,
            });
        }
        if self.carriers.is_empty() {
            return Err(Error::EmptyCarrierList);
        }
        for (i, carrier) in self.carriers.iter().enumerate() {
            if self.carriers[..i].contains(carrier) {
                return Err(Error::DuplicateCarrier(*carrier));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
