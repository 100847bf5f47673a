//! Scenario aggregation over (carrier × vehicle class) cells.
//!
//! A scenario is evaluated as a list of independent cells. Each cell holds
//! the shipments one carrier serves with one vehicle class; the cell is
//! grouped into tours with that class's capacity and every tour's path
//! distance is computed. Cells share nothing but the read-only distance
//! oracle, so with the `parallel` feature they are evaluated on the rayon
//! pool. Output order is the same either way.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;
use crate::constructive::TourBuilder;
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::models::{Carrier, Shipment, Tour, VehicleClass};
use crate::partition::{partition_by_carrier, split_by_zone};

/// Policy under which tours are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// No zone: every carrier runs diesel vans over all of its shipments.
    StatusQuo,
    /// Mandatory zone: shipments touching the zone go electric, the rest
    /// stay diesel.
    MandatoryZedz,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::StatusQuo => f.write_str("status quo"),
            Scenario::MandatoryZedz => f.write_str("mandatory ZEDZ"),
        }
    }
}

/// A scenario cell that received no shipments.
///
/// Not an error: the cell still contributes a zero row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyCell {
    /// Scenario of the cell.
    pub scenario: Scenario,
    /// Carrier of the cell.
    pub carrier: Carrier,
    /// Vehicle class of the cell.
    pub class: VehicleClass,
}

/// Tours and tour distances of one (carrier, vehicle class) cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellOutcome {
    carrier: Carrier,
    class: VehicleClass,
    tours: Vec<Tour>,
    distances: Vec<f64>,
}

impl CellOutcome {
    /// Carrier of the cell.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// Vehicle class of the cell.
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Tours in the order they were closed.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Path distance of each tour, parallel to [`CellOutcome::tours`].
    pub fn tour_distances(&self) -> &[f64] {
        &self.distances
    }

    /// Number of tours.
    pub fn tour_count(&self) -> usize {
        self.tours.len()
    }

    /// Sum of the tour distances, in metres.
    pub fn total_distance(&self) -> f64 {
        self.distances.iter().sum()
    }

    /// `true` if the cell produced no tours.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

/// Every cell of one scenario, in processing order.
///
/// Status quo runs hold one diesel cell per carrier. Mandatory runs hold all
/// diesel cells in carrier order followed by all electric cells. Every
/// configured carrier has its cells, empty or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRun {
    scenario: Scenario,
    carriers: Vec<Carrier>,
    cells: Vec<CellOutcome>,
    warnings: Vec<EmptyCell>,
}

impl ScenarioRun {
    /// The scenario these cells belong to.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Carriers in processing order.
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    /// Cells in processing order.
    pub fn cells(&self) -> &[CellOutcome] {
        &self.cells
    }

    /// Cells that received no shipments.
    pub fn warnings(&self) -> &[EmptyCell] {
        &self.warnings
    }

    /// Total distance for `carrier`, restricted to `class` if given.
    pub fn distance(&self, carrier: Carrier, class: Option<VehicleClass>) -> f64 {
        self.matching(carrier, class).map(CellOutcome::total_distance).sum()
    }

    /// Tour count for `carrier`, restricted to `class` if given.
    pub fn tour_count(&self, carrier: Carrier, class: Option<VehicleClass>) -> usize {
        self.matching(carrier, class).map(CellOutcome::tour_count).sum()
    }

    /// Distance across all carriers, restricted to `class` if given.
    pub fn class_distance(&self, class: Option<VehicleClass>) -> f64 {
        self.carriers.iter().map(|&c| self.distance(c, class)).sum()
    }

    /// Tour count across all carriers, restricted to `class` if given.
    pub fn class_tour_count(&self, class: Option<VehicleClass>) -> usize {
        self.carriers.iter().map(|&c| self.tour_count(c, class)).sum()
    }

    /// Grand total distance, in metres.
    pub fn total_distance(&self) -> f64 {
        self.class_distance(None)
    }

    /// Grand total tour count.
    pub fn total_tours(&self) -> usize {
        self.class_tour_count(None)
    }

    fn matching(
        &self,
        carrier: Carrier,
        class: Option<VehicleClass>,
    ) -> impl Iterator<Item = &CellOutcome> {
        self.cells
            .iter()
            .filter(move |c| c.carrier == carrier && class.map_or(true, |k| c.class == k))
    }
}

/// Shipments assigned to one cell, before tour formation.
struct CellPlan {
    carrier: Carrier,
    class: VehicleClass,
    shipments: Vec<Shipment>,
}

/// Runs the tour builder once per cell and collects the results.
///
/// # Examples
///
/// ```
/// use zedz_tours::config::ScenarioConfig;
/// use zedz_tours::distance::{DistanceMatrix, NodeId};
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment, VehicleClass};
/// use zedz_tours::scenario::ScenarioAggregator;
///
/// let p = GeoPoint::new(0.0, 0.0);
/// let depot = Endpoint::new(0, NodeId(0), p);
/// let inside = Endpoint::new(1, NodeId(1), p).with_zone_flag(true);
/// let outside = Endpoint::new(2, NodeId(2), p);
/// let shipments = vec![
///     Shipment::new(Carrier::Ups, depot, inside, 1_000.0),
///     Shipment::new(Carrier::Ups, depot, outside, 2_000.0),
/// ];
/// let mut dm = DistanceMatrix::new();
/// dm.insert(NodeId(1), NodeId(2), 300.0)?;
///
/// let config = ScenarioConfig::default();
/// let aggregator = ScenarioAggregator::new(&dm, &config)?;
///
/// let status_quo = aggregator.status_quo(&shipments)?;
/// assert_eq!(status_quo.total_tours(), 1);
/// assert_eq!(status_quo.total_distance(), 1_300.0);
///
/// let mandatory = aggregator.mandatory_zedz(&shipments)?;
/// assert_eq!(mandatory.total_tours(), 2);
/// assert_eq!(mandatory.class_distance(Some(VehicleClass::Electric)), 1_000.0);
/// assert_eq!(mandatory.class_distance(Some(VehicleClass::Diesel)), 2_000.0);
/// # Ok::<(), zedz_tours::Error>(())
/// ```
pub struct ScenarioAggregator<'a, D: DistanceOracle + ?Sized> {
    distances: &'a D,
    config: &'a ScenarioConfig,
}

impl<'a, D: DistanceOracle + ?Sized> ScenarioAggregator<'a, D> {
    /// Creates an aggregator after validating `config`.
    pub fn new(distances: &'a D, config: &'a ScenarioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { distances, config })
    }

    /// Evaluates `scenario` over `shipments`.
    pub fn run(&self, scenario: Scenario, shipments: &[Shipment]) -> Result<ScenarioRun> {
        match scenario {
            Scenario::StatusQuo => self.status_quo(shipments),
            Scenario::MandatoryZedz => self.mandatory_zedz(shipments),
        }
    }

    /// Every carrier serves all of its shipments with diesel vans.
    pub fn status_quo(&self, shipments: &[Shipment]) -> Result<ScenarioRun> {
        let plan = self
            .config
            .carriers
            .iter()
            .map(|&carrier| CellPlan {
                carrier,
                class: VehicleClass::Diesel,
                shipments: partition_by_carrier(shipments, carrier),
            })
            .collect();
        self.execute(Scenario::StatusQuo, plan)
    }

    /// Shipments touching the zone are served electrically, the rest by
    /// diesel vans.
    pub fn mandatory_zedz(&self, shipments: &[Shipment]) -> Result<ScenarioRun> {
        let mut diesel = Vec::with_capacity(self.config.carriers.len());
        let mut electric = Vec::with_capacity(self.config.carriers.len());
        for &carrier in &self.config.carriers {
            let split = split_by_zone(&partition_by_carrier(shipments, carrier));
            diesel.push(CellPlan {
                carrier,
                class: VehicleClass::Diesel,
                shipments: split.ineligible,
            });
            electric.push(CellPlan {
                carrier,
                class: VehicleClass::Electric,
                shipments: split.eligible,
            });
        }
        diesel.extend(electric);
        self.execute(Scenario::MandatoryZedz, diesel)
    }

    fn execute(&self, scenario: Scenario, plan: Vec<CellPlan>) -> Result<ScenarioRun> {
        #[cfg(feature = "parallel")]
        let cells = {
            use rayon::prelude::*;
            plan.into_par_iter()
                .map(|cell| self.evaluate_cell(cell))
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let cells = plan
            .into_iter()
            .map(|cell| self.evaluate_cell(cell))
            .collect::<Result<Vec<_>>>()?;

        let warnings: Vec<EmptyCell> = cells
            .iter()
            .filter(|c| c.is_empty())
            .map(|c| EmptyCell {
                scenario,
                carrier: c.carrier,
                class: c.class,
            })
            .collect();
        for w in &warnings {
            log::warn!(
                "{scenario}: no shipments for {} with {} vehicles",
                w.carrier,
                w.class
            );
        }

        let run = ScenarioRun {
            scenario,
            carriers: self.config.carriers.clone(),
            cells,
            warnings,
        };
        log::info!(
            "{scenario}: {} tours, {:.0} m in total",
            run.total_tours(),
            run.total_distance()
        );
        Ok(run)
    }

    fn evaluate_cell(&self, plan: CellPlan) -> Result<CellOutcome> {
        let builder = TourBuilder::new(self.config.capacity(plan.class))?;
        let tours = builder.build(&plan.shipments, self.distances)?;
        let distances = TourEvaluator::new(self.distances).path_distances(&tours)?;
        log::debug!(
            "{} {}: {} shipments in {} tours",
            plan.carrier,
            plan.class,
            plan.shipments.len(),
            tours.len()
        );
        Ok(CellOutcome {
            carrier: plan.carrier,
            class: plan.class,
            tours,
            distances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceError, DistanceMatrix, NodeId};
    use crate::error::Error;
    use crate::models::{Endpoint, GeoPoint};

    fn shipment(carrier: Carrier, receiver: u64, in_zone: bool, first_leg: f64) -> Shipment {
        let p = GeoPoint::new(0.0, 0.0);
        Shipment::new(
            carrier,
            Endpoint::new(0, NodeId(0), p),
            Endpoint::new(receiver, NodeId(receiver), p).with_zone_flag(in_zone),
            first_leg,
        )
    }

    /// Every receiver node 1..=n is |a - b| metres from every other.
    fn line_matrix(n: u64) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new();
        for a in 1..=n {
            for b in 1..=n {
                dm.insert(NodeId(a), NodeId(b), a.abs_diff(b) as f64)
                    .expect("valid distance");
            }
        }
        dm
    }

    fn sample() -> Vec<Shipment> {
        vec![
            shipment(Carrier::Ups, 1, false, 100.0),
            shipment(Carrier::Usps, 2, true, 200.0),
            shipment(Carrier::Ups, 3, true, 300.0),
            shipment(Carrier::Ups, 4, false, 400.0),
            shipment(Carrier::Usps, 5, false, 500.0),
        ]
    }

    #[test]
    fn test_status_quo_cells() {
        let dm = line_matrix(5);
        let config = ScenarioConfig::default();
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");
        let run = agg.status_quo(&sample()).expect("complete matrix");

        assert_eq!(run.scenario(), Scenario::StatusQuo);
        assert_eq!(run.cells().len(), 4);
        assert!(run.cells().iter().all(|c| c.class() == VehicleClass::Diesel));

        // UPS: one tour 1 -> 3 -> 4 = 100 + 2 + 1.
        assert_eq!(run.tour_count(Carrier::Ups, None), 1);
        assert_eq!(run.distance(Carrier::Ups, None), 103.0);
        // USPS: one tour 2 -> 5 = 200 + 3.
        assert_eq!(run.distance(Carrier::Usps, None), 203.0);
        assert_eq!(run.total_distance(), 306.0);
        assert_eq!(run.total_tours(), 2);
    }

    #[test]
    fn test_empty_carriers_reported() {
        let dm = line_matrix(5);
        let config = ScenarioConfig::default();
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");
        let run = agg.status_quo(&sample()).expect("complete matrix");

        let empty: Vec<_> = run.warnings().iter().map(|w| w.carrier).collect();
        assert_eq!(empty, vec![Carrier::AmazonLogistics, Carrier::FedEx]);
        assert_eq!(run.distance(Carrier::FedEx, None), 0.0);
        assert_eq!(run.tour_count(Carrier::FedEx, None), 0);
    }

    #[test]
    fn test_mandatory_cell_order() {
        let dm = line_matrix(5);
        let config = ScenarioConfig::default();
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");
        let run = agg.mandatory_zedz(&sample()).expect("complete matrix");

        let order: Vec<_> = run.cells().iter().map(|c| (c.carrier(), c.class())).collect();
        let mut expected: Vec<_> = Carrier::ALL.iter().map(|&c| (c, VehicleClass::Diesel)).collect();
        expected.extend(Carrier::ALL.iter().map(|&c| (c, VehicleClass::Electric)));
        assert_eq!(order, expected);
    }

    #[test]
    fn test_mandatory_splits_by_zone() {
        let dm = line_matrix(5);
        let config = ScenarioConfig::default();
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");
        let run = agg.mandatory_zedz(&sample()).expect("complete matrix");

        // UPS diesel: 1 -> 4 = 100 + 3; UPS electric: 3 alone = 300.
        assert_eq!(run.distance(Carrier::Ups, Some(VehicleClass::Diesel)), 103.0);
        assert_eq!(run.distance(Carrier::Ups, Some(VehicleClass::Electric)), 300.0);
        assert_eq!(run.distance(Carrier::Ups, None), 403.0);
        // USPS diesel: 5 alone; USPS electric: 2 alone.
        assert_eq!(run.tour_count(Carrier::Usps, Some(VehicleClass::Diesel)), 1);
        assert_eq!(run.tour_count(Carrier::Usps, Some(VehicleClass::Electric)), 1);

        let diesel = run.class_distance(Some(VehicleClass::Diesel));
        let electric = run.class_distance(Some(VehicleClass::Electric));
        assert_eq!(diesel + electric, run.total_distance());
        assert_eq!(run.total_tours(), 4);
    }

    #[test]
    fn test_capacities_per_class() {
        // Seven zone shipments for FedEx: two electric tours with capacity 4,
        // but three diesel tours with capacity 3 under status quo.
        let dm = line_matrix(7);
        let shipments: Vec<_> = (1..=7).map(|id| shipment(Carrier::FedEx, id, true, 10.0)).collect();
        let config = ScenarioConfig::default()
            .with_carriers(vec![Carrier::FedEx])
            .with_diesel_capacity(3)
            .with_electric_capacity(4);
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");

        assert_eq!(agg.run(Scenario::StatusQuo, &shipments).expect("ok").total_tours(), 3);
        let mandatory = agg.run(Scenario::MandatoryZedz, &shipments).expect("ok");
        assert_eq!(mandatory.class_tour_count(Some(VehicleClass::Electric)), 2);
        assert_eq!(mandatory.class_tour_count(Some(VehicleClass::Diesel)), 0);
        assert_eq!(mandatory.warnings().len(), 1);
    }

    #[test]
    fn test_missing_distance_aborts_run() {
        let dm = line_matrix(3);
        let shipments = vec![
            shipment(Carrier::Ups, 1, false, 1.0),
            shipment(Carrier::Ups, 9, false, 1.0),
        ];
        let config = ScenarioConfig::default();
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");
        assert_eq!(
            agg.status_quo(&shipments),
            Err(Error::Distance(DistanceError::DistanceNotFound {
                from: NodeId(1),
                to: NodeId(9)
            }))
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let dm = line_matrix(1);
        let config = ScenarioConfig::default().with_diesel_capacity(0);
        assert!(matches!(
            ScenarioAggregator::new(&dm, &config),
            Err(Error::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_ignores_unconfigured_carriers() {
        let dm = line_matrix(5);
        let config = ScenarioConfig::default().with_carriers(vec![Carrier::Usps]);
        let agg = ScenarioAggregator::new(&dm, &config).expect("valid config");
        let run = agg.status_quo(&sample()).expect("complete matrix");
        assert_eq!(run.carriers(), &[Carrier::Usps]);
        assert_eq!(run.total_distance(), 203.0);
    }
}
