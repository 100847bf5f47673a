//! End-to-end evaluation of both policy scenarios.

use serde::Serialize;

use crate::config::ScenarioConfig;
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::models::Shipment;
use crate::scenario::{EmptyCell, ScenarioAggregator, ScenarioRun, ScenarioTable};
use crate::schedule::{VehicleScheduler, VehicleTable};

/// Everything a run produces, ready to be persisted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Cells of the status quo scenario.
    pub status_quo: ScenarioRun,
    /// Cells of the mandatory-zone scenario.
    pub mandatory: ScenarioRun,
    /// Distance per carrier and scenario row, in metres.
    pub distances: ScenarioTable<f64>,
    /// Tour count per carrier and scenario row.
    pub tours: ScenarioTable<usize>,
    /// Vehicles under the status quo.
    pub status_quo_vehicles: VehicleTable,
    /// Vehicles under the mandatory zone.
    pub mandatory_vehicles: VehicleTable,
}

impl ScenarioReport {
    /// Empty cells of both scenarios.
    pub fn warnings(&self) -> impl Iterator<Item = &EmptyCell> {
        self.status_quo
            .warnings()
            .iter()
            .chain(self.mandatory.warnings())
    }
}

/// Evaluates both scenarios over `shipments` and packs their tours onto
/// vehicles.
///
/// Fails on an invalid configuration or on the first missing distance; no
/// partial report is returned.
///
/// # Examples
///
/// ```
/// use zedz_tours::config::ScenarioConfig;
/// use zedz_tours::distance::{DistanceMatrix, NodeId};
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};
/// use zedz_tours::run_scenarios;
/// use zedz_tours::scenario::RowKind;
///
/// let p = GeoPoint::new(0.0, 0.0);
/// let depot = Endpoint::new(0, NodeId(0), p);
/// let shipments = vec![
///     Shipment::new(Carrier::Usps, depot, Endpoint::new(1, NodeId(1), p), 500.0),
///     Shipment::new(Carrier::Usps, depot, Endpoint::new(2, NodeId(2), p).with_zone_flag(true), 700.0),
/// ];
/// let mut dm = DistanceMatrix::new();
/// dm.insert(NodeId(1), NodeId(2), 40.0)?;
///
/// let report = run_scenarios(&shipments, &dm, &ScenarioConfig::default())?;
/// let sq = report.distances.row(RowKind::StatusQuo).expect("row");
/// assert_eq!(sq.get(Carrier::Usps), Some(540.0));
/// let total = report.distances.row(RowKind::MandatoryCombined).expect("row");
/// assert_eq!(total.total, 1_200.0);
/// assert_eq!(report.mandatory_vehicles.num_vehicles(), 2);
/// # Ok::<(), zedz_tours::Error>(())
/// ```
pub fn run_scenarios<D>(
    shipments: &[Shipment],
    distances: &D,
    config: &ScenarioConfig,
) -> Result<ScenarioReport>
where
    D: DistanceOracle + ?Sized,
{
    let aggregator = ScenarioAggregator::new(distances, config)?;
    let scheduler = VehicleScheduler::new(config.tours_per_vehicle)?;

    log::info!(
        "evaluating {} shipments for {} carriers",
        shipments.len(),
        config.carriers.len()
    );
    let status_quo = aggregator.status_quo(shipments)?;
    let mandatory = aggregator.mandatory_zedz(shipments)?;

    Ok(ScenarioReport {
        distances: ScenarioTable::distances(&status_quo, &mandatory),
        tours: ScenarioTable::tour_counts(&status_quo, &mandatory),
        status_quo_vehicles: scheduler.schedule(&status_quo),
        mandatory_vehicles: scheduler.schedule(&mandatory),
        status_quo,
        mandatory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceError, DistanceMatrix, NodeId};
    use crate::error::Error;
    use crate::models::{Carrier, Endpoint, GeoPoint};
    use crate::scenario::RowKind;

    fn shipment(carrier: Carrier, receiver: u64) -> Shipment {
        let p = GeoPoint::new(0.0, 0.0);
        Shipment::new(
            carrier,
            Endpoint::new(0, NodeId(0), p),
            Endpoint::new(receiver, NodeId(receiver), p),
            10.0,
        )
    }

    #[test]
    fn test_empty_input_gives_zero_rows() {
        let dm = DistanceMatrix::new();
        let report = run_scenarios(&[], &dm, &ScenarioConfig::default()).expect("no lookups");

        for row in report.distances.rows() {
            assert_eq!(row.values.len(), Carrier::ALL.len());
            assert!(row.values.iter().all(|&(_, v)| v == 0.0));
            assert_eq!(row.total, 0.0);
        }
        for row in report.tours.rows() {
            assert_eq!(row.values.len(), Carrier::ALL.len());
            assert_eq!(row.total, 0);
        }
        // 4 status quo cells + 8 mandatory cells.
        assert_eq!(report.warnings().count(), 12);
    }

    #[test]
    fn test_missing_distance_gives_no_report() {
        let dm = DistanceMatrix::new();
        let shipments = vec![shipment(Carrier::Ups, 1), shipment(Carrier::Ups, 2)];
        let err = run_scenarios(&shipments, &dm, &ScenarioConfig::default()).expect_err("missing");
        assert_eq!(
            err,
            Error::Distance(DistanceError::DistanceNotFound {
                from: NodeId(1),
                to: NodeId(2)
            })
        );
    }

    #[test]
    fn test_invalid_packing_rejected() {
        let dm = DistanceMatrix::new();
        let config = ScenarioConfig::default().with_tours_per_vehicle(0);
        assert!(matches!(
            run_scenarios(&[], &dm, &config),
            Err(Error::InvalidPackingFactor { .. })
        ));
    }

    #[test]
    fn test_report_serializes() {
        let dm = DistanceMatrix::new();
        let report = run_scenarios(&[shipment(Carrier::FedEx, 1)], &dm, &ScenarioConfig::default())
            .expect("single stop needs no lookup");
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["tours"]["rows"][0]["kind"], "status_quo");
        assert_eq!(
            report
                .tours
                .row(RowKind::StatusQuo)
                .and_then(|r| r.get(Carrier::FedEx)),
            Some(1)
        );
    }
}
