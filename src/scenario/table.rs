//! Fixed-shape summary tables across scenarios.

use std::fmt;
use std::iter::Sum;

use serde::Serialize;

use super::ScenarioRun;
use crate::models::{Carrier, VehicleClass};

/// Which slice of which scenario a table row summarises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Status quo, all diesel.
    StatusQuo,
    /// Mandatory zone, diesel vehicles only.
    MandatoryDiesel,
    /// Mandatory zone, electric vehicles only.
    MandatoryElectric,
    /// Mandatory zone, both classes.
    MandatoryCombined,
}

impl RowKind {
    /// All rows in table order.
    pub const ALL: [RowKind; 4] = [
        RowKind::StatusQuo,
        RowKind::MandatoryDiesel,
        RowKind::MandatoryElectric,
        RowKind::MandatoryCombined,
    ];

    fn class(self) -> Option<VehicleClass> {
        match self {
            RowKind::StatusQuo | RowKind::MandatoryCombined => None,
            RowKind::MandatoryDiesel => Some(VehicleClass::Diesel),
            RowKind::MandatoryElectric => Some(VehicleClass::Electric),
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RowKind::StatusQuo => "status quo",
            RowKind::MandatoryDiesel => "mandatory (diesel)",
            RowKind::MandatoryElectric => "mandatory (electric)",
            RowKind::MandatoryCombined => "mandatory (total)",
        };
        f.write_str(label)
    }
}

/// One row: a value per carrier plus the total over carriers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow<T> {
    /// What the row summarises.
    pub kind: RowKind,
    /// One value per carrier, in processing order. Never missing a carrier.
    pub values: Vec<(Carrier, T)>,
    /// Sum of `values`.
    pub total: T,
}

impl<T: Copy> TableRow<T> {
    /// Value for `carrier`, if the carrier is part of the table.
    pub fn get(&self, carrier: Carrier) -> Option<T> {
        self.values
            .iter()
            .find(|(c, _)| *c == carrier)
            .map(|&(_, v)| v)
    }
}

/// Four rows of per-carrier scalars, one per [`RowKind`].
///
/// # Examples
///
/// ```
/// use zedz_tours::config::ScenarioConfig;
/// use zedz_tours::distance::DistanceMatrix;
/// use zedz_tours::models::Carrier;
/// use zedz_tours::scenario::{RowKind, ScenarioAggregator, ScenarioTable};
///
/// let dm = DistanceMatrix::new();
/// let config = ScenarioConfig::default();
/// let aggregator = ScenarioAggregator::new(&dm, &config)?;
/// let status_quo = aggregator.status_quo(&[])?;
/// let mandatory = aggregator.mandatory_zedz(&[])?;
///
/// let tours = ScenarioTable::tour_counts(&status_quo, &mandatory);
/// let row = tours.row(RowKind::MandatoryElectric).expect("all rows present");
/// assert_eq!(row.get(Carrier::FedEx), Some(0));
/// assert_eq!(row.total, 0);
/// # Ok::<(), zedz_tours::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTable<T> {
    rows: Vec<TableRow<T>>,
}

impl<T: Copy + Sum<T>> ScenarioTable<T> {
    fn build<F>(status_quo: &ScenarioRun, mandatory: &ScenarioRun, value: F) -> Self
    where
        F: Fn(&ScenarioRun, Carrier, Option<VehicleClass>) -> T,
    {
        let rows = RowKind::ALL
            .iter()
            .map(|&kind| {
                let run = match kind {
                    RowKind::StatusQuo => status_quo,
                    _ => mandatory,
                };
                let values: Vec<(Carrier, T)> = run
                    .carriers()
                    .iter()
                    .map(|&c| (c, value(run, c, kind.class())))
                    .collect();
                let total = values.iter().map(|&(_, v)| v).sum();
                TableRow {
                    kind,
                    values,
                    total,
                }
            })
            .collect();
        Self { rows }
    }

    /// Rows in [`RowKind::ALL`] order.
    pub fn rows(&self) -> &[TableRow<T>] {
        &self.rows
    }

    /// The row of the given kind.
    pub fn row(&self, kind: RowKind) -> Option<&TableRow<T>> {
        self.rows.iter().find(|r| r.kind == kind)
    }
}

impl ScenarioTable<f64> {
    /// Distance table in metres.
    pub fn distances(status_quo: &ScenarioRun, mandatory: &ScenarioRun) -> Self {
        Self::build(status_quo, mandatory, ScenarioRun::distance)
    }
}

impl ScenarioTable<usize> {
    /// Tour-count table.
    pub fn tour_counts(status_quo: &ScenarioRun, mandatory: &ScenarioRun) -> Self {
        Self::build(status_quo, mandatory, ScenarioRun::tour_count)
    }
}
