//! Scenario evaluation and summary tables.
//!
//! - [`ScenarioAggregator`] — tours and distances per (carrier × vehicle class) cell
//! - [`ScenarioTable`] — per-carrier distance and tour-count rows across scenarios

mod aggregator;
mod table;

pub use aggregator::{CellOutcome, EmptyCell, Scenario, ScenarioAggregator, ScenarioRun};
pub use table::{RowKind, ScenarioTable, TableRow};
