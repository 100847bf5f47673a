//! Constructive heuristics for grouping shipments into tours.
//!
//! - [`build_tours`] / [`TourBuilder`] — capacitated greedy nearest-neighbor, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{build_tours, TourBuilder};
