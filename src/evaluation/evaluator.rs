//! Tour path-distance evaluation.

use crate::distance::{checked_distance, DistanceOracle};
use crate::error::Result;
use crate::models::Tour;

/// Computes the driven distance of tours.
///
/// A tour's path distance is the first shipment's stored sender-to-receiver
/// distance plus the road distance between each pair of consecutive
/// receivers. The return trip to the depot is not counted.
///
/// # Examples
///
/// ```
/// use zedz_tours::constructive::build_tours;
/// use zedz_tours::distance::{DistanceMatrix, NodeId};
/// use zedz_tours::evaluation::TourEvaluator;
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};
///
/// let p = GeoPoint::new(0.0, 0.0);
/// let depot = Endpoint::new(0, NodeId(0), p);
/// let shipments = vec![
///     Shipment::new(Carrier::Usps, depot, Endpoint::new(1, NodeId(1), p), 800.0),
///     Shipment::new(Carrier::Usps, depot, Endpoint::new(2, NodeId(2), p), 900.0),
/// ];
/// let mut dm = DistanceMatrix::new();
/// dm.insert(NodeId(1), NodeId(2), 150.0)?;
///
/// let tours = build_tours(&shipments, 2, &dm)?;
/// let evaluator = TourEvaluator::new(&dm);
/// assert_eq!(evaluator.path_distance(&tours[0])?, 950.0);
/// # Ok::<(), zedz_tours::Error>(())
/// ```
pub struct TourEvaluator<'a, D: DistanceOracle + ?Sized> {
    distances: &'a D,
}

impl<'a, D: DistanceOracle + ?Sized> TourEvaluator<'a, D> {
    /// Creates an evaluator backed by the given distance oracle.
    pub fn new(distances: &'a D) -> Self {
        Self { distances }
    }

    /// Path distance of one tour, in metres.
    pub fn path_distance(&self, tour: &Tour) -> Result<f64> {
        let stops = tour.stops();
        let first_leg = stops.first().map_or(0.0, |s| s.first_leg_m());
        stops.windows(2).try_fold(first_leg, |acc, pair| -> Result<f64> {
            let (from, to) = (pair[0].receiver_node(), pair[1].receiver_node());
            let d = checked_distance(from, to, self.distances.distance(from, to)?)?;
            Ok(acc + d)
        })
    }

    /// Path distance of every tour, in the same order.
    pub fn path_distances(&self, tours: &[Tour]) -> Result<Vec<f64>> {
        tours.iter().map(|t| self.path_distance(t)).collect()
    }
}
