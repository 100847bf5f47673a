//! Capacitated nearest-neighbor tour formation.
//!
//! Groups shipments into tours greedily: each tour is seeded with the first
//! shipment still waiting, then repeatedly extended with the waiting shipment
//! whose receiver is nearest (by road) to the receiver of the last stop added.
//! When the tour reaches its stop capacity it is closed and a new one is
//! seeded.
//!
//! # Complexity
//!
//! O(n²) distance lookups per partition, where n = number of shipments.
//!
//! # Determinism
//!
//! Seeds are taken in input order rather than chosen by distance, and ties
//! between equally near candidates go to the one encountered first. The same
//! input order and distances always produce identical tours.

use crate::distance::{checked_distance, DistanceOracle};
use crate::error::{Error, Result};
use crate::models::{Shipment, Tour};

/// Builds tours of at most `capacity` stops with a fixed stop capacity.
///
/// # Examples
///
/// ```
/// use zedz_tours::constructive::TourBuilder;
/// use zedz_tours::distance::{DistanceMatrix, NodeId};
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};
///
/// let p = GeoPoint::new(0.0, 0.0);
/// let depot = Endpoint::new(0, NodeId(0), p);
/// let shipments: Vec<Shipment> = (1..=3)
///     .map(|id| Shipment::new(Carrier::Ups, depot, Endpoint::new(id, NodeId(id), p), 100.0))
///     .collect();
///
/// // Receivers sit on a line: node i is |i - j| * 10 m from node j.
/// let mut dm = DistanceMatrix::new();
/// for a in 1..=3u64 {
///     for b in 1..=3u64 {
///         dm.insert(NodeId(a), NodeId(b), a.abs_diff(b) as f64 * 10.0)?;
///     }
/// }
///
/// let tours = TourBuilder::new(2)?.build(&shipments, &dm)?;
/// assert_eq!(tours.len(), 2);
/// assert_eq!(tours[0].receiver_ids(), vec![1, 2]);
/// assert_eq!(tours[1].receiver_ids(), vec![3]);
/// # Ok::<(), zedz_tours::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourBuilder {
    capacity: usize,
}

impl TourBuilder {
    /// Creates a builder for tours of at most `capacity` stops.
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity { capacity });
        }
        Ok(Self { capacity })
    }

    /// Maximum number of stops per tour.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Groups `shipments` into tours, in the order the tours close.
    ///
    /// An empty input yields no tours. Any failed distance lookup aborts the
    /// whole call.
    pub fn build<D>(&self, shipments: &[Shipment], distances: &D) -> Result<Vec<Tour>>
    where
        D: DistanceOracle + ?Sized,
    {
        let mut remaining: Vec<Shipment> = shipments.to_vec();
        let mut tours = Vec::with_capacity(shipments.len().div_ceil(self.capacity));

        while !remaining.is_empty() {
            let mut stops = Vec::with_capacity(self.capacity.min(remaining.len()));
            let mut last = remaining.remove(0);
            stops.push(last);

            while stops.len() < self.capacity && !remaining.is_empty() {
                let next = nearest_remaining(&last, &remaining, distances)?;
                last = remaining.remove(next);
                stops.push(last);
            }

            log::trace!(
                "closed tour {} with {} stops, {} shipments left",
                tours.len() + 1,
                stops.len(),
                remaining.len()
            );
            tours.push(Tour::from_stops(stops));
        }

        Ok(tours)
    }
}

/// Groups `shipments` into tours of at most `capacity` stops.
///
/// Shorthand for [`TourBuilder::new`] followed by [`TourBuilder::build`]; the
/// capacity is rejected before any distance is looked up.
pub fn build_tours<D>(shipments: &[Shipment], capacity: usize, distances: &D) -> Result<Vec<Tour>>
where
    D: DistanceOracle + ?Sized,
{
    TourBuilder::new(capacity)?.build(shipments, distances)
}

/// Index of the remaining shipment whose receiver is nearest to `from`'s
/// receiver. The first strict minimum wins; a negative or non-finite distance
/// from the oracle is an error.
fn nearest_remaining<D>(from: &Shipment, remaining: &[Shipment], distances: &D) -> Result<usize>
where
    D: DistanceOracle + ?Sized,
{
    let origin = from.receiver_node();
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in remaining.iter().enumerate() {
        let to = candidate.receiver_node();
        let d = checked_distance(origin, to, distances.distance(origin, to)?)?;
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    // `remaining` is non-empty whenever this is called.
    Ok(best.map_or(0, |(idx, _)| idx))
}
