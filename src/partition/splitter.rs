//! Carrier and zone partitioning of shipment collections.
//!
//! Every function here preserves the input order. The tour builder seeds each
//! tour from the first remaining shipment, so order is part of the contract.

use crate::models::{Carrier, Shipment};

/// Shipments of one carrier split by zero-emission-zone eligibility.
///
/// The two halves are disjoint and together hold every input shipment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSplit {
    /// Sender or receiver inside the zone: must be served electrically.
    pub eligible: Vec<Shipment>,
    /// Both ends outside the zone: may stay on diesel.
    pub ineligible: Vec<Shipment>,
}

impl ZoneSplit {
    /// Total number of shipments across both halves.
    pub fn len(&self) -> usize {
        self.eligible.len() + self.ineligible.len()
    }

    /// `true` if both halves are empty.
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty() && self.ineligible.is_empty()
    }
}

/// Returns the shipments handled by `carrier`, in input order.
///
/// # Examples
///
/// ```
/// use zedz_tours::distance::NodeId;
/// use zedz_tours::models::{Carrier, Endpoint, GeoPoint, Shipment};
/// use zedz_tours::partition::partition_by_carrier;
///
/// let p = GeoPoint::new(0.0, 0.0);
/// let make = |carrier, id| {
///     Shipment::new(carrier, Endpoint::new(0, NodeId(0), p), Endpoint::new(id, NodeId(id), p), 1.0)
/// };
/// let all = vec![make(Carrier::Ups, 1), make(Carrier::FedEx, 2), make(Carrier::Ups, 3)];
///
/// let ups = partition_by_carrier(&all, Carrier::Ups);
/// assert_eq!(ups.iter().map(Shipment::receiver_id).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn partition_by_carrier(shipments: &[Shipment], carrier: Carrier) -> Vec<Shipment> {
    shipments
        .iter()
        .filter(|s| s.carrier() == carrier)
        .copied()
        .collect()
}

/// Splits shipments into zone-eligible and zone-ineligible halves.
pub fn split_by_zone(shipments: &[Shipment]) -> ZoneSplit {
    let (eligible, ineligible): (Vec<Shipment>, Vec<Shipment>) = shipments
        .iter()
        .copied()
        .partition(Shipment::is_zone_eligible);
    ZoneSplit {
        eligible,
        ineligible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::NodeId;
    use crate::models::{Endpoint, GeoPoint};

    fn shipment(carrier: Carrier, receiver: u64, sender_in: bool, receiver_in: bool) -> Shipment {
        let p = GeoPoint::new(34.0, -118.5);
        Shipment::new(
            carrier,
            Endpoint::new(0, NodeId(0), p).with_zone_flag(sender_in),
            Endpoint::new(receiver, NodeId(receiver), p).with_zone_flag(receiver_in),
            100.0,
        )
    }

    fn ids(shipments: &[Shipment]) -> Vec<u64> {
        shipments.iter().map(Shipment::receiver_id).collect()
    }

    #[test]
    fn test_partition_by_carrier_keeps_order() {
        let all = vec![
            shipment(Carrier::Usps, 4, false, false),
            shipment(Carrier::Ups, 1, false, false),
            shipment(Carrier::Usps, 2, false, false),
            shipment(Carrier::Usps, 9, false, false),
        ];
        assert_eq!(ids(&partition_by_carrier(&all, Carrier::Usps)), vec![4, 2, 9]);
        assert!(partition_by_carrier(&all, Carrier::FedEx).is_empty());
    }

    #[test]
    fn test_split_by_zone() {
        let all = vec![
            shipment(Carrier::Ups, 1, false, false),
            shipment(Carrier::Ups, 2, true, false),
            shipment(Carrier::Ups, 3, false, true),
            shipment(Carrier::Ups, 4, true, true),
            shipment(Carrier::Ups, 5, false, false),
        ];
        let split = split_by_zone(&all);
        assert_eq!(ids(&split.eligible), vec![2, 3, 4]);
        assert_eq!(ids(&split.ineligible), vec![1, 5]);
        assert_eq!(split.len(), all.len());
    }

    #[test]
    fn test_split_empty() {
        let split = split_by_zone(&[]);
        assert!(split.is_empty());
        assert_eq!(split, ZoneSplit::default());
    }
}
