//! Delivery carriers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery company whose shipments form their own partition.
///
/// [`Carrier::ALL`] lists the carriers in their canonical processing order,
/// which is also the order vehicle ids are handed out in.
///
/// # Examples
///
/// ```
/// use zedz_tours::models::Carrier;
///
/// assert_eq!(Carrier::ALL[0], Carrier::Ups);
/// assert_eq!(Carrier::AmazonLogistics.to_string(), "Amazon Logistics");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Carrier {
    /// United Parcel Service.
    #[serde(rename = "UPS")]
    Ups,
    /// Amazon Logistics.
    #[serde(rename = "Amazon Logistics")]
    AmazonLogistics,
    /// United States Postal Service.
    #[serde(rename = "USPS")]
    Usps,
    /// FedEx.
    #[serde(rename = "FedEx")]
    FedEx,
}

impl Carrier {
    /// Every carrier, in canonical processing order.
    pub const ALL: [Carrier; 4] = [
        Carrier::Ups,
        Carrier::AmazonLogistics,
        Carrier::Usps,
        Carrier::FedEx,
    ];

    /// Display name of the carrier.
    pub fn name(self) -> &'static str {
        match self {
            Carrier::Ups => "UPS",
            Carrier::AmazonLogistics => "Amazon Logistics",
            Carrier::Usps => "USPS",
            Carrier::FedEx => "FedEx",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
