//! Step 5: shipping, manufacturer, and policy details.

use serde::{Deserialize, Serialize};

/// Divisor for the volumetric weight formula (cm^3 per kg).
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Upper bound on cancellation and return windows, in days.
pub const MAX_WINDOW_DAYS: i64 = 30;

/// Who carries the parcel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipType {
    /// The seller ships through their own courier partner.
    SelfShip,
    /// The platform's logistics network ships.
    #[default]
    Platform,
}

impl ShipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::SelfShip => "self",
            ShipType::Platform => "platform",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "self" => Some(ShipType::SelfShip),
            "platform" => Some(ShipType::Platform),
            _ => None,
        }
    }
}

impl std::fmt::Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Step 5 of the listing draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogisticsInfo {
    /// Actual package weight in kilograms.
    pub weight_kg: f64,
    /// Package length in centimeters, if measured.
    pub length_cm: Option<f64>,
    /// Package width in centimeters, if measured.
    pub width_cm: Option<f64>,
    /// Package height in centimeters, if measured.
    pub height_cm: Option<f64>,
    /// Shipping mode.
    pub ship_type: ShipType,
    /// Courier partner name, required for self-ship.
    pub courier_partner: Option<String>,
    /// Manufacturer name for the compliance label.
    pub manufacturer_name: String,
    /// Manufacturer address for the compliance label.
    pub manufacturer_address: String,
    /// Free-text packing description.
    pub packing_details: String,
    /// Days after ordering in which the buyer may cancel.
    pub cancellation_window_days: i64,
    /// Days after delivery in which the buyer may return.
    pub return_window_days: i64,
}

impl LogisticsInfo {
    /// Volumetric weight in kg: `l * w * h / 5000`.
    ///
    /// Zero unless all three dimensions are present and positive.
    pub fn volumetric_weight(&self) -> f64 {
        match (self.length_cm, self.width_cm, self.height_cm) {
            (Some(l), Some(w), Some(h)) if l > 0.0 && w > 0.0 && h > 0.0 => {
                l * w * h / VOLUMETRIC_DIVISOR
            }
            _ => 0.0,
        }
    }

    /// The billable weight: the greater of actual and volumetric.
    pub fn chargeable_weight(&self) -> f64 {
        self.weight_kg.max(self.volumetric_weight())
    }

    /// Whether the courier requirement is satisfied for the chosen ship
    /// type. Platform shipping never needs a partner.
    pub fn courier_ok(&self) -> bool {
        match self.ship_type {
            ShipType::Platform => true,
            ShipType::SelfShip => self
                .courier_partner
                .as_ref()
                .is_some_and(|p| !p.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volumetric_weight_formula() {
        let logistics = LogisticsInfo {
            length_cm: Some(50.0),
            width_cm: Some(40.0),
            height_cm: Some(30.0),
            ..Default::default()
        };
        assert_eq!(logistics.volumetric_weight(), 12.0);
    }

    #[test]
    fn test_volumetric_weight_requires_all_dimensions() {
        let logistics = LogisticsInfo {
            length_cm: Some(50.0),
            width_cm: Some(40.0),
            height_cm: None,
            ..Default::default()
        };
        assert_eq!(logistics.volumetric_weight(), 0.0);

        let logistics = LogisticsInfo {
            length_cm: Some(50.0),
            width_cm: Some(0.0),
            height_cm: Some(30.0),
            ..Default::default()
        };
        assert_eq!(logistics.volumetric_weight(), 0.0);
    }

    #[test]
    fn test_chargeable_weight_takes_heavier() {
        let mut logistics = LogisticsInfo {
            weight_kg: 2.0,
            length_cm: Some(50.0),
            width_cm: Some(40.0),
            height_cm: Some(30.0),
            ..Default::default()
        };
        // Volumetric 12.0 beats actual 2.0
        assert_eq!(logistics.chargeable_weight(), 12.0);

        logistics.weight_kg = 15.0;
        assert_eq!(logistics.chargeable_weight(), 15.0);
    }

    #[test]
    fn test_courier_required_for_self_ship() {
        let mut logistics = LogisticsInfo {
            ship_type: ShipType::SelfShip,
            ..Default::default()
        };
        assert!(!logistics.courier_ok());

        logistics.courier_partner = Some("  ".to_string());
        assert!(!logistics.courier_ok());

        logistics.courier_partner = Some("BlueDart".to_string());
        assert!(logistics.courier_ok());
    }

    #[test]
    fn test_platform_ship_needs_no_courier() {
        let logistics = LogisticsInfo::default();
        assert_eq!(logistics.ship_type, ShipType::Platform);
        assert!(logistics.courier_ok());
    }

    #[test]
    fn test_ship_type_round_trip() {
        assert_eq!(ShipType::from_str("self"), Some(ShipType::SelfShip));
        assert_eq!(ShipType::from_str("platform"), Some(ShipType::Platform));
        assert_eq!(ShipType::from_str("drone"), None);
        assert_eq!(ShipType::SelfShip.as_str(), "self");
    }
}
