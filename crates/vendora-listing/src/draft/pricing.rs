//! Step 4: pricing, tax, and delivery geography.

use serde::{Deserialize, Serialize};

use crate::config::PlatformConfig;
use crate::countries::{self, Country};
use crate::error::ListingError;
use crate::ids::DeliveryCountryId;

/// A per-country delivery rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryCountry {
    /// Unique row identifier.
    pub id: DeliveryCountryId,
    /// ISO-style country code, stored uppercase.
    pub country_code: String,
    /// Country name copied from the reference list at add time.
    pub country_name: String,
    /// Flat delivery charge for this country.
    pub delivery_charge: f64,
    /// Minimum order quantity for this country.
    pub min_order_qty: i64,
}

/// Step 4 of the listing draft: money and geography.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingInfo {
    /// Primary country of sale, uppercase code. Empty until selected.
    pub primary_country: String,
    /// GST/VAT rate in percent, 0-100. Auto-filled on country selection,
    /// freely editable afterwards.
    pub gst_percent: f64,
    /// Maximum retail price, the selling price ceiling.
    pub mrp: f64,
    /// Selling price, held within `[0, mrp]` on every write.
    pub selling_price: f64,
    /// Stock quantity for this listing.
    pub stock_quantity: i64,
    /// Platform fee in percent, seeded from platform config.
    pub platform_fee_percent: f64,
    /// Marketplace commission in percent, seeded from platform config.
    pub commission_percent: f64,
    /// Per-country delivery rules, unique by country code.
    pub delivery_countries: Vec<DeliveryCountry>,
}

impl PricingInfo {
    /// Empty pricing record seeded with platform defaults.
    pub fn new(config: &PlatformConfig) -> Self {
        Self {
            primary_country: String::new(),
            gst_percent: config.default_gst_percent,
            mrp: 0.0,
            selling_price: 0.0,
            stock_quantity: 0,
            platform_fee_percent: config.platform_fee_percent,
            commission_percent: config.commission_percent,
            delivery_countries: Vec::new(),
        }
    }

    /// Set the MRP, floored at zero.
    ///
    /// A selling price above the new ceiling is clamped down; it is never
    /// left exceeding the MRP.
    pub fn set_mrp(&mut self, mrp: f64) {
        self.mrp = mrp.max(0.0);
        if self.selling_price > self.mrp {
            self.selling_price = self.mrp;
        }
    }

    /// Set the selling price, clamped into `[0, mrp]`.
    pub fn set_selling_price(&mut self, price: f64) {
        self.selling_price = price.clamp(0.0, self.mrp);
    }

    /// Set the primary country and re-fill the GST rate from the static
    /// table, falling back to `default_gst` for unknown codes.
    ///
    /// The refill happens on every country change, including over a manual
    /// rate edit; the rate stays editable afterwards.
    pub fn set_primary_country(&mut self, code: impl Into<String>, default_gst: f64) {
        let code = code.into().trim().to_uppercase();
        self.gst_percent = countries::gst_rate_for(&code).unwrap_or(default_gst);
        self.primary_country = code;
    }

    /// Set the GST rate, clamped to 0-100.
    pub fn set_gst_percent(&mut self, percent: f64) {
        self.gst_percent = percent.clamp(0.0, 100.0);
    }

    /// Add a delivery country row.
    ///
    /// The human-readable name is resolved against `reference` and stored
    /// denormalized on the row, so later reference-list changes do not
    /// rewrite it. Duplicate and unknown codes are rejected with the table
    /// unchanged. The charge is floored at zero and the minimum order
    /// quantity at one.
    pub fn add_delivery_country(
        &mut self,
        id: DeliveryCountryId,
        code: impl Into<String>,
        reference: &[Country],
        delivery_charge: f64,
        min_order_qty: i64,
    ) -> Result<DeliveryCountryId, ListingError> {
        let code = code.into().trim().to_uppercase();
        if self.delivery_countries.iter().any(|c| c.country_code == code) {
            return Err(ListingError::DuplicateDeliveryCountry(code));
        }
        let name = reference
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.name.clone())
            .ok_or_else(|| ListingError::UnknownCountry(code.clone()))?;
        self.delivery_countries.push(DeliveryCountry {
            id: id.clone(),
            country_code: code,
            country_name: name,
            delivery_charge: delivery_charge.max(0.0),
            min_order_qty: min_order_qty.max(1),
        });
        Ok(id)
    }

    /// Remove a delivery country row by id.
    pub fn remove_delivery_country(&mut self, id: &DeliveryCountryId) -> bool {
        let len_before = self.delivery_countries.len();
        self.delivery_countries.retain(|c| &c.id != id);
        self.delivery_countries.len() < len_before
    }

    /// Derive the full pricing breakdown from the current fields.
    pub fn breakdown(&self) -> PricingBreakdown {
        PricingBreakdown::derive(self)
    }
}

/// Derived pricing figures, recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    /// Rounded percentage discount off MRP; 0 when MRP is 0.
    pub discount_percent: f64,
    /// Platform fee charged on the selling price.
    pub platform_fee_amount: f64,
    /// Marketplace commission on the selling price.
    pub commission_amount: f64,
    /// GST collected on the selling price.
    pub gst_amount: f64,
    /// What the seller keeps after fees and tax.
    pub seller_earnings: f64,
}

impl PricingBreakdown {
    /// Compute the figures from the raw step fields.
    pub fn derive(pricing: &PricingInfo) -> Self {
        let discount_percent = if pricing.mrp > 0.0 {
            (((pricing.mrp - pricing.selling_price) / pricing.mrp) * 100.0).round()
        } else {
            0.0
        };
        let platform_fee_amount = pricing.selling_price * pricing.platform_fee_percent / 100.0;
        let commission_amount = pricing.selling_price * pricing.commission_percent / 100.0;
        let gst_amount = pricing.selling_price * pricing.gst_percent / 100.0;
        let seller_earnings =
            pricing.selling_price - platform_fee_amount - commission_amount - gst_amount;
        Self {
            discount_percent,
            platform_fee_amount,
            commission_amount,
            gst_amount,
            seller_earnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::reference_countries;

    fn pricing() -> PricingInfo {
        PricingInfo::new(&PlatformConfig::default())
    }

    fn dc_id(n: u64) -> DeliveryCountryId {
        DeliveryCountryId::new(format!("dc-{}", n))
    }

    #[test]
    fn test_seeded_defaults() {
        let pricing = pricing();
        assert_eq!(pricing.platform_fee_percent, 7.5);
        assert_eq!(pricing.commission_percent, 0.5);
        assert_eq!(pricing.gst_percent, 18.0);
        assert!(pricing.primary_country.is_empty());
    }

    #[test]
    fn test_selling_price_clamped_to_mrp() {
        let mut pricing = pricing();
        pricing.set_mrp(1000.0);

        pricing.set_selling_price(750.0);
        assert_eq!(pricing.selling_price, 750.0);

        pricing.set_selling_price(1500.0);
        assert_eq!(pricing.selling_price, 1000.0);

        pricing.set_selling_price(-50.0);
        assert_eq!(pricing.selling_price, 0.0);
    }

    #[test]
    fn test_lowering_mrp_clamps_selling_price() {
        let mut pricing = pricing();
        pricing.set_mrp(1000.0);
        pricing.set_selling_price(900.0);

        pricing.set_mrp(800.0);
        assert_eq!(pricing.selling_price, 800.0);
    }

    #[test]
    fn test_zero_mrp_forces_zero_price() {
        let mut pricing = pricing();
        pricing.set_selling_price(500.0);
        assert_eq!(pricing.selling_price, 0.0);
    }

    #[test]
    fn test_country_selection_refills_gst() {
        let mut pricing = pricing();
        pricing.set_primary_country("au", 18.0);
        assert_eq!(pricing.primary_country, "AU");
        assert_eq!(pricing.gst_percent, 10.0);

        // Manual edit survives until the next country change
        pricing.set_gst_percent(12.0);
        assert_eq!(pricing.gst_percent, 12.0);
        pricing.set_primary_country("GB", 18.0);
        assert_eq!(pricing.gst_percent, 20.0);

        // Unknown codes fall back to the platform default
        pricing.set_primary_country("ZZ", 18.0);
        assert_eq!(pricing.gst_percent, 18.0);
    }

    #[test]
    fn test_gst_clamped() {
        let mut pricing = pricing();
        pricing.set_gst_percent(150.0);
        assert_eq!(pricing.gst_percent, 100.0);
        pricing.set_gst_percent(-5.0);
        assert_eq!(pricing.gst_percent, 0.0);
    }

    #[test]
    fn test_add_delivery_country() {
        let reference = reference_countries();
        let mut pricing = pricing();

        let added = pricing.add_delivery_country(dc_id(1), "us", &reference, 25.0, 1);
        assert!(added.is_ok());
        assert_eq!(pricing.delivery_countries[0].country_code, "US");
        assert_eq!(pricing.delivery_countries[0].country_name, "United States");
    }

    #[test]
    fn test_duplicate_delivery_country_rejected() {
        let reference = reference_countries();
        let mut pricing = pricing();
        pricing
            .add_delivery_country(dc_id(1), "US", &reference, 25.0, 1)
            .unwrap();

        let result = pricing.add_delivery_country(dc_id(2), "US", &reference, 30.0, 2);
        assert!(matches!(
            result,
            Err(ListingError::DuplicateDeliveryCountry(_))
        ));
        let us_rows = pricing
            .delivery_countries
            .iter()
            .filter(|c| c.country_code == "US")
            .count();
        assert_eq!(us_rows, 1);
    }

    #[test]
    fn test_unknown_delivery_country_rejected() {
        let reference = reference_countries();
        let mut pricing = pricing();
        let result = pricing.add_delivery_country(dc_id(1), "ZZ", &reference, 25.0, 1);
        assert!(matches!(result, Err(ListingError::UnknownCountry(_))));
        assert!(pricing.delivery_countries.is_empty());
    }

    #[test]
    fn test_delivery_country_floors() {
        let reference = reference_countries();
        let mut pricing = pricing();
        pricing
            .add_delivery_country(dc_id(1), "SG", &reference, -10.0, 0)
            .unwrap();
        assert_eq!(pricing.delivery_countries[0].delivery_charge, 0.0);
        assert_eq!(pricing.delivery_countries[0].min_order_qty, 1);
    }

    #[test]
    fn test_remove_delivery_country() {
        let reference = reference_countries();
        let mut pricing = pricing();
        pricing
            .add_delivery_country(dc_id(1), "US", &reference, 25.0, 1)
            .unwrap();
        assert!(pricing.remove_delivery_country(&dc_id(1)));
        assert!(!pricing.remove_delivery_country(&dc_id(1)));
    }

    // === Breakdown derivation ===

    #[test]
    fn test_breakdown_reference_scenario() {
        let mut pricing = pricing();
        pricing.set_mrp(1000.0);
        pricing.set_selling_price(750.0);
        pricing.set_primary_country("IN", 18.0);

        let breakdown = pricing.breakdown();
        assert_eq!(breakdown.discount_percent, 25.0);
        assert!((breakdown.platform_fee_amount - 56.25).abs() < 1e-9);
        assert!((breakdown.commission_amount - 3.75).abs() < 1e-9);
        assert!((breakdown.gst_amount - 135.0).abs() < 1e-9);
        assert!((breakdown.seller_earnings - 555.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_components_sum_to_price() {
        let mut pricing = pricing();
        pricing.set_mrp(799.0);
        pricing.set_selling_price(649.0);
        pricing.set_gst_percent(12.0);

        let b = pricing.breakdown();
        let total =
            b.seller_earnings + b.platform_fee_amount + b.commission_amount + b.gst_amount;
        assert!((total - pricing.selling_price).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_zero_mrp() {
        let pricing = pricing();
        let breakdown = pricing.breakdown();
        assert_eq!(breakdown.discount_percent, 0.0);
        assert_eq!(breakdown.seller_earnings, 0.0);
    }

    #[test]
    fn test_discount_percent_rounds() {
        let mut pricing = pricing();
        pricing.set_mrp(900.0);
        pricing.set_selling_price(600.0);
        // 33.333...% rounds to 33
        assert_eq!(pricing.breakdown().discount_percent, 33.0);
    }
}
