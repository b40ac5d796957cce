//! The in-progress product listing aggregate.

use serde::{Deserialize, Serialize};

use crate::config::PlatformConfig;
use crate::ids::{CategoryId, SubCategoryId};

use super::content::ContentInfo;
use super::identity::IdentityInfo;
use super::logistics::{LogisticsInfo, ShipType, MAX_WINDOW_DAYS};
use super::media::MediaGallery;
use super::offers::OfferSet;
use super::pricing::PricingInfo;

/// Everything a seller has entered across the six wizard steps.
///
/// The draft is a plain data holder: it accepts any combination of
/// partially filled steps and only runs the silent value clamps. Whether
/// a step is complete is the wizard's question, not the draft's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub identity: IdentityInfo,
    pub media: MediaGallery,
    pub content: ContentInfo,
    pub pricing: PricingInfo,
    pub logistics: LogisticsInfo,
    pub offers: OfferSet,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProductDraft {
    /// Fresh empty draft seeded with platform fee and tax defaults.
    pub fn new(config: &PlatformConfig) -> Self {
        let now = current_timestamp();
        Self {
            identity: IdentityInfo::default(),
            media: MediaGallery::default(),
            content: ContentInfo::default(),
            pricing: PricingInfo::new(config),
            logistics: LogisticsInfo::default(),
            offers: OfferSet::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge an identity patch. Changing the category to a different one
    /// drops the sub-category selection, since sub-categories belong to
    /// their parent.
    pub fn apply_identity(&mut self, patch: IdentityPatch) {
        if let Some(category_id) = patch.category_id {
            if self.identity.category_id.as_ref() != Some(&category_id) {
                self.identity.sub_category_id = None;
            }
            self.identity.category_id = Some(category_id);
        }
        if let Some(sub_category_id) = patch.sub_category_id {
            self.identity.sub_category_id = Some(sub_category_id);
        }
        if let Some(product_type) = patch.product_type {
            self.identity.product_type = product_type;
        }
        if let Some(title) = patch.title {
            self.identity.title = title;
        }
        if let Some(brand) = patch.brand {
            self.identity.brand = brand;
        }
        if let Some(model_number) = patch.model_number {
            self.identity.model_number = model_number;
        }
        if let Some(short_description) = patch.short_description {
            self.identity.short_description = short_description;
        }
        if let Some(base_stock) = patch.base_stock {
            self.identity.base_stock = base_stock.max(0);
        }
        if let Some(size_applicable) = patch.size_applicable {
            self.identity.size_applicable = size_applicable;
        }
        if let Some(color_applicable) = patch.color_applicable {
            self.identity.color_applicable = color_applicable;
        }
    }

    /// Merge a content patch.
    pub fn apply_content(&mut self, patch: ContentPatch) {
        if let Some(full_description) = patch.full_description {
            self.content.full_description = full_description;
        }
    }

    /// Merge a pricing patch.
    ///
    /// Country is applied first so its GST auto-fill runs before any
    /// explicit rate in the same patch; an explicit rate therefore wins.
    /// MRP lands before the selling price so the price clamps against the
    /// ceiling set in the same patch.
    pub fn apply_pricing(&mut self, patch: PricingPatch, default_gst: f64) {
        if let Some(primary_country) = patch.primary_country {
            self.pricing.set_primary_country(primary_country, default_gst);
        }
        if let Some(gst_percent) = patch.gst_percent {
            self.pricing.set_gst_percent(gst_percent);
        }
        if let Some(mrp) = patch.mrp {
            self.pricing.set_mrp(mrp);
        }
        if let Some(selling_price) = patch.selling_price {
            self.pricing.set_selling_price(selling_price);
        }
        if let Some(stock_quantity) = patch.stock_quantity {
            self.pricing.stock_quantity = stock_quantity.max(0);
        }
        if let Some(platform_fee_percent) = patch.platform_fee_percent {
            self.pricing.platform_fee_percent = platform_fee_percent.clamp(0.0, 100.0);
        }
        if let Some(commission_percent) = patch.commission_percent {
            self.pricing.commission_percent = commission_percent.clamp(0.0, 100.0);
        }
    }

    /// Merge a logistics patch, clamping weight and policy windows.
    pub fn apply_logistics(&mut self, patch: LogisticsPatch) {
        if let Some(weight_kg) = patch.weight_kg {
            self.logistics.weight_kg = weight_kg.max(0.0);
        }
        if let Some(length_cm) = patch.length_cm {
            self.logistics.length_cm = Some(length_cm);
        }
        if let Some(width_cm) = patch.width_cm {
            self.logistics.width_cm = Some(width_cm);
        }
        if let Some(height_cm) = patch.height_cm {
            self.logistics.height_cm = Some(height_cm);
        }
        if let Some(ship_type) = patch.ship_type {
            self.logistics.ship_type = ship_type;
        }
        if let Some(courier_partner) = patch.courier_partner {
            self.logistics.courier_partner = Some(courier_partner);
        }
        if let Some(manufacturer_name) = patch.manufacturer_name {
            self.logistics.manufacturer_name = manufacturer_name;
        }
        if let Some(manufacturer_address) = patch.manufacturer_address {
            self.logistics.manufacturer_address = manufacturer_address;
        }
        if let Some(packing_details) = patch.packing_details {
            self.logistics.packing_details = packing_details;
        }
        if let Some(cancellation_window_days) = patch.cancellation_window_days {
            self.logistics.cancellation_window_days =
                cancellation_window_days.clamp(0, MAX_WINDOW_DAYS);
        }
        if let Some(return_window_days) = patch.return_window_days {
            self.logistics.return_window_days = return_window_days.clamp(0, MAX_WINDOW_DAYS);
        }
    }

    /// Mark the draft as touched.
    pub fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Partial update for step 1. `None` fields are left alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IdentityPatch {
    pub category_id: Option<CategoryId>,
    pub sub_category_id: Option<SubCategoryId>,
    pub product_type: Option<String>,
    pub title: Option<String>,
    pub brand: Option<String>,
    pub model_number: Option<String>,
    pub short_description: Option<String>,
    pub base_stock: Option<i64>,
    pub size_applicable: Option<bool>,
    pub color_applicable: Option<bool>,
}

/// Partial update for step 3's description field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentPatch {
    pub full_description: Option<String>,
}

/// Partial update for step 4.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PricingPatch {
    pub primary_country: Option<String>,
    pub gst_percent: Option<f64>,
    pub mrp: Option<f64>,
    pub selling_price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub platform_fee_percent: Option<f64>,
    pub commission_percent: Option<f64>,
}

/// Partial update for step 5.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogisticsPatch {
    pub weight_kg: Option<f64>,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub ship_type: Option<ShipType>,
    pub courier_partner: Option<String>,
    pub manufacturer_name: Option<String>,
    pub manufacturer_address: Option<String>,
    pub packing_details: Option<String>,
    pub cancellation_window_days: Option<i64>,
    pub return_window_days: Option<i64>,
}

fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new(&PlatformConfig::default())
    }

    #[test]
    fn test_new_draft_seeds_platform_defaults() {
        let draft = draft();
        assert_eq!(draft.pricing.platform_fee_percent, 7.5);
        assert_eq!(draft.pricing.commission_percent, 0.5);
        assert_eq!(draft.pricing.gst_percent, 18.0);
        assert!(draft.identity.title.is_empty());
        assert!(draft.offers.is_empty());
    }

    #[test]
    fn test_identity_patch_merges_only_provided_fields() {
        let mut draft = draft();
        draft.apply_identity(IdentityPatch {
            title: Some("Trail Running Shoes".to_string()),
            brand: Some("Vendora Basics".to_string()),
            ..Default::default()
        });
        draft.apply_identity(IdentityPatch {
            short_description: Some("Lightweight".to_string()),
            ..Default::default()
        });

        assert_eq!(draft.identity.title, "Trail Running Shoes");
        assert_eq!(draft.identity.brand, "Vendora Basics");
        assert_eq!(draft.identity.short_description, "Lightweight");
    }

    #[test]
    fn test_category_change_clears_sub_category() {
        let mut draft = draft();
        draft.apply_identity(IdentityPatch {
            category_id: Some(CategoryId::new("cat-fashion")),
            sub_category_id: Some(SubCategoryId::new("sub-shoes")),
            ..Default::default()
        });
        assert!(draft.identity.sub_category_id.is_some());

        draft.apply_identity(IdentityPatch {
            category_id: Some(CategoryId::new("cat-electronics")),
            ..Default::default()
        });
        assert!(draft.identity.sub_category_id.is_none());

        // Re-applying the same category keeps the sub-category
        draft.apply_identity(IdentityPatch {
            sub_category_id: Some(SubCategoryId::new("sub-audio")),
            ..Default::default()
        });
        draft.apply_identity(IdentityPatch {
            category_id: Some(CategoryId::new("cat-electronics")),
            ..Default::default()
        });
        assert_eq!(
            draft.identity.sub_category_id,
            Some(SubCategoryId::new("sub-audio"))
        );
    }

    #[test]
    fn test_pricing_patch_country_fills_gst_then_explicit_rate_wins() {
        let mut draft = draft();
        draft.apply_pricing(
            PricingPatch {
                primary_country: Some("IN".to_string()),
                gst_percent: Some(5.0),
                ..Default::default()
            },
            18.0,
        );
        assert_eq!(draft.pricing.primary_country, "IN");
        assert_eq!(draft.pricing.gst_percent, 5.0);
    }

    #[test]
    fn test_pricing_patch_orders_mrp_before_price() {
        let mut draft = draft();
        draft.apply_pricing(
            PricingPatch {
                mrp: Some(1000.0),
                selling_price: Some(750.0),
                ..Default::default()
            },
            18.0,
        );
        assert_eq!(draft.pricing.selling_price, 750.0);

        draft.apply_pricing(
            PricingPatch {
                mrp: Some(500.0),
                ..Default::default()
            },
            18.0,
        );
        assert_eq!(draft.pricing.selling_price, 500.0);
    }

    #[test]
    fn test_logistics_patch_clamps_windows() {
        let mut draft = draft();
        draft.apply_logistics(LogisticsPatch {
            cancellation_window_days: Some(45),
            return_window_days: Some(-2),
            ..Default::default()
        });
        assert_eq!(draft.logistics.cancellation_window_days, 30);
        assert_eq!(draft.logistics.return_window_days, 0);
    }

    #[test]
    fn test_negative_stock_floored() {
        let mut draft = draft();
        draft.apply_identity(IdentityPatch {
            base_stock: Some(-10),
            ..Default::default()
        });
        draft.apply_pricing(
            PricingPatch {
                stock_quantity: Some(-5),
                ..Default::default()
            },
            18.0,
        );
        assert_eq!(draft.identity.base_stock, 0);
        assert_eq!(draft.pricing.stock_quantity, 0);
    }
}
