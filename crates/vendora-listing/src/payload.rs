//! The flattened submission payload handed to external collaborators.
//!
//! Field names serialize in camelCase, the shape the marketplace backend
//! accepts. Derived pricing and weight figures are embedded read-only so
//! the receiver never recomputes them.

use serde::{Deserialize, Serialize};

use crate::draft::{
    ColorVariant, DeliveryCountry, MediaFile, OfferRule, OfferTerms, PricingBreakdown,
    ProductDraft, SizeVariant, Specification,
};
use crate::ids::{CategoryId, DeliveryCountryId, MediaId, OfferId, SubCategoryId};

/// Moderation state a payload is submitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Awaiting marketplace review after a full submission.
    #[default]
    Pending,
    /// Saved without validation, invisible to buyers.
    Draft,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Draft => "draft",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One delivery-country row in wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCountryPayload {
    pub id: DeliveryCountryId,
    pub country_code: String,
    pub country_name: String,
    pub delivery_charge: f64,
    pub min_order_qty: i64,
}

impl From<&DeliveryCountry> for DeliveryCountryPayload {
    fn from(entry: &DeliveryCountry) -> Self {
        Self {
            id: entry.id.clone(),
            country_code: entry.country_code.clone(),
            country_name: entry.country_name.clone(),
            delivery_charge: entry.delivery_charge,
            min_order_qty: entry.min_order_qty,
        }
    }
}

/// One media reference in wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub id: MediaId,
    pub file_name: String,
    pub kind: String,
    pub size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&MediaFile> for MediaPayload {
    fn from(file: &MediaFile) -> Self {
        Self {
            id: file.id.clone(),
            file_name: file.file_name.clone(),
            kind: file.kind.as_str().to_string(),
            size_bytes: file.size_bytes,
            url: file.url.clone(),
        }
    }
}

/// One offer rule in wire shape: a flat record with only the fields of
/// its own kind present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferPayload {
    pub id: OfferId,
    #[serde(rename = "type")]
    pub offer_type: String,
    pub is_active: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_day_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_min_qty: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_discount: Option<f64>,
}

impl From<&OfferRule> for OfferPayload {
    fn from(rule: &OfferRule) -> Self {
        let mut payload = Self {
            id: rule.id.clone(),
            offer_type: rule.terms.kind().as_str().to_string(),
            is_active: rule.is_active,
            description: rule.terms.describe(),
            buy_quantity: None,
            get_quantity: None,
            special_day_name: None,
            start_time: None,
            end_time: None,
            discount_percent: None,
            bundle_min_qty: None,
            bundle_discount: None,
        };
        match &rule.terms {
            OfferTerms::BuyXGetY {
                buy_quantity,
                get_quantity,
            } => {
                payload.buy_quantity = Some(*buy_quantity);
                payload.get_quantity = Some(*get_quantity);
            }
            OfferTerms::SpecialDay {
                day_name,
                discount_percent,
            } => {
                payload.special_day_name = Some(day_name.clone());
                payload.discount_percent = Some(*discount_percent);
            }
            OfferTerms::Hourly {
                start_time,
                end_time,
                discount_percent,
            } => {
                payload.start_time = Some(start_time.clone());
                payload.end_time = Some(end_time.clone());
                payload.discount_percent = Some(*discount_percent);
            }
            OfferTerms::Bundle {
                min_quantity,
                discount_percent,
            } => {
                payload.bundle_min_qty = Some(*min_quantity);
                payload.bundle_discount = Some(*discount_percent);
            }
        }
        payload
    }
}

/// The full flattened submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    // Identity & variants
    pub category_id: Option<CategoryId>,
    pub sub_category_id: Option<SubCategoryId>,
    pub product_type: String,
    pub title: String,
    pub brand: String,
    pub model_number: String,
    pub short_description: String,
    pub base_stock: i64,
    pub size_applicable: bool,
    pub size_variants: Vec<SizeVariant>,
    pub color_applicable: bool,
    pub color_variants: Vec<ColorVariant>,
    // Media
    pub images: Vec<MediaPayload>,
    pub videos: Vec<MediaPayload>,
    // Content
    pub highlights: Vec<String>,
    pub full_description: String,
    pub specifications: Vec<Specification>,
    pub seller_notes: Vec<String>,
    // Pricing & geography
    pub primary_country: String,
    pub gst_percent: f64,
    pub mrp: f64,
    pub selling_price: f64,
    pub stock_quantity: i64,
    pub platform_fee_percent: f64,
    pub commission_percent: f64,
    pub delivery_countries: Vec<DeliveryCountryPayload>,
    pub pricing: PricingBreakdown,
    // Logistics & policy
    pub weight_kg: f64,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub ship_type: String,
    pub courier_partner: Option<String>,
    pub manufacturer_name: String,
    pub manufacturer_address: String,
    pub packing_details: String,
    pub cancellation_window_days: i64,
    pub return_window_days: i64,
    pub volumetric_weight: f64,
    pub chargeable_weight: f64,
    // Offers
    pub offers: Vec<OfferPayload>,
    // Submission metadata
    pub approval_status: ApprovalStatus,
    pub created_at: i64,
}

impl SubmitPayload {
    /// Flatten a draft into the wire shape. No validation happens here.
    pub fn from_draft(draft: &ProductDraft, approval_status: ApprovalStatus) -> Self {
        Self {
            category_id: draft.identity.category_id.clone(),
            sub_category_id: draft.identity.sub_category_id.clone(),
            product_type: draft.identity.product_type.clone(),
            title: draft.identity.title.clone(),
            brand: draft.identity.brand.clone(),
            model_number: draft.identity.model_number.clone(),
            short_description: draft.identity.short_description.clone(),
            base_stock: draft.identity.base_stock,
            size_applicable: draft.identity.size_applicable,
            size_variants: draft.identity.size_variants.clone(),
            color_applicable: draft.identity.color_applicable,
            color_variants: draft.identity.color_variants.clone(),
            images: draft.media.images.iter().map(MediaPayload::from).collect(),
            videos: draft.media.videos.iter().map(MediaPayload::from).collect(),
            highlights: draft.content.highlights.clone(),
            full_description: draft.content.full_description.clone(),
            specifications: draft.content.specifications.clone(),
            seller_notes: draft.content.seller_notes.clone(),
            primary_country: draft.pricing.primary_country.clone(),
            gst_percent: draft.pricing.gst_percent,
            mrp: draft.pricing.mrp,
            selling_price: draft.pricing.selling_price,
            stock_quantity: draft.pricing.stock_quantity,
            platform_fee_percent: draft.pricing.platform_fee_percent,
            commission_percent: draft.pricing.commission_percent,
            delivery_countries: draft
                .pricing
                .delivery_countries
                .iter()
                .map(DeliveryCountryPayload::from)
                .collect(),
            pricing: draft.pricing.breakdown(),
            weight_kg: draft.logistics.weight_kg,
            length_cm: draft.logistics.length_cm,
            width_cm: draft.logistics.width_cm,
            height_cm: draft.logistics.height_cm,
            ship_type: draft.logistics.ship_type.as_str().to_string(),
            courier_partner: draft.logistics.courier_partner.clone(),
            manufacturer_name: draft.logistics.manufacturer_name.clone(),
            manufacturer_address: draft.logistics.manufacturer_address.clone(),
            packing_details: draft.logistics.packing_details.clone(),
            cancellation_window_days: draft.logistics.cancellation_window_days,
            return_window_days: draft.logistics.return_window_days,
            volumetric_weight: draft.logistics.volumetric_weight(),
            chargeable_weight: draft.logistics.chargeable_weight(),
            offers: draft.offers.offers.iter().map(OfferPayload::from).collect(),
            approval_status,
            created_at: draft.created_at,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformConfig;
    use crate::draft::{IdentityPatch, LogisticsPatch, PricingPatch};
    use crate::ids::CategoryId;

    fn known_draft() -> ProductDraft {
        let mut draft = ProductDraft::new(&PlatformConfig::default());
        draft.apply_identity(IdentityPatch {
            category_id: Some(CategoryId::new("cat-fashion")),
            title: Some("Trail Running Shoes".to_string()),
            brand: Some("Vendora Basics".to_string()),
            ..Default::default()
        });
        draft.apply_pricing(
            PricingPatch {
                primary_country: Some("IN".to_string()),
                mrp: Some(1000.0),
                selling_price: Some(750.0),
                stock_quantity: Some(40),
                ..Default::default()
            },
            18.0,
        );
        draft.apply_logistics(LogisticsPatch {
            weight_kg: Some(2.0),
            length_cm: Some(30.0),
            width_cm: Some(30.0),
            height_cm: Some(30.0),
            ..Default::default()
        });
        draft
    }

    #[test]
    fn test_payload_mirrors_draft_fields() {
        let draft = known_draft();
        let payload = SubmitPayload::from_draft(&draft, ApprovalStatus::Pending);

        assert_eq!(payload.title, "Trail Running Shoes");
        assert_eq!(payload.brand, "Vendora Basics");
        assert_eq!(payload.primary_country, "IN");
        assert_eq!(payload.mrp, 1000.0);
        assert_eq!(payload.selling_price, 750.0);
        assert_eq!(payload.stock_quantity, 40);
        assert_eq!(payload.weight_kg, 2.0);
        assert_eq!(payload.ship_type, "platform");
        assert_eq!(payload.approval_status, ApprovalStatus::Pending);
    }

    #[test]
    fn test_payload_embeds_derived_figures() {
        let draft = known_draft();
        let payload = SubmitPayload::from_draft(&draft, ApprovalStatus::Pending);

        assert_eq!(payload.pricing.discount_percent, 25.0);
        assert!((payload.pricing.seller_earnings - 555.0).abs() < 1e-9);
        assert_eq!(payload.volumetric_weight, 5.4);
        assert_eq!(payload.chargeable_weight, 5.4);
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let draft = known_draft();
        let payload = SubmitPayload::from_draft(&draft, ApprovalStatus::Draft);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["sellingPrice"], 750.0);
        assert_eq!(json["approvalStatus"], "draft");
        assert_eq!(json["shipType"], "platform");
        assert!(json["pricing"]["sellerEarnings"].is_number());
        assert!(json.get("selling_price").is_none());
    }

    #[test]
    fn test_payload_renders_pretty_json() {
        let draft = known_draft();
        let payload = SubmitPayload::from_draft(&draft, ApprovalStatus::Pending);

        let json = payload.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n"));
        assert!(json.contains("\"sellingPrice\": 750.0"));
    }

    #[test]
    fn test_offer_payload_carries_only_its_kind() {
        let rule = OfferRule::new(
            OfferId::new("offer-1"),
            OfferTerms::Hourly {
                start_time: "18:00".to_string(),
                end_time: "21:00".to_string(),
                discount_percent: 10.0,
            },
        );
        let payload = OfferPayload::from(&rule);
        assert_eq!(payload.offer_type, "hourly");
        assert_eq!(payload.description, "18:00 - 21:00: 10% OFF");
        assert_eq!(payload.start_time.as_deref(), Some("18:00"));
        assert!(payload.buy_quantity.is_none());
        assert!(payload.bundle_min_qty.is_none());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "hourly");
        assert!(json.get("buyQuantity").is_none());
    }
}
