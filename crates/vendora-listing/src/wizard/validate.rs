//! Per-step validation predicates.
//!
//! Pure functions over the draft. Nothing here mutates or raises; the
//! wizard consults these to gate forward navigation and submission.

use crate::draft::{
    ProductDraft, ShipType, MAX_IMAGES, MAX_SHORT_DESCRIPTION_LEN, MAX_SPECIFICATIONS,
    MAX_TITLE_LEN, MIN_IMAGES,
};

use super::step::WizardStep;

/// Whether every requirement for a step is satisfied.
pub fn is_step_valid(draft: &ProductDraft, step: WizardStep) -> bool {
    missing_for_step(draft, step).is_empty()
}

/// The unsatisfied requirements for a step, by name. Empty means valid.
pub fn missing_for_step(draft: &ProductDraft, step: WizardStep) -> Vec<&'static str> {
    let mut missing = Vec::new();
    match step {
        WizardStep::Identity => {
            let identity = &draft.identity;
            if identity.category_id.is_none() {
                missing.push("category");
            }
            if identity.title.trim().is_empty() {
                missing.push("title");
            } else if identity.title.chars().count() > MAX_TITLE_LEN {
                missing.push("title within 250 characters");
            }
            if identity.brand.trim().is_empty() {
                missing.push("brand");
            }
            if identity.short_description.trim().is_empty() {
                missing.push("short description");
            } else if identity.short_description.chars().count() > MAX_SHORT_DESCRIPTION_LEN {
                missing.push("short description within 350 characters");
            }
            if !identity.model_number_ok() {
                missing.push("model number (8-20 alphanumeric)");
            }
            if identity.size_applicable && identity.size_variants.is_empty() {
                missing.push("size variants");
            }
            if identity.color_applicable && identity.color_variants.is_empty() {
                missing.push("color variants");
            }
        }
        WizardStep::Media => {
            let count = draft.media.image_count();
            if !(MIN_IMAGES..=MAX_IMAGES).contains(&count) {
                missing.push("5-10 product images");
            }
        }
        WizardStep::Content => {
            if draft.content.full_description.trim().is_empty() {
                missing.push("full description");
            }
            if draft.content.specifications.len() > MAX_SPECIFICATIONS {
                missing.push("50 specifications at most");
            }
        }
        WizardStep::Pricing => {
            let pricing = &draft.pricing;
            if pricing.primary_country.is_empty() {
                missing.push("primary country");
            }
            if pricing.mrp <= 0.0 {
                missing.push("MRP");
            }
            if pricing.selling_price <= 0.0 || pricing.selling_price > pricing.mrp {
                missing.push("selling price");
            }
            if pricing.stock_quantity < 0 {
                missing.push("stock quantity");
            }
            if !(0.0..=100.0).contains(&pricing.gst_percent) {
                missing.push("GST rate");
            }
        }
        WizardStep::Logistics => {
            let logistics = &draft.logistics;
            if logistics.weight_kg <= 0.0 {
                missing.push("package weight");
            }
            if logistics.ship_type == ShipType::SelfShip && !logistics.courier_ok() {
                missing.push("courier partner");
            }
        }
        // Offers are advisory; the step never blocks
        WizardStep::Offers => {}
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformConfig;
    use crate::draft::{IdentityPatch, LogisticsPatch, PricingPatch};
    use crate::ids::{CategoryId, MediaId};

    fn draft() -> ProductDraft {
        ProductDraft::new(&PlatformConfig::default())
    }

    fn fill_identity(draft: &mut ProductDraft) {
        draft.apply_identity(IdentityPatch {
            category_id: Some(CategoryId::new("cat-fashion")),
            title: Some("Trail Running Shoes".to_string()),
            brand: Some("Vendora Basics".to_string()),
            short_description: Some("Lightweight trail shoes".to_string()),
            ..Default::default()
        });
    }

    #[test]
    fn test_empty_identity_lists_requirements() {
        let draft = draft();
        let missing = missing_for_step(&draft, WizardStep::Identity);
        assert!(missing.contains(&"category"));
        assert!(missing.contains(&"title"));
        assert!(missing.contains(&"brand"));
        assert!(missing.contains(&"short description"));
        assert!(!is_step_valid(&draft, WizardStep::Identity));
    }

    #[test]
    fn test_identity_valid_once_filled() {
        let mut draft = draft();
        fill_identity(&mut draft);
        assert!(is_step_valid(&draft, WizardStep::Identity));
    }

    #[test]
    fn test_title_over_cap_fails() {
        let mut draft = draft();
        fill_identity(&mut draft);
        draft.apply_identity(IdentityPatch {
            title: Some("x".repeat(MAX_TITLE_LEN + 1)),
            ..Default::default()
        });
        assert!(!is_step_valid(&draft, WizardStep::Identity));
    }

    #[test]
    fn test_bad_model_number_fails() {
        let mut draft = draft();
        fill_identity(&mut draft);
        draft.apply_identity(IdentityPatch {
            model_number: Some("abc".to_string()),
            ..Default::default()
        });
        assert!(!is_step_valid(&draft, WizardStep::Identity));

        draft.apply_identity(IdentityPatch {
            model_number: Some("MDL12345".to_string()),
            ..Default::default()
        });
        assert!(is_step_valid(&draft, WizardStep::Identity));
    }

    #[test]
    fn test_size_toggle_requires_variants() {
        let mut draft = draft();
        fill_identity(&mut draft);
        draft.apply_identity(IdentityPatch {
            size_applicable: Some(true),
            ..Default::default()
        });
        assert!(!is_step_valid(&draft, WizardStep::Identity));

        draft
            .identity
            .add_size_variant(crate::ids::VariantId::new("var-1"), "M", 1, 10, 499.0);
        assert!(is_step_valid(&draft, WizardStep::Identity));
    }

    #[test]
    fn test_media_needs_minimum_images() {
        let mut draft = draft();
        assert!(!is_step_valid(&draft, WizardStep::Media));

        for n in 0..5 {
            draft
                .media
                .add_image(MediaId::new(format!("img-{}", n)), format!("p{}.jpg", n), 1024)
                .unwrap();
        }
        assert!(is_step_valid(&draft, WizardStep::Media));
    }

    #[test]
    fn test_content_needs_description() {
        let mut draft = draft();
        assert!(!is_step_valid(&draft, WizardStep::Content));
        draft.content.full_description = "A long form description.".to_string();
        assert!(is_step_valid(&draft, WizardStep::Content));
    }

    #[test]
    fn test_pricing_requirements() {
        let mut draft = draft();
        let missing = missing_for_step(&draft, WizardStep::Pricing);
        assert!(missing.contains(&"primary country"));
        assert!(missing.contains(&"MRP"));
        assert!(missing.contains(&"selling price"));

        draft.apply_pricing(
            PricingPatch {
                primary_country: Some("IN".to_string()),
                mrp: Some(1000.0),
                selling_price: Some(750.0),
                ..Default::default()
            },
            18.0,
        );
        assert!(is_step_valid(&draft, WizardStep::Pricing));
    }

    #[test]
    fn test_logistics_requirements() {
        let mut draft = draft();
        assert!(!is_step_valid(&draft, WizardStep::Logistics));

        draft.apply_logistics(LogisticsPatch {
            weight_kg: Some(2.0),
            ..Default::default()
        });
        assert!(is_step_valid(&draft, WizardStep::Logistics));

        draft.apply_logistics(LogisticsPatch {
            ship_type: Some(ShipType::SelfShip),
            ..Default::default()
        });
        assert_eq!(
            missing_for_step(&draft, WizardStep::Logistics),
            vec!["courier partner"]
        );

        draft.apply_logistics(LogisticsPatch {
            courier_partner: Some("BlueDart".to_string()),
            ..Default::default()
        });
        assert!(is_step_valid(&draft, WizardStep::Logistics));
    }

    #[test]
    fn test_offers_never_block() {
        let draft = draft();
        assert!(is_step_valid(&draft, WizardStep::Offers));
        assert!(missing_for_step(&draft, WizardStep::Offers).is_empty());
    }
}
