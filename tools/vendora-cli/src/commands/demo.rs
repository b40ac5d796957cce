//! Run a scripted listing end to end.

use anyhow::{bail, Context as _, Result};
use chrono::DateTime;
use vendora_listing::prelude::*;

use super::DemoArgs;
use crate::context::Context;
use crate::output::{format_bytes, status_badge};

/// Run the demo command.
pub fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Vendora Listing Demo");

    let mut wizard = ListingWizard::new(ctx.config.platform.clone());

    // Wire up the in-memory collaborators
    let catalog = MemoryCatalog::new();
    let categories = catalog
        .fetch_categories()
        .context("Failed to fetch categories")?;
    ctx.output
        .debug(&format!("Loaded {} categories", categories.len()));

    wizard
        .load_countries(&MemoryCountries::default())
        .context("Failed to load countries")?;
    ctx.output
        .debug(&format!("Loaded {} countries", wizard.countries().len()));

    // Step 1: identity and variants
    ctx.output.step(1, 6, "Identity & Variants");
    fill_identity(&mut wizard);
    ctx.output.kv("Title", &wizard.draft().identity.title);
    ctx.output.kv("Brand", &wizard.draft().identity.brand);
    ctx.output.kv("Model", &wizard.draft().identity.model_number);
    ctx.output.kv(
        "Variants",
        &format!(
            "{} sizes, {} colors, {} units in stock",
            wizard.draft().identity.size_variants.len(),
            wizard.draft().identity.color_variants.len(),
            wizard.draft().identity.total_stock()
        ),
    );
    advance(&mut wizard)?;

    // Step 2: media
    ctx.output.step(2, 6, "Media");
    fill_media(&mut wizard)?;

    let spinner = ctx.output.spinner("Uploading media...");
    let uploaded = wizard
        .upload_pending_media(&MemoryUploads::new())
        .context("Media upload failed")?;
    spinner.finish_and_clear();

    ctx.output.success(&format!(
        "Uploaded {} files ({})",
        uploaded,
        format_bytes(wizard.draft().media.total_bytes())
    ));
    ctx.output.kv(
        "Gallery",
        &format!(
            "{} images, {} videos",
            wizard.draft().media.image_count(),
            wizard.draft().media.video_count()
        ),
    );
    advance(&mut wizard)?;

    // Step 3: content
    ctx.output.step(3, 6, "Content");
    fill_content(&mut wizard);
    ctx.output.kv(
        "Highlights",
        &wizard.draft().content.highlights.len().to_string(),
    );
    ctx.output.kv(
        "Specifications",
        &wizard.draft().content.specifications.len().to_string(),
    );
    advance(&mut wizard)?;

    // Step 4: pricing and geography
    ctx.output.step(4, 6, "Pricing & Geography");
    fill_pricing(&mut wizard)?;

    let pricing = &wizard.draft().pricing;
    ctx.output.kv("Primary country", &pricing.primary_country);
    ctx.output.kv("MRP", &format!("{:.2}", pricing.mrp));
    ctx.output
        .kv("Selling price", &format!("{:.2}", pricing.selling_price));
    ctx.output.kv("GST rate", &format!("{}%", pricing.gst_percent));

    let breakdown = wizard.pricing_breakdown();
    ctx.output
        .kv("Discount", &format!("{}%", breakdown.discount_percent));
    ctx.output.kv(
        "Platform fee",
        &format!("{:.2}", breakdown.platform_fee_amount),
    );
    ctx.output
        .kv("Commission", &format!("{:.2}", breakdown.commission_amount));
    ctx.output.kv("GST", &format!("{:.2}", breakdown.gst_amount));
    ctx.output.kv(
        "Seller earnings",
        &format!("{:.2}", breakdown.seller_earnings),
    );

    for country in &wizard.draft().pricing.delivery_countries {
        ctx.output.list_item(&format!(
            "Ships to {} ({}): charge {:.2}, min qty {}",
            country.country_name, country.country_code, country.delivery_charge, country.min_order_qty
        ));
    }
    advance(&mut wizard)?;

    // Step 5: logistics and policy
    ctx.output.step(5, 6, "Logistics & Policy");
    fill_logistics(&mut wizard);
    ctx.output.kv(
        "Package weight",
        &format!("{} kg", wizard.draft().logistics.weight_kg),
    );
    ctx.output.kv(
        "Volumetric weight",
        &format!("{} kg", wizard.volumetric_weight()),
    );
    ctx.output.kv(
        "Chargeable weight",
        &format!("{} kg", wizard.chargeable_weight()),
    );
    ctx.output.kv(
        "Shipping",
        &format!(
            "{} via {}",
            wizard.draft().logistics.ship_type,
            wizard
                .draft()
                .logistics
                .courier_partner
                .as_deref()
                .unwrap_or("platform courier")
        ),
    );
    advance(&mut wizard)?;

    // Step 6: offers
    ctx.output.step(6, 6, "Offers");
    fill_offers(&mut wizard);
    for offer in &wizard.draft().offers.offers {
        let state = if offer.is_active { "active" } else { "inactive" };
        ctx.output
            .list_item(&format!("{} [{}]", offer.describe(), status_badge(state)));
    }

    // Submission
    ctx.output.info("");

    if args.as_draft {
        let payload = wizard.draft_data();

        let drafts = MemoryDrafts::new();
        let spinner = ctx.output.spinner("Saving draft...");
        wizard.save_draft(&drafts).context("Draft save failed")?;
        spinner.finish_and_clear();

        ctx.output.success("Draft saved");
        ctx.output
            .kv("Status", &status_badge(payload.approval_status.as_str()));
        ctx.output.kv("Title", &payload.title);

        if ctx.output.is_json() {
            ctx.output.json(&payload);
        }
        return Ok(());
    }

    let gateway = MemoryGateway::new();

    if args.fail_submit {
        gateway.fail_next();
        ctx.output.warn("Simulating a product-service outage");

        match wizard.submit(&gateway) {
            Ok(_) => bail!("Outage simulation produced a successful submission"),
            Err(e) => ctx.output.warn(&format!("Submission failed: {}", e)),
        }

        // The draft survives a failed submission intact
        ctx.output.info(&format!(
            "Draft retained: '{}' is still ready to submit",
            wizard.draft().identity.title
        ));
        ctx.output.info("Retrying submission");
    }

    let spinner = ctx.output.spinner("Submitting listing...");
    let product = wizard.submit(&gateway).context("Submission failed")?;
    spinner.finish_and_clear();

    ctx.output.success("Listing submitted for approval!");
    ctx.output.kv("Product", product.id.as_str());
    ctx.output.kv("Title", &product.title);
    ctx.output
        .kv("Status", &status_badge(product.approval_status.as_str()));
    ctx.output.kv("Created", &format_created(product.created_at));
    ctx.output.info("");
    ctx.output
        .info("The wizard has been reset for the next listing.");

    if ctx.output.is_json() {
        ctx.output.json(&product);
    }

    Ok(())
}

/// Fill every step of the wizard with the sample trail-shoe listing.
pub(crate) fn fill_reference_listing(wizard: &mut ListingWizard) -> Result<()> {
    fill_identity(wizard);
    fill_media(wizard)?;
    fill_content(wizard);
    fill_pricing(wizard)?;
    fill_logistics(wizard);
    fill_offers(wizard);
    Ok(())
}

fn fill_identity(wizard: &mut ListingWizard) {
    wizard.update_identity(IdentityPatch {
        category_id: Some(CategoryId::new("cat-fashion")),
        sub_category_id: Some(SubCategoryId::new("cat-fashion-footwear")),
        product_type: Some("Running Shoes".to_string()),
        title: Some("Trailblazer Running Shoes".to_string()),
        brand: Some("Vendora Athletics".to_string()),
        model_number: Some("TRX2024A".to_string()),
        short_description: Some(
            "Lightweight trail running shoes with a breathable mesh upper".to_string(),
        ),
        base_stock: Some(120),
        size_applicable: Some(true),
        color_applicable: Some(true),
    });

    wizard.add_size_variant("UK 8", 1, 40, 2999.0);
    wizard.add_size_variant("UK 9", 1, 35, 2999.0);
    wizard.add_color_variant("Black", "trx-blk", 2999.0, 40);
    wizard.add_color_variant("Crimson Red", "trx-red", 2999.0, 35);
}

fn fill_media(wizard: &mut ListingWizard) -> Result<()> {
    for n in 1..=6u64 {
        wizard.add_image(format!("product-{}.jpg", n), n * 900_000)?;
    }
    wizard.add_video("product-walkthrough.mp4", 24 * 1024 * 1024)?;
    Ok(())
}

fn fill_content(wizard: &mut ListingWizard) {
    wizard.update_content(ContentPatch {
        full_description: Some(
            "Built for uneven terrain, the Trailblazer pairs a rock plate with \
             a high-traction outsole. The mesh upper drains fast and dries \
             faster, so wet crossings never slow you down."
                .to_string(),
        ),
    });

    wizard.add_highlight("Rock plate protects against sharp trail debris");
    wizard.add_highlight("Quick-dry mesh upper");
    wizard.add_specification("Weight", "290 g per shoe");
    wizard.add_specification("Drop", "6 mm");
    wizard.add_seller_note("Runs half a size small; consider sizing up");
}

fn fill_pricing(wizard: &mut ListingWizard) -> Result<()> {
    wizard.update_pricing(PricingPatch {
        primary_country: Some("IN".to_string()),
        mrp: Some(1000.0),
        selling_price: Some(750.0),
        stock_quantity: Some(75),
        ..Default::default()
    });

    wizard.add_delivery_country("IN", 0.0, 1)?;
    wizard.add_delivery_country("US", 499.0, 2)?;
    Ok(())
}

fn fill_logistics(wizard: &mut ListingWizard) {
    wizard.update_logistics(LogisticsPatch {
        weight_kg: Some(0.9),
        length_cm: Some(30.0),
        width_cm: Some(20.0),
        height_cm: Some(15.0),
        ship_type: Some(ShipType::SelfShip),
        courier_partner: Some("BlueDart".to_string()),
        manufacturer_name: Some("Vendora Athletics Pvt Ltd".to_string()),
        manufacturer_address: Some("Plot 14, Industrial Area, Pune 411001".to_string()),
        packing_details: Some("Shoe box inside a weatherproof courier bag".to_string()),
        cancellation_window_days: Some(2),
        return_window_days: Some(7),
    });
}

fn fill_offers(wizard: &mut ListingWizard) {
    wizard.add_offer(OfferTerms::BuyXGetY {
        buy_quantity: 2,
        get_quantity: 1,
    });
    wizard.add_offer(OfferTerms::SpecialDay {
        day_name: "Diwali".to_string(),
        discount_percent: 15.0,
    });
}

fn advance(wizard: &mut ListingWizard) -> Result<()> {
    let step = wizard.current_step();
    if !wizard.go_to_next_step() {
        bail!(
            "Step {} ({}) is incomplete: {}",
            step.number(),
            step.display_name(),
            wizard.missing_for_step(step).join(", ")
        );
    }
    Ok(())
}

fn format_created(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ts.to_string())
}
