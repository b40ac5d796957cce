//! Interactive listing wizard.

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input, Select};
use vendora_listing::prelude::*;

use super::WizardArgs;
use crate::context::Context;
use crate::output::{format_bytes, status_badge};

#[derive(Clone, Copy)]
enum Action {
    Next,
    Back,
    Save,
    Submit,
    Discard,
}

/// Run the wizard command.
pub fn run(args: WizardArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Vendora Listing Wizard");

    let mut wizard = ListingWizard::new(ctx.config.platform.clone());

    // Wire up the in-memory collaborators
    let catalog = MemoryCatalog::new();
    let categories = catalog
        .fetch_categories()
        .context("Failed to fetch categories")?;
    wizard
        .load_countries(&MemoryCountries::default())
        .context("Failed to load countries")?;

    let gateway = MemoryGateway::new();
    let drafts = MemoryDrafts::new();
    let uploads = MemoryUploads::new();

    if args.prefill {
        super::demo::fill_reference_listing(&mut wizard)?;
        ctx.output
            .info("Prefilled with a sample listing; review each step before submitting.");
    }

    loop {
        let step = wizard.current_step();
        ctx.output.header(&format!(
            "Step {}/6: {} ({}% through)",
            step.number(),
            step.display_name(),
            wizard.progress_percent()
        ));

        match step {
            WizardStep::Identity => edit_identity(&mut wizard, &categories, ctx)?,
            WizardStep::Media => edit_media(&mut wizard, &uploads, ctx)?,
            WizardStep::Content => edit_content(&mut wizard, ctx)?,
            WizardStep::Pricing => edit_pricing(&mut wizard, ctx)?,
            WizardStep::Logistics => edit_logistics(&mut wizard, ctx)?,
            WizardStep::Offers => edit_offers(&mut wizard, ctx)?,
        }

        let missing = wizard.missing_for_step(step);
        if !missing.is_empty() {
            ctx.output
                .warn(&format!("Still required: {}", missing.join(", ")));
        }

        match next_action(&wizard)? {
            Action::Next => {
                if !wizard.go_to_next_step() {
                    ctx.output
                        .warn("Complete the required fields before moving on");
                }
            }
            Action::Back => {
                wizard.go_to_previous_step();
            }
            Action::Save => {
                wizard.save_draft(&drafts).context("Draft save failed")?;
                ctx.output.success("Draft saved");
                if ctx.output.is_json() {
                    ctx.output.json(&wizard.draft_data());
                }

                if Confirm::new()
                    .with_prompt("Exit the wizard?")
                    .default(true)
                    .interact()?
                {
                    break;
                }
            }
            Action::Submit => {
                let payload = wizard.submit_data();
                match wizard.submit(&gateway) {
                    Ok(product) => {
                        ctx.output.success("Listing submitted for approval!");
                        ctx.output.kv("Product", product.id.as_str());
                        ctx.output.kv("Title", &product.title);
                        ctx.output
                            .kv("Status", &status_badge(product.approval_status.as_str()));
                        if ctx.output.is_json() {
                            ctx.output.json(&payload);
                        }
                        break;
                    }
                    Err(ListingError::IncompleteStep { step, missing }) => {
                        ctx.output
                            .warn(&format!("Step {} is incomplete: {}", step, missing));
                        if let Some(target) = WizardStep::from_number(step) {
                            wizard.set_current_step(target);
                        }
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Action::Discard => {
                if Confirm::new()
                    .with_prompt("Discard this draft?")
                    .default(false)
                    .interact()?
                {
                    wizard.reset_form();
                    ctx.output.warn("Draft discarded");
                    break;
                }
            }
        }
    }

    Ok(())
}

fn next_action(wizard: &ListingWizard) -> Result<Action> {
    let mut items: Vec<&str> = Vec::new();
    let mut actions: Vec<Action> = Vec::new();

    if wizard.current_step().next().is_some() {
        items.push("Next step");
        actions.push(Action::Next);
    }
    if wizard.current_step().previous().is_some() {
        items.push("Previous step");
        actions.push(Action::Back);
    }
    items.push("Save draft");
    actions.push(Action::Save);
    items.push("Submit listing");
    actions.push(Action::Submit);
    items.push("Discard");
    actions.push(Action::Discard);

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

fn edit_identity(
    wizard: &mut ListingWizard,
    categories: &[Category],
    ctx: &Context,
) -> Result<()> {
    let identity = wizard.draft().identity.clone();

    // Category and sub-category
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let current = categories
        .iter()
        .position(|c| Some(&c.id) == identity.category_id.as_ref())
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Category")
        .items(&names)
        .default(current)
        .interact()?;
    let category = &categories[picked];

    let sub_category_id = if category.sub_categories.is_empty() {
        None
    } else {
        let sub_names: Vec<&str> = category
            .sub_categories
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let sub_current = category
            .sub_categories
            .iter()
            .position(|s| Some(&s.id) == identity.sub_category_id.as_ref())
            .unwrap_or(0);
        let sub_picked = Select::new()
            .with_prompt("Sub-category")
            .items(&sub_names)
            .default(sub_current)
            .interact()?;
        Some(category.sub_categories[sub_picked].id.clone())
    };

    let product_type: String = Input::new()
        .with_prompt("Product type")
        .default(identity.product_type.clone())
        .interact_text()?;
    let title: String = Input::new()
        .with_prompt("Title")
        .default(identity.title.clone())
        .interact_text()?;
    let brand: String = Input::new()
        .with_prompt("Brand")
        .default(identity.brand.clone())
        .interact_text()?;
    let model_number: String = Input::new()
        .with_prompt("Model number")
        .default(identity.model_number.clone())
        .interact_text()?;
    let short_description: String = Input::new()
        .with_prompt("Short description")
        .default(identity.short_description.clone())
        .interact_text()?;
    let base_stock: i64 = Input::new()
        .with_prompt("Base stock")
        .default(identity.base_stock)
        .interact_text()?;
    let size_applicable = Confirm::new()
        .with_prompt("Does this product come in sizes?")
        .default(identity.size_applicable)
        .interact()?;
    let color_applicable = Confirm::new()
        .with_prompt("Does this product come in colors?")
        .default(identity.color_applicable)
        .interact()?;

    wizard.update_identity(IdentityPatch {
        category_id: Some(category.id.clone()),
        sub_category_id,
        product_type: Some(product_type),
        title: Some(title),
        brand: Some(brand),
        model_number: Some(model_number),
        short_description: Some(short_description),
        base_stock: Some(base_stock),
        size_applicable: Some(size_applicable),
        color_applicable: Some(color_applicable),
    });

    if !wizard.draft().identity.model_number_ok() {
        ctx.output
            .warn("Model number must be 8-20 alphanumeric characters");
    }

    if size_applicable {
        for variant in &wizard.draft().identity.size_variants {
            ctx.output.list_item(&format!(
                "Size {}: {} per order, {} in stock @ {:.2}",
                variant.size, variant.quantity, variant.stock, variant.price
            ));
        }
        while Confirm::new()
            .with_prompt("Add a size variant?")
            .default(false)
            .interact()?
        {
            let size: String = Input::new()
                .with_prompt("Size label (e.g. UK 9)")
                .interact_text()?;
            let quantity: i64 = Input::new()
                .with_prompt("Units per order")
                .default(1)
                .interact_text()?;
            let stock: i64 = Input::new()
                .with_prompt("Units in stock")
                .default(10)
                .interact_text()?;
            let price: f64 = Input::new().with_prompt("Price").interact_text()?;

            if wizard.add_size_variant(size, quantity, stock, price).is_none() {
                ctx.output
                    .warn("Rejected: size must be non-blank and stock positive");
            }
        }
    }

    if color_applicable {
        for variant in &wizard.draft().identity.color_variants {
            ctx.output.list_item(&format!(
                "Color {} ({}): {} in stock @ {:.2}",
                variant.color, variant.sku, variant.stock, variant.price
            ));
        }
        while Confirm::new()
            .with_prompt("Add a color variant?")
            .default(false)
            .interact()?
        {
            let color: String = Input::new().with_prompt("Color").interact_text()?;
            let sku: String = Input::new().with_prompt("SKU").interact_text()?;
            let price: f64 = Input::new().with_prompt("Price").interact_text()?;
            let stock: i64 = Input::new()
                .with_prompt("Units in stock")
                .default(10)
                .interact_text()?;

            if wizard.add_color_variant(color, sku, price, stock).is_none() {
                ctx.output
                    .warn("Rejected: color and SKU must be non-blank, SKU unique");
            }
        }
    }

    Ok(())
}

fn edit_media(wizard: &mut ListingWizard, uploads: &MemoryUploads, ctx: &Context) -> Result<()> {
    list_media(wizard, ctx);

    while Confirm::new()
        .with_prompt("Add a media file?")
        .default(false)
        .interact()?
    {
        let file_name: String = Input::new()
            .with_prompt("File name (e.g. front.jpg, tour.mp4)")
            .interact_text()?;
        let size_mb: f64 = Input::new()
            .with_prompt("File size in MB")
            .default(1.0)
            .interact_text()?;
        let size_bytes = (size_mb * 1024.0 * 1024.0) as u64;

        let result = if MediaKind::from_file_name(&file_name) == Some(MediaKind::Video) {
            wizard.add_video(file_name.as_str(), size_bytes)
        } else {
            wizard.add_image(file_name.as_str(), size_bytes)
        };

        match result {
            Ok(_) => ctx.output.success(&format!("Added {}", file_name)),
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }

    let files: Vec<(MediaId, String)> = wizard
        .draft()
        .media
        .images
        .iter()
        .chain(wizard.draft().media.videos.iter())
        .map(|f| (f.id.clone(), f.file_name.clone()))
        .collect();

    if !files.is_empty()
        && Confirm::new()
            .with_prompt("Remove a file?")
            .default(false)
            .interact()?
    {
        let names: Vec<&str> = files.iter().map(|(_, name)| name.as_str()).collect();
        let picked = Select::new()
            .with_prompt("File to remove")
            .items(&names)
            .default(0)
            .interact()?;
        wizard.remove_media(&files[picked].0);
    }

    let pending = wizard.draft().media.pending().count();
    if pending > 0
        && Confirm::new()
            .with_prompt(format!("Upload {} pending file(s) now?", pending))
            .default(true)
            .interact()?
    {
        let spinner = ctx.output.spinner("Uploading media...");
        let uploaded = wizard
            .upload_pending_media(uploads)
            .context("Media upload failed")?;
        spinner.finish_and_clear();
        ctx.output
            .success(&format!("Uploaded {} file(s)", uploaded));
    }

    Ok(())
}

fn list_media(wizard: &ListingWizard, ctx: &Context) {
    let media = &wizard.draft().media;
    for file in media.images.iter().chain(media.videos.iter()) {
        let state = if file.url.is_some() { "uploaded" } else { "pending" };
        ctx.output.list_item(&format!(
            "{} ({}, {}) [{}]",
            file.file_name,
            file.kind.as_str(),
            format_bytes(file.size_bytes),
            status_badge(state)
        ));
    }
}

fn edit_content(wizard: &mut ListingWizard, ctx: &Context) -> Result<()> {
    let content = wizard.draft().content.clone();

    let full_description: String = Input::new()
        .with_prompt("Full description")
        .default(content.full_description.clone())
        .interact_text()?;
    wizard.update_content(ContentPatch {
        full_description: Some(full_description),
    });

    for highlight in &wizard.draft().content.highlights {
        ctx.output.list_item(highlight);
    }
    while Confirm::new()
        .with_prompt("Add a highlight?")
        .default(false)
        .interact()?
    {
        let text: String = Input::new().with_prompt("Highlight").interact_text()?;
        if !wizard.add_highlight(text) {
            ctx.output.warn("Blank highlights are ignored");
        }
    }

    for spec in &wizard.draft().content.specifications {
        ctx.output
            .list_item(&format!("{}: {}", spec.key, spec.value));
    }
    while Confirm::new()
        .with_prompt("Add a specification?")
        .default(false)
        .interact()?
    {
        let key: String = Input::new().with_prompt("Attribute").interact_text()?;
        let value: String = Input::new().with_prompt("Value").interact_text()?;
        if wizard.add_specification(key, value).is_none() {
            ctx.output
                .warn("Rejected: blank entries and rows past the 50-row cap are refused");
        }
    }

    while Confirm::new()
        .with_prompt("Add a seller note?")
        .default(false)
        .interact()?
    {
        let text: String = Input::new().with_prompt("Note").interact_text()?;
        if !wizard.add_seller_note(text) {
            ctx.output.warn("Blank notes are ignored");
        }
    }

    Ok(())
}

fn edit_pricing(wizard: &mut ListingWizard, ctx: &Context) -> Result<()> {
    let pricing = wizard.draft().pricing.clone();

    let labels: Vec<String> = wizard
        .countries()
        .iter()
        .map(|c| format!("{} - {}", c.code, c.name))
        .collect();
    let codes: Vec<String> = wizard.countries().iter().map(|c| c.code.clone()).collect();

    let seller_default = ctx.config.seller.country.to_uppercase();
    let current = codes
        .iter()
        .position(|c| *c == pricing.primary_country)
        .or_else(|| codes.iter().position(|c| *c == seller_default))
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt("Primary country")
        .items(&labels)
        .default(current)
        .interact()?;

    wizard.update_pricing(PricingPatch {
        primary_country: Some(codes[picked].clone()),
        ..Default::default()
    });
    ctx.output.kv(
        "GST rate",
        &format!("{}%", wizard.draft().pricing.gst_percent),
    );

    if Confirm::new()
        .with_prompt("Override the GST rate?")
        .default(false)
        .interact()?
    {
        let gst: f64 = Input::new()
            .with_prompt("GST rate (%)")
            .default(wizard.draft().pricing.gst_percent)
            .interact_text()?;
        wizard.update_pricing(PricingPatch {
            gst_percent: Some(gst),
            ..Default::default()
        });
    }

    let mrp: f64 = Input::new()
        .with_prompt("MRP")
        .default(pricing.mrp)
        .interact_text()?;
    let selling_price: f64 = Input::new()
        .with_prompt("Selling price")
        .default(pricing.selling_price)
        .interact_text()?;
    let stock_quantity: i64 = Input::new()
        .with_prompt("Stock quantity")
        .default(pricing.stock_quantity)
        .interact_text()?;

    wizard.update_pricing(PricingPatch {
        mrp: Some(mrp),
        selling_price: Some(selling_price),
        stock_quantity: Some(stock_quantity),
        ..Default::default()
    });

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
    while Confirm::new()
        .with_prompt("Add a delivery country?")
        .default(false)
        .interact()?
    {
        let picked = Select::new()
            .with_prompt("Country")
            .items(&labels)
            .default(0)
            .interact()?;
        let delivery_charge: f64 = Input::new()
            .with_prompt("Delivery charge")
            .default(0.0)
            .interact_text()?;
        let min_order_qty: i64 = Input::new()
            .with_prompt("Minimum order quantity")
            .default(1)
            .interact_text()?;

        match wizard.add_delivery_country(codes[picked].clone(), delivery_charge, min_order_qty) {
            Ok(_) => {}
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }

    Ok(())
}

fn edit_logistics(wizard: &mut ListingWizard, ctx: &Context) -> Result<()> {
    let logistics = wizard.draft().logistics.clone();

    let weight_kg: f64 = Input::new()
        .with_prompt("Package weight (kg)")
        .default(logistics.weight_kg)
        .interact_text()?;

    let mut patch = LogisticsPatch {
        weight_kg: Some(weight_kg),
        ..Default::default()
    };

    if Confirm::new()
        .with_prompt("Enter package dimensions?")
        .default(true)
        .interact()?
    {
        let length: f64 = Input::new()
            .with_prompt("Length (cm)")
            .default(logistics.length_cm.unwrap_or(0.0))
            .interact_text()?;
        let width: f64 = Input::new()
            .with_prompt("Width (cm)")
            .default(logistics.width_cm.unwrap_or(0.0))
            .interact_text()?;
        let height: f64 = Input::new()
            .with_prompt("Height (cm)")
            .default(logistics.height_cm.unwrap_or(0.0))
            .interact_text()?;
        patch.length_cm = Some(length);
        patch.width_cm = Some(width);
        patch.height_cm = Some(height);
    }

    let ship_items = ["Platform courier", "Self ship"];
    let ship_current = match logistics.ship_type {
        ShipType::Platform => 0,
        ShipType::SelfShip => 1,
    };
    let ship_picked = Select::new()
        .with_prompt("Shipping method")
        .items(&ship_items)
        .default(ship_current)
        .interact()?;
    let ship_type = if ship_picked == 1 {
        ShipType::SelfShip
    } else {
        ShipType::Platform
    };
    patch.ship_type = Some(ship_type);

    if ship_type == ShipType::SelfShip {
        let courier: String = Input::new()
            .with_prompt("Courier partner")
            .default(logistics.courier_partner.clone().unwrap_or_default())
            .interact_text()?;
        patch.courier_partner = Some(courier);
    }

    let manufacturer_name: String = Input::new()
        .with_prompt("Manufacturer name")
        .default(logistics.manufacturer_name.clone())
        .interact_text()?;
    let manufacturer_address: String = Input::new()
        .with_prompt("Manufacturer address")
        .default(logistics.manufacturer_address.clone())
        .interact_text()?;
    let packing_details: String = Input::new()
        .with_prompt("Packing details")
        .default(logistics.packing_details.clone())
        .interact_text()?;
    let cancellation: i64 = Input::new()
        .with_prompt("Cancellation window (days)")
        .default(logistics.cancellation_window_days)
        .interact_text()?;
    let returns: i64 = Input::new()
        .with_prompt("Return window (days)")
        .default(logistics.return_window_days)
        .interact_text()?;

    patch.manufacturer_name = Some(manufacturer_name);
    patch.manufacturer_address = Some(manufacturer_address);
    patch.packing_details = Some(packing_details);
    patch.cancellation_window_days = Some(cancellation);
    patch.return_window_days = Some(returns);

    wizard.update_logistics(patch);

    ctx.output.kv(
        "Volumetric weight",
        &format!("{} kg", wizard.volumetric_weight()),
    );
    ctx.output.kv(
        "Chargeable weight",
        &format!("{} kg", wizard.chargeable_weight()),
    );

    Ok(())
}

fn edit_offers(wizard: &mut ListingWizard, ctx: &Context) -> Result<()> {
    list_offers(wizard, ctx);

    while Confirm::new()
        .with_prompt("Add an offer?")
        .default(false)
        .interact()?
    {
        let kinds = [
            OfferKind::BuyXGetY,
            OfferKind::SpecialDay,
            OfferKind::Hourly,
            OfferKind::Bundle,
        ];
        let kind_names: Vec<&str> = kinds.iter().map(|k| k.display_name()).collect();
        let picked = Select::new()
            .with_prompt("Offer type")
            .items(&kind_names)
            .default(0)
            .interact()?;

        let terms = match kinds[picked] {
            OfferKind::BuyXGetY => {
                let buy_quantity: i64 = Input::new()
                    .with_prompt("Buy quantity")
                    .default(2)
                    .interact_text()?;
                let get_quantity: i64 = Input::new()
                    .with_prompt("Free quantity")
                    .default(1)
                    .interact_text()?;
                OfferTerms::BuyXGetY {
                    buy_quantity,
                    get_quantity,
                }
            }
            OfferKind::SpecialDay => {
                let day_name: String = Input::new()
                    .with_prompt("Day name (e.g. Diwali)")
                    .interact_text()?;
                let discount_percent: f64 = Input::new()
                    .with_prompt("Discount (%)")
                    .default(10.0)
                    .interact_text()?;
                OfferTerms::SpecialDay {
                    day_name,
                    discount_percent,
                }
            }
            OfferKind::Hourly => {
                let start_time: String = Input::new()
                    .with_prompt("Start time (e.g. 18:00)")
                    .interact_text()?;
                let end_time: String = Input::new()
                    .with_prompt("End time (e.g. 21:00)")
                    .interact_text()?;
                let discount_percent: f64 = Input::new()
                    .with_prompt("Discount (%)")
                    .default(10.0)
                    .interact_text()?;
                OfferTerms::Hourly {
                    start_time,
                    end_time,
                    discount_percent,
                }
            }
            OfferKind::Bundle => {
                let min_quantity: i64 = Input::new()
                    .with_prompt("Minimum quantity")
                    .default(2)
                    .interact_text()?;
                let discount_percent: f64 = Input::new()
                    .with_prompt("Discount (%)")
                    .default(10.0)
                    .interact_text()?;
                OfferTerms::Bundle {
                    min_quantity,
                    discount_percent,
                }
            }
        };

        let id = wizard.add_offer(terms);
        ctx.output.success(&format!("Added offer {}", id));
    }

    let offers: Vec<(OfferId, String)> = wizard
        .draft()
        .offers
        .offers
        .iter()
        .map(|o| (o.id.clone(), o.describe()))
        .collect();

    if !offers.is_empty() {
        if Confirm::new()
            .with_prompt("Toggle an offer's active state?")
            .default(false)
            .interact()?
        {
            let names: Vec<&str> = offers.iter().map(|(_, d)| d.as_str()).collect();
            let picked = Select::new()
                .with_prompt("Offer")
                .items(&names)
                .default(0)
                .interact()?;
            wizard.toggle_offer_active(&offers[picked].0);
        }

        if Confirm::new()
            .with_prompt("Remove an offer?")
            .default(false)
            .interact()?
        {
            let names: Vec<&str> = offers.iter().map(|(_, d)| d.as_str()).collect();
            let picked = Select::new()
                .with_prompt("Offer")
                .items(&names)
                .default(0)
                .interact()?;
            wizard.remove_offer(&offers[picked].0);
        }
    }

    Ok(())
}

fn list_offers(wizard: &ListingWizard, ctx: &Context) {
    for offer in &wizard.draft().offers.offers {
        let state = if offer.is_active { "active" } else { "inactive" };
        ctx.output
            .list_item(&format!("{} [{}]", offer.describe(), status_badge(state)));
    }
}
