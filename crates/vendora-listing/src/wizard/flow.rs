//! The listing wizard state machine.

use crate::collaborators::{CountrySource, DraftStore, MediaUploader, Product, ProductGateway};
use crate::config::PlatformConfig;
use crate::countries::{self, Country};
use crate::draft::{
    ContentPatch, IdentityPatch, LogisticsPatch, MediaFile, OfferTerms, PricingBreakdown,
    PricingPatch, ProductDraft,
};
use crate::error::ListingError;
use crate::ids::{
    DeliveryCountryId, IdProvider, MediaId, OfferId, SpecEntryId, SystemIds, VariantId,
};
use crate::payload::{ApprovalStatus, SubmitPayload};

use super::step::WizardStep;
use super::validate;

/// Owns one listing session: the draft, the step pointer, and the id
/// source. Every mutation goes through here; the draft is never handed
/// out mutably.
pub struct ListingWizard {
    config: PlatformConfig,
    draft: ProductDraft,
    step: WizardStep,
    countries: Vec<Country>,
    ids: Box<dyn IdProvider>,
}

impl ListingWizard {
    /// Start a fresh session with the built-in country list and system
    /// id generation.
    pub fn new(config: PlatformConfig) -> Self {
        let draft = ProductDraft::new(&config);
        Self {
            config,
            draft,
            step: WizardStep::Identity,
            countries: countries::reference_countries(),
            ids: Box::new(SystemIds),
        }
    }

    /// Swap in a different id source, e.g. `SequentialIds` for
    /// deterministic tests.
    pub fn with_id_provider(mut self, ids: Box<dyn IdProvider>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the reference country list from a country source.
    pub fn load_countries(&mut self, source: &dyn CountrySource) -> Result<(), ListingError> {
        self.countries = source.fetch_countries()?;
        Ok(())
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    // === Validation ===

    /// Whether a step currently satisfies all its requirements.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        validate::is_step_valid(&self.draft, step)
    }

    /// The unsatisfied requirements for a step.
    pub fn missing_for_step(&self, step: WizardStep) -> Vec<&'static str> {
        validate::missing_for_step(&self.draft, step)
    }

    // === Navigation ===

    /// Advance one step. Refused (returning false) when the current step
    /// is invalid or already last.
    pub fn go_to_next_step(&mut self) -> bool {
        if !self.is_step_valid(self.step) {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step. Never validates; refused only at the first step.
    pub fn go_to_previous_step(&mut self) -> bool {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Jump directly to a step. Backward jumps are always allowed;
    /// forward jumps only past a valid current step.
    pub fn set_current_step(&mut self, step: WizardStep) -> bool {
        if step.number() < self.step.number() || self.is_step_valid(self.step) {
            self.step = step;
            true
        } else {
            false
        }
    }

    /// How far along the session is, out of 100.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 6.0) * 100.0) as u8
    }

    // === Step 1: identity & variants ===

    pub fn update_identity(&mut self, patch: IdentityPatch) {
        self.draft.apply_identity(patch);
        self.draft.touch();
    }

    /// Add a size variant with a fresh id. No-op (None) when the size is
    /// blank or stock is not positive.
    pub fn add_size_variant(
        &mut self,
        size: impl Into<String>,
        quantity: i64,
        stock: i64,
        price: f64,
    ) -> Option<VariantId> {
        let id = VariantId::new(self.ids.next_id());
        let added = self
            .draft
            .identity
            .add_size_variant(id, size, quantity, stock, price);
        if added.is_some() {
            self.draft.touch();
        }
        added
    }

    pub fn remove_size_variant(&mut self, id: &VariantId) -> bool {
        let removed = self.draft.identity.remove_size_variant(id);
        if removed {
            self.draft.touch();
        }
        removed
    }

    /// Add a color variant with a fresh id. No-op (None) when the color
    /// or SKU is blank, or the SKU is already taken.
    pub fn add_color_variant(
        &mut self,
        color: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Option<VariantId> {
        let id = VariantId::new(self.ids.next_id());
        let added = self
            .draft
            .identity
            .add_color_variant(id, color, sku, price, stock);
        if added.is_some() {
            self.draft.touch();
        }
        added
    }

    pub fn remove_color_variant(&mut self, id: &VariantId) -> bool {
        let removed = self.draft.identity.remove_color_variant(id);
        if removed {
            self.draft.touch();
        }
        removed
    }

    // === Step 2: media ===

    pub fn add_image(
        &mut self,
        file_name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<MediaId, ListingError> {
        let id = MediaId::new(self.ids.next_id());
        let added = self.draft.media.add_image(id, file_name, size_bytes)?;
        self.draft.touch();
        Ok(added)
    }

    pub fn add_video(
        &mut self,
        file_name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<MediaId, ListingError> {
        let id = MediaId::new(self.ids.next_id());
        let added = self.draft.media.add_video(id, file_name, size_bytes)?;
        self.draft.touch();
        Ok(added)
    }

    pub fn remove_media(&mut self, id: &MediaId) -> bool {
        let removed = self.draft.media.remove(id);
        if removed {
            self.draft.touch();
        }
        removed
    }

    /// Push every not-yet-uploaded file through the uploader and record
    /// the returned URLs. Stops at the first failure; files already
    /// marked in this call keep their URLs.
    pub fn upload_pending_media(
        &mut self,
        uploader: &dyn MediaUploader,
    ) -> Result<usize, ListingError> {
        let pending: Vec<MediaFile> = self.draft.media.pending().cloned().collect();
        let mut uploaded = 0;
        for file in &pending {
            let url = uploader.upload(file)?;
            self.draft.media.mark_uploaded(&file.id, url);
            uploaded += 1;
        }
        if uploaded > 0 {
            self.draft.touch();
        }
        Ok(uploaded)
    }

    // === Step 3: content ===

    pub fn update_content(&mut self, patch: ContentPatch) {
        self.draft.apply_content(patch);
        self.draft.touch();
    }

    pub fn add_highlight(&mut self, text: impl Into<String>) -> bool {
        let added = self.draft.content.add_highlight(text);
        if added {
            self.draft.touch();
        }
        added
    }

    pub fn remove_highlight(&mut self, index: usize) -> bool {
        let removed = self.draft.content.remove_highlight(index);
        if removed {
            self.draft.touch();
        }
        removed
    }

    /// Add a specification row with a fresh id. No-op (None) when the key
    /// or value is blank or the table is full.
    pub fn add_specification(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<SpecEntryId> {
        let id = SpecEntryId::new(self.ids.next_id());
        let added = self.draft.content.add_specification(id, key, value);
        if added.is_some() {
            self.draft.touch();
        }
        added
    }

    pub fn remove_specification(&mut self, id: &SpecEntryId) -> bool {
        let removed = self.draft.content.remove_specification(id);
        if removed {
            self.draft.touch();
        }
        removed
    }

    pub fn add_seller_note(&mut self, text: impl Into<String>) -> bool {
        let added = self.draft.content.add_note(text);
        if added {
            self.draft.touch();
        }
        added
    }

    pub fn remove_seller_note(&mut self, index: usize) -> bool {
        let removed = self.draft.content.remove_note(index);
        if removed {
            self.draft.touch();
        }
        removed
    }

    // === Step 4: pricing & geography ===

    pub fn update_pricing(&mut self, patch: PricingPatch) {
        let default_gst = self.config.default_gst_percent;
        self.draft.apply_pricing(patch, default_gst);
        self.draft.touch();
    }

    /// Add a delivery country row with a fresh id, resolving the name
    /// against the loaded country list.
    pub fn add_delivery_country(
        &mut self,
        code: impl Into<String>,
        delivery_charge: f64,
        min_order_qty: i64,
    ) -> Result<DeliveryCountryId, ListingError> {
        let id = DeliveryCountryId::new(self.ids.next_id());
        let added = self.draft.pricing.add_delivery_country(
            id,
            code,
            &self.countries,
            delivery_charge,
            min_order_qty,
        )?;
        self.draft.touch();
        Ok(added)
    }

    pub fn remove_delivery_country(&mut self, id: &DeliveryCountryId) -> bool {
        let removed = self.draft.pricing.remove_delivery_country(id);
        if removed {
            self.draft.touch();
        }
        removed
    }

    /// The derived pricing figures for the current draft.
    pub fn pricing_breakdown(&self) -> PricingBreakdown {
        self.draft.pricing.breakdown()
    }

    // === Step 5: logistics & policy ===

    pub fn update_logistics(&mut self, patch: LogisticsPatch) {
        self.draft.apply_logistics(patch);
        self.draft.touch();
    }

    pub fn volumetric_weight(&self) -> f64 {
        self.draft.logistics.volumetric_weight()
    }

    pub fn chargeable_weight(&self) -> f64 {
        self.draft.logistics.chargeable_weight()
    }

    // === Step 6: offers ===

    /// Add an offer rule with a fresh id, active by default.
    pub fn add_offer(&mut self, terms: OfferTerms) -> OfferId {
        let id = OfferId::new(self.ids.next_id());
        let id = self.draft.offers.add(id, terms);
        self.draft.touch();
        id
    }

    pub fn toggle_offer_active(&mut self, id: &OfferId) -> bool {
        let toggled = self.draft.offers.toggle_active(id);
        if toggled {
            self.draft.touch();
        }
        toggled
    }

    pub fn remove_offer(&mut self, id: &OfferId) -> bool {
        let removed = self.draft.offers.remove(id);
        if removed {
            self.draft.touch();
        }
        removed
    }

    // === Submission ===

    /// Flatten the draft for submission, tagged pending review.
    pub fn submit_data(&self) -> SubmitPayload {
        SubmitPayload::from_draft(&self.draft, ApprovalStatus::Pending)
    }

    /// Flatten the draft for saving, tagged as an unreviewed draft.
    pub fn draft_data(&self) -> SubmitPayload {
        SubmitPayload::from_draft(&self.draft, ApprovalStatus::Draft)
    }

    /// Submit the listing. Steps 1-5 must validate (offers are advisory).
    /// On success the session resets for the next listing; on failure the
    /// draft is kept untouched so the seller can retry.
    pub fn submit(&mut self, gateway: &dyn ProductGateway) -> Result<Product, ListingError> {
        for step in WizardStep::all() {
            if step == WizardStep::Offers {
                continue;
            }
            if !self.is_step_valid(step) {
                return Err(ListingError::IncompleteStep {
                    step: step.number(),
                    missing: self.missing_for_step(step).join(", "),
                });
            }
        }
        let payload = self.submit_data();
        let product = gateway.create_product(&payload)?;
        self.reset_form();
        Ok(product)
    }

    /// Save the current state as a draft, skipping all validation. The
    /// session keeps its draft either way.
    pub fn save_draft(&self, store: &dyn DraftStore) -> Result<(), ListingError> {
        let payload = self.draft_data();
        store.save_draft(&payload)?;
        Ok(())
    }

    /// Throw the draft away and start over at step 1.
    pub fn reset_form(&mut self) {
        self.draft = ProductDraft::new(&self.config);
        self.step = WizardStep::Identity;
    }
}
