//! Product listing domain logic for the Vendora marketplace.
//!
//! This crate implements the seller-side listing wizard: a six-step,
//! stateful workflow that collects a new-product submission, validates it
//! step by step, derives pricing and shipping figures, and produces one
//! flattened payload for the marketplace backend.
//!
//! - **Draft**: the per-step records of an in-progress listing
//! - **Wizard**: step navigation, validation gating, submission
//! - **Pricing**: discount, fee, tax, and earnings derivation
//! - **Logistics**: volumetric and chargeable weight
//! - **Offers**: the four promotional rule shapes
//! - **Collaborators**: boundary traits plus in-memory test doubles
//!
//! # Example
//!
//! ```rust,ignore
//! use vendora_listing::prelude::*;
//!
//! let mut wizard = ListingWizard::new(PlatformConfig::default());
//!
//! // Fill step 1 and move forward
//! wizard.update_identity(IdentityPatch {
//!     category_id: Some(CategoryId::new("cat-fashion")),
//!     title: Some("Trail Running Shoes".to_string()),
//!     brand: Some("Vendora Basics".to_string()),
//!     short_description: Some("Lightweight trail shoes".to_string()),
//!     ..Default::default()
//! });
//! assert!(wizard.go_to_next_step());
//!
//! // ... steps 2-6 ...
//!
//! // Submit to the marketplace
//! let gateway = MemoryGateway::new();
//! let product = wizard.submit(&gateway)?;
//! println!("Created {}", product.id);
//! ```

pub mod collaborators;
pub mod config;
pub mod countries;
pub mod draft;
pub mod error;
pub mod ids;
pub mod payload;
pub mod wizard;

pub use config::PlatformConfig;
pub use error::ListingError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::PlatformConfig;
    pub use crate::error::ListingError;
    pub use crate::ids::*;

    // Draft
    pub use crate::draft::{
        ColorVariant, ContentInfo, ContentPatch, DeliveryCountry, IdentityInfo, IdentityPatch,
        LogisticsInfo, LogisticsPatch, MediaFile, MediaGallery, MediaKind, OfferKind, OfferRule,
        OfferSet, OfferTerms, PricingBreakdown, PricingInfo, PricingPatch, ProductDraft,
        ShipType, SizeVariant, Specification,
    };

    // Wizard
    pub use crate::wizard::{is_step_valid, missing_for_step, ListingWizard, WizardStep};

    // Payload
    pub use crate::payload::{ApprovalStatus, OfferPayload, SubmitPayload};

    // Collaborators
    pub use crate::collaborators::{
        Category, CategorySource, CollaboratorError, CountrySource, DraftStore, MediaUploader,
        MemoryCatalog, MemoryCountries, MemoryDrafts, MemoryGateway, MemoryUploads, Product,
        ProductGateway, SubCategory,
    };
    pub use crate::countries::Country;
}
