//! Product draft module.
//!
//! Contains the per-step records of a listing draft, the aggregate that
//! holds them, and the patch types for partial updates.

mod content;
mod draft;
mod identity;
mod logistics;
mod media;
mod offers;
mod pricing;

pub use content::{ContentInfo, Specification, MAX_SPECIFICATIONS};
pub use draft::{ContentPatch, IdentityPatch, LogisticsPatch, PricingPatch, ProductDraft};
pub use identity::{
    ColorVariant, IdentityInfo, SizeVariant, MAX_SHORT_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
pub use logistics::{LogisticsInfo, ShipType, MAX_WINDOW_DAYS, VOLUMETRIC_DIVISOR};
pub use media::{
    MediaFile, MediaGallery, MediaKind, MAX_IMAGES, MAX_IMAGE_BYTES, MAX_VIDEOS, MAX_VIDEO_BYTES,
    MIN_IMAGES,
};
pub use offers::{OfferKind, OfferRule, OfferSet, OfferTerms};
pub use pricing::{DeliveryCountry, PricingBreakdown, PricingInfo};
