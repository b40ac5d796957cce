//! Listing error types.

use thiserror::Error;

use crate::collaborators::CollaboratorError;

/// Errors that can occur while assembling a product listing.
///
/// Refused navigation and silent clamps are not represented here; those
/// leave state unchanged (or corrected) without an error. Only rejected
/// adds, incomplete submissions, and collaborator failures surface as
/// values of this type.
#[derive(Error, Debug)]
pub enum ListingError {
    /// Image count cap reached.
    #[error("Image limit reached: at most {0} images per listing")]
    ImageLimitReached(usize),

    /// Image file too large.
    #[error("Image too large: {size_bytes} bytes exceeds limit of {limit_bytes}")]
    ImageTooLarge { size_bytes: u64, limit_bytes: u64 },

    /// Video count cap reached.
    #[error("Video limit reached: at most {0} videos per listing")]
    VideoLimitReached(usize),

    /// Video file too large.
    #[error("Video too large: {size_bytes} bytes exceeds limit of {limit_bytes}")]
    VideoTooLarge { size_bytes: u64, limit_bytes: u64 },

    /// File does not look like the kind of media being added.
    #[error("Unsupported media kind for {file_name}: expected {expected}")]
    UnsupportedMediaKind {
        file_name: String,
        expected: String,
    },

    /// Delivery country already present in the table.
    #[error("Delivery country already added: {0}")]
    DuplicateDeliveryCountry(String),

    /// Country code missing from the reference list.
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    /// A step is missing required fields at submission time.
    #[error("Step {step} incomplete: missing {missing}")]
    IncompleteStep { step: u8, missing: String },

    /// A boundary collaborator failed.
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

impl From<CollaboratorError> for ListingError {
    fn from(e: CollaboratorError) -> Self {
        ListingError::Collaborator(e.to_string())
    }
}
