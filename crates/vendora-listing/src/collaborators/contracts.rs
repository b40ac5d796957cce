//! Boundary contracts for the services the wizard talks to.
//!
//! Implementations live outside the core; the wizard only ever sees
//! these traits. All calls are synchronous and run to completion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::countries::Country;
use crate::draft::MediaFile;
use crate::ids::{CategoryId, ProductId, SubCategoryId};
use crate::payload::{ApprovalStatus, SubmitPayload};

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollaboratorError {
    /// The service understood the request and said no.
    #[error("{service} rejected the request: {reason}")]
    Rejected { service: String, reason: String },

    /// The service could not be reached or did not answer.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with something unusable.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A product category with its sub-categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub sub_categories: Vec<SubCategory>,
}

/// A sub-category under one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub name: String,
}

/// What the marketplace hands back for a created product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub approval_status: ApprovalStatus,
    pub created_at: i64,
}

/// Read-only category tree, queried once at step 1 entry.
pub trait CategorySource {
    fn fetch_categories(&self) -> Result<Vec<Category>, CollaboratorError>;
}

/// Read-only country and currency list, queried once at step 4 entry.
pub trait CountrySource {
    fn fetch_countries(&self) -> Result<Vec<Country>, CollaboratorError>;
}

/// The create-product endpoint. Called exactly once per submission.
pub trait ProductGateway {
    fn create_product(&self, payload: &SubmitPayload) -> Result<Product, CollaboratorError>;
}

/// Optional draft persistence. Accepts unvalidated payloads.
pub trait DraftStore {
    fn save_draft(&self, payload: &SubmitPayload) -> Result<(), CollaboratorError>;
}

/// Media upload transport. Returns the persisted URL for a file.
pub trait MediaUploader {
    fn upload(&self, file: &MediaFile) -> Result<String, CollaboratorError>;
}
