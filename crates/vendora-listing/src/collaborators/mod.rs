//! External collaborator module.
//!
//! Contains the boundary traits the wizard depends on and in-memory
//! implementations for tests and tooling.

mod contracts;
mod memory;

pub use contracts::{
    Category, CategorySource, CollaboratorError, CountrySource, DraftStore, MediaUploader,
    Product, ProductGateway, SubCategory,
};
pub use memory::{MemoryCatalog, MemoryCountries, MemoryDrafts, MemoryGateway, MemoryUploads};
