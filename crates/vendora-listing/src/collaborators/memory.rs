//! In-memory collaborator implementations.
//!
//! Used by tests and the seller-console tooling. Single-session like the
//! wizard itself, so plain `RefCell`/`Cell` interior state is enough.

use std::cell::{Cell, RefCell};

use crate::countries::{reference_countries, Country};
use crate::draft::MediaFile;
use crate::ids::{CategoryId, IdProvider, ProductId, SequentialIds, SubCategoryId};
use crate::payload::SubmitPayload;

use super::contracts::{
    Category, CategorySource, CollaboratorError, CountrySource, DraftStore, MediaUploader,
    Product, ProductGateway, SubCategory,
};

/// A small seeded category tree.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    categories: Vec<Category>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        let seed = [
            ("cat-electronics", "Electronics", vec!["Audio", "Wearables", "Accessories"]),
            ("cat-fashion", "Fashion", vec!["Footwear", "Apparel", "Bags"]),
            ("cat-home", "Home & Kitchen", vec!["Cookware", "Decor", "Storage"]),
            ("cat-beauty", "Beauty", vec!["Skincare", "Haircare"]),
        ];
        let categories = seed
            .into_iter()
            .map(|(id, name, subs)| Category {
                id: CategoryId::new(id),
                name: name.to_string(),
                sub_categories: subs
                    .into_iter()
                    .map(|sub| SubCategory {
                        id: SubCategoryId::new(format!(
                            "{}-{}",
                            id,
                            sub.to_lowercase().replace([' ', '&'], "-")
                        )),
                        name: sub.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySource for MemoryCatalog {
    fn fetch_categories(&self) -> Result<Vec<Category>, CollaboratorError> {
        Ok(self.categories.clone())
    }
}

/// Wraps the static reference country list.
#[derive(Debug, Clone, Default)]
pub struct MemoryCountries;

impl CountrySource for MemoryCountries {
    fn fetch_countries(&self) -> Result<Vec<Country>, CollaboratorError> {
        Ok(reference_countries())
    }
}

/// Records created products and can be primed to fail once.
pub struct MemoryGateway {
    created: RefCell<Vec<SubmitPayload>>,
    fail_next: Cell<bool>,
    ids: RefCell<SequentialIds>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self {
            created: RefCell::new(Vec::new()),
            fail_next: Cell::new(false),
            ids: RefCell::new(SequentialIds::new("prod")),
        }
    }

    /// Make the next `create_product` call fail with `Unavailable`.
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    pub fn created_count(&self) -> usize {
        self.created.borrow().len()
    }

    /// The most recently accepted payload, if any.
    pub fn last_created(&self) -> Option<SubmitPayload> {
        self.created.borrow().last().cloned()
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductGateway for MemoryGateway {
    fn create_product(&self, payload: &SubmitPayload) -> Result<Product, CollaboratorError> {
        if self.fail_next.replace(false) {
            return Err(CollaboratorError::Unavailable(
                "product service timed out".to_string(),
            ));
        }
        let product = Product {
            id: ProductId::new(self.ids.borrow_mut().next_id()),
            title: payload.title.clone(),
            approval_status: payload.approval_status,
            created_at: payload.created_at,
        };
        self.created.borrow_mut().push(payload.clone());
        Ok(product)
    }
}

/// Keeps saved drafts in order of arrival.
#[derive(Default)]
pub struct MemoryDrafts {
    saved: RefCell<Vec<SubmitPayload>>,
}

impl MemoryDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved_count(&self) -> usize {
        self.saved.borrow().len()
    }

    pub fn last_saved(&self) -> Option<SubmitPayload> {
        self.saved.borrow().last().cloned()
    }
}

impl DraftStore for MemoryDrafts {
    fn save_draft(&self, payload: &SubmitPayload) -> Result<(), CollaboratorError> {
        self.saved.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Fabricates CDN-style URLs for uploaded files.
#[derive(Default)]
pub struct MemoryUploads {
    uploaded: Cell<u64>,
}

impl MemoryUploads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded_count(&self) -> u64 {
        self.uploaded.get()
    }
}

impl MediaUploader for MemoryUploads {
    fn upload(&self, file: &MediaFile) -> Result<String, CollaboratorError> {
        let n = self.uploaded.get() + 1;
        self.uploaded.set(n);
        Ok(format!(
            "https://cdn.vendora.test/media/{}/{}",
            n, file.file_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformConfig;
    use crate::draft::{MediaKind, ProductDraft};
    use crate::ids::MediaId;
    use crate::payload::{ApprovalStatus, SubmitPayload};

    fn payload() -> SubmitPayload {
        let draft = ProductDraft::new(&PlatformConfig::default());
        SubmitPayload::from_draft(&draft, ApprovalStatus::Pending)
    }

    #[test]
    fn test_catalog_has_sub_categories() {
        let catalog = MemoryCatalog::new();
        let categories = catalog.fetch_categories().unwrap();
        assert!(!categories.is_empty());
        assert!(categories.iter().all(|c| !c.sub_categories.is_empty()));
    }

    #[test]
    fn test_countries_match_reference_list() {
        let countries = MemoryCountries.fetch_countries().unwrap();
        assert_eq!(countries.len(), reference_countries().len());
        assert!(countries.iter().any(|c| c.code == "IN"));
    }

    #[test]
    fn test_gateway_records_and_assigns_ids() {
        let gateway = MemoryGateway::new();
        let product = gateway.create_product(&payload()).unwrap();
        assert_eq!(product.id.as_str(), "prod-1");
        assert_eq!(gateway.created_count(), 1);
    }

    #[test]
    fn test_gateway_fails_once_when_primed() {
        let gateway = MemoryGateway::new();
        gateway.fail_next();

        let err = gateway.create_product(&payload()).unwrap_err();
        assert!(matches!(err, CollaboratorError::Unavailable(_)));
        assert_eq!(gateway.created_count(), 0);

        // Second attempt goes through
        assert!(gateway.create_product(&payload()).is_ok());
        assert_eq!(gateway.created_count(), 1);
    }

    #[test]
    fn test_drafts_record_saves() {
        let drafts = MemoryDrafts::new();
        drafts.save_draft(&payload()).unwrap();
        assert_eq!(drafts.saved_count(), 1);
    }

    #[test]
    fn test_uploads_fabricate_urls() {
        let uploads = MemoryUploads::new();
        let file = MediaFile {
            id: MediaId::new("img-1"),
            file_name: "front.jpg".to_string(),
            kind: MediaKind::Image,
            size_bytes: 1024,
            url: None,
        };
        let url = uploads.upload(&file).unwrap();
        assert_eq!(url, "https://cdn.vendora.test/media/1/front.jpg");
        assert_eq!(uploads.uploaded_count(), 1);
    }
}
