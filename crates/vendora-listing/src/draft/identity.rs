//! Step 1: product identity and variants.

use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, SubCategoryId, VariantId};

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 250;
/// Maximum short description length in characters.
pub const MAX_SHORT_DESCRIPTION_LEN: usize = 350;

/// A size-based variant row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeVariant {
    /// Unique row identifier.
    pub id: VariantId,
    /// Size label (e.g. "M", "42 EU").
    pub size: String,
    /// Units per order of this size.
    pub quantity: i64,
    /// Units in stock for this size.
    pub stock: i64,
    /// Price override for this size.
    pub price: f64,
}

/// A color-based variant row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorVariant {
    /// Unique row identifier.
    pub id: VariantId,
    /// Color label.
    pub color: String,
    /// Stock keeping unit, stored uppercase.
    pub sku: String,
    /// Price override for this color.
    pub price: f64,
    /// Units in stock for this color.
    pub stock: i64,
}

/// Step 1 of the listing draft: what the product is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IdentityInfo {
    /// Chosen category.
    pub category_id: Option<CategoryId>,
    /// Chosen sub-category.
    pub sub_category_id: Option<SubCategoryId>,
    /// Free-form product type label (e.g. "Sneakers").
    pub product_type: String,
    /// Listing title.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// 8-20 alphanumeric characters, or empty when not applicable.
    pub model_number: String,
    /// Short description shown in listings.
    pub short_description: String,
    /// Stock for the base product, before variants.
    pub base_stock: i64,
    /// Whether size variants apply to this product.
    pub size_applicable: bool,
    /// Size variant rows, in insertion order.
    pub size_variants: Vec<SizeVariant>,
    /// Whether color variants apply to this product.
    pub color_applicable: bool,
    /// Color variant rows, in insertion order.
    pub color_variants: Vec<ColorVariant>,
}

impl IdentityInfo {
    /// Append a size variant row.
    ///
    /// Refused (returning `None`, list unchanged) when the size label is
    /// blank or the stock is not positive. Quantity and price are floored
    /// at zero. Rows are edited by removal and re-add.
    pub fn add_size_variant(
        &mut self,
        id: VariantId,
        size: impl Into<String>,
        quantity: i64,
        stock: i64,
        price: f64,
    ) -> Option<VariantId> {
        let size = size.into();
        if size.trim().is_empty() || stock <= 0 {
            return None;
        }
        self.size_variants.push(SizeVariant {
            id: id.clone(),
            size,
            quantity: quantity.max(0),
            stock,
            price: price.max(0.0),
        });
        Some(id)
    }

    /// Append a color variant row.
    ///
    /// The SKU is trimmed and uppercased on input. Refused when the color
    /// or SKU is blank, or when the normalized SKU is already taken by
    /// another row.
    pub fn add_color_variant(
        &mut self,
        id: VariantId,
        color: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Option<VariantId> {
        let color = color.into();
        let sku = sku.into().trim().to_uppercase();
        if color.trim().is_empty() || sku.is_empty() {
            return None;
        }
        if self.color_variants.iter().any(|v| v.sku == sku) {
            return None;
        }
        self.color_variants.push(ColorVariant {
            id: id.clone(),
            color,
            sku,
            price: price.max(0.0),
            stock: stock.max(0),
        });
        Some(id)
    }

    /// Remove a size variant row by id.
    pub fn remove_size_variant(&mut self, id: &VariantId) -> bool {
        let len_before = self.size_variants.len();
        self.size_variants.retain(|v| &v.id != id);
        self.size_variants.len() < len_before
    }

    /// Remove a color variant row by id.
    pub fn remove_color_variant(&mut self, id: &VariantId) -> bool {
        let len_before = self.color_variants.len();
        self.color_variants.retain(|v| &v.id != id);
        self.color_variants.len() < len_before
    }

    /// Whether the model number satisfies the 8-20 alphanumeric rule.
    ///
    /// An empty model number is allowed.
    pub fn model_number_ok(&self) -> bool {
        if self.model_number.is_empty() {
            return true;
        }
        let len = self.model_number.chars().count();
        (8..=20).contains(&len)
            && self.model_number.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Total stock across the base quantity and all variant rows.
    pub fn total_stock(&self) -> i64 {
        self.base_stock
            + self.size_variants.iter().map(|v| v.stock).sum::<i64>()
            + self.color_variants.iter().map(|v| v.stock).sum::<i64>()
    }
}
