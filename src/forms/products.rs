use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::pricing::Pricing;
use crate::domain::product::{Dimensions, ProductFlags, UpdateProduct};
use crate::forms::{sanitize_images, sanitize_inline_text, sanitize_multiline_text, sanitize_sku};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a SKU.
const SKU_MAX_LEN: usize = 64;
const SKU_MAX_LEN_VALIDATOR: u64 = SKU_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
}

/// Payload accepted when creating a product.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    pub description: Option<String>,
    pub brand_id: i32,
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Percentage between 0 and 100.
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount: Option<f64>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[validate(length(max = SKU_MAX_LEN_VALIDATOR))]
    pub sku: Option<String>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0))]
    pub length: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_new: bool,
    pub show_in_site: Option<bool>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub color_ids: Vec<i32>,
    #[serde(default)]
    pub size_ids: Vec<i32>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

/// Sanitized product definition ready for reference validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub brand_id: i32,
    pub pricing: Pricing,
    pub stock: i32,
    pub sku: Option<String>,
    pub dimensions: Dimensions,
    pub flags: ProductFlags,
    pub images: Vec<String>,
    pub color_ids: Vec<i32>,
    pub size_ids: Vec<i32>,
    pub category_ids: Vec<i32>,
}

impl CreateProductForm {
    /// Validates and sanitizes the payload into a `ProductDraft`.
    ///
    /// Reference ids are passed through untouched; they are checked against
    /// the catalog by the create use case.
    pub fn into_draft(self) -> ProductFormResult<ProductDraft> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let sku = self
            .sku
            .as_deref()
            .map(sanitize_sku)
            .filter(|value| !value.is_empty());

        let defaults = Dimensions::default();
        let dimensions = Dimensions {
            height: self.height.unwrap_or(defaults.height),
            width: self.width.unwrap_or(defaults.width),
            length: self.length.unwrap_or(defaults.length),
            weight: self.weight.unwrap_or(defaults.weight),
        };

        let flags = ProductFlags {
            on_sale: self.on_sale,
            is_featured: self.is_featured,
            is_new: self.is_new,
            show_in_site: self
                .show_in_site
                .unwrap_or(ProductFlags::default().show_in_site),
            ..ProductFlags::default()
        };

        Ok(ProductDraft {
            name,
            description,
            brand_id: self.brand_id,
            pricing: Pricing::new(self.price, self.discount),
            stock: self.stock,
            sku,
            dimensions,
            flags,
            images: sanitize_images(self.images),
            color_ids: self.color_ids,
            size_ids: self.size_ids,
            category_ids: self.category_ids,
        })
    }
}

/// Payload accepted when editing a product. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: Option<String>,
    /// An empty string clears the description.
    pub description: Option<String>,
    pub brand_id: Option<i32>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    /// An empty string clears the SKU.
    #[validate(length(max = SKU_MAX_LEN_VALIDATOR))]
    pub sku: Option<String>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0))]
    pub length: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    pub on_sale: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_new: Option<bool>,
    pub show_in_site: Option<bool>,
    pub images: Option<Vec<String>>,
    pub color_ids: Option<Vec<i32>>,
    pub size_ids: Option<Vec<i32>>,
    pub category_ids: Option<Vec<i32>>,
}

/// Sanitized edit request: the field patch plus any association ids that
/// still need to be resolved against the catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductEdit {
    pub changes: UpdateProduct,
    pub color_ids: Option<Vec<i32>>,
    pub size_ids: Option<Vec<i32>>,
    pub category_ids: Option<Vec<i32>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a `ProductEdit`.
    pub fn into_edit(self) -> ProductFormResult<ProductEdit> {
        self.validate()?;

        let name = match self.name.as_deref() {
            Some(raw) => {
                let sanitized = sanitize_inline_text(raw);
                if sanitized.is_empty() {
                    return Err(ProductFormError::EmptyName);
                }
                Some(sanitized)
            }
            None => None,
        };

        let description = self.description.as_deref().map(|raw| {
            let sanitized = sanitize_multiline_text(raw);
            (!sanitized.is_empty()).then_some(sanitized)
        });

        let sku = self.sku.as_deref().map(|raw| {
            let sanitized = sanitize_sku(raw);
            (!sanitized.is_empty()).then_some(sanitized)
        });

        let changes = UpdateProduct {
            name,
            description,
            brand_id: self.brand_id,
            price: self.price,
            discount: self.discount,
            stock: self.stock,
            sku,
            height: self.height,
            width: self.width,
            length: self.length,
            weight: self.weight,
            on_sale: self.on_sale,
            is_featured: self.is_featured,
            is_new: self.is_new,
            show_in_site: self.show_in_site,
            images: self.images.map(sanitize_images),
            ..UpdateProduct::default()
        };

        Ok(ProductEdit {
            changes,
            color_ids: self.color_ids,
            size_ids: self.size_ids,
            category_ids: self.category_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form() -> CreateProductForm {
        CreateProductForm {
            name: "  Classic   Tee ".to_string(),
            description: Some(" Soft cotton.\n\n\n Relaxed fit. ".to_string()),
            brand_id: 3,
            price: 200.0,
            discount: Some(10.0),
            stock: 5,
            sku: Some(" TEE-01 ".to_string()),
            color_ids: vec![1, 2],
            size_ids: vec![7],
            ..CreateProductForm::default()
        }
    }

    #[test]
    fn create_form_sanitizes_and_prices() {
        let draft = create_form().into_draft().expect("draft");

        assert_eq!(draft.name, "Classic Tee");
        assert_eq!(
            draft.description.as_deref(),
            Some("Soft cotton.\n\nRelaxed fit.")
        );
        assert_eq!(draft.sku.as_deref(), Some("TEE-01"));
        assert_eq!(draft.pricing.final_price(), 180.0);
        assert!(draft.flags.show_in_site);
        assert!(!draft.flags.has_variants);
        assert_eq!(draft.color_ids, vec![1, 2]);
    }

    #[test]
    fn create_form_rejects_blank_name() {
        let form = CreateProductForm {
            name: " \t ".to_string(),
            ..create_form()
        };

        assert!(matches!(form.into_draft(), Err(ProductFormError::EmptyName)));
    }

    #[test]
    fn create_form_rejects_out_of_range_discount() {
        let form = CreateProductForm {
            discount: Some(120.0),
            ..create_form()
        };

        assert!(matches!(
            form.into_draft(),
            Err(ProductFormError::Validation(_))
        ));
    }

    #[test]
    fn create_form_rejects_negative_price_and_stock() {
        let negative_price = CreateProductForm {
            price: -1.0,
            ..create_form()
        };
        let negative_stock = CreateProductForm {
            stock: -3,
            ..create_form()
        };

        assert!(negative_price.into_draft().is_err());
        assert!(negative_stock.into_draft().is_err());
    }

    #[test]
    fn edit_form_maps_empty_strings_to_clears() {
        let form = EditProductForm {
            description: Some("   ".to_string()),
            sku: Some(String::new()),
            discount: Some(20.0),
            color_ids: Some(vec![4]),
            ..EditProductForm::default()
        };

        let edit = form.into_edit().expect("edit");

        assert_eq!(edit.changes.description, Some(None));
        assert_eq!(edit.changes.sku, Some(None));
        assert_eq!(edit.changes.discount, Some(20.0));
        assert_eq!(edit.changes.name, None);
        assert_eq!(edit.color_ids, Some(vec![4]));
        assert_eq!(edit.size_ids, None);
    }

    #[test]
    fn edit_form_rejects_blank_name() {
        let form = EditProductForm {
            name: Some("   ".to_string()),
            ..EditProductForm::default()
        };

        assert!(matches!(form.into_edit(), Err(ProductFormError::EmptyName)));
    }
}
