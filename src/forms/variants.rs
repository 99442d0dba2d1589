use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product_variant::{UnknownVariantStatus, UpdateProductVariant, VariantStatus};
use crate::forms::{sanitize_images, sanitize_sku};

const SKU_MAX_LEN_VALIDATOR: u64 = 64;

/// Result type returned by the variant form helpers.
pub type VariantFormResult<T> = Result<T, VariantFormError>;

/// Errors that can occur while processing variant forms.
#[derive(Debug, Error)]
pub enum VariantFormError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Status(#[from] UnknownVariantStatus),
    /// The payload did not carry a single field to change.
    #[error("no variant fields to update")]
    Empty,
}

/// Payload accepted when editing a single variant.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditVariantForm {
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    /// An empty string clears the SKU.
    #[validate(length(max = SKU_MAX_LEN_VALIDATOR))]
    pub sku: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
    /// `active` or `inactive`.
    pub status: Option<String>,
}

impl EditVariantForm {
    /// Validates and sanitizes the payload into a domain `UpdateProductVariant`.
    pub fn into_update_variant(self) -> VariantFormResult<UpdateProductVariant> {
        self.validate()?;

        let mut update = UpdateProductVariant::new();

        if let Some(stock) = self.stock {
            update = update.stock(stock);
        }
        if let Some(raw) = self.sku.as_deref() {
            let sku = sanitize_sku(raw);
            update = update.sku((!sku.is_empty()).then_some(sku));
        }
        if let Some(price) = self.price {
            update = update.price(price);
        }
        if let Some(images) = self.images {
            update = update.images(sanitize_images(images));
        }
        if let Some(status) = self.status.as_deref() {
            update = update.status(status.parse::<VariantStatus>()?);
        }

        if update.is_empty() {
            return Err(VariantFormError::Empty);
        }

        Ok(update)
    }
}
