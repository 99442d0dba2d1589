use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Whether a variant can currently be sold.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariantStatus {
    #[default]
    Active,
    Inactive,
}

impl VariantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VariantStatus::Active => "active",
            VariantStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for VariantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored or submitted status is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant status `{0}`")]
pub struct UnknownVariantStatus(pub String);

impl FromStr for VariantStatus {
    type Err = UnknownVariantStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(VariantStatus::Active),
            "inactive" => Ok(VariantStatus::Inactive),
            other => Err(UnknownVariantStatus(other.to_string())),
        }
    }
}

/// A sellable configuration of a product bound to at most one color and one size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    pub id: i32,
    /// Owning product.
    pub product_id: i32,
    pub color_id: Option<i32>,
    pub size_id: Option<i32>,
    pub sku: Option<String>,
    pub stock: i32,
    /// Product final price at the time the variant was created.
    pub price: f64,
    pub images: Vec<String>,
    pub status: VariantStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new variant.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductVariant {
    pub product_id: i32,
    pub color_id: Option<i32>,
    pub size_id: Option<i32>,
    pub sku: Option<String>,
    pub stock: i32,
    pub price: f64,
    pub images: Vec<String>,
    pub status: VariantStatus,
    pub updated_at: NaiveDateTime,
}

/// Patch data applied when updating a single variant.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductVariant {
    pub sku: Option<Option<String>>,
    pub stock: Option<i32>,
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
    pub status: Option<VariantStatus>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProductVariant {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProductVariant {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            sku: None,
            stock: None,
            price: None,
            images: None,
            status: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Update the SKU, using `None` to clear an existing value.
    pub fn sku(mut self, sku: Option<impl Into<String>>) -> Self {
        self.sku = Some(sku.map(|value| value.into()));
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn status(mut self, status: VariantStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether the patch carries no change at all.
    pub fn is_empty(&self) -> bool {
        self.sku.is_none()
            && self.stock.is_none()
            && self.price.is_none()
            && self.images.is_none()
            && self.status.is_none()
    }
}
