use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation linking a product to a color record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductColor {
    /// Unique identifier of the product-color association.
    pub id: i32,
    /// Identifier of the product offered in the color.
    pub product_id: i32,
    /// Identifier of the referenced color record.
    pub color_id: i32,
    /// Timestamp for when the association was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the association.
    pub updated_at: NaiveDateTime,
}

/// Payload required to associate an existing color with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductColor {
    pub product_id: i32,
    pub color_id: i32,
}

impl NewProductColor {
    /// Construct a new association payload between a product and a color.
    pub fn new(product_id: i32, color_id: i32) -> Self {
        Self {
            product_id,
            color_id,
        }
    }
}
