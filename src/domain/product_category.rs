use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation placing a product in a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductCategory {
    /// Unique identifier of the association.
    pub id: i32,
    /// Identifier of the categorized product.
    pub product_id: i32,
    /// Identifier of the referenced category record.
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to place a product in an existing category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductCategory {
    pub product_id: i32,
    pub category_id: i32,
}

impl NewProductCategory {
    /// Construct a new association payload between a product and a category.
    pub fn new(product_id: i32, category_id: i32) -> Self {
        Self {
            product_id,
            category_id,
        }
    }
}
