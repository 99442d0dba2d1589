use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation linking a product to a size record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductSize {
    pub id: i32,
    pub product_id: i32,
    pub size_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to associate an existing size with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductSize {
    pub product_id: i32,
    pub size_id: i32,
}

impl NewProductSize {
    pub fn new(product_id: i32, size_id: i32) -> Self {
        Self {
            product_id,
            size_id,
        }
    }
}
