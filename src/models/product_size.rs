use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_size::{
    NewProductSize as DomainNewProductSize, ProductSize as DomainProductSize,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product_sizes,
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::size::Size, foreign_key = size_id)
)]
pub struct ProductSize {
    pub id: i32,
    pub product_id: i32,
    pub size_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_sizes)]
pub struct NewProductSize {
    pub product_id: i32,
    pub size_id: i32,
}

impl From<ProductSize> for DomainProductSize {
    fn from(value: ProductSize) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            size_id: value.size_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewProductSize> for NewProductSize {
    fn from(value: &DomainNewProductSize) -> Self {
        Self {
            product_id: value.product_id,
            size_id: value.size_id,
        }
    }
}
