use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_category::{
    NewProductCategory as DomainNewProductCategory, ProductCategory as DomainProductCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product_categories,
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::category::Category, foreign_key = category_id)
)]
pub struct ProductCategory {
    pub id: i32,
    pub product_id: i32,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_categories)]
pub struct NewProductCategory {
    pub product_id: i32,
    pub category_id: i32,
}

impl From<ProductCategory> for DomainProductCategory {
    fn from(value: ProductCategory) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            category_id: value.category_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewProductCategory> for NewProductCategory {
    fn from(value: &DomainNewProductCategory) -> Self {
        Self {
            product_id: value.product_id,
            category_id: value.category_id,
        }
    }
}
