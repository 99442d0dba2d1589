use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_color::{
    NewProductColor as DomainNewProductColor, ProductColor as DomainProductColor,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product_colors,
    belongs_to(super::product::Product, foreign_key = product_id),
    belongs_to(super::color::Color, foreign_key = color_id)
)]
pub struct ProductColor {
    pub id: i32,
    pub product_id: i32,
    pub color_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_colors)]
pub struct NewProductColor {
    pub product_id: i32,
    pub color_id: i32,
}

impl From<ProductColor> for DomainProductColor {
    fn from(value: ProductColor) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            color_id: value.color_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<&DomainNewProductColor> for NewProductColor {
    fn from(value: &DomainNewProductColor) -> Self {
        Self {
            product_id: value.product_id,
            color_id: value.color_id,
        }
    }
}
