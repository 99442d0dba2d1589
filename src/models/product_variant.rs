use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_variant::{
    NewProductVariant as DomainNewProductVariant, ProductVariant as DomainProductVariant,
    UpdateProductVariant as DomainUpdateProductVariant, VariantStatus,
};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::product_variants)]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct ProductVariant {
    pub id: i32,
    pub product_id: i32,
    pub color_id: Option<i32>,
    pub size_id: Option<i32>,
    pub sku: Option<String>,
    pub stock: i32,
    pub price: f64,
    pub images: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_variants)]
pub struct NewProductVariant<'a> {
    pub product_id: i32,
    pub color_id: Option<i32>,
    pub size_id: Option<i32>,
    pub sku: Option<&'a str>,
    pub stock: i32,
    pub price: f64,
    pub images: String,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::product_variants)]
pub struct UpdateProductVariant<'a> {
    pub sku: Option<Option<&'a str>>,
    pub stock: Option<i32>,
    pub price: Option<f64>,
    pub images: Option<String>,
    pub status: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ProductVariant> for DomainProductVariant {
    type Error = RepositoryError;

    fn try_from(value: ProductVariant) -> Result<Self, Self::Error> {
        let status = value
            .status
            .parse::<VariantStatus>()
            .map_err(|err| RepositoryError::Database(err.to_string()))?;

        Ok(Self {
            id: value.id,
            product_id: value.product_id,
            color_id: value.color_id,
            size_id: value.size_id,
            sku: value.sku,
            stock: value.stock,
            price: value.price,
            images: serde_json::from_str(&value.images)?,
            status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewProductVariant> for NewProductVariant<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainNewProductVariant) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: value.product_id,
            color_id: value.color_id,
            size_id: value.size_id,
            sku: value.sku.as_deref(),
            stock: value.stock,
            price: value.price,
            images: serde_json::to_string(&value.images)?,
            status: value.status.as_str(),
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainUpdateProductVariant> for UpdateProductVariant<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainUpdateProductVariant) -> Result<Self, Self::Error> {
        let images = value
            .images
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        Ok(Self {
            sku: value.sku.as_ref().map(|sku| sku.as_deref()),
            stock: value.stock,
            price: value.price,
            images,
            status: value.status.map(|status| status.as_str()),
            updated_at: value.updated_at,
        })
    }
}
