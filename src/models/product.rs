use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::pricing::Pricing;
use crate::domain::product::{
    Dimensions, NewProduct as DomainNewProduct, Product as DomainProduct, ProductFlags,
};
use crate::domain::slug::Slug;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub brand_id: i32,
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
    pub stock: i32,
    pub sku: Option<String>,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub weight: f64,
    pub on_sale: bool,
    pub is_featured: bool,
    pub is_new: bool,
    pub has_variants: bool,
    pub show_in_site: bool,
    pub slug: String,
    /// JSON array of image URLs.
    pub images: String,
    /// JSON array of `{id, name}` snapshots.
    pub category_snapshot: String,
    pub color_snapshot: String,
    pub size_snapshot: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub brand_id: i32,
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
    pub stock: i32,
    pub sku: Option<&'a str>,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub weight: f64,
    pub on_sale: bool,
    pub is_featured: bool,
    pub is_new: bool,
    pub has_variants: bool,
    pub show_in_site: bool,
    pub slug: &'a str,
    pub images: String,
    pub category_snapshot: String,
    pub color_snapshot: String,
    pub size_snapshot: String,
    pub updated_at: NaiveDateTime,
}

/// Full row overwrite used when saving a mutated aggregate.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct SaveProduct<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub brand_id: i32,
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
    pub stock: i32,
    pub sku: Option<&'a str>,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub weight: f64,
    pub on_sale: bool,
    pub is_featured: bool,
    pub is_new: bool,
    pub has_variants: bool,
    pub show_in_site: bool,
    pub slug: &'a str,
    pub images: String,
    pub category_snapshot: String,
    pub color_snapshot: String,
    pub size_snapshot: String,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = RepositoryError;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        // The final price column is derived; recomputing keeps the aggregate consistent.
        let discount = (value.discount > 0.0).then_some(value.discount);

        Ok(Self {
            id: value.id,
            name: value.name,
            description: value.description,
            brand_id: value.brand_id,
            pricing: Pricing::new(value.price, discount),
            stock: value.stock,
            sku: value.sku,
            dimensions: Dimensions {
                height: value.height,
                width: value.width,
                length: value.length,
                weight: value.weight,
            },
            flags: ProductFlags {
                on_sale: value.on_sale,
                is_featured: value.is_featured,
                is_new: value.is_new,
                has_variants: value.has_variants,
                show_in_site: value.show_in_site,
            },
            slug: Slug::from_persisted(value.slug),
            images: serde_json::from_str(&value.images)?,
            categories: serde_json::from_str(&value.category_snapshot)?,
            colors: serde_json::from_str(&value.color_snapshot)?,
            sizes: serde_json::from_str(&value.size_snapshot)?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainNewProduct> for NewProduct<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainNewProduct) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            brand_id: value.brand_id,
            price: value.pricing.price(),
            discount: value.pricing.discount(),
            final_price: value.pricing.final_price(),
            stock: value.stock,
            sku: value.sku.as_deref(),
            height: value.dimensions.height,
            width: value.dimensions.width,
            length: value.dimensions.length,
            weight: value.dimensions.weight,
            on_sale: value.flags.on_sale,
            is_featured: value.flags.is_featured,
            is_new: value.flags.is_new,
            has_variants: value.flags.has_variants,
            show_in_site: value.flags.show_in_site,
            slug: value.slug.as_str(),
            images: serde_json::to_string(&value.images)?,
            category_snapshot: serde_json::to_string(&value.categories)?,
            color_snapshot: serde_json::to_string(&value.colors)?,
            size_snapshot: serde_json::to_string(&value.sizes)?,
            updated_at: value.updated_at,
        })
    }
}

impl<'a> TryFrom<&'a DomainProduct> for SaveProduct<'a> {
    type Error = RepositoryError;

    fn try_from(value: &'a DomainProduct) -> Result<Self, Self::Error> {
        let dimensions = value.dimensions();
        let flags = value.flags();

        Ok(Self {
            name: value.name(),
            description: value.description(),
            brand_id: value.brand_id(),
            price: value.price(),
            discount: value.discount(),
            final_price: value.final_price(),
            stock: value.stock(),
            sku: value.sku(),
            height: dimensions.height,
            width: dimensions.width,
            length: dimensions.length,
            weight: dimensions.weight,
            on_sale: flags.on_sale,
            is_featured: flags.is_featured,
            is_new: flags.is_new,
            has_variants: flags.has_variants,
            show_in_site: flags.show_in_site,
            slug: value.slug().as_str(),
            images: serde_json::to_string(value.images())?,
            category_snapshot: serde_json::to_string(value.categories())?,
            color_snapshot: serde_json::to_string(value.colors())?,
            size_snapshot: serde_json::to_string(value.sizes())?,
            updated_at: value.updated_at(),
        })
    }
}
