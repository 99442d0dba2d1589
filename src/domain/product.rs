use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::color::Color;
use crate::domain::pricing::Pricing;
use crate::domain::size::Size;
use crate::domain::slug::Slug;
use crate::pagination::Pagination;

/// Physical measurements used for freight quotes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub weight: f64,
}

/// Storefront flags attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFlags {
    pub on_sale: bool,
    pub is_featured: bool,
    pub is_new: bool,
    /// Whether the product was created with at least one color or size.
    pub has_variants: bool,
    pub show_in_site: bool,
}

impl Default for ProductFlags {
    fn default() -> Self {
        Self {
            on_sale: false,
            is_featured: false,
            is_new: false,
            has_variants: false,
            show_in_site: true,
        }
    }
}

/// Denormalized id + name snapshot of an associated catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSummary {
    pub id: i32,
    pub name: String,
}

impl From<&Color> for AttributeSummary {
    fn from(value: &Color) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

impl From<&Size> for AttributeSummary {
    fn from(value: &Size) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

impl From<&Category> for AttributeSummary {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

/// Product aggregate.
///
/// Pricing and slug can only change through the mutators below, and every
/// mutator refreshes `updated_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) brand_id: i32,
    #[serde(flatten)]
    pub(crate) pricing: Pricing,
    pub(crate) stock: i32,
    pub(crate) sku: Option<String>,
    pub(crate) dimensions: Dimensions,
    pub(crate) flags: ProductFlags,
    pub(crate) slug: Slug,
    pub(crate) images: Vec<String>,
    pub(crate) categories: Vec<AttributeSummary>,
    pub(crate) colors: Vec<AttributeSummary>,
    pub(crate) sizes: Vec<AttributeSummary>,
    pub(crate) created_at: NaiveDateTime,
    pub(crate) updated_at: NaiveDateTime,
}

/// What an applied patch changed, as far as derived fields are concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedChanges {
    pub name_changed: bool,
    pub pricing_changed: bool,
}

impl Product {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn brand_id(&self) -> i32 {
        self.brand_id
    }

    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    pub fn price(&self) -> f64 {
        self.pricing.price()
    }

    pub fn discount(&self) -> f64 {
        self.pricing.discount()
    }

    pub fn final_price(&self) -> f64 {
        self.pricing.final_price()
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn flags(&self) -> ProductFlags {
        self.flags
    }

    pub fn has_variants(&self) -> bool {
        self.flags.has_variants
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn categories(&self) -> &[AttributeSummary] {
        &self.categories
    }

    pub fn colors(&self) -> &[AttributeSummary] {
        &self.colors
    }

    pub fn sizes(&self) -> &[AttributeSummary] {
        &self.sizes
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    pub fn set_brand(&mut self, brand_id: i32) {
        self.brand_id = brand_id;
        self.touch();
    }

    /// Change the base price; the final price follows.
    pub fn set_price(&mut self, price: f64) {
        self.pricing = self.pricing.with_price(price);
        self.touch();
    }

    /// Change the discount percentage; the final price follows.
    pub fn set_discount(&mut self, discount: f64) {
        self.pricing = self.pricing.with_discount(discount);
        self.touch();
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
        self.touch();
    }

    pub fn set_sku(&mut self, sku: Option<String>) {
        self.sku = sku;
        self.touch();
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        self.touch();
    }

    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        self.touch();
    }

    /// Replace the storefront flags. `has_variants` is derived and kept as is.
    pub fn set_flags(&mut self, flags: ProductFlags) {
        self.flags = ProductFlags {
            has_variants: self.flags.has_variants,
            ..flags
        };
        self.touch();
    }

    pub fn mark_has_variants(&mut self, has_variants: bool) {
        self.flags.has_variants = has_variants;
        self.touch();
    }

    pub fn assign_slug(&mut self, slug: Slug) {
        self.slug = slug;
        self.touch();
    }

    pub fn set_categories(&mut self, categories: Vec<AttributeSummary>) {
        self.categories = categories;
        self.touch();
    }

    pub fn set_colors(&mut self, colors: Vec<AttributeSummary>) {
        self.colors = colors;
        self.touch();
    }

    pub fn set_sizes(&mut self, sizes: Vec<AttributeSummary>) {
        self.sizes = sizes;
        self.touch();
    }

    /// Apply every field present in `changes` and report which derived values
    /// need attention (slug on rename, pricing on price/discount change).
    pub fn apply(&mut self, changes: UpdateProduct) -> AppliedChanges {
        let mut applied = AppliedChanges::default();

        if let Some(name) = changes.name
            && name != self.name
        {
            self.rename(name);
            applied.name_changed = true;
        }
        if let Some(description) = changes.description {
            self.set_description(description);
        }
        if let Some(brand_id) = changes.brand_id {
            self.set_brand(brand_id);
        }
        if let Some(price) = changes.price {
            self.set_price(price);
            applied.pricing_changed = true;
        }
        if let Some(discount) = changes.discount {
            self.set_discount(discount);
            applied.pricing_changed = true;
        }
        if let Some(stock) = changes.stock {
            self.set_stock(stock);
        }
        if let Some(sku) = changes.sku {
            self.set_sku(sku);
        }

        let dimensions = Dimensions {
            height: changes.height.unwrap_or(self.dimensions.height),
            width: changes.width.unwrap_or(self.dimensions.width),
            length: changes.length.unwrap_or(self.dimensions.length),
            weight: changes.weight.unwrap_or(self.dimensions.weight),
        };
        if dimensions != self.dimensions {
            self.set_dimensions(dimensions);
        }

        let flags = ProductFlags {
            on_sale: changes.on_sale.unwrap_or(self.flags.on_sale),
            is_featured: changes.is_featured.unwrap_or(self.flags.is_featured),
            is_new: changes.is_new.unwrap_or(self.flags.is_new),
            has_variants: self.flags.has_variants,
            show_in_site: changes.show_in_site.unwrap_or(self.flags.show_in_site),
        };
        if flags != self.flags {
            self.set_flags(flags);
        }

        if let Some(images) = changes.images {
            self.set_images(images);
        }
        if let Some(categories) = changes.categories {
            self.set_categories(categories);
        }
        if let Some(colors) = changes.colors {
            self.set_colors(colors);
        }
        if let Some(sizes) = changes.sizes {
            self.set_sizes(sizes);
        }

        applied
    }

    fn touch(&mut self) {
        self.updated_at = Local::now().naive_utc();
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub brand_id: i32,
    pub pricing: Pricing,
    pub stock: i32,
    pub sku: Option<String>,
    pub dimensions: Dimensions,
    pub flags: ProductFlags,
    /// Provisional slug; replaced once the product id is known.
    pub slug: Slug,
    pub images: Vec<String>,
    pub categories: Vec<AttributeSummary>,
    pub colors: Vec<AttributeSummary>,
    pub sizes: Vec<AttributeSummary>,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with default flags and no associations.
    pub fn new(name: impl Into<String>, brand_id: i32, pricing: Pricing, slug: Slug) -> Self {
        Self {
            name: name.into(),
            description: None,
            brand_id,
            pricing,
            stock: 0,
            sku: None,
            dimensions: Dimensions::default(),
            flags: ProductFlags::default(),
            slug,
            images: Vec::new(),
            categories: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Attach an SKU identifier to the product payload.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_flags(mut self, flags: ProductFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Attach the association snapshots resolved during validation.
    pub fn with_associations(
        mut self,
        categories: Vec<AttributeSummary>,
        colors: Vec<AttributeSummary>,
        sizes: Vec<AttributeSummary>,
    ) -> Self {
        self.categories = categories;
        self.colors = colors;
        self.sizes = sizes;
        self
    }
}

/// Patch data applied to a loaded product by the edit flow.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub brand_id: Option<i32>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub stock: Option<i32>,
    /// `Some(None)` clears the SKU.
    pub sku: Option<Option<String>>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub on_sale: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_new: Option<bool>,
    pub show_in_site: Option<bool>,
    pub images: Option<Vec<String>>,
    pub categories: Option<Vec<AttributeSummary>>,
    pub colors: Option<Vec<AttributeSummary>>,
    pub sizes: Option<Vec<AttributeSummary>>,
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional brand filter.
    pub brand_id: Option<i32>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn brand(mut self, brand_id: i32) -> Self {
        self.brand_id = Some(brand_id);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{datetime, product};
    use super::*;

    #[test]
    fn changing_discount_recomputes_final_price() {
        let mut product = product(1, "Shirt", 100.0, 0.0);
        assert_eq!(product.final_price(), 100.0);

        let applied = product.apply(UpdateProduct::new().discount(20.0));

        assert!(applied.pricing_changed);
        assert!(!applied.name_changed);
        assert_eq!(product.final_price(), 80.0);
        assert!(product.updated_at() > datetime());
    }

    #[test]
    fn renaming_to_the_same_name_is_not_a_change() {
        let mut product = product(1, "Shirt", 100.0, 0.0);

        let applied = product.apply(UpdateProduct::new().name("Shirt"));

        assert!(!applied.name_changed);
        assert_eq!(product.updated_at(), datetime());
    }

    #[test]
    fn set_flags_keeps_derived_has_variants() {
        let mut product = product(1, "Shirt", 100.0, 0.0);
        product.mark_has_variants(true);

        product.set_flags(ProductFlags {
            on_sale: true,
            has_variants: false,
            ..ProductFlags::default()
        });

        assert!(product.flags().on_sale);
        assert!(product.has_variants());
    }

    #[test]
    fn partial_dimensions_keep_other_measurements() {
        let mut product = product(1, "Shirt", 100.0, 0.0);
        product.set_dimensions(Dimensions {
            height: 1.0,
            width: 2.0,
            length: 3.0,
            weight: 4.0,
        });

        product.apply(UpdateProduct {
            weight: Some(0.5),
            ..UpdateProduct::default()
        });

        assert_eq!(
            product.dimensions(),
            Dimensions {
                height: 1.0,
                width: 2.0,
                length: 3.0,
                weight: 0.5,
            }
        );
    }

    #[test]
    fn serializes_pricing_flat() {
        let product = product(3, "Shirt", 50.0, 10.0);
        let value = serde_json::to_value(&product).expect("serialize product");

        assert_eq!(value["final_price"], 45.0);
        assert_eq!(value["slug"], "shirt-acme-3");
    }
}
