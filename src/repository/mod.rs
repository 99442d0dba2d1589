use crate::db::{DbConnection, DbPool};
use crate::domain::{
    brand::{Brand, NewBrand, UpdateBrand},
    category::{Category, NewCategory, UpdateCategory},
    color::{Color, NewColor, UpdateColor},
    listing::ListQuery,
    product::{NewProduct, Product, ProductListQuery},
    product_category::{NewProductCategory, ProductCategory},
    product_color::{NewProductColor, ProductColor},
    product_size::{NewProductSize, ProductSize},
    product_variant::{NewProductVariant, ProductVariant, UpdateProductVariant},
    size::{NewSize, Size, UpdateSize},
};

pub mod brand;
pub mod category;
pub mod color;
pub mod errors;
pub mod product;
pub mod product_category;
pub mod product_color;
pub mod product_size;
pub mod product_variant;
pub mod size;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over brand records.
pub trait BrandReader {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>>;
    fn list_brands(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Brand>)>;
}

/// Write operations over brand records.
pub trait BrandWriter {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
    fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over color records.
pub trait ColorReader {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<Color>>;
    fn get_color_by_name(&self, name: &str) -> RepositoryResult<Option<Color>>;
    fn list_colors(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Color>)>;
}

/// Write operations over color records.
pub trait ColorWriter {
    fn create_color(&self, new_color: &NewColor) -> RepositoryResult<Color>;
    fn update_color(&self, color_id: i32, updates: &UpdateColor) -> RepositoryResult<Color>;
    fn delete_color(&self, color_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over size records.
pub trait SizeReader {
    fn get_size_by_id(&self, id: i32) -> RepositoryResult<Option<Size>>;
    fn get_size_by_name(&self, name: &str) -> RepositoryResult<Option<Size>>;
    fn list_sizes(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Size>)>;
}

/// Write operations over size records.
pub trait SizeWriter {
    fn create_size(&self, new_size: &NewSize) -> RepositoryResult<Size>;
    fn update_size(&self, size_id: i32, updates: &UpdateSize) -> RepositoryResult<Size>;
    fn delete_size(&self, size_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_by_name(&self, name: &str) -> RepositoryResult<Option<Product>>;
    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    /// Whether a product other than `exclude_id` already uses `name`.
    fn product_name_exists(&self, name: &str, exclude_id: Option<i32>) -> RepositoryResult<bool>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Persist every field of an already stored product.
    fn save_product(&self, product: &Product) -> RepositoryResult<Product>;
    /// Remove a product together with its variants.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product-color associations.
pub trait ProductColorReader {
    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColor>>;
    fn list_color_products(&self, color_id: i32) -> RepositoryResult<Vec<ProductColor>>;
}

/// Write operations over product-color associations.
pub trait ProductColorWriter {
    fn create_product_color(&self, new_link: &NewProductColor) -> RepositoryResult<ProductColor>;
    /// Remove every color association of a product, returning how many were removed.
    fn delete_product_colors(&self, product_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product-size associations.
pub trait ProductSizeReader {
    fn list_product_sizes(&self, product_id: i32) -> RepositoryResult<Vec<ProductSize>>;
    fn list_size_products(&self, size_id: i32) -> RepositoryResult<Vec<ProductSize>>;
}

/// Write operations over product-size associations.
pub trait ProductSizeWriter {
    fn create_product_size(&self, new_link: &NewProductSize) -> RepositoryResult<ProductSize>;
    fn delete_product_sizes(&self, product_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product-category associations.
pub trait ProductCategoryReader {
    fn list_product_categories(&self, product_id: i32) -> RepositoryResult<Vec<ProductCategory>>;
    fn list_category_products(&self, category_id: i32) -> RepositoryResult<Vec<ProductCategory>>;
}

/// Write operations over product-category associations.
pub trait ProductCategoryWriter {
    fn create_product_category(
        &self,
        new_link: &NewProductCategory,
    ) -> RepositoryResult<ProductCategory>;
    fn delete_product_categories(&self, product_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product variants.
pub trait ProductVariantReader {
    fn get_variant_by_id(&self, id: i32) -> RepositoryResult<Option<ProductVariant>>;
    fn list_variants(&self, product_id: i32) -> RepositoryResult<Vec<ProductVariant>>;
}

/// Write operations over product variants.
pub trait ProductVariantWriter {
    fn create_variant(&self, new_variant: &NewProductVariant) -> RepositoryResult<ProductVariant>;
    fn update_variant(
        &self,
        variant_id: i32,
        updates: &UpdateProductVariant,
    ) -> RepositoryResult<ProductVariant>;
}
