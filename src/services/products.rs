use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::brand::Brand;
use crate::domain::product::{AttributeSummary, NewProduct, Product, ProductListQuery};
use crate::domain::product_category::NewProductCategory;
use crate::domain::product_color::NewProductColor;
use crate::domain::product_size::NewProductSize;
use crate::domain::product_variant::ProductVariant;
use crate::domain::slug::Slug;
use crate::domain::variant_matrix::{VariantTemplate, build_variants};
use crate::forms::products::{CreateProductForm, EditProductForm, ProductDraft, ProductEdit};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    BrandReader, CategoryReader, ColorReader, ProductCategoryReader, ProductCategoryWriter,
    ProductColorReader, ProductColorWriter, ProductReader, ProductSizeReader, ProductSizeWriter,
    ProductVariantReader, ProductVariantWriter, ProductWriter, SizeReader,
};
use crate::services::associations::{validate_categories, validate_colors, validate_sizes};
use crate::services::{ServiceError, ServiceResult};

/// Largest page size a caller may request.
const MAX_ITEMS_PER_PAGE: usize = 100;

/// Query parameters accepted by the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional search string matched against names and descriptions.
    pub search: Option<String>,
    /// Optional brand filter.
    pub brand_id: Option<i32>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// A product together with its variants and association ids.
#[derive(Debug, Serialize)]
pub struct ProductDetails {
    pub product: Product,
    pub variants: Vec<ProductVariant>,
    pub color_ids: Vec<i32>,
    pub size_ids: Vec<i32>,
    pub category_ids: Vec<i32>,
}

/// Creates a product, its association rows and its variant matrix.
///
/// Invalid input and unresolved references are returned as they are. Any
/// repository failure is logged and reported as [`ServiceError::CreateFailed`].
pub fn create_product<R>(repo: &R, form: CreateProductForm) -> ServiceResult<Product>
where
    R: BrandReader
        + ColorReader
        + SizeReader
        + CategoryReader
        + ProductWriter
        + ProductColorWriter
        + ProductSizeWriter
        + ProductCategoryWriter
        + ProductVariantWriter
        + ?Sized,
{
    let draft = form
        .into_draft()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    persist_new_product(repo, draft).map_err(|err| match err {
        ServiceError::Repository(err) => {
            log::error!("Failed to create product: {err}");
            ServiceError::CreateFailed
        }
        other => other,
    })
}

fn persist_new_product<R>(repo: &R, draft: ProductDraft) -> ServiceResult<Product>
where
    R: BrandReader
        + ColorReader
        + SizeReader
        + CategoryReader
        + ProductWriter
        + ProductColorWriter
        + ProductSizeWriter
        + ProductCategoryWriter
        + ProductVariantWriter
        + ?Sized,
{
    let brand = find_brand(repo, draft.brand_id)?;

    let sizes = validate_sizes(repo, &draft.size_ids)?;
    let colors = validate_colors(repo, &draft.color_ids)?;
    let categories = validate_categories(repo, &draft.category_ids)?;

    // The id is not known yet, so the first slug is disambiguated by time.
    let provisional = Slug::generate(&draft.name, &brand.name, Utc::now().timestamp_millis());

    let mut new_product = NewProduct::new(draft.name, brand.id, draft.pricing, provisional)
        .with_stock(draft.stock)
        .with_dimensions(draft.dimensions)
        .with_flags(draft.flags)
        .with_images(draft.images)
        .with_associations(
            categories.iter().map(AttributeSummary::from).collect(),
            colors.iter().map(AttributeSummary::from).collect(),
            sizes.iter().map(AttributeSummary::from).collect(),
        );
    if let Some(description) = draft.description {
        new_product = new_product.with_description(description);
    }
    if let Some(sku) = draft.sku {
        new_product = new_product.with_sku(sku);
    }

    let created = repo.create_product(&new_product)?;
    let product_id = created.id();

    match complete_new_product(
        repo,
        created,
        &brand,
        &draft.color_ids,
        &draft.size_ids,
        &draft.category_ids,
    ) {
        Ok(product) => Ok(product),
        Err(err) => {
            discard_product(repo, product_id);
            Err(err)
        }
    }
}

/// Finalizes the slug, writes the association rows and the variant matrix.
fn complete_new_product<R>(
    repo: &R,
    mut product: Product,
    brand: &Brand,
    color_ids: &[i32],
    size_ids: &[i32],
    category_ids: &[i32],
) -> ServiceResult<Product>
where
    R: ProductWriter
        + ProductColorWriter
        + ProductSizeWriter
        + ProductCategoryWriter
        + ProductVariantWriter
        + ?Sized,
{
    let slug = Slug::generate(product.name(), &brand.name, product.id());
    product.assign_slug(slug);
    product.mark_has_variants(!color_ids.is_empty() || !size_ids.is_empty());

    let product = repo.save_product(&product)?;

    for &color_id in color_ids {
        repo.create_product_color(&NewProductColor::new(product.id(), color_id))?;
    }
    for &size_id in size_ids {
        repo.create_product_size(&NewProductSize::new(product.id(), size_id))?;
    }
    for &category_id in category_ids {
        repo.create_product_category(&NewProductCategory::new(product.id(), category_id))?;
    }

    let template = VariantTemplate::from(&product);
    for variant in build_variants(product.id(), color_ids, size_ids, &template) {
        repo.create_variant(&variant)?;
    }

    Ok(product)
}

/// Best-effort removal of a partially created product.
fn discard_product<R>(repo: &R, product_id: i32)
where
    R: ProductWriter + ProductColorWriter + ProductSizeWriter + ProductCategoryWriter + ?Sized,
{
    if let Err(err) = repo.delete_product_colors(product_id) {
        log::error!("Failed to remove colors of product {product_id}: {err}");
    }
    if let Err(err) = repo.delete_product_sizes(product_id) {
        log::error!("Failed to remove sizes of product {product_id}: {err}");
    }
    if let Err(err) = repo.delete_product_categories(product_id) {
        log::error!("Failed to remove categories of product {product_id}: {err}");
    }
    if let Err(err) = repo.delete_product(product_id) {
        log::error!("Failed to roll back product {product_id}: {err}");
    }
}

/// Applies a partial edit to an existing product.
///
/// Association ids are validated and refresh the product's snapshots only;
/// existing join rows and variants are left untouched.
pub fn edit_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductReader
        + ProductWriter
        + BrandReader
        + ColorReader
        + SizeReader
        + CategoryReader
        + ?Sized,
{
    apply_product_edit(repo, product_id, form).map_err(|err| match err {
        ServiceError::Repository(err) => {
            log::error!("Failed to update product {product_id}: {err}");
            ServiceError::UpdateFailed("product")
        }
        other => other,
    })
}

fn apply_product_edit<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductReader
        + ProductWriter
        + BrandReader
        + ColorReader
        + SizeReader
        + CategoryReader
        + ?Sized,
{
    let mut product = repo
        .get_product_by_id(product_id)?
        .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

    let ProductEdit {
        mut changes,
        color_ids,
        size_ids,
        category_ids,
    } = form
        .into_edit()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut brand = match changes.brand_id {
        Some(brand_id) => Some(find_brand(repo, brand_id)?),
        None => None,
    };

    if let Some(ids) = size_ids.as_deref() {
        let sizes = validate_sizes(repo, ids)?;
        changes.sizes = Some(sizes.iter().map(AttributeSummary::from).collect());
    }
    if let Some(ids) = color_ids.as_deref() {
        let colors = validate_colors(repo, ids)?;
        changes.colors = Some(colors.iter().map(AttributeSummary::from).collect());
    }
    if let Some(ids) = category_ids.as_deref() {
        let categories = validate_categories(repo, ids)?;
        changes.categories = Some(categories.iter().map(AttributeSummary::from).collect());
    }

    if let Some(name) = changes.name.as_deref()
        && name != product.name()
        && repo.product_name_exists(name, Some(product.id()))?
    {
        return Err(ServiceError::Conflict(format!(
            "product name already in use: {name}"
        )));
    }

    let applied = product.apply(changes);

    if applied.name_changed {
        let brand = match brand.take() {
            Some(brand) => brand,
            None => find_brand(repo, product.brand_id())?,
        };
        let slug = unique_slug(repo, &product, &brand)?;
        product.assign_slug(slug);
    }

    if applied.pricing_changed {
        log::debug!(
            "Product {} repriced to {} ({}% off {})",
            product.id(),
            product.final_price(),
            product.discount(),
            product.price()
        );
    }

    Ok(repo.save_product(&product)?)
}

/// Slug for `product` under its current name, suffixed with a timestamp when
/// another product already holds the same slug.
fn unique_slug<R>(repo: &R, product: &Product, brand: &Brand) -> ServiceResult<Slug>
where
    R: ProductReader + ?Sized,
{
    let mut slug = Slug::generate(product.name(), &brand.name, product.id());

    if let Some(existing) = repo.get_product_by_slug(slug.as_str())?
        && existing.id() != product.id()
    {
        let suffix = Utc::now().timestamp_millis();
        log::warn!(
            "Slug {slug} is already used by product {}, appending {suffix}",
            existing.id()
        );
        slug.append(suffix);
    }

    Ok(slug)
}

/// Loads a product with its variants and association ids.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetails>
where
    R: ProductReader
        + ProductVariantReader
        + ProductColorReader
        + ProductSizeReader
        + ProductCategoryReader
        + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

    let variants = repo.list_variants(product_id).map_err(ServiceError::from)?;
    let color_ids = repo
        .list_product_colors(product_id)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|link| link.color_id)
        .collect();
    let size_ids = repo
        .list_product_sizes(product_id)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|link| link.size_id)
        .collect();
    let category_ids = repo
        .list_product_categories(product_id)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|link| link.category_id)
        .collect();

    Ok(ProductDetails {
        product,
        variants,
        color_ids,
        size_ids,
        category_ids,
    })
}

/// Lists products page by page, optionally filtered by search term and brand.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let ProductsQuery {
        search,
        brand_id,
        page,
        per_page,
    } = query;

    let page = page.unwrap_or(1).max(1);
    let per_page = per_page
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
        .clamp(1, MAX_ITEMS_PER_PAGE);

    let mut list_query = ProductListQuery::new().paginate(page, per_page);
    if let Some(term) = search.as_deref().map(str::trim).filter(|term| !term.is_empty()) {
        list_query = list_query.search(term);
    }
    if let Some(brand_id) = brand_id {
        list_query = list_query.brand(brand_id);
    }

    let (total, products) = repo.list_products(list_query).map_err(ServiceError::from)?;

    Ok(Paginated::new(products, page, total, per_page))
}

fn find_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<Brand>
where
    R: BrandReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)?
        .ok_or_else(|| ServiceError::not_found("Brand", brand_id))
}
