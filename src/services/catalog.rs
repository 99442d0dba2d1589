//! List, create, modify and remove the lookup records products refer to.

use serde::Deserialize;

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::color::Color;
use crate::domain::listing::ListQuery;
use crate::domain::product::ProductListQuery;
use crate::domain::size::Size;
use crate::forms::catalog::{BrandForm, CategoryForm, ColorForm, SizeForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    BrandReader, BrandWriter, CategoryReader, CategoryWriter, ColorReader, ColorWriter,
    ProductCategoryReader, ProductColorReader, ProductReader, ProductSizeReader, SizeReader,
    SizeWriter,
};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the catalog listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Optional case-insensitive search applied to names.
    pub search: Option<String>,
    /// Page number requested by the caller (1-based).
    pub page: Option<usize>,
}

impl CatalogQuery {
    fn into_list_query(self) -> (usize, ListQuery) {
        let page = self.page.unwrap_or(1).max(1);
        let mut query = ListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
        if let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
        {
            query = query.search(term);
        }
        (page, query)
    }
}

fn name_conflict(entity: &str, name: &str) -> ServiceError {
    ServiceError::Conflict(format!("{entity} name already in use: {name}"))
}

fn in_use(entity: &str, id: i32, products: usize) -> ServiceError {
    ServiceError::Conflict(format!("{entity} {id} is used by {products} product(s)"))
}

/// Fetches a page of brands.
pub fn list_brands<R>(repo: &R, query: CatalogQuery) -> ServiceResult<Paginated<Brand>>
where
    R: BrandReader + ?Sized,
{
    let (page, list_query) = query.into_list_query();
    let (total, brands) = repo.list_brands(list_query).map_err(ServiceError::from)?;
    Ok(Paginated::new(brands, page, total, DEFAULT_ITEMS_PER_PAGE))
}

/// Creates a brand with a name no other brand uses.
pub fn create_brand<R>(repo: &R, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    let new_brand = form
        .into_new_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_brand_by_name(&new_brand.name)?.is_some() {
        return Err(name_conflict("brand", &new_brand.name));
    }

    repo.create_brand(&new_brand).map_err(ServiceError::from)
}

/// Renames a brand.
pub fn modify_brand<R>(repo: &R, brand_id: i32, form: BrandForm) -> ServiceResult<Brand>
where
    R: BrandReader + BrandWriter + ?Sized,
{
    let update = form
        .into_update_brand()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.get_brand_by_id(brand_id)?
        .ok_or_else(|| ServiceError::not_found("Brand", brand_id))?;

    if let Some(existing) = repo.get_brand_by_name(&update.name)?
        && existing.id != brand_id
    {
        return Err(name_conflict("brand", &update.name));
    }

    repo.update_brand(brand_id, &update).map_err(ServiceError::from)
}

/// Deletes a brand no product refers to.
pub fn remove_brand<R>(repo: &R, brand_id: i32) -> ServiceResult<()>
where
    R: BrandReader + BrandWriter + ProductReader + ?Sized,
{
    repo.get_brand_by_id(brand_id)?
        .ok_or_else(|| ServiceError::not_found("Brand", brand_id))?;

    let (products, _) = repo.list_products(ProductListQuery::new().brand(brand_id).paginate(1, 1))?;
    if products > 0 {
        return Err(in_use("brand", brand_id, products));
    }

    repo.delete_brand(brand_id).map_err(ServiceError::from)
}

/// Fetches a page of colors.
pub fn list_colors<R>(repo: &R, query: CatalogQuery) -> ServiceResult<Paginated<Color>>
where
    R: ColorReader + ?Sized,
{
    let (page, list_query) = query.into_list_query();
    let (total, colors) = repo.list_colors(list_query).map_err(ServiceError::from)?;
    Ok(Paginated::new(colors, page, total, DEFAULT_ITEMS_PER_PAGE))
}

/// Creates a color with a name no other color uses.
pub fn create_color<R>(repo: &R, form: ColorForm) -> ServiceResult<Color>
where
    R: ColorReader + ColorWriter + ?Sized,
{
    let new_color = form
        .into_new_color()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_color_by_name(&new_color.name)?.is_some() {
        return Err(name_conflict("color", &new_color.name));
    }

    repo.create_color(&new_color).map_err(ServiceError::from)
}

pub fn modify_color<R>(repo: &R, color_id: i32, form: ColorForm) -> ServiceResult<Color>
where
    R: ColorReader + ColorWriter + ?Sized,
{
    let update = form
        .into_update_color()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.get_color_by_id(color_id)?
        .ok_or_else(|| ServiceError::not_found("Color", color_id))?;

    if let Some(existing) = repo.get_color_by_name(&update.name)?
        && existing.id != color_id
    {
        return Err(name_conflict("color", &update.name));
    }

    repo.update_color(color_id, &update).map_err(ServiceError::from)
}

/// Deletes a color that no product is offered in.
pub fn remove_color<R>(repo: &R, color_id: i32) -> ServiceResult<()>
where
    R: ColorReader + ColorWriter + ProductColorReader + ?Sized,
{
    repo.get_color_by_id(color_id)?
        .ok_or_else(|| ServiceError::not_found("Color", color_id))?;

    let links = repo.list_color_products(color_id)?;
    if !links.is_empty() {
        return Err(in_use("color", color_id, links.len()));
    }

    repo.delete_color(color_id).map_err(ServiceError::from)
}

/// Fetches a page of sizes.
pub fn list_sizes<R>(repo: &R, query: CatalogQuery) -> ServiceResult<Paginated<Size>>
where
    R: SizeReader + ?Sized,
{
    let (page, list_query) = query.into_list_query();
    let (total, sizes) = repo.list_sizes(list_query).map_err(ServiceError::from)?;
    Ok(Paginated::new(sizes, page, total, DEFAULT_ITEMS_PER_PAGE))
}

pub fn create_size<R>(repo: &R, form: SizeForm) -> ServiceResult<Size>
where
    R: SizeReader + SizeWriter + ?Sized,
{
    let new_size = form
        .into_new_size()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_size_by_name(&new_size.name)?.is_some() {
        return Err(name_conflict("size", &new_size.name));
    }

    repo.create_size(&new_size).map_err(ServiceError::from)
}

pub fn modify_size<R>(repo: &R, size_id: i32, form: SizeForm) -> ServiceResult<Size>
where
    R: SizeReader + SizeWriter + ?Sized,
{
    let update = form
        .into_update_size()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.get_size_by_id(size_id)?
        .ok_or_else(|| ServiceError::not_found("Size", size_id))?;

    if let Some(existing) = repo.get_size_by_name(&update.name)?
        && existing.id != size_id
    {
        return Err(name_conflict("size", &update.name));
    }

    repo.update_size(size_id, &update).map_err(ServiceError::from)
}

pub fn remove_size<R>(repo: &R, size_id: i32) -> ServiceResult<()>
where
    R: SizeReader + SizeWriter + ProductSizeReader + ?Sized,
{
    repo.get_size_by_id(size_id)?
        .ok_or_else(|| ServiceError::not_found("Size", size_id))?;

    let links = repo.list_size_products(size_id)?;
    if !links.is_empty() {
        return Err(in_use("size", size_id, links.len()));
    }

    repo.delete_size(size_id).map_err(ServiceError::from)
}

/// Fetches a page of categories.
pub fn list_categories<R>(repo: &R, query: CatalogQuery) -> ServiceResult<Paginated<Category>>
where
    R: CategoryReader + ?Sized,
{
    let (page, list_query) = query.into_list_query();
    let (total, categories) = repo
        .list_categories(list_query)
        .map_err(ServiceError::from)?;
    Ok(Paginated::new(categories, page, total, DEFAULT_ITEMS_PER_PAGE))
}

pub fn create_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo.get_category_by_name(&new_category.name)?.is_some() {
        return Err(name_conflict("category", &new_category.name));
    }

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

pub fn modify_category<R>(repo: &R, category_id: i32, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let update = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.get_category_by_id(category_id)?
        .ok_or_else(|| ServiceError::not_found("Category", category_id))?;

    if let Some(existing) = repo.get_category_by_name(&update.name)?
        && existing.id != category_id
    {
        return Err(name_conflict("category", &update.name));
    }

    repo.update_category(category_id, &update).map_err(ServiceError::from)
}

/// Deletes a category no product is filed under.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter + ProductCategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)?
        .ok_or_else(|| ServiceError::not_found("Category", category_id))?;

    let links = repo.list_category_products(category_id)?;
    if !links.is_empty() {
        return Err(in_use("category", category_id, links.len()));
    }

    repo.delete_category(category_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use mockall::predicate::eq;

    use crate::domain::product::fixtures::product;
    use crate::domain::product_color::ProductColor;
    use crate::repository::mock::FakeRepo;

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_brand(id: i32, name: &str) -> Brand {
        Brand {
            id,
            name: name.to_string(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_color(id: i32, name: &str) -> Color {
        Color {
            id,
            name: name.to_string(),
            hex: None,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_brands_returns_paginated_data() {
        let mut repo = FakeRepo::new();
        repo.brand_reader
            .expect_list_brands()
            .times(1)
            .withf(|query| {
                assert_eq!(query.search.as_deref(), Some("ac"));
                match &query.pagination {
                    Some(pagination) => {
                        assert_eq!(pagination.page, 2);
                        assert_eq!(pagination.per_page, DEFAULT_ITEMS_PER_PAGE);
                    }
                    None => panic!("expected pagination to be set"),
                }
                true
            })
            .returning(|_| Ok((21, vec![sample_brand(21, "Acme")])));

        let query = CatalogQuery {
            search: Some(" ac ".to_string()),
            page: Some(2),
        };

        let brands = list_brands(&repo, query).expect("brands");

        assert_eq!(brands.page, 2);
        assert_eq!(brands.total_pages, 2);
        assert_eq!(brands.items.len(), 1);
    }

    #[test]
    fn create_brand_rejects_taken_name() {
        let mut repo = FakeRepo::new();
        repo.brand_reader
            .expect_get_brand_by_name()
            .with(eq("Acme"))
            .returning(|name| Ok(Some(sample_brand(1, name))));

        let result = create_brand(
            &repo,
            BrandForm {
                name: " Acme ".to_string(),
            },
        );

        match result {
            Err(ServiceError::Conflict(message)) => {
                assert_eq!(message, "brand name already in use: Acme")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn create_color_persists_sanitized_payload() {
        let mut repo = FakeRepo::new();
        repo.color_reader
            .expect_get_color_by_name()
            .returning(|_| Ok(None));
        repo.color_writer
            .expect_create_color()
            .times(1)
            .withf(|new_color| new_color.name == "Navy Blue" && new_color.hex.is_none())
            .returning(|new_color| Ok(sample_color(5, &new_color.name)));

        let color = create_color(
            &repo,
            ColorForm {
                name: "Navy   Blue".to_string(),
                hex: None,
            },
        )
        .expect("color");

        assert_eq!(color.id, 5);
    }

    #[test]
    fn modify_color_allows_keeping_its_own_name() {
        let mut repo = FakeRepo::new();
        repo.color_reader
            .expect_get_color_by_id()
            .returning(|id| Ok(Some(sample_color(id, "Navy"))));
        repo.color_reader
            .expect_get_color_by_name()
            .returning(|name| Ok(Some(sample_color(5, name))));
        repo.color_writer
            .expect_update_color()
            .times(1)
            .returning(|id, update| {
                let mut color = sample_color(id, &update.name);
                color.hex = update.hex.clone();
                Ok(color)
            });

        let color = modify_color(
            &repo,
            5,
            ColorForm {
                name: "Navy".to_string(),
                hex: Some("#000080".to_string()),
            },
        )
        .expect("color");

        assert_eq!(color.hex.as_deref(), Some("#000080"));
    }

    #[test]
    fn remove_color_rejects_color_in_use() {
        let mut repo = FakeRepo::new();
        repo.color_reader
            .expect_get_color_by_id()
            .returning(|id| Ok(Some(sample_color(id, "Navy"))));
        repo.product_color_reader
            .expect_list_color_products()
            .returning(|color_id| {
                Ok(vec![ProductColor {
                    id: 1,
                    product_id: 10,
                    color_id,
                    created_at: fixed_datetime(),
                    updated_at: fixed_datetime(),
                }])
            });

        let result = remove_color(&repo, 5);

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn remove_size_reports_missing_size() {
        let mut repo = FakeRepo::new();
        repo.size_reader
            .expect_get_size_by_id()
            .returning(|_| Ok(None));

        let result = remove_size(&repo, 8);

        match result {
            Err(ServiceError::NotFound(message)) => assert_eq!(message, "Size not found: 8"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn remove_brand_rejects_brand_with_products() {
        let mut repo = FakeRepo::new();
        repo.brand_reader
            .expect_get_brand_by_id()
            .returning(|id| Ok(Some(sample_brand(id, "Acme"))));
        repo.product_reader
            .expect_list_products()
            .withf(|query| query.brand_id == Some(1))
            .returning(|_| Ok((3, vec![product(1, "Shirt", 10.0, 0.0)])));

        let result = remove_brand(&repo, 1);

        match result {
            Err(ServiceError::Conflict(message)) => {
                assert_eq!(message, "brand 1 is used by 3 product(s)")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn remove_category_deletes_unused_category() {
        let mut repo = FakeRepo::new();
        repo.category_reader
            .expect_get_category_by_id()
            .returning(|id| {
                Ok(Some(Category {
                    id,
                    name: "Tops".to_string(),
                    description: None,
                    created_at: fixed_datetime(),
                    updated_at: fixed_datetime(),
                }))
            });
        repo.product_category_reader
            .expect_list_category_products()
            .returning(|_| Ok(Vec::new()));
        repo.category_writer
            .expect_delete_category()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        assert!(remove_category(&repo, 2).is_ok());
    }
}
