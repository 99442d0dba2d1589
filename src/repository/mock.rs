use mockall::mock;

use super::{
    BrandReader, BrandWriter, CategoryReader, CategoryWriter, ColorReader, ColorWriter,
    ProductCategoryReader, ProductCategoryWriter, ProductColorReader, ProductColorWriter,
    ProductReader, ProductSizeReader, ProductSizeWriter, ProductVariantReader,
    ProductVariantWriter, ProductWriter, RepositoryResult, SizeReader, SizeWriter,
};
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

mock! {
    pub BrandReader {}

    impl BrandReader for BrandReader {
        fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>>;
        fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>>;
        fn list_brands(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Brand>)>;
    }
}

mock! {
    pub BrandWriter {}

    impl BrandWriter for BrandWriter {
        fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand>;
        fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand>;
        fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ColorReader {}

    impl ColorReader for ColorReader {
        fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<Color>>;
        fn get_color_by_name(&self, name: &str) -> RepositoryResult<Option<Color>>;
        fn list_colors(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Color>)>;
    }
}

mock! {
    pub ColorWriter {}

    impl ColorWriter for ColorWriter {
        fn create_color(&self, new_color: &NewColor) -> RepositoryResult<Color>;
        fn update_color(&self, color_id: i32, updates: &UpdateColor) -> RepositoryResult<Color>;
        fn delete_color(&self, color_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub SizeReader {}

    impl SizeReader for SizeReader {
        fn get_size_by_id(&self, id: i32) -> RepositoryResult<Option<Size>>;
        fn get_size_by_name(&self, name: &str) -> RepositoryResult<Option<Size>>;
        fn list_sizes(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Size>)>;
    }
}

mock! {
    pub SizeWriter {}

    impl SizeWriter for SizeWriter {
        fn create_size(&self, new_size: &NewSize) -> RepositoryResult<Size>;
        fn update_size(&self, size_id: i32, updates: &UpdateSize) -> RepositoryResult<Size>;
        fn delete_size(&self, size_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Category>)>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_by_name(&self, name: &str) -> RepositoryResult<Option<Product>>;
        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
        fn product_name_exists(&self, name: &str, exclude_id: Option<i32>) -> RepositoryResult<bool>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn save_product(&self, product: &Product) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductColorReader {}

    impl ProductColorReader for ProductColorReader {
        fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColor>>;
        fn list_color_products(&self, color_id: i32) -> RepositoryResult<Vec<ProductColor>>;
    }
}

mock! {
    pub ProductColorWriter {}

    impl ProductColorWriter for ProductColorWriter {
        fn create_product_color(&self, new_link: &NewProductColor) -> RepositoryResult<ProductColor>;
        fn delete_product_colors(&self, product_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ProductSizeReader {}

    impl ProductSizeReader for ProductSizeReader {
        fn list_product_sizes(&self, product_id: i32) -> RepositoryResult<Vec<ProductSize>>;
        fn list_size_products(&self, size_id: i32) -> RepositoryResult<Vec<ProductSize>>;
    }
}

mock! {
    pub ProductSizeWriter {}

    impl ProductSizeWriter for ProductSizeWriter {
        fn create_product_size(&self, new_link: &NewProductSize) -> RepositoryResult<ProductSize>;
        fn delete_product_sizes(&self, product_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ProductCategoryReader {}

    impl ProductCategoryReader for ProductCategoryReader {
        fn list_product_categories(&self, product_id: i32) -> RepositoryResult<Vec<ProductCategory>>;
        fn list_category_products(&self, category_id: i32) -> RepositoryResult<Vec<ProductCategory>>;
    }
}

mock! {
    pub ProductCategoryWriter {}

    impl ProductCategoryWriter for ProductCategoryWriter {
        fn create_product_category(&self, new_link: &NewProductCategory) -> RepositoryResult<ProductCategory>;
        fn delete_product_categories(&self, product_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub ProductVariantReader {}

    impl ProductVariantReader for ProductVariantReader {
        fn get_variant_by_id(&self, id: i32) -> RepositoryResult<Option<ProductVariant>>;
        fn list_variants(&self, product_id: i32) -> RepositoryResult<Vec<ProductVariant>>;
    }
}

mock! {
    pub ProductVariantWriter {}

    impl ProductVariantWriter for ProductVariantWriter {
        fn create_variant(&self, new_variant: &NewProductVariant) -> RepositoryResult<ProductVariant>;
        fn update_variant(&self, variant_id: i32, updates: &UpdateProductVariant) -> RepositoryResult<ProductVariant>;
    }
}

/// Test double that implements every repository trait by delegating to the
/// per-trait mocks, so services with wide trait bounds can be exercised.
#[derive(Default)]
pub struct FakeRepo {
    pub brand_reader: MockBrandReader,
    pub brand_writer: MockBrandWriter,
    pub color_reader: MockColorReader,
    pub color_writer: MockColorWriter,
    pub size_reader: MockSizeReader,
    pub size_writer: MockSizeWriter,
    pub category_reader: MockCategoryReader,
    pub category_writer: MockCategoryWriter,
    pub product_reader: MockProductReader,
    pub product_writer: MockProductWriter,
    pub product_color_reader: MockProductColorReader,
    pub product_color_writer: MockProductColorWriter,
    pub product_size_reader: MockProductSizeReader,
    pub product_size_writer: MockProductSizeWriter,
    pub product_category_reader: MockProductCategoryReader,
    pub product_category_writer: MockProductCategoryWriter,
    pub variant_reader: MockProductVariantReader,
    pub variant_writer: MockProductVariantWriter,
}

impl FakeRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BrandReader for FakeRepo {
    fn get_brand_by_id(&self, id: i32) -> RepositoryResult<Option<Brand>> {
        self.brand_reader.get_brand_by_id(id)
    }

    fn get_brand_by_name(&self, name: &str) -> RepositoryResult<Option<Brand>> {
        self.brand_reader.get_brand_by_name(name)
    }

    fn list_brands(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Brand>)> {
        self.brand_reader.list_brands(query)
    }
}

impl BrandWriter for FakeRepo {
    fn create_brand(&self, new_brand: &NewBrand) -> RepositoryResult<Brand> {
        self.brand_writer.create_brand(new_brand)
    }

    fn update_brand(&self, brand_id: i32, updates: &UpdateBrand) -> RepositoryResult<Brand> {
        self.brand_writer.update_brand(brand_id, updates)
    }

    fn delete_brand(&self, brand_id: i32) -> RepositoryResult<()> {
        self.brand_writer.delete_brand(brand_id)
    }
}

impl ColorReader for FakeRepo {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<Color>> {
        self.color_reader.get_color_by_id(id)
    }

    fn get_color_by_name(&self, name: &str) -> RepositoryResult<Option<Color>> {
        self.color_reader.get_color_by_name(name)
    }

    fn list_colors(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Color>)> {
        self.color_reader.list_colors(query)
    }
}

impl ColorWriter for FakeRepo {
    fn create_color(&self, new_color: &NewColor) -> RepositoryResult<Color> {
        self.color_writer.create_color(new_color)
    }

    fn update_color(&self, color_id: i32, updates: &UpdateColor) -> RepositoryResult<Color> {
        self.color_writer.update_color(color_id, updates)
    }

    fn delete_color(&self, color_id: i32) -> RepositoryResult<()> {
        self.color_writer.delete_color(color_id)
    }
}

impl SizeReader for FakeRepo {
    fn get_size_by_id(&self, id: i32) -> RepositoryResult<Option<Size>> {
        self.size_reader.get_size_by_id(id)
    }

    fn get_size_by_name(&self, name: &str) -> RepositoryResult<Option<Size>> {
        self.size_reader.get_size_by_name(name)
    }

    fn list_sizes(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Size>)> {
        self.size_reader.list_sizes(query)
    }
}

impl SizeWriter for FakeRepo {
    fn create_size(&self, new_size: &NewSize) -> RepositoryResult<Size> {
        self.size_writer.create_size(new_size)
    }

    fn update_size(&self, size_id: i32, updates: &UpdateSize) -> RepositoryResult<Size> {
        self.size_writer.update_size(size_id, updates)
    }

    fn delete_size(&self, size_id: i32) -> RepositoryResult<()> {
        self.size_writer.delete_size(size_id)
    }
}

impl CategoryReader for FakeRepo {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        self.category_reader.get_category_by_id(id)
    }

    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        self.category_reader.get_category_by_name(name)
    }

    fn list_categories(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Category>)> {
        self.category_reader.list_categories(query)
    }
}

impl CategoryWriter for FakeRepo {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        self.category_writer.create_category(new_category)
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category> {
        self.category_writer.update_category(category_id, updates)
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        self.category_writer.delete_category(category_id)
    }
}

impl ProductReader for FakeRepo {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        self.product_reader.get_product_by_id(id)
    }

    fn get_product_by_name(&self, name: &str) -> RepositoryResult<Option<Product>> {
        self.product_reader.get_product_by_name(name)
    }

    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
        self.product_reader.get_product_by_slug(slug)
    }

    fn product_name_exists(&self, name: &str, exclude_id: Option<i32>) -> RepositoryResult<bool> {
        self.product_reader.product_name_exists(name, exclude_id)
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        self.product_reader.list_products(query)
    }
}

impl ProductWriter for FakeRepo {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        self.product_writer.create_product(new_product)
    }

    fn save_product(&self, product: &Product) -> RepositoryResult<Product> {
        self.product_writer.save_product(product)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        self.product_writer.delete_product(product_id)
    }
}

impl ProductColorReader for FakeRepo {
    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColor>> {
        self.product_color_reader.list_product_colors(product_id)
    }

    fn list_color_products(&self, color_id: i32) -> RepositoryResult<Vec<ProductColor>> {
        self.product_color_reader.list_color_products(color_id)
    }
}

impl ProductColorWriter for FakeRepo {
    fn create_product_color(&self, new_link: &NewProductColor) -> RepositoryResult<ProductColor> {
        self.product_color_writer.create_product_color(new_link)
    }

    fn delete_product_colors(&self, product_id: i32) -> RepositoryResult<usize> {
        self.product_color_writer.delete_product_colors(product_id)
    }
}

impl ProductSizeReader for FakeRepo {
    fn list_product_sizes(&self, product_id: i32) -> RepositoryResult<Vec<ProductSize>> {
        self.product_size_reader.list_product_sizes(product_id)
    }

    fn list_size_products(&self, size_id: i32) -> RepositoryResult<Vec<ProductSize>> {
        self.product_size_reader.list_size_products(size_id)
    }
}

impl ProductSizeWriter for FakeRepo {
    fn create_product_size(&self, new_link: &NewProductSize) -> RepositoryResult<ProductSize> {
        self.product_size_writer.create_product_size(new_link)
    }

    fn delete_product_sizes(&self, product_id: i32) -> RepositoryResult<usize> {
        self.product_size_writer.delete_product_sizes(product_id)
    }
}

impl ProductCategoryReader for FakeRepo {
    fn list_product_categories(&self, product_id: i32) -> RepositoryResult<Vec<ProductCategory>> {
        self.product_category_reader
            .list_product_categories(product_id)
    }

    fn list_category_products(&self, category_id: i32) -> RepositoryResult<Vec<ProductCategory>> {
        self.product_category_reader
            .list_category_products(category_id)
    }
}

impl ProductCategoryWriter for FakeRepo {
    fn create_product_category(
        &self,
        new_link: &NewProductCategory,
    ) -> RepositoryResult<ProductCategory> {
        self.product_category_writer
            .create_product_category(new_link)
    }

    fn delete_product_categories(&self, product_id: i32) -> RepositoryResult<usize> {
        self.product_category_writer
            .delete_product_categories(product_id)
    }
}

impl ProductVariantReader for FakeRepo {
    fn get_variant_by_id(&self, id: i32) -> RepositoryResult<Option<ProductVariant>> {
        self.variant_reader.get_variant_by_id(id)
    }

    fn list_variants(&self, product_id: i32) -> RepositoryResult<Vec<ProductVariant>> {
        self.variant_reader.list_variants(product_id)
    }
}

impl ProductVariantWriter for FakeRepo {
    fn create_variant(&self, new_variant: &NewProductVariant) -> RepositoryResult<ProductVariant> {
        self.variant_writer.create_variant(new_variant)
    }

    fn update_variant(
        &self,
        variant_id: i32,
        updates: &UpdateProductVariant,
    ) -> RepositoryResult<ProductVariant> {
        self.variant_writer.update_variant(variant_id, updates)
    }
}
