pub mod brand;
pub mod category;
pub mod color;
pub mod product;
pub mod product_category;
pub mod product_color;
pub mod product_size;
pub mod product_variant;
pub mod size;
