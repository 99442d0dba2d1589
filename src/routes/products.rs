use actix_web::{HttpResponse, Responder, get, patch, post, web};

use crate::forms::products::{CreateProductForm, EditProductForm};
use crate::forms::variants::EditVariantForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products::{
    ProductsQuery, create_product, edit_product, list_products, load_product,
};
use crate::services::variants::update_variant;

#[get("/v1/products")]
/// Return a page of products filtered by `search` and `brand_id`.
pub async fn api_v1_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list products"),
    }
}

#[post("/v1/products")]
/// Create a product together with its association rows and variants.
pub async fn api_v1_create_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateProductForm>,
) -> impl Responder {
    match create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err, "create product"),
    }
}

#[get("/v1/products/{product_id}")]
pub async fn api_v1_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match load_product(repo.get_ref(), product_id.into_inner()) {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(err) => error_response(err, "load product"),
    }
}

#[patch("/v1/products/{product_id}")]
pub async fn api_v1_edit_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    match edit_product(repo.get_ref(), product_id.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "edit product"),
    }
}

#[patch("/v1/variants/{variant_id}")]
pub async fn api_v1_edit_variant(
    variant_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditVariantForm>,
) -> impl Responder {
    match update_variant(repo.get_ref(), variant_id.into_inner(), form.into_inner()) {
        Ok(variant) => HttpResponse::Ok().json(variant),
        Err(err) => error_response(err, "update variant"),
    }
}

/// Register every product and variant endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_v1_products)
        .service(api_v1_create_product)
        .service(api_v1_product)
        .service(api_v1_edit_product)
        .service(api_v1_edit_variant);
}
