use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::catalog::{BrandForm, CategoryForm, ColorForm, SizeForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::catalog::{
    CatalogQuery, create_brand, create_category, create_color, create_size, list_brands,
    list_categories, list_colors, list_sizes, modify_brand, modify_category, modify_color,
    modify_size, remove_brand, remove_category, remove_color, remove_size,
};

#[get("/v1/brands")]
pub async fn api_v1_brands(
    params: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_brands(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list brands"),
    }
}

#[post("/v1/brands")]
pub async fn api_v1_create_brand(
    repo: web::Data<DieselRepository>,
    form: web::Json<BrandForm>,
) -> impl Responder {
    match create_brand(repo.get_ref(), form.into_inner()) {
        Ok(brand) => HttpResponse::Created().json(brand),
        Err(err) => error_response(err, "create brand"),
    }
}

#[put("/v1/brands/{brand_id}")]
pub async fn api_v1_edit_brand(
    brand_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<BrandForm>,
) -> impl Responder {
    match modify_brand(repo.get_ref(), brand_id.into_inner(), form.into_inner()) {
        Ok(brand) => HttpResponse::Ok().json(brand),
        Err(err) => error_response(err, "update brand"),
    }
}

#[delete("/v1/brands/{brand_id}")]
pub async fn api_v1_delete_brand(
    brand_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_brand(repo.get_ref(), brand_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete brand"),
    }
}

#[get("/v1/colors")]
pub async fn api_v1_colors(
    params: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_colors(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list colors"),
    }
}

#[post("/v1/colors")]
pub async fn api_v1_create_color(
    repo: web::Data<DieselRepository>,
    form: web::Json<ColorForm>,
) -> impl Responder {
    match create_color(repo.get_ref(), form.into_inner()) {
        Ok(color) => HttpResponse::Created().json(color),
        Err(err) => error_response(err, "create color"),
    }
}

#[put("/v1/colors/{color_id}")]
pub async fn api_v1_edit_color(
    color_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<ColorForm>,
) -> impl Responder {
    match modify_color(repo.get_ref(), color_id.into_inner(), form.into_inner()) {
        Ok(color) => HttpResponse::Ok().json(color),
        Err(err) => error_response(err, "update color"),
    }
}

#[delete("/v1/colors/{color_id}")]
pub async fn api_v1_delete_color(
    color_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_color(repo.get_ref(), color_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete color"),
    }
}

#[get("/v1/sizes")]
pub async fn api_v1_sizes(
    params: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_sizes(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list sizes"),
    }
}

#[post("/v1/sizes")]
pub async fn api_v1_create_size(
    repo: web::Data<DieselRepository>,
    form: web::Json<SizeForm>,
) -> impl Responder {
    match create_size(repo.get_ref(), form.into_inner()) {
        Ok(size) => HttpResponse::Created().json(size),
        Err(err) => error_response(err, "create size"),
    }
}

#[put("/v1/sizes/{size_id}")]
pub async fn api_v1_edit_size(
    size_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<SizeForm>,
) -> impl Responder {
    match modify_size(repo.get_ref(), size_id.into_inner(), form.into_inner()) {
        Ok(size) => HttpResponse::Ok().json(size),
        Err(err) => error_response(err, "update size"),
    }
}

#[delete("/v1/sizes/{size_id}")]
pub async fn api_v1_delete_size(
    size_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_size(repo.get_ref(), size_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete size"),
    }
}

#[get("/v1/categories")]
pub async fn api_v1_categories(
    params: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_categories(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list categories"),
    }
}

#[post("/v1/categories")]
pub async fn api_v1_create_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response(err, "create category"),
    }
}

#[put("/v1/categories/{category_id}")]
pub async fn api_v1_edit_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<CategoryForm>,
) -> impl Responder {
    match modify_category(repo.get_ref(), category_id.into_inner(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, "update category"),
    }
}

#[delete("/v1/categories/{category_id}")]
pub async fn api_v1_delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match remove_category(repo.get_ref(), category_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete category"),
    }
}

/// Register every brand, color, size and category endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_v1_brands)
        .service(api_v1_create_brand)
        .service(api_v1_edit_brand)
        .service(api_v1_delete_brand)
        .service(api_v1_colors)
        .service(api_v1_create_color)
        .service(api_v1_edit_color)
        .service(api_v1_delete_color)
        .service(api_v1_sizes)
        .service(api_v1_create_size)
        .service(api_v1_edit_size)
        .service(api_v1_delete_size)
        .service(api_v1_categories)
        .service(api_v1_create_category)
        .service(api_v1_edit_category)
        .service(api_v1_delete_category);
}
