use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::products::BrowseProductsForm;
use crate::forms::sellers::BrowseSellersForm;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::ApiResponse;
use crate::services::ServiceError;
use crate::services::categories::show_categories as show_categories_service;
use crate::services::products::{
    browse_products as browse_products_service, send_inquiry as send_inquiry_service,
    show_product as show_product_service,
};
use crate::services::sellers::{
    browse_sellers as browse_sellers_service, show_seller as show_seller_service,
};

fn error_response(err: ServiceError, not_found: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ApiResponse::error(not_found)),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ApiResponse::error(message)),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ApiResponse::error("Internal error"))
        }
    }
}

#[get("/v1/products")]
pub async fn api_v1_products(
    params: web::Query<BrowseProductsForm>,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match browse_products_service(params.into_inner(), server_config.get_ref(), repo.get_ref()) {
        Ok(browse) => {
            let message = format!("Found {} products", browse.page.total);
            HttpResponse::Ok().json(ApiResponse::ok(browse).with_message(message))
        }
        Err(err) => {
            log::warn!("Failed to browse products: {err}");
            error_response(err, "Products not found")
        }
    }
}

#[get("/v1/products/{product_id}")]
pub async fn api_v1_product(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match show_product_service(&product_id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::ok(product)),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[post("/v1/products/{product_id}/inquiries")]
pub async fn api_v1_product_inquiry(
    product_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match send_inquiry_service(&product_id, repo.get_ref()) {
        Ok(product) => HttpResponse::Created()
            .json(ApiResponse::ok(product).with_message("Inquiry recorded")),
        Err(err) => error_response(err, "Product not found"),
    }
}

#[get("/v1/categories")]
pub async fn api_v1_categories(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match show_categories_service(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(ApiResponse::ok(categories)),
        Err(err) => error_response(err, "Categories not found"),
    }
}

#[get("/v1/sellers")]
pub async fn api_v1_sellers(
    params: web::Query<BrowseSellersForm>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match browse_sellers_service(params.into_inner(), repo.get_ref()) {
        Ok(sellers) => {
            let message = format!("Found {} sellers", sellers.len());
            HttpResponse::Ok().json(ApiResponse::ok(sellers).with_message(message))
        }
        Err(err) => error_response(err, "Sellers not found"),
    }
}

#[get("/v1/sellers/{seller_id}")]
pub async fn api_v1_seller(
    seller_id: web::Path<String>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match show_seller_service(&seller_id, repo.get_ref()) {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::ok(profile)),
        Err(err) => error_response(err, "Seller not found"),
    }
}
