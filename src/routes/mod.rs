use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

pub mod api;

/// JSON envelope shared by every API response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// Rejects unparseable query strings with the JSON envelope instead of plain text.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error(format!("Invalid query: {err}")));
    InternalError::from_response(err, response).into()
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy", "service": "farm-easy" }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error("Not found"))
}

/// Registers every route; shared by the binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .service(api::api_v1_products)
                .service(api::api_v1_product)
                .service(api::api_v1_product_inquiry)
                .service(api::api_v1_categories)
                .service(api::api_v1_sellers)
                .service(api::api_v1_seller),
        )
        .default_service(web::route().to(not_found));
}
