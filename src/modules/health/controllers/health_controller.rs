use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::core::timestamp::now_iso8601;
use crate::modules::fallback::{method_not_allowed, options_route};

/// API version reported by the health check
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// GET /health - Liveness probe
/// The service has no dependencies, so answering at all means healthy
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "OK".to_string(),
        timestamp: now_iso8601(),
        version: API_VERSION.to_string(),
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .route(web::head().to(health_check))
            .route(options_route("GET, HEAD, OPTIONS"))
            .default_service(web::to(method_not_allowed)),
    );
}
