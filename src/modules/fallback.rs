//! Responses for requests that match no handler

use actix_web::http::{header, Method};
use actix_web::{web, HttpRequest, HttpResponse, Route};

use crate::core::error::AppError;

/// Routes advertised by the 404 response
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "POST /calcular-iva",
    "GET /tipos-productos",
    "GET /health",
];

/// Unknown path
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    tracing::debug!(path = %req.path(), method = %req.method(), "No route matched");

    Err(AppError::RouteNotFound {
        endpoints: AVAILABLE_ENDPOINTS,
    })
}

/// Known path, unsupported method
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    tracing::debug!(path = %req.path(), method = %req.method(), "Method not allowed");

    Err(AppError::MethodNotAllowed)
}

/// `OPTIONS` route answering 200 with the resource's `Allow` header
pub fn options_route(allow: &'static str) -> Route {
    web::method(Method::OPTIONS).to(move || async move {
        HttpResponse::Ok()
            .insert_header((header::ALLOW, allow))
            .finish()
    })
}
