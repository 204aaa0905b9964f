//! Tax controller for HTTP endpoints
//!
//! `POST /calcular-iva` validates the body and runs the calculator,
//! `GET /tipos-productos` lists the configured categories.

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};

use crate::core::error::AppError;
use crate::modules::fallback::{method_not_allowed, options_route};
use crate::modules::taxes::models::{
    ProductTypeInfo, ProductTypesResponse, SuccessResponse, TaxRequest,
};
use crate::modules::taxes::services::TaxCalculator;

/// Calculate IVA for one product
///
/// POST /calcular-iva
#[tracing::instrument(skip_all)]
pub async fn calculate_iva(
    req: HttpRequest,
    body: web::Bytes,
    calculator: web::Data<TaxCalculator>,
) -> Result<HttpResponse, AppError> {
    let request = TaxRequest::from_body(req.content_type(), &body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected tax request");
        AppError::from(err)
    })?;

    let result = calculator
        .compute(&request.product_name, &request.category, request.net_amount)
        .map_err(|err| {
            tracing::warn!(category = %request.category, "Unknown product category");
            err
        })?;

    tracing::info!(
        category = %result.category,
        net_amount = result.net_amount,
        tax_amount = result.tax_amount,
        "IVA computed"
    );

    Ok(HttpResponse::Ok().json(SuccessResponse::new(result)))
}

/// List every configured category with its whole percentage, in table order
///
/// GET /tipos-productos
pub async fn list_product_types(calculator: web::Data<TaxCalculator>) -> HttpResponse {
    let data: Vec<ProductTypeInfo> = calculator
        .rates()
        .iter()
        .map(ProductTypeInfo::from)
        .collect();

    HttpResponse::Ok().json(ProductTypesResponse::new(data))
}

/// Configure tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/calcular-iva")
            .route(web::post().to(calculate_iva))
            .route(options_route("OPTIONS, POST"))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/tipos-productos")
            .route(web::get().to(list_product_types))
            .route(web::head().to(list_product_types))
            .route(options_route("GET, HEAD, OPTIONS"))
            .default_service(web::to(method_not_allowed)),
    );
}
