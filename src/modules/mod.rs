use actix_web::web;

pub mod fallback;
pub mod health;
pub mod taxes;

pub use fallback::AVAILABLE_ENDPOINTS;

/// Register every route of the API plus the 404 fallback.
///
/// Shared state (`web::Data<TaxCalculator>`) is registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(taxes::controllers::configure)
        .configure(health::controllers::configure)
        .default_service(web::to(fallback::not_found));
}
