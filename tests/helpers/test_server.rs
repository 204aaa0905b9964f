// Test Server Helpers
//
// Builds the same application the binary runs: error middleware, shared calculator,
// every route and the 404 fallback.

use actix_web::{web, App};

pub use actix_test::TestServer;

use iva_api::middleware::ErrorHandler;
use iva_api::taxes::TaxCalculator;

/// Register the calculator and all routes, for use with `App::configure`
///
/// # Example
/// ```no_run
/// let app = test::init_service(App::new().wrap(ErrorHandler).configure(configure_test_app)).await;
/// ```
pub fn configure_test_app(cfg: &mut web::ServiceConfig) {
    let calculator = TaxCalculator::colombia().expect("Colombian rate table must be valid");
    cfg.app_data(web::Data::new(calculator))
        .configure(iva_api::configure);
}

/// Spawn a real HTTP server on a random local port
///
/// The server stops when the returned `TestServer` is dropped.
pub fn spawn_test_server() -> TestServer {
    actix_test::start(|| {
        App::new()
            .wrap(ErrorHandler)
            .configure(configure_test_app)
    })
}
