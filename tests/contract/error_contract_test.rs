// Contract tests for error responses
//
// Every failure must come back as a JSON object with an "error" string and the
// status code matching its kind.

use actix_web::{test, App};
use serde_json::{json, Value};

use iva_api::middleware::ErrorHandler;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

macro_rules! app {
    () => {
        test::init_service(App::new().wrap(ErrorHandler).configure(configure_test_app)).await
    };
}

#[actix_web::test]
async fn test_unknown_route_404() {
    let app = app!();
    let req = test::TestRequest::get().uri("/no-existe").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Endpoint no encontrado");
    assert_eq!(
        body["endpoints_disponibles"],
        json!(["POST /calcular-iva", "GET /tipos-productos", "GET /health"])
    );
}

#[actix_web::test]
async fn test_wrong_method_405_on_every_route() {
    let app = app!();

    for (method, uri) in [
        (actix_web::http::Method::GET, "/calcular-iva"),
        (actix_web::http::Method::PUT, "/calcular-iva"),
        (actix_web::http::Method::POST, "/tipos-productos"),
        (actix_web::http::Method::DELETE, "/health"),
    ] {
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri(uri)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 405, "{} {}", method, uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Método no permitido para este endpoint");
    }
}

#[actix_web::test]
async fn test_non_json_content_type() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/calcular-iva")
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload("nombreProducto=X")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Content-Type debe ser application/json");
}

#[actix_web::test]
async fn test_broken_json() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/calcular-iva")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"nombreProducto\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_error_body(&body);
}

#[actix_web::test]
async fn test_invalid_field_types() {
    let app = app!();

    let cases = [
        (
            json!({"nombreProducto": 1, "tipoProducto": "cafe", "valorSinIVA": 1}),
            "nombreProducto debe ser una cadena no vacía",
        ),
        (
            json!({"nombreProducto": "X", "tipoProducto": " ", "valorSinIVA": 1}),
            "tipoProducto debe ser una cadena no vacía",
        ),
        (
            json!({"nombreProducto": "X", "tipoProducto": "cafe", "valorSinIVA": "mucho"}),
            "valorSinIVA debe ser un número positivo",
        ),
    ];

    for (payload, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/calcular-iva")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected);
    }
}

#[actix_web::test]
async fn test_missing_field_reported_before_type_error() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/calcular-iva")
        .set_json(json!({"nombreProducto": 42, "valorSinIVA": 10}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Campos requeridos faltantes: tipoProducto");
    assert!(body["campos_requeridos"].is_array());
}
