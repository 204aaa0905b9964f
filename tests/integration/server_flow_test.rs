// End-to-end flow against a real HTTP server
//
// Boots the application on a random port with actix-test and drives it with awc,
// the same way an external client would.

use actix_web::http::StatusCode;
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

#[actix_web::test]
async fn test_health_over_http() {
    let srv = spawn_test_server();

    let mut response = srv.get("/health").send().await.unwrap();
    assert_success(&response);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
}

#[actix_web::test]
async fn test_every_category_computes() {
    let srv = spawn_test_server();

    let mut response = srv.get("/tipos-productos").send().await.unwrap();
    assert_success(&response);
    let listing: Value = response.json().await.unwrap();

    for entry in listing["data"].as_array().unwrap() {
        let category = entry["tipoProducto"].as_str().unwrap();
        let payload = TestDataFactory::tax_payload("Producto", category, 2500.0);

        let mut response = srv.post("/calcular-iva").send_json(&payload).await.unwrap();
        assert_status(&response, StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        let data = &body["data"];
        assert_eq!(data["tipoProducto"], category);
        assert_eq!(data["porcentajeIVA"], entry["porcentajeIVA"]);
        assert_total_consistent(data);
    }
}

#[actix_web::test]
async fn test_rejections_over_http() {
    let srv = spawn_test_server();

    let mut response = srv
        .post("/calcular-iva")
        .send_json(&json!({"tipoProducto": "cafe", "valorSinIVA": 100}))
        .await
        .unwrap();
    assert_status(&response, StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_error_body(&body);
    assert_eq!(body["campos_requeridos"].as_array().unwrap().len(), 3);

    let mut response = srv.get("/desconocido").send().await.unwrap();
    assert_status(&response, StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_error_body(&body);
}
