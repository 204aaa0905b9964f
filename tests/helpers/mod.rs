// Test Helper Modules
//
// Shared by the contract and integration suites. Each test binary pulls this in with
// `#[path = "../helpers/mod.rs"] mod helpers;` and uses whatever subset it needs.
//
// Example:
//   #[actix_web::test]
//   async fn test_health() {
//       let srv = spawn_test_server();
//       let response = srv.get("/health").send().await.unwrap();
//       assert_success(&response);
//   }

#![allow(dead_code)]

pub mod test_server;

pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
