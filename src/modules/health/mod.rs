pub mod controllers;

pub use controllers::health_controller::{HealthResponse, API_VERSION};
