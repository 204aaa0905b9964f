//! IVA Colombia API Library
//!
//! Computes Colombian value-added tax per product category and serves it over a JSON HTTP API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::configure;
pub use modules::health;
pub use modules::taxes;
