pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CategoryRate, TaxRequest, TaxResult};
pub use services::{RateTable, TaxCalculator};
