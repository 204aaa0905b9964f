pub mod rate_table;
pub mod tax_calculator;

pub use rate_table::RateTable;
pub use tax_calculator::TaxCalculator;
