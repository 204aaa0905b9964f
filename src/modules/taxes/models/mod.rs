pub mod category_rate;
pub mod tax_request;
pub mod tax_result;

pub use category_rate::{normalize_category, CategoryRate, ProductTypeInfo};
pub use tax_request::{TaxRequest, REQUIRED_FIELDS};
pub use tax_result::{ProductTypesResponse, SuccessResponse, TaxResult};
