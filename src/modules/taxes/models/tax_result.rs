use serde::Serialize;

/// Outcome of an IVA computation for one product
///
/// Amounts are each rounded to cents from the unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxResult {
    /// Product name as sent by the client
    #[serde(rename = "nombreProducto")]
    pub product_name: String,

    /// Normalized category key
    #[serde(rename = "tipoProducto")]
    pub category: String,

    #[serde(rename = "valorSinIVA")]
    pub net_amount: f64,

    #[serde(rename = "porcentajeIVA")]
    pub rate_percent: u8,

    #[serde(rename = "valorIVA")]
    pub tax_amount: f64,

    #[serde(rename = "valorTotal")]
    pub total_amount: f64,

    /// ISO 8601 local time of the computation
    pub timestamp: String,
}

/// `{"success": true, "data": ...}` envelope used by successful responses
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of `GET /tipos-productos`
#[derive(Debug, Serialize)]
pub struct ProductTypesResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub total_productos: usize,
}

impl<T: Serialize> ProductTypesResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            total_productos: data.len(),
            data,
        }
    }
}
