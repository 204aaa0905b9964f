// Decoding of `POST /calcular-iva` bodies.
//
// The raw body is parsed into a `serde_json::Value` first and checked field by field,
// so each failure maps onto exactly one `ValidationError` and the check order is fixed:
// media type, JSON syntax, object shape, presence, names, amount.

use serde_json::{Map, Value};

use crate::core::ValidationError;

pub const FIELD_PRODUCT_NAME: &str = "nombreProducto";
pub const FIELD_CATEGORY: &str = "tipoProducto";
pub const FIELD_NET_AMOUNT: &str = "valorSinIVA";

/// Fields every tax request must carry, in reporting order
pub const REQUIRED_FIELDS: &[&str] = &[FIELD_PRODUCT_NAME, FIELD_CATEGORY, FIELD_NET_AMOUNT];

/// A validated request to compute IVA for one product
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRequest {
    /// Non-blank product name, kept exactly as sent
    pub product_name: String,
    /// Non-blank category key, not yet normalized
    pub category: String,
    /// Finite, non-negative amount before tax
    pub net_amount: f64,
}

impl TaxRequest {
    /// Decode and validate a request body.
    ///
    /// # Arguments
    /// * `content_type` - Media type of the request without parameters
    /// * `body` - Raw request bytes
    pub fn from_body(content_type: &str, body: &[u8]) -> Result<Self, ValidationError> {
        if !is_json_media_type(content_type) {
            return Err(ValidationError::MalformedBody(
                "Content-Type debe ser application/json".to_string(),
            ));
        }

        let value: Value = serde_json::from_slice(body).map_err(|_| {
            ValidationError::MalformedBody(
                "El cuerpo de la solicitud no es un JSON válido".to_string(),
            )
        })?;

        Self::from_json(&value)
    }

    /// Validate an already parsed JSON document
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let fields = value.as_object().ok_or_else(|| {
            ValidationError::MalformedBody("El cuerpo JSON debe ser un objeto".to_string())
        })?;

        check_required(fields)?;

        let product_name = non_blank_string(&fields[FIELD_PRODUCT_NAME])
            .ok_or(ValidationError::InvalidProductName)?;
        let category =
            non_blank_string(&fields[FIELD_CATEGORY]).ok_or(ValidationError::InvalidCategory)?;
        let net_amount = coerce_net_amount(&fields[FIELD_NET_AMOUNT])?;

        Ok(Self {
            product_name,
            category,
            net_amount,
        })
    }
}

/// `application/json` or any `application/*+json` type
pub fn is_json_media_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn check_required(fields: &Map<String, Value>) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !fields.contains_key(*field))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields {
            missing,
            required: REQUIRED_FIELDS,
        })
    }
}

fn non_blank_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Numbers are taken as-is, numeric strings are parsed after trimming
fn coerce_net_amount(value: &Value) -> Result<f64, ValidationError> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or(ValidationError::InvalidNetAmount)?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidNetAmount);
    }

    Ok(amount)
}
