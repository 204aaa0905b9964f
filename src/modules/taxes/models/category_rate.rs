use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::{rate_to_f64, rate_to_percent};
use crate::core::{AppError, Result};

/// Largest number of decimal places a rate may carry, so its percentage is whole
pub const MAX_RATE_SCALE: u32 = 2;

/// Normalize a category key for lookup: trimmed and lowercased
pub fn normalize_category(key: &str) -> String {
    key.trim().to_lowercase()
}

/// A tax rate bound to a product category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRate {
    key: String,
    rate: Decimal,
    percent: u8,
    factor: f64,
}

impl CategoryRate {
    /// Create a validated category rate
    ///
    /// # Arguments
    /// * `key` - Category name, normalized before storage
    /// * `rate` - Fraction of one in `[0, 1]` with at most two decimals
    pub fn new(key: &str, rate: Decimal) -> Result<Self> {
        let key = normalize_category(key);
        if key.is_empty() {
            return Err(AppError::configuration("Category key cannot be empty"));
        }

        Self::validate_rate(&key, rate)?;

        let percent = rate_to_percent(rate).ok_or_else(|| {
            AppError::configuration(format!("Tax rate for '{}' has no whole percentage", key))
        })?;
        let factor = rate_to_f64(rate).ok_or_else(|| {
            AppError::configuration(format!("Tax rate for '{}' is not representable", key))
        })?;

        Ok(Self {
            key,
            rate,
            percent,
            factor,
        })
    }

    /// Normalized category key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rate as a fraction of one
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Rate as a whole percentage
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Rate as a binary float multiplier
    pub fn factor(&self) -> f64 {
        self.factor
    }

    fn validate_rate(key: &str, rate: Decimal) -> Result<()> {
        if rate < Decimal::ZERO {
            return Err(AppError::configuration(format!(
                "Tax rate for '{}' cannot be negative",
                key
            )));
        }

        if rate > Decimal::ONE {
            return Err(AppError::configuration(format!(
                "Tax rate for '{}' cannot exceed 1.0 (100%)",
                key
            )));
        }

        if rate.normalize().scale() > MAX_RATE_SCALE {
            return Err(AppError::configuration(format!(
                "Tax rate for '{}' must be a whole percentage",
                key
            )));
        }

        Ok(())
    }
}

/// One row of the `GET /tipos-productos` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTypeInfo {
    #[serde(rename = "tipoProducto")]
    pub category: String,
    #[serde(rename = "porcentajeIVA")]
    pub percent: u8,
}

impl From<&CategoryRate> for ProductTypeInfo {
    fn from(entry: &CategoryRate) -> Self {
        Self {
            category: entry.key().to_string(),
            percent: entry.percent(),
        }
    }
}
