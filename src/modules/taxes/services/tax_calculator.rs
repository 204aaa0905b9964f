use chrono::{DateTime, FixedOffset};

use crate::core::error::AppError;
use crate::core::money::round_amount;
use crate::core::timestamp::{format_iso8601, local_now};
use crate::modules::taxes::models::TaxResult;
use crate::modules::taxes::services::RateTable;

/// TaxCalculator computes IVA for a product against a fixed rate table
#[derive(Debug, Clone)]
pub struct TaxCalculator {
    rates: RateTable,
}

impl TaxCalculator {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Calculator over the fixed Colombian rate table
    pub fn colombia() -> Result<Self, AppError> {
        Ok(Self::new(RateTable::colombia()?))
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Whole percentage for a category, if it is configured
    pub fn lookup_rate(&self, category: &str) -> Option<u8> {
        self.rates.lookup(category).map(|entry| entry.percent())
    }

    /// Compute IVA stamped with the current local time.
    ///
    /// Callers must have validated the inputs: names non-blank, `net_amount` finite
    /// and non-negative.
    pub fn compute(
        &self,
        product_name: &str,
        category: &str,
        net_amount: f64,
    ) -> Result<TaxResult, AppError> {
        self.compute_at(product_name, category, net_amount, local_now())
    }

    /// Compute IVA with an explicit timestamp
    ///
    /// tax = net × rate, total = net + tax; all three are rounded to cents
    /// independently from the unrounded values.
    pub fn compute_at(
        &self,
        product_name: &str,
        category: &str,
        net_amount: f64,
        computed_at: DateTime<FixedOffset>,
    ) -> Result<TaxResult, AppError> {
        let entry = self
            .rates
            .lookup(category)
            .ok_or_else(|| AppError::CategoryNotFound {
                category: category.to_string(),
                available: self.rates.keys(),
            })?;

        let tax_amount = net_amount * entry.factor();
        let total_amount = net_amount + tax_amount;

        Ok(TaxResult {
            product_name: product_name.to_string(),
            category: entry.key().to_string(),
            net_amount: round_amount(net_amount),
            rate_percent: entry.percent(),
            tax_amount: round_amount(tax_amount),
            total_amount: round_amount(total_amount),
            timestamp: format_iso8601(&computed_at),
        })
    }
}
