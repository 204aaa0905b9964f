use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::taxes::models::{normalize_category, CategoryRate};

/// Colombian IVA rates per product category, in percent
const COLOMBIA_RATES: [(&str, i64); 12] = [
    ("cafe", 5),
    ("harina", 5),
    ("pastas", 5),
    ("embutidos", 5),
    ("licores", 19),
    ("cereales", 19),
    ("aceites", 19),
    ("condimentos", 19),
    ("carne", 0),
    ("pescado", 0),
    ("leche", 0),
    ("queso", 0),
];

/// Immutable mapping from category key to tax rate.
///
/// Built once at startup and shared read-only between workers. Iteration follows
/// insertion order; lookups go through a key index.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: Vec<CategoryRate>,
    index: HashMap<String, usize>,
}

impl RateTable {
    /// Build a table from validated entries. Keys must be unique after normalization.
    pub fn new(entries: Vec<CategoryRate>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.key().to_string(), position).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate category key '{}'",
                    entry.key()
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Build a table from `(category, whole percent)` pairs, validating every entry
    pub fn from_percentages(rates: &[(&str, i64)]) -> Result<Self> {
        let entries = rates
            .iter()
            .map(|(key, percent)| CategoryRate::new(key, Decimal::new(*percent, 2)))
            .collect::<Result<Vec<_>>>()?;

        Self::new(entries)
    }

    /// The fixed Colombian table
    pub fn colombia() -> Result<Self> {
        Self::from_percentages(&COLOMBIA_RATES)
    }

    /// Rate for a category, matched case- and whitespace-insensitively.
    /// `None` means the category is simply not taxed here.
    pub fn lookup(&self, category: &str) -> Option<&CategoryRate> {
        self.index
            .get(&normalize_category(category))
            .map(|&position| &self.entries[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRate> {
        self.entries.iter()
    }

    /// Category keys in table order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
