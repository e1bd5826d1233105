//! Submission snapshot and the print payload sent to the host

use super::material::MaterialEntry;
use super::size::SizeEntry;
use serde::{Deserialize, Serialize};

/// Normalized snapshot of the whole form at preview/print time
///
/// Built fresh on every preview or print and never mutated afterwards.
/// Prices are already formatted to two decimals, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub product: String,
    pub importer: String,
    pub manufacturer: String,
    pub origin: String,
    pub sizes: Vec<SizeEntry>,
    pub materials: Vec<MaterialEntry>,
    pub price_eur: String,
    pub price_bgn: String,
}

impl SubmissionRecord {
    /// Total number of physical labels
    pub fn label_count(&self) -> u32 {
        self.sizes.iter().map(|s| s.quantity).sum()
    }

    /// Sum of all material percentages
    pub fn material_total(&self) -> i64 {
        self.materials.iter().map(|m| i64::from(m.percentage)).sum()
    }

    /// Sizes repeated once per label, in label order
    pub fn flattened_sizes(&self) -> Vec<String> {
        self.sizes
            .iter()
            .flat_map(|entry| std::iter::repeat_n(entry.size.clone(), entry.quantity as usize))
            .collect()
    }
}

/// JSON payload handed to the host's `printLabel`
///
/// Same fields as [`SubmissionRecord`], except that quantities are
/// expanded into repeated size strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintPayload {
    pub product: String,
    pub importer: String,
    pub manufacturer: String,
    pub origin: String,
    pub sizes: Vec<String>,
    pub materials: Vec<MaterialEntry>,
    pub price_eur: String,
    pub price_bgn: String,
}

impl From<&SubmissionRecord> for PrintPayload {
    fn from(record: &SubmissionRecord) -> Self {
        Self {
            product: record.product.clone(),
            importer: record.importer.clone(),
            manufacturer: record.manufacturer.clone(),
            origin: record.origin.clone(),
            sizes: record.flattened_sizes(),
            materials: record.materials.clone(),
            price_eur: record.price_eur.clone(),
            price_bgn: record.price_bgn.clone(),
        }
    }
}
