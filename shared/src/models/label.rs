//! Per-unit label document

use super::material::MaterialEntry;
use serde::{Deserialize, Serialize};

/// Fully resolved content of one physical label
///
/// Indices are 1-based. `unit_index`/`unit_count` count within one size,
/// `global_index`/`global_count` across the whole print run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDocument {
    pub size: String,
    pub origin: String,
    pub manufacturer: String,
    pub importer: String,
    pub product: String,
    pub materials: Vec<MaterialEntry>,
    pub price_eur: String,
    pub price_bgn: String,
    pub unit_index: u32,
    pub unit_count_for_size: u32,
    pub global_index: u32,
    pub global_count: u32,
}
