//! Snapshot of the whole form into a [`SubmissionRecord`]

use crate::editor::{MaterialEditor, SizeEditor};
use crate::price;
use serde::{Deserialize, Serialize};
use shared::models::{FieldCategory, OTHER_ORIGIN, SubmissionRecord};

/// Scalar inputs of the form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub product: String,
    pub importer: String,
    pub manufacturer: String,
    /// Selected origin option; [`OTHER_ORIGIN`] means "use `custom_origin`"
    pub origin: String,
    pub custom_origin: String,
    pub price_eur: String,
    pub price_bgn: String,
}

impl FormFields {
    /// Whether the free-text origin input is in use
    pub fn uses_custom_origin(&self) -> bool {
        self.origin == OTHER_ORIGIN
    }

    /// Origin as it will appear on the label
    ///
    /// The custom value replaces the sentinel unconditionally, even when
    /// empty.
    pub fn resolved_origin(&self) -> &str {
        if self.uses_custom_origin() {
            &self.custom_origin
        } else {
            &self.origin
        }
    }

    /// Text of an autocomplete-backed field
    pub fn autocomplete_value(&self, category: FieldCategory) -> &str {
        match category {
            FieldCategory::Manufacturer => &self.manufacturer,
            FieldCategory::Importer => &self.importer,
            FieldCategory::Product => &self.product,
        }
    }

    pub fn autocomplete_value_mut(&mut self, category: FieldCategory) -> &mut String {
        match category {
            FieldCategory::Manufacturer => &mut self.manufacturer,
            FieldCategory::Importer => &mut self.importer,
            FieldCategory::Product => &mut self.product,
        }
    }
}

/// Read scalar fields and both editors into a submission record
///
/// Partial rows are left out. Prices are normalized to two decimals.
/// Text fields are copied untrimmed; trimming is the validator's business.
pub fn collect(fields: &FormFields, sizes: &SizeEditor, materials: &MaterialEditor) -> SubmissionRecord {
    SubmissionRecord {
        product: fields.product.clone(),
        importer: fields.importer.clone(),
        manufacturer: fields.manufacturer.clone(),
        origin: fields.resolved_origin().to_string(),
        sizes: sizes.entries(),
        materials: materials.entries(),
        price_eur: price::format_price(&fields.price_eur),
        price_bgn: price::format_price(&fields.price_bgn),
    }
}
