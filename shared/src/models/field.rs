//! Scalar form fields and autocomplete categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin option that switches to the free-text origin field
pub const OTHER_ORIGIN: &str = "Друго";

/// Maximum characters for text and formatted price fields
pub const MAX_FIELD_CHARS: usize = 50;

/// Autocomplete-enabled field category, as named on the host bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldCategory {
    Manufacturer,
    Importer,
    Product,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 3] = [
        FieldCategory::Manufacturer,
        FieldCategory::Importer,
        FieldCategory::Product,
    ];

    /// Bridge name of the category
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Manufacturer => "MANUFACTURER",
            FieldCategory::Importer => "IMPORTER",
            FieldCategory::Product => "PRODUCT",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for FieldCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
