//! Garment size model

use serde::{Deserialize, Serialize};

/// Minimum labels per size row
pub const QUANTITY_MIN: u32 = 1;
/// Maximum labels per size row
pub const QUANTITY_MAX: u32 = 99;

/// Letter size marking a garment without a size
pub const SIZE_NOT_APPLICABLE: &str = "-";

/// Letter sizes offered in `letters` mode, in picker order
pub const LETTER_SIZES: [&str; 8] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL", SIZE_NOT_APPLICABLE];

/// Smallest numeric size
pub const NUMERIC_SIZE_MIN: u32 = 20;
/// Largest numeric size
pub const NUMERIC_SIZE_MAX: u32 = 60;
/// Numeric sizes advance in steps of this value
pub const NUMERIC_SIZE_STEP: u32 = 2;

/// How size values are entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    #[default]
    Letters,
    Numeric,
}

impl SizeMode {
    /// Whether `value` belongs to this mode's domain
    ///
    /// Only used for hints; size values are never rejected on this basis.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            SizeMode::Letters => LETTER_SIZES.contains(&value),
            SizeMode::Numeric => value.parse::<u32>().is_ok_and(|n| {
                (NUMERIC_SIZE_MIN..=NUMERIC_SIZE_MAX).contains(&n)
                    && (n - NUMERIC_SIZE_MIN) % NUMERIC_SIZE_STEP == 0
            }),
        }
    }
}

/// Clamp a quantity into `[QUANTITY_MIN, QUANTITY_MAX]`
#[inline]
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(QUANTITY_MIN as i64, QUANTITY_MAX as i64) as u32
}

/// One size line of a submission with its label count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub size: String,
    pub quantity: u32,
}

impl SizeEntry {
    pub fn new(size: impl Into<String>, quantity: u32) -> Self {
        Self {
            size: size.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_domain() {
        assert!(SizeMode::Letters.accepts("M"));
        assert!(SizeMode::Letters.accepts("-"));
        assert!(!SizeMode::Letters.accepts("40"));
        assert!(!SizeMode::Letters.accepts("m"));
    }

    #[test]
    fn test_numeric_domain() {
        assert!(SizeMode::Numeric.accepts("20"));
        assert!(SizeMode::Numeric.accepts("40"));
        assert!(SizeMode::Numeric.accepts("60"));
        assert!(!SizeMode::Numeric.accepts("41"));
        assert!(!SizeMode::Numeric.accepts("18"));
        assert!(!SizeMode::Numeric.accepts("62"));
        assert!(!SizeMode::Numeric.accepts("M"));
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-5), 1);
        assert_eq!(clamp_quantity(42), 42);
        assert_eq!(clamp_quantity(150), 99);
    }

    #[test]
    fn test_size_mode_serde() {
        assert_eq!(serde_json::to_string(&SizeMode::Numeric).unwrap(), "\"numeric\"");
        let mode: SizeMode = serde_json::from_str("\"letters\"").unwrap();
        assert_eq!(mode, SizeMode::Letters);
    }
}
