//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 1xxx: Required text fields
/// - 2xxx: Length limits
/// - 3xxx: Size and material collections
/// - 4xxx: Prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Required text fields (1xxx)
    Required,
    /// Length limits (2xxx)
    Length,
    /// Size and material collections (3xxx)
    Collection,
    /// Prices (4xxx)
    Price,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..2000 => Self::Required,
            2000..3000 => Self::Length,
            3000..4000 => Self::Collection,
            _ => Self::Price,
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.code())
    }
}
