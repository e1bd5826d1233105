//! Validation error codes
//!
//! Error codes are organized by category:
//! - 1xxx: Required text fields
//! - 2xxx: Length limits
//! - 3xxx: Size and material collections
//! - 4xxx: Prices

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation error code enum
///
/// Represented as u16 values so the host bridge can match on them
/// without parsing localized messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Required ====================
    /// Product name is empty
    ProductRequired = 1001,
    /// Origin is empty
    OriginRequired = 1002,
    /// Manufacturer is empty
    ManufacturerRequired = 1003,
    /// Importer is empty
    ImporterRequired = 1004,

    // ==================== 2xxx: Length ====================
    /// Product name exceeds the length limit
    ProductTooLong = 2001,
    /// Origin exceeds the length limit
    OriginTooLong = 2002,
    /// Manufacturer exceeds the length limit
    ManufacturerTooLong = 2003,
    /// Importer exceeds the length limit
    ImporterTooLong = 2004,
    /// Formatted EUR price exceeds the length limit
    PriceEurTooLong = 2005,
    /// Formatted BGN price exceeds the length limit
    PriceBgnTooLong = 2006,

    // ==================== 3xxx: Collections ====================
    /// No size rows with a value
    SizeRequired = 3001,
    /// No complete material rows
    MaterialRequired = 3002,
    /// Material percentages do not add up to 100
    MaterialTotalMismatch = 3003,

    // ==================== 4xxx: Prices ====================
    /// BGN price is empty
    PriceBgnRequired = 4001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ProductRequired => "Product is required",
            ErrorCode::OriginRequired => "Origin is required",
            ErrorCode::ManufacturerRequired => "Manufacturer is required",
            ErrorCode::ImporterRequired => "Importer is required",

            ErrorCode::ProductTooLong => "Product is too long",
            ErrorCode::OriginTooLong => "Origin is too long",
            ErrorCode::ManufacturerTooLong => "Manufacturer is too long",
            ErrorCode::ImporterTooLong => "Importer is too long",
            ErrorCode::PriceEurTooLong => "EUR price is too long",
            ErrorCode::PriceBgnTooLong => "BGN price is too long",

            ErrorCode::SizeRequired => "At least one size is required",
            ErrorCode::MaterialRequired => "At least one material is required",
            ErrorCode::MaterialTotalMismatch => "Material percentages must total 100%",

            ErrorCode::PriceBgnRequired => "BGN price is required",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1001 => Ok(ErrorCode::ProductRequired),
            1002 => Ok(ErrorCode::OriginRequired),
            1003 => Ok(ErrorCode::ManufacturerRequired),
            1004 => Ok(ErrorCode::ImporterRequired),

            2001 => Ok(ErrorCode::ProductTooLong),
            2002 => Ok(ErrorCode::OriginTooLong),
            2003 => Ok(ErrorCode::ManufacturerTooLong),
            2004 => Ok(ErrorCode::ImporterTooLong),
            2005 => Ok(ErrorCode::PriceEurTooLong),
            2006 => Ok(ErrorCode::PriceBgnTooLong),

            3001 => Ok(ErrorCode::SizeRequired),
            3002 => Ok(ErrorCode::MaterialRequired),
            3003 => Ok(ErrorCode::MaterialTotalMismatch),

            4001 => Ok(ErrorCode::PriceBgnRequired),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
