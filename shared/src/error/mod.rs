//! Validation error system for the label form
//!
//! - [`ErrorCode`]: stable numeric codes for every validation rule
//! - [`ErrorCategory`]: classification of codes by range
//! - [`ValidationError`]: one failed rule, with the user-facing message
//! - [`ValidationReport`]: the ordered outcome of a validation pass
//!
//! # Error Code Ranges
//!
//! - 1xxx: Required text fields
//! - 2xxx: Length limits
//! - 3xxx: Size and material collections
//! - 4xxx: Prices
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCode, FormField, ValidationError, ValidationReport};
//!
//! let report = ValidationReport::from(vec![ValidationError::Required(FormField::Product)]);
//! assert!(!report.is_valid());
//! assert_eq!(report.errors()[0].code(), ErrorCode::ProductRequired);
//! ```

mod category;
mod codes;
mod validation;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use validation::{FormField, ValidationError, ValidationReport};
