//! Shared types for the garment label workspace
//!
//! Domain models and the validation error taxonomy used by the form
//! engine (`label-form`), the print layer (`label-printer`) and the host
//! application (`label-desk`).

pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorCode, FormField, ValidationError, ValidationReport};
pub use models::{
    FieldCategory, LabelDocument, Material, MaterialEntry, PrintPayload, RowId, SizeEntry,
    SizeMode, SubmissionRecord,
};
pub use serde::{Deserialize, Serialize};
