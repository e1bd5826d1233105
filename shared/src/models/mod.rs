//! Data models
//!
//! Shared between the form engine, the host application and the page
//! (via the JSON bridge). Wire names follow the page's camelCase keys.

pub mod field;
pub mod label;
pub mod material;
pub mod row;
pub mod size;
pub mod submission;

// Re-exports
pub use field::*;
pub use label::*;
pub use material::*;
pub use row::*;
pub use size::*;
pub use submission::*;
