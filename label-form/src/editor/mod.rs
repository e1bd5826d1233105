//! Multi-row editors for sizes and materials
//!
//! Both editors keep at least one row at all times. Removal requests
//! for the last remaining row are ignored.

mod ledger;
mod materials;
mod rows;
mod sizes;

pub use ledger::{LedgerState, TotalStyle, parse_percentage, recompute};
pub use materials::{AutoAdd, MAX_MATERIAL_ROWS, MaterialEditor, MaterialRow, RowChange};
pub use rows::{Row, RowList};
pub use sizes::{SizeEditor, SizeRow};
