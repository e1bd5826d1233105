//! # label-printer
//!
//! Label markup and print spooling - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Building escaped label markup
//! - Measuring text the way the label page does
//! - Handing finished jobs to a printer (spool directory)
//!
//! Business logic (WHAT to print) stays in `label-form`:
//! - Label expansion and layout rules
//! - Garment label rendering
//!
//! ## Example
//!
//! ```
//! use label_printer::MarkupBuilder;
//!
//! let mut b = MarkupBuilder::new();
//! b.open("div", "garment-label");
//! b.element("div", "size-badge", "Размер M");
//! b.close();
//! assert_eq!(
//!     b.build(),
//!     r#"<div class="garment-label"><div class="size-badge">Размер M</div></div>"#
//! );
//! ```

mod encoding;
mod error;
mod markup;
mod printer;

// Re-exports
pub use encoding::{escape_attr, escape_text, text_len, upper};
pub use error::{PrintError, PrintResult};
pub use markup::MarkupBuilder;
pub use printer::{JobKind, PrintJob, Printer, SpoolPrinter};
