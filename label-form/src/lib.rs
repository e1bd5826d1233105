//! # label-form
//!
//! Garment label form engine: WHAT gets printed.
//!
//! - [`editor`]: size and material row editors and the percentage ledger
//! - [`collector`] and [`validator`]: snapshot and check a submission
//! - [`label`]: expand a submission into per-unit labels and render them
//! - [`controller`]: a whole form session driven by user events, with
//!   deferred UI tasks and the host bridge
//!
//! ## Example
//!
//! ```
//! use label_form::{Detached, FormController, Outcome};
//! use shared::models::Material;
//!
//! let mut form = FormController::new(Detached);
//! form.input_text(shared::FieldCategory::Product, "Тениска");
//! form.input_text(shared::FieldCategory::Manufacturer, "Фабрика АД");
//! form.input_text(shared::FieldCategory::Importer, "Вносител ООД");
//! form.select_origin("Турция");
//! form.input_price_bgn("29.90");
//!
//! let size = form.sizes().rows().ids()[0];
//! form.set_size_value(size, "M");
//! let material = form.materials().rows().ids()[0];
//! form.select_material(material, Some(Material::Cotton));
//! form.input_percentage(material, "100");
//! form.commit_percentage(material);
//!
//! match form.print() {
//!     // No host printer: the preview is rendered instead
//!     Outcome::Previewed { labels, .. } => assert_eq!(labels, 1),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod bridge;
pub mod collector;
pub mod controller;
pub mod editor;
pub mod label;
pub mod price;
pub mod ui;
pub mod validator;

// Re-exports
pub use bridge::{BridgeError, BridgeResult, Detached, HostBridge};
pub use collector::{FormFields, collect};
pub use controller::{FocusTarget, FormController, Outcome, RowKind, Task, UiContext, UiEffect};
pub use editor::{LedgerState, MaterialEditor, SizeEditor};
pub use label::{LabelRenderer, SheetRenderer, expand};
pub use validator::validate;
