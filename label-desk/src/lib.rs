//! label-desk - desktop host for the garment label form
//!
//! Provides what the embedding application gives the form:
//! - Suggestion history for manufacturer, importer and product
//! - Printing through a spool directory
//! - Replaying a saved form draft through a form session

pub mod config;
pub mod draft;
pub mod history;
pub mod host;
pub mod logger;

pub use config::{Cli, Command, Config};
pub use draft::{DraftError, FormDraft};
pub use history::HistoryBook;
pub use host::{DeskHost, HostError};
