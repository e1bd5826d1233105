//! Desktop implementation of the form's host bridge

use crate::config::Config;
use crate::history::{HistoryBook, HistorySeed};
use label_form::{BridgeError, BridgeResult, HostBridge};
use label_printer::{JobKind, PrintError, PrintJob, Printer, SpoolPrinter};
use shared::models::{FieldCategory, PrintPayload};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Host setup failures
#[derive(Debug, Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid history file: {0}")]
    History(#[from] serde_json::Error),

    #[error("Printer error: {0}")]
    Printer(#[from] PrintError),
}

/// Host bridge backed by a printer and an in-memory history
pub struct DeskHost<P = SpoolPrinter> {
    printer: P,
    history: Mutex<HistoryBook>,
}

impl DeskHost<SpoolPrinter> {
    /// Open the spool directory and load the history seed, if configured
    pub fn open(config: &Config) -> Result<Self, HostError> {
        let printer = SpoolPrinter::open(&config.spool_dir)?;
        let history = match &config.history_file {
            Some(path) => load_history(path)?,
            None => HistoryBook::new(),
        };
        Ok(Self::new(printer, history))
    }
}

/// Read a JSON history seed
pub fn load_history(path: &Path) -> Result<HistoryBook, HostError> {
    let text = std::fs::read_to_string(path)?;
    let seed: HistorySeed = serde_json::from_str(&text)?;
    tracing::info!(path = %path.display(), "history seed loaded");
    Ok(HistoryBook::from_seed(&seed))
}

impl<P: Printer> DeskHost<P> {
    pub fn new(printer: P, history: HistoryBook) -> Self {
        Self {
            printer,
            history: Mutex::new(history),
        }
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    fn history(&self) -> BridgeResult<MutexGuard<'_, HistoryBook>> {
        self.history
            .lock()
            .map_err(|_| BridgeError::Host("history lock poisoned".into()))
    }

    /// Snapshot of the current history
    pub fn history_snapshot(&self) -> BridgeResult<HistoryBook> {
        Ok(self.history()?.clone())
    }

    /// Hand a rendered preview sheet to the printer
    pub fn print_preview(&self, html: &str) -> Result<(), PrintError> {
        self.printer.print(&PrintJob::new(JobKind::Preview, "preview", html))
    }
}

impl<P: Printer> HostBridge for DeskHost<P> {
    fn filtered_suggestions(&self, category: FieldCategory, query: &str) -> BridgeResult<String> {
        let suggestions = self.history()?.suggestions(category, query);
        Ok(serde_json::to_string(&suggestions)?)
    }

    fn save_history_values(&self, manufacturer: &str, importer: &str, product: &str) -> BridgeResult<()> {
        self.history()?.record(manufacturer, importer, product);
        tracing::debug!("history values saved");
        Ok(())
    }

    fn print_label(&self, payload_json: &str) -> BridgeResult<()> {
        if !self.printer.is_online() {
            return Err(BridgeError::Host("printer offline".into()));
        }
        let payload: PrintPayload = serde_json::from_str(payload_json)
            .map_err(|e| BridgeError::Host(format!("invalid print payload: {e}")))?;
        if payload.sizes.is_empty() {
            return Err(BridgeError::Host("print payload has no labels".into()));
        }

        let job = PrintJob::new(JobKind::Payload, "labels", payload_json);
        self.printer
            .print(&job)
            .map_err(|e| BridgeError::Host(e.to_string()))?;
        tracing::info!(labels = payload.sizes.len(), "print job accepted");
        Ok(())
    }
}
