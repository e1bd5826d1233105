//! Host bridge: the capabilities the embedding application provides
//!
//! Every capability is optional. A host that lacks one leaves the
//! default method in place, which reports [`BridgeError::Unsupported`].

use shared::models::FieldCategory;
use thiserror::Error;

/// Bridge call failures
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The host does not provide this capability
    #[error("Host capability not available: {0}")]
    Unsupported(&'static str),

    /// The host provides it but the call failed
    #[error("Host error: {0}")]
    Host(String),

    /// Payload could not be encoded
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl BridgeError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, BridgeError::Unsupported(_))
    }
}

/// Result type for bridge calls
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Capabilities offered by the embedding host
pub trait HostBridge {
    /// JSON array of suggestions for `query` in `category`
    fn filtered_suggestions(&self, _category: FieldCategory, _query: &str) -> BridgeResult<String> {
        Err(BridgeError::Unsupported("getFilteredSuggestions"))
    }

    /// Remember the values of a printed submission
    fn save_history_values(&self, _manufacturer: &str, _importer: &str, _product: &str) -> BridgeResult<()> {
        Err(BridgeError::Unsupported("saveHistoryValues"))
    }

    /// Print the JSON payload (sizes already flattened)
    fn print_label(&self, _payload_json: &str) -> BridgeResult<()> {
        Err(BridgeError::Unsupported("printLabel"))
    }
}

/// No host at all: every capability is missing
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl HostBridge for Detached {}

impl<B: HostBridge + ?Sized> HostBridge for &B {
    fn filtered_suggestions(&self, category: FieldCategory, query: &str) -> BridgeResult<String> {
        (**self).filtered_suggestions(category, query)
    }

    fn save_history_values(&self, manufacturer: &str, importer: &str, product: &str) -> BridgeResult<()> {
        (**self).save_history_values(manufacturer, importer, product)
    }

    fn print_label(&self, payload_json: &str) -> BridgeResult<()> {
        (**self).print_label(payload_json)
    }
}
