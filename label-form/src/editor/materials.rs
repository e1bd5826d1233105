//! Material row editor with the auto-add policy

use super::ledger::{self, LedgerState};
use super::rows::RowList;
use shared::models::{Material, MaterialEntry, RowId};

/// Hard cap on material rows
pub const MAX_MATERIAL_ROWS: usize = 10;

/// One material row
///
/// The percentage is kept as typed. Text without a leading number reads
/// as empty, the way a number input reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialRow {
    pub material: Option<Material>,
    pub percentage: String,
}

impl MaterialRow {
    /// Both a material and a numeric percentage are present
    pub fn is_filled(&self) -> bool {
        self.entry().is_some()
    }

    /// The row as a submission entry, if filled
    ///
    /// Out-of-range percentages are kept so the total check sees them.
    pub fn entry(&self) -> Option<MaterialEntry> {
        let material = self.material?;
        let percentage = ledger::parse_percentage(&self.percentage)?;
        Some(MaterialEntry::new(material, percentage))
    }
}

/// Auto-add decision after a committed row change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdd {
    /// Policy not met
    Skipped,
    /// One append is now pending; the caller runs it later via
    /// [`MaterialEditor::complete_auto_add`]
    Scheduled,
    /// An earlier append is still pending
    AlreadyPending,
}

/// Result of [`MaterialEditor::on_row_changed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChange {
    pub ledger: LedgerState,
    pub auto_add: AutoAdd,
}

/// Ordered material rows, capped at [`MAX_MATERIAL_ROWS`]
#[derive(Debug, Clone)]
pub struct MaterialEditor {
    rows: RowList<MaterialRow>,
    /// In-flight guard: at most one auto-add append is pending
    auto_add_pending: bool,
}

impl Default for MaterialEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialEditor {
    /// Create an editor holding one empty row
    pub fn new() -> Self {
        let mut rows = RowList::new();
        rows.push(MaterialRow::default());
        Self {
            rows,
            auto_add_pending: false,
        }
    }

    pub fn rows(&self) -> &RowList<MaterialRow> {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&MaterialRow> {
        self.rows.get(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_MATERIAL_ROWS
    }

    pub fn auto_add_pending(&self) -> bool {
        self.auto_add_pending
    }

    /// Remove buttons are hidden while only one row exists
    pub fn remove_buttons_visible(&self) -> bool {
        self.rows.len() > 1
    }

    /// Append an empty row unless the cap is reached
    pub fn add_row(&mut self) -> Option<RowId> {
        if self.is_full() {
            tracing::debug!(max = MAX_MATERIAL_ROWS, "material row cap reached");
            return None;
        }
        let id = self.rows.push(MaterialRow::default());
        tracing::debug!(row = %id, count = self.rows.len(), "material row added");
        Some(id)
    }

    /// Remove a row unless it is the last one
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let removed = self.rows.remove(id).is_some();
        if removed {
            tracing::debug!(row = %id, count = self.rows.len(), "material row removed");
        }
        removed
    }

    pub fn set_material(&mut self, id: RowId, material: Option<Material>) -> bool {
        match self.rows.get_mut(id) {
            Some(row) => {
                row.material = material;
                true
            }
            None => false,
        }
    }

    pub fn set_percentage(&mut self, id: RowId, text: &str) -> bool {
        match self.rows.get_mut(id) {
            Some(row) => {
                row.percentage = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Current ledger over all rows
    pub fn ledger(&self) -> LedgerState {
        ledger::recompute(self.rows.values().map(|r| r.percentage.as_str()))
    }

    /// Handle a committed change of a row's material or percentage
    ///
    /// Recomputes the ledger and, when every row is filled, the cap is not
    /// reached and the total is under 100, marks one append as pending.
    pub fn on_row_changed(&mut self, id: RowId) -> RowChange {
        let ledger = self.ledger();
        let auto_add = if self.auto_add_pending {
            AutoAdd::AlreadyPending
        } else if self.auto_add_due(&ledger) {
            self.auto_add_pending = true;
            tracing::debug!(row = %id, total = ledger.total, "auto-add scheduled");
            AutoAdd::Scheduled
        } else {
            AutoAdd::Skipped
        };
        RowChange { ledger, auto_add }
    }

    fn auto_add_due(&self, ledger: &LedgerState) -> bool {
        !self.is_full() && ledger.total < 100 && self.rows.values().all(MaterialRow::is_filled)
    }

    /// Run the pending auto-add append
    ///
    /// Clears the in-flight guard. The cap is checked again since rows may
    /// have been added in the meantime. Without a pending append this is a
    /// no-op.
    pub fn complete_auto_add(&mut self) -> Option<RowId> {
        if !std::mem::take(&mut self.auto_add_pending) {
            return None;
        }
        self.add_row()
    }

    /// Back to one empty row
    pub fn reset(&mut self) {
        self.rows.clear();
        self.auto_add_pending = false;
        self.rows.push(MaterialRow::default());
    }

    /// Entries of every complete row, in row order
    pub fn entries(&self) -> Vec<MaterialEntry> {
        self.rows.values().filter_map(MaterialRow::entry).collect()
    }
}
