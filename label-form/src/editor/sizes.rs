//! Size row editor

use super::rows::RowList;
use shared::models::{QUANTITY_MAX, QUANTITY_MIN, RowId, SizeEntry, SizeMode, clamp_quantity};

/// One size row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRow {
    /// Raw size input; its domain depends on the active [`SizeMode`]
    pub size: String,
    pub quantity: u32,
}

impl Default for SizeRow {
    fn default() -> Self {
        Self {
            size: String::new(),
            quantity: QUANTITY_MIN,
        }
    }
}

impl SizeRow {
    pub fn has_size(&self) -> bool {
        !self.size.trim().is_empty()
    }
}

/// Ordered size rows plus the active size mode
#[derive(Debug, Clone)]
pub struct SizeEditor {
    rows: RowList<SizeRow>,
    mode: SizeMode,
}

impl Default for SizeEditor {
    fn default() -> Self {
        Self::new(SizeMode::default())
    }
}

impl SizeEditor {
    /// Create an editor holding one empty row
    pub fn new(mode: SizeMode) -> Self {
        let mut rows = RowList::new();
        rows.push(SizeRow::default());
        Self { rows, mode }
    }

    pub fn mode(&self) -> SizeMode {
        self.mode
    }

    pub fn rows(&self) -> &RowList<SizeRow> {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&SizeRow> {
        self.rows.get(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove buttons are hidden while only one row exists
    pub fn remove_buttons_visible(&self) -> bool {
        self.rows.len() > 1
    }

    /// Append an empty row with quantity 1
    pub fn add_row(&mut self) -> RowId {
        let id = self.rows.push(SizeRow::default());
        tracing::debug!(row = %id, count = self.rows.len(), "size row added");
        id
    }

    /// Remove a row unless it is the last one
    ///
    /// Returns whether a row was removed.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let removed = self.rows.remove(id).is_some();
        if removed {
            tracing::debug!(row = %id, count = self.rows.len(), "size row removed");
        }
        removed
    }

    /// Overwrite a row's size value
    pub fn set_size(&mut self, id: RowId, value: &str) -> bool {
        match self.rows.get_mut(id) {
            Some(row) => {
                row.size = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Step a row's quantity by `delta`, clamped to `[1, 99]`
    ///
    /// Returns the new quantity, or `None` for an unknown row.
    pub fn adjust_quantity(&mut self, id: RowId, delta: i32) -> Option<u32> {
        let row = self.rows.get_mut(id)?;
        row.quantity = clamp_quantity(i64::from(row.quantity) + i64::from(delta));
        Some(row.quantity)
    }

    /// Normalize typed quantity text into `[1, 99]`
    ///
    /// Unparseable text becomes 1.
    pub fn set_quantity_text(&mut self, id: RowId, text: &str) -> Option<u32> {
        let row = self.rows.get_mut(id)?;
        row.quantity = match text.trim().parse::<i64>() {
            Ok(n) => clamp_quantity(n),
            Err(_) => QUANTITY_MIN,
        };
        Some(row.quantity)
    }

    /// Whether the +/- buttons of a row are enabled as `(minus, plus)`
    pub fn stepper_enabled(&self, id: RowId) -> Option<(bool, bool)> {
        self.rows
            .get(id)
            .map(|row| (row.quantity > QUANTITY_MIN, row.quantity < QUANTITY_MAX))
    }

    /// Rebuild all rows under `mode`, carrying sizes and quantities over
    ///
    /// Rows without a size value are dropped. Carried values are written
    /// verbatim, even when they are outside the new mode's domain.
    pub fn switch_mode(&mut self, mode: SizeMode) {
        if mode == self.mode {
            return;
        }

        let carried: Vec<SizeRow> = self.rows.values().filter(|r| r.has_size()).cloned().collect();
        for row in carried.iter().filter(|r| !mode.accepts(&r.size)) {
            tracing::warn!(size = %row.size, ?mode, "carried size is outside the new mode");
        }

        self.rows.clear();
        self.mode = mode;
        if carried.is_empty() {
            self.rows.push(SizeRow::default());
        } else {
            for row in carried {
                self.rows.push(row);
            }
        }
        tracing::debug!(?mode, count = self.rows.len(), "size mode switched");
    }

    /// Back to one empty row under the default mode
    pub fn reset(&mut self) {
        self.rows.clear();
        self.mode = SizeMode::default();
        self.rows.push(SizeRow::default());
    }

    /// Size entries of every row that has a size value, in row order
    pub fn entries(&self) -> Vec<SizeEntry> {
        self.rows
            .values()
            .filter(|r| r.has_size())
            .map(|r| SizeEntry::new(r.size.clone(), r.quantity))
            .collect()
    }
}
