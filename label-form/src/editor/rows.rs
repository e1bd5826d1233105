//! Ordered row collection with stable identities

use shared::models::RowId;

/// One row and its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
    pub id: RowId,
    pub value: T,
}

/// Ordered rows addressed by [`RowId`]
///
/// Ids come from a monotonic counter that survives [`clear`](Self::clear),
/// so an id handed out once never names a different row later.
#[derive(Debug, Clone)]
pub struct RowList<T> {
    rows: Vec<Row<T>>,
    next_id: u32,
}

impl<T> Default for RowList<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> RowList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row and return its id
    pub fn push(&mut self, value: T) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, value });
        id
    }

    /// Remove a row, returning its value if it existed
    pub fn remove(&mut self, id: RowId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.rows.remove(index).value)
    }

    /// Drop every row (ids are not recycled)
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn get(&self, id: RowId) -> Option<&T> {
        self.rows.iter().find(|r| r.id == id).map(|r| &r.value)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut T> {
        self.rows.iter_mut().find(|r| r.id == id).map(|r| &mut r.value)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|r| &r.value)
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn last_id(&self) -> Option<RowId> {
        self.rows.last().map(|r| r.id)
    }
}
