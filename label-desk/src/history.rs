//! Suggestion history for the autocomplete fields
//!
//! Values are kept per category in insertion order, deduplicated by
//! their lower-cased form. The oldest value is evicted once a category
//! holds [`MAX_ENTRIES_PER_CATEGORY`] values.

use serde::{Deserialize, Serialize};
use shared::models::FieldCategory;
use std::collections::VecDeque;

/// Values remembered per category
pub const MAX_ENTRIES_PER_CATEGORY: usize = 50;
/// Suggestions returned per lookup
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone)]
struct Entry {
    display: String,
    normalized: String,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// On-disk shape of a history seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct HistorySeed {
    pub manufacturer: Vec<String>,
    pub importer: Vec<String>,
    pub product: Vec<String>,
}

/// In-memory suggestion history
#[derive(Debug, Clone, Default)]
pub struct HistoryBook {
    manufacturer: VecDeque<Entry>,
    importer: VecDeque<Entry>,
    product: VecDeque<Entry>,
}

impl HistoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: &HistorySeed) -> Self {
        let mut book = Self::new();
        for (category, values) in [
            (FieldCategory::Manufacturer, &seed.manufacturer),
            (FieldCategory::Importer, &seed.importer),
            (FieldCategory::Product, &seed.product),
        ] {
            for value in values {
                book.add(category, value);
            }
        }
        book
    }

    fn entries(&self, category: FieldCategory) -> &VecDeque<Entry> {
        match category {
            FieldCategory::Manufacturer => &self.manufacturer,
            FieldCategory::Importer => &self.importer,
            FieldCategory::Product => &self.product,
        }
    }

    fn entries_mut(&mut self, category: FieldCategory) -> &mut VecDeque<Entry> {
        match category {
            FieldCategory::Manufacturer => &mut self.manufacturer,
            FieldCategory::Importer => &mut self.importer,
            FieldCategory::Product => &mut self.product,
        }
    }

    /// Remember a value
    ///
    /// Blank values and values already known (ignoring case) are skipped.
    /// Returns whether the value was added.
    pub fn add(&mut self, category: FieldCategory, value: &str) -> bool {
        let display = value.trim();
        if display.is_empty() {
            return false;
        }
        let normalized = normalize(display);
        let entries = self.entries_mut(category);
        if entries.iter().any(|e| e.normalized == normalized) {
            return false;
        }
        entries.push_back(Entry {
            display: display.to_string(),
            normalized,
        });
        if entries.len() > MAX_ENTRIES_PER_CATEGORY {
            entries.pop_front();
        }
        true
    }

    /// Remember the three values of a printed label
    pub fn record(&mut self, manufacturer: &str, importer: &str, product: &str) {
        self.add(FieldCategory::Manufacturer, manufacturer);
        self.add(FieldCategory::Importer, importer);
        self.add(FieldCategory::Product, product);
    }

    /// Up to [`MAX_SUGGESTIONS`] matches for `query`, newest first
    ///
    /// Products match when any word starts with the query. Manufacturers
    /// and importers match when the value starts with the query, both
    /// with whitespace removed.
    pub fn suggestions(&self, category: FieldCategory, query: &str) -> Vec<String> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let matches = |entry: &Entry| match category {
            FieldCategory::Product => entry
                .normalized
                .split_whitespace()
                .any(|word| word.starts_with(&query)),
            FieldCategory::Manufacturer | FieldCategory::Importer => {
                strip_whitespace(&entry.normalized).starts_with(&strip_whitespace(&query))
            }
        };

        self.entries(category)
            .iter()
            .rev()
            .filter(|&e| matches(e))
            .take(MAX_SUGGESTIONS)
            .map(|e| e.display.clone())
            .collect()
    }

    /// Every remembered value of a category, oldest first
    pub fn values(&self, category: FieldCategory) -> Vec<String> {
        self.entries(category).iter().map(|e| e.display.clone()).collect()
    }

    pub fn len(&self, category: FieldCategory) -> usize {
        self.entries(category).len()
    }

    pub fn clear(&mut self, category: FieldCategory) {
        self.entries_mut(category).clear();
    }

    pub fn clear_all(&mut self) {
        for category in FieldCategory::ALL {
            self.clear(category);
        }
    }
}
