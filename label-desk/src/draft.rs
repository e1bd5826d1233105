//! Saved form drafts replayed through a form session
//!
//! A draft records what a user typed. Replaying it goes through the same
//! controller operations the page uses, so clamping, auto-added rows and
//! price conversion behave exactly as they do interactively.

use label_form::controller::INIT_WINDOW_MS;
use label_form::{FormController, HostBridge};
use serde::{Deserialize, Serialize};
use shared::models::{FieldCategory, Material, SizeMode};
use std::path::Path;
use thiserror::Error;

/// Draft loading and replay failures
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid draft: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Too many materials: {0} (at most 10 rows)")]
    TooManyMaterials(usize),
}

fn default_quantity() -> u32 {
    1
}

/// One size line of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSize {
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// One material line of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMaterial {
    #[serde(rename = "type")]
    pub material: Material,
    pub percentage: i32,
}

/// A filled-in form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDraft {
    pub product: String,
    pub importer: String,
    pub manufacturer: String,
    pub origin: String,
    pub custom_origin: String,
    pub price_bgn: String,
    /// Overrides the EUR value derived from `price_bgn`
    pub price_eur: Option<String>,
    pub size_mode: SizeMode,
    pub sizes: Vec<DraftSize>,
    pub materials: Vec<DraftMaterial>,
}

impl FormDraft {
    pub fn from_json(json: &str) -> Result<Self, DraftError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DraftError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Replay the draft into a fresh form session
    pub fn apply<B: HostBridge>(&self, form: &mut FormController<B>) -> Result<(), DraftError> {
        form.advance(INIT_WINDOW_MS);

        for (category, value) in [
            (FieldCategory::Product, &self.product),
            (FieldCategory::Importer, &self.importer),
            (FieldCategory::Manufacturer, &self.manufacturer),
        ] {
            form.input_text(category, value);
            form.blur_field(category);
        }

        form.select_origin(&self.origin);
        if form.custom_origin_visible() {
            form.input_custom_origin(&self.custom_origin);
        }

        form.switch_size_mode(self.size_mode);
        self.apply_sizes(form);
        self.apply_materials(form)?;

        form.input_price_bgn(&self.price_bgn);
        if let Some(eur) = &self.price_eur {
            form.input_price_eur(eur);
        }

        form.run_until_idle();
        tracing::debug!(
            sizes = self.sizes.len(),
            materials = self.materials.len(),
            "draft applied"
        );
        Ok(())
    }

    fn apply_sizes<B: HostBridge>(&self, form: &mut FormController<B>) {
        for (index, line) in self.sizes.iter().enumerate() {
            let id = match (index, form.sizes().rows().last_id()) {
                (0, Some(id)) => id,
                _ => form.add_size_row(),
            };
            form.set_size_value(id, &line.size);
            form.input_quantity(id, &line.quantity.to_string());
        }
    }

    fn apply_materials<B: HostBridge>(&self, form: &mut FormController<B>) -> Result<(), DraftError> {
        for line in &self.materials {
            // Reuse the trailing empty row (initial or auto-added)
            let empty = form
                .materials()
                .rows()
                .iter()
                .last()
                .filter(|row| row.value.material.is_none() && row.value.percentage.is_empty())
                .map(|row| row.id);
            let id = match empty.or_else(|| form.add_material_row()) {
                Some(id) => id,
                None => return Err(DraftError::TooManyMaterials(self.materials.len())),
            };

            form.select_material(id, Some(line.material));
            form.input_percentage(id, &line.percentage.to_string());
            form.commit_percentage(id);
            form.run_until_idle();
        }
        Ok(())
    }
}
