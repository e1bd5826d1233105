//! Form session controller
//!
//! Owns the editors, scalar fields, dropdowns and the deferred-task queue,
//! and turns user events into state changes plus [`UiEffect`]s for the
//! page to apply. Deferred work (auto-added rows, fades, focus moves,
//! dropdown dismissal) runs when the owner advances the clock.

use crate::bridge::{BridgeResult, HostBridge};
use crate::collector::{self, FormFields};
use crate::editor::{AutoAdd, LedgerState, MaterialEditor, SizeEditor};
use crate::label::{SheetRenderer, expand};
use crate::ui::{Dropdown, DropdownKey, KeyOutcome, TaskQueue, parse_suggestions};
use crate::validator;
use crate::price;
use shared::error::{FormField, ValidationReport};
use shared::models::{FieldCategory, Material, PrintPayload, RowId, SizeMode, SubmissionRecord};
use tracing::{debug, info, instrument, warn};

// ── Timing (ms) ─────────────────────────────────────────────────────

/// Delay before an auto-added material row is appended
pub const AUTO_ADD_DELAY_MS: u64 = 150;
/// Delay before an auto-added row receives focus
pub const FOCUS_DELAY_MS: u64 = 50;
/// How long the auto-focus flag stays set after a programmatic focus
pub const AUTO_FOCUS_RELEASE_MS: u64 = 300;
/// Dropdown stays open this long after blur so clicks on items land
pub const DROPDOWN_DISMISS_MS: u64 = 200;
/// Fade-out before a removed row disappears
pub const ROW_FADE_MS: u64 = 300;
/// Programmatic focus is suppressed this long after start-up
pub const INIT_WINDOW_MS: u64 = 500;

/// Which editor a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Size,
    Material,
}

/// Deferred work items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    EndInitialization,
    AppendMaterialRow,
    FocusMaterialRow(RowId),
    ReleaseAutoFocus,
    RemoveRow(RowKind, RowId),
    DismissDropdown(FieldCategory),
}

/// Element to focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    MaterialType(RowId),
    MaterialPercentage(RowId),
    Field(FieldCategory),
}

/// Instructions for the page
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    Focus(FocusTarget),
    RowAdded(RowKind, RowId),
    /// Row is fading out and will be removed
    RowFading(RowKind, RowId),
    RowRemoved(RowKind, RowId),
    SizeRowsRebuilt(SizeMode),
    RemoveButtonsVisible(RowKind, bool),
    LedgerChanged(LedgerState),
    PriceEurFilled(String),
    CustomOriginVisible(bool),
    ShowSuggestions {
        category: FieldCategory,
        items: Vec<String>,
    },
    HighlightSuggestion {
        category: FieldCategory,
        index: Option<usize>,
    },
    HideSuggestions(FieldCategory),
    ShowErrors {
        messages: Vec<String>,
        fields: Vec<FormField>,
    },
    HideErrors,
    ShowPreview(String),
    HidePreview,
}

/// Session flags that gate programmatic focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiContext {
    /// Start-up window; no programmatic focus while set
    pub initializing: bool,
    /// A programmatic focus is in progress; the page skips its
    /// keyboard-avoidance scrolling while set
    pub auto_focusing: bool,
}

/// Result of a preview or print request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Validation failed; errors are on display
    Rejected(ValidationReport),
    /// Preview sheet rendered
    Previewed { labels: usize, html: String },
    /// Payload handed to the host printer
    Printed { labels: usize },
    /// The host printer reported a failure
    PrintFailed(String),
}

/// One form session
pub struct FormController<B> {
    bridge: B,
    fields: FormFields,
    sizes: SizeEditor,
    materials: MaterialEditor,
    dropdowns: [Dropdown; 3],
    tasks: TaskQueue<Task>,
    context: UiContext,
    removing: Vec<(RowKind, RowId)>,
    errors_visible: bool,
    preview_visible: bool,
    last_printed: Option<SubmissionRecord>,
    effects: Vec<UiEffect>,
}

fn slot(category: FieldCategory) -> usize {
    match category {
        FieldCategory::Manufacturer => 0,
        FieldCategory::Importer => 1,
        FieldCategory::Product => 2,
    }
}

impl<B: HostBridge> FormController<B> {
    /// Start a session with one empty size row and one empty material row
    pub fn new(bridge: B) -> Self {
        let mut tasks = TaskQueue::new();
        tasks.schedule(INIT_WINDOW_MS, Task::EndInitialization);
        Self {
            bridge,
            fields: FormFields::default(),
            sizes: SizeEditor::default(),
            materials: MaterialEditor::new(),
            dropdowns: Default::default(),
            tasks,
            context: UiContext {
                initializing: true,
                auto_focusing: false,
            },
            removing: Vec::new(),
            errors_visible: false,
            preview_visible: false,
            last_printed: None,
            effects: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn sizes(&self) -> &SizeEditor {
        &self.sizes
    }

    pub fn materials(&self) -> &MaterialEditor {
        &self.materials
    }

    pub fn ledger(&self) -> LedgerState {
        self.materials.ledger()
    }

    pub fn context(&self) -> UiContext {
        self.context
    }

    pub fn dropdown(&self, category: FieldCategory) -> &Dropdown {
        &self.dropdowns[slot(category)]
    }

    pub fn custom_origin_visible(&self) -> bool {
        self.fields.uses_custom_origin()
    }

    pub fn errors_visible(&self) -> bool {
        self.errors_visible
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_visible
    }

    pub fn is_removing(&self, kind: RowKind, id: RowId) -> bool {
        self.removing.contains(&(kind, id))
    }

    pub fn now_ms(&self) -> u64 {
        self.tasks.now_ms()
    }

    pub fn pending_tasks(&self) -> Vec<Task> {
        self.tasks.iter().copied().collect()
    }

    /// Drain effects produced since the last call
    pub fn take_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    fn emit(&mut self, effect: UiEffect) {
        self.effects.push(effect);
    }

    /// Any field edit clears the whole error display
    fn touched(&mut self) {
        self.hide_errors();
    }

    fn hide_errors(&mut self) {
        if self.errors_visible {
            self.errors_visible = false;
            self.emit(UiEffect::HideErrors);
        }
    }

    fn show_errors(&mut self, report: &ValidationReport) {
        self.errors_visible = true;
        self.emit(UiEffect::ShowErrors {
            messages: report.messages(),
            fields: report.highlighted_fields(),
        });
    }

    // === Text fields and suggestions ===

    /// Typing in an autocomplete-backed field
    pub fn input_text(&mut self, category: FieldCategory, value: &str) {
        *self.fields.autocomplete_value_mut(category) = value.to_string();
        self.touched();
        self.refresh_suggestions(category);
    }

    /// Focus re-opens suggestions for existing text
    pub fn focus_field(&mut self, category: FieldCategory) {
        if !self.fields.autocomplete_value(category).trim().is_empty() {
            self.refresh_suggestions(category);
        }
    }

    /// Blur dismisses the dropdown after a short delay
    pub fn blur_field(&mut self, category: FieldCategory) {
        self.tasks.schedule(DROPDOWN_DISMISS_MS, Task::DismissDropdown(category));
    }

    fn refresh_suggestions(&mut self, category: FieldCategory) {
        let query = self.fields.autocomplete_value(category).trim().to_string();
        if query.is_empty() {
            self.hide_dropdown(category);
            return;
        }

        let items = match self.bridge.filtered_suggestions(category, &query) {
            Ok(json) => parse_suggestions(&json),
            Err(e) if e.is_unsupported() => return,
            Err(e) => {
                warn!(%category, error = %e, "suggestion lookup failed");
                Vec::new()
            }
        };

        let dropdown = &mut self.dropdowns[slot(category)];
        dropdown.show(items);
        if dropdown.is_visible() {
            let items = dropdown.items().to_vec();
            self.emit(UiEffect::ShowSuggestions { category, items });
        } else {
            self.emit(UiEffect::HideSuggestions(category));
        }
    }

    fn hide_dropdown(&mut self, category: FieldCategory) {
        let dropdown = &mut self.dropdowns[slot(category)];
        if dropdown.is_visible() {
            dropdown.hide();
            self.emit(UiEffect::HideSuggestions(category));
        }
    }

    /// Keyboard navigation inside an open dropdown
    pub fn dropdown_key(&mut self, category: FieldCategory, key: DropdownKey) -> KeyOutcome {
        let outcome = self.dropdowns[slot(category)].key(key);
        match &outcome {
            KeyOutcome::Highlighted(index) => {
                self.emit(UiEffect::HighlightSuggestion { category, index: *index });
            }
            KeyOutcome::Selected(value) => {
                let value = value.clone();
                self.apply_suggestion(category, value);
            }
            KeyOutcome::Hidden => self.emit(UiEffect::HideSuggestions(category)),
            KeyOutcome::Ignored => {}
        }
        outcome
    }

    /// Click on a dropdown item
    pub fn click_suggestion(&mut self, category: FieldCategory, index: usize) -> Option<String> {
        let dropdown = &mut self.dropdowns[slot(category)];
        if !dropdown.is_visible() {
            return None;
        }
        let value = dropdown.select(index)?;
        self.apply_suggestion(category, value.clone());
        Some(value)
    }

    fn apply_suggestion(&mut self, category: FieldCategory, value: String) {
        *self.fields.autocomplete_value_mut(category) = value;
        self.touched();
        self.emit(UiEffect::HideSuggestions(category));
        self.emit(UiEffect::Focus(FocusTarget::Field(category)));
    }

    // === Origin and prices ===

    pub fn select_origin(&mut self, value: &str) {
        let was_custom = self.fields.uses_custom_origin();
        self.fields.origin = value.to_string();
        self.touched();
        let is_custom = self.fields.uses_custom_origin();
        if was_custom != is_custom {
            self.emit(UiEffect::CustomOriginVisible(is_custom));
        }
    }

    pub fn input_custom_origin(&mut self, value: &str) {
        self.fields.custom_origin = value.to_string();
        self.touched();
    }

    /// BGN input also fills the EUR field
    pub fn input_price_bgn(&mut self, value: &str) {
        self.fields.price_bgn = value.to_string();
        self.fields.price_eur = price::bgn_to_eur(value);
        self.touched();
        let eur = self.fields.price_eur.clone();
        self.emit(UiEffect::PriceEurFilled(eur));
    }

    pub fn input_price_eur(&mut self, value: &str) {
        self.fields.price_eur = value.to_string();
        self.touched();
    }

    // === Sizes ===

    pub fn add_size_row(&mut self) -> RowId {
        let id = self.sizes.add_row();
        self.emit(UiEffect::RowAdded(RowKind::Size, id));
        self.emit(UiEffect::RemoveButtonsVisible(RowKind::Size, self.sizes.remove_buttons_visible()));
        id
    }

    pub fn request_remove_size_row(&mut self, id: RowId) -> bool {
        let removable = self.sizes.remove_buttons_visible() && self.sizes.rows().contains(id);
        removable && self.start_fade(RowKind::Size, id)
    }

    pub fn set_size_value(&mut self, id: RowId, value: &str) {
        if self.sizes.set_size(id, value) {
            self.touched();
        }
    }

    /// The +/- buttons
    pub fn step_quantity(&mut self, id: RowId, delta: i32) -> Option<u32> {
        self.sizes.adjust_quantity(id, delta)
    }

    /// Typed quantity, normalized into `[1, 99]`
    pub fn input_quantity(&mut self, id: RowId, text: &str) -> Option<u32> {
        let quantity = self.sizes.set_quantity_text(id, text)?;
        self.touched();
        Some(quantity)
    }

    pub fn switch_size_mode(&mut self, mode: SizeMode) {
        if mode == self.sizes.mode() {
            return;
        }
        self.touched();
        self.sizes.switch_mode(mode);
        self.removing.retain(|(kind, _)| *kind != RowKind::Size);
        self.emit(UiEffect::SizeRowsRebuilt(mode));
        self.emit(UiEffect::RemoveButtonsVisible(RowKind::Size, self.sizes.remove_buttons_visible()));
    }

    // === Materials ===

    pub fn add_material_row(&mut self) -> Option<RowId> {
        let id = self.materials.add_row()?;
        self.emit(UiEffect::RowAdded(RowKind::Material, id));
        self.emit(UiEffect::RemoveButtonsVisible(
            RowKind::Material,
            self.materials.remove_buttons_visible(),
        ));
        Some(id)
    }

    pub fn request_remove_material_row(&mut self, id: RowId) -> bool {
        let removable = self.materials.remove_buttons_visible() && self.materials.rows().contains(id);
        removable && self.start_fade(RowKind::Material, id)
    }

    /// Material picker change; a committed change
    pub fn select_material(&mut self, id: RowId, material: Option<Material>) {
        if !self.materials.set_material(id, material) {
            return;
        }
        self.touched();
        if material.is_some() && !self.context.initializing {
            self.auto_focus(FocusTarget::MaterialPercentage(id));
        }
        self.commit_material(id);
    }

    /// Live percentage typing: ledger only, no auto-add
    pub fn input_percentage(&mut self, id: RowId, text: &str) {
        if !self.materials.set_percentage(id, text) {
            return;
        }
        self.touched();
        let ledger = self.materials.ledger();
        self.emit(UiEffect::LedgerChanged(ledger));
    }

    /// Percentage finalized (change or blur)
    pub fn commit_percentage(&mut self, id: RowId) {
        if self.materials.rows().contains(id) {
            self.commit_material(id);
        }
    }

    fn commit_material(&mut self, id: RowId) {
        let change = self.materials.on_row_changed(id);
        self.emit(UiEffect::LedgerChanged(change.ledger));
        if change.auto_add == AutoAdd::Scheduled {
            info!(row_id = %id, total = change.ledger.total, "material row auto-add scheduled");
            self.tasks.schedule(AUTO_ADD_DELAY_MS, Task::AppendMaterialRow);
        }
    }

    fn auto_focus(&mut self, target: FocusTarget) {
        self.context.auto_focusing = true;
        self.emit(UiEffect::Focus(target));
        self.tasks.schedule(AUTO_FOCUS_RELEASE_MS, Task::ReleaseAutoFocus);
    }

    fn start_fade(&mut self, kind: RowKind, id: RowId) -> bool {
        if self.removing.contains(&(kind, id)) {
            return false;
        }
        self.removing.push((kind, id));
        self.emit(UiEffect::RowFading(kind, id));
        self.tasks.schedule(ROW_FADE_MS, Task::RemoveRow(kind, id));
        true
    }

    // === Submission ===

    /// Snapshot of the current form
    pub fn collect(&self) -> SubmissionRecord {
        collector::collect(&self.fields, &self.sizes, &self.materials)
    }

    /// Validate the current form without touching the display
    pub fn validate(&self) -> ValidationReport {
        validator::validate(&self.collect())
    }

    /// Validate and render the preview sheet
    #[instrument(skip(self))]
    pub fn preview(&mut self) -> Outcome {
        let record = self.collect();
        let report = validator::validate(&record);
        if !report.is_valid() {
            self.show_errors(&report);
            return Outcome::Rejected(report);
        }
        self.hide_errors();
        self.show_preview(&record)
    }

    fn show_preview(&mut self, record: &SubmissionRecord) -> Outcome {
        let labels = expand(record);
        let html = SheetRenderer::new(&labels).render();
        self.preview_visible = true;
        self.emit(UiEffect::ShowPreview(html.clone()));
        info!(labels = labels.len(), "preview rendered");
        Outcome::Previewed {
            labels: labels.len(),
            html,
        }
    }

    /// Validate and hand the payload to the host printer
    ///
    /// Without a print capability the preview is shown instead.
    #[instrument(skip(self))]
    pub fn print(&mut self) -> Outcome {
        let record = self.collect();
        let report = validator::validate(&record);
        if !report.is_valid() {
            self.show_errors(&report);
            return Outcome::Rejected(report);
        }
        self.hide_errors();

        let payload = PrintPayload::from(&record);
        match self.send_payload(&payload) {
            Ok(()) => {
                let labels = payload.sizes.len();
                info!(labels, "labels sent to printer");
                self.last_printed = Some(record);
                Outcome::Printed { labels }
            }
            Err(e) if e.is_unsupported() => {
                info!("no print capability, falling back to preview");
                self.show_preview(&record)
            }
            Err(e) => {
                warn!(error = %e, "print failed");
                Outcome::PrintFailed(e.to_string())
            }
        }
    }

    fn send_payload(&self, payload: &PrintPayload) -> BridgeResult<()> {
        let json = serde_json::to_string(payload)?;
        self.bridge.print_label(&json)
    }

    /// The print payload as JSON, or `None` while the form is invalid
    pub fn print_payload_json(&self) -> Option<String> {
        let record = self.collect();
        if !validator::validate(&record).is_valid() {
            return None;
        }
        serde_json::to_string(&PrintPayload::from(&record)).ok()
    }

    /// Pass the last printed values to the host's history
    ///
    /// Returns whether the host stored them.
    pub fn record_printed(&mut self) -> bool {
        let Some(record) = self.last_printed.take() else {
            return false;
        };
        match self
            .bridge
            .save_history_values(&record.manufacturer, &record.importer, &record.product)
        {
            Ok(()) => true,
            Err(e) if e.is_unsupported() => {
                debug!("host keeps no history");
                false
            }
            Err(e) => {
                warn!(error = %e, "saving history failed");
                false
            }
        }
    }

    /// Clear every field and rebuild both editors
    pub fn reset(&mut self) {
        let was_custom = self.fields.uses_custom_origin();
        self.fields = FormFields::default();
        self.sizes.reset();
        self.materials.reset();
        self.removing.clear();
        self.last_printed = None;
        for category in FieldCategory::ALL {
            self.hide_dropdown(category);
        }
        self.hide_errors();
        if was_custom {
            self.emit(UiEffect::CustomOriginVisible(false));
        }
        if self.preview_visible {
            self.preview_visible = false;
            self.emit(UiEffect::HidePreview);
        }
        self.emit(UiEffect::SizeRowsRebuilt(self.sizes.mode()));
        let ledger = self.materials.ledger();
        self.emit(UiEffect::LedgerChanged(ledger));
        debug!("form reset");
    }

    // === Deferred tasks ===

    /// Advance the clock by `ms`, running every task that falls due
    pub fn advance(&mut self, ms: u64) {
        let target = self.tasks.now_ms() + ms;
        while let Some(task) = self.tasks.pop_due(target) {
            self.run_task(task);
        }
        self.tasks.set_now(target);
    }

    /// Run tasks until the queue is empty
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.tasks.next_due_ms() {
            while let Some(task) = self.tasks.pop_due(due) {
                self.run_task(task);
            }
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::EndInitialization => self.context.initializing = false,
            Task::ReleaseAutoFocus => self.context.auto_focusing = false,
            Task::AppendMaterialRow => {
                let Some(id) = self.materials.complete_auto_add() else {
                    return;
                };
                self.emit(UiEffect::RowAdded(RowKind::Material, id));
                self.emit(UiEffect::RemoveButtonsVisible(RowKind::Material, true));
                if !self.context.initializing {
                    self.tasks.schedule(FOCUS_DELAY_MS, Task::FocusMaterialRow(id));
                }
            }
            Task::FocusMaterialRow(id) => {
                if self.materials.rows().contains(id) {
                    self.auto_focus(FocusTarget::MaterialType(id));
                }
            }
            Task::RemoveRow(kind, id) => self.finish_remove(kind, id),
            Task::DismissDropdown(category) => self.hide_dropdown(category),
        }
    }

    fn finish_remove(&mut self, kind: RowKind, id: RowId) {
        self.removing.retain(|r| *r != (kind, id));
        let (removed, visible) = match kind {
            RowKind::Size => (self.sizes.remove_row(id), self.sizes.remove_buttons_visible()),
            RowKind::Material => (
                self.materials.remove_row(id),
                self.materials.remove_buttons_visible(),
            ),
        };
        if !removed {
            debug!(row_id = %id, ?kind, "row already gone, removal skipped");
            return;
        }
        self.emit(UiEffect::RowRemoved(kind, id));
        self.emit(UiEffect::RemoveButtonsVisible(kind, visible));
        if kind == RowKind::Material {
            let ledger = self.materials.ledger();
            self.emit(UiEffect::LedgerChanged(ledger));
        }
    }
}
