use label_form::bridge::{BridgeError, BridgeResult, Detached, HostBridge};
use label_form::controller::{
    AUTO_ADD_DELAY_MS, FOCUS_DELAY_MS, FocusTarget, FormController, INIT_WINDOW_MS, Outcome, ROW_FADE_MS,
    RowKind, UiEffect,
};
use label_form::ui::{DropdownKey, KeyOutcome};
use shared::error::{FormField, ValidationError};
use shared::models::{FieldCategory, Material, OTHER_ORIGIN, PrintPayload, SizeMode};
use std::cell::RefCell;

/// Host that records every call
#[derive(Default)]
struct RecordingHost {
    suggestions: String,
    fail_print: bool,
    printed: RefCell<Vec<String>>,
    history: RefCell<Vec<(String, String, String)>>,
    queries: RefCell<Vec<(FieldCategory, String)>>,
}

impl HostBridge for RecordingHost {
    fn filtered_suggestions(&self, category: FieldCategory, query: &str) -> BridgeResult<String> {
        self.queries.borrow_mut().push((category, query.to_string()));
        Ok(self.suggestions.clone())
    }

    fn save_history_values(&self, manufacturer: &str, importer: &str, product: &str) -> BridgeResult<()> {
        self.history
            .borrow_mut()
            .push((manufacturer.into(), importer.into(), product.into()));
        Ok(())
    }

    fn print_label(&self, payload_json: &str) -> BridgeResult<()> {
        if self.fail_print {
            return Err(BridgeError::Host("printer jammed".into()));
        }
        self.printed.borrow_mut().push(payload_json.to_string());
        Ok(())
    }
}

fn fill_scalars<B: HostBridge>(form: &mut FormController<B>) {
    form.input_text(FieldCategory::Product, "Тениска");
    form.input_text(FieldCategory::Manufacturer, "Фабрика АД");
    form.input_text(FieldCategory::Importer, "Вносител ООД");
    form.select_origin("Турция");
    form.input_price_bgn("29.90");
}

/// Complete form: sizes M x2 and L x1, cotton 100%
fn filled_form<B: HostBridge>(bridge: B) -> FormController<B> {
    let mut form = FormController::new(bridge);
    form.advance(INIT_WINDOW_MS);
    fill_scalars(&mut form);

    let m = form.sizes().rows().ids()[0];
    form.set_size_value(m, "M");
    form.step_quantity(m, 1);
    let l = form.add_size_row();
    form.set_size_value(l, "L");

    let row = form.materials().rows().ids()[0];
    form.select_material(row, Some(Material::Cotton));
    form.input_percentage(row, "100");
    form.commit_percentage(row);
    form.run_until_idle();
    form.take_effects();
    form
}

#[test]
fn auto_add_appends_one_row_after_delay() {
    let mut form = FormController::new(Detached);
    form.advance(INIT_WINDOW_MS);

    let first = form.materials().rows().ids()[0];
    form.select_material(first, Some(Material::Cotton));
    form.input_percentage(first, "60");
    form.commit_percentage(first);
    // Blur after change commits again; still only one append pending
    form.commit_percentage(first);
    assert!(form.materials().auto_add_pending());

    form.advance(AUTO_ADD_DELAY_MS - 1);
    assert_eq!(form.materials().len(), 1);
    form.advance(1);
    assert_eq!(form.materials().len(), 2);
    assert!(!form.materials().auto_add_pending());

    let second = form.materials().rows().ids()[1];
    form.take_effects();
    form.advance(FOCUS_DELAY_MS);
    assert_eq!(
        form.take_effects(),
        vec![UiEffect::Focus(FocusTarget::MaterialType(second))]
    );
    assert!(form.context().auto_focusing);
    form.run_until_idle();
    assert!(!form.context().auto_focusing);
    assert_eq!(form.materials().len(), 2);
}

#[test]
fn auto_add_stops_at_hundred_percent() {
    let mut form = FormController::new(Detached);
    let first = form.materials().rows().ids()[0];
    form.select_material(first, Some(Material::Cotton));
    form.input_percentage(first, "60");
    form.commit_percentage(first);
    form.run_until_idle();

    let second = form.materials().rows().ids()[1];
    form.select_material(second, Some(Material::Elastane));
    form.input_percentage(second, "40");
    form.commit_percentage(second);
    form.run_until_idle();

    assert_eq!(form.materials().len(), 2);
    assert!(form.ledger().is_complete);
}

#[test]
fn out_of_range_percentage_stays_in_total() {
    let mut form = filled_form(Detached);
    let first = form.materials().rows().ids()[0];
    form.input_percentage(first, "50");
    form.commit_percentage(first);
    form.run_until_idle();

    let second = form.materials().rows().ids()[1];
    form.select_material(second, Some(Material::Wool));
    form.input_percentage(second, "50");
    form.commit_percentage(second);
    let third = form.add_material_row().unwrap();
    form.select_material(third, Some(Material::Silk));
    form.input_percentage(third, "150");
    form.commit_percentage(third);
    form.run_until_idle();

    assert_eq!(form.materials().len(), 3);
    assert_eq!(form.ledger().total, 250);
    assert_eq!(form.collect().materials.len(), 3);

    let Outcome::Rejected(report) = form.preview() else {
        panic!("expected rejection");
    };
    assert_eq!(report.errors(), &[ValidationError::MaterialTotal { total: 250 }]);
    assert_eq!(
        report.messages(),
        vec!["Процентите на материалите трябва да са общо 100% (текущо: 250%)"]
    );
}

#[test]
fn no_auto_add_past_hundred_percent() {
    let mut form = FormController::new(Detached);
    form.advance(INIT_WINDOW_MS);
    let first = form.materials().rows().ids()[0];
    form.select_material(first, Some(Material::Cotton));
    form.input_percentage(first, "101");
    form.commit_percentage(first);

    assert!(!form.materials().auto_add_pending());
    form.run_until_idle();
    assert_eq!(form.materials().len(), 1);
    assert_eq!(form.ledger().total, 101);
    assert!(form.ledger().is_over);
}

#[test]
fn fractional_percentage_reads_integer_part() {
    let mut form = filled_form(Detached);
    let row = form.materials().rows().ids()[0];
    form.input_percentage(row, "95.5");
    form.commit_percentage(row);
    form.run_until_idle();
    assert_eq!(form.ledger().total, 95);

    let Outcome::Rejected(report) = form.preview() else {
        panic!("expected rejection");
    };
    assert_eq!(report.errors(), &[ValidationError::MaterialTotal { total: 95 }]);
}

#[test]
fn auto_add_fires_for_ninety_percent() {
    let mut form = FormController::new(Detached);
    let first = form.materials().rows().ids()[0];
    form.select_material(first, Some(Material::Cotton));
    form.input_percentage(first, "60");
    let second = form.add_material_row().unwrap();
    form.select_material(second, Some(Material::Elastane));
    form.input_percentage(second, "30");
    form.commit_percentage(second);
    form.run_until_idle();

    assert_eq!(form.materials().len(), 3);
    assert_eq!(form.ledger().total, 90);
}

#[test]
fn no_focus_during_initialization() {
    let mut form = FormController::new(Detached);
    let first = form.materials().rows().ids()[0];
    form.select_material(first, Some(Material::Wool));
    let effects = form.take_effects();
    assert!(!effects.iter().any(|e| matches!(e, UiEffect::Focus(_))));
    assert!(!form.context().auto_focusing);

    form.advance(INIT_WINDOW_MS);
    form.select_material(first, Some(Material::Silk));
    assert!(
        form.take_effects()
            .contains(&UiEffect::Focus(FocusTarget::MaterialPercentage(first)))
    );
}

#[test]
fn removal_waits_for_fade_and_keeps_last_row() {
    let mut form = FormController::new(Detached);
    let first = form.sizes().rows().ids()[0];
    assert!(!form.request_remove_size_row(first));

    let second = form.add_size_row();
    assert!(form.request_remove_size_row(first));
    assert!(form.request_remove_size_row(second));
    assert!(!form.request_remove_size_row(second));
    assert!(form.is_removing(RowKind::Size, first));

    form.advance(ROW_FADE_MS - 1);
    assert_eq!(form.sizes().len(), 2);
    form.advance(1);
    // Both fades completed; the second removal found the last row and refused
    assert_eq!(form.sizes().rows().ids(), vec![second]);
    assert!(!form.is_removing(RowKind::Size, second));
}

#[test]
fn pending_removal_of_rebuilt_rows_is_noop() {
    let mut form = FormController::new(Detached);
    let first = form.sizes().rows().ids()[0];
    form.set_size_value(first, "M");
    let second = form.add_size_row();
    form.set_size_value(second, "L");
    assert!(form.request_remove_size_row(second));

    form.switch_size_mode(SizeMode::Numeric);
    form.run_until_idle();
    assert_eq!(form.sizes().len(), 2);
}

#[test]
fn mode_switch_carries_values_verbatim() {
    let mut form = FormController::new(Detached);
    form.switch_size_mode(SizeMode::Numeric);
    let row = form.sizes().rows().ids()[0];
    form.set_size_value(row, "40");
    form.input_quantity(row, "3");

    form.switch_size_mode(SizeMode::Letters);
    let record = form.collect();
    assert_eq!(record.sizes.len(), 1);
    assert_eq!(record.sizes[0].size, "40");
    assert_eq!(record.sizes[0].quantity, 3);
}

#[test]
fn preview_renders_every_label() {
    let mut form = filled_form(Detached);
    match form.preview() {
        Outcome::Previewed { labels, html } => {
            assert_eq!(labels, 3);
            assert!(html.contains("Етикет 1 от 3 - Размер: M (1 от 2)"));
            assert!(html.contains("Етикет 2 от 3 - Размер: M (2 от 2)"));
            assert!(html.contains("Етикет 3 от 3 - Размер: L (1 от 1)"));
            assert!(html.contains("100% ПАМУК"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(form.preview_visible());
}

#[test]
fn invalid_form_shows_errors_until_next_edit() {
    let mut form = filled_form(Detached);
    let row = form.materials().rows().ids()[0];
    form.input_percentage(row, "95");

    let Outcome::Rejected(report) = form.preview() else {
        panic!("expected rejection");
    };
    assert_eq!(report.errors(), &[ValidationError::MaterialTotal { total: 95 }]);
    assert!(form.errors_visible());
    assert_eq!(
        form.take_effects().last(),
        Some(&UiEffect::ShowErrors {
            messages: vec!["Процентите на материалите трябва да са общо 100% (текущо: 95%)".into()],
            fields: vec![FormField::Materials],
        })
    );

    form.input_percentage(row, "100");
    assert!(!form.errors_visible());
    let effects = form.take_effects();
    assert_eq!(effects.iter().filter(|e| **e == UiEffect::HideErrors).count(), 1);
    assert!(form.validate().is_valid());
}

#[test]
fn empty_form_reports_every_required_rule() {
    let mut form = FormController::new(Detached);
    let Outcome::Rejected(report) = form.print() else {
        panic!("expected rejection");
    };
    assert_eq!(
        report.messages(),
        vec![
            "Артикулът е задължителен",
            "Произходът е задължителен",
            "Производителят е задължителен",
            "Вносителят е задължителен",
            "Поне един размер е задължителен",
            "Поне един материал е задължителен",
            "Цената в BGN е задължителна",
        ]
    );
}

#[test]
fn print_sends_flattened_sizes() {
    let mut form = filled_form(RecordingHost::default());
    assert_eq!(form.print(), Outcome::Printed { labels: 3 });

    let printed = form.bridge().printed.borrow().clone();
    assert_eq!(printed.len(), 1);
    let payload: PrintPayload = serde_json::from_str(&printed[0]).unwrap();
    assert_eq!(payload.sizes, vec!["M", "M", "L"]);
    assert_eq!(payload.price_bgn, "29.90");
    assert_eq!(payload.price_eur, "15.29");
    assert_eq!(payload.origin, "Турция");

    let value: serde_json::Value = serde_json::from_str(&printed[0]).unwrap();
    assert_eq!(value["materials"][0]["type"], "Памук");
    assert_eq!(value["priceBgn"], "29.90");

    assert_eq!(form.print_payload_json().as_deref(), Some(printed[0].as_str()));
}

#[test]
fn history_saved_after_print() {
    let mut form = filled_form(RecordingHost::default());
    assert!(!form.record_printed());
    form.print();
    assert!(form.record_printed());
    assert!(!form.record_printed());
    assert_eq!(
        form.bridge().history.borrow().as_slice(),
        &[("Фабрика АД".to_string(), "Вносител ООД".to_string(), "Тениска".to_string())]
    );
}

#[test]
fn print_without_host_falls_back_to_preview() {
    let mut form = filled_form(Detached);
    assert!(matches!(form.print(), Outcome::Previewed { labels: 3, .. }));
    assert!(!form.record_printed());
}

#[test]
fn host_print_failure_is_reported() {
    let host = RecordingHost {
        fail_print: true,
        ..Default::default()
    };
    let mut form = filled_form(host);
    assert_eq!(
        form.print(),
        Outcome::PrintFailed("Host error: printer jammed".into())
    );
}

#[test]
fn custom_origin_replaces_sentinel() {
    let mut form = filled_form(Detached);
    form.select_origin(OTHER_ORIGIN);
    assert!(form.custom_origin_visible());
    assert!(form.take_effects().contains(&UiEffect::CustomOriginVisible(true)));
    form.input_custom_origin("Перу");
    assert_eq!(form.collect().origin, "Перу");
}

#[test]
fn bgn_input_fills_eur() {
    let mut form = FormController::new(Detached);
    form.input_price_bgn("19.558");
    assert_eq!(form.fields().price_eur, "10.00");
    form.input_price_bgn("");
    assert_eq!(form.fields().price_eur, "");
}

#[test]
fn suggestions_keyboard_selection() {
    let host = RecordingHost {
        suggestions: r#"["Фабрика АД","Фабрика Север"]"#.into(),
        ..Default::default()
    };
    let mut form = FormController::new(host);
    form.input_text(FieldCategory::Manufacturer, " фаб ");
    assert_eq!(
        form.bridge().queries.borrow().as_slice(),
        &[(FieldCategory::Manufacturer, "фаб".to_string())]
    );
    assert!(form.dropdown(FieldCategory::Manufacturer).is_visible());

    form.dropdown_key(FieldCategory::Manufacturer, DropdownKey::ArrowDown);
    form.dropdown_key(FieldCategory::Manufacturer, DropdownKey::ArrowDown);
    assert_eq!(
        form.dropdown_key(FieldCategory::Manufacturer, DropdownKey::Enter),
        KeyOutcome::Selected("Фабрика Север".into())
    );
    assert_eq!(form.fields().manufacturer, "Фабрика Север");
    assert!(!form.dropdown(FieldCategory::Manufacturer).is_visible());
}

#[test]
fn blur_dismisses_after_delay_but_click_still_lands() {
    let host = RecordingHost {
        suggestions: r#"["Риза"]"#.into(),
        ..Default::default()
    };
    let mut form = FormController::new(host);
    form.input_text(FieldCategory::Product, "Ри");
    form.blur_field(FieldCategory::Product);
    form.advance(100);
    assert_eq!(form.click_suggestion(FieldCategory::Product, 0).as_deref(), Some("Риза"));
    assert_eq!(form.fields().product, "Риза");

    form.input_text(FieldCategory::Product, "Ри");
    form.blur_field(FieldCategory::Product);
    form.advance(200);
    assert!(!form.dropdown(FieldCategory::Product).is_visible());
    assert_eq!(form.click_suggestion(FieldCategory::Product, 0), None);
}

#[test]
fn malformed_suggestions_show_nothing() {
    let host = RecordingHost {
        suggestions: "{oops".into(),
        ..Default::default()
    };
    let mut form = FormController::new(host);
    form.input_text(FieldCategory::Importer, "Вно");
    assert!(!form.dropdown(FieldCategory::Importer).is_visible());
    assert!(form.take_effects().contains(&UiEffect::HideSuggestions(FieldCategory::Importer)));
}

#[test]
fn reset_rebuilds_editors() {
    let mut form = filled_form(Detached);
    form.preview();
    form.add_material_row();
    form.reset();

    assert_eq!(form.sizes().len(), 1);
    assert_eq!(form.materials().len(), 1);
    assert_eq!(form.sizes().mode(), SizeMode::Letters);
    assert_eq!(form.fields().product, "");
    assert!(!form.preview_visible());
    assert!(form.take_effects().contains(&UiEffect::HidePreview));
}

#[test]
fn material_cap_is_ten() {
    let mut form = FormController::new(Detached);
    for _ in 0..9 {
        assert!(form.add_material_row().is_some());
    }
    assert_eq!(form.add_material_row(), None);
    assert_eq!(form.materials().len(), 10);
}
