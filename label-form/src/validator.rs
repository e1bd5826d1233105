//! Submission validation
//!
//! Every rule runs on every pass; the report lists all failures in rule
//! order so the error display is deterministic.

use label_printer::text_len;
use shared::error::{FormField, ValidationError, ValidationReport};
use shared::models::{MAX_FIELD_CHARS, SubmissionRecord};

// ── Rules ───────────────────────────────────────────────────────────

/// Text fields checked for presence and length, in report order
fn text_fields(record: &SubmissionRecord) -> [(FormField, &str); 4] {
    [
        (FormField::Product, record.product.as_str()),
        (FormField::Origin, record.origin.as_str()),
        (FormField::Manufacturer, record.manufacturer.as_str()),
        (FormField::Importer, record.importer.as_str()),
    ]
}

/// Required (non-empty after trim)
fn check_required(record: &SubmissionRecord, report: &mut ValidationReport) {
    for (field, value) in text_fields(record) {
        if value.trim().is_empty() {
            report.push(ValidationError::Required(field));
        }
    }
}

/// Length limit on the text fields and on present prices
///
/// Measured on the value as collected, before trimming.
fn check_lengths(record: &SubmissionRecord, report: &mut ValidationReport) {
    let prices = [
        (FormField::PriceEur, record.price_eur.as_str()),
        (FormField::PriceBgn, record.price_bgn.as_str()),
    ];
    for (field, value) in text_fields(record).into_iter().chain(prices) {
        if text_len(value) > MAX_FIELD_CHARS {
            report.push(ValidationError::TooLong {
                field,
                max: MAX_FIELD_CHARS,
            });
        }
    }
}

fn check_sizes(record: &SubmissionRecord, report: &mut ValidationReport) {
    if record.sizes.is_empty() {
        report.push(ValidationError::SizesRequired);
    }
}

/// At least one material, and percentages adding up to exactly 100
fn check_materials(record: &SubmissionRecord, report: &mut ValidationReport) {
    if record.materials.is_empty() {
        report.push(ValidationError::MaterialsRequired);
        return;
    }
    let total = record.material_total();
    if total != 100 {
        report.push(ValidationError::MaterialTotal { total });
    }
}

/// BGN price is mandatory; EUR never is
fn check_price(record: &SubmissionRecord, report: &mut ValidationReport) {
    if record.price_bgn.is_empty() {
        report.push(ValidationError::PriceBgnRequired);
    }
}

// ── Entry point ─────────────────────────────────────────────────────

/// Validate a collected submission
pub fn validate(record: &SubmissionRecord) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_required(record, &mut report);
    check_lengths(record, &mut report);
    check_sizes(record, &mut report);
    check_materials(record, &mut report);
    check_price(record, &mut report);

    if !report.is_valid() {
        tracing::debug!(errors = report.errors().len(), "submission rejected");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Material, MaterialEntry, SizeEntry};

    fn valid_record() -> SubmissionRecord {
        SubmissionRecord {
            product: "Тениска".into(),
            importer: "Вносител ООД".into(),
            manufacturer: "Фабрика АД".into(),
            origin: "Турция".into(),
            sizes: vec![SizeEntry::new("M", 2)],
            materials: vec![
                MaterialEntry::new(Material::Cotton, 95),
                MaterialEntry::new(Material::Elastane, 5),
            ],
            price_eur: "15.29".into(),
            price_bgn: "29.90".into(),
        }
    }

    #[test]
    fn test_valid_record() {
        let report = validate(&valid_record());
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_material_total_mismatch() {
        let mut record = valid_record();
        record.materials[1].percentage = 0;
        let report = validate(&record);
        assert!(!report.is_valid());
        assert_eq!(
            report.messages(),
            vec!["Процентите на материалите трябва да са общо 100% (текущо: 95%)"]
        );
    }

    #[test]
    fn test_empty_record_lists_every_rule_in_order() {
        let report = validate(&SubmissionRecord::default());
        assert_eq!(
            report.errors(),
            &[
                ValidationError::Required(FormField::Product),
                ValidationError::Required(FormField::Origin),
                ValidationError::Required(FormField::Manufacturer),
                ValidationError::Required(FormField::Importer),
                ValidationError::SizesRequired,
                ValidationError::MaterialsRequired,
                ValidationError::PriceBgnRequired,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut record = valid_record();
        record.importer = "   ".into();
        let report = validate(&record);
        assert_eq!(report.errors(), &[ValidationError::Required(FormField::Importer)]);
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let mut record = valid_record();
        record.product = "я".repeat(50);
        assert!(validate(&record).is_valid());

        record.product = "я".repeat(51);
        record.origin = format!("{} ", "a".repeat(50));
        let report = validate(&record);
        assert_eq!(
            report.errors(),
            &[
                ValidationError::TooLong { field: FormField::Product, max: 50 },
                ValidationError::TooLong { field: FormField::Origin, max: 50 },
            ]
        );
        assert_eq!(report.messages()[0], "Артикулът не може да превишава 50 символа");
    }

    #[test]
    fn test_eur_is_optional() {
        let mut record = valid_record();
        record.price_eur.clear();
        assert!(validate(&record).is_valid());

        record.price_bgn.clear();
        let report = validate(&record);
        assert_eq!(report.errors(), &[ValidationError::PriceBgnRequired]);
        assert_eq!(
            report.highlighted_fields(),
            vec![FormField::PriceEur, FormField::PriceBgn]
        );
    }

    #[test]
    fn test_rules_do_not_short_circuit() {
        let mut record = valid_record();
        record.manufacturer.clear();
        record.sizes.clear();
        record.materials.truncate(1);
        let report = validate(&record);
        assert_eq!(
            report.errors(),
            &[
                ValidationError::Required(FormField::Manufacturer),
                ValidationError::SizesRequired,
                ValidationError::MaterialTotal { total: 95 },
            ]
        );
    }
}
