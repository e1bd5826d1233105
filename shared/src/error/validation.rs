//! Validation failures and the report returned by a validation pass

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form field a validation error points at
///
/// Serialized with the DOM ids the host page uses for its field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "product")]
    Product,
    #[serde(rename = "origin")]
    Origin,
    #[serde(rename = "manufacturer")]
    Manufacturer,
    #[serde(rename = "importer")]
    Importer,
    #[serde(rename = "sizesContainer")]
    Sizes,
    #[serde(rename = "materialsContainer")]
    Materials,
    #[serde(rename = "priceEur")]
    PriceEur,
    #[serde(rename = "priceBgn")]
    PriceBgn,
}

impl FormField {
    /// Host element id of the field
    pub const fn dom_id(&self) -> &'static str {
        match self {
            FormField::Product => "product",
            FormField::Origin => "origin",
            FormField::Manufacturer => "manufacturer",
            FormField::Importer => "importer",
            FormField::Sizes => "sizesContainer",
            FormField::Materials => "materialsContainer",
            FormField::PriceEur => "priceEur",
            FormField::PriceBgn => "priceBgn",
        }
    }

    /// Grammatical subject used in user-facing messages
    pub const fn subject(&self) -> &'static str {
        match self {
            FormField::Product => "Артикулът",
            FormField::Origin => "Произходът",
            FormField::Manufacturer => "Производителят",
            FormField::Importer => "Вносителят",
            FormField::Sizes => "Размерът",
            FormField::Materials => "Материалът",
            FormField::PriceEur => "Цената в EUR",
            FormField::PriceBgn => "Цената в BGN",
        }
    }
}

/// One failed validation rule
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming
    #[error("{} е задължителен", .0.subject())]
    Required(FormField),

    /// A text or price field exceeds the character limit
    #[error("{} не може да превишава {max} символа", .field.subject())]
    TooLong { field: FormField, max: usize },

    #[error("Поне един размер е задължителен")]
    SizesRequired,

    #[error("Поне един материал е задължителен")]
    MaterialsRequired,

    /// Material percentages add up to something other than 100
    #[error("Процентите на материалите трябва да са общо 100% (текущо: {total}%)")]
    MaterialTotal { total: i64 },

    #[error("Цената в BGN е задължителна")]
    PriceBgnRequired,
}

impl ValidationError {
    /// Stable error code of the failed rule
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Required(field) => match field {
                FormField::Origin => ErrorCode::OriginRequired,
                FormField::Manufacturer => ErrorCode::ManufacturerRequired,
                FormField::Importer => ErrorCode::ImporterRequired,
                _ => ErrorCode::ProductRequired,
            },
            ValidationError::TooLong { field, .. } => match field {
                FormField::Origin => ErrorCode::OriginTooLong,
                FormField::Manufacturer => ErrorCode::ManufacturerTooLong,
                FormField::Importer => ErrorCode::ImporterTooLong,
                FormField::PriceEur => ErrorCode::PriceEurTooLong,
                FormField::PriceBgn => ErrorCode::PriceBgnTooLong,
                _ => ErrorCode::ProductTooLong,
            },
            ValidationError::SizesRequired => ErrorCode::SizeRequired,
            ValidationError::MaterialsRequired => ErrorCode::MaterialRequired,
            ValidationError::MaterialTotal { .. } => ErrorCode::MaterialTotalMismatch,
            ValidationError::PriceBgnRequired => ErrorCode::PriceBgnRequired,
        }
    }

    /// Rule group of the failed rule
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from(self.code())
    }

    /// Primary field the error refers to
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::Required(field) | ValidationError::TooLong { field, .. } => *field,
            ValidationError::SizesRequired => FormField::Sizes,
            ValidationError::MaterialsRequired | ValidationError::MaterialTotal { .. } => {
                FormField::Materials
            }
            ValidationError::PriceBgnRequired => FormField::PriceBgn,
        }
    }

    /// Field groups to highlight for this error
    ///
    /// Price errors mark both price inputs, since EUR is derived from BGN.
    pub fn highlights(&self) -> &'static [FormField] {
        match self.field() {
            FormField::PriceEur | FormField::PriceBgn => &[FormField::PriceEur, FormField::PriceBgn],
            FormField::Product => &[FormField::Product],
            FormField::Origin => &[FormField::Origin],
            FormField::Manufacturer => &[FormField::Manufacturer],
            FormField::Importer => &[FormField::Importer],
            FormField::Sizes => &[FormField::Sizes],
            FormField::Materials => &[FormField::Materials],
        }
    }
}

/// Ordered outcome of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True when no rule failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// User-facing messages in rule order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Distinct fields to highlight, in first-seen order
    pub fn highlighted_fields(&self) -> Vec<FormField> {
        let mut fields: Vec<FormField> = Vec::new();
        for field in self.errors.iter().flat_map(|e| e.highlights().iter().copied()) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}

impl From<Vec<ValidationError>> for ValidationReport {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}
