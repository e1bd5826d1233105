//! Content-driven layout decisions for a label

use label_printer::text_len;
use shared::models::MaterialEntry;

/// Materials up to this count are listed in one column
const SINGLE_COLUMN_MAX: usize = 3;

/// Price text longer than this is `long`
const LONG_PRICE_CHARS: usize = 10;
/// Price text longer than this is `very-long`
const VERY_LONG_PRICE_CHARS: usize = 15;

/// How the materials list is arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialsLayout<'a> {
    SingleColumn(&'a [MaterialEntry]),
    /// Left column holds the first `ceil(n / 2)` entries
    TwoColumns {
        left: &'a [MaterialEntry],
        right: &'a [MaterialEntry],
    },
}

impl<'a> MaterialsLayout<'a> {
    pub fn of(materials: &'a [MaterialEntry]) -> Self {
        if materials.len() <= SINGLE_COLUMN_MAX {
            MaterialsLayout::SingleColumn(materials)
        } else {
            let (left, right) = materials.split_at(materials.len().div_ceil(2));
            MaterialsLayout::TwoColumns { left, right }
        }
    }
}

/// Which currencies the price line shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceVariant {
    Dual { bgn: String, eur: String },
    EurOnly(String),
    BgnOnly(String),
}

impl PriceVariant {
    /// Plain text of the price line
    pub fn text(&self) -> String {
        match self {
            PriceVariant::Dual { bgn, eur } => format!("{bgn} лв | {eur}€"),
            PriceVariant::EurOnly(eur) => format!("{eur}€"),
            PriceVariant::BgnOnly(bgn) => format!("{bgn} лв"),
        }
    }
}

/// Scaling tag derived from the price text length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceSizeClass {
    #[default]
    Normal,
    Long,
    VeryLong,
}

impl PriceSizeClass {
    pub fn for_text(text: &str) -> Self {
        match text_len(text) {
            n if n > VERY_LONG_PRICE_CHARS => PriceSizeClass::VeryLong,
            n if n > LONG_PRICE_CHARS => PriceSizeClass::Long,
            _ => PriceSizeClass::Normal,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PriceSizeClass::Normal => "normal",
            PriceSizeClass::Long => "long",
            PriceSizeClass::VeryLong => "very-long",
        }
    }

    /// CSS class added to the price container (empty for normal)
    pub const fn css_class(&self) -> &'static str {
        match self {
            PriceSizeClass::Normal => "",
            PriceSizeClass::Long => "long-price",
            PriceSizeClass::VeryLong => "very-long-price",
        }
    }
}

/// Resolved price section of a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    pub variant: PriceVariant,
    pub size_class: PriceSizeClass,
}

/// Price section for the given formatted prices, or `None` when both
/// are empty
pub fn price_line(price_eur: &str, price_bgn: &str) -> Option<PriceLine> {
    let variant = match (price_eur.is_empty(), price_bgn.is_empty()) {
        (false, false) => PriceVariant::Dual {
            bgn: price_bgn.to_string(),
            eur: price_eur.to_string(),
        },
        (false, true) => PriceVariant::EurOnly(price_eur.to_string()),
        (true, false) => PriceVariant::BgnOnly(price_bgn.to_string()),
        (true, true) => return None,
    };
    let size_class = PriceSizeClass::for_text(&variant.text());
    Some(PriceLine { variant, size_class })
}
