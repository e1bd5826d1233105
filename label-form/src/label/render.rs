//! HTML rendering of label documents

use super::layout::{MaterialsLayout, PriceVariant, price_line};
use label_printer::{MarkupBuilder, upper};
use shared::models::{LabelDocument, MaterialEntry};

/// Heading shown above each label in the preview sheet
pub fn preview_header(label: &LabelDocument) -> String {
    format!(
        "Етикет {} от {} - Размер: {} ({} от {})",
        label.global_index, label.global_count, label.size, label.unit_index, label.unit_count_for_size
    )
}

/// Renders one label
pub struct LabelRenderer<'a> {
    label: &'a LabelDocument,
}

impl<'a> LabelRenderer<'a> {
    pub fn new(label: &'a LabelDocument) -> Self {
        Self { label }
    }

    pub fn render(&self) -> String {
        let mut b = MarkupBuilder::new();
        self.write(&mut b);
        b.build()
    }

    pub(crate) fn write(&self, b: &mut MarkupBuilder) {
        let label = self.label;
        b.open("div", "garment-label");

        b.open("div", "label-header");
        b.element("div", "size-badge", &format!("Размер {}", label.size));
        b.close();

        Self::section(b, "origin-section", "ПРОИЗХОД", "", &upper(&label.origin));
        Self::section(b, "manufacturer-section", "ПРОИЗВОДИТЕЛ", "manufacturer-name", &label.manufacturer);
        Self::section(b, "importer-section", "ВНОСИТЕЛ", "importer-name", &label.importer);
        Self::section(b, "product-section", "АРТИКУЛ", "", &label.product);

        b.open("div", "label-section materials-section");
        b.element("div", "section-title", "СЪСТАВ");
        b.open("div", "materials-list");
        self.write_materials(b);
        b.close();
        b.close();

        b.open("div", "label-footer");
        self.write_price(b);
        b.close();

        b.close();
    }

    fn section(b: &mut MarkupBuilder, section: &str, title: &str, content_class: &str, content: &str) {
        b.open("div", &format!("label-section {section}"));
        b.element("div", "section-title", title);
        b.element("div", &format!("section-content {content_class}"), content);
        b.close();
    }

    fn write_materials(&self, b: &mut MarkupBuilder) {
        match MaterialsLayout::of(&self.label.materials) {
            MaterialsLayout::SingleColumn(items) => {
                b.open("div", "materials-single-column");
                Self::material_items(b, items);
                b.close();
            }
            MaterialsLayout::TwoColumns { left, right } => {
                b.open("div", "materials-two-columns");
                b.open("div", "materials-column-left");
                Self::material_items(b, left);
                b.close();
                b.open("div", "materials-column-right");
                Self::material_items(b, right);
                b.close();
                b.close();
            }
        }
    }

    fn material_items(b: &mut MarkupBuilder, items: &[MaterialEntry]) {
        for item in items {
            let text = format!("{}% {}", item.percentage, upper(item.material.as_str()));
            b.element("div", "material-item", &text);
        }
    }

    fn write_price(&self, b: &mut MarkupBuilder) {
        let Some(line) = price_line(&self.label.price_eur, &self.label.price_bgn) else {
            return;
        };
        b.open("div", &format!("price-container {}", line.size_class.css_class()));
        b.element("div", "price-label", "Цена:");
        match &line.variant {
            PriceVariant::Dual { bgn, eur } => {
                b.open("div", "price-dual");
                b.element("span", "price-bgn", &format!("{bgn} лв"));
                b.element("span", "price-separator", "|");
                b.element("span", "price-eur", &format!("{eur}€"));
                b.close();
            }
            PriceVariant::EurOnly(_) | PriceVariant::BgnOnly(_) => {
                b.element("div", "price-single", &line.variant.text());
            }
        }
        b.close();
    }
}

/// Renders the preview sheet: every label under its numbered heading
pub struct SheetRenderer<'a> {
    labels: &'a [LabelDocument],
}

impl<'a> SheetRenderer<'a> {
    pub fn new(labels: &'a [LabelDocument]) -> Self {
        Self { labels }
    }

    pub fn render(&self) -> String {
        let mut b = MarkupBuilder::new();
        for label in self.labels {
            b.open("div", "label-container");
            b.open("div", "label-header-info");
            b.element("h4", "", &preview_header(label));
            b.close();
            LabelRenderer::new(label).write(&mut b);
            b.close();
        }
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Material;

    fn label() -> LabelDocument {
        LabelDocument {
            size: "M".into(),
            origin: "Турция".into(),
            manufacturer: "Фабрика АД".into(),
            importer: "Вносител & Син".into(),
            product: "Тениска".into(),
            materials: vec![
                MaterialEntry::new(Material::Cotton, 95),
                MaterialEntry::new(Material::Elastane, 5),
            ],
            price_eur: "15.29".into(),
            price_bgn: "29.90".into(),
            unit_index: 2,
            unit_count_for_size: 3,
            global_index: 4,
            global_count: 7,
        }
    }

    #[test]
    fn test_header_text() {
        assert_eq!(preview_header(&label()), "Етикет 4 от 7 - Размер: M (2 от 3)");
    }

    #[test]
    fn test_label_content() {
        let html = LabelRenderer::new(&label()).render();
        assert!(html.starts_with(r#"<div class="garment-label">"#));
        assert!(html.contains(r#"<div class="size-badge">Размер M</div>"#));
        assert!(html.contains(r#"<div class="section-content">ТУРЦИЯ</div>"#));
        assert!(html.contains(r#"<div class="section-content manufacturer-name">Фабрика АД</div>"#));
        assert!(html.contains("Вносител &amp; Син"));
        assert!(html.contains(r#"<div class="material-item">95% ПАМУК</div>"#));
        assert!(html.contains("materials-single-column"));
        assert!(html.contains(r#"<div class="price-container very-long-price">"#));
        assert!(html.contains(r#"<span class="price-bgn">29.90 лв</span>"#));
        assert!(html.contains(r#"<span class="price-eur">15.29€</span>"#));
    }

    #[test]
    fn test_two_columns_and_single_price() {
        let mut doc = label();
        doc.materials = Material::ALL[..4].iter().map(|m| MaterialEntry::new(*m, 25)).collect();
        doc.price_eur.clear();
        let html = LabelRenderer::new(&doc).render();
        assert!(html.contains("materials-column-left"));
        assert!(html.contains("materials-column-right"));
        assert!(html.contains(r#"<div class="price-container"><div class="price-label">Цена:</div><div class="price-single">29.90 лв</div></div>"#));
    }

    #[test]
    fn test_no_price_section_without_prices() {
        let mut doc = label();
        doc.price_eur.clear();
        doc.price_bgn.clear();
        let html = LabelRenderer::new(&doc).render();
        assert!(html.contains(r#"<div class="label-footer"></div>"#));
        assert!(!html.contains("price-container"));
    }

    #[test]
    fn test_sheet_wraps_every_label() {
        let labels = vec![label(), label()];
        let html = SheetRenderer::new(&labels).render();
        assert_eq!(html.matches(r#"<div class="label-container">"#).count(), 2);
        assert_eq!(html.matches("<h4>Етикет 4 от 7").count(), 2);
    }
}
