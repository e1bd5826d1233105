//! One label document per physical label

use shared::models::{LabelDocument, SubmissionRecord};

/// Expand a validated submission into per-unit label documents
///
/// Sizes keep their entry order and each size yields `quantity`
/// consecutive labels. The record is assumed to have passed validation.
pub fn expand(record: &SubmissionRecord) -> Vec<LabelDocument> {
    let global_count = record.label_count();
    let mut labels = Vec::with_capacity(global_count as usize);
    let mut global_index = 0;

    for entry in &record.sizes {
        for unit_index in 1..=entry.quantity {
            global_index += 1;
            labels.push(LabelDocument {
                size: entry.size.clone(),
                origin: record.origin.clone(),
                manufacturer: record.manufacturer.clone(),
                importer: record.importer.clone(),
                product: record.product.clone(),
                materials: record.materials.clone(),
                price_eur: record.price_eur.clone(),
                price_bgn: record.price_bgn.clone(),
                unit_index,
                unit_count_for_size: entry.quantity,
                global_index,
                global_count,
            });
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SizeEntry;

    #[test]
    fn test_expand_order_and_indices() {
        let record = SubmissionRecord {
            sizes: vec![SizeEntry::new("M", 2), SizeEntry::new("L", 1)],
            ..Default::default()
        };
        let labels = expand(&record);
        let summary: Vec<_> = labels
            .iter()
            .map(|l| (l.size.as_str(), l.unit_index, l.unit_count_for_size, l.global_index))
            .collect();
        assert_eq!(summary, vec![("M", 1, 2, 1), ("M", 2, 2, 2), ("L", 1, 1, 3)]);
        assert!(labels.iter().all(|l| l.global_count == 3));
    }

    #[test]
    fn test_expand_matches_flattened_sizes() {
        let record = SubmissionRecord {
            sizes: vec![SizeEntry::new("40", 3), SizeEntry::new("-", 2)],
            ..Default::default()
        };
        let sizes: Vec<String> = expand(&record).into_iter().map(|l| l.size).collect();
        assert_eq!(sizes, record.flattened_sizes());
    }

    #[test]
    fn test_expand_without_sizes() {
        assert!(expand(&SubmissionRecord::default()).is_empty());
    }
}
