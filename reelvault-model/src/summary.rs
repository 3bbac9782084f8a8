use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Per-category and per-type counts over a single page of results.
///
/// These are deliberately computed over the returned page only, not the
/// whole collection; the listing contract exposes them as a summary of what
/// the caller just received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub by_category: BTreeMap<String, u64>,
    pub by_type: BTreeMap<String, u64>,
}

/// Tally the page. Records without a usable `category`/`type` fall into an
/// `"Unknown"` bucket.
pub fn page_summary(docs: &[Value]) -> PageSummary {
    let mut summary = PageSummary::default();

    for doc in docs {
        *summary
            .by_category
            .entry(label(doc, "category"))
            .or_insert(0) += 1;
        *summary.by_type.entry(label(doc, "type")).or_insert(0) += 1;
    }

    summary
}

fn label(doc: &Value, field: &str) -> String {
    doc.get(field)
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_cover_the_page_only() {
        let docs = vec![
            json!({"category": "Drama", "type": "movie"}),
            json!({"category": "Drama", "type": "series"}),
            json!({"category": "Comedy", "type": "movie"}),
        ];

        let summary = page_summary(&docs);
        assert_eq!(summary.by_category["Drama"], 2);
        assert_eq!(summary.by_category["Comedy"], 1);
        assert_eq!(summary.by_type["movie"], 2);
        assert_eq!(summary.by_type["series"], 1);
    }

    #[test]
    fn missing_fields_count_as_unknown() {
        let docs = vec![json!({"title": "No taxonomy"}), json!({"category": 7})];

        let summary = page_summary(&docs);
        assert_eq!(summary.by_category["Unknown"], 2);
        assert_eq!(summary.by_type["Unknown"], 2);
    }

    #[test]
    fn empty_page_yields_empty_summary() {
        assert_eq!(page_summary(&[]), PageSummary::default());
    }
}
