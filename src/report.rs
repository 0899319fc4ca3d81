//! Rendering and export of generated groupings.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::pack::Grouping;

/// Render groupings as plain text, one numbered group line per group.
///
/// A `Grouping N` header is added only when more than one grouping is
/// present.
pub fn render_text(groupings: &[Grouping]) -> String {
    let mut out = String::new();
    for (i, grouping) in groupings.iter().enumerate() {
        if groupings.len() > 1 {
            out.push_str(&format!("Grouping {}\n", i + 1));
        }
        for (gi, group) in grouping.iter().enumerate() {
            out.push_str(&format!(
                "Group {} ({}): {}\n",
                gi + 1,
                group.len(),
                group.join(", ")
            ));
        }
        if i + 1 < groupings.len() {
            out.push('\n');
        }
    }
    out
}

/// Everything a caller needs to persist or replay a grouping request.
///
/// Field names follow the camelCase interchange contract consumed by
/// external tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub items: Vec<String>,
    pub pairs: Vec<(String, String)>,
    pub num_groups: usize,
    pub allow_near: bool,
    pub generated_at: String,
    pub groupings: Vec<Grouping>,
}

impl ExportRecord {
    /// Build a record for the given request and results, stamped with the
    /// current UTC time.
    pub fn new(
        items: &[String],
        pairs: &[(String, String)],
        num_groups: usize,
        allow_near: bool,
        groupings: &[Grouping],
    ) -> Self {
        ExportRecord {
            items: items.to_vec(),
            pairs: pairs.to_vec(),
            num_groups,
            allow_near,
            generated_at: Utc::now().to_rfc3339(),
            groupings: groupings.to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grouping(groups: &[&[&str]]) -> Grouping {
        groups
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn single_grouping_renders_without_header() {
        let text = render_text(&[grouping(&[&["a", "b"], &["c"]])]);
        assert_eq!(text, "Group 1 (2): a, b\nGroup 2 (1): c\n");
    }

    #[test]
    fn multiple_groupings_get_headers_and_blank_separators() {
        let text = render_text(&[
            grouping(&[&["a"], &["b"]]),
            grouping(&[&["b"], &["a"]]),
        ]);
        assert_eq!(
            text,
            "Grouping 1\nGroup 1 (1): a\nGroup 2 (1): b\n\nGrouping 2\nGroup 1 (1): b\nGroup 2 (1): a\n"
        );
    }

    #[test]
    fn export_record_uses_camel_case_keys() {
        let items = vec!["a".to_string(), "b".to_string()];
        let pairs = vec![("a".to_string(), "b".to_string())];
        let record = ExportRecord::new(&items, &pairs, 1, false, &[grouping(&[&["a", "b"]])]);
        let json = record.to_json().unwrap();
        assert!(json.contains("\"numGroups\""));
        assert!(json.contains("\"allowNear\""));
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"groupings\""));
    }

    #[test]
    fn export_record_round_trips_through_json() {
        let items = vec!["a".to_string(), "b".to_string()];
        let record = ExportRecord::new(&items, &[], 2, true, &[grouping(&[&["a"], &["b"]])]);
        let json = record.to_json().unwrap();
        let back: ExportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items, record.items);
        assert_eq!(back.num_groups, 2);
        assert!(back.allow_near);
        assert_eq!(back.groupings, record.groupings);
    }
}
