//! Additive-only merge of a loaded document against the schema.
//!
//! Every declared section and key that the document lacks is created with its
//! default value.  Values already present are left exactly as they are, even
//! if they are empty or look stale, and sections or keys the user added on
//! their own are never removed.  Because additions are keyed by name, running
//! the merge a second time is a no-op.

use tracing::debug;

use crate::domain::schema::Schema;
use crate::ini::document::IniDocument;

/// What [`reconcile`] added to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Sections that did not exist before.
    pub added_sections: Vec<String>,
    /// `(section, key)` pairs that did not exist before.
    pub added_keys: Vec<(String, String)>,
}

impl ReconcileReport {
    /// `true` when the document was modified and should be written back.
    pub fn changed(&self) -> bool {
        !self.added_sections.is_empty() || !self.added_keys.is_empty()
    }
}

/// Brings `doc` up to `schema`, returning what was added.
pub fn reconcile(doc: &mut IniDocument, schema: &Schema) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for section_schema in schema.sections() {
        if !doc.contains_section(section_schema.name) {
            debug!(section = section_schema.name, "adding missing section");
            report.added_sections.push(section_schema.name.to_string());
        }
        let section = doc.section_or_insert(section_schema.name);

        for (key, default) in section_schema.keys {
            if section.insert_if_absent(key, default) {
                debug!(section = section_schema.name, key, "adding missing key");
                report
                    .added_keys
                    .push((section_schema.name.to_string(), key.to_string()));
            }
        }
    }

    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::SectionSchema;
    use crate::ini::codec::parse_document;

    const TINY: &[SectionSchema] = &[SectionSchema {
        name: "A",
        keys: &[("x", "1"), ("y", "")],
    }];

    #[test]
    fn test_reconcile_empty_document_adds_everything() {
        // Arrange
        let mut doc = IniDocument::new();

        // Act
        let report = reconcile(&mut doc, &Schema::from_static(TINY));

        // Assert
        assert!(report.changed());
        assert_eq!(report.added_sections, vec!["A".to_string()]);
        assert_eq!(report.added_keys.len(), 2);
        assert_eq!(doc.get("A", "x"), Some("1"));
        assert_eq!(doc.get("A", "y"), Some(""));
    }

    #[test]
    fn test_reconcile_adds_missing_key_to_existing_section() {
        let mut doc = parse_document("[A]\nx = 5\n").expect("parse");

        let report = reconcile(&mut doc, &Schema::from_static(TINY));

        assert!(report.added_sections.is_empty());
        assert_eq!(report.added_keys, vec![("A".to_string(), "y".to_string())]);
        assert_eq!(doc.get("A", "x"), Some("5"));
    }

    #[test]
    fn test_reconcile_second_run_reports_no_changes() {
        let mut doc = IniDocument::new();
        reconcile(&mut doc, &Schema::canonical());

        let second = reconcile(&mut doc, &Schema::canonical());

        assert!(!second.changed());
        assert_eq!(second, ReconcileReport::default());
    }

    #[test]
    fn test_reconcile_keeps_user_section_order() {
        let mut doc = parse_document("[Mine]\nk = v\n[Setting]\ninject_css = 0\n").expect("parse");

        reconcile(&mut doc, &Schema::canonical());

        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, vec!["Mine", "Setting", "Preprocesses", "AdditionalOptions"]);
        assert_eq!(doc.get("Setting", "inject_css"), Some("0"));
    }
}
