//! First-run document construction.
//!
//! [`synthesize`] writes every schema key at its default, then applies the
//! values detected on the host ([`Overrides`]), then appends the `Backup`
//! section used by the version-migration logic.

use crate::domain::schema::Schema;
use crate::ini::document::IniDocument;

pub const BACKUP_SECTION: &str = "Backup";
pub const BACKUP_VERSION_KEY: &str = "version";
pub const BACKUP_COMMENT: &str = "DO NOT CHANGE!";

/// Values that replace schema defaults in a freshly synthesized document.
///
/// Kept apart from [`Schema`] so that detecting host paths never changes the
/// process-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: Vec<(String, String, String)>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `section.key = value`, replacing an earlier override of the
    /// same key.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .values
            .iter_mut()
            .find(|(s, k, _)| s == section && k == key)
        {
            Some(existing) => existing.2 = value,
            None => self
                .values
                .push((section.to_string(), key.to_string(), value)),
        }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(s, k, _)| s == section && k == key)
            .map(|(_, _, v)| v.as_str())
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.values
            .iter()
            .map(|(s, k, v)| (s.as_str(), k.as_str(), v.as_str()))
    }
}

/// Builds a complete default document from `schema` and `overrides`.
pub fn synthesize(schema: &Schema, overrides: &Overrides) -> IniDocument {
    let mut doc = IniDocument::new();

    for section_schema in schema.sections() {
        let section = doc.section_or_insert(section_schema.name);
        for (key, default) in section_schema.keys {
            section.set(*key, *default);
        }
    }

    for (section, key, value) in overrides.iter() {
        doc.section_or_insert(section).set(key, value);
    }

    let backup = doc.section_or_insert(BACKUP_SECTION);
    backup.set_comment(Some(BACKUP_COMMENT.to_string()));
    backup.set(BACKUP_VERSION_KEY, "");

    doc
}
