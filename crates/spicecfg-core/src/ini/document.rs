//! In-memory model of an INI configuration file.
//!
//! Sections and keys keep the order in which they were first seen so that a
//! file written back to disk looks like the file the user last edited.  Names
//! are compared case-sensitively.

use serde::{Deserialize, Serialize};

/// Name of the implicit section that holds keys appearing before the first
/// `[header]` line.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A single `key = value` line, plus the comment lines written above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A named group of key/value entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl Section {
    /// Creates an empty section without a comment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The comment written above the section header, one line per `\n`.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|e| e.value.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Sets `key` to `value`, appending a new entry when the key is absent.
    ///
    /// Returns the previous value when one was replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => Some(std::mem::replace(&mut existing.value, value)),
            None => {
                self.entries.push(Entry {
                    key,
                    value,
                    comment: None,
                });
                None
            }
        }
    }

    /// Adds `key = value` only if `key` is not present yet.
    ///
    /// Returns `true` when the entry was added.  An existing value is never
    /// touched, whatever it contains.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.entries.push(Entry {
            key: key.to_string(),
            value: value.to_string(),
            comment: None,
        });
        true
    }

    /// Replaces (or appends) an entry wholesale, comment included.
    ///
    /// A `None` comment keeps the comment already attached to the key.
    pub(crate) fn upsert_entry(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => {
                existing.value = entry.value;
                if entry.comment.is_some() {
                    existing.comment = entry.comment;
                }
            }
            None => self.entries.push(entry),
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(idx).value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered collection of [`Section`]s: the whole config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniDocument {
    #[serde(default)]
    sections: Vec<Section>,
    /// Comment lines after the last key of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trailing_comment: Option<String>,
}

impl IniDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Returns the section called `name`, appending an empty one first if
    /// the document does not have it.
    pub fn section_or_insert(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }

    /// Removes a whole section, returning it.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let idx = self.sections.iter().position(|s| s.name == name)?;
        Some(self.sections.remove(idx))
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn trailing_comment(&self) -> Option<&str> {
        self.trailing_comment.as_deref()
    }

    pub fn set_trailing_comment(&mut self, comment: Option<String>) {
        self.trailing_comment = comment;
    }

    /// Shortcut for `section(section)?.get(key)`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
