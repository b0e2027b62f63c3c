//! Text codec for the INI config format.
//!
//! Line grammar:
//! ```text
//! ; comment            full-line comment (`#` works too)
//! [Section]            section header
//! key = value          entry (`:` is accepted as the delimiter as well)
//! ```
//!
//! Rules:
//! - The first `=` or `:` on a line splits key from value; both are trimmed.
//! - A value wrapped in a matching pair of double quotes is unquoted.
//! - No inline comments and no line continuation: a trailing `\` is literal.
//!   The one exception is text after a header's `]`, which becomes part of
//!   the section comment.
//! - Only `\n` and `\r\n` end a line; a lone `\r` is ordinary content.
//! - Comment lines directly above a header or key attach to it.
//! - Keys before the first header go to [`DEFAULT_SECTION`].
//! - A repeated header merges into the earlier section; a repeated key keeps
//!   its last value.

use thiserror::Error;

use crate::ini::document::{Entry, IniDocument, DEFAULT_SECTION};

/// Errors that can occur while parsing or serializing a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IniError {
    /// A line starts with `[` but has no closing `]`.
    #[error("line {line}: unterminated section header")]
    UnterminatedSectionHeader { line: usize },

    /// A header of the form `[]` or `[   ]`.
    #[error("line {line}: empty section name")]
    EmptySectionName { line: usize },

    /// A non-comment, non-header line without `=` or `:`.
    #[error("line {line}: expected `key = value`, got {content:?}")]
    MissingDelimiter { line: usize, content: String },

    /// A line of the form `= value`.
    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    /// A name that cannot be written back without changing its meaning.
    #[error("section {section:?}: key {key:?} cannot be represented in INI")]
    InvalidKey { section: String, key: String },

    /// A value containing `\n`.
    #[error("section {section:?}: value of {key:?} contains a line break")]
    UnrepresentableValue { section: String, key: String },

    /// A section name containing `]` or `\n`.
    #[error("section name {0:?} cannot be represented in INI")]
    InvalidSectionName(String),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parses INI text into an [`IniDocument`].
///
/// # Errors
///
/// Returns [`IniError`] for the first malformed line.
///
/// # Examples
///
/// ```rust
/// use spicecfg_core::parse_document;
///
/// let doc = parse_document("[Setting]\ninject_css = 1\n").unwrap();
/// assert_eq!(doc.get("Setting", "inject_css"), Some("1"));
/// ```
pub fn parse_document(text: &str) -> Result<IniDocument, IniError> {
    let mut doc = IniDocument::new();
    let mut current = DEFAULT_SECTION.to_string();
    let mut pending_comment: Vec<String> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let raw = if idx == 0 {
            raw.trim_start_matches('\u{feff}')
        } else {
            raw
        };
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix(';').or_else(|| line.strip_prefix('#')) {
            pending_comment.push(comment.trim().to_string());
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let (name, rest) = header
                .split_once(']')
                .ok_or(IniError::UnterminatedSectionHeader { line: line_no })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(IniError::EmptySectionName { line: line_no });
            }

            // Text after `]`, e.g. `[Setting] ; note`, joins the section comment.
            let rest = rest.trim();
            let rest = rest
                .strip_prefix(';')
                .or_else(|| rest.strip_prefix('#'))
                .unwrap_or(rest)
                .trim();
            if !rest.is_empty() {
                pending_comment.push(rest.to_string());
            }

            let section = doc.section_or_insert(name);
            if let Some(comment) = take_comment(&mut pending_comment) {
                let merged = match section.comment() {
                    Some(existing) => format!("{existing}\n{comment}"),
                    None => comment,
                };
                section.set_comment(Some(merged));
            }
            current = name.to_string();
            continue;
        }

        let split = line
            .find(['=', ':'])
            .ok_or_else(|| IniError::MissingDelimiter {
                line: line_no,
                content: line.to_string(),
            })?;
        let key = line[..split].trim();
        if key.is_empty() {
            return Err(IniError::EmptyKey { line: line_no });
        }
        let value = unquote(line[split + 1..].trim());

        doc.section_or_insert(&current).upsert_entry(Entry {
            key: key.to_string(),
            value: value.to_string(),
            comment: take_comment(&mut pending_comment),
        });
    }

    doc.set_trailing_comment(take_comment(&mut pending_comment));
    Ok(doc)
}

fn take_comment(lines: &mut Vec<String>) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(std::mem::take(lines).join("\n"))
    }
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// ── Serialization ─────────────────────────────────────────────────────────────

/// Serializes `doc` into INI text.
///
/// Sections are separated by a blank line.  A non-empty, comment-free
/// [`DEFAULT_SECTION`] at the top of the document is written without a
/// header, the way it was read.
///
/// # Errors
///
/// Returns [`IniError`] if a section name, key, or value cannot be written
/// without being misread on the next parse.  Anything produced by
/// [`parse_document`] can be written.
pub fn serialize_document(doc: &IniDocument) -> Result<String, IniError> {
    let mut out = String::new();

    for (idx, section) in doc.sections().enumerate() {
        validate_section_name(section.name())?;

        let headerless = idx == 0
            && section.name() == DEFAULT_SECTION
            && section.comment().is_none()
            && !section.is_empty();
        if !out.is_empty() {
            out.push('\n');
        }

        if let Some(comment) = section.comment() {
            write_comment(&mut out, comment);
        }
        if !headerless {
            out.push('[');
            out.push_str(section.name());
            out.push_str("]\n");
        }

        for entry in section.entries() {
            validate_entry(section.name(), entry)?;
            if let Some(comment) = &entry.comment {
                write_comment(&mut out, comment);
            }
            out.push_str(&entry.key);
            out.push_str(" =");
            if !entry.value.is_empty() {
                out.push(' ');
                out.push_str(&quote(&entry.value));
            }
            out.push('\n');
        }
    }

    if let Some(comment) = doc.trailing_comment() {
        if !out.is_empty() {
            out.push('\n');
        }
        write_comment(&mut out, comment);
    }

    Ok(out)
}

fn write_comment(out: &mut String, comment: &str) {
    for line in comment.lines() {
        if line.is_empty() {
            out.push_str(";\n");
        } else {
            out.push_str("; ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

fn quote(value: &str) -> std::borrow::Cow<'_, str> {
    if value != value.trim() || value.starts_with('"') {
        format!("\"{value}\"").into()
    } else {
        value.into()
    }
}

fn validate_section_name(name: &str) -> Result<(), IniError> {
    if name.trim().is_empty() || name != name.trim() || name.contains([']', '\n']) {
        return Err(IniError::InvalidSectionName(name.to_string()));
    }
    Ok(())
}

fn validate_entry(section: &str, entry: &Entry) -> Result<(), IniError> {
    let key = &entry.key;
    if key.trim().is_empty()
        || key != key.trim()
        || key.contains(['=', ':', '\n'])
        || key.starts_with([';', '#', '['])
    {
        return Err(IniError::InvalidKey {
            section: section.to_string(),
            key: key.clone(),
        });
    }
    if entry.value.contains('\n') {
        return Err(IniError::UnrepresentableValue {
            section: section.to_string(),
            key: key.clone(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
