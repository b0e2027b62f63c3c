//! The `Config` handle: open-or-create, section access, and persistence.
//!
//! # Loading flow
//!
//! ```text
//! Config::open(path)
//!  ├─ file parses ──► reconcile against Schema
//!  │                   ├─ nothing added ──► Loaded
//!  │                   └─ keys added    ──► write back, Updated
//!  └─ missing / unreadable / malformed
//!                 ──► synthesize defaults (probe host paths), write, Created
//! ```
//!
//! A missing or broken file is the normal first-run path, not an error.  Only
//! failures to *write* are returned as [`ConfigError`].

use std::path::{Path, PathBuf};

use spicecfg_core::{reconcile, IniDocument, ReconcileReport, Schema, Section};
use tracing::{debug, info, warn};

use crate::application::synthesize_defaults::{synthesize_defaults, SynthesisWarning};
use crate::infrastructure::path_probe::{native_probe, PathProbe};
use crate::infrastructure::storage::config_file::{read_document, write_document, ConfigError};

/// What [`Config::open`] had to do to produce a usable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was complete; nothing was written.
    Loaded,
    /// Missing schema keys were added and the file was rewritten.
    Updated(ReconcileReport),
    /// The file could not be loaded and a default one was generated.
    Created {
        /// Why the existing file was not used.
        reason: String,
        /// Paths that could not be detected.
        warnings: Vec<SynthesisWarning>,
    },
}

/// A loaded `config.ini` bound to its path on disk.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    document: IniDocument,
}

impl Config {
    /// Opens the config at `path`, creating or updating it as needed, using the
    /// path probe for the running OS.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if writing the file fails.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, LoadOutcome), ConfigError> {
        let probe = native_probe();
        Self::open_with(path, &Schema::canonical(), probe.as_ref())
    }

    /// Like [`Config::open`], with an explicit path probe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if writing the file fails.
    pub fn open_with_probe(
        path: impl Into<PathBuf>,
        probe: &dyn PathProbe,
    ) -> Result<(Self, LoadOutcome), ConfigError> {
        Self::open_with(path, &Schema::canonical(), probe)
    }

    /// Like [`Config::open`], with an explicit schema and path probe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if writing the file fails.
    pub fn open_with(
        path: impl Into<PathBuf>,
        schema: &Schema,
        probe: &dyn PathProbe,
    ) -> Result<(Self, LoadOutcome), ConfigError> {
        let path = path.into();

        match read_document(&path) {
            Ok(mut document) => {
                let report = reconcile(&mut document, schema);
                let config = Self { path, document };
                if report.changed() {
                    config.write()?;
                    info!(
                        path = %config.path.display(),
                        added = report.added_keys.len(),
                        "Config is updated."
                    );
                    Ok((config, LoadOutcome::Updated(report)))
                } else {
                    debug!(path = %config.path.display(), "config is up to date");
                    Ok((config, LoadOutcome::Loaded))
                }
            }
            Err(e) => {
                match &e {
                    ConfigError::Io { source, .. }
                        if source.kind() == std::io::ErrorKind::NotFound =>
                    {
                        debug!(path = %path.display(), "no config file yet")
                    }
                    other => warn!("existing config could not be used, regenerating: {other}"),
                }

                let (document, warnings) = synthesize_defaults(schema, probe);
                let config = Self { path, document };
                config.write()?;
                info!(path = %config.path.display(), "Default config.ini generated.");
                Ok((
                    config,
                    LoadOutcome::Created {
                        reason: e.to_string(),
                        warnings,
                    },
                ))
            }
        }
    }

    /// Wraps an in-memory document without touching the disk.
    pub fn from_document(path: impl Into<PathBuf>, document: IniDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Writes the current document to [`Config::path`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document cannot be serialized or the
    /// file cannot be written.
    pub fn write(&self) -> Result<(), ConfigError> {
        write_document(&self.path, &self.document)
    }

    /// Returns the section called `name`.
    ///
    /// # Panics
    ///
    /// Panics if the section does not exist.  Every schema section is present
    /// after [`Config::open`], so a missing one is a programming error; use
    /// [`Config::try_section`] for names that come from user input.
    pub fn section(&self, name: &str) -> &Section {
        match self.document.section(name) {
            Some(section) => section,
            None => panic!("config section [{name}] is missing from {}", self.path.display()),
        }
    }

    /// Mutable counterpart of [`Config::section`].
    ///
    /// # Panics
    ///
    /// Panics if the section does not exist.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let path = self.path.display().to_string();
        match self.document.section_mut(name) {
            Some(section) => section,
            None => panic!("config section [{name}] is missing from {path}"),
        }
    }

    pub fn try_section(&self, name: &str) -> Option<&Section> {
        self.document.section(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &IniDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut IniDocument {
        &mut self.document
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::path_probe::MockPathProbe;

    #[test]
    fn test_open_missing_file_creates_it() {
        // Arrange
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.ini");

        // Act
        let (config, outcome) =
            Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

        // Assert
        assert!(path.exists());
        assert!(matches!(outcome, LoadOutcome::Created { .. }));
        assert_eq!(config.section("Setting").get("inject_css"), Some("1"));
        assert_eq!(config.path(), path.as_path());
    }

    #[test]
    fn test_open_complete_file_reports_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.ini");
        Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("create");

        let (_, outcome) =
            Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("reopen");

        assert_eq!(outcome, LoadOutcome::Loaded);
    }

    #[test]
    fn test_section_mut_changes_persist_after_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.ini");
        let (mut config, _) =
            Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("open");

        config.section_mut("Setting").set("current_theme", "Dribbblish");
        config.write().expect("write");
        let (reloaded, _) =
            Config::open_with_probe(&path, &MockPathProbe::nothing_found()).expect("reopen");

        assert_eq!(reloaded.section("Setting").get("current_theme"), Some("Dribbblish"));
    }

    #[test]
    #[should_panic(expected = "config section [Nope] is missing")]
    fn test_section_panics_for_unknown_section() {
        let config = Config::from_document("/tmp/unused.ini", IniDocument::new());
        let _ = config.section("Nope");
    }

    #[test]
    fn test_try_section_returns_none_for_unknown_section() {
        let config = Config::from_document("/tmp/unused.ini", IniDocument::new());
        assert!(config.try_section("Nope").is_none());
    }
}
