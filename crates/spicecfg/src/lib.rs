//! spicecfg library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does spicecfg do? (for beginners)
//!
//! Spicetify patches the Spotify desktop client and keeps its settings in
//! `config.ini`.  This crate owns that file:
//!
//! 1. On first run there is no file.  The host is probed for the Spotify
//!    install directory and `prefs` file, and a complete default config is
//!    written.
//! 2. On later runs the file is read and any keys added by newer releases
//!    are filled in with their defaults.  Values the user set are never
//!    changed or removed.
//! 3. Callers read and modify sections through [`Config`] and call
//!    [`Config::write`] to persist.

/// Application layer: the `Config` handle and first-run synthesis.
pub mod application;

/// Infrastructure layer: path probes and file storage.
pub mod infrastructure;

pub use application::config::{Config, LoadOutcome};
pub use application::synthesize_defaults::{DetectedPaths, SynthesisWarning};
pub use infrastructure::path_probe::{native_probe, MockPathProbe, PathProbe};
pub use infrastructure::storage::config_file::{default_config_path, ConfigError};
