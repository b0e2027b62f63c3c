//! # spicecfg-core
//!
//! Shared library for the Spicetify configuration manager containing the INI
//! document model and codec, the canonical config schema, and the
//! reconciliation rules that keep a user's `config.ini` in step with it.
//!
//! This crate has zero dependencies on OS APIs, environment variables, or the
//! file system.  Everything that touches the host (path detection, reading and
//! writing files) lives in the `spicecfg` crate.
//!
//! # Architecture overview (for beginners)
//!
//! Spicetify customizes the Spotify desktop client.  It keeps its settings in
//! a small INI file: where Spotify is installed, which theme is active, which
//! patches to apply.  New releases add settings, so an old file may be missing
//! keys the tool now expects.
//!
//! This crate defines:
//!
//! - **`ini`** – How the config file looks on disk.  Text is parsed into an
//!   ordered [`IniDocument`] of [`Section`]s and serialized back, keeping
//!   user-written comments and keys intact.
//!
//! - **`domain`** – The rules.  [`Schema`] lists every section and key the
//!   tool expects along with its default value; [`reconcile`] adds whatever
//!   is missing without ever touching existing values; [`synthesize`] builds
//!   a complete first-run document.

pub mod domain;
pub mod ini;

// Re-export the most-used types at the crate root so callers can write
// `spicecfg_core::Schema` instead of `spicecfg_core::domain::schema::Schema`.
pub use domain::reconcile::{reconcile, ReconcileReport};
pub use domain::schema::{
    Schema, SectionSchema, PREFS_PATH_KEY, SETTING_SECTION, SPOTIFY_PATH_KEY,
};
pub use domain::synthesis::{
    synthesize, Overrides, BACKUP_COMMENT, BACKUP_SECTION, BACKUP_VERSION_KEY,
};
pub use ini::codec::{parse_document, serialize_document, IniError};
pub use ini::document::{Entry, IniDocument, Section, DEFAULT_SECTION};
