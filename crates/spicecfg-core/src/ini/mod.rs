//! INI file format: the in-memory document model and the text codec.
//!
//! The config file uses the classic sectioned key/value layout:
//!
//! ```text
//! [Setting]
//! spotify_path = /opt/spotify
//! current_theme = SpicetifyDefault
//!
//! ; DO NOT CHANGE!
//! [Backup]
//! version =
//! ```
//!
//! - **`document`** – [`document::IniDocument`], an ordered list of sections,
//!   each an ordered list of key/value entries with optional comments.
//! - **`codec`** – [`codec::parse_document`] and
//!   [`codec::serialize_document`], converting between text and the model.

pub mod codec;
pub mod document;
