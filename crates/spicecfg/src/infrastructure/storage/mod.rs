//! Storage infrastructure: config file persistence.
//!
//! The `config_file` sub-module handles:
//!
//! - Reading `config.ini` and handing the parsed document to the application.
//! - Writing the document back, creating the parent directory when needed.
//! - Resolving the platform-appropriate default location of the file.
//!
//! Parsing and serializing live in `spicecfg_core::ini`; this module only
//! moves bytes between that codec and the disk.

pub mod config_file;
