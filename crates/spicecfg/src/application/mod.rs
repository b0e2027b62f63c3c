//! Application layer use cases.
//!
//! - **`config`** – The [`config::Config`] handle: opens `config.ini`
//!   (reconciling or regenerating it), exposes its sections, and writes it
//!   back.
//!
//! - **`synthesize_defaults`** – Builds the first-run document by combining
//!   the schema with paths detected by a `PathProbe`.

pub mod config;
pub mod synthesize_defaults;
