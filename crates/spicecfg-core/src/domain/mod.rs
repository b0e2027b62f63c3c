//! Config rules with no infrastructure dependencies.
//!
//! Nothing here reads the environment or the file system, so every rule can
//! be tested with plain in-memory documents.

/// The canonical sections, keys, and default values.
pub mod schema;

/// Additive-only merge of a loaded document against the schema.
pub mod reconcile;

/// First-run document construction.
pub mod synthesis;
