//! Infrastructure layer: OS-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `spicecfg_core`, but MUST NOT
//! be imported by `spicecfg_core`.
//!
//! # Sub-modules
//!
//! - **`path_probe`** – Per-OS implementations of `PathProbe` that locate the
//!   Spotify install directory and `prefs` file.  The right one is picked at
//!   startup from the running OS; a `MockPathProbe` is provided for tests.
//!
//! - **`storage`** – Reads and writes `config.ini` and resolves its default
//!   location.

pub mod path_probe;
pub mod storage;
