//! Windows detection under `%APPDATA%`.
//!
//! The regular desktop installer puts Spotify in `%APPDATA%\Spotify`.  The
//! Microsoft Store build lives in a sandboxed package directory that cannot
//! be patched, so when the usual directory is missing the user is told which
//! build is supported.

use std::path::PathBuf;

use super::{first_existing, PathProbe};

const STORE_VERSION_HINT: &str =
    "Please make sure you are using the normal Spotify version, not the Windows Store version.";

/// Windows implementation of [`PathProbe`].
pub struct WindowsPathProbe {
    appdata: Option<PathBuf>,
}

impl WindowsPathProbe {
    /// Reads `%APPDATA%` from the environment.
    pub fn from_env() -> Self {
        Self {
            appdata: std::env::var_os("APPDATA").map(PathBuf::from),
        }
    }

    /// Uses `appdata` in place of `%APPDATA%`.
    pub fn with_appdata(appdata: impl Into<PathBuf>) -> Self {
        Self {
            appdata: Some(appdata.into()),
        }
    }

    fn spotify_dir(&self) -> Option<PathBuf> {
        self.appdata.as_ref().map(|a| a.join("Spotify"))
    }
}

impl PathProbe for WindowsPathProbe {
    fn app_path(&self) -> Option<PathBuf> {
        first_existing(self.spotify_dir())
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        first_existing(self.spotify_dir().map(|d| d.join("prefs")))
    }

    fn app_path_hint(&self) -> Option<&'static str> {
        Some(STORE_VERSION_HINT)
    }
}
