//! macOS detection: the app bundle in `/Applications` and the `prefs` file in
//! the user's Application Support directory.

use std::path::PathBuf;

use super::{first_existing, PathProbe};

/// macOS implementation of [`PathProbe`].
pub struct MacosPathProbe {
    applications_dir: PathBuf,
    home: Option<PathBuf>,
}

impl MacosPathProbe {
    /// Uses `/Applications` and `$HOME`.
    pub fn from_env() -> Self {
        Self {
            applications_dir: PathBuf::from("/Applications"),
            home: std::env::var_os("HOME").map(PathBuf::from),
        }
    }

    /// Uses explicit directories in place of `/Applications` and `$HOME`.
    pub fn with_dirs(applications_dir: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            applications_dir: applications_dir.into(),
            home: Some(home.into()),
        }
    }
}

impl PathProbe for MacosPathProbe {
    fn app_path(&self) -> Option<PathBuf> {
        first_existing(Some(
            self.applications_dir
                .join("Spotify.app")
                .join("Contents")
                .join("Resources"),
        ))
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        first_existing(self.home.as_ref().map(|h| {
            h.join("Library")
                .join("Application Support")
                .join("Spotify")
                .join("prefs")
        }))
    }
}
