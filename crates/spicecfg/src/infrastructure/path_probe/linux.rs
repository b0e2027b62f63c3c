//! Linux detection.
//!
//! Spotify on Linux comes from the Debian package, a distro package, or Snap,
//! and each puts the client somewhere else.  The application probe tries, in
//! order:
//!
//! 1. Every directory reported by `whereis spotify` that contains `Apps/`.
//! 2. The conventional install directories `/opt/spotify` and
//!    `/usr/share/spotify`, same `Apps/` check.
//! 3. The Snap install at `/snap/spotify/current/usr/share/spotify`.
//!
//! `whereis` output is meant for humans (`spotify: /usr/bin/spotify
//! /usr/share/spotify`), so only the `name:` label is stripped and the rest is
//! split on whitespace.  Step 2 covers hosts where `whereis` is missing or
//! reports only the launcher script.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{first_existing, has_child, PathProbe};

const BINARY_NAME: &str = "spotify";
const APPS_DIR: &str = "Apps";

/// Runs a binary-locator command and returns its raw stdout.
pub trait BinaryLocator {
    fn locate(&self, binary: &str) -> Option<String>;
}

/// Locator backed by the `whereis` command.
pub struct WhereisLocator;

impl BinaryLocator for WhereisLocator {
    fn locate(&self, binary: &str) -> Option<String> {
        match Command::new("whereis").arg(binary).output() {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                debug!(status = %output.status, "whereis exited unsuccessfully");
                None
            }
            Err(e) => {
                debug!("could not run whereis: {e}");
                None
            }
        }
    }
}

/// Locator that returns canned output.  Used by tests.
pub struct StaticLocator(pub Option<String>);

impl BinaryLocator for StaticLocator {
    fn locate(&self, _binary: &str) -> Option<String> {
        self.0.clone()
    }
}

/// Linux implementation of [`PathProbe`].
pub struct LinuxPathProbe {
    home: Option<PathBuf>,
    locator: Box<dyn BinaryLocator>,
    install_dirs: Vec<PathBuf>,
    snap_dir: PathBuf,
}

impl LinuxPathProbe {
    /// Uses `$HOME`, `whereis`, and the standard system directories.
    pub fn from_env() -> Self {
        Self {
            home: std::env::var_os("HOME").map(PathBuf::from),
            locator: Box::new(WhereisLocator),
            install_dirs: vec![
                PathBuf::from("/opt/spotify"),
                PathBuf::from("/usr/share/spotify"),
            ],
            snap_dir: PathBuf::from("/snap/spotify/current/usr/share/spotify"),
        }
    }

    /// Builds a probe rooted entirely in caller-supplied locations.
    pub fn new(
        home: Option<PathBuf>,
        locator: Box<dyn BinaryLocator>,
        install_dirs: Vec<PathBuf>,
        snap_dir: PathBuf,
    ) -> Self {
        Self {
            home,
            locator,
            install_dirs,
            snap_dir,
        }
    }

    fn locator_candidates(&self) -> Vec<PathBuf> {
        self.locator
            .locate(BINARY_NAME)
            .map(|out| parse_locator_output(&out, BINARY_NAME))
            .unwrap_or_default()
    }
}

impl PathProbe for LinuxPathProbe {
    fn app_path(&self) -> Option<PathBuf> {
        let with_apps = self
            .locator_candidates()
            .into_iter()
            .chain(self.install_dirs.iter().cloned())
            .find(|dir| has_child(dir, APPS_DIR));

        with_apps.or_else(|| first_existing(Some(self.snap_dir.clone())))
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        let home = self.home.as_deref()?;
        first_existing(prefs_candidates(home))
    }
}

/// Debian/distro package first, Snap second.
fn prefs_candidates(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".config/spotify/prefs"),
        home.join("snap/spotify/current/.config/spotify/prefs"),
    ]
}

/// Splits locator output such as `spotify: /usr/bin/spotify /usr/share/spotify`
/// into candidate paths.
///
/// The `binary:` label is dropped wherever it appears, so output covering
/// several lines or an empty result (`spotify:`) are both handled.
pub fn parse_locator_output(output: &str, binary: &str) -> Vec<PathBuf> {
    let label = format!("{binary}:");
    output
        .split_whitespace()
        .filter(|token| *token != label)
        .map(PathBuf::from)
        .collect()
}
