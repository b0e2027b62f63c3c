//! Platform-specific detection of the Spotify install and `prefs` file.
//!
//! On first run the config has no idea where Spotify lives.  Each platform
//! has a short, fixed list of places Spotify is usually installed; a probe
//! walks that list and returns the first entry that exists.  Probes only
//! `stat` paths.  They never read files and never fail: "not found" is
//! a normal answer, represented as `None`.
//!
//! # Platform implementations
//!
//! Each platform implements [`PathProbe`].  All three are compiled on every
//! target (they only use `std`), and [`native_probe`] picks one at startup from
//! the running OS:
//!
//! | Module    | OS      | Application path                            | `prefs` file                                   |
//! |-----------|---------|---------------------------------------------|------------------------------------------------|
//! | `windows` | Windows | `%APPDATA%\Spotify`                         | `%APPDATA%\Spotify\prefs`                      |
//! | `linux`   | Linux   | `whereis spotify`, install dirs, snap       | `~/.config/spotify/prefs`, snap equivalent     |
//! | `macos`   | macOS   | `/Applications/Spotify.app/Contents/Resources` | `~/Library/Application Support/Spotify/prefs` |
//!
//! A [`MockPathProbe`] is always compiled so tests can drive first-run
//! synthesis without touching the host.

use std::path::{Path, PathBuf};

pub mod linux;
pub mod macos;
pub mod windows;

pub use linux::{BinaryLocator, LinuxPathProbe, StaticLocator, WhereisLocator};
pub use macos::MacosPathProbe;
pub use windows::WindowsPathProbe;

/// Best-effort lookup of Spotify's locations on the current host.
pub trait PathProbe {
    /// Directory Spotify is installed in, if one of the known locations exists.
    fn app_path(&self) -> Option<PathBuf>;

    /// Spotify's `prefs` file, if one of the known locations exists.
    fn prefs_path(&self) -> Option<PathBuf>;

    /// Extra advice shown to the user when [`PathProbe::app_path`] finds
    /// nothing.
    fn app_path_hint(&self) -> Option<&'static str> {
        None
    }
}

impl<P: PathProbe + ?Sized> PathProbe for Box<P> {
    fn app_path(&self) -> Option<PathBuf> {
        (**self).app_path()
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        (**self).prefs_path()
    }

    fn app_path_hint(&self) -> Option<&'static str> {
        (**self).app_path_hint()
    }
}

/// Returns the probe for the OS this process runs on.
pub fn native_probe() -> Box<dyn PathProbe> {
    probe_for_os(std::env::consts::OS)
}

/// Returns the probe for an OS tag as reported by `std::env::consts::OS`.
///
/// Unknown tags get [`UnsupportedPathProbe`], which finds nothing.
pub fn probe_for_os(os: &str) -> Box<dyn PathProbe> {
    match os {
        "windows" => Box::new(WindowsPathProbe::from_env()),
        "linux" => Box::new(LinuxPathProbe::from_env()),
        "macos" => Box::new(MacosPathProbe::from_env()),
        _ => Box::new(UnsupportedPathProbe),
    }
}

/// Returns the first candidate that exists on the file system.
pub(crate) fn first_existing<I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates.into_iter().find(|p| p.exists())
}

/// `true` when `dir/child` exists.
pub(crate) fn has_child(dir: &Path, child: &str) -> bool {
    dir.join(child).exists()
}

// ── Fallback for other platforms ──────────────────────────────────────────────

/// Probe used on platforms Spotify does not ship for.
pub struct UnsupportedPathProbe;

impl PathProbe for UnsupportedPathProbe {
    fn app_path(&self) -> Option<PathBuf> {
        None
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        None
    }
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A probe that returns fixed answers.
///
/// ```ignore
/// let probe = MockPathProbe::nothing_found();
/// assert!(probe.app_path().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPathProbe {
    pub app_path: Option<PathBuf>,
    pub prefs_path: Option<PathBuf>,
    pub hint: Option<&'static str>,
}

impl MockPathProbe {
    /// A probe that finds neither path.
    pub fn nothing_found() -> Self {
        Self::default()
    }

    /// A probe that finds both paths.
    pub fn found(app_path: impl Into<PathBuf>, prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            app_path: Some(app_path.into()),
            prefs_path: Some(prefs_path.into()),
            hint: None,
        }
    }
}

impl PathProbe for MockPathProbe {
    fn app_path(&self) -> Option<PathBuf> {
        self.app_path.clone()
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        self.prefs_path.clone()
    }

    fn app_path_hint(&self) -> Option<&'static str> {
        self.hint
    }
}
