//! First-run default config built from the schema plus detected host paths.

use std::fmt;
use std::path::PathBuf;

use spicecfg_core::{
    synthesize, IniDocument, Overrides, Schema, PREFS_PATH_KEY, SETTING_SECTION,
    SPOTIFY_PATH_KEY,
};
use tracing::{info, warn};

use crate::infrastructure::path_probe::PathProbe;

/// A detection problem the user should fix by editing the config by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisWarning {
    /// No Spotify install directory was found; `spotify_path` is empty.
    AppPathNotFound { hint: Option<&'static str> },
    /// No `prefs` file was found; `prefs_path` is empty.
    PrefsPathNotFound,
}

impl fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppPathNotFound { .. } => f.write_str("Could not detect Spotify location."),
            Self::PrefsPathNotFound => f.write_str("Could not detect \"prefs\" file location."),
        }
    }
}

/// Paths the probe found, before they are written into the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedPaths {
    pub app_path: Option<PathBuf>,
    pub prefs_path: Option<PathBuf>,
}

impl DetectedPaths {
    /// Runs both lookups of `probe`.
    pub fn detect(probe: &dyn PathProbe) -> Self {
        Self {
            app_path: probe.app_path(),
            prefs_path: probe.prefs_path(),
        }
    }

    /// Converts the findings into schema overrides and warnings.
    pub fn into_overrides(self, hint: Option<&'static str>) -> (Overrides, Vec<SynthesisWarning>) {
        let mut overrides = Overrides::new();
        let mut warnings = Vec::new();

        match self.app_path {
            Some(path) => {
                overrides.set(SETTING_SECTION, SPOTIFY_PATH_KEY, path.to_string_lossy())
            }
            None => warnings.push(SynthesisWarning::AppPathNotFound { hint }),
        }
        match self.prefs_path {
            Some(path) => overrides.set(SETTING_SECTION, PREFS_PATH_KEY, path.to_string_lossy()),
            None => warnings.push(SynthesisWarning::PrefsPathNotFound),
        }

        (overrides, warnings)
    }
}

/// Builds the default document, probing the host for Spotify's locations.
///
/// Missing paths are left empty and reported both as returned warnings and as
/// `warn!` events.
pub fn synthesize_defaults(
    schema: &Schema,
    probe: &dyn PathProbe,
) -> (IniDocument, Vec<SynthesisWarning>) {
    let (overrides, warnings) = DetectedPaths::detect(probe).into_overrides(probe.app_path_hint());

    for warning in &warnings {
        warn!("{warning}");
        if let SynthesisWarning::AppPathNotFound { hint: Some(hint) } = warning {
            info!("{hint}");
        }
    }

    (synthesize(schema, &overrides), warnings)
}
