//! INI config file persistence.
//!
//! Default location of `config.ini`:
//! - Windows:  `%APPDATA%\spicetify\config.ini`
//! - Linux:    `$XDG_CONFIG_HOME/spicetify/config.ini` or `~/.config/spicetify/config.ini`
//! - macOS:    `~/.spicetify/config.ini`
//!
//! Writes are plain `std::fs::write` calls: there is no temp-file-and-rename
//! and no locking, so a crash mid-write can leave a truncated file and two
//! concurrent writers race with the last one winning.  The loader treats a
//! truncated file like any other unreadable file and regenerates it.

use std::path::{Path, PathBuf};

use spicecfg_core::{parse_document, serialize_document, IniDocument, IniError};
use thiserror::Error;
use tracing::warn;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid INI.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: IniError,
    },

    /// The in-memory document cannot be written as INI.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] IniError),
}

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Resolves the full default path to `config.ini`.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// Bytes that are not valid UTF-8 are decoded as U+FFFD so the rest of the
/// file is still usable.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read (including when it
/// does not exist) and [`ConfigError::Parse`] if it is not valid INI.
pub fn read_document(path: &Path) -> Result<IniDocument, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, std::borrow::Cow::Owned(_)) {
        warn!(path = %path.display(), "config is not valid UTF-8; invalid bytes replaced");
    }
    parse_document(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `doc` and writes it to `path`.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if the document cannot be represented
/// as INI, or [`ConfigError::Io`] for file-system failures.
pub fn write_document(path: &Path, doc: &IniDocument) -> Result<(), ConfigError> {
    let content = serialize_document(doc).map_err(ConfigError::Serialize)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the platform config directory including the `spicetify` part.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("spicetify"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".spicetify"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("spicetify"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
