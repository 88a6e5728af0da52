use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "transition-tracker";
const SETTINGS_FILE_NAME: &str = "settings.json";
const CONFIG_HOME_OVERRIDE: &str = "XDG_CONFIG_HOME";

/// Persisted application state, one JSON document rewritten in full on every
/// mutation.
///
/// Keys without defined semantics in this build are carried through
/// load/save untouched, so a document written by a newer build survives an
/// older one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    pub welcome_shown: bool,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unable to resolve a per-user configuration directory")]
    ConfigDirUnavailable,
    #[error("settings file '{}' is not valid JSON: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads and saves the settings document at a fixed per-user path.
///
/// Single-process, single-writer: no locking, no partial writes. A corrupt
/// document is reported as [`SettingsError::Corrupt`] rather than silently
/// reset; callers that prefer defaults fall back to
/// `SettingsDocument::default()` themselves.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves `$XDG_CONFIG_HOME` when set and non-empty, otherwise the
    /// platform per-user configuration directory, then appends
    /// `transition-tracker/settings.json`.
    pub fn from_user_config_dir() -> Result<Self, SettingsError> {
        let config_root = match env::var(CONFIG_HOME_OVERRIDE) {
            Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
            _ => dirs::config_dir().ok_or(SettingsError::ConfigDirUnavailable)?,
        };
        Ok(Self::new(
            config_root.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document from disk. An absent file is not an error: the
    /// default document is returned so first runs need no setup step.
    pub fn load(&self) -> Result<SettingsDocument, SettingsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(SettingsDocument::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&raw).map_err(|source| SettingsError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the full document, creating parent directories as needed.
    ///
    /// The payload lands in a sibling staging file first and is renamed into
    /// place, so a crash mid-save never leaves a truncated document at the
    /// final path.
    pub fn save(&self, document: &SettingsDocument) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let payload = serde_json::to_vec_pretty(document)
            .map_err(|source| self.io_error(io::Error::other(source)))?;

        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload).map_err(|source| self.io_error(source))?;
        fs::rename(&staging, &self.path).map_err(|source| self.io_error(source))?;
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
