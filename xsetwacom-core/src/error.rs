//! Error types for device control and settings persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a failure, used to decide how the caller recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete settings JSON.
    SettingsParse,
    /// Settings file could not be read or written.
    SettingsIo,
    /// Reading state from the device layer failed.
    DeviceQuery,
    /// Pushing state to the device layer failed.
    DeviceApply,
    /// Monitor enumeration failed.
    DisplayQuery,
    /// A language table could not be loaded.
    Localisation,
}

/// Main error type for xsetwacom-core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse settings file {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    #[error("Failed to access settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Device query failed ({command}): {message}")]
    DeviceQuery { command: String, message: String },

    #[error("Device apply failed ({command}): {message}")]
    DeviceApply { command: String, message: String },

    #[error("Monitor enumeration failed ({command}): {message}")]
    DisplayQuery { command: String, message: String },

    #[error("Failed to load language table {path}: {message}")]
    Localisation { path: PathBuf, message: String },
}

impl Error {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SettingsParse { .. } => ErrorKind::SettingsParse,
            Error::SettingsIo { .. } => ErrorKind::SettingsIo,
            Error::DeviceQuery { .. } => ErrorKind::DeviceQuery,
            Error::DeviceApply { .. } => ErrorKind::DeviceApply,
            Error::DisplayQuery { .. } => ErrorKind::DisplayQuery,
            Error::Localisation { .. } => ErrorKind::Localisation,
        }
    }

    /// True when a settings file simply does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            Error::SettingsIo { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Result type alias for xsetwacom-core operations.
pub type Result<T> = std::result::Result<T, Error>;
