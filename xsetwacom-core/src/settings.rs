//! Persisted device and application settings.

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::{MAX_SCALE, MIN_SCALE};
use crate::error::{Error, Result};
use crate::model::{Area, Pressure};
use crate::transform::RegionConstraints;

/// Which of the two mapped regions an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Monitor,
    Tablet,
}

/// Mapping and pressure settings for one tablet/monitor pair.
///
/// Serialized field order and names form the `device.json` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    pub device_name: String,
    pub device_area: Area,
    pub device_pressure: Pressure,
    pub device_force_full_area: bool,
    pub device_force_aspect_ratio: bool,
    pub monitor_name: String,
    pub monitor_area: Area,
    pub monitor_force_full_area: bool,
    pub monitor_force_aspect_ratio: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            device_name: String::new(),
            device_area: Area::UNSET,
            device_pressure: Pressure::UNSET,
            device_force_full_area: false,
            device_force_aspect_ratio: false,
            monitor_name: String::new(),
            monitor_area: Area::UNSET,
            monitor_force_full_area: false,
            monitor_force_aspect_ratio: false,
        }
    }
}

impl DeviceSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = read_json(path)?;
        tracing::info!("Loaded device settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as JSON, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)?;
        tracing::info!("Saved device settings to {}", path.display());
        Ok(())
    }

    /// True if neither area nor pressure has been resolved yet.
    pub fn is_unset(&self) -> bool {
        self.device_area.is_unset() && self.device_pressure.is_unset()
    }

    /// Physical area of one side.
    pub fn area(&self, side: Side) -> &Area {
        match side {
            Side::Monitor => &self.monitor_area,
            Side::Tablet => &self.device_area,
        }
    }

    /// Mutable physical area of one side.
    pub fn area_mut(&mut self, side: Side) -> &mut Area {
        match side {
            Side::Monitor => &mut self.monitor_area,
            Side::Tablet => &mut self.device_area,
        }
    }

    /// Policy flags of one side.
    pub fn constraints(&self, side: Side) -> RegionConstraints {
        match side {
            Side::Monitor => RegionConstraints {
                force_full_area: self.monitor_force_full_area,
                force_aspect_ratio: self.monitor_force_aspect_ratio,
            },
            Side::Tablet => RegionConstraints {
                force_full_area: self.device_force_full_area,
                force_aspect_ratio: self.device_force_aspect_ratio,
            },
        }
    }
}

/// Colour scheme of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppearanceSection {
    pub theme: Theme,
    /// File name inside the fonts directory; empty selects the built-in font.
    #[serde(default)]
    pub font: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub scale: f32,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSection {
    pub language: String,
}

impl Default for LanguageSection {
    fn default() -> Self {
        Self {
            language: crate::localisation::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Look-and-feel preferences stored in `application.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationSettings {
    pub appearance: AppearanceSection,
    pub display: DisplaySection,
    pub language: LanguageSection,
}

impl ApplicationSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings: Self = read_json(path)?;
        settings.display.scale = clamp_scale(settings.display.scale);
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) if e.is_missing_file() => Self::default(),
            Err(e) => {
                tracing::warn!("Using default application settings: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as JSON, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json(path, self)?;
        tracing::info!("Saved application settings to {}", path.display());
        Ok(())
    }
}

/// Font file names found in `dir`, sorted. Only `.ttf` and `.otf` files
/// are listed; an unreadable directory yields nothing.
pub fn available_fonts(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut fonts: Vec<String> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_font_file(path))
        .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
        .collect();
    fonts.sort();
    fonts
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
}

/// Clamp a UI scale into the supported range.
pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| Error::SettingsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let io_error = |source| Error::SettingsIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::SettingsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    std::fs::write(path, buffer).map_err(io_error)
}
