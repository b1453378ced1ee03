//! Configuration constants and settings locations.

use std::path::PathBuf;

/// Application name, used for the window title and settings directory.
pub const APPLICATION: &str = "XSetWacomGUI";

/// Directory name below the XDG config/data roots.
pub const APPLICATION_DIR: &str = "xsetwacomgui";

/// Persisted device settings file name.
pub const DEVICE_SETTINGS_FILE: &str = "device.json";

/// Persisted application settings file name.
pub const APPLICATION_SETTINGS_FILE: &str = "application.json";

/// Sub-directory of the data directory holding language tables.
pub const LANGUAGES_DIR: &str = "languages";

/// Sub-directory of the data directory holding selectable font files.
pub const FONTS_DIR: &str = "fonts";

/// Sentinel value marking an uninitialized area or pressure field.
pub const UNSET: f32 = -1.0;

/// Floating-point comparison epsilon.
pub const EPS: f32 = 0.0001;

/// Width/height units of the monitor mapper box (before scaling).
pub const MONITOR_MAPPER_UNITS: [f32; 2] = [20.0 * 16.0, 20.0 * 9.0];

/// Width/height units of the tablet mapper box (before scaling).
pub const TABLET_MAPPER_UNITS: [f32; 2] = [15.0 * 16.0, 15.0 * 9.0];

/// Side length of the pressure curve editor (before scaling).
pub const PRESSURE_EDITOR_UNITS: f32 = 250.0;

/// Radius of an anchor grab handle in pixels.
pub const GRAB_RADIUS: f32 = 6.0;

/// Smallest accepted UI scale.
pub const MIN_SCALE: f32 = 0.5;

/// Largest accepted UI scale.
pub const MAX_SCALE: f32 = 3.0;

/// Directory holding `device.json` and `application.json`.
///
/// Resolves to `$XDG_CONFIG_HOME/xsetwacomgui`, falling back to
/// `~/.config/xsetwacomgui`, and finally the working directory.
pub fn settings_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APPLICATION_DIR)
}

/// Path of the persisted device settings.
pub fn device_settings_path() -> PathBuf {
    settings_dir().join(DEVICE_SETTINGS_FILE)
}

/// Path of the persisted application settings.
pub fn application_settings_path() -> PathBuf {
    settings_dir().join(APPLICATION_SETTINGS_FILE)
}

/// Directory holding `<code>.json` language tables.
pub fn languages_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APPLICATION_DIR)
        .join(LANGUAGES_DIR)
}

/// Directory holding the `.ttf`/`.otf` files offered as UI fonts.
pub fn fonts_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APPLICATION_DIR)
        .join(FONTS_DIR)
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }
}
