//! User interface strings.
//!
//! English is built in. Other languages are read from
//! `<languages dir>/<code>.json`, a flat object of camelCase keys; any key
//! missing from a table falls back to English.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Language code used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "english";

macro_rules! messages {
    ($($variant:ident => $key:literal, $english:literal;)*) => {
        /// Identifier of every translatable string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Message {
            $($variant,)*
        }

        impl Message {
            /// Every message, in declaration order.
            pub const ALL: &'static [Message] = &[$(Message::$variant,)*];

            /// Key of this message in a language table.
            pub fn key(self) -> &'static str {
                match self {
                    $(Message::$variant => $key,)*
                }
            }

            /// Built-in English text.
            pub fn english(self) -> &'static str {
                match self {
                    $(Message::$variant => $english,)*
                }
            }
        }
    };
}

messages! {
    ToastSuccess => "toastSuccess", "Success";
    ToastWarning => "toastWarning", "Warning";
    ToastError => "toastError", "Error";
    Save => "save", "Save";
    SaveApply => "saveApply", "Save & Apply";
    MenuBarSettings => "menuBarSettings", "Settings";
    MenuBarSettingsApplication => "menuBarSettingsApplication", "Application";
    PopupSettingsTitle => "popupSettingsTitle", "Application Settings";
    PopupSettingsTabsAppearanceTitle => "popupSettingsTabsAppearanceTitle", "Appearance";
    PopupSettingsTabsAppearanceTheme => "popupSettingsTabsAppearanceTheme", "Theme";
    PopupSettingsTabsAppearanceThemeDark => "popupSettingsTabsAppearanceThemeDark", "Dark";
    PopupSettingsTabsAppearanceThemeLight => "popupSettingsTabsAppearanceThemeLight", "Light";
    PopupSettingsTabsAppearanceFont => "popupSettingsTabsAppearanceFont", "Font";
    PopupSettingsTabsAppearanceFontDefault => "popupSettingsTabsAppearanceFontDefault", "Default";
    PopupSettingsTabsDisplayTitle => "popupSettingsTabsDisplayTitle", "Display";
    PopupSettingsTabsDisplayScale => "popupSettingsTabsDisplayScale", "Scale";
    PopupSettingsTabsLanguageTitle => "popupSettingsTabsLanguageTitle", "Language";
    PopupSettingsTabsLanguageLanguage => "popupSettingsTabsLanguageLanguage", "Language";
    TabsTabletTitle => "tabsTabletTitle", "Tablet";
    TabsTabletDevice => "tabsTabletDevice", "Device";
    TabsTabletPressureCurve => "tabsTabletPressureCurve", "Pressure Curve";
    TabsTabletWidth => "tabsTabletWidth", "Width";
    TabsTabletHeight => "tabsTabletHeight", "Height";
    TabsTabletOffsetX => "tabsTabletOffsetX", "Offset X";
    TabsTabletOffsetY => "tabsTabletOffsetY", "Offset Y";
    TabsTabletFullArea => "tabsTabletFullArea", "Full Area";
    TabsTabletForceProportions => "tabsTabletForceProportions", "Force Proportions";
    TabsMonitorTitle => "tabsMonitorTitle", "Monitor";
    TabsMonitorMonitor => "tabsMonitorMonitor", "Monitor";
    TabsMonitorWidth => "tabsMonitorWidth", "Width";
    TabsMonitorHeight => "tabsMonitorHeight", "Height";
    TabsMonitorOffsetX => "tabsMonitorOffsetX", "Offset X";
    TabsMonitorOffsetY => "tabsMonitorOffsetY", "Offset Y";
    TabsMonitorFullArea => "tabsMonitorFullArea", "Full Area";
    TabsMonitorForceProportions => "tabsMonitorForceProportions", "Force Proportions";
    ToastDevicesMissing => "toastDevicesMissing", "No available devices were found";
    ToastMonitorsMissing => "toastMonitorsMissing", "No available monitors were found";
    ToastApplicationSettingsSaved => "toastApplicationSettingsSaved", "Saved application settings";
    ToastDeviceSettingsSaved => "toastDeviceSettingsSaved", "Saved and applied device settings";
    ToastDeviceSettingsLoadFailed => "toastDeviceSettingsLoadFailed", "Failed to load settings file, reading properties from xsetwacom";
    ToastDeviceSettingsMissing => "toastDeviceSettingsMissing", "Could not find settings file, reading properties from xsetwacom";
    ToastDeviceSettingsSaveFailed => "toastDeviceSettingsSaveFailed", "Failed to save device settings";
    ToastDeviceApplyFailed => "toastDeviceApplyFailed", "Failed to apply settings to the device";
    ToastFontLoadFailed => "toastFontLoadFailed", "Failed to load font, using the default";
}

/// A loaded string table.
#[derive(Debug, Clone)]
pub struct Localisation {
    language: String,
    strings: HashMap<Message, String>,
}

impl Default for Localisation {
    fn default() -> Self {
        Self::english()
    }
}

impl Localisation {
    /// The built-in English table.
    pub fn english() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            strings: HashMap::new(),
        }
    }

    /// Load `<dir>/<language>.json`; the default language needs no file.
    pub fn load(dir: &Path, language: &str) -> Result<Self> {
        let language = language.trim().to_lowercase();
        if language == DEFAULT_LANGUAGE {
            return Ok(Self::english());
        }

        let path = dir.join(format!("{language}.json"));
        let content = std::fs::read_to_string(&path).map_err(|e| Error::Localisation {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let table: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|e| Error::Localisation {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let strings: HashMap<Message, String> = Message::ALL
            .iter()
            .filter_map(|&m| table.get(m.key()).map(|text| (m, text.clone())))
            .collect();

        if strings.len() < Message::ALL.len() {
            tracing::warn!(
                "{} is missing {} message(s), using English for those",
                path.display(),
                Message::ALL.len() - strings.len()
            );
        }

        Ok(Self { language, strings })
    }

    /// Load a language, falling back to English on failure.
    pub fn load_or_english(dir: &Path, language: &str) -> Self {
        Self::load(dir, language).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Self::english()
        })
    }

    /// Language code of this table.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Text of a message.
    pub fn get(&self, message: Message) -> &str {
        self.strings
            .get(&message)
            .map(String::as_str)
            .unwrap_or_else(|| message.english())
    }
}

/// Language codes with a table in `dir`, plus the built-in default, sorted.
///
/// An unreadable directory yields only the default language.
pub fn available_languages(dir: &Path) -> Vec<String> {
    let mut languages = vec![DEFAULT_LANGUAGE.to_string()];

    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // Codes are lowercase; `load` would not find other names.
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(code)
                    if code == code.to_lowercase() && !languages.iter().any(|l| l == code) =>
                {
                    languages.push(code.to_string());
                }
                _ => {}
            }
        }
    }

    languages.sort();
    languages
}
