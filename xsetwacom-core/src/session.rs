//! Startup resolution, Save & Apply and the headless apply path.

use std::path::Path;

use crate::error::Result;
use crate::localisation::Message;
use crate::model::{Area, Device, Monitor, Pressure};
use crate::service::{primary_monitor, DeviceService, DisplayService};
use crate::settings::DeviceSettings;
use crate::transform::output_mapping;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Something the user should be told about, e.g. as a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: Message,
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: Message) -> Self {
        Self {
            level,
            message,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Initial state of an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
    pub settings: DeviceSettings,
    /// Selected stylus, `None` when there are no devices.
    pub device_index: Option<usize>,
    /// Selected monitor, `None` when there are no monitors.
    pub monitor_index: Option<usize>,
    pub notices: Vec<Notice>,
}

/// Build the initial settings for the GUI.
///
/// Settings come from `path` when it loads; otherwise, or when the saved
/// device/monitor is no longer present, the selected device is queried
/// live. Settings file problems become warnings; device query failures
/// are returned as errors.
pub fn resolve_startup(
    path: &Path,
    devices: &[Device],
    monitors: &[Monitor],
    service: &dyn DeviceService,
) -> Result<Startup> {
    let mut notices = Vec::new();

    let loaded = match DeviceSettings::load(path) {
        Ok(settings) => Some(settings),
        Err(e) if e.is_missing_file() => {
            tracing::warn!("No settings file at {}, querying devices", path.display());
            notices.push(Notice::new(NoticeLevel::Warning, Message::ToastDeviceSettingsMissing));
            None
        }
        Err(e) => {
            tracing::warn!("{}, querying devices", e);
            notices.push(
                Notice::new(NoticeLevel::Warning, Message::ToastDeviceSettingsLoadFailed)
                    .with_detail(e.to_string()),
            );
            None
        }
    };
    let from_file = loaded.is_some();
    let mut settings = loaded.unwrap_or_default();

    let device_index = if devices.is_empty() {
        tracing::warn!("No stylus devices available");
        notices.push(Notice::new(NoticeLevel::Warning, Message::ToastDevicesMissing));
        settings.device_name.clear();
        settings.device_area = Area::ZERO;
        settings.device_pressure = Pressure::LINEAR;
        None
    } else {
        let saved = devices
            .iter()
            .position(|d| from_file && d.name == settings.device_name);
        match saved {
            Some(index) => Some(index),
            None => {
                let device = &devices[0];
                tracing::info!("Reading current properties of {}", device.name);
                settings.device_name = device.name.clone();
                settings.device_area = service.get_area(device.id)?;
                settings.device_pressure = service.get_pressure_curve(device.id)?;
                Some(0)
            }
        }
    };

    let monitor_index = if monitors.is_empty() {
        tracing::warn!("No monitors available");
        notices.push(Notice::new(NoticeLevel::Warning, Message::ToastMonitorsMissing));
        settings.monitor_name.clear();
        settings.monitor_area = Area::ZERO;
        None
    } else {
        let saved = monitors
            .iter()
            .position(|m| from_file && m.name == settings.monitor_name);
        match saved {
            Some(index) => Some(index),
            None => {
                let (index, monitor) = primary_monitor(monitors).unwrap_or((0, &monitors[0]));
                settings.monitor_name = monitor.name.clone();
                settings.monitor_area = monitor.native_area();
                Some(index)
            }
        }
    };

    Ok(Startup {
        settings,
        device_index,
        monitor_index,
        notices,
    })
}

/// Push area, pressure curve and, if a monitor is given, the output mapping
/// to the device.
pub fn apply_settings(
    service: &dyn DeviceService,
    device_id: u32,
    settings: &DeviceSettings,
    monitor: Option<&Monitor>,
) -> Result<()> {
    service.set_area(device_id, &settings.device_area)?;
    service.set_pressure_curve(device_id, &settings.device_pressure)?;

    if let Some(monitor) = monitor {
        let mapping = output_mapping(monitor, &settings.monitor_area);
        service.set_output_mapping(device_id, &mapping)?;
    }

    tracing::info!(
        "Applied area {} and output {} to device {}",
        settings.device_area,
        settings.monitor_area,
        device_id
    );
    Ok(())
}

/// Persist `settings`, then apply them.
///
/// A write failure aborts before the device is touched; a device failure
/// leaves the written file in place.
pub fn save_and_apply(
    path: &Path,
    settings: &DeviceSettings,
    service: &dyn DeviceService,
    device_id: u32,
    monitor: Option<&Monitor>,
) -> Result<()> {
    settings.save(path)?;
    apply_settings(service, device_id, settings, monitor)
}

/// Result of a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Applied { device: String, monitor: String },
    /// No stylus or no monitor, nothing was applied.
    Skipped,
}

/// Load saved settings and apply them to the first stylus and the primary
/// monitor.
///
/// A missing or malformed settings file is an error and nothing is applied.
pub fn run_headless(
    path: &Path,
    devices: &dyn DeviceService,
    displays: &dyn DisplayService,
) -> Result<HeadlessOutcome> {
    let settings = DeviceSettings::load(path)?;

    let styluses = devices.list_stylus_devices()?;
    let monitors = displays.list_monitors()?;

    let (Some(device), Some((_, monitor))) = (styluses.first(), primary_monitor(&monitors)) else {
        tracing::info!(
            "Nothing to apply: {} stylus device(s), {} monitor(s)",
            styluses.len(),
            monitors.len()
        );
        return Ok(HeadlessOutcome::Skipped);
    };

    apply_settings(devices, device.id, &settings, Some(monitor))?;

    Ok(HeadlessOutcome::Applied {
        device: device.name.clone(),
        monitor: monitor.name.clone(),
    })
}
