//! External device and display layers.
//!
//! [`DeviceService`] and [`DisplayService`] are the only way the rest of the
//! crate talks to hardware. The production backends shell out to `xsetwacom`
//! and `xrandr`; [`mock`] provides in-memory doubles for tests.

mod command;
pub mod mock;
pub mod xrandr;
pub mod xsetwacom;

use crate::error::Result;
use crate::model::{Area, Device, DeviceKind, Monitor, Pressure};

pub use xrandr::Xrandr;
pub use xsetwacom::Xsetwacom;

/// Tablet device control.
pub trait DeviceService {
    /// All input devices, with the native area filled in for styluses.
    fn list_devices(&self) -> Result<Vec<Device>>;

    /// Only the stylus devices.
    fn list_stylus_devices(&self) -> Result<Vec<Device>> {
        Ok(self
            .list_devices()?
            .into_iter()
            .filter(|d| d.kind == DeviceKind::Stylus)
            .collect())
    }

    fn get_area(&self, id: u32) -> Result<Area>;

    fn set_area(&self, id: u32, area: &Area) -> Result<()>;

    fn get_pressure_curve(&self, id: u32) -> Result<Pressure>;

    fn set_pressure_curve(&self, id: u32, pressure: &Pressure) -> Result<()>;

    /// Full digitizer extent of the device.
    fn get_native_area(&self, id: u32) -> Result<Area>;

    /// Bind the stylus to a rectangle of the combined desktop.
    fn set_output_mapping(&self, id: u32, area: &Area) -> Result<()>;
}

/// Monitor enumeration.
pub trait DisplayService {
    fn list_monitors(&self) -> Result<Vec<Monitor>>;
}

/// The primary monitor, or the first one if none is flagged primary.
pub fn primary_monitor(monitors: &[Monitor]) -> Option<(usize, &Monitor)> {
    monitors
        .iter()
        .enumerate()
        .find(|(_, m)| m.primary)
        .or_else(|| monitors.first().map(|m| (0, m)))
}
