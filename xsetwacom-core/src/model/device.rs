//! Tablet devices and monitors as reported by the external tools.

use super::area::Area;

/// Tool type of an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceKind {
    Stylus,
    Eraser,
    Cursor,
    Pad,
    Touch,
    #[default]
    Unknown,
}

impl DeviceKind {
    /// Parse the `type:` column of `xsetwacom --list devices`.
    pub fn from_type_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "STYLUS" => DeviceKind::Stylus,
            "ERASER" => DeviceKind::Eraser,
            "CURSOR" => DeviceKind::Cursor,
            "PAD" => DeviceKind::Pad,
            "TOUCH" => DeviceKind::Touch,
            _ => DeviceKind::Unknown,
        }
    }
}

/// An input device known to the device layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Device {
    pub id: u32,
    pub name: String,
    pub kind: DeviceKind,
    /// Full digitizer extent.
    pub area: Area,
}

/// An active monitor in the combined X screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Monitor {
    pub id: u32,
    pub primary: bool,
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
    pub name: String,
}

impl Monitor {
    /// Native area used as the normalization reference: the monitor's own
    /// resolution, without its desktop offset.
    pub fn native_area(&self) -> Area {
        Area::from_size(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_kind_parsing() {
        assert_eq!(DeviceKind::from_type_str("STYLUS    "), DeviceKind::Stylus);
        assert_eq!(DeviceKind::from_type_str("pad"), DeviceKind::Pad);
        assert_eq!(DeviceKind::from_type_str("GAMEPAD"), DeviceKind::Unknown);
    }

    #[test]
    fn test_native_area_drops_desktop_offset() {
        let monitor = Monitor {
            id: 1,
            primary: false,
            offset_x: 2560.0,
            offset_y: 0.0,
            width: 1920.0,
            height: 1080.0,
            name: "HDMI-1".to_string(),
        };
        assert_eq!(monitor.native_area(), Area::new(0.0, 0.0, 1920.0, 1080.0));
    }
}
