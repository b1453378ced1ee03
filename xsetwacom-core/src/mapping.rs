//! Per-frame state linking the monitor and tablet regions to the settings.
//!
//! Each frame the GUI calls [`RegionMapping::sync`] to derive anchors from
//! the physical areas, lets the area mapper widgets edit the anchors, then
//! calls [`RegionMapping::commit`] to write changes back. Change flags only
//! live between one `sync` and the following `commit`.

use crate::model::{Anchors, Area, Device, Monitor, FULL_SQUARE};
use crate::settings::{DeviceSettings, Side};
use crate::transform::{apply_full_area_policy, to_normalized, to_physical};

/// Scale references of both regions, `None` when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct References {
    pub monitor: Option<Area>,
    pub tablet: Option<Area>,
}

impl References {
    /// References of the selected device and monitor.
    pub fn new(device: Option<&Device>, monitor: Option<&Monitor>) -> Self {
        Self {
            monitor: monitor.map(Monitor::native_area),
            tablet: device.map(|d| d.area),
        }
    }

    pub fn get(&self, side: Side) -> Option<&Area> {
        match side {
            Side::Monitor => self.monitor.as_ref(),
            Side::Tablet => self.tablet.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RegionState {
    anchors: Anchors,
    /// Anchors moved by the widget.
    dragged: bool,
    /// Physical area or policy flags edited directly.
    edited: bool,
}

impl Default for RegionState {
    fn default() -> Self {
        Self {
            anchors: FULL_SQUARE,
            dragged: false,
            edited: false,
        }
    }
}

/// Controller state for the two linked area mappers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionMapping {
    monitor: RegionState,
    tablet: RegionState,
}

impl RegionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    fn region(&self, side: Side) -> &RegionState {
        match side {
            Side::Monitor => &self.monitor,
            Side::Tablet => &self.tablet,
        }
    }

    fn region_mut(&mut self, side: Side) -> &mut RegionState {
        match side {
            Side::Monitor => &mut self.monitor,
            Side::Tablet => &mut self.tablet,
        }
    }

    /// Current anchors of one side.
    pub fn anchors(&self, side: Side) -> &Anchors {
        &self.region(side).anchors
    }

    /// Anchors handed to the area mapper widget for editing.
    pub fn anchors_mut(&mut self, side: Side) -> &mut Anchors {
        &mut self.region_mut(side).anchors
    }

    /// Recompute both anchor sets from the physical areas.
    ///
    /// A side without a reference shows the full unit square.
    pub fn sync(&mut self, settings: &DeviceSettings, references: &References) {
        for side in [Side::Monitor, Side::Tablet] {
            let anchors = match references.get(side) {
                Some(reference) => to_normalized(settings.area(side), reference),
                None => FULL_SQUARE,
            };
            self.region_mut(side).anchors = anchors;
        }
    }

    /// Record that the widget moved anchors of `side` this frame.
    pub fn mark_dragged(&mut self, side: Side) {
        self.region_mut(side).dragged = true;
    }

    /// Record that the physical area or a policy flag of `side` was edited.
    pub fn mark_edited(&mut self, side: Side) {
        self.region_mut(side).edited = true;
    }

    /// True if `side` has uncommitted changes.
    pub fn is_changed(&self, side: Side) -> bool {
        let region = self.region(side);
        region.dragged || region.edited
    }

    /// Write pending changes back into `settings` and clear the flags.
    ///
    /// Dragged anchors are converted to a physical area; then the full-area
    /// policy snaps the area to its reference if enabled. Returns true if
    /// either side changed.
    pub fn commit(&mut self, settings: &mut DeviceSettings, references: &References) -> bool {
        let mut any = false;

        for side in [Side::Monitor, Side::Tablet] {
            let region = self.region(side).clone();
            if !(region.dragged || region.edited) {
                continue;
            }
            any = true;

            if let Some(reference) = references.get(side) {
                let force_full_area = settings.constraints(side).force_full_area;
                let area = settings.area_mut(side);
                if region.dragged {
                    *area = to_physical(&region.anchors, reference);
                }
                apply_full_area_policy(area, reference, force_full_area, true);
            }

            let state = self.region_mut(side);
            state.dragged = false;
            state.edited = false;
        }

        any
    }

    /// Switch the tablet side to `device`, resetting its area to the full
    /// native area.
    pub fn select_device(&mut self, settings: &mut DeviceSettings, device: &Device) {
        settings.device_name = device.name.clone();
        settings.device_area = device.area;
        self.tablet = RegionState {
            anchors: to_normalized(&device.area, &device.area),
            ..RegionState::default()
        };
        tracing::info!("Selected device {} ({})", device.name, device.id);
    }

    /// Switch the monitor side to `monitor`, resetting its area to the full
    /// monitor resolution.
    pub fn select_monitor(&mut self, settings: &mut DeviceSettings, monitor: &Monitor) {
        let native = monitor.native_area();
        settings.monitor_name = monitor.name.clone();
        settings.monitor_area = native;
        self.monitor = RegionState {
            anchors: to_normalized(&native, &native),
            ..RegionState::default()
        };
        tracing::info!("Selected monitor {} ({})", monitor.name, monitor.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Anchor, Corner, DeviceKind, Pressure};
    use crate::transform::{drag_anchor, RegionConstraints};
    use pretty_assertions::assert_eq;

    fn device() -> Device {
        Device {
            id: 9,
            name: "Pen stylus".to_string(),
            kind: DeviceKind::Stylus,
            area: Area::new(0.0, 0.0, 1000.0, 600.0),
        }
    }

    fn monitor() -> Monitor {
        Monitor {
            id: 0,
            primary: true,
            offset_x: 0.0,
            offset_y: 0.0,
            width: 1920.0,
            height: 1080.0,
            name: "DP-1".to_string(),
        }
    }

    fn settings() -> DeviceSettings {
        DeviceSettings {
            device_name: "Pen stylus".to_string(),
            device_area: Area::new(100.0, 60.0, 800.0, 480.0),
            device_pressure: Pressure::LINEAR,
            monitor_name: "DP-1".to_string(),
            monitor_area: Area::new(0.0, 0.0, 1920.0, 1080.0),
            ..DeviceSettings::default()
        }
    }

    #[test]
    fn test_sync_normalizes_both_sides() {
        let mut mapping = RegionMapping::new();
        let refs = References::new(Some(&device()), Some(&monitor()));
        mapping.sync(&settings(), &refs);

        assert_eq!(*mapping.anchors(Side::Monitor), FULL_SQUARE);
        let tablet = mapping.anchors(Side::Tablet);
        assert!(tablet[0].approx_eq(&Anchor::new(0.1, 0.1)));
        assert!(tablet[3].approx_eq(&Anchor::new(0.9, 0.9)));
    }

    #[test]
    fn test_sync_without_devices_shows_full_square() {
        let mut mapping = RegionMapping::new();
        let mut settings = settings();
        settings.device_area = Area::ZERO;
        mapping.sync(&settings, &References::new(None, Some(&monitor())));
        assert_eq!(*mapping.anchors(Side::Tablet), FULL_SQUARE);
    }

    #[test]
    fn test_drag_commit_updates_area_once() {
        let mut mapping = RegionMapping::new();
        let mut settings = settings();
        let refs = References::new(Some(&device()), Some(&monitor()));

        mapping.sync(&settings, &refs);
        let moved = drag_anchor(
            mapping.anchors_mut(Side::Tablet),
            Corner::TopLeft,
            Anchor::new(0.1, 0.0),
            settings.constraints(Side::Tablet),
        );
        assert!(moved);
        mapping.mark_dragged(Side::Tablet);
        assert!(mapping.is_changed(Side::Tablet));

        assert!(mapping.commit(&mut settings, &refs));
        assert!(!mapping.is_changed(Side::Tablet));
        assert!((settings.device_area.offset_x - 200.0).abs() < 0.01);
        assert!((settings.device_area.width - 700.0).abs() < 0.01);
        assert!((settings.device_area.height - 480.0).abs() < 0.01);
        assert_eq!(settings.monitor_area, Area::new(0.0, 0.0, 1920.0, 1080.0));

        assert!(!mapping.commit(&mut settings, &refs));
    }

    #[test]
    fn test_full_area_snaps_to_reference() {
        let mut mapping = RegionMapping::new();
        let mut settings = settings();
        settings.device_force_full_area = true;
        let refs = References::new(Some(&device()), Some(&monitor()));

        mapping.sync(&settings, &refs);
        let before = *mapping.anchors(Side::Tablet);
        assert!(!drag_anchor(
            mapping.anchors_mut(Side::Tablet),
            Corner::BottomRight,
            Anchor::new(-0.2, -0.2),
            settings.constraints(Side::Tablet),
        ));
        assert_eq!(*mapping.anchors(Side::Tablet), before);

        mapping.mark_edited(Side::Tablet);
        mapping.commit(&mut settings, &refs);
        assert_eq!(settings.device_area, device().area);
    }

    #[test]
    fn test_edit_without_reference_keeps_area() {
        let mut mapping = RegionMapping::new();
        let mut settings = settings();
        settings.device_area = Area::ZERO;
        settings.device_force_full_area = true;

        mapping.mark_edited(Side::Tablet);
        assert!(mapping.commit(&mut settings, &References::default()));
        assert_eq!(settings.device_area, Area::ZERO);
    }

    #[test]
    fn test_select_resets_to_native_area() {
        let mut mapping = RegionMapping::new();
        let mut settings = settings();
        let other = Device {
            id: 12,
            name: "Other stylus".to_string(),
            kind: DeviceKind::Stylus,
            area: Area::new(0.0, 0.0, 21600.0, 13500.0),
        };
        mapping.mark_dragged(Side::Tablet);
        mapping.select_device(&mut settings, &other);

        assert_eq!(settings.device_name, "Other stylus");
        assert_eq!(settings.device_area, other.area);
        assert_eq!(*mapping.anchors(Side::Tablet), FULL_SQUARE);
        assert!(!mapping.is_changed(Side::Tablet));

        let mut secondary = monitor();
        secondary.name = "HDMI-1".to_string();
        secondary.offset_x = 1920.0;
        secondary.width = 1280.0;
        secondary.height = 1024.0;
        mapping.select_monitor(&mut settings, &secondary);
        assert_eq!(settings.monitor_name, "HDMI-1");
        assert_eq!(settings.monitor_area, Area::new(0.0, 0.0, 1280.0, 1024.0));
    }

    #[test]
    fn test_constraints_reach_drag() {
        let settings = DeviceSettings {
            monitor_force_full_area: true,
            ..settings()
        };
        assert_eq!(
            settings.constraints(Side::Monitor),
            RegionConstraints {
                force_full_area: true,
                force_aspect_ratio: false
            }
        );
    }
}
