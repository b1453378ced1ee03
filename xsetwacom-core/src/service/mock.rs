//! In-memory device and display services for testing.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Area, Device, Monitor, Pressure};

use super::{DeviceService, DisplayService};

/// A device-layer write observed by [`MockDevices`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    SetArea(u32, Area),
    SetPressureCurve(u32, Pressure),
    SetOutputMapping(u32, Area),
}

/// Mock device layer.
///
/// Reads come from the configured devices; writes are recorded and update
/// the stored state so later reads observe them.
#[derive(Debug, Default)]
pub struct MockDevices {
    devices: Vec<Device>,
    areas: RefCell<HashMap<u32, Area>>,
    pressures: RefCell<HashMap<u32, Pressure>>,
    calls: RefCell<Vec<DeviceCall>>,
    fail_queries: bool,
    fail_applies: bool,
}

impl MockDevices {
    /// Create a mock with the given devices, each using its native area and
    /// a linear pressure curve as current state.
    pub fn new(devices: Vec<Device>) -> Self {
        let areas = devices.iter().map(|d| (d.id, d.area)).collect();
        let pressures = devices.iter().map(|d| (d.id, Pressure::LINEAR)).collect();
        Self {
            devices,
            areas: RefCell::new(areas),
            pressures: RefCell::new(pressures),
            ..Default::default()
        }
    }

    /// Override the current area of a device.
    pub fn with_area(self, id: u32, area: Area) -> Self {
        self.areas.borrow_mut().insert(id, area);
        self
    }

    /// Override the current pressure curve of a device.
    pub fn with_pressure(self, id: u32, pressure: Pressure) -> Self {
        self.pressures.borrow_mut().insert(id, pressure);
        self
    }

    /// Make every read fail.
    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    /// Make every write fail.
    pub fn failing_applies(mut self) -> Self {
        self.fail_applies = true;
        self
    }

    /// Writes received so far, in order.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    fn check_query(&self, what: &str) -> Result<()> {
        if self.fail_queries {
            return Err(Error::DeviceQuery {
                command: format!("mock {what}"),
                message: "query disabled".to_string(),
            });
        }
        Ok(())
    }

    fn record(&self, call: DeviceCall) -> Result<()> {
        if self.fail_applies {
            return Err(Error::DeviceApply {
                command: format!("mock {call:?}"),
                message: "apply disabled".to_string(),
            });
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }

    fn device(&self, id: u32) -> Result<&Device> {
        self.devices
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::DeviceQuery {
                command: format!("mock device {id}"),
                message: "no such device".to_string(),
            })
    }
}

impl DeviceService for MockDevices {
    fn list_devices(&self) -> Result<Vec<Device>> {
        self.check_query("list")?;
        Ok(self.devices.clone())
    }

    fn get_area(&self, id: u32) -> Result<Area> {
        self.check_query("get area")?;
        self.device(id)?;
        Ok(self.areas.borrow().get(&id).copied().unwrap_or(Area::ZERO))
    }

    fn set_area(&self, id: u32, area: &Area) -> Result<()> {
        self.record(DeviceCall::SetArea(id, *area))?;
        self.areas.borrow_mut().insert(id, *area);
        Ok(())
    }

    fn get_pressure_curve(&self, id: u32) -> Result<Pressure> {
        self.check_query("get pressure")?;
        self.device(id)?;
        Ok(self
            .pressures
            .borrow()
            .get(&id)
            .copied()
            .unwrap_or(Pressure::LINEAR))
    }

    fn set_pressure_curve(&self, id: u32, pressure: &Pressure) -> Result<()> {
        self.record(DeviceCall::SetPressureCurve(id, *pressure))?;
        self.pressures.borrow_mut().insert(id, *pressure);
        Ok(())
    }

    fn get_native_area(&self, id: u32) -> Result<Area> {
        self.check_query("get native area")?;
        Ok(self.device(id)?.area)
    }

    fn set_output_mapping(&self, id: u32, area: &Area) -> Result<()> {
        self.record(DeviceCall::SetOutputMapping(id, *area))
    }
}

/// Mock display layer returning a fixed monitor list.
#[derive(Debug, Default)]
pub struct MockDisplays {
    monitors: Vec<Monitor>,
    fail: bool,
}

impl MockDisplays {
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self {
            monitors,
            fail: false,
        }
    }

    /// Make enumeration fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl DisplayService for MockDisplays {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        if self.fail {
            return Err(Error::DisplayQuery {
                command: "mock list".to_string(),
                message: "enumeration disabled".to_string(),
            });
        }
        Ok(self.monitors.clone())
    }
}
