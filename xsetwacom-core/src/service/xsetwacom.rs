//! `xsetwacom` backed device control.

use crate::error::{Error, Result};
use crate::model::{Area, Device, DeviceKind, Pressure};

use super::command::{command_line, run};
use super::DeviceService;

/// Scale of the integer pressure curve values used by the driver.
const PRESSURE_SCALE: f32 = 100.0;

/// Device control through the `xsetwacom` command line tool.
#[derive(Debug, Clone)]
pub struct Xsetwacom {
    program: String,
}

impl Default for Xsetwacom {
    fn default() -> Self {
        Self::new("xsetwacom")
    }
}

impl Xsetwacom {
    /// Use the given executable instead of `xsetwacom` from `PATH`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn query(&self, args: Vec<String>) -> Result<String> {
        run(&self.program, &args).map_err(|message| Error::DeviceQuery {
            command: command_line(&self.program, &args),
            message,
        })
    }

    fn apply(&self, args: Vec<String>) -> Result<()> {
        run(&self.program, &args)
            .map(|_| ())
            .map_err(|message| Error::DeviceApply {
                command: command_line(&self.program, &args),
                message,
            })
    }

    fn get(&self, id: u32, property: &str) -> Result<String> {
        self.query(vec!["get".into(), id.to_string(), property.into()])
    }

    fn set(&self, id: u32, property: &str, values: impl IntoIterator<Item = String>) -> Result<()> {
        let mut args = vec!["set".to_string(), id.to_string(), property.to_string()];
        args.extend(values);
        self.apply(args)
    }
}

impl DeviceService for Xsetwacom {
    fn list_devices(&self) -> Result<Vec<Device>> {
        let output = self.query(vec!["--list".into(), "devices".into()])?;

        let mut devices = parse_device_list(&output);
        for device in devices.iter_mut().filter(|d| d.kind == DeviceKind::Stylus) {
            device.area = self.get_native_area(device.id)?;
        }

        tracing::info!("Found {} input device(s)", devices.len());
        Ok(devices)
    }

    fn get_area(&self, id: u32) -> Result<Area> {
        let output = self.get(id, "Area")?;
        parse_area(&output).ok_or_else(|| Error::DeviceQuery {
            command: format!("{} get {} Area", self.program, id),
            message: format!("unexpected output '{}'", output.trim()),
        })
    }

    fn set_area(&self, id: u32, area: &Area) -> Result<()> {
        let corners = [area.offset_x, area.offset_y, area.x_max(), area.y_max()];
        self.set(id, "Area", corners.map(|v| format!("{:.0}", v.round())))
    }

    fn get_pressure_curve(&self, id: u32) -> Result<Pressure> {
        let output = self.get(id, "PressureCurve")?;
        parse_pressure_curve(&output).ok_or_else(|| Error::DeviceQuery {
            command: format!("{} get {} PressureCurve", self.program, id),
            message: format!("unexpected output '{}'", output.trim()),
        })
    }

    fn set_pressure_curve(&self, id: u32, pressure: &Pressure) -> Result<()> {
        let values = pressure
            .clamped()
            .to_array()
            .map(|v| format!("{:.0}", (v * PRESSURE_SCALE).round()));
        self.set(id, "PressureCurve", values)
    }

    fn get_native_area(&self, id: u32) -> Result<Area> {
        // The driver only reports the full extent right after a reset, so
        // reset, read, then put the user's area back.
        let current = self.get_area(id)?;
        self.query(vec!["set".into(), id.to_string(), "ResetArea".into()])?;
        let native = self.get_area(id)?;
        self.set_area(id, &current).map_err(|e| Error::DeviceQuery {
            command: format!("{} set {} Area", self.program, id),
            message: e.to_string(),
        })?;
        Ok(native)
    }

    fn set_output_mapping(&self, id: u32, area: &Area) -> Result<()> {
        self.set(id, "MapToOutput", [area.to_string()])
    }
}

/// Parse `xsetwacom --list devices`.
///
/// Lines look like `Wacom Intuos S Pen stylus   \tid: 9\ttype: STYLUS`;
/// anything else is skipped.
pub fn parse_device_list(output: &str) -> Vec<Device> {
    output
        .lines()
        .filter_map(|line| {
            let (name, rest) = line.rsplit_once("id:")?;
            let (id, kind) = rest.split_once("type:")?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Device {
                id: id.trim().parse().ok()?,
                name: name.to_string(),
                kind: DeviceKind::from_type_str(kind),
                area: Area::ZERO,
            })
        })
        .collect()
}

/// Parse `x1 y1 x2 y2` from `xsetwacom get <id> Area`.
pub fn parse_area(output: &str) -> Option<Area> {
    let [x1, y1, x2, y2] = parse_four(output)?;
    Some(Area::from_corners(x1, y1, x2, y2))
}

/// Parse the four 0..100 values of `xsetwacom get <id> PressureCurve`.
pub fn parse_pressure_curve(output: &str) -> Option<Pressure> {
    let values = parse_four(output)?;
    Some(Pressure::from_array(values.map(|v| v / PRESSURE_SCALE)))
}

fn parse_four(output: &str) -> Option<[f32; 4]> {
    let values: Vec<f32> = output
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    values.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LIST_OUTPUT: &str = "\
Wacom Intuos S Pen stylus       \tid: 9\ttype: STYLUS    \n\
Wacom Intuos S Pad pad          \tid: 10\ttype: PAD       \n\
Wacom Intuos S Pen eraser       \tid: 16\ttype: ERASER    \n\
Wacom Intuos S Pen cursor       \tid: 17\ttype: CURSOR    \n\
garbage line\n";

    #[test]
    fn test_parse_device_list() {
        let devices = parse_device_list(LIST_OUTPUT);
        assert_eq!(devices.len(), 4);
        assert_eq!(devices[0].id, 9);
        assert_eq!(devices[0].name, "Wacom Intuos S Pen stylus");
        assert_eq!(devices[0].kind, DeviceKind::Stylus);
        assert_eq!(devices[1].kind, DeviceKind::Pad);
        assert_eq!(devices[3].id, 17);
    }

    #[test]
    fn test_parse_device_list_empty() {
        assert!(parse_device_list("").is_empty());
    }

    #[test]
    fn test_parse_area() {
        assert_eq!(
            parse_area("0 0 15200 9500\n"),
            Some(Area::new(0.0, 0.0, 15200.0, 9500.0))
        );
        assert_eq!(
            parse_area("100 60 900 540"),
            Some(Area::new(100.0, 60.0, 800.0, 480.0))
        );
        assert_eq!(parse_area("0 0 15200"), None);
        assert_eq!(parse_area("Property 'Area' does not exist"), None);
    }

    #[test]
    fn test_parse_pressure_curve() {
        assert_eq!(
            parse_pressure_curve("0 0 100 100"),
            Some(Pressure::LINEAR)
        );
        assert_eq!(
            parse_pressure_curve("25 0 75 100"),
            Some(Pressure::new(0.25, 0.0, 0.75, 1.0))
        );
    }

    #[test]
    fn test_missing_program_is_query_error() {
        let service = Xsetwacom::new("/nonexistent/xsetwacom");
        let err = service.list_devices().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DeviceQuery);

        let err = service.set_area(9, &Area::ZERO).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DeviceApply);
    }
}
