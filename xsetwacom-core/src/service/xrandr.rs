//! `xrandr` backed monitor enumeration.

use crate::error::{Error, Result};
use crate::model::Monitor;

use super::command::{command_line, run};
use super::DisplayService;

/// Monitor enumeration through `xrandr --listactivemonitors`.
#[derive(Debug, Clone)]
pub struct Xrandr {
    program: String,
}

impl Default for Xrandr {
    fn default() -> Self {
        Self::new("xrandr")
    }
}

impl Xrandr {
    /// Use the given executable instead of `xrandr` from `PATH`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl DisplayService for Xrandr {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        let args = vec!["--listactivemonitors".to_string()];
        let output = run(&self.program, &args).map_err(|message| Error::DisplayQuery {
            command: command_line(&self.program, &args),
            message,
        })?;

        let monitors = parse_monitors(&output);
        tracing::info!("Found {} monitor(s)", monitors.len());
        Ok(monitors)
    }
}

/// Parse `xrandr --listactivemonitors` output.
///
/// Monitor lines have the form `<id>: +<*?><name> <w>/<mm>x<h>/<mm>+<x>+<y>`.
/// The `Monitors: N` header and any line not matching are skipped.
pub fn parse_monitors(output: &str) -> Vec<Monitor> {
    output.lines().filter_map(parse_monitor_line).collect()
}

fn parse_monitor_line(line: &str) -> Option<Monitor> {
    let (id, rest) = line.trim().split_once(':')?;
    if !is_digits(id) {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('+')?;
    let (primary, rest) = match rest.strip_prefix('*') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    let (name, rest) = rest.split_once(char::is_whitespace)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }

    let geometry = rest.split_whitespace().next()?;
    let (width, height, offset_x, offset_y) = parse_geometry(geometry)?;

    Some(Monitor {
        id: id.parse().ok()?,
        primary,
        offset_x,
        offset_y,
        width,
        height,
        name: name.to_string(),
    })
}

/// Parse `<w>/<mm>x<h>/<mm>+<x>+<y>`.
fn parse_geometry(geometry: &str) -> Option<(f32, f32, f32, f32)> {
    let (horizontal, rest) = geometry.split_once('x')?;
    let mut parts = rest.split('+');
    let vertical = parts.next()?;
    let offset_x = parts.next()?;
    let offset_y = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let (width, width_mm) = horizontal.split_once('/')?;
    let (height, height_mm) = vertical.split_once('/')?;
    let fields = [width, width_mm, height, height_mm, offset_x, offset_y];
    if !fields.iter().all(|f| is_digits(f)) {
        return None;
    }

    Some((
        width.parse().ok()?,
        height.parse().ok()?,
        offset_x.parse().ok()?,
        offset_y.parse().ok()?,
    ))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_two_monitors() {
        let output = "Monitors: 2\n \
                      0: +*DP-1 2560/597x1440/336+0+0  DP-1\n \
                      1: +HDMI-1 1920/527x1080/296+2560+180  HDMI-1\n";
        let monitors = parse_monitors(output);

        assert_eq!(
            monitors,
            vec![
                Monitor {
                    id: 0,
                    primary: true,
                    offset_x: 0.0,
                    offset_y: 0.0,
                    width: 2560.0,
                    height: 1440.0,
                    name: "DP-1".to_string(),
                },
                Monitor {
                    id: 1,
                    primary: false,
                    offset_x: 2560.0,
                    offset_y: 180.0,
                    width: 1920.0,
                    height: 1080.0,
                    name: "HDMI-1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_non_matching_lines_are_skipped() {
        let output = "Monitors: 3\n\
                      0: DP-1 2560/597x1440/336+0+0  DP-1\n\
                      1: +eDP_1 1920/344x1080/194+0+0  eDP_1\n\
                      2: +HDMI-2 1920x1080+0+0  HDMI-2\n\
                      3: +VGA-1 1024/304x768/228+0+0  VGA-1\n";
        let monitors = parse_monitors(output);
        assert_eq!(monitors.len(), 1);
        assert_eq!(monitors[0].name, "VGA-1");
        assert_eq!(monitors[0].id, 3);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_monitors("Monitors: 0\n").is_empty());
    }

    #[test]
    fn test_missing_program_is_display_error() {
        let err = Xrandr::new("/nonexistent/xrandr").list_monitors().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DisplayQuery);
    }
}
