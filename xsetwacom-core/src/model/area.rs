//! Physical rectangle in device or display units.

use serde::{Deserialize, Serialize};

use crate::config::{float_cmp, UNSET};

/// A physical rectangle: tablet digitizer units or screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Area {
    fn default() -> Self {
        Self::UNSET
    }
}

impl Area {
    /// Uninitialized area, all fields `-1`.
    pub const UNSET: Area = Area::new(UNSET, UNSET, UNSET, UNSET);

    /// Empty area at the origin.
    pub const ZERO: Area = Area::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new area.
    pub const fn new(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Area of the given size anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Build an area from its top-left and bottom-right corners.
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// True if every field still holds the sentinel.
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// True if the area cannot serve as a scale reference.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Right edge.
    pub fn x_max(&self) -> f32 {
        self.offset_x + self.width
    }

    /// Bottom edge.
    pub fn y_max(&self) -> f32 {
        self.offset_y + self.height
    }

    /// Same rectangle moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.offset_x + dx, self.offset_y + dy, self.width, self.height)
    }

    /// Compare with tolerance.
    pub fn approx_eq(&self, other: &Area) -> bool {
        float_cmp::approx_eq(self.offset_x, other.offset_x)
            && float_cmp::approx_eq(self.offset_y, other.offset_y)
            && float_cmp::approx_eq(self.width, other.width)
            && float_cmp::approx_eq(self.height, other.height)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.0}x{:.0}+{:.0}+{:.0}",
            self.width, self.height, self.offset_x, self.offset_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let area = Area::default();
        assert!(area.is_unset());
        assert!(area.is_degenerate());
    }

    #[test]
    fn test_from_corners() {
        let area = Area::from_corners(100.0, 60.0, 900.0, 540.0);
        assert_eq!(area, Area::new(100.0, 60.0, 800.0, 480.0));
        assert_eq!(area.x_max(), 900.0);
        assert_eq!(area.y_max(), 540.0);
    }

    #[test]
    fn test_display_geometry() {
        let area = Area::new(2560.0, 0.0, 1920.0, 1080.0);
        assert_eq!(area.to_string(), "1920x1080+2560+0");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Area::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json["offsetX"], 1.0);
        assert_eq!(json["offsetY"], 2.0);
        assert_eq!(json["width"], 3.0);
        assert_eq!(json["height"], 4.0);
    }
}
