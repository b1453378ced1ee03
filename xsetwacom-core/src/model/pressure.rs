//! Pressure response curve.

use serde::{Deserialize, Serialize};

use crate::config::UNSET;

/// The two inner control points of a cubic Bézier pressure curve.
///
/// The curve always runs from (0, 0) to (1, 1); `(min_x, min_y)` and
/// `(max_x, max_y)` shape the low and high pressure response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pressure {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Default for Pressure {
    fn default() -> Self {
        Self::UNSET
    }
}

impl Pressure {
    /// Uninitialized curve, all fields `-1`.
    pub const UNSET: Pressure = Pressure::new(UNSET, UNSET, UNSET, UNSET);

    /// Identity response.
    pub const LINEAR: Pressure = Pressure::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new pressure curve.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// True if every field still holds the sentinel.
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Control values in `[min_x, min_y, max_x, max_y]` order.
    pub fn to_array(self) -> [f32; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Build from `[min_x, min_y, max_x, max_y]`.
    pub fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Same curve with every control value clamped to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self::from_array(self.to_array().map(|v| v.clamp(0.0, 1.0)))
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> (f32, f32) {
        let u = 1.0 - t;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        (
            b1 * self.min_x + b2 * self.max_x + b3,
            b1 * self.min_y + b2 * self.max_y + b3,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        let curve = Pressure::new(0.3, 0.1, 0.7, 0.9);
        assert_eq!(curve.point_at(0.0), (0.0, 0.0));
        let (x, y) = curve.point_at(1.0);
        assert!((x - 1.0).abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_linear_curve_is_diagonal() {
        for step in 0..=10 {
            let (x, y) = Pressure::LINEAR.point_at(step as f32 / 10.0);
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_clamped() {
        let curve = Pressure::new(-0.5, 0.2, 1.5, 0.8).clamped();
        assert_eq!(curve, Pressure::new(0.0, 0.2, 1.0, 0.8));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Pressure::LINEAR).unwrap();
        assert_eq!(json["minX"], 0.0);
        assert_eq!(json["maxY"], 1.0);
    }
}
