//! Conversion between the unit square and a widget rectangle on screen.

use egui::{Pos2, Rect, Vec2};

/// Maps `[0,1]×[0,1]` onto a screen rectangle.
///
/// Area mappers use screen orientation (Y down). The pressure editor plots a
/// curve and flips Y so that 1.0 is at the top.
#[derive(Debug, Clone, Copy)]
pub struct UnitTransform {
    pub rect: Rect,
    pub y_up: bool,
}

impl UnitTransform {
    pub fn new(rect: Rect) -> Self {
        Self { rect, y_up: false }
    }

    pub fn y_up(rect: Rect) -> Self {
        Self { rect, y_up: true }
    }

    /// Convert unit coordinates to a screen position.
    pub fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        let y = if self.y_up { 1.0 - y } else { y };
        Pos2::new(
            self.rect.min.x + x * self.rect.width(),
            self.rect.min.y + y * self.rect.height(),
        )
    }

    /// Convert a screen-space movement to unit space.
    ///
    /// An empty rectangle yields no movement.
    pub fn delta_to_unit(&self, delta: Vec2) -> Vec2 {
        let size = self.rect.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return Vec2::ZERO;
        }
        let y = if self.y_up { -delta.y } else { delta.y };
        Vec2::new(delta.x / size.x, y / size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(320.0, 180.0))
    }

    #[test]
    fn test_corners_y_down() {
        let transform = UnitTransform::new(canvas());

        let top_left = transform.to_screen(0.0, 0.0);
        assert!((top_left.x - 10.0).abs() < 0.001);
        assert!((top_left.y - 20.0).abs() < 0.001);

        let bottom_right = transform.to_screen(1.0, 1.0);
        assert!((bottom_right.x - 330.0).abs() < 0.001);
        assert!((bottom_right.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_y_up_origin_is_bottom_left() {
        let transform = UnitTransform::y_up(canvas());

        let origin = transform.to_screen(0.0, 0.0);
        assert!((origin.x - 10.0).abs() < 0.001);
        assert!((origin.y - 200.0).abs() < 0.001);

        let delta = transform.delta_to_unit(Vec2::new(32.0, -18.0));
        assert!((delta.x - 0.1).abs() < 0.001);
        assert!((delta.y - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_screen_delta_matches_unit_delta() {
        for transform in [UnitTransform::new(canvas()), UnitTransform::y_up(canvas())] {
            let a = transform.to_screen(0.25, 0.75);
            let b = transform.to_screen(0.5, 0.25);
            let delta = transform.delta_to_unit(b - a);
            assert!((delta.x - 0.25).abs() < 0.001);
            assert!((delta.y + 0.5).abs() < 0.001);
        }
    }

    #[test]
    fn test_empty_rect_has_no_movement() {
        let transform = UnitTransform::new(Rect::from_min_size(Pos2::ZERO, Vec2::ZERO));
        assert_eq!(transform.delta_to_unit(Vec2::new(5.0, 5.0)), Vec2::ZERO);
    }
}
