//! Shared drawing helpers for the mapper and pressure editor frames.

use egui::{Painter, Pos2, Rect, Rounding, Stroke};
use xsetwacom_core::model::Anchors;

use crate::theme;
use crate::transform::UnitTransform;

/// Render a frame background with its border.
pub fn render_frame(painter: &Painter, rect: Rect, fill: egui::Color32) {
    painter.rect_filled(rect, Rounding::ZERO, fill);
    painter.rect_stroke(
        rect,
        Rounding::ZERO,
        Stroke::new(theme::FRAME_STROKE_WIDTH, theme::FRAME_BORDER),
    );
}

/// Render an evenly spaced `divisions`×`divisions` grid inside `rect`.
pub fn render_grid(painter: &Painter, rect: Rect, divisions: usize) {
    let stroke = Stroke::new(1.0, theme::GRID_LINES);
    let transform = UnitTransform::new(rect);

    for i in 1..divisions {
        let t = i as f32 / divisions as f32;
        painter.line_segment([transform.to_screen(t, 0.0), transform.to_screen(t, 1.0)], stroke);
        painter.line_segment([transform.to_screen(0.0, t), transform.to_screen(1.0, t)], stroke);
    }
}

/// Screen position of each anchor inside `frame`.
pub fn anchor_positions(frame: Rect, anchors: &Anchors) -> [Pos2; 4] {
    let transform = UnitTransform::new(frame);
    anchors.map(|a| transform.to_screen(a.x, a.y))
}

/// Draw one line per corner from the monitor mapper to the tablet mapper.
///
/// Nothing is drawn unless both mappers were visible this frame.
pub fn render_connectors(
    painter: &Painter,
    monitor: Option<(Rect, &Anchors)>,
    tablet: Option<(Rect, &Anchors)>,
) {
    let (Some((monitor_frame, monitor_anchors)), Some((tablet_frame, tablet_anchors))) =
        (monitor, tablet)
    else {
        return;
    };

    let stroke = Stroke::new(theme::CONNECTOR_STROKE_WIDTH, theme::CONNECTOR);
    let from = anchor_positions(monitor_frame, monitor_anchors);
    let to = anchor_positions(tablet_frame, tablet_anchors);

    for (a, b) in from.into_iter().zip(to) {
        painter.line_segment([a, b], stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;
    use xsetwacom_core::model::{Anchor, FULL_SQUARE};

    #[test]
    fn test_anchor_positions_follow_corner_order() {
        let frame = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(240.0, 135.0));
        let positions = anchor_positions(frame, &FULL_SQUARE);

        assert_eq!(positions[0], Pos2::new(100.0, 50.0));
        assert_eq!(positions[1], Pos2::new(100.0, 185.0));
        assert_eq!(positions[2], Pos2::new(340.0, 50.0));
        assert_eq!(positions[3], Pos2::new(340.0, 185.0));
    }

    #[test]
    fn test_inset_anchor_position() {
        let frame = Rect::from_min_size(Pos2::ZERO, Vec2::new(200.0, 100.0));
        let anchors = [
            Anchor::new(0.1, 0.1),
            Anchor::new(0.1, 0.9),
            Anchor::new(0.9, 0.1),
            Anchor::new(0.9, 0.9),
        ];
        let positions = anchor_positions(frame, &anchors);

        assert!((positions[3].x - 180.0).abs() < 0.001);
        assert!((positions[3].y - 90.0).abs() < 0.001);
    }
}
