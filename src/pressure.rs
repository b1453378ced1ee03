//! Pressure curve editor.

use egui::{Color32, CursorIcon, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use xsetwacom_core::config::GRAB_RADIUS;
use xsetwacom_core::Pressure;

use crate::canvas;
use crate::theme::{self, UiScale};
use crate::transform::UnitTransform;

/// Line segments used to draw the curve.
const CURVE_SEGMENTS: usize = 48;

/// Which control point of the curve is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlPoint {
    Min,
    Max,
}

impl ControlPoint {
    const ALL: [ControlPoint; 2] = [ControlPoint::Min, ControlPoint::Max];

    fn get(self, pressure: &Pressure) -> (f32, f32) {
        match self {
            ControlPoint::Min => (pressure.min_x, pressure.min_y),
            ControlPoint::Max => (pressure.max_x, pressure.max_y),
        }
    }

    /// Fixed curve end the control point's handle line starts from.
    fn end(self) -> (f32, f32) {
        match self {
            ControlPoint::Min => (0.0, 0.0),
            ControlPoint::Max => (1.0, 1.0),
        }
    }
}

/// Move one control point by `delta` (unit space, Y up), keeping every value
/// in `[0, 1]`.
fn drag_control(pressure: Pressure, point: ControlPoint, delta: Vec2) -> Pressure {
    let mut moved = pressure;
    match point {
        ControlPoint::Min => {
            moved.min_x += delta.x;
            moved.min_y += delta.y;
        }
        ControlPoint::Max => {
            moved.max_x += delta.x;
            moved.max_y += delta.y;
        }
    }
    moved.clamped()
}

/// Render the curve from (0, 0) to (1, 1) in a square of `size` and let the
/// user drag both control points. Returns true if the curve changed.
pub fn pressure_editor(
    ui: &mut Ui,
    label: &str,
    pressure: &mut Pressure,
    size: f32,
    fill: Color32,
    scale: UiScale,
) -> bool {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return false;
    }

    let transform = UnitTransform::y_up(rect);
    let painter = ui.painter().clone();
    let editable = ui.is_enabled();
    let radius = scale.px(GRAB_RADIUS);
    let base_id = ui.make_persistent_id(label);
    let mut changed = false;

    canvas::render_frame(&painter, rect, fill);
    canvas::render_grid(&painter, rect, 4);

    let mut hovered = None;
    for point in ControlPoint::ALL {
        let (x, y) = point.get(pressure);
        let hit = Rect::from_center_size(transform.to_screen(x, y), Vec2::splat(radius * 2.0));
        let sense = if editable { Sense::drag() } else { Sense::hover() };
        let response = ui.interact(hit, base_id.with(point as u8), sense);

        if editable && response.dragged() {
            let delta = transform.delta_to_unit(response.drag_delta());
            let moved = drag_control(*pressure, point, delta);
            if moved != *pressure {
                *pressure = moved;
                changed = true;
            }
        }
        if response.hovered() || response.dragged() {
            hovered = Some(point);
        }
    }

    let control_stroke = Stroke::new(1.0, theme::CONTROL_LINE);
    for point in ControlPoint::ALL {
        let (ex, ey) = point.end();
        let (x, y) = point.get(pressure);
        painter.line_segment(
            [transform.to_screen(ex, ey), transform.to_screen(x, y)],
            control_stroke,
        );
    }

    let curve: Vec<Pos2> = (0..=CURVE_SEGMENTS)
        .map(|i| {
            let (x, y) = pressure.point_at(i as f32 / CURVE_SEGMENTS as f32);
            transform.to_screen(x, y)
        })
        .collect();
    painter.add(Shape::line(
        curve,
        Stroke::new(scale.px(theme::CURVE_STROKE_WIDTH), theme::CURVE),
    ));

    for point in ControlPoint::ALL {
        let (x, y) = point.get(pressure);
        let color = match (editable, hovered == Some(point)) {
            (false, _) => theme::ANCHOR_DISABLED,
            (true, true) => theme::ANCHOR_HOVER,
            (true, false) => theme::ANCHOR,
        };
        painter.circle_filled(transform.to_screen(x, y), radius, color);
    }

    if let Some(point) = hovered {
        if editable {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        let (x, y) = point.get(pressure);
        egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), base_id.with("tooltip"), |ui| {
            ui.label(format!("({:.3}, {:.3})", x, y));
        });
    }

    changed
}
