//! Interactive widget editing the four corners of a normalized region.

use egui::{Color32, CursorIcon, Rect, Sense, Stroke, Ui, Vec2};
use xsetwacom_core::config::GRAB_RADIUS;
use xsetwacom_core::model::{Anchor, Anchors, Corner};
use xsetwacom_core::transform::{drag_anchor, RegionConstraints};

use crate::canvas;
use crate::theme::{self, UiScale};
use crate::transform::UnitTransform;

/// Result of one [`area_mapper`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaMapperResponse {
    /// True if any anchor moved this frame.
    pub changed: bool,
    /// Screen rectangle of the frame, `None` when the widget was not shown.
    pub frame: Option<Rect>,
}

/// Render a frame of `size` with the region spanned by `anchors` and let
/// the user drag each corner.
///
/// `anchors` must be kept by the caller between frames. Dragging is
/// disabled when full area is forced or the `Ui` is disabled.
pub fn area_mapper(
    ui: &mut Ui,
    label: &str,
    anchors: &mut Anchors,
    size: Vec2,
    constraints: RegionConstraints,
    fill: Color32,
    scale: UiScale,
) -> AreaMapperResponse {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return AreaMapperResponse {
            changed: false,
            frame: None,
        };
    }

    let transform = UnitTransform::new(rect);
    let painter = ui.painter().clone();

    canvas::render_frame(&painter, rect, fill);
    canvas::render_grid(&painter, rect, 4);

    let region = Rect::from_two_pos(
        transform.to_screen(anchors[0].x, anchors[0].y),
        transform.to_screen(anchors[3].x, anchors[3].y),
    );
    painter.rect_filled(region, 0.0, theme::REGION_FILL);
    painter.rect_stroke(
        region,
        0.0,
        Stroke::new(theme::REGION_STROKE_WIDTH, theme::REGION_BORDER),
    );

    let editable = ui.is_enabled() && !constraints.force_full_area;
    let sense = if editable { Sense::drag() } else { Sense::hover() };
    let radius = scale.px(GRAB_RADIUS);
    let base_id = ui.make_persistent_id(label);
    let mut changed = false;

    for corner in Corner::ALL {
        let i = corner.index();
        let center = transform.to_screen(anchors[i].x, anchors[i].y);
        let hit = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        let response = ui.interact(hit, base_id.with(i), sense);

        if editable && response.dragged() {
            let delta = transform.delta_to_unit(response.drag_delta());
            if delta != Vec2::ZERO {
                changed |= drag_anchor(anchors, corner, Anchor::new(delta.x, delta.y), constraints);
            }
        }

        let active = response.hovered() || response.dragged();
        if active {
            if editable {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
            let anchor = anchors[i];
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                base_id.with(("tooltip", i)),
                |ui| {
                    ui.label(format!("({:.3}, {:.3})", anchor.x, anchor.y));
                },
            );
        }

        let color = match (editable, active) {
            (false, _) => theme::ANCHOR_DISABLED,
            (true, true) => theme::ANCHOR_HOVER,
            (true, false) => theme::ANCHOR,
        };
        // Draw at the post-drag position.
        let center = transform.to_screen(anchors[i].x, anchors[i].y);
        painter.circle_filled(center, radius, color);
        painter.circle_stroke(center, radius, Stroke::new(1.0, theme::REGION_BORDER));
    }

    AreaMapperResponse {
        changed,
        frame: Some(rect),
    }
}
