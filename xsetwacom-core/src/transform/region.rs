//! Physical area <-> normalized anchor conversion.
//!
//! A mapped region is stored physically as an [`Area`] in device or display
//! units and shown on screen as four [`Anchor`]s relative to a reference
//! rectangle, the device's or monitor's native area.

use crate::model::{Anchor, Anchors, Area, Monitor, FULL_SQUARE};

/// Corner anchors of `area`, normalized against `reference`.
///
/// A reference without positive width and height yields the full unit
/// square instead of dividing by zero.
pub fn to_normalized(area: &Area, reference: &Area) -> Anchors {
    if reference.is_degenerate() {
        return FULL_SQUARE;
    }

    let left = area.offset_x / reference.width;
    let right = (area.width + area.offset_x) / reference.width;
    let top = area.offset_y / reference.height;
    let bottom = (area.height + area.offset_y) / reference.height;

    [
        Anchor::new(left, top),
        Anchor::new(left, bottom),
        Anchor::new(right, top),
        Anchor::new(right, bottom),
    ]
}

/// Physical area spanned by `anchors` within `reference`.
pub fn to_physical(anchors: &Anchors, reference: &Area) -> Area {
    Area {
        offset_x: anchors[0].x * reference.width,
        offset_y: anchors[0].y * reference.height,
        width: (anchors[2].x - anchors[0].x) * reference.width,
        height: (anchors[3].y - anchors[2].y) * reference.height,
    }
}

/// Snap `area` to `reference` when full-area mode is on and the area was
/// touched this frame. Returns true if the area was overwritten.
pub fn apply_full_area_policy(
    area: &mut Area,
    reference: &Area,
    force_full_area: bool,
    changed: bool,
) -> bool {
    if force_full_area && changed {
        *area = *reference;
        return true;
    }
    false
}

/// Screen rectangle the stylus is bound to: the selected monitor region
/// moved into combined-desktop coordinates.
pub fn output_mapping(monitor: &Monitor, monitor_area: &Area) -> Area {
    monitor_area.translated(monitor.offset_x, monitor.offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reference() -> Area {
        Area::new(0.0, 0.0, 1000.0, 600.0)
    }

    fn assert_anchors(actual: &Anchors, expected: &[(f32, f32); 4]) {
        for (a, (x, y)) in actual.iter().zip(expected) {
            assert!(
                a.approx_eq(&Anchor::new(*x, *y)),
                "anchor {a:?} != ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_to_normalized_inset_area() {
        let area = Area::new(100.0, 60.0, 800.0, 480.0);
        let anchors = to_normalized(&area, &reference());
        assert_anchors(&anchors, &[(0.1, 0.1), (0.1, 0.9), (0.9, 0.1), (0.9, 0.9)]);
    }

    #[test]
    fn test_to_normalized_full_reference() {
        let anchors = to_normalized(&reference(), &reference());
        assert_eq!(anchors, FULL_SQUARE);
    }

    #[test]
    fn test_to_normalized_degenerate_reference() {
        let area = Area::new(100.0, 60.0, 800.0, 480.0);
        assert_eq!(to_normalized(&area, &Area::ZERO), FULL_SQUARE);
        assert_eq!(
            to_normalized(&area, &Area::new(0.0, 0.0, 1000.0, 0.0)),
            FULL_SQUARE
        );
        assert_eq!(to_normalized(&area, &Area::UNSET), FULL_SQUARE);
    }

    #[test]
    fn test_round_trip() {
        let references = [
            Area::new(0.0, 0.0, 1000.0, 600.0),
            Area::new(0.0, 0.0, 15200.0, 9500.0),
            Area::new(0.0, 0.0, 1920.0, 1080.0),
        ];
        let fractions = [(0.0, 0.0, 1.0, 1.0), (0.1, 0.2, 0.5, 0.6), (0.25, 0.0, 0.75, 0.5)];

        for reference in &references {
            for (fx, fy, fw, fh) in fractions {
                let area = Area::new(
                    reference.width * fx,
                    reference.height * fy,
                    reference.width * fw,
                    reference.height * fh,
                );
                let back = to_physical(&to_normalized(&area, reference), reference);
                let tolerance = reference.width.max(reference.height) * 1e-5;
                assert!((back.offset_x - area.offset_x).abs() < tolerance);
                assert!((back.offset_y - area.offset_y).abs() < tolerance);
                assert!((back.width - area.width).abs() < tolerance);
                assert!((back.height - area.height).abs() < tolerance);
            }
        }
    }

    #[test]
    fn test_full_area_policy() {
        let mut area = Area::new(200.0, 60.0, 700.0, 480.0);
        assert!(!apply_full_area_policy(&mut area, &reference(), false, true));
        assert!(!apply_full_area_policy(&mut area, &reference(), true, false));
        assert_eq!(area, Area::new(200.0, 60.0, 700.0, 480.0));

        assert!(apply_full_area_policy(&mut area, &reference(), true, true));
        assert_eq!(area, reference());
    }

    #[test]
    fn test_output_mapping_adds_monitor_offset() {
        let monitor = Monitor {
            id: 1,
            primary: false,
            offset_x: 2560.0,
            offset_y: 120.0,
            width: 1920.0,
            height: 1080.0,
            name: "HDMI-1".to_string(),
        };
        let region = Area::new(100.0, 0.0, 960.0, 540.0);
        assert_eq!(
            output_mapping(&monitor, &region),
            Area::new(2660.0, 120.0, 960.0, 540.0)
        );
    }
}
