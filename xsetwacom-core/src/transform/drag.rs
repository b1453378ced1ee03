//! Anchor dragging with axis locking.

use crate::model::{Anchor, Anchors, Corner};

/// Policy flags of one mapped region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionConstraints {
    /// Region must equal the native area; anchors cannot be dragged.
    pub force_full_area: bool,
    /// Stored and shown, but has no effect on dragging.
    pub force_aspect_ratio: bool,
}

/// Move `corner` by a normalized `delta`, clamped to the unit square.
///
/// The two corners sharing an edge with the dragged one follow it so the
/// region stays axis-aligned, and the corner stops at the opposite edges so
/// the region never turns inside out. Returns true if any anchor moved.
pub fn drag_anchor(
    anchors: &mut Anchors,
    corner: Corner,
    delta: Anchor,
    constraints: RegionConstraints,
) -> bool {
    if constraints.force_full_area {
        return false;
    }

    let before = *anchors;
    let index = corner.index();
    let mut moved = Anchor::new(anchors[index].x + delta.x, anchors[index].y + delta.y).clamped();

    // A corner may meet the opposite edges but not cross them.
    let opposite_x = anchors[corner.horizontal_neighbor().index()].x;
    let opposite_y = anchors[corner.vertical_neighbor().index()].y;
    moved.x = if corner.is_left() {
        moved.x.min(opposite_x)
    } else {
        moved.x.max(opposite_x)
    };
    moved.y = if corner.is_top() {
        moved.y.min(opposite_y)
    } else {
        moved.y.max(opposite_y)
    };

    anchors[index] = moved;
    anchors[corner.vertical_neighbor().index()].x = moved.x;
    anchors[corner.horizontal_neighbor().index()].y = moved.y;

    *anchors != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{is_axis_aligned, Area, FULL_SQUARE};
    use crate::transform::region::{to_normalized, to_physical};

    fn inset() -> Anchors {
        [
            Anchor::new(0.1, 0.1),
            Anchor::new(0.1, 0.9),
            Anchor::new(0.9, 0.1),
            Anchor::new(0.9, 0.9),
        ]
    }

    #[test]
    fn test_drag_top_left_moves_shared_edges() {
        let reference = Area::new(0.0, 0.0, 1000.0, 600.0);
        let mut anchors = to_normalized(&Area::new(100.0, 60.0, 800.0, 480.0), &reference);

        let changed = drag_anchor(
            &mut anchors,
            Corner::TopLeft,
            Anchor::new(0.1, 0.0),
            RegionConstraints::default(),
        );

        assert!(changed);
        assert!((anchors[1].x - 0.2).abs() < 1e-6);
        assert!((anchors[2].y - 0.1).abs() < 1e-6);
        assert!(is_axis_aligned(&anchors));

        let area = to_physical(&anchors, &reference);
        assert!((area.offset_x - 200.0).abs() < 0.01);
        assert!((area.offset_y - 60.0).abs() < 0.01);
        assert!((area.width - 700.0).abs() < 0.01);
        assert!((area.height - 480.0).abs() < 0.01);
    }

    #[test]
    fn test_every_corner_keeps_region_axis_aligned() {
        let deltas = [
            Anchor::new(0.05, -0.03),
            Anchor::new(-0.4, 0.7),
            Anchor::new(2.0, 2.0),
            Anchor::new(-2.0, -2.0),
        ];
        for corner in Corner::ALL {
            for delta in deltas {
                let mut anchors = inset();
                drag_anchor(&mut anchors, corner, delta, RegionConstraints::default());
                assert!(is_axis_aligned(&anchors), "{corner:?} by {delta:?}");
                assert!(anchors
                    .iter()
                    .all(|a| (0.0..=1.0).contains(&a.x) && (0.0..=1.0).contains(&a.y)));
            }
        }
    }

    #[test]
    fn test_drag_past_opposite_corner_keeps_size_non_negative() {
        let reference = Area::new(0.0, 0.0, 1000.0, 600.0);
        let deltas = [
            Anchor::new(0.95, 0.95),
            Anchor::new(-0.95, 0.95),
            Anchor::new(0.95, -0.95),
            Anchor::new(-0.95, -0.95),
        ];
        for corner in Corner::ALL {
            for delta in deltas {
                let mut anchors = inset();
                drag_anchor(&mut anchors, corner, delta, RegionConstraints::default());
                assert!(is_axis_aligned(&anchors), "{corner:?} by {delta:?}");

                let area = to_physical(&anchors, &reference);
                assert!(
                    area.width >= 0.0 && area.height >= 0.0,
                    "{corner:?} by {delta:?} gave {area:?}"
                );
            }
        }
    }

    #[test]
    fn test_top_left_dragged_onto_bottom_right_collapses() {
        let mut anchors = inset();
        drag_anchor(
            &mut anchors,
            Corner::TopLeft,
            Anchor::new(0.95, 0.95),
            RegionConstraints::default(),
        );
        assert!((anchors[0].x - 0.9).abs() < 1e-6);
        assert!((anchors[0].y - 0.9).abs() < 1e-6);
        assert_eq!(anchors[3], Anchor::new(0.9, 0.9));
    }

    #[test]
    fn test_drag_clamps_each_axis() {
        let mut anchors = inset();
        drag_anchor(
            &mut anchors,
            Corner::BottomRight,
            Anchor::new(0.5, -0.2),
            RegionConstraints::default(),
        );
        assert_eq!(anchors[3].x, 1.0);
        assert!((anchors[3].y - 0.7).abs() < 1e-6);
        assert_eq!(anchors[2].x, 1.0);
        assert!((anchors[1].y - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_full_area_blocks_drag() {
        let mut anchors = inset();
        let constraints = RegionConstraints {
            force_full_area: true,
            force_aspect_ratio: false,
        };
        for corner in Corner::ALL {
            assert!(!drag_anchor(&mut anchors, corner, Anchor::new(0.3, 0.3), constraints));
        }
        assert_eq!(anchors, inset());
    }

    #[test]
    fn test_aspect_ratio_flag_is_inert() {
        let mut free = inset();
        let mut locked = inset();
        let aspect = RegionConstraints {
            force_full_area: false,
            force_aspect_ratio: true,
        };
        let delta = Anchor::new(0.05, 0.2);
        drag_anchor(&mut free, Corner::TopRight, delta, RegionConstraints::default());
        drag_anchor(&mut locked, Corner::TopRight, delta, aspect);
        assert_eq!(free, locked);
    }

    #[test]
    fn test_drag_pinned_corner_reports_no_change() {
        let mut anchors = FULL_SQUARE;
        assert!(!drag_anchor(
            &mut anchors,
            Corner::TopLeft,
            Anchor::new(-0.1, -0.1),
            RegionConstraints::default()
        ));
    }
}
