//! Normalized corner anchors of a mapped region.

use crate::config::float_cmp;

/// A point in `[0, 1] x [0, 1]`, relative to a reference rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same point with both axes clamped to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self::new(self.x.clamp(0.0, 1.0), self.y.clamp(0.0, 1.0))
    }

    /// Compare with tolerance.
    pub fn approx_eq(&self, other: &Anchor) -> bool {
        float_cmp::approx_eq(self.x, other.x) && float_cmp::approx_eq(self.y, other.y)
    }
}

/// Four corners indexed top-left, bottom-left, top-right, bottom-right.
pub type Anchors = [Anchor; 4];

/// The anchor unit square: the whole reference rectangle.
pub const FULL_SQUARE: Anchors = [
    Anchor::new(0.0, 0.0),
    Anchor::new(0.0, 1.0),
    Anchor::new(1.0, 0.0),
    Anchor::new(1.0, 1.0),
];

/// True if all four anchors still describe an axis-aligned rectangle.
pub fn is_axis_aligned(anchors: &Anchors) -> bool {
    Corner::ALL.iter().all(|&corner| {
        let a = anchors[corner.index()];
        let v = anchors[corner.vertical_neighbor().index()];
        let h = anchors[corner.horizontal_neighbor().index()];
        float_cmp::approx_eq(a.x, v.x) && float_cmp::approx_eq(a.y, h.y)
    })
}

/// Index of a corner within [`Anchors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft = 0,
    BottomLeft = 1,
    TopRight = 2,
    BottomRight = 3,
}

impl Corner {
    /// All corners in anchor order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ];

    /// Position of this corner in an [`Anchors`] array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Corner on the same vertical edge (shares X).
    pub fn vertical_neighbor(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomRight => Corner::TopRight,
        }
    }

    /// True for the two corners on the left edge.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// True for the two corners on the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Corner on the same horizontal edge (shares Y).
    pub fn horizontal_neighbor(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_symmetric() {
        for corner in Corner::ALL {
            assert_eq!(corner.vertical_neighbor().vertical_neighbor(), corner);
            assert_eq!(corner.horizontal_neighbor().horizontal_neighbor(), corner);
            assert_ne!(corner.vertical_neighbor(), corner.horizontal_neighbor());
        }
    }

    #[test]
    fn test_corner_sides() {
        assert!(Corner::TopLeft.is_left() && Corner::TopLeft.is_top());
        assert!(Corner::BottomLeft.is_left() && !Corner::BottomLeft.is_top());
        assert!(!Corner::TopRight.is_left() && Corner::TopRight.is_top());
        assert!(!Corner::BottomRight.is_left() && !Corner::BottomRight.is_top());
    }

    #[test]
    fn test_full_square_is_axis_aligned() {
        assert!(is_axis_aligned(&FULL_SQUARE));

        let mut skewed = FULL_SQUARE;
        skewed[0].x = 0.2;
        assert!(!is_axis_aligned(&skewed));
    }
}
