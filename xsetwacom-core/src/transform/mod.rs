//! Conversions between physical areas and normalized anchors.

pub mod drag;
pub mod region;

pub use drag::{drag_anchor, RegionConstraints};
pub use region::{apply_full_area_policy, output_mapping, to_normalized, to_physical};
