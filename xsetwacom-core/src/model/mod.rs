//! Data model for tablet areas, pressure curves and mapped regions.

mod anchor;
mod area;
mod device;
mod pressure;

pub use anchor::{is_axis_aligned, Anchor, Anchors, Corner, FULL_SQUARE};
pub use area::Area;
pub use device::{Device, DeviceKind, Monitor};
pub use pressure::Pressure;
