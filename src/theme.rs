//! Color palette, fonts, text sizes and UI scale.

use std::path::Path;

use anyhow::{bail, Context as _};
use egui::{
    Color32, Context, FontData, FontDefinitions, FontFamily, FontId, TextStyle, Vec2, Visuals,
};
use xsetwacom_core::settings::clamp_scale;
use xsetwacom_core::Theme;

// =============================================================================
// MAPPER FRAME
// =============================================================================
pub const FRAME_FILL_DARK: Color32 = Color32::from_rgb(32, 34, 37);
pub const FRAME_FILL_LIGHT: Color32 = Color32::from_rgb(225, 228, 232);
pub const FRAME_BORDER: Color32 = Color32::from_rgb(100, 115, 130);

// =============================================================================
// REGION - the mapped sub-rectangle
// =============================================================================
pub const REGION_FILL: Color32 = Color32::from_rgba_premultiplied(0, 120, 200, 90);
pub const REGION_BORDER: Color32 = Color32::from_rgb(60, 160, 235);

// =============================================================================
// ANCHORS
// =============================================================================
pub const ANCHOR: Color32 = Color32::from_rgb(240, 240, 240);
pub const ANCHOR_HOVER: Color32 = Color32::from_rgb(255, 220, 50);
pub const ANCHOR_DISABLED: Color32 = Color32::from_rgb(120, 125, 130);

// =============================================================================
// GRID
// =============================================================================
pub const GRID_LINES: Color32 = Color32::from_rgba_premultiplied(80, 85, 90, 100);

// =============================================================================
// CONNECTORS - link matching corners of the two mappers
// =============================================================================
pub const CONNECTOR: Color32 = Color32::from_rgba_premultiplied(127, 0, 0, 127);

// =============================================================================
// PRESSURE CURVE
// =============================================================================
pub const CURVE: Color32 = Color32::from_rgb(0, 220, 180);
pub const CONTROL_LINE: Color32 = Color32::from_rgba_premultiplied(150, 150, 150, 150);

// =============================================================================
// TOASTS
// =============================================================================
pub const TOAST_SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
pub const TOAST_WARNING: Color32 = Color32::from_rgb(255, 190, 60);
pub const TOAST_ERROR: Color32 = Color32::from_rgb(255, 85, 50);

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const FRAME_STROKE_WIDTH: f32 = 1.0;
pub const REGION_STROKE_WIDTH: f32 = 1.5;
pub const CONNECTOR_STROKE_WIDTH: f32 = 2.0;
pub const CURVE_STROKE_WIDTH: f32 = 2.0;

/// Global widget scale, passed into every layout function that sizes
/// something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiScale(f32);

impl Default for UiScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl UiScale {
    pub fn new(scale: f32) -> Self {
        Self(clamp_scale(scale))
    }

    /// Scale a length in layout units.
    pub fn px(self, units: f32) -> f32 {
        units * self.0
    }

    /// Scale a `[width, height]` box in layout units.
    pub fn size(self, units: [f32; 2]) -> Vec2 {
        Vec2::new(units[0], units[1]) * self.0
    }
}

/// Background of a mapper or editor frame.
pub fn frame_fill(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => FRAME_FILL_DARK,
        Theme::Light => FRAME_FILL_LIGHT,
    }
}

/// Install visuals for `theme` and text sizes for `scale`.
pub fn apply(ctx: &Context, theme: Theme, scale: UiScale) {
    ctx.set_visuals(match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Small, FontId::proportional(scale.px(9.0))),
        (TextStyle::Body, FontId::proportional(scale.px(12.5))),
        (TextStyle::Button, FontId::proportional(scale.px(12.5))),
        (TextStyle::Heading, FontId::proportional(scale.px(18.0))),
        (TextStyle::Monospace, FontId::monospace(scale.px(12.0))),
    ]
    .into();
    style.spacing.item_spacing = Vec2::new(scale.px(8.0), scale.px(3.0));
    style.spacing.interact_size = Vec2::new(scale.px(40.0), scale.px(18.0));
    ctx.set_style(style);
}

/// Font definitions with `font` from `dir` placed first in both families.
///
/// An empty name gives egui's built-in fonts. The file header is checked
/// before use since egui cannot recover from unparsable font data.
pub fn font_definitions(dir: &Path, font: &str) -> anyhow::Result<FontDefinitions> {
    let mut fonts = FontDefinitions::default();
    if font.is_empty() {
        return Ok(fonts);
    }

    let path = dir.join(font);
    let bytes =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    if !has_font_header(&bytes) {
        bail!("{} is not a TrueType or OpenType font", path.display());
    }

    fonts
        .font_data
        .insert(font.to_string(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, font.to_string());
    }
    Ok(fonts)
}

fn has_font_header(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}
