use crate::paint::{Color, Rgb};

use super::builtins::step;
use super::SurfaceGeometry;

/// Style for the legacy hard-edged, single-color border.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlatBorderStyle {
    pub border_color: Rgb,
    pub border_thickness: f32,
}

impl FlatBorderStyle {
    #[inline]
    pub const fn new(border_color: Rgb, border_thickness: f32) -> Self {
        Self { border_color, border_thickness }
    }
}

/// Hard-edged border from four independent side tests.
///
/// Sides are summed, not merged: where two sides overlap (the corners) alpha
/// is 2 and rgb is doubled accordingly. Consumers that need a valid
/// premultiplied color must clamp (see [`Color::clamped`]).
pub fn shade_flat(geometry: SurfaceGeometry, style: &FlatBorderStyle) -> Color {
    let t = style.border_thickness;
    let size = geometry.size;
    let p = geometry.location();

    let left = 1.0 - step(t, p.x); // p.x < t
    let top = 1.0 - step(t, p.y); // p.y < t
    let right = 1.0 - step(p.x, size.x - t); // p.x > size.x - t
    let bottom = 1.0 - step(p.y, size.y - t); // p.y > size.y - t

    let alpha = left + top + right + bottom;
    Color::premultiplied(style.border_color, alpha)
}
