//! Per-pixel window border kernel.
//!
//! Everything here is a pure function of its arguments: no state, no I/O,
//! no allocation. Evaluating the same pixel twice, in any order or on any
//! thread, yields bit-identical results.
//!
//! Two policies are provided:
//! - [`gradient`]: anti-aliased band with a two-color gradient (the default)
//! - [`flat`]: hard-edged single-color band from per-side step tests

pub mod builtins;
pub mod flat;
pub mod gradient;

pub use flat::{shade_flat, FlatBorderStyle};
pub use gradient::{border_alpha, edge_distance, gradient_color, gradient_param, shade, BorderStyle};

use crate::coords::Vec2;
use crate::paint::Color;

/// Where the current pixel is, relative to the surface being decorated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceGeometry {
    /// Surface size in pixels. Must match the rasterizer's viewport.
    pub size: Vec2,
    /// Normalized position of the pixel, each component in [0, 1].
    pub coordinate: Vec2,
}

impl SurfaceGeometry {
    #[inline]
    pub const fn new(size: Vec2, coordinate: Vec2) -> Self {
        Self { size, coordinate }
    }

    /// Geometry for a pixel-space position inside the surface.
    #[inline]
    pub fn at_pixel(size: Vec2, pixel: Vec2) -> Self {
        Self { size, coordinate: pixel / size }
    }

    /// Pixel-space position (`coordinate * size`).
    #[inline]
    pub fn location(self) -> Vec2 {
        self.coordinate * self.size
    }
}

/// Border policy selected for a draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BorderShader {
    Gradient(BorderStyle),
    Flat(FlatBorderStyle),
}

impl BorderShader {
    /// Evaluates the selected policy for one pixel.
    #[inline]
    pub fn shade(&self, geometry: SurfaceGeometry) -> Color {
        match self {
            BorderShader::Gradient(style) => gradient::shade(geometry, style),
            BorderShader::Flat(style) => flat::shade_flat(geometry, style),
        }
    }

    /// Nominal band width in pixels.
    #[inline]
    pub fn thickness(&self) -> f32 {
        match self {
            BorderShader::Gradient(style) => style.thickness,
            BorderShader::Flat(style) => style.border_thickness,
        }
    }
}

impl From<BorderStyle> for BorderShader {
    fn from(style: BorderStyle) -> Self {
        BorderShader::Gradient(style)
    }
}

impl From<FlatBorderStyle> for BorderShader {
    fn from(style: FlatBorderStyle) -> Self {
        BorderShader::Flat(style)
    }
}
