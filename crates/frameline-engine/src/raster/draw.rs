use std::fmt;

use rayon::prelude::*;

use crate::coords::{PixelSpan, Rect, Vec2};
use crate::paint::{Color, Rgb};
use crate::shader::{BorderShader, SurfaceGeometry};

use super::PixelBuffer;

/// Allowed drift between `half_thickness` and `thickness / 2`.
const HALF_THICKNESS_TOLERANCE: f32 = 1e-4;

/// Draw parameters rejected before any pixel is shaded.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// Surface origin or size is non-finite, or the size is not positive.
    InvalidSurface(Rect),
    /// Thickness is negative or non-finite.
    InvalidThickness(f32),
    /// `half_thickness` was supplied but does not match `thickness / 2`.
    HalfThicknessMismatch { thickness: f32, half_thickness: f32 },
    /// The band would overlap itself on the shorter axis.
    ThicknessExceedsSurface { thickness: f32, limit: f32 },
    /// A color component is non-finite or outside [0, 1].
    InvalidColor(Rgb),
    /// Gradient direction has a non-finite component.
    InvalidDirection(Vec2),
    /// Opacity is outside [0, 1].
    InvalidOpacity(f32),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::InvalidSurface(r) => write!(
                f,
                "invalid surface {}x{} at ({}, {})",
                r.size.x, r.size.y, r.origin.x, r.origin.y
            ),
            DrawError::InvalidThickness(t) => write!(f, "invalid border thickness {t}"),
            DrawError::HalfThicknessMismatch { thickness, half_thickness } => write!(
                f,
                "half thickness {half_thickness} does not match thickness {thickness}"
            ),
            DrawError::ThicknessExceedsSurface { thickness, limit } => write!(
                f,
                "border thickness {thickness} exceeds half the surface ({limit})"
            ),
            DrawError::InvalidColor(c) => {
                write!(f, "color ({}, {}, {}) outside [0, 1]", c.r, c.g, c.b)
            }
            DrawError::InvalidDirection(d) => {
                write!(f, "invalid gradient direction ({}, {})", d.x, d.y)
            }
            DrawError::InvalidOpacity(a) => write!(f, "opacity {a} outside [0, 1]"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Pixel counts for one draw call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    /// Pixels the kernel was evaluated for.
    pub shaded: u64,
    /// Pixels that received non-zero alpha.
    pub covered: u64,
}

impl DrawStats {
    #[inline]
    fn merge(self, other: DrawStats) -> DrawStats {
        DrawStats {
            shaded: self.shaded + other.shaded,
            covered: self.covered + other.covered,
        }
    }
}

/// Checks everything the kernel assumes about its inputs.
pub fn validate(surface: Rect, shader: &BorderShader, opacity: f32) -> Result<(), DrawError> {
    if !surface.is_finite() || surface.is_empty() {
        return Err(DrawError::InvalidSurface(surface));
    }
    if !(0.0..=1.0).contains(&opacity) {
        return Err(DrawError::InvalidOpacity(opacity));
    }

    let thickness = shader.thickness();
    if !thickness.is_finite() || thickness < 0.0 {
        return Err(DrawError::InvalidThickness(thickness));
    }

    let limit = surface.size.min_element() * 0.5;
    if thickness > limit {
        return Err(DrawError::ThicknessExceedsSurface { thickness, limit });
    }

    match shader {
        BorderShader::Gradient(style) => {
            let half = style.half_thickness;
            if !half.is_finite() || (half - thickness * 0.5).abs() > HALF_THICKNESS_TOLERANCE {
                return Err(DrawError::HalfThicknessMismatch { thickness, half_thickness: half });
            }
            for color in [style.start_color, style.end_color] {
                if !color.is_normalized() {
                    return Err(DrawError::InvalidColor(color));
                }
            }
            if !style.gradient_direction.is_finite() {
                return Err(DrawError::InvalidDirection(style.gradient_direction));
            }
        }
        BorderShader::Flat(style) => {
            if !style.border_color.is_normalized() {
                return Err(DrawError::InvalidColor(style.border_color));
            }
        }
    }

    Ok(())
}

/// Shades the border of `surface` and composites it onto `target`.
///
/// Pixels whose centers fall inside `surface` (clipped to the target) are
/// evaluated row-parallel. Kernel output is clamped to a valid premultiplied
/// color, scaled by `opacity` and blended source-over.
pub fn draw_surface_border(
    target: &mut PixelBuffer,
    surface: Rect,
    shader: &BorderShader,
    opacity: f32,
) -> Result<DrawStats, DrawError> {
    if let Err(e) = validate(surface, shader, opacity) {
        log::warn!("border draw rejected: {e}");
        return Err(e);
    }

    let Some(span) = surface.covered_pixels(target.width(), target.height()) else {
        log::trace!("border draw skipped: surface {surface:?} outside target");
        return Ok(DrawStats::default());
    };

    let width = target.width() as usize;
    let rows = &mut target.pixels_mut()[span.y0 as usize * width..span.y1 as usize * width];

    let stats = rows
        .par_chunks_mut(width)
        .enumerate()
        .map(|(i, row)| {
            let y = span.y0 + i as u32;
            shade_row(row, y, span, surface, shader, opacity)
        })
        .reduce(DrawStats::default, DrawStats::merge);

    log::trace!(
        "border draw: surface {}x{} at ({}, {}), {} shaded, {} covered",
        surface.size.x,
        surface.size.y,
        surface.origin.x,
        surface.origin.y,
        stats.shaded,
        stats.covered
    );
    Ok(stats)
}

/// Renders a standalone `width x height` surface with its border only.
pub fn render_border(width: u32, height: u32, shader: &BorderShader) -> Result<PixelBuffer, DrawError> {
    let mut target = PixelBuffer::new(width, height);
    let surface = Rect::new(0.0, 0.0, width as f32, height as f32);
    draw_surface_border(&mut target, surface, shader, 1.0)?;
    Ok(target)
}

fn shade_row(
    row: &mut [Color],
    y: u32,
    span: PixelSpan,
    surface: Rect,
    shader: &BorderShader,
    opacity: f32,
) -> DrawStats {
    let mut stats = DrawStats::default();
    let py = y as f32 + 0.5;

    for x in span.x0..span.x1 {
        let local = Vec2::new(x as f32 + 0.5, py) - surface.origin;
        let geometry = SurfaceGeometry::at_pixel(surface.size, local);
        let src = shader.shade(geometry).clamped().scaled(opacity);

        let dst = &mut row[x as usize];
        *dst = src.over(*dst);

        stats.shaded += 1;
        if src.a > 0.0 {
            stats.covered += 1;
        }
    }

    stats
}
