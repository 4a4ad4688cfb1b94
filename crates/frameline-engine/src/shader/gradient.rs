use crate::coords::Vec2;
use crate::paint::{Color, GradientAnchor, Rgb};

use super::builtins::{mix_rgb, smoothstep};
use super::SurfaceGeometry;

/// Style for the anti-aliased gradient border.
///
/// `half_thickness` is what the kernel actually reads; `thickness` is carried
/// so hosts can validate the pair. [`BorderStyle::new`] keeps them consistent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderStyle {
    pub thickness: f32,
    pub half_thickness: f32,
    pub start_color: Rgb,
    pub end_color: Rgb,
    pub gradient_direction: Vec2,
    pub anchor: GradientAnchor,
}

impl BorderStyle {
    pub fn new(thickness: f32, start_color: Rgb, end_color: Rgb, gradient_direction: Vec2) -> Self {
        Self {
            thickness,
            half_thickness: thickness * 0.5,
            start_color,
            end_color,
            gradient_direction,
            anchor: GradientAnchor::default(),
        }
    }

    /// Single-color border (both gradient ends equal).
    pub fn solid(thickness: f32, color: Rgb) -> Self {
        Self::new(thickness, color, color, Vec2::new(1.0, 0.0))
    }

    #[inline]
    pub fn with_anchor(mut self, anchor: GradientAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Same gradient field drawn from the other end.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start_color: self.end_color,
            end_color: self.start_color,
            gradient_direction: -self.gradient_direction,
            ..self
        }
    }
}

/// Signed max-norm distance from the inner edge of the border band.
///
/// Positive past the inner edge (into the band or beyond the surface),
/// negative inside the unbordered interior. Taking the max of the two axis
/// distances yields square corners.
#[inline]
pub fn edge_distance(geometry: SurfaceGeometry, half_thickness: f32) -> f32 {
    let size = geometry.size;
    // Pixel-space center, shifted half a pixel so the math lines up with pixel centers.
    let center = size * 0.5 - Vec2::splat(0.5);
    let location = geometry.location();
    let inner_half_extent = size * 0.5 - Vec2::splat(half_thickness);

    ((location - center).abs() - inner_half_extent).max_element()
}

/// Coverage of the border band: 1 inside it, 0 away from it, with a
/// one-pixel smoothstep ramp where `|distance| == half_thickness`.
#[inline]
pub fn border_alpha(geometry: SurfaceGeometry, half_thickness: f32) -> f32 {
    let distance = edge_distance(geometry, half_thickness);
    1.0 - smoothstep(0.0, 1.0, distance.abs() - half_thickness)
}

/// Gradient parameter before the smoothstep remap.
#[inline]
pub fn gradient_param(coordinate: Vec2, style: &BorderStyle) -> f32 {
    style.anchor.project(coordinate, style.gradient_direction)
}

/// Straight gradient color at `coordinate`.
#[inline]
pub fn gradient_color(coordinate: Vec2, style: &BorderStyle) -> Rgb {
    let t = smoothstep(0.0, 1.0, gradient_param(coordinate, style));
    mix_rgb(style.start_color, style.end_color, t)
}

/// Premultiplied border color for one pixel.
pub fn shade(geometry: SurfaceGeometry, style: &BorderStyle) -> Color {
    let alpha = border_alpha(geometry, style.half_thickness);
    // mix(transparent, (rgb, alpha), alpha) == (rgb * alpha, alpha) for a transparent base.
    Color::premultiplied(gradient_color(geometry.coordinate, style), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn at_pixel(size: Vec2, x: f32, y: f32) -> SurfaceGeometry {
        SurfaceGeometry::at_pixel(size, Vec2::new(x, y))
    }

    /// Pixel-center geometries covering a `w x h` surface.
    fn pixel_centers(w: u32, h: u32) -> impl Iterator<Item = SurfaceGeometry> {
        let size = Vec2::new(w as f32, h as f32);
        (0..h).flat_map(move |y| {
            (0..w).map(move |x| at_pixel(size, x as f32 + 0.5, y as f32 + 0.5))
        })
    }

    fn red_to_blue() -> BorderStyle {
        BorderStyle::new(10.0, Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0), Vec2::new(1.0, 0.0))
    }

    // ── distance / alpha ──────────────────────────────────────────────────

    #[test]
    fn surface_center_is_deep_interior() {
        let g = at_pixel(Vec2::new(100.0, 100.0), 50.0, 50.0);
        assert!((edge_distance(g, 5.0) - -44.5).abs() < EPS);
        assert_eq!(border_alpha(g, 5.0), 0.0);
    }

    #[test]
    fn left_edge_midpoint_is_inside_band() {
        let g = at_pixel(Vec2::new(100.0, 100.0), 0.0, 50.0);
        assert!((edge_distance(g, 5.0) - 4.5).abs() < EPS);
        assert!((border_alpha(g, 5.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn band_core_is_opaque_and_interior_is_clear() {
        let half = 6.0;
        for g in pixel_centers(100, 60) {
            let d = edge_distance(g, half);
            let a = border_alpha(g, half);
            if d.abs() < half - 1.0 {
                assert_eq!(a, 1.0, "band pixel {:?}", g.location());
            }
            if d < -(half + 1.0) {
                assert_eq!(a, 0.0, "interior pixel {:?}", g.location());
            }
        }
    }

    #[test]
    fn transition_is_one_pixel_wide() {
        let size = Vec2::new(100.0, 100.0);
        // The inner ramp of a 5px half band spans d in [-6, -5], i.e. x in [9.5, 10.5].
        let mid = border_alpha(at_pixel(size, 10.0, 50.0), 5.0);
        assert!((mid - 0.5).abs() < EPS);
        assert_eq!(border_alpha(at_pixel(size, 9.0, 50.0), 5.0), 1.0);
        assert_eq!(border_alpha(at_pixel(size, 11.0, 50.0), 5.0), 0.0);
    }

    #[test]
    fn half_thickness_covering_surface_fills_everything() {
        for g in pixel_centers(100, 100) {
            assert_eq!(border_alpha(g, 50.0), 1.0, "{:?}", g.location());
        }
    }

    #[test]
    fn zero_half_thickness_is_thin_outline() {
        let size = Vec2::new(100.0, 100.0);
        assert!((border_alpha(at_pixel(size, 99.5, 50.0), 0.0) - 1.0).abs() < EPS);
        assert!((border_alpha(at_pixel(size, 0.0, 50.0), 0.0) - 0.5).abs() < EPS);
        assert_eq!(border_alpha(at_pixel(size, 50.0, 50.0), 0.0), 0.0);
        assert_eq!(border_alpha(at_pixel(size, 2.5, 50.0), 0.0), 0.0);
    }

    #[test]
    fn corners_are_square() {
        let size = Vec2::new(100.0, 100.0);
        // A rounded footprint would fade these diagonal pixels out.
        assert_eq!(border_alpha(at_pixel(size, 0.5, 0.5), 5.0), 1.0);
        assert_eq!(border_alpha(at_pixel(size, 9.0, 9.0), 5.0), 1.0);
        assert_eq!(border_alpha(at_pixel(size, 99.0, 0.5), 5.0), 1.0);
    }

    // ── gradient ──────────────────────────────────────────────────────────

    #[test]
    fn gradient_is_smoothstep_remapped() {
        let style = red_to_blue();
        let c = gradient_color(Vec2::new(0.25, 0.5), &style);
        let t = 0.15625; // smoothstep(0, 1, 0.25)
        assert!((c.r - (1.0 - t)).abs() < EPS);
        assert!((c.b - t).abs() < EPS);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn gradient_endpoints() {
        let style = red_to_blue();
        assert_eq!(gradient_color(Vec2::new(0.0, 0.3), &style), style.start_color);
        assert_eq!(gradient_color(Vec2::new(1.0, 0.3), &style), style.end_color);
    }

    #[test]
    fn origin_anchor_uses_plain_dot() {
        let style = BorderStyle::new(4.0, Rgb::black(), Rgb::white(), Vec2::new(0.6, 0.8))
            .with_anchor(GradientAnchor::Origin);
        let uv = Vec2::new(0.5, 0.25);
        assert!((gradient_param(uv, &style) - 0.5).abs() < EPS);
    }

    #[test]
    fn reversed_style_reproduces_gradient_field() {
        let dirs = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(0.6, 0.8), Vec2::new(-0.8, 0.6)];
        for dir in dirs {
            let style = BorderStyle::new(4.0, Rgb::new(0.9, 0.2, 0.1), Rgb::new(0.1, 0.4, 1.0), dir);
            let flipped = style.reversed();
            for g in pixel_centers(16, 9) {
                let a = gradient_color(g.coordinate, &style);
                let b = gradient_color(g.coordinate, &flipped);
                assert!((a.r - b.r).abs() < EPS, "{dir:?} {:?}", g.coordinate);
                assert!((a.g - b.g).abs() < EPS, "{dir:?} {:?}", g.coordinate);
                assert!((a.b - b.b).abs() < EPS, "{dir:?} {:?}", g.coordinate);
            }
        }
    }

    // ── shade ─────────────────────────────────────────────────────────────

    #[test]
    fn shade_is_premultiplied() {
        let style = red_to_blue();
        let size = Vec2::new(100.0, 100.0);
        for g in pixel_centers(100, 100).step_by(37) {
            let c = shade(g, &style);
            let rgb = gradient_color(g.coordinate, &style);
            let a = border_alpha(g, style.half_thickness);
            assert_eq!(c.a, a);
            assert_eq!(c.r, rgb.r * a);
            assert_eq!(c.b, rgb.b * a);
        }
        let interior = shade(at_pixel(size, 50.0, 50.0), &style);
        assert_eq!(interior, Color::transparent());
    }

    #[test]
    fn transition_pixel_alpha_is_coverage_not_squared() {
        let style = red_to_blue();
        let g = at_pixel(Vec2::new(100.0, 100.0), 10.0, 50.0);
        let c = shade(g, &style);
        let rgb = gradient_color(g.coordinate, &style);
        assert!((c.a - 0.5).abs() < EPS);
        assert!((c.r - rgb.r * 0.5).abs() < EPS);
        assert!((c.b - rgb.b * 0.5).abs() < EPS);
    }

    #[test]
    fn shade_is_bit_identical_across_calls() {
        let style = red_to_blue();
        for g in pixel_centers(40, 30) {
            let a = shade(g, &style);
            let b = shade(g, &style);
            assert_eq!(a.r.to_bits(), b.r.to_bits());
            assert_eq!(a.g.to_bits(), b.g.to_bits());
            assert_eq!(a.b.to_bits(), b.b.to_bits());
            assert_eq!(a.a.to_bits(), b.a.to_bits());
        }
    }

    #[test]
    fn new_derives_half_thickness() {
        let style = BorderStyle::solid(7.0, Rgb::white());
        assert_eq!(style.half_thickness, 3.5);
        assert_eq!(style.start_color, style.end_color);
    }
}
