use super::Rgb;

/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a`.
///
/// This is what the border kernel emits and what the rasterizer stores, so
/// compositing is a plain source-over with `(One, OneMinusSrcAlpha)` factors.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a color from already premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplies a straight `rgb` by `alpha`.
    ///
    /// Neither input is clamped: the flat border variant relies on alpha
    /// values above 1 surviving until compositing.
    #[inline]
    pub fn premultiplied(rgb: Rgb, alpha: f32) -> Self {
        Self { r: rgb.r * alpha, g: rgb.g * alpha, b: rgb.b * alpha, a: alpha }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Scales every channel, i.e. applies an opacity to a premultiplied color.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Source-over: `self + dst * (1 - self.a)`.
    #[inline]
    pub fn over(self, dst: Color) -> Self {
        let k = 1.0 - self.a;
        Self {
            r: self.r + dst.r * k,
            g: self.g + dst.g * k,
            b: self.b + dst.b * k,
            a: self.a + dst.a * k,
        }
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    ///
    /// Matches what a fixed-point render target does with out-of-range output.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Clamp premultiplied rgb so it cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplied_scales_rgb() {
        let c = Color::premultiplied(Rgb::new(1.0, 0.5, 0.0), 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn premultiplied_keeps_alpha_above_one() {
        let c = Color::premultiplied(Rgb::new(0.5, 0.5, 0.5), 2.0);
        assert_eq!(c.a, 2.0);
        assert_eq!(c.r, 1.0);
    }

    #[test]
    fn to_straight_of_transparent_is_zero() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
        let (r, g, b, a) = Color::from_premul(0.25, 0.5, 0.0, 0.5).to_straight();
        assert_eq!((r, g, b, a), (0.5, 1.0, 0.0, 0.5));
    }

    #[test]
    fn over_opaque_source_replaces_destination() {
        let src = Color::from_premul(1.0, 0.0, 0.0, 1.0);
        let dst = Color::from_premul(0.0, 0.0, 1.0, 1.0);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        let dst = Color::from_premul(0.2, 0.3, 0.4, 0.5);
        assert_eq!(Color::transparent().over(dst), dst);
    }

    #[test]
    fn clamped_caps_alpha_and_rgb() {
        let c = Color::from_premul(2.0, 0.4, -1.0, 2.0).clamped();
        assert_eq!(c, Color::from_premul(1.0, 0.4, 0.0, 1.0));
    }
}
