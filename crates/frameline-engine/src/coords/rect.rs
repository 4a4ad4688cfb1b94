use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
///
/// The rasterizer uses it to place a surface inside a larger target.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Integer pixel range `[x0, x1) x [y0, y1)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelSpan {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Grows the rectangle by `amount` on every side.
    ///
    /// A window border of thickness `t` is drawn on `window.outset(t)`, so the
    /// band surrounds the window content instead of covering it.
    #[inline]
    pub fn outset(self, amount: f32) -> Rect {
        Rect {
            origin: self.origin - Vec2::splat(amount),
            size: self.size + Vec2::splat(amount * 2.0),
        }
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = self.max().x.min(other.max().x);
        let y1 = self.max().y.min(other.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Pixels of a `width x height` target whose centers fall inside `self`.
    ///
    /// Returns `None` when no pixel center is covered.
    pub fn covered_pixels(self, width: u32, height: u32) -> Option<PixelSpan> {
        let target = Rect::new(0.0, 0.0, width as f32, height as f32);
        let clip = self.intersect(target)?;
        let max = clip.max();

        // Pixel i is covered when origin <= i + 0.5 < max.
        let x0 = (clip.origin.x - 0.5).ceil().max(0.0) as u32;
        let y0 = (clip.origin.y - 0.5).ceil().max(0.0) as u32;
        let x1 = ((max.x - 0.5).ceil().max(0.0) as u32).min(width);
        let y1 = ((max.y - 0.5).ceil().max(0.0) as u32).min(height);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(PixelSpan { x0, y0, x1, y1 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── outset ────────────────────────────────────────────────────────────

    #[test]
    fn outset_grows_every_side() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).outset(2.0), r(8.0, 18.0, 104.0, 54.0));
    }

    #[test]
    fn outset_zero_is_identity() {
        let rect = r(3.0, 4.0, 5.0, 6.0);
        assert_eq!(rect.outset(0.0), rect);
    }

    #[test]
    fn outset_keeps_the_center() {
        let rect = r(0.0, 0.0, 40.0, 30.0);
        let grown = rect.outset(7.5);
        assert_eq!(grown.origin + grown.size * 0.5, rect.origin + rect.size * 0.5);
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    // ── covered_pixels ────────────────────────────────────────────────────

    #[test]
    fn covered_pixels_aligned_rect() {
        let span = r(2.0, 3.0, 4.0, 5.0).covered_pixels(100, 100).unwrap();
        assert_eq!(span, PixelSpan { x0: 2, y0: 3, x1: 6, y1: 8 });
    }

    #[test]
    fn covered_pixels_clipped_to_target() {
        let span = r(-5.0, -5.0, 10.0, 10.0).covered_pixels(3, 3).unwrap();
        assert_eq!(span, PixelSpan { x0: 0, y0: 0, x1: 3, y1: 3 });
    }

    #[test]
    fn covered_pixels_uses_pixel_centers() {
        // [0.6, 1.4) holds no pixel center (0.5 and 1.5 both fall outside).
        assert!(r(0.6, 0.0, 0.8, 4.0).covered_pixels(4, 4).is_none());
        // [0.4, 1.6) holds centers 0.5 and 1.5.
        let span = r(0.4, 0.0, 1.2, 4.0).covered_pixels(4, 4).unwrap();
        assert_eq!((span.x0, span.x1), (0, 2));
    }

    #[test]
    fn covered_pixels_outside_target() {
        assert!(r(50.0, 50.0, 10.0, 10.0).covered_pixels(10, 10).is_none());
    }
}
