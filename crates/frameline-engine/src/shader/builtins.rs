//! Scalar helpers with GPU shading-language semantics.

use crate::coords::Vec2;
use crate::paint::Rgb;

/// `min(max(x, lo), hi)`. A NaN `x` comes out as `lo`.
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// `0.0` when `x < edge`, `1.0` otherwise.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Cubic Hermite ramp from 0 at `edge0` to 1 at `edge1`.
///
/// Equal edges collapse to `step(edge0, x)` instead of dividing by zero.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return step(edge0, x);
    }
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation `a * (1 - t) + b * t`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Channel-wise [`mix`].
#[inline]
pub fn mix_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb::new(mix(a.r, b.r, t), mix(a.g, b.g, t), mix(a.b, b.b, t))
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}
