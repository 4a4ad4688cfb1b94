use serde::{Deserialize, Serialize};

use crate::coords::Vec2;

/// How a normalized coordinate is projected onto the gradient axis.
///
/// The resulting parameter is remapped with `smoothstep(0, 1, ·)` by the
/// border kernel, so only the [0, 1] part of the projection produces a ramp.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientAnchor {
    /// `dot(coordinate, direction)`, measured from the surface's top-left corner.
    Origin,
    /// `dot(coordinate - 0.5, direction) + 0.5`, measured from the surface center.
    ///
    /// Same as `Origin` for `(1, 0)` and `(0, 1)`. For other directions the
    /// ramp stays centered, so negating the direction mirrors the gradient.
    #[default]
    Centered,
}

impl GradientAnchor {
    /// Gradient parameter before remapping.
    #[inline]
    pub fn project(self, coordinate: Vec2, direction: Vec2) -> f32 {
        match self {
            GradientAnchor::Origin => coordinate.dot(direction),
            GradientAnchor::Centered => {
                (coordinate - Vec2::splat(0.5)).dot(direction) + 0.5
            }
        }
    }
}

/// Gradient axis for an angle in degrees (0 = left to right, 90 = top to bottom).
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}
