//! Coordinate and geometry types shared by the border kernel and the rasterizer.
//!
//! Pixel space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! Normalized (UV) space maps a surface onto [0, 1] x [0, 1] regardless of
//! its pixel resolution.

mod rect;
mod vec2;

pub use rect::{PixelSpan, Rect};
pub use vec2::Vec2;
