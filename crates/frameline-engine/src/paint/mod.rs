//! Paint model shared between the border kernel and the rasterizer.
//!
//! Scope:
//! - straight RGB inputs (`Rgb`, hex parsing)
//! - premultiplied RGBA output (`Color`)
//! - gradient axis projection
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod rgb;

pub use color::Color;
pub use gradient::{direction_from_degrees, GradientAnchor};
pub use rgb::{ColorParseError, Rgb};
