//! CPU compositor stand-in that drives the border kernel.
//!
//! Responsibilities:
//! - reject malformed draw parameters before any pixel is shaded
//! - map pixel centers of a placed surface to normalized coordinates
//! - evaluate the kernel row-parallel and blend (premultiplied, source-over)
//!
//! Convention: targets store premultiplied linear colors, top-left origin.

mod buffer;
mod draw;

pub use buffer::{AlphaMode, PixelBuffer, Rgba8};
pub use draw::{draw_surface_border, render_border, validate, DrawError, DrawStats};
