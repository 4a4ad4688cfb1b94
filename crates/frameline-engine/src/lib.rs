//! Frameline engine crate.
//!
//! Per-pixel window border kernel plus the pieces a compositor needs around
//! it: a CPU rasterizer that drives the kernel, a config file format and
//! logging setup.

pub mod config;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod shader;
