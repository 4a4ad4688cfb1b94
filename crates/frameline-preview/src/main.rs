//! Frameline preview
//!
//! Draws the configured active and inactive borders around two mock windows
//! and writes the result to a PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use frameline_engine::config::{Config, FocusState, default_config_path};
use frameline_engine::coords::Rect;
use frameline_engine::logging::{LoggingConfig, init_logging};
use frameline_engine::raster::{AlphaMode, PixelBuffer, draw_surface_border};

const MARGIN: u32 = 24;
const MAX_WINDOW_SIDE: u32 = 16_384;
const MAX_CANVAS_PIXELS: u64 = 64 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "frameline-preview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render the configured window borders to a PNG", long_about = None)]
struct Args {
    /// Border config (defaults to $XDG_CONFIG_HOME/frameline/config.toml)
    config: Option<PathBuf>,

    /// Output image
    #[arg(default_value = "frameline-preview.png")]
    output: PathBuf,

    /// Size of each mock window, WIDTHxHEIGHT
    #[arg(default_value = "320x200", value_parser = parse_size)]
    size: WindowSize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct WindowSize {
    width: u32,
    height: u32,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = Args::parse();

    let config = match args.config.clone().or_else(default_config_path) {
        Some(path) => Config::load_or_create(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            log::warn!("no config path available, using defaults");
            Config::default()
        }
    };

    let canvas = render_preview(&config, args.size)?;
    save_png(&canvas, &args.output)?;

    println!(
        "wrote {}x{} preview to {}",
        canvas.width(),
        canvas.height(),
        args.output.display()
    );
    Ok(())
}

/// Active window on the left, inactive on the right.
///
/// Each window sits `gap + thickness` inside its slot and its border is drawn
/// on the window rectangle grown by `thickness`, around the content.
fn render_preview(config: &Config, size: WindowSize) -> Result<PixelBuffer> {
    config.border.validate()?;

    // Saturates for absurd offsets; the checked arithmetic below rejects those.
    let pad = config.border.outer_offset().ceil() as u32;
    let too_large = || {
        anyhow!(
            "{}x{} windows with a {pad}px border offset do not fit a canvas",
            size.width,
            size.height
        )
    };

    let slot_width = pad
        .checked_mul(2)
        .and_then(|p| p.checked_add(size.width))
        .ok_or_else(too_large)?;
    let slot_height = pad
        .checked_mul(2)
        .and_then(|p| p.checked_add(size.height))
        .ok_or_else(too_large)?;
    let width = slot_width
        .checked_mul(2)
        .and_then(|w| w.checked_add(MARGIN * 3))
        .ok_or_else(too_large)?;
    let height = slot_height.checked_add(MARGIN * 2).ok_or_else(too_large)?;

    let pixels = width as u64 * height as u64;
    if pixels > MAX_CANVAS_PIXELS {
        bail!("{width}x{height} preview exceeds the {MAX_CANVAS_PIXELS} pixel limit");
    }
    let mut canvas = PixelBuffer::new(width, height);

    let windows = [
        (FocusState::Active, MARGIN),
        (FocusState::Inactive, MARGIN * 2 + slot_width),
    ];

    for (focus, slot_x) in windows {
        let shader = config
            .border
            .shader(focus)
            .with_context(|| format!("resolving {focus:?} border"))?;
        let window = Rect::new(
            (slot_x + pad) as f32,
            (MARGIN + pad) as f32,
            size.width as f32,
            size.height as f32,
        );
        let surface = window.outset(config.border.thickness);
        let stats = draw_surface_border(&mut canvas, surface, &shader, 1.0)
            .with_context(|| format!("drawing {focus:?} border"))?;
        log::info!("{focus:?} border: {} pixels covered", stats.covered);
    }

    Ok(canvas)
}

fn save_png(canvas: &PixelBuffer, path: &Path) -> Result<()> {
    let bytes = canvas.to_rgba8_bytes(AlphaMode::Straight);
    let image = image::RgbaImage::from_raw(canvas.width(), canvas.height(), bytes)
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", canvas.width(), canvas.height()))?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn parse_size(s: &str) -> Result<WindowSize, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("size must look like WIDTHxHEIGHT, got `{s}`"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("invalid width `{w}`: {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("invalid height `{h}`: {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("window size must be non-zero, got {width}x{height}"));
    }
    if width > MAX_WINDOW_SIDE || height > MAX_WINDOW_SIDE {
        return Err(format!(
            "window sides are limited to {MAX_WINDOW_SIDE}px, got {width}x{height}"
        ));
    }
    Ok(WindowSize { width, height })
}
