use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// 8-bit RGBA pixel, laid out for direct upload or image encoding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Alpha representation used when quantizing to 8 bits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlphaMode {
    /// Keep rgb multiplied by alpha (GPU blending, compositor surfaces).
    Premultiplied,
    /// Divide rgb by alpha (PNG and most image formats).
    Straight,
}

/// Row-major premultiplied color target.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Creates a transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::transparent(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Row-major pixel storage, `width` pixels per row.
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Quantizes every pixel to 8 bits per channel.
    pub fn to_rgba8(&self, mode: AlphaMode) -> Vec<Rgba8> {
        self.pixels.iter().map(|&c| quantize(c, mode)).collect()
    }

    /// Same as [`to_rgba8`](Self::to_rgba8), flattened to raw bytes.
    pub fn to_rgba8_bytes(&self, mode: AlphaMode) -> Vec<u8> {
        let pixels = self.to_rgba8(mode);
        bytemuck::cast_slice::<Rgba8, u8>(&pixels).to_vec()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn quantize(color: Color, mode: AlphaMode) -> Rgba8 {
    let c = color.clamped();
    let (r, g, b, a) = match mode {
        AlphaMode::Premultiplied => (c.r, c.g, c.b, c.a),
        AlphaMode::Straight => c.to_straight(),
    };
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba8 { r: q(r), g: q(g), b: q(b), a: q(a) }
}
