//! Owned RGBA pixel buffer.

use image::RgbaImage;

use super::Colour;

/// A rectangular grid of RGBA pixels, stored row-major.
///
/// Each pipeline stage takes a raster and hands an owned raster to the
/// next stage; nothing is shared or cached across pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Raster {
    /// Create a raster filled with a single colour.
    pub fn new(width: u32, height: u32, fill: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width as usize) * (height as usize)],
        }
    }

    /// Create a raster from a row-major pixel buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Colour>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer does not match {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Colour {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y as usize) * (self.width as usize) + x as usize] = colour;
    }

    /// Iterate pixels in row-major order (top-to-bottom, left-to-right).
    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.pixels.iter().copied()
    }

    /// Convert to a flat RGBA byte buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }

    /// Build a raster from a decoded `image` buffer.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| Colour::new(p.0[0], p.0[1], p.0[2], p.0[3]))
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            pixels,
        }
    }

    /// Convert to an `image` buffer for encoding.
    ///
    /// Zero-dimension rasters have no image-buffer form; callers reject
    /// those before encoding.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.to_rgba_buffer())
    }
}
