//! The published output image.

use image::{Rgba, RgbaImage};

use crate::color::unpack_rgba;

/// Completed frame handed to presenters.
///
/// Holds `width * height` packed pixels in row-major order (`x + y * width`).
/// Only the renderer writes to it, once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl FinalImage {
    /// Create a new image filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Get the pixel at (x, y), or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(x as usize + y as usize * self.width as usize).copied()
    }

    /// Raw pixel bytes for upload to a texture.
    ///
    /// Bytes follow native endianness; on little-endian targets each pixel
    /// reads R, G, B, A.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Convert to an `image` buffer in the same row order.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let index = x as usize + y as usize * self.width as usize;
            Rgba(unpack_rgba(self.data[index]))
        })
    }

    /// Replace the contents with a finished frame.
    pub(crate) fn set_data(&mut self, data: &[u32]) {
        self.data.copy_from_slice(data);
    }
}
