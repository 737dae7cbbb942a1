/*!
Typed pixel buffer.

Image encoders want a flat `&[u8]`, but writing bytes by hand invites
off-by-one channel bugs. The buffer stores [`Rgb`] values and hands out the
byte view through [`bytemuck`], so the layout is always `width * height * 3`
bytes, row-major, rows top to bottom, each pixel as R, G, B.
*/

use crate::{pixel::Rgb, screen};

/// Colour channels per pixel.
pub const CHANNELS: usize = 3;

#[derive(Debug)]
pub struct PixelBuffer {
    size: screen::Size,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// A black buffer covering `size`.
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb::BLACK; size.pixel_count()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    /// Byte offset of pixel `(x, y)` in [`PixelBuffer::as_bytes`].
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * CHANNELS
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.size.width as usize * CHANNELS
    }

    pub fn len_bytes(&self) -> usize {
        self.pixels.len() * CHANNELS
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.size.width as usize + x as usize]
    }

    /// Pixels in row-major order. Chunk by `width` to hand disjoint rows to workers.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
