use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes, row-major, covering a [`PixelRect`].
#[derive(Debug)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = pixel_rect_to_buffer_size(pixel_rect);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let offset = self.pixel_rect.index_of(pixel)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[offset],
            g: self.buffer[offset + 1],
            b: self.buffer[offset + 2],
        })
    }
}
