use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours every cell of `input` (row-major over `pixel_rect`) in parallel using rayon.
///
/// Cells are independent of each other, unlike the chaos-game steps that filled them.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T = T> + Sync,
    CMap::Failure: Send,
{
    let colours: Vec<Colour> = input
        .par_iter()
        .map(|&value| mapper.map(value))
        .collect::<Result<_, _>>()
        .map_err(GeneratePixelBufferError::ColourMap)?;

    let buffer: PixelBufferData = colours
        .into_iter()
        .flat_map(|Colour { r, g, b }| [r, g, b])
        .collect();

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubGreyscale {}

    impl ColourMap for StubGreyscale {
        type T = u8;
        type Failure = StubError;

        fn map(&self, value: u8) -> Result<Colour, StubError> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Greyscale"
        }
    }

    #[derive(Debug)]
    struct StubFailure {}

    impl ColourMap for StubFailure {
        type T = u8;
        type Failure = StubError;

        fn map(&self, _: u8) -> Result<Colour, StubError> {
            Err(StubError {})
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_rgb_triplets_in_order() {
        let pixel_rect = PixelRect::with_size(2, 2).unwrap();

        let buffer = generate_pixel_buffer(&[1, 2, 3, 4], &StubGreyscale {}, pixel_rect).unwrap();

        assert_eq!(buffer.buffer(), &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour { r: 3, g: 3, b: 3 }));
    }

    #[test]
    fn test_large_input_keeps_order() {
        let pixel_rect = PixelRect::with_size(64, 64).unwrap();
        let input: Vec<u8> = (0..64 * 64).map(|i| (i % 251) as u8).collect();

        let buffer = generate_pixel_buffer(&input, &StubGreyscale {}, pixel_rect).unwrap();

        for (i, &value) in input.iter().enumerate() {
            assert_eq!(buffer.buffer()[i * 3], value);
        }
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let pixel_rect = PixelRect::with_size(2, 2).unwrap();

        let result = generate_pixel_buffer(&[1, 2, 3, 4], &StubFailure {}, pixel_rect);

        assert!(matches!(result, Err(GeneratePixelBufferError::ColourMap(StubError {}))));
    }

    #[test]
    fn test_input_size_must_match_rect() {
        let pixel_rect = PixelRect::with_size(2, 2).unwrap();

        let result = generate_pixel_buffer(&[1, 2, 3], &StubGreyscale {}, pixel_rect);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 12,
                    buffer_size: 9
                }
            ))
        ));
    }
}
