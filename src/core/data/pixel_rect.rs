use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "pixel rect must be at least 2x2 and fit in i32 coordinates: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive pixel rectangle, at least two pixels wide and tall.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        let max_span = i64::from(i32::MAX);

        if width < 2 || height < 2 || width > max_span || height > max_span {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A `width` x `height` rect anchored at the origin.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let invalid = PixelRectError::InvalidSize {
            width: i64::from(width),
            height: i64::from(height),
        };

        let right = i32::try_from(width).map_err(|_| invalid)? - 1;
        let bottom = i32::try_from(height).map_err(|_| invalid)? - 1;

        Self::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom })
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Row-major offset of `point` from the top-left corner.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let column = (point.x - self.top_left.x) as usize;
        let row = (point.y - self.top_left.y) as usize;

        Some(row * self.width() as usize + column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 100, y: 100 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_with_size() {
        let rect = PixelRect::with_size(800, 600).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 799, y: 599 });
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
    }

    #[test]
    fn test_pixel_rect_with_size_rejects_tiny_and_huge() {
        assert_eq!(
            PixelRect::with_size(1, 10),
            Err(PixelRectError::InvalidSize { width: 1, height: 10 })
        );
        assert_eq!(
            PixelRect::with_size(0, 0),
            Err(PixelRectError::InvalidSize { width: 0, height: 0 })
        );
        assert_eq!(
            PixelRect::with_size(u32::MAX, 10),
            Err(PixelRectError::InvalidSize {
                width: i64::from(u32::MAX),
                height: 10
            })
        );
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        let single_pixel = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 0, y: 0 });
        let inverted = PixelRect::new(Point { x: 2, y: 2 }, Point { x: -2, y: -2 });
        let two_pixels_square = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 });

        assert_eq!(single_pixel, Err(PixelRectError::InvalidSize { width: 1, height: 1 }));
        assert_eq!(inverted, Err(PixelRectError::InvalidSize { width: -3, height: -3 }));
        assert!(two_pixels_square.is_ok());
    }

    #[test]
    fn test_pixel_rect_rejects_spans_wider_than_i32() {
        let too_wide = PixelRect::new(Point { x: i32::MIN, y: 0 }, Point { x: i32::MAX, y: 1 });
        let too_tall = PixelRect::new(Point { x: 0, y: -1 }, Point { x: 1, y: i32::MAX });

        assert_eq!(
            too_wide,
            Err(PixelRectError::InvalidSize {
                width: 1 << 32,
                height: 2
            })
        );
        assert_eq!(
            too_tall,
            Err(PixelRectError::InvalidSize {
                width: 2,
                height: i64::from(i32::MAX) + 2
            })
        );
    }

    #[test]
    fn test_pixel_rect_widest_accepted_span() {
        let rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: i32::MAX - 1, y: 1 }).unwrap();

        assert_eq!(rect.width(), i32::MAX as u32);
        assert_eq!(rect.height(), 2);
        assert_eq!(rect.size(), 2 * i32::MAX as u64);
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
    }

    #[test]
    fn test_index_of() {
        let rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 12, y: 22 }).unwrap();

        assert_eq!(rect.index_of(Point { x: 10, y: 20 }), Some(0));
        assert_eq!(rect.index_of(Point { x: 11, y: 21 }), Some(4));
        assert_eq!(rect.index_of(Point { x: 12, y: 22 }), Some(8));
        assert_eq!(rect.index_of(Point { x: 13, y: 22 }), None);
    }
}
