use crate::core::chaos_game::description::ChaosGameDescription;
use crate::core::chaos_game::ports::point_sink::PointSink;
use crate::core::data::matrix2x2::Matrix2x2;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::vector2d::Vector2D;
use crate::core::transforms::affine::AffineTransform2D;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CanvasError {
    PixelRect(PixelRectError),
    InvalidBounds { min: Vector2D, max: Vector2D },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid canvas size: {}", err),
            Self::InvalidBounds { min, max } => {
                write!(
                    f,
                    "canvas min coords ({}) must be strictly below max coords ({})",
                    min, max
                )
            }
        }
    }
}

impl Error for CanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::InvalidBounds { .. } => None,
        }
    }
}

impl From<PixelRectError> for CanvasError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

/// Counts how many chaos-game points landed on each pixel.
///
/// `min_coords` maps to the bottom-left pixel and `max_coords` to the top-right one, so
/// the image comes out with `x1` growing upwards. Points outside the window are dropped.
#[derive(Debug, Clone)]
pub struct ChaosCanvas {
    pixel_rect: PixelRect,
    min_coords: Vector2D,
    max_coords: Vector2D,
    coords_to_indices: AffineTransform2D,
    hits: Vec<u32>,
}

impl ChaosCanvas {
    pub fn new(
        width: u32,
        height: u32,
        min_coords: Vector2D,
        max_coords: Vector2D,
    ) -> Result<Self, CanvasError> {
        if !(min_coords.x0() < max_coords.x0() && min_coords.x1() < max_coords.x1()) {
            return Err(CanvasError::InvalidBounds {
                min: min_coords,
                max: max_coords,
            });
        }

        let pixel_rect = PixelRect::with_size(width, height)?;

        Ok(Self {
            pixel_rect,
            min_coords,
            max_coords,
            coords_to_indices: coords_to_indices(pixel_rect, min_coords, max_coords),
            hits: vec![0; pixel_rect.size() as usize],
        })
    }

    pub fn for_description(
        description: &ChaosGameDescription,
        width: u32,
        height: u32,
    ) -> Result<Self, CanvasError> {
        Self::new(
            width,
            height,
            description.min_coords(),
            description.max_coords(),
        )
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn min_coords(&self) -> Vector2D {
        self.min_coords
    }

    #[must_use]
    pub fn max_coords(&self) -> Vector2D {
        self.max_coords
    }

    /// Pixel a world point falls on, if it is inside the window.
    #[must_use]
    pub fn pixel_for(&self, point: Vector2D) -> Option<Point> {
        let indices = self.coords_to_indices.transform(point);
        let row = indices.x0().round();
        let column = indices.x1().round();

        // NaN compares false and is rejected along with out-of-range values
        let in_range = row >= 0.0
            && column >= 0.0
            && row < f64::from(self.pixel_rect.height())
            && column < f64::from(self.pixel_rect.width());

        in_range.then(|| Point {
            x: column as i32,
            y: row as i32,
        })
    }

    #[must_use]
    pub fn hits(&self, pixel: Point) -> Option<u32> {
        self.pixel_rect.index_of(pixel).map(|i| self.hits[i])
    }

    #[must_use]
    pub fn hit_data(&self) -> &[u32] {
        &self.hits
    }

    #[must_use]
    pub fn max_hits(&self) -> u32 {
        self.hits.iter().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total_hits(&self) -> u64 {
        self.hits.iter().map(|&h| u64::from(h)).sum()
    }

    pub fn clear(&mut self) {
        self.hits.fill(0);
    }
}

impl PointSink for ChaosCanvas {
    fn plot(&mut self, point: Vector2D) -> bool {
        let Some(index) = self
            .pixel_for(point)
            .and_then(|pixel| self.pixel_rect.index_of(pixel))
        else {
            return false;
        };

        self.hits[index] = self.hits[index].saturating_add(1);
        true
    }
}

/// Maps world coordinates to `(row, column)`: `x1` picks the row, flipped so that larger
/// values are nearer the top, and `x0` picks the column.
fn coords_to_indices(pixel_rect: PixelRect, min: Vector2D, max: Vector2D) -> AffineTransform2D {
    let last_row = f64::from(pixel_rect.height() - 1);
    let last_column = f64::from(pixel_rect.width() - 1);

    let row_scale = last_row / (min.x1() - max.x1());
    let column_scale = last_column / (max.x0() - min.x0());

    AffineTransform2D::new(
        Matrix2x2::new(0.0, row_scale, column_scale, 0.0),
        Vector2D::new(
            last_row * max.x1() / (max.x1() - min.x1()),
            last_column * min.x0() / (min.x0() - max.x0()),
        ),
    )
}
