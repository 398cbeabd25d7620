use crate::core::data::matrix2x2::Matrix2x2;
use crate::core::data::vector2d::Vector2D;
use std::fmt;

/// `p' = M·p + t`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform2D {
    matrix: Matrix2x2,
    vector: Vector2D,
}

impl AffineTransform2D {
    #[must_use]
    pub const fn new(matrix: Matrix2x2, vector: Vector2D) -> Self {
        Self { matrix, vector }
    }

    #[must_use]
    pub fn matrix(&self) -> Matrix2x2 {
        self.matrix
    }

    #[must_use]
    pub fn vector(&self) -> Vector2D {
        self.vector
    }

    #[must_use]
    pub fn transform(&self, point: Vector2D) -> Vector2D {
        self.matrix * point + self.vector
    }
}

impl fmt::Display for AffineTransform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.matrix, self.vector)
    }
}
