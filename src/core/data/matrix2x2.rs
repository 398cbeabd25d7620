use crate::core::data::vector2d::Vector2D;
use std::fmt;
use std::ops::Mul;

/// Row-major 2x2 matrix `[[a00, a01], [a10, a11]]`.
///
/// Equality is exact; no tolerance is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix2x2 {
    a00: f64,
    a01: f64,
    a10: f64,
    a11: f64,
}

impl Matrix2x2 {
    #[must_use]
    pub const fn new(a00: f64, a01: f64, a10: f64, a11: f64) -> Self {
        Self { a00, a01, a10, a11 }
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub fn a00(&self) -> f64 {
        self.a00
    }

    #[must_use]
    pub fn a01(&self) -> f64 {
        self.a01
    }

    #[must_use]
    pub fn a10(&self) -> f64 {
        self.a10
    }

    #[must_use]
    pub fn a11(&self) -> f64 {
        self.a11
    }

    #[must_use]
    pub fn multiply(&self, v: Vector2D) -> Vector2D {
        Vector2D::new(
            self.a00 * v.x0() + self.a01 * v.x1(),
            self.a10 * v.x0() + self.a11 * v.x1(),
        )
    }
}

impl Mul<Vector2D> for Matrix2x2 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        self.multiply(v)
    }
}

impl fmt::Display for Matrix2x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.a00, self.a01, self.a10, self.a11)
    }
}
