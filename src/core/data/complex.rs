use crate::core::data::vector2d::Vector2D;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A complex number `real + imag·i`.
///
/// Not a [`Vector2D`]: complex values only combine with, and compare to, other complex
/// values. Moving between the two goes through the `From` impls.
///
/// ```compile_fail
/// use chaos_game::{Complex, Vector2D};
///
/// let _ = Complex::new(1.0, 1.0) == Vector2D::new(1.0, 1.0);
/// ```
///
/// ```compile_fail
/// use chaos_game::{Complex, Vector2D};
///
/// let _ = Complex::new(1.0, 1.0) + Vector2D::new(1.0, 1.0);
/// ```
///
/// ```compile_fail
/// use chaos_game::{Complex, Vector2D};
///
/// let _ = Vector2D::new(1.0, 1.0) - Complex::new(1.0, 1.0);
/// ```
///
/// ```
/// use chaos_game::{Complex, Vector2D};
///
/// let z = Complex::from(Vector2D::new(1.0, 1.0));
/// assert_eq!(z, Complex::new(1.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn real(&self) -> f64 {
        self.real
    }

    #[must_use]
    pub fn imaginary(&self) -> f64 {
        self.imag
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Principal square root (non-negative real part).
    ///
    /// Uses `sqrt((|z| + re) / 2)` and `sqrt((|z| - re) / 2)` for the two parts, which stays
    /// accurate near the negative real axis. A zero imaginary part takes the positive branch.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let r = self.magnitude();
        let real = ((r + self.real) / 2.0).sqrt();
        let imag = ((r - self.real) / 2.0).sqrt();
        let sign = if self.imag >= 0.0 { 1.0 } else { -1.0 };

        Self {
            real,
            imag: imag * sign,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            real: self.real * scalar,
            imag: self.imag * scalar,
        }
    }
}

impl From<Vector2D> for Complex {
    fn from(v: Vector2D) -> Self {
        Self {
            real: v.x0(),
            imag: v.x1(),
        }
    }
}

impl From<Complex> for Vector2D {
    fn from(c: Complex) -> Self {
        Vector2D::new(c.real, c.imag)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.real, self.imag)
    }
}
