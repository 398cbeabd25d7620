use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2D {
    x0: f64,
    x1: f64,
}

impl Vector2D {
    #[must_use]
    pub const fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }

    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x0: self.x0 + other.x0,
            x1: self.x1 + other.x1,
        }
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x0: self.x0 - other.x0,
            x1: self.x1 - other.x1,
        }
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x0: self.x0 * scalar,
            x1: self.x1 * scalar,
        }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x0, self.x1)
    }
}
