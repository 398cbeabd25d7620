use crate::core::data::complex::Complex;
use crate::core::data::vector2d::Vector2D;
use crate::core::transforms::errors::TransformError;
use std::fmt;

/// Selects which of the two pre-images `±sqrt(z - c)` a [`JuliaTransform`] produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JuliaSign {
    Positive,
    Negative,
}

impl JuliaSign {
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl TryFrom<i32> for JuliaSign {
    type Error = TransformError;

    fn try_from(sign: i32) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            _ => Err(TransformError::InvalidSign { sign }),
        }
    }
}

/// `p' = sign · sqrt(p - c)` over the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaTransform {
    point: Complex,
    sign: JuliaSign,
}

impl JuliaTransform {
    pub fn new(point: Complex, sign: i32) -> Result<Self, TransformError> {
        Ok(Self {
            point,
            sign: JuliaSign::try_from(sign)?,
        })
    }

    #[must_use]
    pub const fn with_sign(point: Complex, sign: JuliaSign) -> Self {
        Self { point, sign }
    }

    #[must_use]
    pub fn point(&self) -> Complex {
        self.point
    }

    #[must_use]
    pub fn sign(&self) -> i32 {
        self.sign.value()
    }

    /// The input is read as a complex number regardless of where it came from; only `c`
    /// is stored as [`Complex`].
    #[must_use]
    pub fn transform(&self, point: Vector2D) -> Vector2D {
        let z = Complex::from(point) - self.point;

        Vector2D::from(z.sqrt() * f64::from(self.sign.value()))
    }

    /// `"<real>, <imaginary>"`, without the sign.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.point.to_string()
    }
}

/// `"<real>, <imaginary>, <sign>"`
impl fmt::Display for JuliaTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.point, self.sign.value())
    }
}
