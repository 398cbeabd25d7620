use crate::core::data::vector2d::Vector2D;
use crate::core::transforms::affine::AffineTransform2D;
use crate::core::transforms::julia::JuliaTransform;
use std::fmt;

/// A point map the chaos game can apply without knowing which kind it is.
///
/// Equality never holds across variants. Copies own their parameters outright, so a
/// clone can never observe changes made through its source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform2D {
    Affine(AffineTransform2D),
    Julia(JuliaTransform),
}

impl Transform2D {
    #[must_use]
    pub fn transform(&self, point: Vector2D) -> Vector2D {
        match self {
            Self::Affine(affine) => affine.transform(point),
            Self::Julia(julia) => julia.transform(point),
        }
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Affine(_) => "Affine2D",
            Self::Julia(_) => "Julia",
        }
    }

    /// Parameter list without display-only fields, as read back by description writers.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        match self {
            Self::Affine(affine) => affine.to_string(),
            Self::Julia(julia) => julia.to_canonical_string(),
        }
    }
}

impl From<AffineTransform2D> for Transform2D {
    fn from(affine: AffineTransform2D) -> Self {
        Self::Affine(affine)
    }
}

impl From<JuliaTransform> for Transform2D {
    fn from(julia: JuliaTransform) -> Self {
        Self::Julia(julia)
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Affine(affine) => fmt::Display::fmt(affine, f),
            Self::Julia(julia) => fmt::Display::fmt(julia, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::matrix2x2::Matrix2x2;

    fn half_scale() -> Transform2D {
        AffineTransform2D::new(Matrix2x2::new(0.5, 0.0, 0.0, 0.5), Vector2D::new(0.0, 0.0)).into()
    }

    fn julia_at_origin() -> Transform2D {
        JuliaTransform::new(Complex::new(0.0, 0.0), 1).unwrap().into()
    }

    #[test]
    fn test_transform_dispatches_to_affine() {
        assert_eq!(half_scale().transform(Vector2D::new(2.0, 2.0)), Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_transform_dispatches_to_julia() {
        assert_eq!(
            julia_at_origin().transform(Vector2D::new(1.0, 0.0)),
            Vector2D::new(1.0, 0.0)
        );
    }

    #[test]
    fn test_heterogeneous_collection_applies_in_order() {
        let transforms = [half_scale(), julia_at_origin(), half_scale()];

        let result = transforms
            .iter()
            .fold(Vector2D::new(8.0, 0.0), |p, t| t.transform(p));

        // 8 -> 4 -> sqrt(4) = 2 -> 1
        assert_eq!(result, Vector2D::new(1.0, 0.0));
    }

    #[test]
    fn test_equality_is_reflexive_and_symmetric() {
        let a = half_scale();
        let b = half_scale();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn test_variants_are_never_equal() {
        let affine: Transform2D =
            AffineTransform2D::new(Matrix2x2::identity(), Vector2D::new(0.0, 0.0)).into();

        assert_ne!(affine, julia_at_origin());
        assert_ne!(julia_at_origin(), affine);
    }

    #[test]
    fn test_copy_equals_original() {
        let original = julia_at_origin();
        let copy = original;

        assert_eq!(copy, original);
    }

    #[test]
    fn test_copy_is_unaffected_by_constructor_inputs() {
        let mut matrix = Matrix2x2::new(0.5, 0.0, 0.0, 0.5);
        let mut vector = Vector2D::new(1.0, 0.0);
        let original: Transform2D = AffineTransform2D::new(matrix, vector).into();
        let copy = original;

        matrix = Matrix2x2::identity();
        vector = Vector2D::new(9.0, 9.0);
        let rebuilt: Transform2D = AffineTransform2D::new(matrix, vector).into();

        assert_eq!(copy, original);
        assert_ne!(copy, rebuilt);
        assert_eq!(copy.transform(Vector2D::new(2.0, 2.0)), Vector2D::new(2.0, 1.0));
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(half_scale().kind_name(), "Affine2D");
        assert_eq!(julia_at_origin().kind_name(), "Julia");
    }

    #[test]
    fn test_string_forms() {
        let julia: Transform2D = JuliaTransform::new(Complex::new(0.5, -0.25), -1).unwrap().into();

        assert_eq!(half_scale().to_string(), "0.5, 0, 0, 0.5, 0, 0");
        assert_eq!(half_scale().to_canonical_string(), "0.5, 0, 0, 0.5, 0, 0");
        assert_eq!(julia.to_string(), "0.5, -0.25, -1");
        assert_eq!(julia.to_canonical_string(), "0.5, -0.25");
    }
}
