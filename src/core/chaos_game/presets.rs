use crate::core::chaos_game::description::{ChaosGameDescription, DescriptionError, WeightedTransform};
use crate::core::data::complex::Complex;
use crate::core::data::matrix2x2::Matrix2x2;
use crate::core::data::vector2d::Vector2D;
use crate::core::transforms::affine::AffineTransform2D;
use crate::core::transforms::julia::{JuliaSign, JuliaTransform};
use crate::core::transforms::transform2d::Transform2D;

pub const DEFAULT_JULIA_POINT: Complex = Complex::new(-0.74543, 0.11301);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetKinds {
    #[default]
    BarnsleyFern,
    SierpinskiTriangle,
    Julia,
}

impl PresetKinds {
    pub const ALL: &'static [Self] = &[Self::BarnsleyFern, Self::SierpinskiTriangle, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BarnsleyFern => "Barnsley Fern",
            Self::SierpinskiTriangle => "Sierpinski Triangle",
            Self::Julia => "Julia",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::BarnsleyFern => "fern",
            Self::SierpinskiTriangle => "sierpinski",
            Self::Julia => "julia",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(name))
    }

    pub fn description(self) -> Result<ChaosGameDescription, DescriptionError> {
        match self {
            Self::BarnsleyFern => barnsley_fern(),
            Self::SierpinskiTriangle => sierpinski_triangle(),
            Self::Julia => julia_set(DEFAULT_JULIA_POINT),
        }
    }
}

pub fn barnsley_fern() -> Result<ChaosGameDescription, DescriptionError> {
    let stem = AffineTransform2D::new(Matrix2x2::new(0.0, 0.0, 0.0, 0.16), Vector2D::new(0.0, 0.0));
    let leaflets = AffineTransform2D::new(
        Matrix2x2::new(0.85, 0.04, -0.04, 0.85),
        Vector2D::new(0.0, 1.6),
    );
    let left = AffineTransform2D::new(
        Matrix2x2::new(0.2, -0.26, 0.23, 0.22),
        Vector2D::new(0.0, 1.6),
    );
    let right = AffineTransform2D::new(
        Matrix2x2::new(-0.15, 0.28, 0.26, 0.24),
        Vector2D::new(0.0, 0.44),
    );

    ChaosGameDescription::new(
        vec![
            WeightedTransform::new(stem, 0.01),
            WeightedTransform::new(leaflets, 0.85),
            WeightedTransform::new(left, 0.07),
            WeightedTransform::new(right, 0.07),
        ],
        Vector2D::new(-2.65, 0.0),
        Vector2D::new(2.65, 10.0),
    )
}

pub fn sierpinski_triangle() -> Result<ChaosGameDescription, DescriptionError> {
    let half = Matrix2x2::new(0.5, 0.0, 0.0, 0.5);

    ChaosGameDescription::uniform(
        [
            Transform2D::from(AffineTransform2D::new(half, Vector2D::new(0.0, 0.0))),
            Transform2D::from(AffineTransform2D::new(half, Vector2D::new(0.5, 0.0))),
            Transform2D::from(AffineTransform2D::new(half, Vector2D::new(0.25, 0.5))),
        ],
        Vector2D::new(0.0, 0.0),
        Vector2D::new(1.0, 1.0),
    )
}

/// Both branches of `z -> ±sqrt(z - c)`, picked with equal probability.
pub fn julia_set(c: Complex) -> Result<ChaosGameDescription, DescriptionError> {
    ChaosGameDescription::uniform(
        [
            Transform2D::from(JuliaTransform::with_sign(c, JuliaSign::Positive)),
            Transform2D::from(JuliaTransform::with_sign(c, JuliaSign::Negative)),
        ],
        Vector2D::new(-1.6, -1.0),
        Vector2D::new(1.6, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build() {
        for kind in PresetKinds::ALL {
            assert!(kind.description().is_ok(), "{} failed", kind.display_name());
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PresetKinds::from_name("fern"), Some(PresetKinds::BarnsleyFern));
        assert_eq!(PresetKinds::from_name("Sierpinski"), Some(PresetKinds::SierpinskiTriangle));
        assert_eq!(PresetKinds::from_name("JULIA"), Some(PresetKinds::Julia));
        assert_eq!(PresetKinds::from_name("mandelbrot"), None);
    }

    #[test]
    fn test_barnsley_fern_weights() {
        let fern = barnsley_fern().unwrap();

        assert_eq!(fern.weights().collect::<Vec<_>>(), vec![0.01, 0.85, 0.07, 0.07]);
    }

    #[test]
    fn test_julia_set_has_both_branches() {
        let julia = julia_set(DEFAULT_JULIA_POINT).unwrap();
        let signs: Vec<i32> = julia
            .transforms()
            .iter()
            .filter_map(|t| match t.transform {
                Transform2D::Julia(j) => Some(j.sign()),
                Transform2D::Affine(_) => None,
            })
            .collect();

        assert_eq!(signs, vec![1, -1]);
    }

    #[test]
    fn test_sierpinski_is_affine_only() {
        let triangle = sierpinski_triangle().unwrap();

        assert_eq!(triangle.transforms().len(), 3);
        assert!(
            triangle
                .transforms()
                .iter()
                .all(|t| matches!(t.transform, Transform2D::Affine(_)))
        );
    }
}
