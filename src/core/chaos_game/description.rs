use crate::core::data::vector2d::Vector2D;
use crate::core::transforms::transform2d::Transform2D;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DescriptionError {
    NoTransforms,
    InvalidWeight { index: usize, weight: f64 },
    ZeroTotalWeight,
    InvalidBounds { min: Vector2D, max: Vector2D },
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransforms => write!(f, "description must contain at least one transform"),
            Self::InvalidWeight { index, weight } => {
                write!(
                    f,
                    "transform {} has invalid weight {}: weights must be finite and non-negative",
                    index, weight
                )
            }
            Self::ZeroTotalWeight => write!(f, "transform weights must not all be zero"),
            Self::InvalidBounds { min, max } => {
                write!(
                    f,
                    "min coords ({}) must be strictly below max coords ({})",
                    min, max
                )
            }
        }
    }
}

impl Error for DescriptionError {}

/// A transform together with its relative selection weight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedTransform {
    pub transform: Transform2D,
    pub weight: f64,
}

impl WeightedTransform {
    #[must_use]
    pub fn new(transform: impl Into<Transform2D>, weight: f64) -> Self {
        Self {
            transform: transform.into(),
            weight,
        }
    }
}

/// Ordered, weighted transform registry plus the world-coordinate window it is drawn in.
///
/// Weights are relative; they do not have to sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosGameDescription {
    transforms: Vec<WeightedTransform>,
    min_coords: Vector2D,
    max_coords: Vector2D,
}

impl ChaosGameDescription {
    pub fn new(
        transforms: Vec<WeightedTransform>,
        min_coords: Vector2D,
        max_coords: Vector2D,
    ) -> Result<Self, DescriptionError> {
        if transforms.is_empty() {
            return Err(DescriptionError::NoTransforms);
        }

        if let Some((index, invalid)) = transforms
            .iter()
            .enumerate()
            .find(|(_, t)| !t.weight.is_finite() || t.weight < 0.0)
        {
            return Err(DescriptionError::InvalidWeight {
                index,
                weight: invalid.weight,
            });
        }

        if transforms.iter().all(|t| t.weight == 0.0) {
            return Err(DescriptionError::ZeroTotalWeight);
        }

        // NaN fails both comparisons and is rejected here too
        if !(min_coords.x0() < max_coords.x0() && min_coords.x1() < max_coords.x1()) {
            return Err(DescriptionError::InvalidBounds {
                min: min_coords,
                max: max_coords,
            });
        }

        Ok(Self {
            transforms,
            min_coords,
            max_coords,
        })
    }

    /// Every transform gets the same weight.
    pub fn uniform(
        transforms: impl IntoIterator<Item = Transform2D>,
        min_coords: Vector2D,
        max_coords: Vector2D,
    ) -> Result<Self, DescriptionError> {
        let weighted = transforms
            .into_iter()
            .map(|transform| WeightedTransform::new(transform, 1.0))
            .collect();

        Self::new(weighted, min_coords, max_coords)
    }

    #[must_use]
    pub fn transforms(&self) -> &[WeightedTransform] {
        &self.transforms
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.transforms.iter().map(|t| t.weight)
    }

    #[must_use]
    pub fn min_coords(&self) -> Vector2D {
        self.min_coords
    }

    #[must_use]
    pub fn max_coords(&self) -> Vector2D {
        self.max_coords
    }
}
