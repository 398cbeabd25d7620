#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitColourMapKinds {
    Binary,
    #[default]
    DensityGradient,
}

impl HitColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::DensityGradient, Self::Binary];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::DensityGradient => "Density Gradient",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::DensityGradient => "density",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for HitColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
