use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HitColourMapError {
    HitsExceedMax { hits: u32, max_hits: u32 },
}

impl fmt::Display for HitColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HitsExceedMax { hits, max_hits } => {
                write!(f, "hit count {} exceeds maximum {}", hits, max_hits)
            }
        }
    }
}

impl Error for HitColourMapError {}
