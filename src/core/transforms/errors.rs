use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransformError {
    InvalidSign { sign: i32 },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSign { sign } => {
                write!(f, "julia transform sign must be 1 or -1, got {}", sign)
            }
        }
    }
}

impl Error for TransformError {}
