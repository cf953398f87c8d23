use core::fmt;

/// Errors raised when validating a sampling configuration or running a
/// descriptor pass.
///
/// All descriptor passes are pure computations: any failure is deterministic
/// given the same inputs and is surfaced immediately, never retried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The number of sample points was zero.
    InvalidSampleCount,
    /// The number of sample points exceeded 8, so the pattern would not fit
    /// an 8-bit descriptor cell.
    PatternOverflow {
        /// The requested number of sample points.
        samples: u32,
    },
    /// The sampling radius was non-positive or non-finite.
    InvalidRadius {
        /// The requested radius.
        radius: f32,
    },
    /// The band fraction was negative or non-finite.
    InvalidBandFraction {
        /// The requested band fraction.
        band: f32,
    },
    /// A computed sample coordinate fell outside the image bounds.
    SampleOutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleCount => write!(f, "sample count must be at least 1"),
            Self::PatternOverflow { samples } => {
                write!(f, "{samples} sample points do not fit an 8-bit pattern")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "sampling radius must be positive and finite, got {radius}")
            }
            Self::InvalidBandFraction { band } => {
                write!(f, "band fraction must be non-negative and finite, got {band}")
            }
            Self::SampleOutOfBounds => write!(f, "sample coordinate outside image bounds"),
        }
    }
}

impl std::error::Error for Error {}
