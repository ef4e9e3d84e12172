//! Error types for the Tessel sampling framework.
//!
//! Every error here is a configuration error raised while constructing a
//! raster, extent, or sampler. Stepping, jumping, and sampling never fail
//! once construction has succeeded.

use std::error::Error;
use std::fmt;

/// Errors arising from raster, extent, or sampler construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SamplerError {
    /// Attempted to construct an extent with no dimensions.
    ZeroDimensions,
    /// A dimension has size zero.
    EmptyExtent {
        /// Index of the offending dimension.
        dim: usize,
    },
    /// A dimension is larger than the coordinate type can address.
    ExtentTooLarge {
        /// Index of the offending dimension.
        dim: usize,
        /// The requested size.
        size: u64,
        /// The largest permitted size.
        max: u64,
    },
    /// The product of all dimension sizes does not fit in `usize`.
    CellCountOverflow,
    /// Backing data length does not match the extent's cell count.
    DataLengthMismatch {
        /// Number of cells the extent describes.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },
    /// Two collaborators disagree on dimensionality.
    DimensionMismatch {
        /// Dimensionality of the reference collaborator.
        expected: usize,
        /// Dimensionality of the collaborator being attached.
        actual: usize,
    },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimensions => write!(f, "extent must have at least one dimension"),
            Self::EmptyExtent { dim } => write!(f, "dimension {dim} has size zero"),
            Self::ExtentTooLarge { dim, size, max } => {
                write!(f, "dimension {dim} has size {size}, maximum is {max}")
            }
            Self::CellCountOverflow => write!(f, "cell count overflows usize"),
            Self::DataLengthMismatch { expected, actual } => {
                write!(f, "expected {expected} samples, got {actual}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}D, got {actual}D")
            }
        }
    }
}

impl Error for SamplerError {}
