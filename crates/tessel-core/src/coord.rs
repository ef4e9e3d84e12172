//! The [`Coord`] type alias and the finite [`Extent`] of a raster.

use crate::error::SamplerError;
use smallvec::SmallVec;
use std::fmt;

/// A position in raster space.
///
/// Uses `SmallVec<[i64; 4]>` to avoid heap allocation for rasters up to
/// 4 dimensions. Higher-dimensional rasters spill to the heap
/// transparently. Coordinates are signed: boundary-extended samplers
/// address positions far outside the finite extent in both directions.
pub type Coord = SmallVec<[i64; 4]>;

/// The finite per-dimension size of a backing raster.
///
/// Every size is at least 1 and at most [`Extent::MAX_SIZE`], and there is
/// at least one dimension. An `Extent` is immutable after construction;
/// samplers borrow it from their backing source rather than copying it.
///
/// # Examples
///
/// ```
/// use tessel_core::Extent;
///
/// let extent = Extent::new(&[4, 3]).unwrap();
/// assert_eq!(extent.ndim(), 2);
/// assert_eq!(extent.size(0), 4);
/// assert_eq!(extent.cell_count(), Some(12));
///
/// // Periodic addressing uses true (non-negative) modulo.
/// assert_eq!(extent.wrap(-1, 0), 3);
/// assert_eq!(extent.wrap(7, 1), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    sizes: SmallVec<[i64; 4]>,
}

impl Extent {
    /// Maximum size of a single dimension: coordinates are `i64`.
    pub const MAX_SIZE: u64 = i64::MAX as u64;

    /// Create an extent from per-dimension sizes.
    ///
    /// Returns `Err(SamplerError::ZeroDimensions)` for an empty slice,
    /// `Err(SamplerError::EmptyExtent)` if any size is zero, or
    /// `Err(SamplerError::ExtentTooLarge)` if any size exceeds
    /// [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(sizes: &[u64]) -> Result<Self, SamplerError> {
        if sizes.is_empty() {
            return Err(SamplerError::ZeroDimensions);
        }
        let mut checked = SmallVec::with_capacity(sizes.len());
        for (dim, &size) in sizes.iter().enumerate() {
            if size == 0 {
                return Err(SamplerError::EmptyExtent { dim });
            }
            if size > Self::MAX_SIZE {
                return Err(SamplerError::ExtentTooLarge {
                    dim,
                    size,
                    max: Self::MAX_SIZE,
                });
            }
            checked.push(size as i64);
        }
        Ok(Self { sizes: checked })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.sizes.len()
    }

    /// Size along dimension `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= self.ndim()`.
    pub fn size(&self, dim: usize) -> i64 {
        self.sizes[dim]
    }

    /// All sizes, dimension 0 first.
    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    /// Total number of cells, or `None` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.sizes.iter().try_fold(1usize, |acc, &s| {
            usize::try_from(s).ok().and_then(|s| acc.checked_mul(s))
        })
    }

    /// Returns `true` if `value` lies in `[0, size(dim))`.
    pub fn contains_in(&self, value: i64, dim: usize) -> bool {
        (0..self.sizes[dim]).contains(&value)
    }

    /// Returns `true` if every component of `coord` lies inside the extent.
    ///
    /// A coordinate of the wrong dimensionality is never contained.
    pub fn contains(&self, coord: &[i64]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .enumerate()
                .all(|(d, &p)| self.contains_in(p, d))
    }

    /// Map `value` into `[0, size(dim))` by periodic repetition.
    pub fn wrap(&self, value: i64, dim: usize) -> i64 {
        value.rem_euclid(self.sizes[dim])
    }

    /// Map every component of `coord` into the extent by periodic repetition.
    pub fn wrap_coord(&self, coord: &[i64]) -> Coord {
        coord
            .iter()
            .enumerate()
            .map(|(d, &p)| self.wrap(p, d))
            .collect()
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (d, size) in self.sizes.iter().enumerate() {
            if d > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{size}")?;
        }
        Ok(())
    }
}
