//! Dense array raster and its positioned sampler.

use smallvec::SmallVec;
use tessel_core::{
    Coord, Extent, Localizable, Positionable, RandomAccess, RandomAccessible, RasterSource,
    Sampler, SamplerError,
};

/// A finite N-dimensional raster backed by a flat `Vec<T>`.
///
/// Samples are laid out with dimension 0 varying fastest: the sample at
/// `[x, y]` of a `w x h` raster lives at index `x + y * w`.
///
/// # Examples
///
/// ```
/// use tessel_core::{Extent, Positionable, RandomAccessible, Sampler};
/// use tessel_raster::ArrayRaster;
///
/// let extent = Extent::new(&[3, 2]).unwrap();
/// let raster = ArrayRaster::new(extent, vec![0, 1, 2, 10, 11, 12]).unwrap();
///
/// let mut access = raster.random_access();
/// access.set_coord(&[2, 1]);
/// assert_eq!(*access.get(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct ArrayRaster<T> {
    extent: Extent,
    strides: SmallVec<[i64; 4]>,
    data: Vec<T>,
}

impl<T> ArrayRaster<T> {
    /// Wrap `data` as a raster of the given extent.
    ///
    /// Returns `Err(SamplerError::CellCountOverflow)` if the extent has more
    /// cells than can be addressed, or `Err(SamplerError::DataLengthMismatch)`
    /// if `data.len()` differs from the cell count.
    pub fn new(extent: Extent, data: Vec<T>) -> Result<Self, SamplerError> {
        let (cells, strides) = layout(&extent)?;
        if data.len() != cells {
            log::warn!(
                "array raster {extent}: expected {cells} samples, got {}",
                data.len()
            );
            return Err(SamplerError::DataLengthMismatch {
                expected: cells,
                actual: data.len(),
            });
        }
        log::debug!("array raster {extent} ({cells} cells)");
        Ok(Self {
            extent,
            strides,
            data,
        })
    }

    /// Build a raster by evaluating `f` at every coordinate.
    ///
    /// `f` is called once per cell in storage order (dimension 0 fastest).
    pub fn from_fn<F>(extent: Extent, mut f: F) -> Result<Self, SamplerError>
    where
        F: FnMut(&[i64]) -> T,
    {
        let (cells, _) = layout(&extent)?;
        let mut data = Vec::with_capacity(cells);
        let mut pos: Coord = SmallVec::from_elem(0, extent.ndim());
        for _ in 0..cells {
            data.push(f(&pos));
            for d in 0..pos.len() {
                pos[d] += 1;
                if pos[d] < extent.size(d) {
                    break;
                }
                pos[d] = 0;
            }
        }
        Self::new(extent, data)
    }

    /// The extent of this raster.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// All samples in storage order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Flat storage index of `coord`, or `None` if it lies outside the
    /// extent.
    pub fn index_of(&self, coord: &[i64]) -> Option<usize> {
        if !self.extent.contains(coord) {
            return None;
        }
        let index: i64 = coord
            .iter()
            .zip(&self.strides)
            .map(|(&p, &stride)| p * stride)
            .sum();
        usize::try_from(index).ok()
    }

    /// The sample at `coord`, or `None` if it lies outside the extent.
    pub fn sample_at(&self, coord: &[i64]) -> Option<&T> {
        self.index_of(coord).map(|i| &self.data[i])
    }
}

impl<T: Clone> ArrayRaster<T> {
    /// A raster with every cell set to `value`.
    pub fn filled(extent: Extent, value: T) -> Result<Self, SamplerError> {
        let (cells, _) = layout(&extent)?;
        Self::new(extent, vec![value; cells])
    }
}

impl<T> RandomAccessible for ArrayRaster<T> {
    type Sample = T;
    type Access<'a>
        = ArrayAccess<'a, T>
    where
        Self: 'a;

    fn ndim(&self) -> usize {
        self.extent.ndim()
    }

    fn random_access(&self) -> ArrayAccess<'_, T> {
        ArrayAccess::new(self)
    }
}

impl<T> RasterSource for ArrayRaster<T> {
    fn extent(&self) -> &Extent {
        &self.extent
    }
}

/// Cell count and per-dimension strides for `extent`.
fn layout(extent: &Extent) -> Result<(usize, SmallVec<[i64; 4]>), SamplerError> {
    let cells = extent.cell_count().ok_or(SamplerError::CellCountOverflow)?;
    if i64::try_from(cells).is_err() {
        return Err(SamplerError::CellCountOverflow);
    }
    let mut strides = SmallVec::with_capacity(extent.ndim());
    let mut stride = 1i64;
    for &size in extent.sizes() {
        strides.push(stride);
        // Cannot overflow: the product of all sizes fits in i64.
        stride *= size;
    }
    Ok((cells, strides))
}

/// Positioned sampler over an [`ArrayRaster`].
///
/// Starts at the origin. The flat index is maintained incrementally, so
/// `fwd`, `bck`, `move_by`, and `set_position` are all O(1).
///
/// Sampling is only defined inside the raster's extent. Outside it,
/// `get` either panics or returns the sample of an aliased cell.
#[derive(Debug)]
pub struct ArrayAccess<'a, T> {
    raster: &'a ArrayRaster<T>,
    position: Coord,
    index: i64,
}

impl<'a, T> ArrayAccess<'a, T> {
    /// Create a sampler at the origin of `raster`.
    pub fn new(raster: &'a ArrayRaster<T>) -> Self {
        Self {
            raster,
            position: SmallVec::from_elem(0, raster.extent.ndim()),
            index: 0,
        }
    }

    /// The raster this sampler reads from.
    pub fn raster(&self) -> &'a ArrayRaster<T> {
        self.raster
    }

    /// Returns `true` if the current position lies inside the extent.
    pub fn is_inside(&self) -> bool {
        self.raster.extent.contains(&self.position)
    }
}

impl<T> Localizable for ArrayAccess<'_, T> {
    fn ndim(&self) -> usize {
        self.position.len()
    }

    fn position(&self, dim: usize) -> i64 {
        self.position[dim]
    }
}

impl<T> Positionable for ArrayAccess<'_, T> {
    fn fwd(&mut self, dim: usize) {
        self.position[dim] += 1;
        self.index += self.raster.strides[dim];
    }

    fn bck(&mut self, dim: usize) {
        self.position[dim] -= 1;
        self.index -= self.raster.strides[dim];
    }

    fn move_by(&mut self, distance: i64, dim: usize) {
        let stride = self.raster.strides[dim];
        self.position[dim] = self.position[dim].wrapping_add(distance);
        self.index = self.index.wrapping_add(distance.wrapping_mul(stride));
    }

    fn set_position(&mut self, value: i64, dim: usize) {
        // Wrapping keeps the index exact once the position is back inside.
        let delta = value.wrapping_sub(self.position[dim]);
        self.index = self
            .index
            .wrapping_add(delta.wrapping_mul(self.raster.strides[dim]));
        self.position[dim] = value;
    }
}

impl<T> Sampler for ArrayAccess<'_, T> {
    type Sample = T;

    /// # Panics
    ///
    /// Panics if the flat index of the current position falls outside the
    /// backing storage.
    fn get(&mut self) -> &T {
        debug_assert!(
            self.is_inside(),
            "sampling {:?} outside extent {}",
            self.position,
            self.raster.extent
        );
        let i = usize::try_from(self.index).unwrap_or(usize::MAX);
        &self.raster.data[i]
    }
}

impl<T> RandomAccess for ArrayAccess<'_, T> {
    fn copy_access(&self) -> Self {
        Self {
            raster: self.raster,
            position: self.position.clone(),
            index: self.index,
        }
    }
}
