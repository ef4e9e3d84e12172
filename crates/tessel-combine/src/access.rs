//! Combined positioned sampler.

use crate::combiner::Combiner;
use std::sync::Arc;
use tessel_core::{
    Localizable, OutOfBounds, Positionable, RandomAccess, Sampler, SamplerError,
};

/// A sampler deriving each sample from two positioned samplers.
///
/// Positioning acts on the first sampler `a` only. On every
/// [`get`](Sampler::get), the second sampler `b` is moved to `a`'s
/// *logical* position, both samples are read, and the combiner writes the
/// result into an owned slot whose reference is returned. The direction is
/// fixed: `b` follows `a`. When the two have different extents or
/// boundary policies, swapping them changes the result.
///
/// The slot is cloned once from a model value at construction. Its
/// contents are only meaningful right after a `get`.
///
/// # Examples
///
/// ```
/// use tessel_combine::CombinedAccess;
/// use tessel_core::{Extent, Positionable, RandomAccessible, Sampler};
/// use tessel_raster::ArrayRaster;
///
/// let extent = Extent::new(&[3]).unwrap();
/// let left = ArrayRaster::new(extent.clone(), vec![1, 2, 3]).unwrap();
/// let right = ArrayRaster::new(extent, vec![10, 20, 30]).unwrap();
///
/// let mut sum = CombinedAccess::new(
///     left.random_access(),
///     right.random_access(),
///     |a: &i32, b: &i32, out: &mut i32| *out = a + b,
///     &0,
/// )
/// .unwrap();
///
/// sum.set_position(2, 0);
/// assert_eq!(*sum.get(), 33);
/// ```
#[derive(Debug)]
pub struct CombinedAccess<RA, RB, C, F> {
    a: RA,
    b: RB,
    combiner: Arc<F>,
    combined: C,
}

impl<RA, RB, C, F> CombinedAccess<RA, RB, C, F>
where
    RA: RandomAccess,
    RB: RandomAccess,
    C: Clone,
    F: Combiner<RA::Sample, RB::Sample, C>,
{
    /// Combine `a` and `b` with `combiner`, cloning `model` into the
    /// output slot.
    ///
    /// Returns `Err(SamplerError::DimensionMismatch)` if `a` and `b`
    /// differ in dimensionality.
    pub fn new(a: RA, b: RB, combiner: F, model: &C) -> Result<Self, SamplerError> {
        Self::with_shared(a, b, Arc::new(combiner), model)
    }

    /// Like [`new`](Self::new), with a combiner already shared elsewhere.
    pub fn with_shared(a: RA, b: RB, combiner: Arc<F>, model: &C) -> Result<Self, SamplerError> {
        if a.ndim() != b.ndim() {
            log::warn!(
                "cannot combine {}D sampler with {}D sampler",
                a.ndim(),
                b.ndim()
            );
            return Err(SamplerError::DimensionMismatch {
                expected: a.ndim(),
                actual: b.ndim(),
            });
        }
        Ok(Self::from_parts(a, b, combiner, model))
    }

    /// Assemble from parts already known to agree on dimensionality.
    pub(crate) fn from_parts(a: RA, b: RB, combiner: Arc<F>, model: &C) -> Self {
        Self {
            a,
            b,
            combiner,
            combined: model.clone(),
        }
    }

    /// The leading sampler.
    pub fn first(&self) -> &RA {
        &self.a
    }

    /// The following sampler. Its position is only synchronized by `get`.
    pub fn second(&self) -> &RB {
        &self.b
    }

    /// The shared combiner.
    pub fn combiner(&self) -> &Arc<F> {
        &self.combiner
    }

    /// The output slot as left by the most recent `get`.
    pub fn combined(&self) -> &C {
        &self.combined
    }
}

impl<RA: Localizable, RB, C, F> Localizable for CombinedAccess<RA, RB, C, F> {
    fn ndim(&self) -> usize {
        self.a.ndim()
    }

    fn position(&self, dim: usize) -> i64 {
        self.a.position(dim)
    }

    fn localize(&self, out: &mut [i64]) {
        self.a.localize(out)
    }
}

impl<RA: Positionable, RB, C, F> Positionable for CombinedAccess<RA, RB, C, F> {
    fn fwd(&mut self, dim: usize) {
        self.a.fwd(dim)
    }

    fn bck(&mut self, dim: usize) {
        self.a.bck(dim)
    }

    fn move_by(&mut self, distance: i64, dim: usize) {
        self.a.move_by(distance, dim)
    }

    fn set_position(&mut self, value: i64, dim: usize) {
        self.a.set_position(value, dim)
    }
}

impl<RA, RB, C, F> Sampler for CombinedAccess<RA, RB, C, F>
where
    RA: RandomAccess,
    RB: RandomAccess,
    F: Combiner<RA::Sample, RB::Sample, C>,
{
    type Sample = C;

    fn get(&mut self) -> &C {
        self.b.set_position_from(&self.a);
        let combiner: &F = &self.combiner;
        combiner.combine(self.a.get(), self.b.get(), &mut self.combined);
        &self.combined
    }
}

impl<RA, RB, C, F> RandomAccess for CombinedAccess<RA, RB, C, F>
where
    RA: RandomAccess,
    RB: RandomAccess,
    C: Clone,
    F: Combiner<RA::Sample, RB::Sample, C>,
{
    fn copy_access(&self) -> Self {
        Self::from_parts(
            self.a.copy_access(),
            self.b.copy_access(),
            Arc::clone(&self.combiner),
            &self.combined,
        )
    }
}

impl<RA: OutOfBounds, RB, C, F> OutOfBounds for CombinedAccess<RA, RB, C, F> {
    /// Boundary state of the leading sampler.
    fn is_out_of_bounds(&self) -> bool {
        self.a.is_out_of_bounds()
    }
}
