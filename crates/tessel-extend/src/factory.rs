//! Boundary-extension policy selection.
//!
//! An [`OutOfBoundsFactory`] turns a finite [`RasterSource`] into samplers
//! that accept any coordinate. [`ExtendedRaster`] binds a source to a
//! factory and exposes the result as an unbounded [`RandomAccessible`].

use crate::periodic::PeriodicAccess;
use tessel_core::{Extent, OutOfBounds, RandomAccess, RandomAccessible, RasterSource};

/// Creates boundary-extended samplers over a finite source.
pub trait OutOfBoundsFactory<S: RasterSource> {
    /// The extended sampler type, borrowing the source for `'a`.
    type Access<'a>: RandomAccess<Sample = S::Sample> + OutOfBounds
    where
        S: 'a;

    /// Create an extended sampler over `source`, positioned at the origin.
    fn create<'a>(&self, source: &'a S) -> Self::Access<'a>;
}

/// Periodic (wrap-around) boundary policy. Creates [`PeriodicAccess`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PeriodicFactory;

impl<S: RasterSource> OutOfBoundsFactory<S> for PeriodicFactory {
    type Access<'a>
        = PeriodicAccess<'a, S::Access<'a>>
    where
        S: 'a;

    fn create<'a>(&self, source: &'a S) -> Self::Access<'a> {
        PeriodicAccess::wrap(source.random_access(), source.extent())
    }
}

/// A finite source extended to all of integer space by a boundary policy.
///
/// Every call to [`random_access`](RandomAccessible::random_access)
/// creates a fresh, independent extended sampler at the origin.
///
/// # Examples
///
/// ```
/// use tessel_core::{Extent, OutOfBounds, Positionable, RandomAccessible, Sampler};
/// use tessel_extend::ExtendedRaster;
/// use tessel_raster::ArrayRaster;
///
/// let raster = ArrayRaster::new(Extent::new(&[3]).unwrap(), vec!['a', 'b', 'c']).unwrap();
/// let extended = ExtendedRaster::periodic(&raster);
///
/// let mut access = extended.random_access();
/// access.set_position(-1, 0);
/// assert_eq!(*access.get(), 'c');
/// assert!(access.is_out_of_bounds());
/// ```
#[derive(Clone, Debug)]
pub struct ExtendedRaster<S, F = PeriodicFactory> {
    source: S,
    factory: F,
}

impl<S: RasterSource, F: OutOfBoundsFactory<S>> ExtendedRaster<S, F> {
    /// Extend `source` with the policy created by `factory`.
    pub fn new(source: S, factory: F) -> Self {
        log::debug!(
            "extending {}D source {} past its bounds",
            source.ndim(),
            source.extent()
        );
        Self { source, factory }
    }

    /// The finite source being extended.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The extent of the finite source.
    pub fn extent(&self) -> &Extent {
        self.source.extent()
    }

    /// The boundary policy.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Release the finite source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: RasterSource> ExtendedRaster<S, PeriodicFactory> {
    /// Extend `source` periodically.
    pub fn periodic(source: S) -> Self {
        Self::new(source, PeriodicFactory)
    }
}

impl<S, F> RandomAccessible for ExtendedRaster<S, F>
where
    S: RasterSource,
    F: OutOfBoundsFactory<S>,
{
    type Sample = S::Sample;
    type Access<'a>
        = F::Access<'a>
    where
        Self: 'a;

    fn ndim(&self) -> usize {
        self.source.ndim()
    }

    fn random_access(&self) -> Self::Access<'_> {
        self.factory.create(&self.source)
    }
}
