//! Combined sources.

use crate::access::CombinedAccess;
use crate::combiner::Combiner;
use std::sync::Arc;
use tessel_core::{Extent, RandomAccessible, RasterSource, SamplerError};

/// Two sources viewed as one source of combined samples.
///
/// Each [`random_access`](RandomAccessible::random_access) call creates a
/// new [`CombinedAccess`] over fresh samplers of both sources, sharing one
/// combiner. When the first source is finite, so is the combination: it
/// implements [`RasterSource`] with the first source's extent.
///
/// # Examples
///
/// ```
/// use tessel_combine::CombinedRaster;
/// use tessel_core::{Extent, Positionable, RandomAccessible, Sampler};
/// use tessel_extend::ExtendedRaster;
/// use tessel_raster::ArrayRaster;
///
/// let image = ArrayRaster::new(Extent::new(&[4]).unwrap(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let kernel = ArrayRaster::new(Extent::new(&[2]).unwrap(), vec![0.5, 2.0]).unwrap();
///
/// // The kernel tiles periodically underneath the image.
/// let weighted = CombinedRaster::new(
///     &image,
///     ExtendedRaster::periodic(&kernel),
///     |a: &f64, b: &f64, out: &mut f64| *out = a * b,
///     0.0,
/// )
/// .unwrap();
///
/// let mut access = weighted.random_access();
/// access.set_position(3, 0);
/// assert_eq!(*access.get(), 8.0);
/// ```
#[derive(Clone, Debug)]
pub struct CombinedRaster<SA, SB, C, F> {
    a: SA,
    b: SB,
    combiner: Arc<F>,
    model: C,
}

impl<SA, SB, C, F> CombinedRaster<SA, SB, C, F>
where
    SA: RandomAccessible,
    SB: RandomAccessible,
    C: Clone,
    F: Combiner<SA::Sample, SB::Sample, C>,
{
    /// Combine sources `a` and `b` with `combiner`; every sampler's output
    /// slot is cloned from `model`.
    ///
    /// Returns `Err(SamplerError::DimensionMismatch)` if the sources differ
    /// in dimensionality.
    pub fn new(a: SA, b: SB, combiner: F, model: C) -> Result<Self, SamplerError> {
        if a.ndim() != b.ndim() {
            log::warn!(
                "cannot combine {}D source with {}D source",
                a.ndim(),
                b.ndim()
            );
            return Err(SamplerError::DimensionMismatch {
                expected: a.ndim(),
                actual: b.ndim(),
            });
        }
        log::debug!("combined {}D source", a.ndim());
        Ok(Self {
            a,
            b,
            combiner: Arc::new(combiner),
            model,
        })
    }

    /// The leading source.
    pub fn first(&self) -> &SA {
        &self.a
    }

    /// The following source.
    pub fn second(&self) -> &SB {
        &self.b
    }

    /// The model output sample.
    pub fn model(&self) -> &C {
        &self.model
    }
}

impl<SA, SB, C, F> RandomAccessible for CombinedRaster<SA, SB, C, F>
where
    SA: RandomAccessible,
    SB: RandomAccessible,
    C: Clone,
    F: Combiner<SA::Sample, SB::Sample, C>,
{
    type Sample = C;
    type Access<'a>
        = CombinedAccess<SA::Access<'a>, SB::Access<'a>, C, F>
    where
        Self: 'a;

    fn ndim(&self) -> usize {
        self.a.ndim()
    }

    fn random_access(&self) -> Self::Access<'_> {
        CombinedAccess::from_parts(
            self.a.random_access(),
            self.b.random_access(),
            Arc::clone(&self.combiner),
            &self.model,
        )
    }
}

impl<SA, SB, C, F> RasterSource for CombinedRaster<SA, SB, C, F>
where
    SA: RasterSource,
    SB: RandomAccessible,
    C: Clone,
    F: Combiner<SA::Sample, SB::Sample, C>,
{
    fn extent(&self) -> &Extent {
        self.a.extent()
    }
}
