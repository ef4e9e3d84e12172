//! Positioned-sampler capability traits.
//!
//! The sampler contract is split the same way for every variant:
//!
//! - [`Localizable`]: report the current logical position.
//! - [`Positionable`]: mutate it by unit steps, relative moves, or
//!   absolute jumps.
//! - [`Sampler`]: fetch the sample at the current position.
//! - [`RandomAccess`]: all of the above plus independent copying.
//!
//! Plain, boundary-extended, and combined samplers all implement
//! [`RandomAccess`], so traversal drivers and measurement routines are
//! written generically against it and never against a concrete variant.
//! Boundary-extended samplers additionally implement [`OutOfBounds`].
//!
//! Sources that mint samplers implement [`RandomAccessible`]; finite ones
//! also implement [`RasterSource`].

use crate::coord::{Coord, Extent};

/// Reports an N-dimensional integer position.
pub trait Localizable {
    /// Number of dimensions. Fixed for the lifetime of the object.
    fn ndim(&self) -> usize;

    /// Logical position in dimension `dim`.
    ///
    /// # Panics
    ///
    /// Implementations panic if `dim >= self.ndim()`.
    fn position(&self, dim: usize) -> i64;

    /// Write the logical position into `out`.
    ///
    /// Only the first `min(out.len(), ndim)` components are written.
    fn localize(&self, out: &mut [i64]) {
        for (d, p) in out.iter_mut().enumerate().take(self.ndim()) {
            *p = self.position(d);
        }
    }

    /// The full logical position as a [`Coord`].
    fn coord(&self) -> Coord {
        (0..self.ndim()).map(|d| self.position(d)).collect()
    }
}

/// Mutates an N-dimensional integer position.
///
/// None of these operations fail: a positionable object accepts any
/// coordinate. Whether sampling at that coordinate is meaningful depends
/// on the implementation (plain samplers are only defined inside their
/// extent; boundary-extended samplers everywhere).
pub trait Positionable: Localizable {
    /// Move one step forward in dimension `dim`.
    ///
    /// Stepping past `i64::MAX` is outside the coordinate domain and may
    /// panic in debug builds.
    fn fwd(&mut self, dim: usize);

    /// Move one step backward in dimension `dim`.
    ///
    /// Stepping below `i64::MIN` is outside the coordinate domain and may
    /// panic in debug builds.
    fn bck(&mut self, dim: usize);

    /// Move by `distance` in dimension `dim`.
    ///
    /// Implementations move to `position.wrapping_add(distance)`, so a
    /// distance computed with `wrapping_sub` reaches any `i64` target
    /// exactly.
    fn move_by(&mut self, distance: i64, dim: usize);

    /// Set the position in dimension `dim` to `value`.
    fn set_position(&mut self, value: i64, dim: usize);

    /// Move by `distance[d]` in every dimension `d` of `distance`.
    fn move_by_coord(&mut self, distance: &[i64]) {
        for (d, &delta) in distance.iter().enumerate() {
            if delta != 0 {
                self.move_by(delta, d);
            }
        }
    }

    /// Set the position in dimensions `0..position.len()`.
    ///
    /// Applied one dimension at a time; boundary state observed between
    /// dimensions is intermediate.
    fn set_coord(&mut self, position: &[i64]) {
        for (d, &p) in position.iter().enumerate() {
            self.set_position(p, d);
        }
    }

    /// Reach `target` by relative moves in every dimension of `target`.
    fn move_to(&mut self, target: &[i64]) {
        for (d, &t) in target.iter().enumerate() {
            let delta = t.wrapping_sub(self.position(d));
            if delta != 0 {
                self.move_by(delta, d);
            }
        }
    }

    /// Set the position to the logical position of `other`.
    ///
    /// Copies `self.ndim()` components; `other` must have at least that
    /// many dimensions.
    fn set_position_from<L: Localizable + ?Sized>(&mut self, other: &L)
    where
        Self: Sized,
    {
        for d in 0..self.ndim() {
            self.set_position(other.position(d), d);
        }
    }

    /// Reach the logical position of `other` by relative moves.
    fn move_to_localizable<L: Localizable + ?Sized>(&mut self, other: &L)
    where
        Self: Sized,
    {
        for d in 0..self.ndim() {
            let delta = other.position(d).wrapping_sub(self.position(d));
            if delta != 0 {
                self.move_by(delta, d);
            }
        }
    }
}

/// Fetches the sample at the current position.
pub trait Sampler {
    /// The sample type.
    type Sample;

    /// The sample at the current position.
    ///
    /// Never changes the logical position. Takes `&mut self` because
    /// derived samplers recompute into an owned slot on every call.
    fn get(&mut self) -> &Self::Sample;
}

/// The full positioned-sampler contract.
pub trait RandomAccess: Positionable + Sampler {
    /// Create an independent sampler at the same position.
    ///
    /// The copy shares only immutable backing data with `self`; moving
    /// either one never affects the other.
    fn copy_access(&self) -> Self
    where
        Self: Sized;
}

/// Boundary awareness for samplers whose domain extends past a finite
/// extent.
pub trait OutOfBounds {
    /// Returns `true` if the current logical position lies outside the
    /// original extent in at least one dimension.
    fn is_out_of_bounds(&self) -> bool;
}

/// A source that can create independent positioned samplers over itself.
///
/// The domain may be finite or unbounded; see [`RasterSource`] for the
/// finite case.
pub trait RandomAccessible {
    /// The sample type of the samplers this source creates.
    type Sample;

    /// The sampler type, borrowing the source for `'a`.
    type Access<'a>: RandomAccess<Sample = Self::Sample>
    where
        Self: 'a;

    /// Number of dimensions.
    fn ndim(&self) -> usize;

    /// Create a new sampler positioned at the origin.
    fn random_access(&self) -> Self::Access<'_>;
}

/// A [`RandomAccessible`] with a finite [`Extent`].
pub trait RasterSource: RandomAccessible {
    /// The finite size of the source along each dimension.
    fn extent(&self) -> &Extent;
}

impl<S: RandomAccessible + ?Sized> RandomAccessible for &S {
    type Sample = S::Sample;
    type Access<'a>
        = S::Access<'a>
    where
        Self: 'a;

    fn ndim(&self) -> usize {
        (**self).ndim()
    }

    fn random_access(&self) -> Self::Access<'_> {
        (**self).random_access()
    }
}

impl<S: RasterSource + ?Sized> RasterSource for &S {
    fn extent(&self) -> &Extent {
        (**self).extent()
    }
}
