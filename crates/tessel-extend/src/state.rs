//! Per-dimension boundary state machine.
//!
//! Transitions:
//!
//! ```text
//!            leave(d)
//!   Inside ───────────▶ Outside      aggregate := true
//!          ◀───────────
//!            enter(d)                aggregate := OR over dims (rescan,
//!                                    only if aggregate was true)
//! ```
//!
//! Samplers decide *when* a dimension crosses the boundary (they know the
//! step direction and the extent); this module owns *what* a crossing does
//! to the aggregate flag, so the invariant `aggregate == OR(dims)` is
//! maintained in one place.

use smallvec::SmallVec;

/// Whether one dimension of a position lies inside `[0, size)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DimState {
    /// `0 <= position < size`.
    #[default]
    Inside,
    /// `position < 0` or `position >= size`.
    Outside,
}

/// Boundary state of an N-dimensional position.
///
/// # Examples
///
/// ```
/// use tessel_extend::{BoundaryState, DimState};
///
/// let mut s = BoundaryState::new(2);
/// assert!(!s.is_out_of_bounds());
///
/// s.leave(1);
/// assert_eq!(s.dim(1), DimState::Outside);
/// assert!(s.is_out_of_bounds());
///
/// s.enter(1);
/// assert!(!s.is_out_of_bounds());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryState {
    dims: SmallVec<[DimState; 4]>,
    out_of_bounds: bool,
}

impl BoundaryState {
    /// All `ndim` dimensions inside.
    pub fn new(ndim: usize) -> Self {
        Self {
            dims: SmallVec::from_elem(DimState::Inside, ndim),
            out_of_bounds: false,
        }
    }

    /// Number of dimensions tracked.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Returns `true` if at least one dimension is outside.
    ///
    /// O(1): reads the cached aggregate.
    pub fn is_out_of_bounds(&self) -> bool {
        self.out_of_bounds
    }

    /// State of dimension `dim`.
    pub fn dim(&self, dim: usize) -> DimState {
        self.dims[dim]
    }

    /// Per-dimension states, dimension 0 first.
    pub fn dims(&self) -> &[DimState] {
        &self.dims
    }

    /// Mark dimension `dim` outside.
    pub fn leave(&mut self, dim: usize) {
        self.dims[dim] = DimState::Outside;
        self.out_of_bounds = true;
    }

    /// Mark dimension `dim` inside.
    ///
    /// Rescans the other dimensions only when the aggregate was set.
    pub fn enter(&mut self, dim: usize) {
        self.dims[dim] = DimState::Inside;
        if self.out_of_bounds {
            self.rescan();
        }
    }

    /// Set dimension `dim` from an inside/outside classification.
    pub fn set(&mut self, dim: usize, inside: bool) {
        if inside {
            self.enter(dim);
        } else {
            self.leave(dim);
        }
    }

    /// Returns `true` if the cached aggregate equals the OR of all
    /// dimension states.
    pub fn is_consistent(&self) -> bool {
        self.out_of_bounds == self.dims.contains(&DimState::Outside)
    }

    fn rescan(&mut self) {
        self.out_of_bounds = self.dims.contains(&DimState::Outside);
    }
}
