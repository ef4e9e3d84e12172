//! Periodic (wrap-around) boundary extension.

use crate::state::{BoundaryState, DimState};
use std::fmt;
use tessel_core::{
    Coord, Extent, Localizable, OutOfBounds, Positionable, RandomAccess, Sampler, SamplerError,
};

/// A sampler whose domain is all of integer space, repeating the backing
/// raster periodically in every dimension.
///
/// ```text
/// size = 4               |<-inside->|
/// x:    -5 -4 -3 -2 -1  0  1  2  3  4  5  6
/// f(x):  3  0  1  2  3  0  1  2  3  0  1  2
/// ```
///
/// Two positions are tracked: the *logical* position reported by
/// [`Localizable`] (unbounded), and the *physical* position of the wrapped
/// backing sampler (always inside the extent). Unit steps advance the
/// physical cursor by one and reset it at the period boundary; no modulo
/// is computed. Absolute jumps compute the physical position with true
/// (non-negative) modulo.
///
/// # Complexity
///
/// `fwd`, `bck`, `move_by`, and `set_position` are O(1). `move_by(±1)`
/// is a unit step; any other distance is an absolute jump to
/// `position + distance`, which leaves the sampler in exactly the state
/// `|distance|` unit steps would have produced. Relative moves use
/// wrapping arithmetic, so any `i64` target is reachable from any start;
/// stepping past `i64::MAX` or below `i64::MIN` is outside the domain.
///
/// # Examples
///
/// ```
/// use tessel_core::{Extent, Localizable, OutOfBounds, Positionable, RandomAccessible, Sampler};
/// use tessel_extend::PeriodicAccess;
/// use tessel_raster::ArrayRaster;
///
/// let raster = ArrayRaster::new(Extent::new(&[4]).unwrap(), vec![10, 11, 12, 13]).unwrap();
/// let mut access = PeriodicAccess::new(raster.random_access(), raster.extent()).unwrap();
///
/// access.set_position(-3, 0);
/// assert_eq!(*access.get(), 11);
/// assert_eq!(access.position(0), -3);
/// assert!(access.is_out_of_bounds());
/// ```
#[derive(Debug)]
pub struct PeriodicAccess<'a, A> {
    source: A,
    extent: &'a Extent,
    position: Coord,
    state: BoundaryState,
}

impl<'a, A: RandomAccess> PeriodicAccess<'a, A> {
    /// Extend `source`, whose samples are defined inside `extent`.
    ///
    /// Both the logical and the physical position start at the origin;
    /// `source` is moved there if it was elsewhere.
    ///
    /// Returns `Err(SamplerError::DimensionMismatch)` if `source` and
    /// `extent` differ in dimensionality.
    pub fn new(source: A, extent: &'a Extent) -> Result<Self, SamplerError> {
        if source.ndim() != extent.ndim() {
            log::warn!(
                "periodic extension of {}D sampler over {}D extent {extent}",
                source.ndim(),
                extent.ndim()
            );
            return Err(SamplerError::DimensionMismatch {
                expected: extent.ndim(),
                actual: source.ndim(),
            });
        }
        Ok(Self::wrap(source, extent))
    }

    /// Extend a sampler already known to match `extent`.
    pub(crate) fn wrap(mut source: A, extent: &'a Extent) -> Self {
        for d in 0..extent.ndim() {
            if source.position(d) != 0 {
                source.set_position(0, d);
            }
        }
        Self {
            source,
            extent,
            position: Coord::from_elem(0, extent.ndim()),
            state: BoundaryState::new(extent.ndim()),
        }
    }

    /// The extent being repeated.
    pub fn extent(&self) -> &'a Extent {
        self.extent
    }

    /// Per-dimension and aggregate boundary state.
    pub fn boundary_state(&self) -> &BoundaryState {
        &self.state
    }

    /// Returns `true` if dimension `dim` lies outside the extent.
    pub fn is_dim_out_of_bounds(&self, dim: usize) -> bool {
        self.state.dim(dim) == DimState::Outside
    }

    /// Position of the backing sampler in dimension `dim`, always inside
    /// the extent.
    pub fn physical_position(&self, dim: usize) -> i64 {
        self.source.position(dim)
    }

    /// Full position of the backing sampler.
    pub fn physical_coord(&self) -> Coord {
        self.source.coord()
    }

    /// The wrapped backing sampler.
    pub fn source(&self) -> &A {
        &self.source
    }
}

impl<A: RandomAccess> Localizable for PeriodicAccess<'_, A> {
    fn ndim(&self) -> usize {
        self.position.len()
    }

    fn position(&self, dim: usize) -> i64 {
        self.position[dim]
    }
}

impl<A: RandomAccess> Positionable for PeriodicAccess<'_, A> {
    fn fwd(&mut self, dim: usize) {
        let size = self.extent.size(dim);
        self.position[dim] += 1;
        let p = self.position[dim];
        if p == 0 {
            self.state.enter(dim);
        } else if p == size {
            self.state.leave(dim);
        }

        if self.source.position(dim) + 1 == size {
            self.source.set_position(0, dim);
        } else {
            self.source.fwd(dim);
        }
    }

    fn bck(&mut self, dim: usize) {
        let size = self.extent.size(dim);
        let p = self.position[dim];
        self.position[dim] -= 1;
        if p == 0 {
            self.state.leave(dim);
        } else if p == size {
            self.state.enter(dim);
        }

        if self.source.position(dim) == 0 {
            self.source.set_position(size - 1, dim);
        } else {
            self.source.bck(dim);
        }
    }

    fn move_by(&mut self, distance: i64, dim: usize) {
        match distance {
            0 => {}
            1 => self.fwd(dim),
            -1 => self.bck(dim),
            _ => self.set_position(self.position[dim].wrapping_add(distance), dim),
        }
    }

    fn set_position(&mut self, value: i64, dim: usize) {
        self.position[dim] = value;
        if self.extent.contains_in(value, dim) {
            self.source.set_position(value, dim);
            self.state.enter(dim);
        } else {
            self.source.set_position(self.extent.wrap(value, dim), dim);
            self.state.leave(dim);
        }
    }
}

impl<A: RandomAccess> Sampler for PeriodicAccess<'_, A> {
    type Sample = A::Sample;

    fn get(&mut self) -> &A::Sample {
        self.source.get()
    }
}

impl<A: RandomAccess> RandomAccess for PeriodicAccess<'_, A> {
    fn copy_access(&self) -> Self {
        Self {
            source: self.source.copy_access(),
            extent: self.extent,
            position: self.position.clone(),
            state: self.state.clone(),
        }
    }
}

/// Shows the logical position and the physical position it maps to,
/// e.g. `[-1, 4] -> [3, 1] (outside)`.
impl<A: RandomAccess> fmt::Display for PeriodicAccess<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} -> {:?} ({})",
            self.position.as_slice(),
            self.source.coord().as_slice(),
            if self.state.is_out_of_bounds() {
                "outside"
            } else {
                "inside"
            }
        )
    }
}

impl<A> OutOfBounds for PeriodicAccess<'_, A> {
    fn is_out_of_bounds(&self) -> bool {
        self.state.is_out_of_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use tessel_core::RandomAccessible;
    use tessel_raster::{ArrayAccess, ArrayRaster};
    use tessel_test_utils::fixtures::ramp;

    fn periodic(raster: &ArrayRaster<usize>) -> PeriodicAccess<'_, ArrayAccess<'_, usize>> {
        PeriodicAccess::new(raster.random_access(), raster.extent()).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_dimension_mismatch() {
        let raster = ramp(&[4, 4]);
        let other = Extent::new(&[4]).unwrap();
        assert_eq!(
            PeriodicAccess::new(raster.random_access(), &other).unwrap_err(),
            SamplerError::DimensionMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn new_resets_source_to_origin() {
        let raster = ramp(&[4, 4]);
        let mut source = raster.random_access();
        source.set_coord(&[3, 2]);
        let mut p = PeriodicAccess::new(source, raster.extent()).unwrap();
        assert_eq!(p.coord().as_slice(), &[0, 0]);
        assert_eq!(p.physical_coord().as_slice(), &[0, 0]);
        assert!(!p.is_out_of_bounds());
        assert_eq!(*p.get(), 0);
    }

    // ── Unit steps ──────────────────────────────────────────────

    #[test]
    fn forward_steps_wrap_physical_and_set_flag_at_extent() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        let mut logical = vec![p.position(0)];
        let mut physical = vec![p.physical_position(0)];
        let mut flags = vec![p.is_out_of_bounds()];
        for _ in 0..9 {
            p.fwd(0);
            logical.push(p.position(0));
            physical.push(p.physical_position(0));
            flags.push(p.is_out_of_bounds());
        }
        assert_eq!(logical, (0..10).collect::<Vec<_>>());
        assert_eq!(physical, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
        assert_eq!(
            flags,
            vec![false, false, false, false, true, true, true, true, true, true]
        );
    }

    #[test]
    fn backward_steps_wrap_physical_and_set_flag_below_zero() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        let mut physical = Vec::new();
        for _ in 0..6 {
            p.bck(0);
            physical.push(p.physical_position(0));
            assert!(p.is_out_of_bounds());
            let physical_now = p.physical_position(0) as usize;
            assert_eq!(*p.get(), physical_now);
        }
        assert_eq!(p.position(0), -6);
        assert_eq!(physical, vec![3, 2, 1, 0, 3, 2]);
    }

    #[test]
    fn backward_steps_from_above_clear_flag_at_last_cell() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        p.set_position(5, 0);
        assert!(p.is_out_of_bounds());
        p.bck(0);
        assert!(p.is_out_of_bounds());
        p.bck(0);
        assert_eq!(p.position(0), 3);
        assert!(!p.is_out_of_bounds());
        assert_eq!(*p.get(), 3);
    }

    #[test]
    fn forward_steps_from_below_clear_flag_at_zero() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        p.set_position(-2, 0);
        p.fwd(0);
        assert!(p.is_out_of_bounds());
        p.fwd(0);
        assert_eq!(p.position(0), 0);
        assert!(!p.is_out_of_bounds());
        assert_eq!(p.physical_position(0), 0);
    }

    #[test]
    fn size_one_is_outside_everywhere_but_zero() {
        let raster = ramp(&[1]);
        let mut p = periodic(&raster);
        p.fwd(0);
        assert!(p.is_out_of_bounds());
        assert_eq!(p.physical_position(0), 0);
        p.bck(0);
        assert!(!p.is_out_of_bounds());
        p.bck(0);
        assert!(p.is_out_of_bounds());
        assert_eq!(p.physical_position(0), 0);
    }

    // ── Jumps ───────────────────────────────────────────────────

    #[test]
    fn set_position_far_outside_uses_true_modulo() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        for (x, expected) in [(-9, 3), (-4, 0), (-1, 3), (4, 0), (9, 1), (1_000_003, 3)] {
            p.set_position(x, 0);
            assert_eq!(p.physical_position(0), expected, "x = {x}");
            assert_eq!(*p.get(), expected as usize);
            assert!(p.is_out_of_bounds());
        }
        p.set_position(2, 0);
        assert!(!p.is_out_of_bounds());
    }

    #[test]
    fn aggregate_stays_set_while_another_dimension_is_outside() {
        let raster = ramp(&[4, 3]);
        let mut p = periodic(&raster);
        p.set_position(-1, 0);
        p.set_position(3, 1);
        assert!(p.is_dim_out_of_bounds(0));
        assert!(p.is_dim_out_of_bounds(1));

        p.set_position(0, 0);
        assert!(!p.is_dim_out_of_bounds(0));
        assert!(p.is_out_of_bounds());

        p.bck(1);
        assert!(!p.is_out_of_bounds());
        assert_eq!(p.physical_coord().as_slice(), &[0, 2]);
        assert_eq!(*p.get(), 8);
    }

    #[test]
    fn move_to_reaches_target_from_outside() {
        let raster = ramp(&[4, 3]);
        let mut p = periodic(&raster);
        p.set_coord(&[-7, 11]);
        p.move_to(&[2, 1]);
        assert_eq!(p.coord().as_slice(), &[2, 1]);
        assert!(!p.is_out_of_bounds());
        assert_eq!(*p.get(), 6);
    }

    #[test]
    fn localize_reports_logical_position() {
        let raster = ramp(&[4, 3]);
        let mut p = periodic(&raster);
        p.set_coord(&[13, -5]);
        let mut out = [0i64; 2];
        p.localize(&mut out);
        assert_eq!(out, [13, -5]);
        assert_eq!(p.physical_coord().as_slice(), &[1, 1]);
    }

    #[test]
    fn move_to_from_coordinate_extremes() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        p.set_position(i64::MIN, 0);
        assert!(p.is_out_of_bounds());
        p.move_to(&[1]);
        assert_eq!(p.position(0), 1);
        assert_eq!(p.physical_position(0), 1);
        assert!(!p.is_out_of_bounds());
        assert_eq!(*p.get(), 1);

        p.set_position(-1, 0);
        p.move_to(&[i64::MAX]);
        assert_eq!(p.position(0), i64::MAX);
        assert_eq!(p.physical_position(0), 3);
        assert!(p.is_out_of_bounds());
    }

    #[test]
    fn move_by_past_max_wraps_logical_position() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        p.set_position(1, 0);
        p.move_by(i64::MAX, 0);
        assert_eq!(p.position(0), i64::MIN);
        assert_eq!(p.physical_position(0), 0);
        assert!(p.boundary_state().is_consistent());
    }

    // ── Display ─────────────────────────────────────────────────

    #[test]
    fn display_shows_logical_and_physical() {
        let raster = ramp(&[4, 3]);
        let mut p = periodic(&raster);
        p.set_coord(&[-1, 4]);
        assert_eq!(p.to_string(), "[-1, 4] -> [3, 1] (outside)");
        p.set_coord(&[2, 0]);
        assert_eq!(p.to_string(), "[2, 0] -> [2, 0] (inside)");
    }

    // ── Copy ────────────────────────────────────────────────────

    #[test]
    fn copy_is_independent() {
        let raster = ramp(&[4]);
        let mut p = periodic(&raster);
        p.set_position(2, 0);
        let mut q = p.copy_access();
        q.move_by(5, 0);
        assert!(q.is_out_of_bounds());
        assert_eq!(p.position(0), 2);
        assert_eq!(p.physical_position(0), 2);
        assert!(!p.is_out_of_bounds());
        assert_eq!(*p.get(), 2);
        assert_eq!(*q.get(), 3);
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_1d() {
        let raster = ramp(&[5]);
        compliance::run_full_compliance(periodic(&raster), &raster);
    }

    #[test]
    fn compliance_3d() {
        let raster = ramp(&[3, 2, 4]);
        compliance::run_full_compliance(periodic(&raster), &raster);
    }

    // ── Properties ──────────────────────────────────────────────

    #[derive(Clone, Debug)]
    enum Op {
        Fwd(usize),
        Bck(usize),
        Move(i64, usize),
        Set(i64, usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..2).prop_map(Op::Fwd),
            (0usize..2).prop_map(Op::Bck),
            (-20i64..20, 0usize..2).prop_map(|(v, d)| Op::Move(v, d)),
            (-20i64..20, 0usize..2).prop_map(|(v, d)| Op::Set(v, d)),
        ]
    }

    fn apply<A: RandomAccess>(p: &mut PeriodicAccess<'_, A>, op: &Op) {
        match *op {
            Op::Fwd(d) => p.fwd(d),
            Op::Bck(d) => p.bck(d),
            Op::Move(v, d) => p.move_by(v, d),
            Op::Set(v, d) => p.set_position(v, d),
        }
    }

    proptest! {
        #[test]
        fn operations_match_direct_jump(
            w in 1u64..6,
            h in 1u64..6,
            ops in prop::collection::vec(arb_op(), 0..40),
        ) {
            let raster = ramp(&[w, h]);
            let mut walked = periodic(&raster);
            for op in &ops {
                apply(&mut walked, op);
                prop_assert!(walked.boundary_state().is_consistent());
            }

            let mut jumped = periodic(&raster);
            jumped.set_coord(&walked.coord());
            prop_assert_eq!(walked.coord(), jumped.coord());
            prop_assert_eq!(walked.physical_coord(), jumped.physical_coord());
            prop_assert_eq!(walked.boundary_state(), jumped.boundary_state());
            prop_assert_eq!(*walked.get(), *jumped.get());
        }

        #[test]
        fn move_by_equals_repeated_steps(
            size in 1u64..8,
            start in -20i64..20,
            distance in -30i64..30,
        ) {
            let raster = ramp(&[size]);
            let mut jumped = periodic(&raster);
            let mut stepped = periodic(&raster);
            jumped.set_position(start, 0);
            stepped.set_position(start, 0);

            jumped.move_by(distance, 0);
            for _ in 0..distance.unsigned_abs() {
                if distance > 0 { stepped.fwd(0) } else { stepped.bck(0) }
            }
            prop_assert_eq!(jumped.position(0), stepped.position(0));
            prop_assert_eq!(jumped.physical_position(0), stepped.physical_position(0));
            prop_assert_eq!(jumped.is_out_of_bounds(), stepped.is_out_of_bounds());
        }

        #[test]
        fn fwd_bck_round_trip(
            size in 1u64..8,
            x in -20i64..20,
            y in -20i64..20,
            dim in 0usize..2,
        ) {
            let raster = ramp(&[size, 3]);
            let mut p = periodic(&raster);
            p.set_coord(&[x, y]);
            let before = (p.coord(), p.physical_coord(), p.boundary_state().clone());
            p.fwd(dim);
            p.bck(dim);
            prop_assert_eq!(before, (p.coord(), p.physical_coord(), p.boundary_state().clone()));
        }

        #[test]
        fn sample_is_backing_sample_at_wrapped_position(size in 1u64..10, x in -1_000i64..1_000) {
            let raster = ramp(&[size]);
            let mut p = periodic(&raster);
            p.set_position(x, 0);
            let expected = x.rem_euclid(size as i64) as usize;
            prop_assert_eq!(*p.get(), expected);
            prop_assert_eq!(p.is_out_of_bounds(), x < 0 || x >= size as i64);
        }
    }
}
