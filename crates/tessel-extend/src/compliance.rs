//! Boundary-extension compliance test helpers.
//!
//! These functions verify that an extended sampler over a ramp raster
//! (sample == storage index) repeats the raster periodically and reports
//! its boundary state correctly. Reused by every policy's test module.

use indexmap::IndexSet;
use tessel_core::{Coord, OutOfBounds, RandomAccess};
use tessel_raster::ArrayRaster;

/// All coordinates in `[-2 * size, 2 * size)` along every dimension.
fn window(raster: &ArrayRaster<usize>) -> Vec<Coord> {
    let extent = raster.extent();
    let lo: Coord = extent.sizes().iter().map(|&s| -2 * s).collect();
    let hi: Coord = extent.sizes().iter().map(|&s| 2 * s).collect();
    let mut out = Vec::new();
    let mut pos = lo.clone();
    loop {
        out.push(pos.clone());
        let mut d = 0;
        loop {
            if d == pos.len() {
                return out;
            }
            pos[d] += 1;
            if pos[d] < hi[d] {
                break;
            }
            pos[d] = lo[d];
            d += 1;
        }
    }
}

/// Assert that the sample at every window position is the backing sample
/// at the wrapped position.
pub fn assert_samples_repeat<R>(access: &mut R, raster: &ArrayRaster<usize>)
where
    R: RandomAccess<Sample = usize>,
{
    let extent = raster.extent();
    for pos in window(raster) {
        access.set_coord(&pos);
        let wrapped = extent.wrap_coord(&pos);
        let expected = raster.sample_at(&wrapped).copied();
        let got = *access.get();
        assert_eq!(
            Some(got),
            expected,
            "sample at {pos:?} should repeat {wrapped:?}"
        );
    }
}

/// Assert that `is_out_of_bounds` is set exactly outside the extent.
pub fn assert_flag_matches_extent<R>(access: &mut R, raster: &ArrayRaster<usize>)
where
    R: RandomAccess + OutOfBounds,
{
    let extent = raster.extent();
    for pos in window(raster) {
        access.set_coord(&pos);
        assert_eq!(
            access.is_out_of_bounds(),
            !extent.contains(&pos),
            "out-of-bounds flag wrong at {pos:?}"
        );
    }
}

/// Assert that one period of forward steps along each dimension, started
/// outside the extent, visits every cell of that line exactly once.
pub fn assert_period_visits_each_cell_once<R>(access: &mut R, raster: &ArrayRaster<usize>)
where
    R: RandomAccess<Sample = usize>,
{
    let extent = raster.extent();
    for dim in 0..extent.ndim() {
        let start: Coord = extent.sizes().iter().map(|&s| -s - 1).collect();
        access.set_coord(&start);
        let mut seen = IndexSet::new();
        for _ in 0..extent.size(dim) {
            seen.insert(*access.get());
            access.fwd(dim);
        }
        assert_eq!(
            seen.len() as i64,
            extent.size(dim),
            "period along dim {dim} revisited a cell"
        );
        assert_eq!(
            *access.get(),
            seen[0],
            "period along dim {dim} did not return to its first cell"
        );
    }
}

/// Assert that stepping across the whole window along dimension 0 agrees
/// with absolute jumps on a copy.
pub fn assert_steps_match_jumps<R>(access: &mut R, raster: &ArrayRaster<usize>)
where
    R: RandomAccess<Sample = usize> + OutOfBounds,
{
    let size = raster.extent().size(0);
    let start: Coord = raster.extent().sizes().iter().map(|_| -2 * size).collect();
    access.set_coord(&start);
    let mut jumper = access.copy_access();
    for _ in 0..4 * size {
        access.fwd(0);
        jumper.set_coord(&access.coord());
        assert_eq!(access.coord(), jumper.coord());
        assert_eq!(access.is_out_of_bounds(), jumper.is_out_of_bounds());
        assert_eq!(*access.get(), *jumper.get());
    }
}

/// Assert that moving a copy leaves the original untouched.
pub fn assert_copy_independent<R>(access: &mut R)
where
    R: RandomAccess<Sample = usize> + OutOfBounds,
{
    let origin = Coord::from_elem(0, access.ndim());
    access.set_coord(&origin);
    let before = *access.get();
    let mut copy = access.copy_access();
    copy.move_by(-3, 0);
    assert!(copy.is_out_of_bounds());
    assert_eq!(access.coord(), origin);
    assert!(!access.is_out_of_bounds());
    assert_eq!(*access.get(), before);
}

/// Run all compliance checks on an extended sampler over `raster`.
pub fn run_full_compliance<R>(mut access: R, raster: &ArrayRaster<usize>)
where
    R: RandomAccess<Sample = usize> + OutOfBounds,
{
    assert_samples_repeat(&mut access, raster);
    assert_flag_matches_extent(&mut access, raster);
    assert_period_visits_each_cell_once(&mut access, raster);
    assert_steps_match_jumps(&mut access, raster);
    assert_copy_independent(&mut access);
}
