//! Reusable raster fixtures and reference models.
//!
//! - [`ramp`]: every sample equals its storage index, so a sample
//!   identifies the cell it came from.
//! - [`scaled_ramp`]: a ramp multiplied by a constant, to tell two
//!   sources apart in combined samples.
//! - [`wrap_model`]: the expected physical position and boundary flag
//!   of a periodic sampler, computed from scratch.

use tessel_core::{Coord, Extent};
use tessel_raster::ArrayRaster;

/// Raster of `sizes` whose sample at each cell is its storage index.
///
/// # Panics
///
/// Panics if `sizes` is not a valid extent.
pub fn ramp(sizes: &[u64]) -> ArrayRaster<usize> {
    scaled_ramp(sizes, 1)
}

/// Raster of `sizes` whose sample at each cell is `scale * index`.
pub fn scaled_ramp(sizes: &[u64], scale: usize) -> ArrayRaster<usize> {
    let extent = Extent::new(sizes).expect("fixture extent must be valid");
    let cells = extent.cell_count().expect("fixture extent must be addressable");
    ArrayRaster::new(extent, (0..cells).map(|i| i * scale).collect())
        .expect("ramp data matches its extent")
}

/// Expected physical position and out-of-bounds flag for a periodic
/// sampler at logical position `pos`.
pub fn wrap_model(extent: &Extent, pos: &[i64]) -> (Coord, bool) {
    (extent.wrap_coord(pos), !extent.contains(pos))
}

/// Every coordinate of the box `[lo, hi)`, dimension 0 fastest.
pub fn box_coords(lo: &[i64], hi: &[i64]) -> Vec<Coord> {
    assert_eq!(lo.len(), hi.len(), "box corners differ in dimensionality");
    if lo.iter().zip(hi).any(|(l, h)| l >= h) {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut pos = Coord::from_slice(lo);
    'outer: loop {
        out.push(pos.clone());
        for d in 0..pos.len() {
            pos[d] += 1;
            if pos[d] < hi[d] {
                continue 'outer;
            }
            pos[d] = lo[d];
        }
        return out;
    }
}
