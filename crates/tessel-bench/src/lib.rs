//! Benchmark profiles and utilities for the Tessel sampling framework.
//!
//! - [`reference_raster`]: 256x256 `f32` raster with a smooth pattern
//! - [`jump_targets`]: deterministic pseudo-random coordinates, including
//!   positions far outside the raster
//! - [`window_sum`]: a generic traversal driver usable with any sampler

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{Coord, Extent, RandomAccess, SamplerError};
use tessel_raster::ArrayRaster;

/// Side length of [`reference_raster`].
pub const REFERENCE_SIDE: u64 = 256;

/// Build the reference benchmark raster: 256x256 (64K cells).
pub fn reference_raster() -> Result<ArrayRaster<f32>, SamplerError> {
    let extent = Extent::new(&[REFERENCE_SIDE, REFERENCE_SIDE])?;
    ArrayRaster::from_fn(extent, |p| ((p[0] * 7 + p[1] * 13) % 101) as f32 / 101.0)
}

/// `count` deterministic 2D coordinates in `[-span, span)` per dimension.
///
/// Uses a fixed LCG so runs are reproducible without an RNG dependency.
pub fn jump_targets(count: usize, span: i64, seed: u64) -> Vec<Coord> {
    let modulus = 2 * span.max(1) as u64;
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % modulus) as i64 - span.max(1)
    };
    (0..count)
        .map(|_| {
            let x = next();
            let y = next();
            Coord::from_slice(&[x, y])
        })
        .collect()
}

/// Sum every sample of the 2D window `[lo, hi)` using a serpentine walk
/// of unit steps. Leaves the sampler one row past the window.
///
/// Written against [`RandomAccess`] only, so the same driver measures
/// plain, boundary-extended, and combined samplers.
pub fn window_sum<R>(access: &mut R, lo: [i64; 2], hi: [i64; 2]) -> f32
where
    R: RandomAccess<Sample = f32>,
{
    let width = hi[0] - lo[0];
    let mut sum = 0.0;
    access.set_coord(&lo);
    for row in lo[1]..hi[1] {
        let forward = (row - lo[1]) % 2 == 0;
        for col in 0..width {
            sum += *access.get();
            if col + 1 < width {
                if forward {
                    access.fwd(0);
                } else {
                    access.bck(0);
                }
            }
        }
        access.fwd(1);
    }
    sum
}
