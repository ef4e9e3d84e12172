//! Tessel: positioned N-dimensional samplers with boundary extension and
//! lazy combination.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A 4x3 raster whose samples are their storage index.
//! let extent = Extent::new(&[4, 3]).unwrap();
//! let image = ArrayRaster::new(extent, (0..12).collect::<Vec<u32>>()).unwrap();
//!
//! // Repeat it periodically over all of integer space.
//! let tiled = ExtendedRaster::periodic(&image);
//! let mut access = tiled.random_access();
//! access.set_coord(&[-1, 4]);
//! assert_eq!(*access.get(), 3 + 4); // wrapped to [3, 1]
//! assert!(access.is_out_of_bounds());
//!
//! // Pair each image sample with the tiled sample at the same position.
//! let paired = CombinedRaster::new(&image, &tiled, Pair, (0, 0)).unwrap();
//! let mut both = paired.random_access();
//! both.set_coord(&[2, 2]);
//! assert_eq!(*both.get(), (10, 10));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `Coord`, `Extent`, `SamplerError`, sampler traits |
//! | [`raster`] | `tessel-raster` | In-memory `ArrayRaster` backing source |
//! | [`extend`] | `tessel-extend` | Periodic boundary extension and boundary state |
//! | [`combine`] | `tessel-combine` | Combined samplers and combiners |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tessel-core`).
///
/// Contains [`types::Coord`], [`types::Extent`], [`types::SamplerError`],
/// and the capability traits every sampler implements
/// ([`types::Localizable`], [`types::Positionable`], [`types::Sampler`],
/// [`types::RandomAccess`], [`types::OutOfBounds`]).
pub use tessel_core as types;

/// In-memory backing source (`tessel-raster`).
///
/// [`raster::ArrayRaster`] stores a finite raster in one contiguous buffer.
pub use tessel_raster as raster;

/// Boundary extension (`tessel-extend`).
///
/// [`extend::PeriodicAccess`] repeats a finite raster over all of integer
/// space; [`extend::ExtendedRaster`] attaches a policy to a source.
pub use tessel_extend as extend;

/// Combined samplers (`tessel-combine`).
///
/// [`combine::CombinedAccess`] derives samples from two positioned
/// samplers, the second following the first.
pub use tessel_combine as combine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
///
/// This imports the coordinate types, every sampler trait, the array
/// raster, the periodic extension, and the combined views.
pub mod prelude {
    // Core types and traits
    pub use tessel_core::{
        Coord, Extent, Localizable, OutOfBounds, Positionable, RandomAccess, RandomAccessible,
        RasterSource, Sampler,
    };

    // Errors
    pub use tessel_core::SamplerError;

    // Backing source
    pub use tessel_raster::ArrayRaster;

    // Boundary extension
    pub use tessel_extend::{ExtendedRaster, OutOfBoundsFactory, PeriodicAccess, PeriodicFactory};

    // Combination
    pub use tessel_combine::{CombinedAccess, CombinedRaster, Combiner, Pair};
}
