//! Core types and traits for the Tessel sampling framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tessel workspace:
//! the [`Coord`] and [`Extent`] types, the [`SamplerError`] type, and the
//! positioned-sampler capability traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod traits;

pub use coord::{Coord, Extent};
pub use error::SamplerError;
pub use traits::{
    Localizable, OutOfBounds, Positionable, RandomAccess, RandomAccessible, RasterSource, Sampler,
};
