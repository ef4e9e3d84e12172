//! Lazily combined sampler views for Tessel.
//!
//! A [`CombinedAccess`] walks two independently positioned samplers in
//! lockstep and derives each sample on demand with a [`Combiner`]. The
//! second sampler always follows the first: every `get` moves it to the
//! first sampler's logical position before both samples are read.
//!
//! [`CombinedRaster`] does the same at the source level, minting a fresh
//! [`CombinedAccess`] per traversal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod access;
pub mod combiner;
pub mod raster;

pub use access::CombinedAccess;
pub use combiner::{Combiner, Pair};
pub use raster::CombinedRaster;
