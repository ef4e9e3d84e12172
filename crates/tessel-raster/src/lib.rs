//! In-memory backing source for Tessel samplers.
//!
//! [`ArrayRaster`] stores the samples of a finite N-dimensional raster in a
//! single `Vec<T>` with dimension 0 varying fastest. [`ArrayAccess`] is its
//! positioned sampler: it keeps a flat index in step with the logical
//! position using per-dimension strides, so every step and jump is O(1).
//!
//! This is the minimal finite-extent source the rest of the workspace
//! builds on. It is read-only once constructed; samplers borrow it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;

pub use array::{ArrayAccess, ArrayRaster};
