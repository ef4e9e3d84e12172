//! Boundary extension for Tessel samplers.
//!
//! A finite raster is only defined inside its [`Extent`](tessel_core::Extent).
//! This crate extends such a raster to all of integer space and tracks,
//! incrementally, whether the current position lies outside the original
//! bounds.
//!
//! # Policies
//!
//! - [`PeriodicAccess`]: coordinates outside the extent repeat periodically
//!   (wrap-around) in every dimension.
//!
//! Policies are selected with an [`OutOfBoundsFactory`]
//! ([`PeriodicFactory`]) and attached to a source with [`ExtendedRaster`].
//!
//! # Boundary state
//!
//! [`BoundaryState`] holds one [`DimState`] per dimension plus a cached
//! aggregate flag, updated only on transitions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod factory;
pub mod periodic;
pub mod state;

#[cfg(test)]
pub(crate) mod compliance;

pub use factory::{ExtendedRaster, OutOfBoundsFactory, PeriodicFactory};
pub use periodic::PeriodicAccess;
pub use state::{BoundaryState, DimState};
