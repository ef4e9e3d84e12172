//! Test utilities and mock types for Tessel development.
//!
//! Provides [`RecordingAccess`], a sampler wrapper that counts the
//! positioning calls made on it, and fixture rasters in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tessel_core::{Localizable, Positionable, RandomAccess, Sampler};

/// Number of calls of each kind made on a [`RecordingAccess`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub fwd: usize,
    pub bck: usize,
    pub move_by: usize,
    pub set_position: usize,
    pub get: usize,
}

/// Wraps a sampler and counts the positioning and sampling calls it
/// receives.
///
/// Useful to check how a wrapping sampler drives its source, e.g. that
/// unit steps reach the source as unit steps rather than jumps.
pub struct RecordingAccess<A> {
    inner: A,
    pub calls: CallCounts,
}

impl<A> RecordingAccess<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            calls: CallCounts::default(),
        }
    }

    /// Forget all recorded calls.
    pub fn reset(&mut self) {
        self.calls = CallCounts::default();
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Localizable> Localizable for RecordingAccess<A> {
    fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn position(&self, dim: usize) -> i64 {
        self.inner.position(dim)
    }
}

impl<A: Positionable> Positionable for RecordingAccess<A> {
    fn fwd(&mut self, dim: usize) {
        self.calls.fwd += 1;
        self.inner.fwd(dim);
    }

    fn bck(&mut self, dim: usize) {
        self.calls.bck += 1;
        self.inner.bck(dim);
    }

    fn move_by(&mut self, distance: i64, dim: usize) {
        self.calls.move_by += 1;
        self.inner.move_by(distance, dim);
    }

    fn set_position(&mut self, value: i64, dim: usize) {
        self.calls.set_position += 1;
        self.inner.set_position(value, dim);
    }
}

impl<A: Sampler> Sampler for RecordingAccess<A> {
    type Sample = A::Sample;

    fn get(&mut self) -> &A::Sample {
        self.calls.get += 1;
        self.inner.get()
    }
}

impl<A: RandomAccess> RandomAccess for RecordingAccess<A> {
    /// The copy starts with no recorded calls.
    fn copy_access(&self) -> Self {
        Self::new(self.inner.copy_access())
    }
}
