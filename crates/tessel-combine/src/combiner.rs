//! The [`Combiner`] trait.

/// Merges a sample from each of two sources into an output slot.
///
/// # Contract
///
/// - `&self`: combiners are stateless. One combiner is shared by every
///   copy of a combined sampler, possibly across threads.
/// - `combine` must overwrite every part of `out` it defines; the slot
///   still holds the previous result when it is called.
///
/// Any `Fn(&A, &B, &mut C)` is a combiner.
///
/// # Examples
///
/// ```
/// use tessel_combine::Combiner;
///
/// let diff = |a: &i32, b: &i32, out: &mut i32| *out = a - b;
/// let mut out = 0;
/// diff.combine(&7, &3, &mut out);
/// assert_eq!(out, 4);
/// ```
pub trait Combiner<A: ?Sized, B: ?Sized, C: ?Sized> {
    /// Write the combination of `a` and `b` into `out`.
    fn combine(&self, a: &A, b: &B, out: &mut C);
}

impl<A, B, C, F> Combiner<A, B, C> for F
where
    A: ?Sized,
    B: ?Sized,
    C: ?Sized,
    F: Fn(&A, &B, &mut C),
{
    fn combine(&self, a: &A, b: &B, out: &mut C) {
        self(a, b, out)
    }
}

/// Pairs both samples into a tuple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair;

impl<A: Clone, B: Clone> Combiner<A, B, (A, B)> for Pair {
    fn combine(&self, a: &A, b: &B, out: &mut (A, B)) {
        out.0.clone_from(a);
        out.1.clone_from(b);
    }
}
