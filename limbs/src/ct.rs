//! Constant-time word primitives consumed by the table selection code.

use crate::Limb;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time equality and selection on single words.
///
/// Implementations must execute without branches or memory accesses that
/// depend on their arguments.
pub trait CtPrimitives {
    /// Returns a truthy [`Choice`] iff `a == b`.
    fn eq_mask(&self, a: usize, b: usize) -> Choice;

    /// Returns `b` if `choice` is truthy, otherwise `a`.
    fn select(&self, a: Limb, b: Limb, choice: Choice) -> Limb;
}

/// [`CtPrimitives`] implemented with the `subtle` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubtleCt;

impl CtPrimitives for SubtleCt {
    #[inline]
    fn eq_mask(&self, a: usize, b: usize) -> Choice {
        a.ct_eq(&b)
    }

    #[inline]
    fn select(&self, a: Limb, b: Limb, choice: Choice) -> Limb {
        Limb::conditional_select(&a, &b, choice)
    }
}
