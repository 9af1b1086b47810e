//! Portable backend: widen to a double-width word, compute, then split the
//! result into the low word and the overflow bit.

use super::CarryChain;

/// Double-width fallback backend.
#[derive(Clone, Copy, Debug)]
pub struct Portable;

macro_rules! impl_portable {
    ($word:ty, $double:ty) => {
        impl CarryChain<$word> for Portable {
            const NAME: &'static str = "portable";

            #[inline(always)]
            fn adc(a: $word, b: $word, carry: $word) -> ($word, $word) {
                let ret = (a as $double) + (b as $double) + (carry as $double);
                (ret as $word, (ret >> <$word>::BITS) as $word)
            }

            #[inline(always)]
            fn sbb(a: $word, b: $word, borrow: $word) -> ($word, $word) {
                let ret = (a as $double).wrapping_sub((b as $double) + (borrow as $double));
                // On underflow the high half is all ones; keep a single bit.
                (ret as $word, ((ret >> <$word>::BITS) as $word) & 1)
            }
        }
    };
}

impl_portable!(u32, u64);
impl_portable!(u64, u128);
