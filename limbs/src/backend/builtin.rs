//! Backend built on the integer `overflowing_*` operations, which the
//! compiler lowers to its add-with-carry / subtract-with-borrow builtins.

use super::CarryChain;

/// Compiler carry-chain builtin backend.
#[derive(Clone, Copy, Debug)]
pub struct Builtin;

macro_rules! impl_builtin {
    ($word:ty) => {
        impl CarryChain<$word> for Builtin {
            const NAME: &'static str = "builtin";

            #[inline(always)]
            fn adc(a: $word, b: $word, carry: $word) -> ($word, $word) {
                let (ret, c0) = a.overflowing_add(b);
                let (ret, c1) = ret.overflowing_add(carry);
                // At most one of the two additions can overflow.
                (ret, (c0 | c1) as $word)
            }

            #[inline(always)]
            fn sbb(a: $word, b: $word, borrow: $word) -> ($word, $word) {
                let (ret, b0) = a.overflowing_sub(b);
                let (ret, b1) = ret.overflowing_sub(borrow);
                (ret, (b0 | b1) as $word)
            }
        }
    };
}

impl_builtin!(u32);
impl_builtin!(u64);
