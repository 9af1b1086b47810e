//! Backend built on the x86 `ADC`/`SBB` intrinsics from `core::arch`.
//!
//! Some optimizers have miscompiled `_addcarry_u32` when the carry output was
//! zero-initialized right before the call, emitting a flag-clobbering `xor`
//! between the previous `add` and the `adc`. The output word is therefore
//! always initialized before the carry is computed, and the intrinsic's carry
//! is returned directly instead of being assigned into a cleared variable.

#![allow(unsafe_code)]

use super::CarryChain;

#[cfg(target_arch = "x86")]
use core::arch::x86::{_addcarry_u32, _subborrow_u32};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_addcarry_u32, _addcarry_u64, _subborrow_u32, _subborrow_u64};

/// Platform carry intrinsic backend.
#[derive(Clone, Copy, Debug)]
pub struct Intrinsics;

macro_rules! impl_intrinsics {
    ($word:ty, $addcarry:ident, $subborrow:ident) => {
        impl CarryChain<$word> for Intrinsics {
            const NAME: &'static str = "intrinsics";

            #[inline(always)]
            #[allow(unused_unsafe)]
            fn adc(a: $word, b: $word, carry: $word) -> ($word, $word) {
                let mut ret: $word = 0;
                // SAFETY: the intrinsic only requires baseline x86, which the
                // enclosing `cfg` guarantees, and writes through a valid `&mut`.
                let carry = unsafe { $addcarry(carry as u8, a, b, &mut ret) };
                (ret, carry as $word)
            }

            #[inline(always)]
            #[allow(unused_unsafe)]
            fn sbb(a: $word, b: $word, borrow: $word) -> ($word, $word) {
                let mut ret: $word = 0;
                // SAFETY: see `adc`.
                let borrow = unsafe { $subborrow(borrow as u8, a, b, &mut ret) };
                (ret, borrow as $word)
            }
        }
    };
}

impl_intrinsics!(u32, _addcarry_u32, _subborrow_u32);

#[cfg(target_arch = "x86_64")]
impl_intrinsics!(u64, _addcarry_u64, _subborrow_u64);
