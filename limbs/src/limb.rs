//! Limb type and word-level carry/borrow primitives.

use crate::backend::{CarryChain, Selected};
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(target_pointer_width = "32", feature = "force-32-bit"))] {
        /// Unsigned machine word holding one limb of a big integer.
        pub type Limb = u32;
    } else if #[cfg(target_pointer_width = "64")] {
        /// Unsigned machine word holding one limb of a big integer.
        pub type Limb = u64;
    } else {
        compile_error!("unsupported target pointer width: limbs must be 32 or 64 bits");
    }
}

/// Carry or borrow bit. Always exactly `0` or `1`.
pub type Carry = Limb;

/// Size of a [`Limb`] in bits.
pub const LIMB_BITS: usize = Limb::BITS as usize;

/// Size of a [`Limb`] in bytes.
pub const LIMB_BYTES: usize = LIMB_BITS / 8;

/// Computes `a + b + carry_in`, returning the result along with the carry out.
///
/// `carry_in` must be `0` or `1`.
#[inline(always)]
pub fn adc(a: Limb, b: Limb, carry_in: Carry) -> (Limb, Carry) {
    dev_assert_secret!(carry_in == 0 || carry_in == 1);
    let (ret, carry) = Selected::adc(a, b, carry_in);
    dev_assert_secret!(carry == 0 || carry == 1);
    (ret, carry)
}

/// Computes `a - b - borrow_in`, returning the result along with the borrow out.
///
/// `borrow_in` must be `0` or `1`.
#[inline(always)]
pub fn sbb(a: Limb, b: Limb, borrow_in: Carry) -> (Limb, Carry) {
    dev_assert_secret!(borrow_in == 0 || borrow_in == 1);
    let (ret, borrow) = Selected::sbb(a, b, borrow_in);
    dev_assert_secret!(borrow == 0 || borrow == 1);
    (ret, borrow)
}

/// Computes `a + b`, returning the result along with the carry.
#[inline(always)]
pub fn add(a: Limb, b: Limb) -> (Limb, Carry) {
    adc(a, b, 0)
}

/// Computes `a - b`, returning the result along with the borrow.
#[inline(always)]
pub fn sub(a: Limb, b: Limb) -> (Limb, Carry) {
    sbb(a, b, 0)
}

#[cfg(test)]
mod tests {
    use super::{LIMB_BITS, LIMB_BYTES, Limb, adc, add, sbb, sub};

    #[test]
    fn sizes() {
        assert_eq!(LIMB_BITS, LIMB_BYTES * 8);
        assert!(LIMB_BITS == 32 || LIMB_BITS == 64);
    }

    #[test]
    fn add_wraps_with_carry() {
        assert_eq!(add(Limb::MAX, 1), (0, 1));
        assert_eq!(add(Limb::MAX, 0), (Limb::MAX, 0));
        assert_eq!(adc(Limb::MAX, Limb::MAX, 1), (Limb::MAX, 1));
        assert_eq!(adc(0, 0, 1), (1, 0));
    }

    #[test]
    fn sub_wraps_with_borrow() {
        assert_eq!(sub(0, 1), (Limb::MAX, 1));
        assert_eq!(sub(1, 1), (0, 0));
        assert_eq!(sbb(0, Limb::MAX, 1), (0, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "secret invariant violated")]
    fn adc_rejects_non_bit_carry() {
        let _ = adc(1, 2, 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "secret invariant violated")]
    fn sbb_rejects_non_bit_borrow() {
        let _ = sbb(1, 2, 3);
    }
}
