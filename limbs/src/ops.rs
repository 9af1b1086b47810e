//! Array-level arithmetic over little-endian limb slices.
//!
//! Index `0` holds the least significant limb. The number of limbs is the
//! length of the output slice and is public; every other slice argument must
//! have the same length. Limb values may be secret.

use crate::limb::{Carry, Limb, adc, add, sbb, sub};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Computes `r = a + b`, returning the carry out of the most significant limb.
///
/// # Panics
/// If the slices are empty or have different lengths.
#[inline]
pub fn limbs_add(r: &mut [Limb], a: &[Limb], b: &[Limb]) -> Carry {
    let num_limbs = r.len();
    debug_assert_nonsecret!(num_limbs >= 1);
    assert_eq!(a.len(), num_limbs);
    assert_eq!(b.len(), num_limbs);

    let (r0, mut carry) = add(a[0], b[0]);
    r[0] = r0;
    for i in 1..num_limbs {
        (r[i], carry) = adc(a[i], b[i], carry);
    }
    carry
}

/// Computes `r = a - b`, returning the borrow out of the most significant limb.
///
/// The borrow is `1` iff `a < b` as integers.
///
/// # Panics
/// If the slices are empty or have different lengths.
#[inline]
pub fn limbs_sub(r: &mut [Limb], a: &[Limb], b: &[Limb]) -> Carry {
    let num_limbs = r.len();
    debug_assert_nonsecret!(num_limbs >= 1);
    assert_eq!(a.len(), num_limbs);
    assert_eq!(b.len(), num_limbs);

    let (r0, mut borrow) = sub(a[0], b[0]);
    r[0] = r0;
    for i in 1..num_limbs {
        (r[i], borrow) = sbb(a[i], b[i], borrow);
    }
    borrow
}

/// In-place [`limbs_add`]: `r += b`, returning the carry.
///
/// Addition commutes, so this also serves the case where the output
/// overwrites the second operand.
#[inline]
pub fn limbs_add_assign(r: &mut [Limb], b: &[Limb]) -> Carry {
    let num_limbs = r.len();
    debug_assert_nonsecret!(num_limbs >= 1);
    assert_eq!(b.len(), num_limbs);

    let (r0, mut carry) = add(r[0], b[0]);
    r[0] = r0;
    for i in 1..num_limbs {
        (r[i], carry) = adc(r[i], b[i], carry);
    }
    carry
}

/// In-place [`limbs_sub`]: `r -= b`, returning the borrow.
#[inline]
pub fn limbs_sub_assign(r: &mut [Limb], b: &[Limb]) -> Carry {
    let num_limbs = r.len();
    debug_assert_nonsecret!(num_limbs >= 1);
    assert_eq!(b.len(), num_limbs);

    let (r0, mut borrow) = sub(r[0], b[0]);
    r[0] = r0;
    for i in 1..num_limbs {
        (r[i], borrow) = sbb(r[i], b[i], borrow);
    }
    borrow
}

/// Reverse in-place subtraction: `r = a - r`, returning the borrow.
#[inline]
pub fn limbs_sub_from(r: &mut [Limb], a: &[Limb]) -> Carry {
    let num_limbs = r.len();
    debug_assert_nonsecret!(num_limbs >= 1);
    assert_eq!(a.len(), num_limbs);

    let (r0, mut borrow) = sub(a[0], r[0]);
    r[0] = r0;
    for i in 1..num_limbs {
        (r[i], borrow) = sbb(a[i], r[i], borrow);
    }
    borrow
}

/// Copies `a` into `r`.
///
/// # Panics
/// If the slices have different lengths.
#[inline]
pub fn limbs_copy(r: &mut [Limb], a: &[Limb]) {
    assert_eq!(a.len(), r.len());
    for (r, a) in r.iter_mut().zip(a) {
        *r = *a;
    }
}

/// Sets every limb of `r` to zero.
///
/// The writes are not elided by the optimizer, so this is also suitable for
/// wiping secrets.
#[inline]
pub fn limbs_zero(r: &mut [Limb]) {
    r.zeroize();
}

/// Returns a truthy [`Choice`] iff every limb of `a` is zero.
pub fn limbs_are_zero(a: &[Limb]) -> Choice {
    let acc = a.iter().fold(0, |acc, &limb| acc | limb);
    acc.ct_eq(&0)
}

/// Returns a truthy [`Choice`] iff `a == b`.
///
/// # Panics
/// If the slices have different lengths.
pub fn limbs_equal(a: &[Limb], b: &[Limb]) -> Choice {
    assert_eq!(a.len(), b.len());
    a.ct_eq(b)
}

/// Returns a truthy [`Choice`] iff `a < b` as integers.
///
/// Runs the borrow chain of `a - b` without storing the difference.
///
/// # Panics
/// If the slices are empty or have different lengths.
pub fn limbs_less_than(a: &[Limb], b: &[Limb]) -> Choice {
    debug_assert_nonsecret!(!a.is_empty());
    assert_eq!(a.len(), b.len());

    let mut borrow = 0;
    for (&a, &b) in a.iter().zip(b) {
        (_, borrow) = sbb(a, b, borrow);
    }
    Choice::from(borrow as u8)
}

/// Computes `if r >= m { r -= m }` in constant time.
///
/// # Panics
/// If the slices are empty or have different lengths.
pub fn limbs_reduce_once(r: &mut [Limb], m: &[Limb]) {
    let lt = limbs_less_than(r, m);

    // All ones when `r >= m`, zero otherwise.
    let mask = Limb::from(lt.unwrap_u8()).wrapping_sub(1);

    let mut borrow = 0;
    for (r, &m) in r.iter_mut().zip(m) {
        (*r, borrow) = sbb(*r, m & mask, borrow);
    }
}
