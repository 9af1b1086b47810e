//! Constant-time table lookup.
//!
//! A table is a flattened slice of `num_entries` limb arrays of `num_limbs`
//! limbs each: entry `e` occupies `table[e * num_limbs..(e + 1) * num_limbs]`.
//! The index being looked up is secret. Every limb of every entry is read
//! exactly once whichever index matches.

use crate::{
    Error, Limb, Result,
    ct::{CtPrimitives, SubtleCt},
    ops::limbs_zero,
};

/// Sets `r` to entry `index` of `table` in constant time.
///
/// `num_limbs` is `r.len()`. An `index` outside `0..num_entries` leaves `r`
/// zeroed.
///
/// # Panics
/// If `r` is empty or `table.len() != r.len() * num_entries`.
#[inline]
pub fn limbs_select(r: &mut [Limb], table: &[Limb], num_entries: usize, index: usize) {
    limbs_select_with(&SubtleCt, r, table, num_entries, index)
}

/// [`limbs_select`] using the given constant-time primitives.
pub fn limbs_select_with<C>(
    ct: &C,
    r: &mut [Limb],
    table: &[Limb],
    num_entries: usize,
    index: usize,
) where
    C: CtPrimitives + ?Sized,
{
    let num_limbs = r.len();
    debug_assert_nonsecret!(num_limbs >= 1);
    assert_eq!(table.len(), num_limbs * num_entries);
    dev_assert_secret!(index < num_entries);

    limbs_zero(r);

    for (e, entry) in table.chunks_exact(num_limbs).enumerate() {
        let equal = ct.eq_mask(index, e);
        for (r, &t) in r.iter_mut().zip(entry) {
            *r = ct.select(*r, t, equal);
        }
    }
}

/// Validated view over a flattened selection table.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    limbs: &'a [Limb],
    num_limbs: usize,
}

impl<'a> Table<'a> {
    /// Create a table of entries `num_limbs` wide.
    ///
    /// Returns an error if `num_limbs` is zero, or if `limbs` is empty or not
    /// a whole number of entries.
    pub fn new(limbs: &'a [Limb], num_limbs: usize) -> Result<Self> {
        if num_limbs == 0 || limbs.is_empty() || limbs.len() % num_limbs != 0 {
            return Err(Error);
        }

        Ok(Self { limbs, num_limbs })
    }

    /// Number of limbs in each entry.
    pub fn num_limbs(&self) -> usize {
        self.num_limbs
    }

    /// Number of entries.
    pub fn num_entries(&self) -> usize {
        self.limbs.len() / self.num_limbs
    }

    /// Copy entry `index` into `r` in constant time.
    ///
    /// # Panics
    /// If `r.len() != self.num_limbs()`.
    pub fn select(&self, r: &mut [Limb], index: usize) {
        assert_eq!(r.len(), self.num_limbs);
        limbs_select(r, self.limbs, self.num_entries(), index);
    }
}

#[cfg(test)]
mod tests {
    use super::{Table, limbs_select, limbs_select_with};
    use crate::{Limb, ct::CtPrimitives};
    use core::cell::Cell;
    use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

    /// Counts calls into the constant-time primitives.
    #[derive(Default)]
    struct Counting {
        eq: Cell<usize>,
        select: Cell<usize>,
    }

    impl CtPrimitives for Counting {
        fn eq_mask(&self, a: usize, b: usize) -> Choice {
            self.eq.set(self.eq.get() + 1);
            a.ct_eq(&b)
        }

        fn select(&self, a: Limb, b: Limb, choice: Choice) -> Limb {
            self.select.set(self.select.get() + 1);
            Limb::conditional_select(&a, &b, choice)
        }
    }

    #[test]
    fn single_limb_entries() {
        let table = [10, 20, 30, 40];
        let mut r = [0];
        limbs_select(&mut r, &table, 4, 2);
        assert_eq!(r, [30]);
    }

    #[test]
    fn every_index() {
        let table: [Limb; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, Limb::MAX];
        for index in 0..4 {
            let mut r = [Limb::MAX; 3];
            limbs_select(&mut r, &table, 4, index);
            assert_eq!(r, table[index * 3..index * 3 + 3]);
        }
    }

    #[test]
    fn operation_count_is_independent_of_index() {
        let table: [Limb; 15] = core::array::from_fn(|i| i as Limb);
        let (num_limbs, num_entries) = (3, 5);

        for index in 0..num_entries {
            let ct = Counting::default();
            let mut r = [0; 3];
            limbs_select_with(&ct, &mut r, &table, num_entries, index);
            assert_eq!(ct.eq.get(), num_entries);
            assert_eq!(ct.select.get(), num_entries * num_limbs);
            assert_eq!(r, table[index * num_limbs..(index + 1) * num_limbs]);
        }
    }

    #[test]
    #[cfg(not(any(debug_assertions, feature = "dev")))]
    fn out_of_range_index_yields_zero() {
        let mut r = [7];
        limbs_select(&mut r, &[1, 2], 2, 2);
        assert_eq!(r, [0]);
    }

    #[test]
    #[should_panic]
    fn table_size_mismatch_panics() {
        let mut r = [0; 2];
        limbs_select(&mut r, &[1, 2, 3], 2, 0);
    }

    #[test]
    fn table_view() {
        let limbs = [1, 2, 3, 4, 5, 6];
        let table = Table::new(&limbs, 2).unwrap();
        assert_eq!(table.num_limbs(), 2);
        assert_eq!(table.num_entries(), 3);

        let mut r = [0; 2];
        table.select(&mut r, 1);
        assert_eq!(r, [3, 4]);
    }

    #[test]
    fn table_rejects_bad_shapes() {
        assert!(Table::new(&[1, 2, 3], 0).is_err());
        assert!(Table::new(&[], 2).is_err());
        assert!(Table::new(&[1, 2, 3], 2).is_err());
    }
}
