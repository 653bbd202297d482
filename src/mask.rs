//! Row and column selection masks.

/// A selection of `N` parent rows (or columns).
///
/// Views and the determinant engine address their parent through a pair of these. The `i`-th
/// element of a view corresponds to the `i`-th *set* entry of the mask, which is found by a
/// linear scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Mask<const N: usize>([bool; N]);

impl<const N: usize> Mask<N> {
    /// A mask selecting every entry.
    pub(crate) const FULL: Self = Self([true; N]);

    /// Number of selected entries.
    pub(crate) fn count(&self) -> usize {
        self.0.iter().filter(|&&used| used).count()
    }

    /// Returns the parent index of the `i`-th selected entry.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `i + 1` entries are selected.
    #[inline]
    pub(crate) fn nth(&self, mut i: usize) -> usize {
        for (index, &used) in self.0.iter().enumerate() {
            if used {
                if i == 0 {
                    return index;
                }
                i -= 1;
            }
        }
        panic!(
            "index out of bounds: the selection has {} entries but the index is {}",
            self.count(),
            self.count() + i
        );
    }

    /// Narrows the selection to the `len` selected entries starting at the `start`-th one.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past the end of the current selection.
    pub(crate) fn range(&self, start: usize, len: usize) -> Self {
        let count = self.count();
        assert!(
            start + len <= count,
            "range {}..{} out of bounds for selection of {} entries",
            start,
            start + len,
            count,
        );

        let mut out = Self([false; N]);
        let mut seen = 0;
        for (index, &used) in self.0.iter().enumerate() {
            if used {
                if seen >= start && seen < start + len {
                    out.0[index] = true;
                }
                seen += 1;
            }
        }
        out
    }

    /// Removes the `skip`-th selected entry from the selection.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `skip + 1` entries are selected.
    pub(crate) fn without(&self, skip: usize) -> Self {
        let mut out = *self;
        out.0[self.nth(skip)] = false;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth() {
        let mask = Mask([false, true, false, true, true]);
        assert_eq!(mask.count(), 3);
        assert_eq!(mask.nth(0), 1);
        assert_eq!(mask.nth(1), 3);
        assert_eq!(mask.nth(2), 4);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn nth_out_of_bounds() {
        Mask([true, false, true]).nth(2);
    }

    #[test]
    fn range() {
        let full = Mask::<4>::FULL;
        assert_eq!(full.range(1, 2), Mask([false, true, true, false]));
        assert_eq!(full.range(0, 4), full);

        let sparse = Mask([true, false, true, true]);
        assert_eq!(sparse.range(1, 2), Mask([false, false, true, true]));
        assert_eq!(sparse.range(0, 1), Mask([true, false, false, false]));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn range_out_of_bounds() {
        Mask::<3>::FULL.range(2, 2);
    }

    #[test]
    fn without() {
        let full = Mask::<3>::FULL;
        assert_eq!(full.without(1), Mask([true, false, true]));
        assert_eq!(full.without(1).without(1), Mask([true, false, false]));
        assert_eq!(full.without(0).count(), 2);
    }
}
