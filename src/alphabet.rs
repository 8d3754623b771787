use crate::error::NotALetterError;
use crate::range_set::{Iter, RangeSet32};
use crate::set::BoundedSet;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

const MIN_LETTER: i32 = 'a' as i32;
const MAX_LETTER: i32 = 'z' as i32;

/// A case-insensitive set of the 26 letters, backed by a [`RangeSet32`]
/// over the lowercase letter codes.
///
/// Every operation normalizes its characters to lowercase before
/// delegating, so `'A'` and `'a'` name the same element. Characters that
/// are not letters even after normalization are out of domain and follow
/// the strict/lenient policies of [`BoundedSet`], reported as
/// [`NotALetterError`].
///
/// # Examples
/// ```
/// use range_bitset::{AlphabetSet, BoundedSet};
///
/// let mut letters = AlphabetSet::new();
/// letters.insert('A')?;
/// assert!(letters.contains('a')?);
/// assert!(letters.insert('@').is_err());
/// # Ok::<(), range_bitset::NotALetterError>(())
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct AlphabetSet {
    letters: RangeSet32,
}

impl Default for AlphabetSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabetSet {
    /// Creates an empty letter set.
    pub const fn new() -> Self {
        Self {
            letters: RangeSet32::empty_in(MIN_LETTER, MAX_LETTER),
        }
    }

    /// Lowercase letter code of `ch`; out of domain for non-letters.
    #[inline]
    fn code(ch: char) -> i32 {
        ch.to_ascii_lowercase() as i32
    }

    fn strict_mask(&self, other: &[char]) -> Result<u32, NotALetterError> {
        let mut mask = 0u32;
        for &ch in other {
            mask |= self
                .letters
                .bit_mask(Self::code(ch))
                .map_err(|_| NotALetterError(ch))?;
        }
        Ok(mask)
    }

    fn lenient_mask(&self, other: &[char]) -> u32 {
        let mut mask = 0u32;
        for &ch in other {
            if let Ok(bit) = self.letters.bit_mask(Self::code(ch)) {
                mask |= bit;
            }
        }
        mask
    }

    /// Returns an iterator over the contained letters, `'a'` to `'z'`.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{AlphabetSet, BoundedSet};
    ///
    /// let mut letters = AlphabetSet::new();
    /// letters.union_with(&['Z', 'b'])?;
    /// let mut iter = letters.iter();
    /// assert_eq!(iter.next(), Some('b'));
    /// assert_eq!(iter.next(), Some('z'));
    /// assert_eq!(iter.next(), None);
    /// # Ok::<(), range_bitset::NotALetterError>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Letters<'_> {
        Letters {
            codes: self.letters.iter(),
        }
    }

    /// Writes the contained letters in ascending order into `target`,
    /// starting at `target[offset]`.
    ///
    /// # Panics
    /// The caller guarantees that `target` has room for every contained
    /// letter from `offset` on; the write panics on index out of bounds if
    /// it does not.
    pub fn copy_to(&self, target: &mut [char], offset: usize) {
        let mut idx = offset;
        for letter in self.iter() {
            target[idx] = letter;
            idx += 1;
        }
    }
}

impl BoundedSet<char> for AlphabetSet {
    type Error = NotALetterError;

    fn insert(&mut self, ch: char) -> Result<bool, NotALetterError> {
        self.letters
            .insert(Self::code(ch))
            .map_err(|_| NotALetterError(ch))
    }

    fn remove(&mut self, ch: char) -> Result<bool, NotALetterError> {
        self.letters
            .remove(Self::code(ch))
            .map_err(|_| NotALetterError(ch))
    }

    fn contains(&self, ch: char) -> Result<bool, NotALetterError> {
        self.letters
            .contains(Self::code(ch))
            .map_err(|_| NotALetterError(ch))
    }

    fn clear(&mut self) {
        self.letters.clear();
    }

    fn len(&self) -> usize {
        self.letters.len()
    }

    fn union_with(&mut self, other: &[char]) -> Result<(), NotALetterError> {
        for &ch in other {
            self.insert(ch)?;
        }
        Ok(())
    }

    fn intersect_with(&mut self, other: &[char]) {
        let mask = self.lenient_mask(other);
        self.letters.bits &= mask;
    }

    fn except_with(&mut self, other: &[char]) {
        let mask = self.lenient_mask(other);
        self.letters.bits &= !mask;
    }

    fn symmetric_except_with(&mut self, other: &[char]) -> Result<(), NotALetterError> {
        let mask = self.strict_mask(other)?;
        self.letters.bits ^= mask;
        Ok(())
    }

    fn overlaps(&self, other: &[char]) -> bool {
        self.letters.bits & self.lenient_mask(other) != 0
    }

    fn set_equals(&self, other: &[char]) -> bool {
        if other.len() != self.len() {
            return false;
        }
        match self.strict_mask(other) {
            Ok(mask) => mask == self.letters.bits,
            Err(_) => false,
        }
    }

    fn is_subset_of(&self, other: &[char]) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter()
            .all(|letter| other.iter().any(|&ch| ch.to_ascii_lowercase() == letter))
    }

    fn is_superset_of(&self, other: &[char]) -> bool {
        if other.len() > self.len() {
            return false;
        }
        other
            .iter()
            .all(|&ch| self.letters.contains_in_domain(Self::code(ch)))
    }
}

impl<'set> IntoIterator for &'set AlphabetSet {
    type Item = char;
    type IntoIter = Letters<'set>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for AlphabetSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "AlphabetSet ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the letters contained in an [`AlphabetSet`], ascending.
///
/// Returned by [`AlphabetSet::iter()`].
#[derive(Clone, Copy)]
pub struct Letters<'set> {
    codes: Iter<'set, u32>,
}

impl Iterator for Letters<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.codes.next().map(|code| code as u8 as char)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.codes.size_hint()
    }
}

impl FusedIterator for Letters<'_> {}
