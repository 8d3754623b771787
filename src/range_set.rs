use crate::error::SetError;
use crate::set::BoundedSet;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned machine word usable as the backing storage of a
/// [`RangeSet`].
///
/// Sealed; implemented for `u32` and `u64`. The bit width fixes the largest
/// domain a set of that word can hold.
pub trait Word:
    Copy
    + Eq
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + sealed::Sealed
{
    /// Bit width of the word.
    const BITS: u32;
    /// The word with no bits set.
    const ZERO: Self;
    /// A word with only the bit at `pos` set.
    fn bit(pos: u32) -> Self;
    /// Number of set bits.
    fn count_ones(self) -> u32;
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn bit(pos: u32) -> Self {
                    1 << pos
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }
            }
        )+
    };
}

impl_word!(u32, u64);

/// A set over a contiguous integer domain `[min, max]`, stored in a single
/// unsigned word of type `W`.
///
/// Bit `p` of the word encodes membership of `min + p`, so every set
/// operation reduces to bitwise arithmetic on one machine word. The domain
/// is fixed at construction and can span at most [`W::BITS`] values.
///
/// All set algebra lives in the [`BoundedSet`] trait, which documents the
/// strict/lenient validation policy of each operation.
///
/// # Examples
/// ```
/// use range_bitset::{BoundedSet, RangeSet32};
///
/// let mut set = RangeSet32::new(1, 32)?;
/// set.insert(5)?;
/// set.insert(21)?;
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(5)?);
/// assert!(!set.contains(6)?);
/// # Ok::<(), range_bitset::SetError>(())
/// ```
///
/// [`W::BITS`]: Word::BITS
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct RangeSet<W: Word> {
    min: i32,
    max: i32,
    pub(crate) bits: W,
}

/// [`RangeSet`] backed by a `u32`, for domains of up to 32 values.
pub type RangeSet32 = RangeSet<u32>;

/// [`RangeSet`] backed by a `u64`, for domains of up to 64 values.
pub type RangeSet64 = RangeSet<u64>;

impl<W: Word> RangeSet<W> {
    /// Creates an empty set over the domain `min..=max`.
    ///
    /// # Errors
    /// Returns [`SetError::InvalidDomain`] if the domain holds fewer than
    /// one value or more values than `W` has bits.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::RangeSet32;
    ///
    /// assert!(RangeSet32::new(1, 32).is_ok());
    /// assert!(RangeSet32::new(1, 0).is_err());
    /// assert!(RangeSet32::new(1, 33).is_err());
    /// ```
    pub fn new(min: i32, max: i32) -> Result<Self, SetError> {
        let length = max as i64 - min as i64 + 1;
        if length < 1 || length > W::BITS as i64 {
            return Err(SetError::InvalidDomain {
                min,
                max,
                capacity: W::BITS,
            });
        }
        Ok(Self {
            min,
            max,
            bits: W::ZERO,
        })
    }

    /// Creates a set over `min..=max` holding the given initial values.
    ///
    /// Equivalent to [`new`] followed by a strict [`union_with`].
    ///
    /// # Errors
    /// Returns [`SetError::InvalidDomain`] for a bad domain and
    /// [`SetError::OutOfRange`] for an initial value outside it.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let set = RangeSet32::with_values(1, 3, &[1, 2])?;
    /// assert_eq!(set.len(), 2);
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    ///
    /// [`new`]: RangeSet::new
    /// [`union_with`]: BoundedSet::union_with
    pub fn with_values(min: i32, max: i32, values: &[i32]) -> Result<Self, SetError> {
        let mut set = Self::new(min, max)?;
        set.union_with(values)?;
        Ok(set)
    }

    /// Empty set over a domain the caller has already sized against `W`.
    pub(crate) const fn empty_in(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            bits: W::ZERO,
        }
    }

    /// Lower bound of the domain.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound of the domain.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of values the domain spans.
    #[inline]
    pub fn domain_len(&self) -> u32 {
        (self.max - self.min) as u32 + 1
    }

    /// Largest domain length a set of this word type can hold.
    #[inline]
    pub fn capacity() -> u32 {
        W::BITS
    }

    /// Single-bit mask representing `value`, or [`SetError::OutOfRange`].
    #[inline]
    pub(crate) fn bit_mask(&self, value: i32) -> Result<W, SetError> {
        if value < self.min || value > self.max {
            return Err(SetError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(W::bit((value - self.min) as u32))
    }

    /// Combined mask of `values`; fails on the first out-of-domain value.
    fn strict_mask(&self, values: &[i32]) -> Result<W, SetError> {
        let mut mask = W::ZERO;
        for &value in values {
            mask |= self.bit_mask(value)?;
        }
        Ok(mask)
    }

    /// Combined mask of `values`, skipping out-of-domain values.
    fn lenient_mask(&self, values: &[i32]) -> W {
        let mut mask = W::ZERO;
        for &value in values {
            if let Ok(bit) = self.bit_mask(value) {
                mask |= bit;
            }
        }
        mask
    }

    #[inline]
    pub(crate) fn contains_in_domain(&self, value: i32) -> bool {
        match self.bit_mask(value) {
            Ok(mask) => self.bits & mask != W::ZERO,
            Err(_) => false,
        }
    }

    /// Returns an iterator over the contained values in ascending order.
    ///
    /// The iterator scans the whole domain and tests each value, so a full
    /// pass is O(domain length) regardless of how many values are set. It
    /// is finite and fused, and a fresh one can be taken at any time.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let set = RangeSet32::with_values(1, 32, &[21, 5])?;
    /// let mut values = set.iter();
    /// assert_eq!(values.next(), Some(5));
    /// assert_eq!(values.next(), Some(21));
    /// assert_eq!(values.next(), None);
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, W> {
        Iter {
            set: self,
            offset: 0,
        }
    }

    /// Writes the contained values in ascending order into `target`,
    /// starting at `target[offset]`.
    ///
    /// # Panics
    /// The caller guarantees that `target` has room for every contained
    /// value from `offset` on; the write panics on index out of bounds if
    /// it does not.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let set = RangeSet32::with_values(1, 8, &[2, 7])?;
    /// let mut values = [0; 4];
    /// set.copy_to(&mut values, 1);
    /// assert_eq!(values, [0, 2, 7, 0]);
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    pub fn copy_to(&self, target: &mut [i32], offset: usize) {
        let mut idx = offset;
        for value in self.iter() {
            target[idx] = value;
            idx += 1;
        }
    }
}

impl<W: Word> BoundedSet<i32> for RangeSet<W> {
    type Error = SetError;

    /// Inserts `value`, returning `true` if it was newly inserted.
    ///
    /// # Errors
    /// Fails with [`SetError::OutOfRange`] if `value` is outside the
    /// domain.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let mut set = RangeSet32::new(1, 32)?;
    /// assert!(set.insert(14)?);
    /// assert!(!set.insert(14)?);
    /// assert!(set.insert(33).is_err());
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    fn insert(&mut self, value: i32) -> Result<bool, SetError> {
        let mask = self.bit_mask(value)?;
        let present = self.bits & mask != W::ZERO;
        self.bits |= mask;
        Ok(!present)
    }

    /// Removes `value`, returning `true` if it was present.
    ///
    /// # Errors
    /// Fails with [`SetError::OutOfRange`] if `value` is outside the
    /// domain.
    fn remove(&mut self, value: i32) -> Result<bool, SetError> {
        let mask = self.bit_mask(value)?;
        let present = self.bits & mask != W::ZERO;
        self.bits &= !mask;
        Ok(present)
    }

    /// Returns whether `value` is in the set.
    ///
    /// # Errors
    /// Fails with [`SetError::OutOfRange`] if `value` is outside the
    /// domain.
    fn contains(&self, value: i32) -> Result<bool, SetError> {
        let mask = self.bit_mask(value)?;
        Ok(self.bits & mask != W::ZERO)
    }

    fn clear(&mut self) {
        self.bits = W::ZERO;
    }

    /// Number of contained values, via population count of the word.
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Inserts every value of `other`, failing at the first value outside
    /// the domain. Values processed before the offending one remain
    /// inserted.
    ///
    /// # Errors
    /// [`SetError::OutOfRange`] for the first out-of-domain value.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let mut set = RangeSet32::with_values(1, 3, &[1, 2])?;
    /// set.union_with(&[2, 3])?;
    /// assert!(set.set_equals(&[1, 2, 3]));
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    fn union_with(&mut self, other: &[i32]) -> Result<(), SetError> {
        for &value in other {
            let mask = self.bit_mask(value)?;
            self.bits |= mask;
        }
        Ok(())
    }

    fn intersect_with(&mut self, other: &[i32]) {
        let mask = self.lenient_mask(other);
        self.bits &= mask;
    }

    fn except_with(&mut self, other: &[i32]) {
        let mask = self.lenient_mask(other);
        self.bits &= !mask;
    }

    /// Toggles membership of every value of `other`.
    ///
    /// # Errors
    /// [`SetError::OutOfRange`] if any value of `other` is outside the
    /// domain; the set is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let mut set = RangeSet32::with_values(1, 3, &[1, 2])?;
    /// set.symmetric_except_with(&[2, 3])?;
    /// assert!(set.set_equals(&[1, 3]));
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    fn symmetric_except_with(&mut self, other: &[i32]) -> Result<(), SetError> {
        let mask = self.strict_mask(other)?;
        self.bits ^= mask;
        Ok(())
    }

    fn overlaps(&self, other: &[i32]) -> bool {
        self.bits & self.lenient_mask(other) != W::ZERO
    }

    /// Returns whether the set holds exactly the values of `other`.
    ///
    /// A strictly built foreign mask is compared bit for bit; a domain
    /// violation while building it yields `false` rather than an error.
    ///
    /// # Examples
    /// ```
    /// use range_bitset::{BoundedSet, RangeSet32};
    ///
    /// let set = RangeSet32::with_values(1, 32, &[1, 2])?;
    /// assert!(set.set_equals(&[1, 2]));
    /// assert!(!set.set_equals(&[1, 2, 200]));
    /// # Ok::<(), range_bitset::SetError>(())
    /// ```
    fn set_equals(&self, other: &[i32]) -> bool {
        if other.len() != self.len() {
            return false;
        }
        match self.strict_mask(other) {
            Ok(mask) => mask == self.bits,
            Err(_) => false,
        }
    }

    fn is_subset_of(&self, other: &[i32]) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|value| other.contains(&value))
    }

    fn is_superset_of(&self, other: &[i32]) -> bool {
        if other.len() > self.len() {
            return false;
        }
        other.iter().all(|&value| self.contains_in_domain(value))
    }
}

impl<'set, W: Word> IntoIterator for &'set RangeSet<W> {
    type Item = i32;
    type IntoIter = Iter<'set, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Word> Debug for RangeSet<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "RangeSet({}..={}) ", self.min, self.max)?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the values contained in a [`RangeSet`], ascending.
///
/// Returned by [`RangeSet::iter()`].
#[derive(Clone, Copy)]
pub struct Iter<'set, W: Word> {
    set: &'set RangeSet<W>,
    offset: u32,
}

impl<W: Word> Iterator for Iter<'_, W> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.set.domain_len() {
            let offset = self.offset;
            self.offset += 1;
            if self.set.bits & W::bit(offset) != W::ZERO {
                return Some(self.set.min + offset as i32);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.set.domain_len() - self.offset) as usize;
        (0, Some(remaining))
    }
}

impl<W: Word> FusedIterator for Iter<'_, W> {}
