/// Set algebra over a fixed, bounded domain of elements.
///
/// Implementors keep a closed domain chosen at construction time; elements
/// outside it are handled according to one of two validation policies, and
/// the split between them is part of the contract:
///
/// - **Strict** operations ([`insert`], [`remove`], [`contains`],
///   [`union_with`], [`symmetric_except_with`]) report the first
///   out-of-domain element as an error.
/// - **Lenient** operations ([`intersect_with`], [`except_with`],
///   [`overlaps`] and the subset/superset family) treat out-of-domain
///   foreign elements as absent and never fail.
/// - [`set_equals`] builds its comparison strictly but converts a domain
///   violation into a `false` result, so equality is total over arbitrary
///   foreign collections.
///
/// Foreign collections are slices; their `len()` counts duplicates, which
/// the size short-circuits of the subset/superset family rely on.
///
/// [`insert`]: BoundedSet::insert
/// [`remove`]: BoundedSet::remove
/// [`contains`]: BoundedSet::contains
/// [`union_with`]: BoundedSet::union_with
/// [`symmetric_except_with`]: BoundedSet::symmetric_except_with
/// [`intersect_with`]: BoundedSet::intersect_with
/// [`except_with`]: BoundedSet::except_with
/// [`overlaps`]: BoundedSet::overlaps
/// [`set_equals`]: BoundedSet::set_equals
pub trait BoundedSet<T: Copy> {
    /// Error produced when a strict operation meets an out-of-domain element.
    type Error;

    /// Inserts `item`, returning `true` if it was not already present.
    ///
    /// # Errors
    /// Fails if `item` is outside the domain.
    fn insert(&mut self, item: T) -> Result<bool, Self::Error>;

    /// Removes `item`, returning `true` if it was present.
    ///
    /// # Errors
    /// Fails if `item` is outside the domain.
    fn remove(&mut self, item: T) -> Result<bool, Self::Error>;

    /// Returns whether `item` is in the set.
    ///
    /// # Errors
    /// Fails if `item` is outside the domain.
    fn contains(&self, item: T) -> Result<bool, Self::Error>;

    /// Removes every element. Never fails.
    fn clear(&mut self);

    /// Number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds every element of `other` to the set, one element at a time.
    ///
    /// # Errors
    /// **Strict**: fails at the first out-of-domain element. Elements
    /// processed before the offending one remain inserted.
    fn union_with(&mut self, other: &[T]) -> Result<(), Self::Error>;

    /// Keeps only the elements that also appear in `other`.
    ///
    /// **Lenient**: out-of-domain elements of `other` are ignored.
    fn intersect_with(&mut self, other: &[T]);

    /// Removes the elements that appear in `other`.
    ///
    /// **Lenient**: out-of-domain elements of `other` are ignored.
    fn except_with(&mut self, other: &[T]);

    /// Toggles the elements that appear in `other`.
    ///
    /// # Errors
    /// **Strict**: fails if any element of `other` is outside the domain.
    /// The whole foreign mask is built before mutating, so a failed call
    /// leaves the set untouched.
    fn symmetric_except_with(&mut self, other: &[T]) -> Result<(), Self::Error>;

    /// Returns whether the set shares at least one element with `other`.
    ///
    /// **Lenient**: out-of-domain elements of `other` are ignored.
    fn overlaps(&self, other: &[T]) -> bool;

    /// Returns whether the set holds exactly the elements of `other`.
    ///
    /// An out-of-domain element in `other` makes the result `false`; it is
    /// never an error.
    fn set_equals(&self, other: &[T]) -> bool;

    /// Returns whether every element of the set appears in `other`.
    ///
    /// Short-circuits `false` when the set holds more elements than
    /// `other`.
    fn is_subset_of(&self, other: &[T]) -> bool;

    /// Returns whether the set contains every element of `other`.
    ///
    /// Short-circuits `false` when `other` holds more elements than the
    /// set. Out-of-domain elements of `other` test as not contained.
    fn is_superset_of(&self, other: &[T]) -> bool;

    /// [`is_subset_of`] with strictly fewer elements than `other`.
    ///
    /// [`is_subset_of`]: BoundedSet::is_subset_of
    fn is_proper_subset_of(&self, other: &[T]) -> bool {
        self.is_subset_of(other) && self.len() < other.len()
    }

    /// [`is_superset_of`] with strictly more elements than `other`.
    ///
    /// [`is_superset_of`]: BoundedSet::is_superset_of
    fn is_proper_superset_of(&self, other: &[T]) -> bool {
        self.is_superset_of(other) && self.len() > other.len()
    }
}
