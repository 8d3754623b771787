use thiserror::Error;

/// Errors reported by [`RangeSet`] operations.
///
/// Strict operations surface these unchanged; lenient operations never
/// produce them (see [`BoundedSet`] for the per-operation policy).
///
/// [`RangeSet`]: crate::RangeSet
/// [`BoundedSet`]: crate::BoundedSet
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// The requested domain is empty or wider than the backing word.
    #[error("domain {min}..={max} must span between 1 and {capacity} values")]
    InvalidDomain {
        /// Lower bound that was requested.
        min: i32,
        /// Upper bound that was requested.
        max: i32,
        /// Bit width of the backing word.
        capacity: u32,
    },
    /// A value fell outside the set's domain during a strict operation.
    #[error("value {value} not in range {min} - {max}")]
    OutOfRange {
        /// The offending value.
        value: i32,
        /// Lower bound of the domain.
        min: i32,
        /// Upper bound of the domain.
        max: i32,
    },
}

/// Error returned by [`AlphabetSet`] when a character has no place in the
/// 26-letter domain, carrying the offending character for diagnostics.
///
/// [`AlphabetSet`]: crate::AlphabetSet
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("`{0}` is not a letter")]
pub struct NotALetterError(
    /// The character that could not be mapped to a letter.
    pub char,
);
