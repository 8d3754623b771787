//! A minimal, fixed-range integer set backed by a single machine word.
//! `no_std`, no heap / `alloc`, no `unsafe` — just `core`.
//!
//! [`RangeSet`] is the main struct in this library: a set over a contiguous
//! integer domain `[min, max]` chosen at construction, where bit `p` of one
//! unsigned word encodes membership of `min + p`. Every set-algebra
//! operation reduces to bitwise arithmetic on that word.
//!
//! # Examples
//! ```
//! use range_bitset::{BoundedSet, RangeSet32};
//!
//! let mut set = RangeSet32::new(1, 32)?;
//! set.insert(5)?;
//! set.insert(21)?;
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(5)?);
//! assert!(!set.contains(6)?);
//! # Ok::<(), range_bitset::SetError>(())
//! ```
//!
//! # Use Cases
//!
//! - Dense sets over small, known integer ranges (ids, codes, slots)
//! - Applications that need a compact, stack-only set with no dynamic
//!   allocation
//! - Embedded and timing-sensitive code where allocation unpredictability
//!   must be avoided
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - One generic implementation over the backing word ([`RangeSet32`],
//!   [`RangeSet64`])
//! - The full set-algebra surface behind the [`BoundedSet`] trait:
//!   insert/remove/contains, union, intersection, difference, symmetric
//!   difference, overlap, equality and the subset/superset family
//! - A deliberate split between strict operations (out-of-domain input is
//!   an error) and lenient ones (out-of-domain input is ignored), spelled
//!   out per operation on [`BoundedSet`]
//! - Ascending iteration ([`RangeSet::iter`]) and bulk copy-out
//!   ([`RangeSet::copy_to`])
//! - [`AlphabetSet`]: a case-insensitive set of the 26 letters built on
//!   [`RangeSet32`]
//!
//! Instances are plain `Copy` data with no interior mutability; share one
//! across threads behind external synchronization if you must mutate it
//! concurrently.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(test)]
extern crate std;

mod alphabet;
mod error;
mod range_set;
mod set;

pub use alphabet::{AlphabetSet, Letters};
pub use error::{NotALetterError, SetError};
pub use range_set::{Iter, RangeSet, RangeSet32, RangeSet64, Word};
pub use set::BoundedSet;
