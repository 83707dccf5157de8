//! Degree type and helpers for binomial trees.
//!
//! # Why u8?
//!
//! A binomial tree of degree `d` holds exactly `2ᵈ` elements, so the largest
//! degree in a forest is `⌊log₂ n⌋`. Even `2⁶⁴` elements only need degree 64,
//! and `u8` goes up to 255.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics on overflow (impossible for a valid forest) and
//! [`ensure_same_degree`] turns an unequal pair into
//! [`QueueError::DegreeMismatch`].

use crate::traits::QueueError;

/// Type alias for binomial tree degree.
pub type Degree = u8;

/// Maximum valid degree value.
pub const MAX_DEGREE: Degree = u8::MAX;

/// Safely increment a degree, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`, which would require more than 2²⁵⁵ elements.
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::degree::{checked_increment, Degree};
///
/// let degree: Degree = 5;
/// assert_eq!(checked_increment(degree), 6);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree.checked_add(1).expect(
        "degree overflow: a binomial forest never exceeds degree log₂(n) \
         and u8::MAX (255) covers up to 2²⁵⁵ elements",
    )
}

/// Converts a slot position into a degree.
///
/// # Panics
///
/// Panics if `position` exceeds [`MAX_DEGREE`].
#[inline]
pub fn from_position(position: usize) -> Degree {
    Degree::try_from(position).expect("degree overflow: slot position exceeds u8::MAX")
}

/// Fails with [`QueueError::DegreeMismatch`] unless both degrees are equal.
///
/// # Example
///
/// ```rust
/// use rust_mergeable_heaps::degree::ensure_same_degree;
/// use rust_mergeable_heaps::QueueError;
///
/// assert!(ensure_same_degree(3, 3).is_ok());
/// assert_eq!(
///     ensure_same_degree(3, 2),
///     Err(QueueError::DegreeMismatch { expected: 3, found: 2 })
/// );
/// ```
#[inline]
pub fn ensure_same_degree(expected: Degree, found: Degree) -> Result<(), QueueError> {
    if expected == found {
        Ok(())
    } else {
        Err(QueueError::DegreeMismatch { expected, found })
    }
}

/// Number of elements in a binomial tree of the given degree.
#[inline]
pub fn tree_size(degree: Degree) -> usize {
    1usize << degree
}
