//! Error type for field construction.

use core::fmt;

/// Errors reported when constructing a [`crate::FieldContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The extension degree is zero or too large for a 64-bit element.
    InvalidDegree(u32),
    /// The reduction polynomial's degree does not match the field degree.
    ReductionDegreeMismatch {
        /// Requested extension degree.
        degree: u32,
        /// Offending reduction polynomial.
        polynomial: u64,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidDegree(degree) => {
                write!(f, "field degree {degree} is not in 1..=63")
            }
            FieldError::ReductionDegreeMismatch { degree, polynomial } => write!(
                f,
                "reduction polynomial {polynomial:#b} does not have degree {degree}"
            ),
        }
    }
}

impl std::error::Error for FieldError {}
