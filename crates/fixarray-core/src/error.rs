//! Error types for fixed-capacity containers.
//!
//! Every contract violation maps to one [`ArrayError`] variant, raised
//! synchronously by the call that broke the contract.

use std::error::Error;
use std::fmt;

use crate::element::ElementType;

/// Errors returned by container construction and indexed operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Construction parameters were rejected: an empty or malformed type
    /// name, or a negative capacity.
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },
    /// An indexed operation was given an index that is not an integer.
    InvalidIndexType {
        /// The type of the offending index.
        found: ElementType,
    },
    /// An integer index fell outside `[0, capacity)`.
    IndexOutOfRange {
        /// The rejected index.
        index: i64,
        /// Declared capacity of the container.
        capacity: usize,
    },
    /// A value's type does not satisfy the container's element type.
    TypeMismatch {
        /// The declared element type.
        expected: ElementType,
        /// The type of the rejected value.
        found: ElementType,
    },
    /// A write needed a new slot but every slot is already occupied.
    CapacityExceeded {
        /// Declared capacity of the container.
        capacity: usize,
    },
}

impl ArrayError {
    /// Shorthand for an [`ArrayError::InvalidConfiguration`].
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Build an [`ArrayError::IndexOutOfRange`] from an unsigned index.
    ///
    /// Indices too large for `i64` saturate; they are out of range for any
    /// container that can actually be allocated.
    pub fn out_of_range(index: usize, capacity: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            capacity,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::InvalidIndexType { found } => {
                write!(f, "invalid index type: expected int, found {found}")
            }
            Self::IndexOutOfRange { index, capacity } => {
                write!(f, "index {index} out of range for capacity {capacity}")
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: all {capacity} slots are occupied")
            }
        }
    }
}

impl Error for ArrayError {}
