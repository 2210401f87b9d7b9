//! fixarray: fixed-capacity arrays that hold values of a single declared type.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fixarray sub-crates. For most users, adding `fixarray` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fixarray::prelude::*;
//!
//! // Descriptor-typed: the element type is checked at runtime.
//! let mut guests = TypedArray::new("string", 3).unwrap();
//! guests.set(0, "Alice").unwrap();
//! guests.set(1, "Bob").unwrap();
//! guests.set(2, "Eve").unwrap();
//! assert_eq!(guests.get(2).unwrap(), Some(&Value::from("Eve")));
//! assert_eq!(guests.len(), 3);
//!
//! // Full: appending is rejected, and index 3 is out of range.
//! assert_eq!(
//!     guests.push("Mallory"),
//!     Err(ArrayError::CapacityExceeded { capacity: 3 })
//! );
//! assert!(matches!(
//!     guests.set(3, "Mallory"),
//!     Err(ArrayError::IndexOutOfRange { index: 3, .. })
//! ));
//!
//! // Wrong index type or value type.
//! assert!(matches!(guests.get("bob"), Err(ArrayError::InvalidIndexType { .. })));
//! let mut scores = TypedArray::new("int", 4).unwrap();
//! assert!(matches!(scores.set(0, "ten"), Err(ArrayError::TypeMismatch { .. })));
//!
//! // Statically typed: the compiler enforces the element type.
//! let mut counts: FixedArray<u32> = FixedArray::new(4);
//! counts.set(2, 9).unwrap();
//! assert_eq!(counts[2], Some(9));
//! assert!(counts.has(4).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fixarray-core` | Element types, values, occupancy sets, errors |
//! | [`store`] | `fixarray-store` | `FixedArray`, `TypedArray`, configuration, iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element types, values, occupancy sets and errors (`fixarray-core`).
///
/// Contains [`types::ElementType`] and its compatibility rule, the dynamic
/// [`types::Value`] model, and [`types::ArrayError`].
pub use fixarray_core as types;

/// Containers and their configuration (`fixarray-store`).
///
/// [`store::FixedArray`] for compile-time element types,
/// [`store::TypedArray`] for descriptor-checked element types.
pub use fixarray_store as store;

/// Common imports for typical fixarray usage.
///
/// ```rust
/// use fixarray::prelude::*;
/// ```
pub mod prelude {
    pub use fixarray_core::{ArrayError, ClassName, ElementType, Object, Value};

    pub use fixarray_store::{ArrayConfig, FixedArray, FullPolicy, TypedArray};
}
