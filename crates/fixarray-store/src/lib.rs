//! Fixed-capacity, single-type array containers.
//!
//! A container is allocated once with a capacity and never grows. Slots are
//! addressed by index in `[0, capacity)` and may be filled sparsely.
//!
//! # Architecture
//!
//! ```text
//! TypedArray (runtime ElementType check, dynamic Value indices)
//! └── FixedArray<Value>
//!     ├── Box<[Option<T>]> (flat slot buffer, length = capacity)
//!     └── OccupancySet (which slots are set, exact count)
//! ```
//!
//! [`FixedArray<T>`] is the statically typed container: the element type
//! is the type parameter, so incompatible writes do not compile.
//! [`TypedArray`] carries an [`ElementType`](fixarray_core::ElementType)
//! descriptor instead and rejects incompatible [`Value`](fixarray_core::Value)s
//! at runtime.
//!
//! # Write validation order
//!
//! A `set` is checked in this order, and the first failure wins:
//!
//! 1. index type (`TypedArray` only)
//! 2. index range
//! 3. capacity, per the container's [`FullPolicy`]
//! 4. value type (`TypedArray` only)
//!
//! An index outside `[0, capacity)` is always `IndexOutOfRange`, even on a
//! full or zero-capacity container.
//!
//! A failed write never modifies the container.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod fixed;
pub mod iter;
pub mod typed;

pub use config::{ArrayConfig, FullPolicy};
pub use fixed::FixedArray;
pub use iter::{Entries, IntoIter, Iter};
pub use typed::TypedArray;
