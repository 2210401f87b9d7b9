//! Core types for the fixarray workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every container: element type descriptors, the
//! dynamic [`Value`] model, the [`OccupancySet`] bitset and [`ArrayError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod occupancy;
pub mod value;

pub use element::{ClassName, ElementType};
pub use error::ArrayError;
pub use occupancy::{OccupancyIter, OccupancySet};
pub use value::{Object, Value};
