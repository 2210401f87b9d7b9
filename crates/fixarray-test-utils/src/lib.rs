//! Test fixtures for fixarray development.
//!
//! Provides prebuilt containers and records used by the integration tests
//! and benchmarks. Fixture constructors panic on failure: a fixture that
//! cannot be built is a bug in the test, not a condition under test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixarray_core::{Object, Value};
use fixarray_store::{FixedArray, TypedArray};

/// The three names used throughout the string-array scenarios.
pub const GUESTS: [&str; 3] = ["Alice", "Bob", "Eve"];

/// A `Person` record with a single `name` field.
pub fn person(name: &str) -> Object {
    Object::new("Person").with_field("name", name)
}

/// A `Robot` record, a class unrelated to `Person`.
pub fn robot(serial: i64) -> Object {
    Object::new("Robot").with_field("serial", serial)
}

/// An `int` array with the given `(index, value)` writes applied in order.
pub fn int_array(capacity: i64, writes: &[(i64, i64)]) -> TypedArray {
    let mut arr = TypedArray::new("int", capacity).expect("int array fixture");
    for &(index, value) in writes {
        arr.set(index, value).expect("int array fixture write");
    }
    arr
}

/// A `string` array with `names` written from index 0.
pub fn string_array(capacity: i64, names: &[&str]) -> TypedArray {
    let mut arr = TypedArray::new("string", capacity).expect("string array fixture");
    for (index, &name) in names.iter().enumerate() {
        arr.set(index, name).expect("string array fixture write");
    }
    arr
}

/// A statically typed array of `len` consecutive integers from index 0.
pub fn counting_array(capacity: usize, len: usize) -> FixedArray<u64> {
    FixedArray::try_from_iter(capacity, 0..len as u64).expect("counting array fixture")
}

/// Every occupied `(index, value)` pair, cloned, for before/after comparison.
pub fn contents(arr: &TypedArray) -> Vec<(usize, Value)> {
    arr.entries().map(|(i, v)| (i, v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_array_applies_writes() {
        let arr = int_array(4, &[(0, 4), (2, 2)]);
        assert_eq!(arr.len(), 2);
        assert_eq!(contents(&arr), [(0, Value::Int(4)), (2, Value::Int(2))]);
    }

    #[test]
    fn string_array_fills_from_zero() {
        let arr = string_array(3, &GUESTS);
        assert!(arr.is_full());
        assert_eq!(arr[2], Some(Value::from("Eve")));
    }

    #[test]
    fn counting_array_holds_consecutive_values() {
        let arr = counting_array(8, 5);
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(arr.remaining(), 3);
    }

    #[test]
    fn records_have_distinct_classes() {
        assert_ne!(person("Alice").class(), robot(1).class());
    }
}
