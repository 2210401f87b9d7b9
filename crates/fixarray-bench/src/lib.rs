//! Benchmark profiles and utilities for the fixarray containers.
//!
//! - [`scatter_indices`]: deterministic, collision-free slot indices
//! - [`sparse_typed_profile`]: an `int` [`TypedArray`] filled at scattered slots
//! - [`sparse_fixed_profile`]: the same layout as a [`FixedArray<i64>`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixarray_store::{FixedArray, TypedArray};

/// Generate `n` distinct slot indices in `[0, capacity)`.
///
/// Uses a simple hash of the seed plus linear probing, so the same
/// arguments always yield the same indices.
///
/// # Panics
///
/// Panics if `n > capacity`.
pub fn scatter_indices(capacity: usize, n: usize, seed: u64) -> Vec<usize> {
    assert!(n <= capacity, "cannot scatter {n} indices over {capacity} slots");
    let mut indices = Vec::with_capacity(n);
    let mut taken = vec![false; capacity];

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i as u64 * 1442695040888963407)
            % capacity as u64) as usize;

        // Linear probe to avoid collisions
        while taken[pos] {
            pos = (pos + 1) % capacity;
        }
        taken[pos] = true;
        indices.push(pos);
    }

    indices
}

/// An `int` [`TypedArray`] of `capacity` slots with `n` scattered slots set.
pub fn sparse_typed_profile(capacity: usize, n: usize, seed: u64) -> TypedArray {
    let mut arr = TypedArray::new("int", capacity as i64).unwrap();
    for (value, index) in scatter_indices(capacity, n, seed).into_iter().enumerate() {
        arr.set(index, value as i64).unwrap();
    }
    arr
}

/// A [`FixedArray<i64>`] with the same layout as [`sparse_typed_profile`].
pub fn sparse_fixed_profile(capacity: usize, n: usize, seed: u64) -> FixedArray<i64> {
    let mut arr = FixedArray::new(capacity);
    for (value, index) in scatter_indices(capacity, n, seed).into_iter().enumerate() {
        arr.set(index, value as i64).unwrap();
    }
    arr
}
