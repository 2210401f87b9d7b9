//! Iterators over occupied slots.
//!
//! All iterators visit occupied slots in ascending index order and skip
//! vacant ones. Each call to `iter()` starts a fresh traversal; the borrow
//! it holds keeps the container unchanged until the traversal is dropped.

use std::iter::{Flatten, FusedIterator};
use std::vec;

use fixarray_core::OccupancyIter;

/// Iterator over occupied values, created by `iter()`.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    indices: OccupancyIter<'a>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], indices: OccupancyIter<'a>) -> Self {
        Self { slots, indices }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        self.indices.by_ref().find_map(|i| slots[i].as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `(index, value)` pairs of occupied slots, created by
/// `entries()`.
#[derive(Clone, Debug)]
pub struct Entries<'a, T> {
    slots: &'a [Option<T>],
    indices: OccupancyIter<'a>,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], indices: OccupancyIter<'a>) -> Self {
        Self { slots, indices }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        self.indices
            .by_ref()
            .find_map(|i| slots[i].as_ref().map(|v| (i, v)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

/// Owning iterator over occupied values, created by `into_iter()`.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: Flatten<vec::IntoIter<Option<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Option<T>>, occupied: usize) -> Self {
        Self {
            inner: slots.into_iter().flatten(),
            remaining: occupied,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
