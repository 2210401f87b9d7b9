//! The statically typed [`FixedArray`] container.

use std::ops::Index;

use fixarray_core::{ArrayError, OccupancyIter, OccupancySet};

use crate::config::FullPolicy;
use crate::iter::{Entries, IntoIter, Iter};

/// Fixed-capacity array of `T` with sparse occupancy.
///
/// Storage is a flat buffer of `capacity` optional slots plus an
/// [`OccupancySet`] that tracks which slots are set. Both are allocated once
/// at construction and never resized.
///
/// Indexed operations fail with [`ArrayError::IndexOutOfRange`] for any
/// index `>= capacity`, including pure existence queries via [`has`].
///
/// [`has`]: FixedArray::has
#[derive(Clone, Debug, PartialEq)]
pub struct FixedArray<T> {
    slots: Box<[Option<T>]>,
    occupancy: OccupancySet,
    policy: FullPolicy,
}

impl<T> FixedArray<T> {
    /// Create an empty array with the default [`FullPolicy`].
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, FullPolicy::default())
    }

    /// Create an empty array with an explicit [`FullPolicy`].
    pub fn with_policy(capacity: usize, policy: FullPolicy) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            occupancy: OccupancySet::new(capacity),
            policy,
        }
    }

    /// Create an array filled from index 0 with the values of `iter`.
    ///
    /// Fails with [`ArrayError::CapacityExceeded`] if `iter` yields more
    /// than `capacity` values.
    pub fn try_from_iter<I>(capacity: usize, iter: I) -> Result<Self, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new(capacity);
        for value in iter {
            array.push(value)?;
        }
        Ok(array)
    }

    /// Maximum number of occupied slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.occupancy.is_full()
    }

    /// Number of vacant slots.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// The policy applied to writes once the array is full.
    pub fn policy(&self) -> FullPolicy {
        self.policy
    }

    /// Check that `index` addresses a slot.
    pub fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(ArrayError::out_of_range(index, self.capacity()))
        }
    }

    /// Check whether `set(index, _)` would succeed, without writing.
    ///
    /// The range check runs first, so an index outside `[0, capacity)` is
    /// always [`ArrayError::IndexOutOfRange`], full or not. A full array then
    /// applies its [`FullPolicy`].
    pub fn check_write(&self, index: usize) -> Result<(), ArrayError> {
        self.check_index(index)?;
        if self.is_full() {
            let rejected = match self.policy {
                FullPolicy::RejectNewSlots => !self.occupancy.contains(index),
                FullPolicy::RejectAllWrites => true,
            };
            if rejected {
                return Err(ArrayError::CapacityExceeded {
                    capacity: self.capacity(),
                });
            }
        }
        Ok(())
    }

    /// Whether the slot at `index` is occupied.
    pub fn has(&self, index: usize) -> Result<bool, ArrayError> {
        self.check_index(index)?;
        Ok(self.occupancy.contains(index))
    }

    /// The value at `index`, or `None` if the slot is vacant.
    pub fn get(&self, index: usize) -> Result<Option<&T>, ArrayError> {
        self.check_index(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Mutable access to the value at `index`, or `None` if vacant.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, ArrayError> {
        self.check_index(index)?;
        Ok(self.slots[index].as_mut())
    }

    /// Store `value` at `index`, returning the value it replaced.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, ArrayError> {
        self.check_write(index)?;
        self.occupancy.insert(index);
        Ok(self.slots[index].replace(value))
    }

    /// Store `value` in the lowest vacant slot and return its index.
    ///
    /// Fails with [`ArrayError::CapacityExceeded`] if no slot is vacant.
    pub fn push(&mut self, value: T) -> Result<usize, ArrayError> {
        let index = self
            .occupancy
            .first_vacant()
            .ok_or(ArrayError::CapacityExceeded {
                capacity: self.capacity(),
            })?;
        self.occupancy.insert(index);
        self.slots[index] = Some(value);
        Ok(index)
    }

    /// Vacate the slot at `index`, returning the value it held.
    ///
    /// Vacating an already vacant slot is not an error.
    pub fn unset(&mut self, index: usize) -> Result<Option<T>, ArrayError> {
        self.check_index(index)?;
        if self.occupancy.remove(index) {
            Ok(self.slots[index].take())
        } else {
            Ok(None)
        }
    }

    /// Vacate every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        for index in self.occupancy.iter() {
            self.slots[index] = None;
        }
        self.occupancy.clear();
    }

    /// Iterate over occupied values in ascending index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.occupancy.iter())
    }

    /// Iterate mutably over occupied values in ascending index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    /// Iterate over `(index, value)` pairs in ascending index order.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(&self.slots, self.occupancy.iter())
    }

    /// Iterate over occupied indices in ascending order.
    pub fn indices(&self) -> OccupancyIter<'_> {
        self.occupancy.iter()
    }
}

/// Native indexing sugar over [`FixedArray::get`].
///
/// Yields `&None` for a vacant slot. Panics if `index >= capacity`, like
/// slice indexing.
impl<T> Index<usize> for FixedArray<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for FixedArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let occupied = self.len();
        IntoIter::new(self.slots.into_vec(), occupied)
    }
}
