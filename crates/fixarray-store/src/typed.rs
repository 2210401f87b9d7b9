//! The descriptor-typed [`TypedArray`] container.

use std::fmt;
use std::ops::Index;

use fixarray_core::{ArrayError, ElementType, OccupancyIter, Value};

use crate::config::{ArrayConfig, FullPolicy};
use crate::fixed::FixedArray;
use crate::iter::{Entries, Iter};

/// Fixed-capacity array of [`Value`]s that all satisfy one [`ElementType`].
///
/// Indices are [`Value`]s too: anything that is not a [`Value::Int`] fails
/// with [`ArrayError::InvalidIndexType`]. Integer indices outside
/// `[0, capacity)` fail with [`ArrayError::IndexOutOfRange`], even for
/// [`has`](TypedArray::has).
///
/// ```
/// use fixarray_store::TypedArray;
///
/// let mut arr = TypedArray::new("int", 4)?;
/// arr.set(0, 4)?;
/// arr.set(1, 7)?;
/// assert_eq!(arr.get(1)?.and_then(|v| v.as_int()), Some(7));
/// assert!(arr.set(2, "seven").is_err());
/// # Ok::<(), fixarray_core::ArrayError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TypedArray {
    element_type: ElementType,
    slots: FixedArray<Value>,
}

impl TypedArray {
    /// Create an empty array from a type name and a capacity.
    ///
    /// Fails with [`ArrayError::InvalidConfiguration`] if the type name is
    /// empty or the capacity is negative.
    pub fn new(element_type: &str, capacity: i64) -> Result<Self, ArrayError> {
        Self::from_config(ArrayConfig::new(element_type, capacity))
    }

    /// Create an empty array from a validated config.
    pub fn from_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        let (element_type, capacity) = config.validate()?;
        Ok(Self {
            element_type,
            slots: FixedArray::with_policy(capacity, config.full_policy),
        })
    }

    /// Create an empty array from an already-resolved descriptor.
    pub fn with_type(element_type: ElementType, capacity: usize) -> Self {
        Self {
            element_type,
            slots: FixedArray::new(capacity),
        }
    }

    /// The accepted element type.
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Maximum number of occupied slots.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Number of vacant slots.
    pub fn remaining(&self) -> usize {
        self.slots.remaining()
    }

    /// The policy applied to writes once the array is full.
    pub fn policy(&self) -> FullPolicy {
        self.slots.policy()
    }

    /// Turn an index value into a slot number, running `check` on it.
    ///
    /// Negative indices are never occupied and always out of range, so they
    /// are checked as `usize::MAX`; any range error still reports the
    /// caller's original index.
    fn resolve(
        &self,
        index: &Value,
        check: impl FnOnce(&FixedArray<Value>, usize) -> Result<(), ArrayError>,
    ) -> Result<usize, ArrayError> {
        let raw = index.as_int().ok_or_else(|| ArrayError::InvalidIndexType {
            found: index.element_type(),
        })?;
        let slot = usize::try_from(raw).unwrap_or(usize::MAX);
        check(&self.slots, slot).map_err(|err| match err {
            ArrayError::IndexOutOfRange { capacity, .. } => ArrayError::IndexOutOfRange {
                index: raw,
                capacity,
            },
            other => other,
        })?;
        Ok(slot)
    }

    /// Whether the slot at `index` is occupied.
    pub fn has(&self, index: impl Into<Value>) -> Result<bool, ArrayError> {
        let slot = self.resolve(&index.into(), FixedArray::check_index)?;
        self.slots.has(slot)
    }

    /// The value at `index`, or `None` if the slot is vacant.
    pub fn get(&self, index: impl Into<Value>) -> Result<Option<&Value>, ArrayError> {
        let slot = self.resolve(&index.into(), FixedArray::check_index)?;
        self.slots.get(slot)
    }

    /// Store `value` at `index`, returning the value it replaced.
    ///
    /// Fails with [`ArrayError::TypeMismatch`] if the element type does not
    /// accept `value`. The array is unchanged on any error.
    pub fn set(
        &mut self,
        index: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ArrayError> {
        let slot = self.resolve(&index.into(), FixedArray::check_write)?;
        let value = value.into();
        self.element_type.check(&value)?;
        self.slots.set(slot, value)
    }

    /// Store `value` in the lowest vacant slot and return its index.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<usize, ArrayError> {
        if self.slots.is_full() {
            return Err(ArrayError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let value = value.into();
        self.element_type.check(&value)?;
        self.slots.push(value)
    }

    /// Vacate the slot at `index`, returning the value it held.
    ///
    /// Vacating an already vacant slot is not an error.
    pub fn unset(&mut self, index: impl Into<Value>) -> Result<Option<Value>, ArrayError> {
        let slot = self.resolve(&index.into(), FixedArray::check_index)?;
        self.slots.unset(slot)
    }

    /// Vacate every slot. Type and capacity are unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over occupied values in ascending index order.
    pub fn iter(&self) -> Iter<'_, Value> {
        self.slots.iter()
    }

    /// Iterate over `(index, value)` pairs in ascending index order.
    pub fn entries(&self) -> Entries<'_, Value> {
        self.slots.entries()
    }

    /// Iterate over occupied indices in ascending order.
    pub fn indices(&self) -> OccupancyIter<'_> {
        self.slots.indices()
    }
}

/// Native indexing sugar over [`TypedArray::get`].
///
/// Yields `&None` for a vacant slot. Panics if `index >= capacity`.
impl Index<usize> for TypedArray {
    type Output = Option<Value>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'a> IntoIterator for &'a TypedArray {
    type Item = &'a Value;
    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TypedArray<{}>[{}/{}]",
            self.element_type,
            self.len(),
            self.capacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixarray_core::Object;

    #[test]
    fn construction_round_trips_type_and_capacity() {
        let arr = TypedArray::new("int", 5).unwrap();
        assert_eq!(arr.element_type(), &ElementType::Int);
        assert_eq!(arr.capacity(), 5);
        assert!(arr.is_empty());
    }

    #[test]
    fn construction_rejects_bad_parameters() {
        assert!(matches!(
            TypedArray::new("", 3),
            Err(ArrayError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            TypedArray::new("string", -1),
            Err(ArrayError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn non_integer_indices_are_rejected() {
        let mut arr = TypedArray::new("int", 4).unwrap();
        let err = ArrayError::InvalidIndexType {
            found: ElementType::Str,
        };
        assert_eq!(arr.has("bob"), Err(err.clone()));
        assert_eq!(arr.get("bob"), Err(err.clone()));
        assert_eq!(arr.unset("bob"), Err(err.clone()));
        assert_eq!(arr.set("bob", 1), Err(err));
        assert!(matches!(
            arr.get(1.0),
            Err(ArrayError::InvalidIndexType {
                found: ElementType::Float
            })
        ));
        assert!(matches!(
            arr.get(true),
            Err(ArrayError::InvalidIndexType { .. })
        ));
    }

    #[test]
    fn negative_index_reports_original_value() {
        let mut arr = TypedArray::new("int", 4).unwrap();
        let err = ArrayError::IndexOutOfRange {
            index: -1,
            capacity: 4,
        };
        assert_eq!(arr.has(-1), Err(err.clone()));
        assert_eq!(arr.set(-1, 3), Err(err.clone()));
        assert_eq!(arr.unset(-1), Err(err));
    }

    #[test]
    fn index_type_is_checked_before_range() {
        let arr = TypedArray::new("int", 0).unwrap();
        assert!(matches!(
            arr.has("x"),
            Err(ArrayError::InvalidIndexType { .. })
        ));
    }

    #[test]
    fn type_mismatch_leaves_array_unchanged() {
        let mut arr = TypedArray::new("int", 3).unwrap();
        arr.set(0, 1).unwrap();
        let before = arr.clone();
        assert_eq!(
            arr.set(0, "one"),
            Err(ArrayError::TypeMismatch {
                expected: ElementType::Int,
                found: ElementType::Str,
            })
        );
        assert_eq!(
            arr.set(1, 1.0).unwrap_err().to_string(),
            "type mismatch: expected int, found float"
        );
        assert_eq!(arr, before);
    }

    #[test]
    fn range_is_checked_before_value_type() {
        let mut arr = TypedArray::new("int", 2).unwrap();
        assert!(matches!(
            arr.set(5, "wrong"),
            Err(ArrayError::IndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn full_array_still_reports_range_first() {
        let mut arr = TypedArray::new("string", 1).unwrap();
        arr.set(0, "Alice").unwrap();
        assert_eq!(
            arr.set(1, 42),
            Err(ArrayError::IndexOutOfRange {
                index: 1,
                capacity: 1
            })
        );
        assert_eq!(
            arr.set(-3, "X"),
            Err(ArrayError::IndexOutOfRange {
                index: -3,
                capacity: 1
            })
        );
        assert_eq!(arr.push("X"), Err(ArrayError::CapacityExceeded { capacity: 1 }));
    }

    #[test]
    fn class_arrays_check_nominal_identity() {
        let mut arr = TypedArray::new("Person", 2).unwrap();
        let alice = Object::new("Person").with_field("name", "Alice");
        arr.set(0, alice).unwrap();
        let err = arr.set(1, Object::new("Robot")).unwrap_err();
        assert_eq!(
            err,
            ArrayError::TypeMismatch {
                expected: ElementType::class("Person"),
                found: ElementType::class("Robot"),
            }
        );
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn push_checks_type_and_capacity() {
        let mut arr = TypedArray::new("bool", 2).unwrap();
        assert_eq!(arr.push(true).unwrap(), 0);
        assert!(matches!(arr.push(1), Err(ArrayError::TypeMismatch { .. })));
        assert_eq!(arr.push(false).unwrap(), 1);
        assert_eq!(
            arr.push(1),
            Err(ArrayError::CapacityExceeded { capacity: 2 })
        );
    }

    #[test]
    fn reject_all_writes_policy_from_config() {
        let config = ArrayConfig::new("int", 1).with_full_policy(FullPolicy::RejectAllWrites);
        let mut arr = TypedArray::from_config(config).unwrap();
        assert_eq!(arr.policy(), FullPolicy::RejectAllWrites);
        arr.set(0, 1).unwrap();
        assert_eq!(
            arr.set(0, 2),
            Err(ArrayError::CapacityExceeded { capacity: 1 })
        );
    }

    #[test]
    fn index_sugar_reads_slots() {
        let mut arr = TypedArray::with_type(ElementType::Str, 3);
        arr.set(1, "Bob").unwrap();
        assert_eq!(arr[1], Some(Value::from("Bob")));
        assert_eq!(arr[0], None);
    }

    #[test]
    fn display_shows_type_and_occupancy() {
        let mut arr = TypedArray::new("integer", 4).unwrap();
        arr.set(0, 1).unwrap();
        assert_eq!(arr.to_string(), "TypedArray<int>[1/4]");
    }
}
