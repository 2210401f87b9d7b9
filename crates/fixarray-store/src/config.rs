//! Container configuration parameters.

use fixarray_core::{ArrayError, ElementType};

/// Which writes a full container rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FullPolicy {
    /// Reject only writes that would occupy a new slot. Overwriting an
    /// occupied slot always succeeds.
    #[default]
    RejectNewSlots,
    /// Reject every write once all slots are occupied, overwrites included.
    RejectAllWrites,
}

/// Configuration for a [`TypedArray`](crate::TypedArray).
///
/// Holds the raw, unvalidated construction parameters. Validated by
/// [`ArrayConfig::validate`]; all values are immutable after the container
/// is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Name of the accepted element type (`"int"`, `"string"`, a class name).
    pub element_type: String,

    /// Maximum number of occupied slots. Must be non-negative.
    pub capacity: i64,

    /// How a full container treats further writes.
    ///
    /// Default: [`FullPolicy::RejectNewSlots`].
    pub full_policy: FullPolicy,
}

impl ArrayConfig {
    /// Create a config with the default full policy.
    pub fn new(element_type: impl Into<String>, capacity: i64) -> Self {
        Self {
            element_type: element_type.into(),
            capacity,
            full_policy: FullPolicy::default(),
        }
    }

    /// Replace the full policy.
    pub fn with_full_policy(mut self, full_policy: FullPolicy) -> Self {
        self.full_policy = full_policy;
        self
    }

    /// Check the parameters and resolve them into a descriptor and capacity.
    ///
    /// Fails with [`ArrayError::InvalidConfiguration`] if the type name is
    /// empty or malformed, or if the capacity is negative or does not fit
    /// in `usize`.
    pub fn validate(&self) -> Result<(ElementType, usize), ArrayError> {
        let element_type = ElementType::parse(&self.element_type)?;
        if self.capacity < 0 {
            return Err(ArrayError::invalid_configuration(format!(
                "capacity must be greater than or equal to zero, got {}",
                self.capacity
            )));
        }
        let capacity = usize::try_from(self.capacity).map_err(|_| {
            ArrayError::invalid_configuration(format!(
                "capacity {} does not fit in usize",
                self.capacity
            ))
        })?;
        Ok((element_type, capacity))
    }
}
