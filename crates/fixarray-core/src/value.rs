//! Dynamic values stored in descriptor-typed containers.

use std::fmt;

use indexmap::IndexMap;

use crate::element::{ClassName, ElementType};

/// A dynamically typed value.
///
/// Values are also used as indices by descriptor-typed containers, which is
/// how a non-integer index can reach a container at all.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A string.
    Str(String),
    /// A record of some class.
    Object(Object),
}

impl Value {
    /// The concrete type of this value.
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Bool(_) => ElementType::Bool,
            Self::Int(_) => ElementType::Int,
            Self::Float(_) => ElementType::Float,
            Self::Str(_) => ElementType::Str,
            Self::Object(obj) => ElementType::Class(obj.class().clone()),
        }
    }

    /// The integer payload, if this is an [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The float payload, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The string payload, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// The record, if this is a [`Value::Object`].
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Object(obj) => write!(f, "{obj}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

/// Saturates at `i64::MAX`; such an index is out of range for any container.
impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

/// A record: a class name plus named fields in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    class: ClassName,
    fields: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty record of the given class.
    pub fn new(class: impl Into<ClassName>) -> Self {
        Self {
            class: class.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field assignment.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Assign a field, returning the previous value if there was one.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// The record's class.
    pub fn class(&self) -> &ClassName {
        &self.class
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate over fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.class)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        if !self.fields.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_reflects_payload() {
        assert_eq!(Value::from(true).element_type(), ElementType::Bool);
        assert_eq!(Value::from(7).element_type(), ElementType::Int);
        assert_eq!(Value::from(1.5).element_type(), ElementType::Float);
        assert_eq!(Value::from("x").element_type(), ElementType::Str);
        assert_eq!(
            Value::from(Object::new("Point")).element_type(),
            ElementType::class("Point")
        );
    }

    #[test]
    fn usize_conversion_saturates() {
        assert_eq!(Value::from(3usize), Value::Int(3));
        assert_eq!(Value::from(usize::MAX), Value::Int(i64::MAX));
    }

    #[test]
    fn accessors_return_matching_payload_only() {
        let v = Value::from(42);
        assert_eq!(v.as_int(), Some(42));
        assert_eq!(v.as_str(), None);
        assert_eq!(Value::from("bob").as_str(), Some("bob"));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from(0.25).as_float(), Some(0.25));
        assert_eq!(v.element_type(), ElementType::Int);
    }

    #[test]
    fn object_fields_keep_declaration_order() {
        let obj = Object::new("Person")
            .with_field("name", "Alice")
            .with_field("age", 30);
        let names: Vec<&str> = obj.fields().map(|(k, _)| k).collect();
        assert_eq!(names, ["name", "age"]);
        assert_eq!(obj.field("age"), Some(&Value::Int(30)));
        assert_eq!(obj.field("email"), None);
    }

    #[test]
    fn set_field_returns_previous_value() {
        let mut obj = Object::new("Counter").with_field("n", 1);
        assert_eq!(obj.set_field("n", 2), Some(Value::Int(1)));
        assert_eq!(obj.set_field("m", 0), None);
    }

    #[test]
    fn display_formats() {
        let obj = Object::new("Person").with_field("name", "Eve");
        assert_eq!(obj.to_string(), "Person { name: \"Eve\" }");
        assert_eq!(Object::new("Empty").to_string(), "Empty {}");
        assert_eq!(Value::from(5).to_string(), "5");
    }
}
