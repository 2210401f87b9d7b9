//! Element type descriptors and the compatibility rule.

use std::fmt;
use std::str::FromStr;

use crate::error::ArrayError;
use crate::value::Value;

/// Nominal identity of a record type.
///
/// Class names are compared exactly: two classes are the same type only if
/// their names are byte-for-byte equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    /// Wrap a class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for ClassName {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// The single type a container accepts.
///
/// Primitive kinds match by kind alone. Classes match by exact name, with no
/// substitution between related classes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// `true` / `false`.
    Bool,
    /// 64-bit signed integers.
    Int,
    /// 64-bit floating point numbers.
    Float,
    /// UTF-8 strings.
    Str,
    /// Records of one named class.
    Class(ClassName),
}

impl ElementType {
    /// Build a descriptor from a type name.
    ///
    /// Primitive names are case-insensitive (`int`, `Integer`, `STRING`, ...).
    /// Any other name is taken verbatim as a class name. Fails with
    /// [`ArrayError::InvalidConfiguration`] if the name is empty or contains
    /// whitespace.
    pub fn parse(name: &str) -> Result<Self, ArrayError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ArrayError::invalid_configuration("undefined type"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ArrayError::invalid_configuration(format!(
                "type name '{name}' contains whitespace"
            )));
        }
        let ty = match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Self::Bool,
            "int" | "integer" => Self::Int,
            "float" | "double" => Self::Float,
            "string" | "str" => Self::Str,
            _ => Self::Class(ClassName::new(name)),
        };
        Ok(ty)
    }

    /// Descriptor for records of the given class.
    pub fn class(name: impl Into<ClassName>) -> Self {
        Self::Class(name.into())
    }

    /// Canonical name of this type.
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Class(class) => class.as_str(),
        }
    }

    /// Whether this is one of the primitive kinds.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Class(_))
    }

    /// Whether `value` may be stored in a container of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_))
            | (Self::Str, Value::Str(_)) => true,
            (Self::Class(class), Value::Object(obj)) => obj.class() == class,
            _ => false,
        }
    }

    /// Check `value` against this type.
    ///
    /// Returns [`ArrayError::TypeMismatch`] naming both types on failure.
    pub fn check(&self, value: &Value) -> Result<(), ArrayError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(ArrayError::TypeMismatch {
                expected: self.clone(),
                found: value.element_type(),
            })
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn parse_primitive_names_case_insensitively() {
        assert_eq!(ElementType::parse("int").unwrap(), ElementType::Int);
        assert_eq!(ElementType::parse("Integer").unwrap(), ElementType::Int);
        assert_eq!(ElementType::parse("BOOL").unwrap(), ElementType::Bool);
        assert_eq!(ElementType::parse("double").unwrap(), ElementType::Float);
        assert_eq!(ElementType::parse(" string ").unwrap(), ElementType::Str);
    }

    #[test]
    fn parse_other_names_as_classes() {
        let ty = ElementType::parse("App\\Person").unwrap();
        assert_eq!(ty, ElementType::class("App\\Person"));
        assert_eq!(ty.name(), "App\\Person");
        assert!(!ty.is_primitive());
    }

    #[test]
    fn parse_rejects_empty_and_blank_names() {
        for name in ["", "   ", "\t"] {
            assert!(matches!(
                ElementType::parse(name),
                Err(ArrayError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn parse_rejects_interior_whitespace() {
        assert!(matches!(
            "my type".parse::<ElementType>(),
            Err(ArrayError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn primitives_match_exact_kind_only() {
        assert!(ElementType::Int.accepts(&Value::Int(3)));
        assert!(!ElementType::Int.accepts(&Value::Float(3.0)));
        assert!(!ElementType::Float.accepts(&Value::Int(3)));
        assert!(!ElementType::Str.accepts(&Value::Bool(true)));
        assert!(ElementType::Bool.accepts(&Value::Bool(false)));
    }

    #[test]
    fn classes_match_by_exact_name() {
        let person = Value::Object(Object::new("Person"));
        let employee = Value::Object(Object::new("Employee"));
        let ty = ElementType::class("Person");
        assert!(ty.accepts(&person));
        assert!(!ty.accepts(&employee));
        assert!(!ElementType::class("person").accepts(&person));
        assert!(!ty.accepts(&Value::Str("Person".into())));
    }

    #[test]
    fn check_reports_both_types() {
        let err = ElementType::Int.check(&Value::from("seven")).unwrap_err();
        assert_eq!(
            err,
            ArrayError::TypeMismatch {
                expected: ElementType::Int,
                found: ElementType::Str,
            }
        );
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(ElementType::parse("integer").unwrap().to_string(), "int");
        assert_eq!(ElementType::class("Point").to_string(), "Point");
    }
}
