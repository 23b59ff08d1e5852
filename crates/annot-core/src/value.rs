//! Expected values compared against canonical annotation fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builtin::DataType;

/// A single scalar or enum value supplied by a test, or extracted from an
/// annotation's canonical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Int(i64),
    /// Unsigned value above `i64::MAX`; never equal to an `Int`.
    UInt(u64),
    Str(String),
    Bool(bool),
    Float(f64),
    DataType(DataType),
}

impl Value {
    /// Short name of the variant, used in mismatch diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Float(_) => "float",
            Value::DataType(_) => "data-type",
        }
    }

    /// Renders the value the way string-form comparisons see it. Booleans
    /// render capitalized (`True`, `False`).
    pub fn string_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Float(v) => write!(f, "{v}"),
            Value::DataType(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! int_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::UInt(v), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Str(v.clone())
    }
}

impl From<DataType> for Value {
    fn from(v: DataType) -> Self {
        Value::DataType(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_form_matches_display() {
        assert_eq!(Value::from(50).string_form(), "50");
        assert_eq!(Value::from("^[a-z]+$").string_form(), "^[a-z]+$");
        assert_eq!(Value::from(DataType::EmailAddress).string_form(), "EmailAddress");
    }

    #[test]
    fn integer_widths_collapse_to_int() {
        assert_eq!(Value::from(7u8), Value::Int(7));
        assert_eq!(Value::from(7usize), Value::Int(7));
        assert_eq!(Value::from(7i32), Value::from(7i64));
    }

    #[test]
    fn unsigned_values_above_int_range_stay_distinct() {
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_ne!(Value::from(u64::MAX), Value::Int(i64::MAX));
        assert_eq!(Value::from(i64::MAX as u64), Value::Int(i64::MAX));
        assert_eq!(Value::from(u64::MAX).string_form(), u64::MAX.to_string());
    }

    #[test]
    fn booleans_render_capitalized() {
        assert_eq!(Value::from(true).string_form(), "True");
        assert_eq!(Value::from(false).string_form(), "False");
    }
}
