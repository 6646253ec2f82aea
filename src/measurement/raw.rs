//! Untrusted raw input values.
//!
//! A [`RawValue`] is whatever a caller received from the outside world before
//! any checking: a number, some text, nothing at all, or a structured payload
//! value that cannot be a measurement.

use serde_json::Value;

/// An unvalidated input value for one measurement field.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A numeric value, not yet checked for sign or finiteness
    Number(f64),
    /// Text that may hold a number, e.g. `"10.5"`
    Text(String),
    /// No value supplied
    Missing,
    /// A value of a kind that can never be a number (boolean, array, object)
    Unsupported(&'static str),
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(value: $t) -> Self {
                    RawValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        RawValue::Text(value.clone())
    }
}

impl From<bool> for RawValue {
    fn from(_: bool) -> Self {
        RawValue::Unsupported("boolean")
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Missing,
            Value::Bool(_) => RawValue::Unsupported("boolean"),
            Value::Number(n) => n
                .as_f64()
                .map_or(RawValue::Unsupported("number"), RawValue::Number),
            Value::String(s) => RawValue::Text(s.clone()),
            Value::Array(_) => RawValue::Unsupported("array"),
            Value::Object(_) => RawValue::Unsupported("object"),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        RawValue::from(&value)
    }
}
