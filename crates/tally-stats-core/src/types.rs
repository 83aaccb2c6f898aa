use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dynamically typed value of a record field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent or SQL NULL
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Unparsed text, e.g. a derived column that came back as a string
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// True for integer and floating-point values only
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }

    /// Numeric value as `f64`, `None` for null, text and booleans
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Int(i) => Some(i as f64),
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                // u64 above i64::MAX and all non-integers
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Int(i) => Value::from(i),
            FieldValue::Float(f) => Value::from(f),
            FieldValue::Text(s) => Value::String(s),
        }
    }
}

/// Policy for handling NULL field values during projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Skip items whose field is NULL (default for sums, counts and moments)
    #[default]
    DropNull,
    /// Error if any NULL encountered (max, min and regression series)
    ErrorOnNull,
}

/// Options for median
#[derive(Debug, Clone, Copy)]
pub struct MedianOptions {
    /// Caller asserts the data is already in ascending order, so no sort is done
    pub already_sorted: bool,
}

impl Default for MedianOptions {
    fn default() -> Self {
        Self {
            already_sorted: true,
        }
    }
}

/// Options for mode
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeOptions {
    /// Return every value tied for the highest count instead of the first one
    pub find_all: bool,
}

/// Result of a mode computation
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// The most frequent value (earliest first occurrence wins ties)
    Single(f64),
    /// All values tied for the highest count, in order of first occurrence
    All(Vec<f64>),
}
