//! A small dynamically-typed value, so that a single slice can hold integers next to strings and
//! floats.
//!
//! # Example
//!
//! ```
//! use pivotsort::value::Value;
//! use pivotsort::QuickSorter;
//!
//! let mut values: Vec<Value> = vec![3u8.into(), (-1i64).into(), 2u32.into()];
//! QuickSorter::default()
//!     .sort_by(&mut values, Value::compare_integers)
//!     .unwrap();
//! assert_eq!(values, vec![Value::Int(-1), Value::UInt(2), Value::UInt(3)]);
//! ```

use std::cmp::Ordering;
use std::error::Error as StdError;
use std::fmt;

use crate::coerce::AsInteger;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Bool(bool),
}

/// Raised by [`Value::compare_integers`] when either side is not an integer.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareError {
    NotAnInteger(Value),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::NotAnInteger(value) => {
                write!(f, "Compare value must be int, found `{value}`")
            }
        }
    }
}

impl StdError for CompareError {}

impl Value {
    /// Three-way comparison of two integer values, whatever their signedness. Fails on the first
    /// side that holds anything else.
    pub fn compare_integers(a: &Value, b: &Value) -> Result<Ordering, CompareError> {
        let a_int = a
            .as_integer()
            .ok_or_else(|| CompareError::NotAnInteger(a.clone()))?;
        let b_int = b
            .as_integer()
            .ok_or_else(|| CompareError::NotAnInteger(b.clone()))?;
        Ok(a_int.cmp(&b_int))
    }
}

impl AsInteger for Value {
    fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::Int(i) => Some(i128::from(i)),
            Value::UInt(u) => Some(i128::from(u)),
            Value::Float(_) | Value::Str(_) | Value::Bool(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $wide:ty: $($from:ty),*) => {
        $(
            impl From<$from> for Value {
                fn from(value: $from) -> Self {
                    Value::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

value_from!(Int as i64: i8, i16, i32, i64);
value_from!(UInt as u64: u8, u16, u32, u64);
value_from!(Float as f64: f32, f64);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
