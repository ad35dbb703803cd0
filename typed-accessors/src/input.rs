//! Tagged input unions accepted by generated writers.
//!
//! Each semantic type owns one enum covering the raw kinds a caller may
//! hand to its writer. Writers take `impl Into<..Input>`, so call sites
//! pass plain strings, numbers, booleans, or pre-typed dates and the
//! conversion happens at the boundary.

use chrono::NaiveDate;

/// Raw input to a `bool_yn` writer.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolYnInput {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl From<&str> for BoolYnInput {
    fn from(value: &str) -> Self {
        BoolYnInput::Text(value.to_owned())
    }
}

impl From<String> for BoolYnInput {
    fn from(value: String) -> Self {
        BoolYnInput::Text(value)
    }
}

impl From<bool> for BoolYnInput {
    fn from(value: bool) -> Self {
        BoolYnInput::Bool(value)
    }
}

impl From<i64> for BoolYnInput {
    fn from(value: i64) -> Self {
        BoolYnInput::Int(value)
    }
}

impl From<f64> for BoolYnInput {
    fn from(value: f64) -> Self {
        BoolYnInput::Float(value)
    }
}

/// Raw input to a `float` writer.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatInput {
    Text(String),
    Float(f64),
    Int(i64),
    Bool(bool),
}

impl From<&str> for FloatInput {
    fn from(value: &str) -> Self {
        FloatInput::Text(value.to_owned())
    }
}

impl From<String> for FloatInput {
    fn from(value: String) -> Self {
        FloatInput::Text(value)
    }
}

impl From<f64> for FloatInput {
    fn from(value: f64) -> Self {
        FloatInput::Float(value)
    }
}

impl From<i64> for FloatInput {
    fn from(value: i64) -> Self {
        FloatInput::Int(value)
    }
}

impl From<bool> for FloatInput {
    fn from(value: bool) -> Self {
        FloatInput::Bool(value)
    }
}

/// Raw input to an `int` writer.
#[derive(Debug, Clone, PartialEq)]
pub enum IntInput {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for IntInput {
    fn from(value: &str) -> Self {
        IntInput::Text(value.to_owned())
    }
}

impl From<String> for IntInput {
    fn from(value: String) -> Self {
        IntInput::Text(value)
    }
}

impl From<i64> for IntInput {
    fn from(value: i64) -> Self {
        IntInput::Int(value)
    }
}

impl From<f64> for IntInput {
    fn from(value: f64) -> Self {
        IntInput::Float(value)
    }
}

impl From<bool> for IntInput {
    fn from(value: bool) -> Self {
        IntInput::Bool(value)
    }
}

/// Raw input to a `date` writer.
///
/// A pre-typed `Date` passes through the writer unchanged - the slot
/// trusts it without further validation. Only `Text` goes through the
/// parser.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Text(String),
    Date(NaiveDate),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}
