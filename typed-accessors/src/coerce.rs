//! Coercion rules applied inside generated writers.
//!
//! One function per semantic type, each an exhaustive match over its
//! input union. `bool_yn` is total; the rest return the coerced value or
//! an [`AccessorError`] naming the offending field. Callers that need
//! the raw rules without the macro can use these directly.

use chrono::NaiveDate;

use crate::error::AccessorError;
use crate::input::{BoolYnInput, DateInput, FloatInput, IntInput};

/// Coerce a raw value to a yes/no boolean.
///
/// Text matching `y`, `yes`, `t`, or `true` case-insensitively (whole
/// string) is `true`, as is the boolean `true` itself. Every other input
/// is `false`.
pub fn bool_yn(input: BoolYnInput) -> bool {
    match input {
        BoolYnInput::Text(text) => {
            let lowered = text.to_ascii_lowercase();
            matches!(lowered.as_str(), "y" | "yes" | "t" | "true")
        }
        BoolYnInput::Bool(value) => value,
        BoolYnInput::Int(_) | BoolYnInput::Float(_) => false,
    }
}

/// Coerce a raw value to `f64`.
///
/// Numbers convert directly; text is parsed. Booleans and unparseable
/// text carry no float conversion and fail with `ArgumentType`.
pub fn float(field: &'static str, input: FloatInput) -> Result<f64, AccessorError> {
    match input {
        FloatInput::Float(value) => Ok(value),
        FloatInput::Int(value) => Ok(value as f64),
        FloatInput::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            AccessorError::ArgumentType {
                field,
                expected: "Float",
            }
        }),
        FloatInput::Bool(_) => Err(AccessorError::ArgumentType {
            field,
            expected: "Float",
        }),
    }
}

/// Coerce a raw value to `i64`.
///
/// Floats truncate toward zero. Text parses as an integer, falling back
/// to float-parse-then-truncate so `"42.9"` stores `42`. Booleans and
/// unparseable text fail with `ArgumentType`.
pub fn int(field: &'static str, input: IntInput) -> Result<i64, AccessorError> {
    match input {
        IntInput::Int(value) => Ok(value),
        IntInput::Float(value) => Ok(value.trunc() as i64),
        IntInput::Text(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .or_else(|_| trimmed.parse::<f64>().map(|value| value.trunc() as i64))
                .map_err(|_| AccessorError::ArgumentType {
                    field,
                    expected: "Integer",
                })
        }
        IntInput::Bool(_) => Err(AccessorError::ArgumentType {
            field,
            expected: "Integer",
        }),
    }
}

/// Coerce a raw value to a calendar date.
///
/// Text is parsed as an ISO-8601 date (`%Y-%m-%d`); the chrono parse
/// error propagates as `DateParse`. A pre-typed date passes through
/// unchanged.
pub fn date(field: &'static str, input: DateInput) -> Result<NaiveDate, AccessorError> {
    match input {
        DateInput::Text(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|source| AccessorError::DateParse { field, source }),
        DateInput::Date(value) => Ok(value),
    }
}
