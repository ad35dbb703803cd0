use thiserror::Error;

/// Errors raised by generated writers.
///
/// Raised synchronously to the writer's caller; a failed write leaves the
/// storage slot at its prior value. The `bool_yn` writer never constructs
/// one of these.
#[derive(Error, Debug)]
pub enum AccessorError {
    /// The input lacks the conversion required by the slot's semantic type.
    #[error("{field} must be {expected}")]
    ArgumentType {
        field: &'static str,
        expected: &'static str,
    },

    /// The input text is not a valid calendar-date representation.
    #[error("{field} is not a valid date: {source}")]
    DateParse {
        field: &'static str,
        #[source]
        source: chrono::format::ParseError,
    },
}
