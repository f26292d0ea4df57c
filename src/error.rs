use thiserror::Error;

/// Failures that come from the data itself rather than from I/O.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input has no header row")]
    MissingHeader,

    #[error("row {row}: column '{column}' is missing")]
    MissingColumn { column: String, row: usize },

    #[error("row {row}: column '{column}' value {value:?} is not an integer")]
    InvalidInteger {
        column: String,
        value: String,
        row: usize,
    },

    #[error("row {row}: column '{column}' value {value:?} is not a number")]
    InvalidFloat {
        column: String,
        value: String,
        row: usize,
    },
}
