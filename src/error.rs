use alloc::string::{String, ToString};
use thiserror::Error;

/// Error types for `ArrayList` operations
///
/// Out-of-range indices are not errors: positional operations ignore them
/// and report through `Option` instead.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ArrayListError {
    /// A resize policy parameter is outside its allowed range
    #[error("Invalid resize policy: {parameter} = {value} is out of range")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: f64,
    },
    /// Input to `from_json` is not a JSON array of the element type
    #[error("Malformed JSON at line {line}, column {column}: {reason}")]
    MalformedJson {
        /// 1-based line of the failure, 0 if unknown
        line: usize,
        /// 1-based column of the failure, 0 if unknown
        column: usize,
        /// Parser message
        reason: String,
    },
    /// An element could not be encoded by `to_json`
    #[error("Serialization failed: {reason}")]
    Serialization {
        /// Serializer message
        reason: String,
    },
}

impl ArrayListError {
    pub(crate) fn malformed(err: &serde_json::Error) -> Self {
        ArrayListError::MalformedJson {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn serialization(err: &serde_json::Error) -> Self {
        ArrayListError::Serialization {
            reason: err.to_string(),
        }
    }
}
