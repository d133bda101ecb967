use thiserror::Error;

/// Convenience result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type returned by filters.
///
/// A single error enum shared by every filter and by the registry. Resolving a missing key is
/// not an error; see [`crate::path::resolve`].
#[derive(Debug, Error)]
pub enum FilterError {
    /// The input does not have the expected shape (not a record, not a sequence, wrong scalar).
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A non-overwriting merge found keys that already exist in the accumulated result.
    #[error("cannot merge records, keys conflict: {keys:?}")]
    KeyConflict { keys: Vec<String> },

    /// A required filter argument is absent or not of the required type.
    #[error("missing argument for '{filter}': {message}")]
    MissingArgument {
        filter: &'static str,
        message: String,
    },

    /// A selection pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// An argument is present and typed but cannot be used.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No filter is registered under the requested name.
    #[error("unknown filter '{name}'")]
    UnknownFilter { name: String },

    /// Underlying I/O error while reading a filter input document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A filter input document is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    pub(crate) fn missing_argument(filter: &'static str, message: impl Into<String>) -> Self {
        Self::MissingArgument {
            filter,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
