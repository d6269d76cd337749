use super::Error;

/// Error when a schema definition is invalid.
///
/// This occurs when:
/// - A model declares the same column twice with conflicting definitions
/// - A column name is empty or shadows a key column
/// - A secondary index is requested on a key column
/// - Two indexed columns would produce the same accessor name
///
/// These errors are raised while a model is being declared, before any query
/// can observe it.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidSchema(_))
    }
}
