use super::Error;

/// Error when a query restricts rows in a way the store cannot serve.
///
/// Secondary indexes only answer single-value equality lookups, and a query
/// may use at most one of them and never together with a key restriction.
#[derive(Debug)]
pub(super) struct UnsupportedQuery {
    message: Box<str>,
}

impl std::error::Error for UnsupportedQuery {}

impl core::fmt::Display for UnsupportedQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported query: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported query error.
    pub fn unsupported_query(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedQuery(UnsupportedQuery {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported query error.
    pub fn is_unsupported_query(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnsupportedQuery(_))
    }
}
