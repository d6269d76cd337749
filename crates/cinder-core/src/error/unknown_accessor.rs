use super::Error;

/// Error when a query accessor is looked up by a name the model never bound.
#[derive(Debug)]
pub(super) struct UnknownAccessor {
    model: Box<str>,
    name: Box<str>,
}

impl std::error::Error for UnknownAccessor {}

impl core::fmt::Display for UnknownAccessor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown accessor: `{}` has no accessor named `{}`",
            self.model, self.name
        )
    }
}

impl Error {
    /// Creates an unknown accessor error.
    pub fn unknown_accessor(model: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAccessor(UnknownAccessor {
            model: model.into().into(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown accessor error.
    pub fn is_unknown_accessor(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnknownAccessor(_))
    }
}
