use super::Error;

/// Error raised by a driver while executing an operation.
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "driver operation failed: {}", self.inner)
    }
}

impl Error {
    /// Creates an error wrapping a failure reported by the storage driver.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error came from the storage driver.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::DriverOperationFailed(_))
    }
}
