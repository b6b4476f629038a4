use super::Error;

/// Error when a connector URL cannot be used: an unsupported scheme, or a
/// MySQL URL missing its host or database.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    reason: Box<str>,
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection URL: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid connection URL error.
    pub fn invalid_connection_url(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error, or the error it wraps, is an invalid
    /// connection URL error.
    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}
