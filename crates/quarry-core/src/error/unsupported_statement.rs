use super::Error;

/// Error when a statement kind name does not match any kind the serializer
/// can render.
#[derive(Debug)]
pub(super) struct UnsupportedStatementError {
    kind: Box<str>,
}

impl std::error::Error for UnsupportedStatementError {}

impl core::fmt::Display for UnsupportedStatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported statement kind: {}", self.kind)
    }
}

impl Error {
    /// Creates an unsupported statement error.
    pub fn unsupported_statement(kind: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedStatement(
            UnsupportedStatementError {
                kind: kind.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported statement error.
    pub fn is_unsupported_statement(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnsupportedStatement(_))
    }
}
