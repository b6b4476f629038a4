use super::Error;

#[derive(Debug)]
pub(super) struct UnknownConnectorError {
    name: Box<str>,
}

impl std::error::Error for UnknownConnectorError {}

impl core::fmt::Display for UnknownConnectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connector `{}` does not exist", self.name)
    }
}

impl Error {
    /// Creates an error for a connector name missing from a registry.
    pub fn unknown_connector(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownConnector(UnknownConnectorError {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_connector(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnknownConnector(_))
    }
}
