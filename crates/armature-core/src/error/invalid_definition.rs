use super::Error;

/// Error when a model, field or sequence definition is invalid.
///
/// This occurs when:
/// - A model name or table name is registered twice
/// - A field is declared twice on the same model
/// - The registry is mutated after bootstrap
///
/// These errors indicate a bug in model declarations. They are caught during
/// the bootstrap phase and the calling framework is expected to treat them as
/// unrecoverable.
#[derive(Debug)]
pub(super) struct InvalidDefinitionError {
    message: Box<str>,
}

impl std::error::Error for InvalidDefinitionError {}

impl core::fmt::Display for InvalidDefinitionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid definition: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid definition error.
    pub fn invalid_definition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDefinition(InvalidDefinitionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid definition error.
    pub fn is_invalid_definition(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDefinition(_))
    }
}
