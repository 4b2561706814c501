use thiserror::Error;

/// A required field was absent (or `null`) where its value was needed.
///
/// `field` is the wire name of the field, `shape` the name of the enclosing message shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing required field '{field}' of '{shape}'")]
pub struct MissingRequiredFieldError {
    pub shape: &'static str,
    pub field: String,
}

impl MissingRequiredFieldError {
    pub fn new(shape: &'static str, field: impl Into<String>) -> Self {
        Self {
            shape,
            field: field.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeserializationError {
    #[error("could not parse value '{value}' to enum variant of '{enum_name}'")]
    StringToEnumParseError { enum_name: String, value: String },

    #[error(transparent)]
    MissingRequiredField(#[from] MissingRequiredFieldError),

    #[error("malformed wire value for '{shape}'")]
    MalformedWireValue {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error while (de)serializing")]
    SerdeError(#[from] serde_json::Error),
}

/// Returned when the populated alternative of an [`Either`](crate::either::Either) is not the
/// one the caller asked for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EitherError {
    #[error("expected the {expected} alternative, but the value holds the {found} one")]
    WrongAlternative {
        expected: &'static str,
        found: &'static str,
    },
}
