//! Error types for parameter definition and string conversion.

use thiserror::Error;

/// Errors raised by parameter construction and value/string conversion.
///
/// Every variant carries a human-readable, parameter-attributed message.
/// All failures are fatal to the operation that raised them; there is no
/// internal recovery or retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A string could not be converted into a typed value.
    #[error("{descriptor}: failed to convert '{text}' to type [{type_name}]: {reason}")]
    Parse {
        /// Descriptor of the parameter the text was destined for.
        descriptor: String,
        /// The offending input text.
        text: String,
        /// Display name of the target type.
        type_name: &'static str,
        /// Underlying conversion failure.
        reason: String,
    },

    /// A typed value could not be rendered to its string form.
    #[error("{descriptor}: failed to convert value of type [{type_name}] to string: {reason}")]
    Render {
        /// Descriptor of the parameter that owns the value.
        descriptor: String,
        /// Display name of the source type.
        type_name: &'static str,
        /// Underlying conversion failure.
        reason: String,
    },

    /// A default value failed its own validity specification.
    ///
    /// Raised only during [`ParamDef`](crate::ParamDef) construction; the
    /// descriptor is never observable afterwards.
    #[error("default value [{value}] for parameter '{name}' not valid according to specification {spec}")]
    InvalidDefault {
        /// Name of the parameter being constructed.
        name: String,
        /// String form of the rejected default value.
        value: String,
        /// Description of the validity specification that rejected it.
        spec: String,
    },
}

impl ParamError {
    /// Create a string-to-value conversion error.
    pub fn parse(
        descriptor: impl Into<String>,
        text: impl Into<String>,
        type_name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ParamError::Parse {
            descriptor: descriptor.into(),
            text: text.into(),
            type_name,
            reason: reason.into(),
        }
    }

    /// Create a value-to-string conversion error.
    pub fn render(
        descriptor: impl Into<String>,
        type_name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ParamError::Render {
            descriptor: descriptor.into(),
            type_name,
            reason: reason.into(),
        }
    }

    /// Create a default-value rejection error.
    pub fn invalid_default(
        name: impl Into<String>,
        value: impl Into<String>,
        spec: impl Into<String>,
    ) -> Self {
        ParamError::InvalidDefault {
            name: name.into(),
            value: value.into(),
            spec: spec.into(),
        }
    }
}

/// Result type for parameter operations.
pub type ParamResult<T> = Result<T, ParamError>;
