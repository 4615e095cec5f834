//! Error types for extended data construction, mutation and reading.

use ironkml_core::XmlError;
use thiserror::Error;

/// Error type for extended data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Object requires an identifier but none was given.
    #[error("'{element}' requires a non-empty id")]
    MissingIdentity {
        /// Element name.
        element: String,
    },

    /// `SchemaData` requires a schema URL but none was given.
    #[error("required attribute 'schemaUrl' is missing or empty")]
    MissingSchemaUrl,

    /// Field type outside the closed set of KML field types.
    #[error(
        "field '{name}' has the type '{field_type}' which is invalid; the type must be one of \
         'string', 'int', 'uint', 'short', 'ushort', 'float', 'double', 'bool'"
    )]
    InvalidFieldType {
        /// Field name.
        name: String,
        /// Rejected type.
        field_type: String,
    },

    /// Typed data entry without a name.
    #[error("entry name must be a non-empty string")]
    InvalidEntryName,

    /// Bulk field assignment with an unsupported shape.
    #[error("invalid fields argument: {reason}")]
    InvalidFieldsArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// Bulk data assignment with an unsupported shape.
    #[error("invalid data argument: {reason}")]
    InvalidDataArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// XML reading or writing error.
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),
}

impl DataError {
    /// Creates a missing identity error.
    pub fn missing_identity(element: impl Into<String>) -> Self {
        Self::MissingIdentity {
            element: element.into(),
        }
    }

    /// Creates an invalid field type error.
    pub fn invalid_field_type(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self::InvalidFieldType {
            name: name.into(),
            field_type: field_type.into(),
        }
    }

    /// Creates an invalid fields argument error.
    pub fn invalid_fields(reason: impl Into<String>) -> Self {
        Self::InvalidFieldsArgument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid data argument error.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidDataArgument {
            reason: reason.into(),
        }
    }
}

/// Result type alias for extended data operations.
pub type Result<T> = std::result::Result<T, DataError>;
