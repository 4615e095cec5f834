//! Error types for XML tree parsing and writing.

use thiserror::Error;

/// Error type for element tree operations.
#[derive(Debug, Error)]
pub enum XmlError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error while writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Writer output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    /// Unknown entity or malformed character reference.
    #[error("escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Element tag does not match the object being read.
    #[error("unexpected element '{found}', expected '{expected}'")]
    UnexpectedElement {
        /// Namespace-qualified tag the object expects.
        expected: String,
        /// Tag actually found.
        found: String,
    },

    /// End tag without a matching start tag, or input ended inside an element.
    #[error("unbalanced tags: {message}")]
    UnbalancedTags {
        /// Error message.
        message: String,
    },

    /// Namespace prefix used without a declaration.
    #[error("undeclared namespace prefix '{prefix}'")]
    UnknownPrefix {
        /// The undeclared prefix.
        prefix: String,
    },

    /// Document has no root element.
    #[error("document has no root element")]
    NoRootElement,
}

impl XmlError {
    /// Creates an unexpected element error.
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedElement {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an unbalanced tags error.
    pub fn unbalanced(message: impl Into<String>) -> Self {
        Self::UnbalancedTags {
            message: message.into(),
        }
    }
}

/// Result type alias for element tree operations.
pub type Result<T> = std::result::Result<T, XmlError>;
