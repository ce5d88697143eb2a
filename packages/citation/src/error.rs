//! Error types for the citation engine.
//!
//! All failure modes cross the engine boundary as typed values; nothing
//! in this crate panics on user input.

use thiserror::Error;

/// Main error type for citation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CitationError {
    /// The input matches neither citation grammar.
    #[error("Unrecognized citation pattern: '{0}'")]
    UnrecognizedPattern(String),

    /// The input matches a grammar structurally but a component is
    /// missing, dangling or out of place.
    #[error("Malformed citation: {component}")]
    MalformedCitation {
        /// Description of the missing or dangling component.
        component: String,
    },

    /// The trailing abbreviation is not in the statute registry.
    #[error("Unknown statute abbreviation: '{0}'")]
    UnknownStatute(String),

    /// The requested target language is not one of de/fr/it/en.
    #[error("Unsupported language: '{0}'. Expected one of: de, fr, it, en")]
    UnsupportedLanguage(String),

    /// The registry bijection is violated. Indicates a defect in the
    /// statute table, not a user error.
    #[error("Internal registry inconsistency: {0}")]
    InternalInconsistency(String),
}

impl CitationError {
    /// Create a `MalformedCitation` error from a component description.
    #[must_use]
    pub fn malformed(component: impl Into<String>) -> Self {
        Self::MalformedCitation {
            component: component.into(),
        }
    }
}

/// Result type alias for citation operations.
pub type Result<T> = std::result::Result<T, CitationError>;
