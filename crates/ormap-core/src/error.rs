//! Core error types.

use thiserror::Error;

/// Metadata resolution errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested class is empty or unknown to the class hierarchy.
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    /// A mapping driver has no mapping for the class.
    #[error("couldn't find class '{0}'")]
    ClassNotFound(String),

    /// The class has no identifier field after all merges.
    #[error("no identifier defined for class '{0}'")]
    NoIdentifierDefined(String),

    /// Inheritance type and options are inconsistent.
    #[error("invalid inheritance configuration for class '{class}': {reason}")]
    InvalidInheritanceConfiguration {
        /// Class whose configuration was rejected.
        class: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The class hierarchy loops back on itself.
    #[error("cyclic inheritance detected at class '{0}'")]
    CyclicInheritance(String),

    /// Mapping document could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Mapping document could not be parsed.
    #[error("mapping document error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// Build an inheritance configuration error.
    pub fn invalid_inheritance(class: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInheritanceConfiguration {
            class: class.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::ClassNotFound("User".into()).to_string(),
            "couldn't find class 'User'"
        );
        assert_eq!(
            Error::invalid_inheritance("Admin", "strategy differs from parent").to_string(),
            "invalid inheritance configuration for class 'Admin': strategy differs from parent"
        );
    }
}
