//! Error types for the siteutils CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for siteutils operations.
///
/// Each variant maps to a specific exit code via [`SiteError::exit_code`].
#[derive(Error, Debug)]
pub enum SiteError {
    /// A directory or file argument is missing or of the wrong type.
    #[error("{0}")]
    InvalidPath(String),

    /// Alt-text derivation produced an empty string.
    #[error("cannot derive alt text from '{0}': result is empty")]
    EmptyName(String),

    /// Required configuration is missing from the environment.
    #[error("{0}")]
    Config(String),

    /// A file could not be opened, read, or written.
    #[error("{0}")]
    Io(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    Git(String),

    /// The edge-config API request failed.
    #[error("Edge config request failed: {0}")]
    Api(String),
}

impl SiteError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SiteError::InvalidPath(_) => exit_codes::USER_ERROR,
            SiteError::EmptyName(_) => exit_codes::USER_ERROR,
            SiteError::Config(_) => exit_codes::USER_ERROR,
            SiteError::Io(_) => exit_codes::IO_FAILURE,
            SiteError::Git(_) => exit_codes::GIT_FAILURE,
            SiteError::Api(_) => exit_codes::API_FAILURE,
        }
    }
}

/// Result type alias for siteutils operations.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_error_has_correct_exit_code() {
        let err = SiteError::InvalidPath("directory 'x' does not exist".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn empty_name_error_has_correct_exit_code() {
        let err = SiteError::EmptyName("_.png".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = SiteError::Config("missing $VERCEL_ACCESS_TOKEN".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = SiteError::Io("failed to write output".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = SiteError::Git("push failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn api_error_has_correct_exit_code() {
        let err = SiteError::Api("status 401".to_string());
        assert_eq!(err.exit_code(), exit_codes::API_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SiteError::EmptyName("_.png".to_string());
        assert_eq!(
            err.to_string(),
            "cannot derive alt text from '_.png': result is empty"
        );

        let err = SiteError::Git("merge failed".to_string());
        assert_eq!(err.to_string(), "Git operation failed: merge failed");
    }
}
