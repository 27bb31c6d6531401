//! Error types for the complaint intake core

use thiserror::Error;

/// Failure reported by a [`Submitter`](crate::submission::Submitter).
///
/// The simulated submitter never produces one; a real backend would.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The backend could not be reached
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the complaint
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Main error type for intake operations
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Label does not match any of the fixed complaint categories
    #[error("Unknown complaint category: {0}")]
    UnknownCategory(String),

    /// Key does not match any form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Submission failed
    #[error("Submission error: {0}")]
    Submission(#[from] SubmitError),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntakeError::UnknownCategory("Poupança".to_string());
        assert_eq!(format!("{}", err), "Unknown complaint category: Poupança");
    }

    #[test]
    fn test_error_from_submit_error() {
        let err: IntakeError = SubmitError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, IntakeError::Submission(SubmitError::Unavailable(_))));
        assert_eq!(
            err.to_string(),
            "Submission error: Submission service unavailable: timeout"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: IntakeError = json_err.into();
        assert!(matches!(err, IntakeError::Config(_)));
    }
}
