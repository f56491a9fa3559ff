use serde::{Deserialize, Serialize};

/// Result of a use case call against an external service
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Use case failure with a stable machine-readable code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// The service answered, but its payload does not line up with the request
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::new("RESPONSE_MISMATCH", message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_details() {
        let err = UseCaseError::mismatch("3 reviews sent, 2 results received")
            .with_details("sentiment/analyze");
        assert_eq!(
            err.to_string(),
            "[RESPONSE_MISMATCH] 3 reviews sent, 2 results received: sentiment/analyze"
        );
    }
}
