/// Summarizer error types
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// Missing or invalid configuration (e.g. no API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input rejected before reaching the model
    #[error("{0}")]
    Validation(String),

    /// Upstream LLM call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Summary history could not be written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SummarizerError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl SummarizerError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Config(_) => 500,
            Self::Llm(_) => 502,
            Self::Network(_) => 503,
            Self::Storage(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(SummarizerError::validation("too short").status_code(), 400);
        assert_eq!(SummarizerError::config("no key").status_code(), 500);
        assert_eq!(SummarizerError::llm("rate limited").status_code(), 502);
        assert_eq!(SummarizerError::network("refused").status_code(), 503);
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = SummarizerError::validation("Text too short for summarization.");
        assert_eq!(err.to_string(), "Text too short for summarization.");
        assert!(err.is_validation());
        assert!(!SummarizerError::internal("x").is_validation());
    }
}
