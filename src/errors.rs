use thiserror::Error;

/// Top-level application error. Variants are grouped by the failure class
/// that decides the HTTP status: validation and provider errors are
/// attributed to the caller (400), configuration errors to us (500).
#[derive(Debug, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Missing required fields: topic, wordCount, and tone are required")]
    MissingFields,

    #[error("Word count must be a positive number up to {max}")]
    InvalidWordCount { max: u32 },

    #[error("Topic must be a string between 1 and {max} characters")]
    InvalidTopic { max: usize },

    #[error("Tone must be one of: formal, informal, humorous, serious")]
    InvalidTone,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    // ── Feedback validation errors ───────────────────────────────────────────
    #[error("Missing blog content or feedback type")]
    MissingFeedbackFields,

    #[error("Blog content must be a non-empty string")]
    EmptyFeedbackBlog,

    #[error("Feedback type must be 'positive' or 'negative'")]
    InvalidFeedbackType,

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("API key not configured")]
    ApiKeyMissing,

    // ── Provider errors ──────────────────────────────────────────────────────
    #[error("Text generation timed out after {0} seconds")]
    ProviderTimeout(u64),

    #[error("Could not reach the text generation service: {0}")]
    ProviderUnreachable(String),

    #[error("Text generation failed: {message}")]
    ProviderRejected { status: u16, message: String },

    #[error("The text generation service returned no content")]
    EmptyCompletion,

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields
                | AppError::InvalidWordCount { .. }
                | AppError::InvalidTopic { .. }
                | AppError::InvalidTone
                | AppError::MalformedBody(_)
                | AppError::MissingFeedbackFields
                | AppError::EmptyFeedbackBlog
                | AppError::InvalidFeedbackType
        )
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::ApiKeyMissing)
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, AppError::Unexpected(_))
    }
}
