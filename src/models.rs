use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw body of `POST /generate-blog`. Every field is an optional
/// [`Value`] so that missing fields and wrong JSON types surface as our
/// own descriptive validation errors instead of extractor failures.
#[derive(Debug, Deserialize)]
pub struct GenerateBlogPayload {
    #[serde(default)]
    pub topic: Option<Value>,
    #[serde(default, rename = "wordCount")]
    pub word_count: Option<Value>,
    #[serde(default)]
    pub tone: Option<Value>,
}

/// A generation request that has passed server-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Trimmed, 1..=200 characters.
    pub topic: String,
    /// 1..=2000.
    pub word_count: u32,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Informal,
    Humorous,
    Serious,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Humorous => "humorous",
            Tone::Serious => "serious",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Tone {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "formal" => Ok(Tone::Formal),
            "informal" => Ok(Tone::Informal),
            "humorous" => Ok(Tone::Humorous),
            "serious" => Ok(Tone::Serious),
            other => Err(format!("Unknown tone: {other}")),
        }
    }
}

/// Raw body of `POST /submit-feedback`.
#[derive(Debug, Deserialize)]
pub struct FeedbackPayload {
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Polarity {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            other => Err(format!("Unknown feedback type: {other}")),
        }
    }
}

// ── Response envelopes ────────────────────────────────────────────────────────

/// Envelope for every successful JSON response.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, message: None, data }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self { success: true, message: Some(message.into()), data }
    }
}

/// Envelope for every failed JSON response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogData {
    pub blog: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FeedbackTotals {
    pub total_positive: usize,
    pub total_negative: usize,
}

#[derive(Debug, Serialize)]
pub struct FeedbackSummary {
    pub positive_feedback: Vec<String>,
    pub negative_feedback: Vec<String>,
    pub total_positive: usize,
    pub total_negative: usize,
}
