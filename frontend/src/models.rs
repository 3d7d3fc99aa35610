use serde::{Deserialize, Serialize};

/// Request body for `POST /generate-blog`, matching the backend contract.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateBlogRequest {
    pub topic: String,
    #[serde(rename = "wordCount")]
    pub word_count: u32,
    pub tone: String,
}

/// Request body for `POST /submit-feedback`.
#[derive(Clone, Debug, Serialize)]
pub struct FeedbackRequest {
    pub blog: String,
    pub feedback: String,
}

/// Envelope shared by every backend response.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogData {
    pub blog: String,
}

/// Derives the paragraph view from the raw generated text: split on line
/// breaks, drop blank lines, keep the original order. The raw text stays
/// canonical in state; this runs only at render time.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::paragraphs;

    #[test]
    fn splits_into_ordered_non_empty_paragraphs() {
        let text = "**Title**\n\nPara one.\n\nPara two.";
        assert_eq!(paragraphs(text), vec!["**Title**", "Para one.", "Para two."]);
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        assert_eq!(paragraphs("a\n   \n\t\nb"), vec!["a", "b"]);
        assert!(paragraphs("\n \n").is_empty());
    }
}
