use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{
    FeedbackPayload, FeedbackSummary, FeedbackTotals, GenerateBlogPayload, GenerationRequest,
    Polarity, Tone,
};
use crate::provider::CompletionClient;
use crate::store::feedback_store::FeedbackStore;

pub const MAX_TOPIC_LENGTH: usize = 200;
pub const MAX_WORD_COUNT: u32 = 2000;

/// Hard ceiling on the completion size, regardless of the requested
/// word count.
const MAX_COMPLETION_TOKENS: u32 = 1024;
const TOKENS_PER_WORD: u32 = 4;

#[derive(Clone)]
pub struct BlogService {
    config: Arc<AppConfig>,
    provider: CompletionClient,
    feedback: FeedbackStore,
}

impl BlogService {
    pub fn new(config: Arc<AppConfig>, provider: CompletionClient, feedback: FeedbackStore) -> Self {
        Self { config, provider, feedback }
    }

    /// Validates the raw payload, builds the prompt, and runs one
    /// completion against the provider. Validation failures never reach
    /// the network.
    pub async fn generate(&self, payload: GenerateBlogPayload) -> Result<String, AppError> {
        let request = validate(payload)?;

        let api_key = self
            .config
            .provider_api_key
            .as_deref()
            .ok_or(AppError::ApiKeyMissing)?;

        let prompt = build_prompt(&request);
        let max_tokens = completion_token_budget(request.word_count);

        info!(
            topic = %request.topic,
            word_count = request.word_count,
            tone = %request.tone,
            max_tokens,
            "Generating blog post"
        );

        self.provider.complete(api_key, &prompt, max_tokens).await
    }

    pub fn submit_feedback(&self, payload: FeedbackPayload) -> Result<FeedbackTotals, AppError> {
        let (Some(blog), Some(feedback)) = (payload.blog, payload.feedback) else {
            return Err(AppError::MissingFeedbackFields);
        };
        if blog.is_empty() || feedback.is_empty() {
            return Err(AppError::MissingFeedbackFields);
        }
        if blog.trim().is_empty() {
            return Err(AppError::EmptyFeedbackBlog);
        }
        let polarity =
            Polarity::try_from(feedback.as_str()).map_err(|_| AppError::InvalidFeedbackType)?;

        Ok(self.feedback.append(polarity, blog.trim().to_string()))
    }

    pub fn feedback_summary(&self) -> FeedbackSummary {
        self.feedback.summary()
    }
}

/// Server-side validation. Runs regardless of whatever the client
/// checked; the client is never trusted.
fn validate(payload: GenerateBlogPayload) -> Result<GenerationRequest, AppError> {
    let (Some(topic), Some(word_count), Some(tone)) =
        (payload.topic, payload.word_count, payload.tone)
    else {
        return Err(AppError::MissingFields);
    };

    // as_u64 rejects non-numbers, negatives and fractional values in one go
    let word_count = word_count
        .as_u64()
        .filter(|w| (1..=MAX_WORD_COUNT as u64).contains(w))
        .ok_or(AppError::InvalidWordCount { max: MAX_WORD_COUNT })? as u32;

    let topic = topic
        .as_str()
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.chars().count() <= MAX_TOPIC_LENGTH)
        .ok_or(AppError::InvalidTopic { max: MAX_TOPIC_LENGTH })?
        .to_string();

    let tone = tone
        .as_str()
        .and_then(|t| Tone::try_from(t).ok())
        .ok_or(AppError::InvalidTone)?;

    Ok(GenerationRequest { topic, word_count, tone })
}

/// Deterministic instruction string embedding the three request
/// parameters plus the formatting directives the renderer relies on
/// (bold title first, no preamble, structured body).
fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate a well-structured, engaging, and informative blog post on the topic: \
         **\"{topic}\"** with approximately **{words} words**, written in a **{tone} tone**. \
         The blog should be clear, coherent, and creatively written while maintaining \
         logical flow and readability.\n\
         \n\
         Rules (STRICT - DO NOT VIOLATE):\n\
         - Begin the response IMMEDIATELY with a bold title.\n\
         - DO NOT generate ANY text before the title: no internal thoughts, no reasoning, \
         no explanations.\n\
         - Structure: a bold, engaging title; an introduction with a strong hook (a fact, \
         question, or statement); a body using bold subheadings, examples, and bullet \
         points where useful; a conclusion that summarizes and gives a strong takeaway.\n\
         - DO NOT include any meta-commentary or pre-text before or after the blog.\n\
         - DO NOT use markdown beyond bold titles and subheadings.",
        topic = request.topic,
        words = request.word_count,
        tone = request.tone,
    )
}

/// Response-size directive: proportional to the requested word count,
/// capped at a fixed ceiling.
fn completion_token_budget(word_count: u32) -> u32 {
    (word_count * TOKENS_PER_WORD).min(MAX_COMPLETION_TOKENS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: serde_json::Value) -> GenerateBlogPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_the_full_valid_range() {
        for tone in ["formal", "informal", "humorous", "serious"] {
            for word_count in [1, 500, 2000] {
                let request = validate(payload(json!({
                    "topic": "Rust web services",
                    "wordCount": word_count,
                    "tone": tone,
                })))
                .unwrap();
                assert_eq!(request.word_count, word_count);
                assert_eq!(request.tone.as_str(), tone);
            }
        }
    }

    #[test]
    fn trims_the_topic() {
        let request = validate(payload(json!({
            "topic": "  spaced out  ",
            "wordCount": 100,
            "tone": "formal",
        })))
        .unwrap();
        assert_eq!(request.topic, "spaced out");
    }

    #[test]
    fn accepts_a_topic_of_exactly_max_length() {
        let topic = "x".repeat(MAX_TOPIC_LENGTH);
        assert!(validate(payload(json!({
            "topic": topic,
            "wordCount": 100,
            "tone": "serious",
        })))
        .is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        for body in [
            json!({}),
            json!({ "topic": "t" }),
            json!({ "topic": "t", "wordCount": 100 }),
            json!({ "wordCount": 100, "tone": "formal" }),
        ] {
            assert!(matches!(validate(payload(body)), Err(AppError::MissingFields)));
        }
    }

    #[test]
    fn rejects_bad_word_counts() {
        for word_count in [json!(0), json!(2001), json!(-5), json!(10.5), json!("500")] {
            let result = validate(payload(json!({
                "topic": "t",
                "wordCount": word_count,
                "tone": "formal",
            })));
            assert!(matches!(result, Err(AppError::InvalidWordCount { .. })));
        }
    }

    #[test]
    fn rejects_bad_topics() {
        for topic in [json!(""), json!("   "), json!("y".repeat(201)), json!(42)] {
            let result = validate(payload(json!({
                "topic": topic,
                "wordCount": 100,
                "tone": "formal",
            })));
            assert!(matches!(result, Err(AppError::InvalidTopic { .. })));
        }
    }

    #[test]
    fn rejects_unknown_tones() {
        for tone in [json!("sarcastic"), json!("FORMAL"), json!(3)] {
            let result = validate(payload(json!({
                "topic": "t",
                "wordCount": 100,
                "tone": tone,
            })));
            assert!(matches!(result, Err(AppError::InvalidTone)));
        }
    }

    #[test]
    fn prompt_embeds_all_request_parameters() {
        let request = GenerationRequest {
            topic: "async Rust".to_string(),
            word_count: 750,
            tone: Tone::Humorous,
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("async Rust"));
        assert!(prompt.contains("750 words"));
        assert!(prompt.contains("humorous tone"));
        assert!(prompt.contains("bold title"));
        assert_eq!(prompt, build_prompt(&request));
    }

    #[test]
    fn token_budget_is_proportional_with_a_ceiling() {
        assert_eq!(completion_token_budget(10), 40);
        assert_eq!(completion_token_budget(256), 1024);
        assert_eq!(completion_token_budget(2000), 1024);
    }

    fn service_without_provider_key() -> BlogService {
        let config = AppConfig {
            provider_api_url: "http://localhost:0".to_string(),
            provider_api_key: None,
            model: "test-model".to_string(),
            port: 0,
            feedback_enabled: true,
        };
        let provider = CompletionClient::new(&config.provider_api_url, &config.model);
        BlogService::new(Arc::new(config), provider, FeedbackStore::new())
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error() {
        let svc = service_without_provider_key();
        let err = svc
            .generate(payload(json!({
                "topic": "t",
                "wordCount": 100,
                "tone": "formal",
            })))
            .await
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn validation_runs_before_the_configuration_check() {
        let svc = service_without_provider_key();
        let err = svc
            .generate(payload(json!({
                "topic": "",
                "wordCount": 100,
                "tone": "formal",
            })))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn feedback_validation() {
        let svc = service_without_provider_key();

        let missing: FeedbackPayload = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            svc.submit_feedback(missing),
            Err(AppError::MissingFeedbackFields)
        ));

        let blank: FeedbackPayload =
            serde_json::from_value(json!({ "blog": "   ", "feedback": "positive" })).unwrap();
        assert!(matches!(svc.submit_feedback(blank), Err(AppError::EmptyFeedbackBlog)));

        let unknown: FeedbackPayload =
            serde_json::from_value(json!({ "blog": "text", "feedback": "neutral" })).unwrap();
        assert!(matches!(svc.submit_feedback(unknown), Err(AppError::InvalidFeedbackType)));

        let ok: FeedbackPayload =
            serde_json::from_value(json!({ "blog": " text ", "feedback": "negative" })).unwrap();
        let totals = svc.submit_feedback(ok).unwrap();
        assert_eq!(totals.total_negative, 1);
        assert_eq!(svc.feedback_summary().negative_feedback, vec!["text".to_string()]);
    }
}
