use gloo_net::http::Request;

use crate::models::{ApiEnvelope, BlogData, FeedbackRequest, GenerateBlogRequest};

/// Base URL of the backend API server.
const API_BASE: &str = "http://localhost:5001";

/// Requests a generated blog post. Returns the raw blog text, or the
/// server-provided error message (with generic fallbacks).
pub async fn generate_blog(request: &GenerateBlogRequest) -> Result<String, String> {
    let resp = Request::post(&format!("{API_BASE}/generate-blog"))
        .json(request)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let envelope = resp
        .json::<ApiEnvelope<BlogData>>()
        .await
        .map_err(|e| format!("Parse error: {e}"))?;

    match envelope {
        ApiEnvelope { success: true, data: Some(data), .. } => Ok(data.blog),
        ApiEnvelope { error: Some(error), .. } => Err(error),
        _ => Err("Unknown error".to_string()),
    }
}

/// Submits one polarity-tagged blog text.
pub async fn submit_feedback(blog: &str, liked: bool) -> Result<(), String> {
    let body = FeedbackRequest {
        blog: blog.to_string(),
        feedback: if liked { "positive" } else { "negative" }.to_string(),
    };

    let resp = Request::post(&format!("{API_BASE}/submit-feedback"))
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let envelope = resp
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .map_err(|e| format!("Parse error: {e}"))?;

    if envelope.success {
        Ok(())
    } else {
        Err(envelope
            .error
            .unwrap_or_else(|| "Failed to submit feedback".to_string()))
    }
}
