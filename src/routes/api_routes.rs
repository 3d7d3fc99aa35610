use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::error;

use crate::errors::AppError;
use crate::models::{ApiError, ApiSuccess, BlogData, FeedbackPayload, GenerateBlogPayload};
use crate::service::blog_service::BlogService;

/// Builds the HTTP surface. The feedback routes are only mounted when
/// enabled in configuration; otherwise those paths 404.
pub fn router(service: BlogService, feedback_enabled: bool) -> Router {
    let mut router = Router::new().route("/generate-blog", post(generate_blog_handler));
    if feedback_enabled {
        router = router
            .route("/submit-feedback", post(submit_feedback_handler))
            .route("/get-feedback", get(get_feedback_handler));
    }
    router.with_state(service)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/generate-blog` — validate, call the provider, return the blog text.
pub async fn generate_blog_handler(
    State(svc): State<BlogService>,
    payload: Result<Json<GenerateBlogPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(&AppError::MalformedBody(rejection.body_text())),
    };

    match svc.generate(payload).await {
        Ok(blog) => Json(ApiSuccess::new(BlogData { blog })).into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST `/submit-feedback` — record one polarity-tagged blog text.
pub async fn submit_feedback_handler(
    State(svc): State<BlogService>,
    payload: Result<Json<FeedbackPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(&AppError::MalformedBody(rejection.body_text())),
    };

    match svc.submit_feedback(payload) {
        Ok(totals) => {
            Json(ApiSuccess::with_message(totals, "Feedback submitted successfully")).into_response()
        }
        Err(err) => error_response(&err),
    }
}

/// GET `/get-feedback` — last 10 entries per polarity plus totals.
pub async fn get_feedback_handler(State(svc): State<BlogService>) -> Response {
    Json(ApiSuccess::new(svc.feedback_summary())).into_response()
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    if err.is_unexpected() {
        // Masked: internals never leak to the caller
        error!("Unhandled server error: {err}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new("Something went wrong on the server")),
        )
            .into_response();
    }

    let status = if err.is_configuration() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        // Validation and provider failures are client-attributable
        StatusCode::BAD_REQUEST
    };

    (status, Json(ApiError::new(err.to_string()))).into_response()
}
